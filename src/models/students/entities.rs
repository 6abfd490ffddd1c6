use sea_orm::FromQueryResult;
use serde::Serialize;

// 学生
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roll_number: String,
    pub branch_id: i64,
    pub year_id: i64,
    pub semester_id: i64,
}

// 学生面板中的一条可评价课程（教师 + 科目）
#[derive(Debug, Clone, Serialize, PartialEq, FromQueryResult)]
pub struct StudentAssignment {
    pub assignment_id: i64,
    pub subject_code: String,
    pub subject_name: String,
    pub teacher_name: String,
}
