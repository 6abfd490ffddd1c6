//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub student_id: i64,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub roll_number: String,
    pub branch_id: i64,
    pub year_id: i64,
    pub semester_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;

        Student {
            student_id: self.student_id,
            name: self.first_name,
            email: self.email,
            password_hash: self.password_hash,
            roll_number: self.roll_number,
            branch_id: self.branch_id,
            year_id: self.year_id,
            semester_id: self.semester_id,
        }
    }
}
