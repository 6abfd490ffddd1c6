use std::sync::Arc;

use crate::models::{
    AcademicFilter, AcademicScope,
    admins::{
        entities::{Admin, TeacherOverview},
        requests::CreateAdminRequest,
    },
    dropdowns::DropdownResponse,
    feedback::{FeedbackRequest, TeacherSummaryRow},
    students::{
        entities::{Student, StudentAssignment},
        requests::RegisterStudentRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据访问层
///
/// 每个方法只执行一条语句或一次存储过程调用，所有请求数据都以绑定参数传入。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 注册学生（password 字段此时已是哈希值）
    async fn create_student(&self, student: RegisterStudentRequest) -> Result<Student>;
    // 通过学号获取学生信息
    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>>;
    // 列出学生所在专业/学年/学期的全部授课安排
    async fn list_student_assignments(&self, student_id: i64) -> Result<Vec<StudentAssignment>>;

    /// 反馈方法
    // 调用 submit_feedback 存储过程；重复提交由数据库唯一约束拒绝
    async fn submit_feedback(
        &self,
        student_id: i64,
        assignment_id: i64,
        feedback: FeedbackRequest,
    ) -> Result<()>;
    // 调用 generate_teacher_summary 存储过程
    async fn generate_teacher_summary(
        &self,
        teacher_id: i64,
        filter: AcademicFilter,
    ) -> Result<Vec<TeacherSummaryRow>>;

    /// 管理员方法
    // 通过用户名获取管理员
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>>;
    // 创建管理员
    async fn create_admin(&self, admin: CreateAdminRequest) -> Result<Admin>;
    // 列出指定范围内的教师、科目及统计
    async fn list_teacher_overview(&self, scope: AcademicScope) -> Result<Vec<TeacherOverview>>;

    /// 下拉数据
    async fn list_dropdowns(&self) -> Result<DropdownResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
