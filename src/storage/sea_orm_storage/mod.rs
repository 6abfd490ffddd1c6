//! SeaORM 存储实现
//!
//! 基于 MySQL 连接池的数据库存储层。表结构与存储过程由数据库侧维护，这里不做迁移。

mod admins;
mod dropdowns;
mod feedback;
mod students;

use crate::config::AppConfig;
use crate::errors::{FeedbackError, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = Self::connect(&db_url, config).await?;

        // 启动时确认数据库可达，避免首个请求才暴露配置错误
        db.ping()
            .await
            .map_err(|e| FeedbackError::database_connection(format!("数据库不可用: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", Self::redact_url(&db_url));

        Ok(Self { db })
    }

    /// 使用已有连接创建存储（测试中传入 MockDatabase 连接）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 连接池：每个存储调用借出一个连接，结束时归还
    async fn connect(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| FeedbackError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 校验 URL 并统一为 mysql:// 形式
    fn build_database_url(url: &str) -> Result<String> {
        let url = url.trim();
        if url.starts_with("mysql://") {
            Ok(url.to_string())
        } else if let Some(rest) = url.strip_prefix("mariadb://") {
            Ok(format!("mysql://{rest}"))
        } else {
            Err(FeedbackError::database_config(format!(
                "不支持的数据库 URL: {}. 需要 mysql:// 或 mariadb://（依赖存储过程）",
                Self::redact_url(url)
            )))
        }
    }

    /// 日志中隐藏连接密码
    fn redact_url(url: &str) -> String {
        match (url.find("://"), url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &url[scheme_end + 3..at];
                match credentials.split_once(':') {
                    Some((user, _)) => {
                        format!("{}{}:***{}", &url[..scheme_end + 3], user, &url[at..])
                    }
                    None => url.to_string(),
                }
            }
            _ => url.to_string(),
        }
    }
}

/// 数据库错误映射：唯一约束冲突保持原类别，其余错误附加操作上下文
pub(crate) fn map_db_err(context: &'static str) -> impl Fn(DbErr) -> FeedbackError {
    move |e| match FeedbackError::from(e) {
        err @ FeedbackError::ConstraintViolation(_) => err,
        err => FeedbackError::database_operation(format!("{context}: {}", err.message())),
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: RegisterStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>> {
        self.get_student_by_roll_number_impl(roll_number).await
    }

    async fn list_student_assignments(&self, student_id: i64) -> Result<Vec<StudentAssignment>> {
        self.list_student_assignments_impl(student_id).await
    }

    // 反馈模块
    async fn submit_feedback(
        &self,
        student_id: i64,
        assignment_id: i64,
        feedback: FeedbackRequest,
    ) -> Result<()> {
        self.submit_feedback_impl(student_id, assignment_id, feedback)
            .await
    }

    async fn generate_teacher_summary(
        &self,
        teacher_id: i64,
        filter: AcademicFilter,
    ) -> Result<Vec<TeacherSummaryRow>> {
        self.generate_teacher_summary_impl(teacher_id, filter).await
    }

    // 管理员模块
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.get_admin_by_username_impl(username).await
    }

    async fn create_admin(&self, admin: CreateAdminRequest) -> Result<Admin> {
        self.create_admin_impl(admin).await
    }

    async fn list_teacher_overview(&self, scope: AcademicScope) -> Result<Vec<TeacherOverview>> {
        self.list_teacher_overview_impl(scope).await
    }

    // 下拉数据
    async fn list_dropdowns(&self) -> Result<DropdownResponse> {
        self.list_dropdowns_impl().await
    }
}
