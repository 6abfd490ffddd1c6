use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::Serialize;

// 管理员
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Admin {
    pub admin_id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

// 管理面板中的一行：教师、所授科目及其汇总统计（尚无反馈时统计为空）
// 平均分按 DECIMAL 原样读取，序列化为字符串
#[derive(Debug, Clone, Serialize, PartialEq, FromQueryResult)]
pub struct TeacherOverview {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subject_id: i64,
    pub subject_name: String,
    pub avg_overall_rating: Option<Decimal>,
    pub total_feedbacks: Option<i64>,
}
