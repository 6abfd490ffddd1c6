pub mod requests;

pub use requests::FeedbackRequest;

/// 存储过程返回的汇总行，列由数据库侧决定
pub type TeacherSummaryRow = serde_json::Value;
