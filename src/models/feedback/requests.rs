use serde::Deserialize;

// 反馈提交请求，评分范围由存储过程校验
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub rating_knowledge: i32,
    pub rating_communication: i32,
    pub rating_punctuality: i32,
    pub rating_overall: i32,
    #[serde(default)]
    pub comment: Option<String>,
}
