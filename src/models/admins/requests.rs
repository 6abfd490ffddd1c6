use serde::Deserialize;

// 管理员登录请求
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

// 创建管理员（仅由命令行工具使用）
#[derive(Debug, Clone)]
pub struct CreateAdminRequest {
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}
