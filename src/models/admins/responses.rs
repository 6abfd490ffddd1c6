use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub admin_id: i64,
}
