use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StudentLoginResponse {
    pub student_id: i64,
}
