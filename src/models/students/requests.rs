use serde::Deserialize;

use crate::models::common::filters::deserialize_id;

// 学生注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterStudentRequest {
    pub name: String,
    pub email: String,
    /// 进入存储层前替换为哈希值
    pub password: String,
    pub roll_number: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub branch_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub year_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub semester_id: i64,
}

impl RegisterStudentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.roll_number.trim().is_empty() {
            return Err("roll_number must not be empty");
        }
        if self.password.is_empty() {
            return Err("password must not be empty");
        }
        Ok(())
    }
}

// 学生登录请求
#[derive(Debug, Deserialize)]
pub struct StudentLoginRequest {
    pub roll_number: String,
    pub password: String,
}
