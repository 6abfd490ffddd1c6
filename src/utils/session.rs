//! 会话令牌
//!
//! 登录成功后签发一个 HS256 令牌，写入 HttpOnly Cookie。令牌中只携带一个身份
//! （学生或管理员）及过期时间；服务端不保存会话状态。

use crate::config::AppConfig;
use actix_web::dev::ServiceRequest;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// 会话角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Student,
    Admin,
}

/// 会话身份，一个会话至多持有一个
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIdentity {
    Student(i64),
    Admin(i64),
}

impl SessionIdentity {
    pub fn role(&self) -> SessionRole {
        match self {
            SessionIdentity::Student(_) => SessionRole::Student,
            SessionIdentity::Admin(_) => SessionRole::Admin,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            SessionIdentity::Student(id) | SessionIdentity::Admin(id) => *id,
        }
    }

    pub fn student_id(&self) -> Option<i64> {
        match self {
            SessionIdentity::Student(id) => Some(*id),
            SessionIdentity::Admin(_) => None,
        }
    }
}

// 会话 Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,       // Subject (student_id / admin_id)
    pub role: SessionRole, // 身份类型
    pub exp: usize,        // Expiration time (时间戳)
    pub iat: usize,        // Issued at (签发时间)
}

impl SessionClaims {
    fn into_identity(self) -> Result<SessionIdentity, jsonwebtoken::errors::Error> {
        let id = self
            .sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject)?;
        Ok(match self.role {
            SessionRole::Student => SessionIdentity::Student(id),
            SessionRole::Admin => SessionIdentity::Admin(id),
        })
    }
}

pub struct SessionUtils;

impl SessionUtils {
    // 获取会话签名密钥
    fn get_secret() -> String {
        AppConfig::get().session.secret.clone()
    }

    /// 使用全局配置签发会话令牌
    pub fn issue_token(identity: SessionIdentity) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::issue_token_with(
            identity,
            Self::get_secret().as_bytes(),
            chrono::Duration::minutes(config.session.ttl_minutes),
        )
    }

    /// 使用指定密钥和有效期签发会话令牌
    pub fn issue_token_with(
        identity: SessionIdentity,
        secret: &[u8],
        ttl: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + ttl;

        let claims = SessionClaims {
            sub: identity.id().to_string(),
            role: identity.role(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
    }

    /// 使用全局配置验证会话令牌
    pub fn verify_token(token: &str) -> Result<SessionIdentity, jsonwebtoken::errors::Error> {
        Self::verify_token_with(token, Self::get_secret().as_bytes())
    }

    /// 验证签名与过期时间，返回会话身份
    pub fn verify_token_with(
        token: &str,
        secret: &[u8],
    ) -> Result<SessionIdentity, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret);
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation)?
            .claims
            .into_identity()
    }

    /// 创建会话 Cookie
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.session.cookie_name.clone(), token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::minutes(
                config.session.ttl_minutes,
            ))
            .same_site(config.session_same_site().unwrap_or(SameSite::Lax))
            .http_only(true)
            .secure(config.session.cookie_secure)
            .finish()
    }

    /// 创建空的会话 Cookie（用于登出）
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.session.cookie_name.clone(), "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(config.session_same_site().unwrap_or(SameSite::Lax))
            .http_only(true)
            .secure(config.session.cookie_secure)
            .finish()
    }

    /// 从请求 Cookie 中解析会话身份；缺失、过期或签名无效时返回 None
    pub fn extract_identity(req: &ServiceRequest) -> Option<SessionIdentity> {
        let cookie_name = &AppConfig::get().session.cookie_name;
        let cookie = req.cookie(cookie_name)?;
        match Self::verify_token(cookie.value()) {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::debug!("Session cookie rejected: {}", err);
                None
            }
        }
    }
}
