/*!
 * 会话认证中间件
 *
 * 校验请求中的会话 Cookie，确保只有以指定身份登录的客户端才能访问受保护的路由。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireSession;
 *
 * App::new().service(
 *     web::scope("/student")
 *         .service(
 *             web::scope("")
 *                 .wrap(RequireSession::student())
 *                 .route("/dashboard", web::get().to(dashboard_handler)),
 *         ),
 * );
 * ```
 *
 * 处理程序中提取身份：
 *
 * ```rust,ignore
 * let student_id = RequireSession::extract_student_id(&req);
 * ```
 *
 * ## 认证流程
 *
 * 1. 从 Cookie 中读取会话令牌并验证签名与过期时间
 * 2. 身份类型与路由要求一致时，写入请求扩展并继续处理
 * 3. 否则返回 401，且不会调用处理程序
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::utils::session::{SessionIdentity, SessionRole, SessionUtils};

use super::create_error_response;

pub const NOT_LOGGED_IN: &str = "Not logged in";

#[derive(Clone)]
pub struct RequireSession {
    role: SessionRole,
    enforce: bool,
}

impl RequireSession {
    /// 需要学生会话
    pub fn student() -> Self {
        Self {
            role: SessionRole::Student,
            enforce: true,
        }
    }

    /// 管理端报表：是否强制由 session.protect_admin_reports 决定
    pub fn admin_reports() -> Self {
        Self {
            role: SessionRole::Admin,
            enforce: AppConfig::get().session.protect_admin_reports,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
            role: self.role,
            enforce: self.enforce,
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
    role: SessionRole,
    enforce: bool,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let role = self.role;
        let enforce = self.enforce;

        Box::pin(async move {
            // 身份类型不符的会话视为未登录
            let identity = SessionUtils::extract_identity(&req).filter(|id| id.role() == role);

            match identity {
                Some(identity) => {
                    debug!(
                        "Session authenticated: {:?} {} for {}",
                        identity.role(),
                        identity.id(),
                        req.path()
                    );
                    req.extensions_mut().insert(identity);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                None if !enforce => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                None => {
                    info!(
                        "Session check failed for request to {} (required: {:?})",
                        req.path(),
                        role
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, NOT_LOGGED_IN)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取会话身份
impl RequireSession {
    /// 从请求扩展中提取会话身份
    /// 此函数应该在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_identity(req: &actix_web::HttpRequest) -> Option<SessionIdentity> {
        req.extensions().get::<SessionIdentity>().copied()
    }

    /// 从请求扩展中提取学生ID
    pub fn extract_student_id(req: &actix_web::HttpRequest) -> Option<i64> {
        Self::extract_identity(req).and_then(|identity| identity.student_id())
    }
}
