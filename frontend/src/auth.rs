//! 认证模块
//!
//! 管理管理员会话，与路由系统解耦：路由服务只通过注入的认证信号检查状态。
//! 上下文在 `App` 中创建一次并通过 Context 提供，会话只存在于内存中。

use leptos::prelude::*;

use crate::api::TrekApi;
use crate::config::AppConfig;
use crate::web::{FetchClient, HttpClient};

/// 登录失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter an access token.")]
    EmptyToken,
    #[error("Invalid token or connection failed.")]
    Rejected,
}

/// 已认证会话
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// 认证状态
#[derive(Clone, Debug)]
pub struct AuthState<C = FetchClient> {
    /// 未携带 token 的基础客户端，用于验证
    base_api: TrekApi<C>,
    /// 仅在认证成功后存在
    session: Option<Session>,
    /// 是否正在验证 token
    pub is_verifying: bool,
}

impl<C: HttpClient + Clone> AuthState<C> {
    pub fn new(base_api: TrekApi<C>) -> Self {
        Self {
            base_api,
            session: None,
            is_verifying: false,
        }
    }

    /// 认证标志由会话是否存在推导
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// 携带会话 token 的 API 客户端；未认证时为 None
    pub fn session_api(&self) -> Option<TrekApi<C>> {
        self.session
            .as_ref()
            .map(|session| self.base_api.authorized(session.token()))
    }

    pub fn base_api(&self) -> &TrekApi<C> {
        &self.base_api
    }

    /// 保存 token 并建立会话
    pub fn login(&mut self, token: &str) {
        self.session = Some(Session {
            token: token.to_string(),
        });
        self.is_verifying = false;
    }

    /// 清除会话
    pub fn logout(&mut self) {
        self.session = None;
        self.is_verifying = false;
    }
}

/// 校验输入并向后端验证 token，成功时返回规范化后的 token
pub async fn verify_login<C: HttpClient + Clone>(
    api: &TrekApi<C>,
    token: &str,
) -> Result<String, LoginError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(LoginError::EmptyToken);
    }

    if api.verify_token(token).await {
        Ok(token.to_string())
    } else {
        Err(LoginError::Rejected)
    }
}

// =========================================================
// Leptos 上下文
// =========================================================

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new(config: &AppConfig) -> Self {
        let (state, set_state) = signal(AuthState::new(TrekApi::new(config.api_url.clone())));
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::is_authenticated))
    }

    /// 当前会话的 API 客户端
    pub fn api(&self) -> Option<TrekApi> {
        self.state.with_untracked(AuthState::session_api)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 验证 token 并登录
pub async fn login(ctx: &AuthContext, token: String) -> Result<(), LoginError> {
    ctx.set_state.update(|state| state.is_verifying = true);
    let base_api = ctx.state.with_untracked(|state| state.base_api().clone());

    match verify_login(&base_api, &token).await {
        Ok(token) => {
            ctx.set_state.update(|state| state.login(&token));
            tracing::info!("administrator signed in");
            Ok(())
        }
        Err(e) => {
            ctx.set_state.update(|state| state.logout());
            Err(e)
        }
    }
}

/// 注销并清除状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(AuthState::logout);
    tracing::info!("administrator signed out");
}
