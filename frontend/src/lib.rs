//! Nevado Trek 管理后台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `api`: 后端函数客户端
//! - `auth`: 会话状态管理
//! - `tours`: 行程管理的状态与异步操作（与 UI 无关，可原生测试）
//! - `web::route` / `web::router`: 路由定义与路由服务
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod dashboard;
    mod delete_dialog;
    mod icons;
    pub mod login;
    mod tour_dialog;
    pub mod tours_page;
}
pub mod config;
mod error;
mod tours;

// 浏览器 API 封装：HTTP 传输、控制台日志与 History 路由
pub mod web {
    mod console;
    mod http;
    pub mod route;
    pub mod router;

    pub use console::init_logging;
    pub use http::{FetchClient, HttpClient, HttpError, HttpRequest, HttpResponse};

    #[cfg(test)]
    pub(crate) use http::MockHttpClient;
}

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::tours_page::ToursPage;
use crate::config::AppConfig;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Tours => view! { <ToursPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 创建认证上下文（会话只存在于内存中，刷新页面即注销）
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
