//! TeeBook 管理后台前端
//!
//! 采用 Context-Driven 架构：
//! - `auth`: 会话上下文，包装 `SessionStore`
//! - `i18n`: 界面语言上下文
//! - `screen`: 把 `ScreenController` 接到 Leptos 信号上
//! - `web`: 浏览器原生 API 封装与路由服务
//! - `components`: UI 组件层

mod api;
mod auth;
mod components;
mod i18n;
mod screen;
mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::bookings::BookingsPage;
use crate::components::competitions::CompetitionsPage;
use crate::components::courses::CoursesPage;
use crate::components::dashboard::DashboardPage;
use crate::components::guard::{AccessDeniedView, LoadingView};
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::tee_times::TeeTimesPage;
use crate::components::users::UsersPage;
use crate::i18n::I18nContext;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;
use teebook_shared::route::AppRoute;

pub use web::init_tracing;

/// 路由匹配函数
///
/// 公开页面独立渲染，受保护页面包在后台布局里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <AdminLayout><DashboardPage /></AdminLayout> }.into_any(),
        AppRoute::Users => view! { <AdminLayout><UsersPage /></AdminLayout> }.into_any(),
        AppRoute::Courses => view! { <AdminLayout><CoursesPage /></AdminLayout> }.into_any(),
        AppRoute::TeeTimes => view! { <AdminLayout><TeeTimesPage /></AdminLayout> }.into_any(),
        AppRoute::Bookings => view! { <AdminLayout><BookingsPage /></AdminLayout> }.into_any(),
        AppRoute::Competitions => {
            view! { <AdminLayout><CompetitionsPage /></AdminLayout> }.into_any()
        }
    }
}

fn waiting() -> AnyView {
    view! { <LoadingView /> }.into_any()
}

fn denied() -> AnyView {
    view! { <AccessDeniedView /> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证与语言上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_context(I18nContext::new());

    // 2. 会话已从 LocalStorage 恢复，结束等待状态
    init_auth(&auth_ctx);

    // 3. 认证阶段注入路由服务，由守卫决定渲染什么
    view! {
        <Router phase=auth_ctx.phase_signal()>
            <RouterOutlet matcher=route_matcher waiting=waiting denied=denied />
        </Router>
    }
}
