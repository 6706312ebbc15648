//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 路由本身不做判断：每次路由或认证阶段变化都交给共享库的 [`guard`]，
//! 按判定结果渲染、重定向或显示拒绝访问。

use leptos::prelude::*;
use teebook_shared::route::{AppRoute, AuthPhase, GuardOutcome, guard};
use tracing::debug;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 读取当前地址；`/` 与未知地址就地改写为实际渲染的路由
fn resolve_current_location() -> AppRoute {
    let (route, rewrite) = AppRoute::resolve_canonical(&current_path());
    if let Some(path) = rewrite {
        replace_history_state(path);
    }
    route
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向使用 replace，避免后退键回到被拦截的地址
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 认证阶段以信号形式注入，路由器不依赖认证模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    outcome: Memo<GuardOutcome>,
}

impl RouterService {
    fn new(phase: Signal<AuthPhase>) -> Self {
        let initial_route = resolve_current_location();
        let (current_route, set_route) = signal(initial_route);
        let outcome = Memo::new(move |_| guard(current_route.get(), phase.get()));

        Self {
            current_route,
            set_route,
            outcome,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn outcome(&self) -> Memo<GuardOutcome> {
        self.outcome
    }

    /// 用户发起的导航，守卫在路由信号变化后统一执行
    pub fn navigate(&self, route: AppRoute) {
        if self.current_route.get_untracked() == route {
            return;
        }
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(resolve_current_location());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 守卫判定为重定向时立即跳转；登录、登出、恢复完成都会经过这里
    fn setup_guard_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let outcome = self.outcome;

        Effect::new(move |_| {
            if let GuardOutcome::Redirect(target) = outcome.get() {
                debug!(from = %current_route.get_untracked(), to = %target, "guard redirect");
                replace_history_state(target.to_path());
                set_route.set(target);
            }
        });
    }
}

fn provide_router(phase: Signal<AuthPhase>) -> RouterService {
    let router = RouterService::new(phase);

    router.init_popstate_listener();
    router.setup_guard_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证阶段信号
    phase: Signal<AuthPhase>,
    children: Children,
) -> impl IntoView {
    provide_router(phase);

    children()
}

/// 路由出口组件
///
/// 只在守卫放行时调用 `matcher`；等待与重定向期间显示 `waiting`，
/// 非管理员显示 `denied`。
#[component]
pub fn RouterOutlet(
    matcher: fn(AppRoute) -> AnyView,
    waiting: fn() -> AnyView,
    denied: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.outcome().get() {
        GuardOutcome::Render(route) => matcher(route),
        GuardOutcome::AccessDenied => denied(),
        GuardOutcome::Waiting | GuardOutcome::Redirect(_) => waiting(),
    }
}

/// 站内链接，拦截默认跳转交给路由服务
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
