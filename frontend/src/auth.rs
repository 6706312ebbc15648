//! 认证模块
//!
//! 持有浏览器端唯一的 [`SessionStore`]，向路由服务暴露派生的 [`AuthPhase`]。
//! 登录、注册、登出只改这里的状态，页面跳转由路由守卫完成。

use crate::api;
use crate::web::{BrowserStorage, FetchClient};
use leptos::prelude::*;
use teebook_admin::{AdminResult, ApiGateway, SessionStore};
use teebook_shared::route::AuthPhase;
use teebook_shared::{RegisterProfile, Session};

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    /// 首次恢复完成前为 `true`
    rehydrating: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(BrowserStorage)),
            rehydrating: RwSignal::new(true),
        }
    }

    pub fn phase_signal(&self) -> Signal<AuthPhase> {
        let store = self.store;
        let rehydrating = self.rehydrating;
        Signal::derive(move || {
            let role = store.with(|s| s.session().map(Session::role));
            AuthPhase::from_role(rehydrating.get(), role)
        })
    }

    pub fn session(&self) -> Option<Session> {
        self.store.with(|s| s.session().cloned())
    }

    /// 带当前 token 的网关
    pub fn gateway(&self) -> ApiGateway<FetchClient> {
        let token = self.store.with_untracked(|s| s.token().map(str::to_string));
        api::gateway(token.as_deref())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 结束恢复阶段
///
/// 会话在构造 [`AuthContext`] 时已从 LocalStorage 同步读取，挂载后才放开守卫。
pub fn init_auth(ctx: &AuthContext) {
    ctx.rehydrating.set(false);
}

/// 在副本上执行异步操作，完成后整体写回，避免跨 await 持有信号借用
pub async fn login(ctx: AuthContext, email: String, password: String) -> AdminResult<Session> {
    let gateway = api::gateway(None);
    let mut store = ctx.store.get_untracked();
    let result = store.login(&gateway, &email, &password).await;
    ctx.store.set(store);
    result
}

pub async fn register(ctx: AuthContext, profile: RegisterProfile) -> AdminResult<Session> {
    let gateway = api::gateway(None);
    let mut store = ctx.store.get_untracked();
    let result = store.register(&gateway, &profile).await;
    ctx.store.set(store);
    result
}

/// 注销；导航由路由守卫监听认证阶段自动处理
pub fn logout(ctx: &AuthContext) {
    ctx.store.update(SessionStore::logout);
}
