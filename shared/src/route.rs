//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、访问级别以及守卫判定。

use crate::{Role, Session};
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    Login,
    Register,
    /// 控制面板 (默认路由)
    #[default]
    Dashboard,
    Users,
    Courses,
    TeeTimes,
    Bookings,
    Competitions,
}

/// 路由访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// 需要管理员会话
    Protected,
    /// 仅在没有管理员会话时可访问
    Public,
}

impl AppRoute {
    pub const ALL: [AppRoute; 8] = [
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Dashboard,
        AppRoute::Users,
        AppRoute::Courses,
        AppRoute::TeeTimes,
        AppRoute::Bookings,
        AppRoute::Competitions,
    ];

    /// 侧边栏导航顺序
    pub const NAVIGATION: [AppRoute; 6] = [
        AppRoute::Dashboard,
        AppRoute::Users,
        AppRoute::Courses,
        AppRoute::TeeTimes,
        AppRoute::Bookings,
        AppRoute::Competitions,
    ];

    /// 将 URL path 解析为路由枚举，未知路径返回 `None`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            "/users" => Some(Self::Users),
            "/courses" => Some(Self::Courses),
            "/tee-times" => Some(Self::TeeTimes),
            "/bookings" => Some(Self::Bookings),
            "/competitions" => Some(Self::Competitions),
            _ => None,
        }
    }

    /// `/` 与未知路径都落到控制面板
    pub fn resolve(path: &str) -> Self {
        Self::from_path(path).unwrap_or_default()
    }

    /// 解析地址，并在地址不是规范形式时给出应替换成的 path
    pub fn resolve_canonical(path: &str) -> (Self, Option<&'static str>) {
        let route = Self::resolve(path);
        let canonical = route.to_path();
        (route, (canonical != path).then_some(canonical))
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Courses => "/courses",
            Self::TeeTimes => "/tee-times",
            Self::Bookings => "/bookings",
            Self::Competitions => "/competitions",
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Login | Self::Register => RouteAccess::Public,
            Self::Dashboard
            | Self::Users
            | Self::Courses
            | Self::TeeTimes
            | Self::Bookings
            | Self::Competitions => RouteAccess::Protected,
        }
    }

    /// 未认证访问受保护路由时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 管理员访问公开路由时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 守卫 (Guard)
// =========================================================

/// 认证阶段，完全由会话存储推导
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// 初始恢复尚未完成
    Loading,
    Unauthenticated,
    NonAdmin,
    Admin,
}

impl AuthPhase {
    pub fn from_role(rehydrating: bool, role: Option<Role>) -> Self {
        if rehydrating {
            return AuthPhase::Loading;
        }
        match role {
            None => AuthPhase::Unauthenticated,
            Some(Role::Admin) => AuthPhase::Admin,
            Some(Role::User) => AuthPhase::NonAdmin,
        }
    }

    pub fn from_session(rehydrating: bool, session: Option<&Session>) -> Self {
        Self::from_role(rehydrating, session.map(Session::role))
    }
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 显示中性的等待指示器
    Waiting,
    Render(AppRoute),
    Redirect(AppRoute),
    /// 已登录但不是管理员：原地显示拒绝访问，不跳转
    AccessDenied,
}

/// **核心守卫逻辑**
pub fn guard(route: AppRoute, phase: AuthPhase) -> GuardOutcome {
    match (route.access(), phase) {
        (_, AuthPhase::Loading) => GuardOutcome::Waiting,
        (RouteAccess::Protected, AuthPhase::Unauthenticated) => {
            GuardOutcome::Redirect(AppRoute::auth_failure_redirect())
        }
        (RouteAccess::Protected, AuthPhase::NonAdmin) => GuardOutcome::AccessDenied,
        (RouteAccess::Protected, AuthPhase::Admin) => GuardOutcome::Render(route),
        (RouteAccess::Public, AuthPhase::Admin) => {
            GuardOutcome::Redirect(AppRoute::auth_success_redirect())
        }
        (RouteAccess::Public, AuthPhase::Unauthenticated | AuthPhase::NonAdmin) => {
            GuardOutcome::Render(route)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [AuthPhase; 4] = [
        AuthPhase::Loading,
        AuthPhase::Unauthenticated,
        AuthPhase::NonAdmin,
        AuthPhase::Admin,
    ];

    #[test]
    fn test_path_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.to_path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/users/"), Some(AppRoute::Users));
        assert_eq!(AppRoute::from_path("/"), None);
        assert_eq!(AppRoute::resolve("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::resolve("/nowhere"), AppRoute::Dashboard);
    }

    #[test]
    fn test_non_canonical_paths_are_rewritten() {
        assert_eq!(AppRoute::resolve_canonical("/users"), (AppRoute::Users, None));
        assert_eq!(
            AppRoute::resolve_canonical("/"),
            (AppRoute::Dashboard, Some("/dashboard"))
        );
        assert_eq!(
            AppRoute::resolve_canonical("/nowhere"),
            (AppRoute::Dashboard, Some("/dashboard"))
        );
        assert_eq!(
            AppRoute::resolve_canonical("/courses/"),
            (AppRoute::Courses, Some("/courses"))
        );
    }

    #[test]
    fn test_only_admin_renders_protected_content() {
        for route in AppRoute::ALL
            .into_iter()
            .filter(|r| r.access() == RouteAccess::Protected)
        {
            for phase in PHASES {
                let rendered = guard(route, phase) == GuardOutcome::Render(route);
                assert_eq!(rendered, phase == AuthPhase::Admin, "{route} {phase:?}");
            }
        }
    }

    #[test]
    fn test_admin_never_sees_public_screens() {
        for route in [AppRoute::Login, AppRoute::Register] {
            assert_eq!(
                guard(route, AuthPhase::Admin),
                GuardOutcome::Redirect(AppRoute::Dashboard)
            );
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        assert_eq!(
            guard(AppRoute::Courses, AuthPhase::Unauthenticated),
            GuardOutcome::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(AppRoute::Login, AuthPhase::Unauthenticated),
            GuardOutcome::Render(AppRoute::Login)
        );
    }

    #[test]
    fn test_non_admin_gets_access_denied_not_redirect() {
        assert_eq!(
            guard(AppRoute::Users, AuthPhase::NonAdmin),
            GuardOutcome::AccessDenied
        );
        assert_eq!(
            guard(AppRoute::Login, AuthPhase::NonAdmin),
            GuardOutcome::Render(AppRoute::Login)
        );
    }

    #[test]
    fn test_loading_waits_everywhere() {
        for route in AppRoute::ALL {
            assert_eq!(guard(route, AuthPhase::Loading), GuardOutcome::Waiting);
        }
    }

    #[test]
    fn test_phase_from_role() {
        assert_eq!(AuthPhase::from_role(true, Some(Role::Admin)), AuthPhase::Loading);
        assert_eq!(AuthPhase::from_role(false, None), AuthPhase::Unauthenticated);
        assert_eq!(AuthPhase::from_role(false, Some(Role::User)), AuthPhase::NonAdmin);
        assert_eq!(AuthPhase::from_role(false, Some(Role::Admin)), AuthPhase::Admin);
    }
}
