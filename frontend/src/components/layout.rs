use crate::auth::{logout, use_auth};
use crate::i18n::use_i18n;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use teebook_shared::i18n::Language;
use teebook_shared::route::AppRoute;

/// 受保护页面的外框：侧边栏导航 + 顶栏
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let i18n = use_i18n();
    let router = use_router();

    let user_name = move || {
        auth.session()
            .map(|s| s.display_name())
            .unwrap_or_default()
    };

    let nav_items = AppRoute::NAVIGATION
        .into_iter()
        .map(|route| {
            let class = Signal::derive(move || {
                if router.current_route().get() == route {
                    "active".to_string()
                } else {
                    String::new()
                }
            });
            view! {
                <li>
                    <Link to=route class=class>
                        {move || i18n.messages().nav.label(route)}
                    </Link>
                </li>
            }
        })
        .collect_view();

    let on_language = move |ev| {
        i18n.set_language(Language::from_code(&event_target_value(&ev)));
    };

    view! {
        <div class="drawer lg:drawer-open">
            <input id="admin-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-none lg:hidden">
                        <label for="admin-drawer" class="btn btn-square btn-ghost">"☰"</label>
                    </div>
                    <div class="flex-1">
                        <span class="text-lg font-semibold">
                            {move || i18n.messages().welcome_back} ", " {user_name}
                        </span>
                    </div>
                    <div class="flex-none gap-2">
                        <label class="label gap-2">
                            <span class="label-text">{move || i18n.messages().language}</span>
                            <select class="select select-bordered select-sm" on:change=on_language>
                                {Language::ALL
                                    .into_iter()
                                    .map(|lang| view! {
                                        <option
                                            value=lang.code()
                                            selected=move || i18n.language() == lang
                                        >
                                            {lang.code().to_uppercase()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <button class="btn btn-outline btn-error btn-sm" on:click=move |_| logout(&auth)>
                            {move || i18n.messages().auth.logout}
                        </button>
                    </div>
                </div>
                <main class="p-4 md:p-8 space-y-6">{children()}</main>
            </div>
            <div class="drawer-side">
                <label for="admin-drawer" class="drawer-overlay"></label>
                <aside class="w-64 min-h-full bg-base-100">
                    <div class="p-4">
                        <div class="text-2xl font-bold text-primary">
                            {move || i18n.messages().app_name}
                        </div>
                        <div class="text-sm text-base-content/60">
                            {move || i18n.messages().admin_panel}
                        </div>
                    </div>
                    <ul class="menu p-4 gap-1">{nav_items}</ul>
                </aside>
            </div>
        </div>
    }
}

/// 页面标题行，右侧可放操作按钮
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] description: Option<Signal<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between gap-4">
            <div>
                <h1 class="text-2xl font-bold">{move || title.get()}</h1>
                {description.map(|d| view! {
                    <p class="text-base-content/70 text-sm">{move || d.get()}</p>
                })}
            </div>
            {children.map(|c| c())}
        </div>
    }
}
