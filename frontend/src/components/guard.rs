//! 守卫视图：等待指示器与拒绝访问

use crate::auth::{logout, use_auth};
use crate::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-3 bg-base-200">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="text-base-content/60">{move || i18n.messages().guard.loading}</span>
        </div>
    }
}

/// 已登录的非管理员停留在原地址，只显示这个视图
#[component]
pub fn AccessDeniedView() -> impl IntoView {
    let auth = use_auth();
    let i18n = use_i18n();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold text-error">
                        {move || i18n.messages().guard.access_denied_title}
                    </h1>
                    <p class="text-base-content/70">
                        {move || i18n.messages().guard.access_denied_body}
                    </p>
                    <button class="btn btn-outline" on:click=move |_| logout(&auth)>
                        {move || i18n.messages().auth.logout}
                    </button>
                </div>
            </div>
        </div>
    }
}
