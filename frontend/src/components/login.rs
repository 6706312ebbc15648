use crate::auth::{login, use_auth};
use crate::i18n::use_i18n;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teebook_shared::route::AppRoute;

/// 表单顶部的错误提示
#[component]
pub fn FormError(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 登录页
///
/// 成功后不在这里跳转：会话写入后守卫把管理员带到仪表盘，非管理员看到拒绝访问。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let i18n = use_i18n();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let failed = i18n.messages().auth.login_failed;
        spawn_local(async move {
            if let Err(err) = login(auth, email.get_untracked(), password.get_untracked()).await {
                set_error_msg.set(Some(format!("{failed}: {}", err.user_message())));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">{move || i18n.messages().app_name}</h1>
                    <p class="text-base-content/70">{move || i18n.messages().admin_panel}</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <FormError error=error_msg />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{move || i18n.messages().auth.email}</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="admin@teebook.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{move || i18n.messages().auth.password}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        {i18n.messages().auth.signing_in}
                                    }.into_any()
                                } else {
                                    i18n.messages().auth.sign_in.into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            {move || i18n.messages().auth.no_account} " "
                            <Link to=AppRoute::Register class="link link-primary">
                                {move || i18n.messages().auth.register_here}
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
