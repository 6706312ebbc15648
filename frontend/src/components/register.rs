use crate::auth::{register, use_auth};
use crate::components::login::FormError;
use crate::i18n::use_i18n;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teebook_shared::forms::RegisterForm;
use teebook_shared::i18n::Messages;
use teebook_shared::route::AppRoute;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let i18n = use_i18n();

    let form = RwSignal::new(RegisterForm::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let failed = i18n.messages().auth.register_failed;
        let profile = match form.with_untracked(RegisterForm::validate) {
            Ok(profile) => profile,
            Err(err) => {
                set_error_msg.set(Some(format!("{failed}: {err}")));
                return;
            }
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            if let Err(err) = register(auth, profile).await {
                set_error_msg.set(Some(format!("{failed}: {}", err.user_message())));
            }
            set_is_submitting.set(false);
        });
    };

    // 文本输入框：字段名 + 取值/写入函数
    let field = move |id: &'static str,
                      kind: &'static str,
                      label: fn(&'static Messages) -> &'static str,
                      get: fn(&RegisterForm) -> String,
                      set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{move || label(i18n.messages())}</span>
                </label>
                <input
                    id=id
                    type=kind
                    class="input input-bordered"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">{move || i18n.messages().app_name}</h1>
                    <p class="text-base-content/70">{move || i18n.messages().auth.register}</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <FormError error=error_msg />

                        <div class="grid grid-cols-2 gap-4">
                            {field("first_name", "text", |m| m.auth.first_name, |f| f.first_name.clone(), |f, v| f.first_name = v)}
                            {field("last_name", "text", |m| m.auth.last_name, |f| f.last_name.clone(), |f, v| f.last_name = v)}
                        </div>
                        {field("email", "email", |m| m.auth.email, |f| f.email.clone(), |f, v| f.email = v)}
                        {field("password", "password", |m| m.auth.password, |f| f.password.clone(), |f, v| f.password = v)}
                        {field("handicap_index", "number", |m| m.auth.handicap_index, |f| f.handicap_index.clone(), |f, v| f.handicap_index = v)}

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        {i18n.messages().auth.registering}
                                    }.into_any()
                                } else {
                                    i18n.messages().auth.register.into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            {move || i18n.messages().auth.have_account} " "
                            <Link to=AppRoute::Login class="link link-primary">
                                {move || i18n.messages().auth.sign_in_here}
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
