use crate::api;
use crate::i18n::use_i18n;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teebook_admin::Notice;

/// 右上角通知
///
/// 每条通知显示 `notice_timeout_ms` 后自动关闭；期间被新通知替换时，
/// 旧计时器按 `seq` 判断不会误关新通知。
#[component]
pub fn NoticeToast(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    let i18n = use_i18n();

    Effect::new(move |_| {
        if let Some(seq) = notice.with(|n| n.as_ref().map(|n| n.seq)) {
            let timeout = api::config().notice_timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                on_dismiss.run(seq);
            });
        }
    });

    move || {
        notice.get().map(|n| {
            let class = if n.is_error() {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            let seq = n.seq;
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class role="alert">
                        <span>{n.text(i18n.language())}</span>
                        <button class="btn btn-ghost btn-xs" on:click=move |_| on_dismiss.run(seq)>
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
