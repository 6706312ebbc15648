use leptos::prelude::*;

/// 原生 `<dialog>` 模态框，由 `open` 信号驱动
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{move || title.get()}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// 对话框底部的取消 / 提交按钮
#[component]
pub fn ModalActions(
    open: RwSignal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] submit_label: Signal<&'static str>,
    #[prop(into)] cancel_label: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="modal-action">
            <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                {move || cancel_label.get()}
            </button>
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() {
                    view! { <span class="loading loading-spinner loading-sm"></span> }.into_any()
                } else {
                    submit_label.get().into_any()
                }}
            </button>
        </div>
    }
}
