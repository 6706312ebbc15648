//! UI 组件层
//!
//! 页面组件只读写自己的 `Screen` 状态，共享的表格行占位放在这里。

pub mod bookings;
pub mod competitions;
pub mod courses;
pub mod dashboard;
pub mod guard;
pub mod layout;
pub mod login;
pub mod modal;
pub mod register;
pub mod tee_times;
pub mod toast;
pub mod users;

use leptos::prelude::*;

/// 表格加载中占位行
#[component]
pub fn LoadingRow(when: Signal<bool>, colspan: u32) -> impl IntoView {
    let colspan = colspan.to_string();
    view! {
        <Show when=move || when.get()>
            <tr>
                <td colspan=colspan.clone() class="text-center py-8">
                    <span class="loading loading-spinner loading-md text-primary"></span>
                </td>
            </tr>
        </Show>
    }
}

/// 表格空数据占位行
#[component]
pub fn EmptyRow(when: Signal<bool>, colspan: u32, text: &'static str) -> impl IntoView {
    let colspan = colspan.to_string();
    view! {
        <Show when=move || when.get()>
            <tr>
                <td colspan=colspan.clone() class="text-center py-8 text-base-content/60">{text}</td>
            </tr>
        </Show>
    }
}
