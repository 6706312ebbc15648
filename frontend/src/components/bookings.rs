use crate::components::layout::PageHeader;
use crate::components::toast::NoticeToast;
use crate::components::{EmptyRow, LoadingRow};
use crate::i18n::use_i18n;
use crate::screen::Screen;
use leptos::prelude::*;
use teebook_admin::resources::Bookings;
use teebook_shared::format::format_date;

/// 只读的预订列表
#[component]
pub fn BookingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let screen = Screen::<Bookings>::mount();

    let rows = move || {
        screen
            .with_snapshot(|s| s.rows())
            .into_iter()
            .map(|row| {
                let badge = if row.confirmed {
                    "badge badge-success"
                } else {
                    "badge badge-warning"
                };
                view! {
                    <tr>
                        <td>
                            <div class="font-semibold">{row.user_name}</div>
                            <div class="text-sm text-base-content/60">{row.user_email}</div>
                        </td>
                        <td>{row.course_name}</td>
                        <td>{format_date(&row.date)}</td>
                        <td class="font-mono">{row.time}</td>
                        <td>{row.players_count}</td>
                        <td><span class=badge>{row.status}</span></td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <NoticeToast notice=screen.notice() on_dismiss=screen.dismiss() />

        <PageHeader title=move || i18n.messages().nav.bookings.to_string() description="All reservations across courses" />

        <div class="card bg-base-100 shadow-xl">
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Player"</th>
                            <th>"Course"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Players"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <LoadingRow when=Signal::derive(move || screen.is_loading()) colspan=6 />
                        <EmptyRow
                            when=Signal::derive(move || !screen.is_loading() && screen.with_snapshot(|s| s.bookings.is_empty()))
                            colspan=6
                            text="No bookings yet."
                        />
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
