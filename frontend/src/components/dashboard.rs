use crate::components::layout::PageHeader;
use crate::components::toast::NoticeToast;
use crate::i18n::use_i18n;
use crate::screen::Screen;
use leptos::prelude::*;
use teebook_admin::resources::Dashboard;
use teebook_shared::format::{format_currency, format_number, format_percentage};
use teebook_shared::DashboardStats;
use teebook_shared::i18n::DashboardMessages;
use teebook_shared::metrics::{DashboardMetrics, SlotShare, TimeSlot};

#[component]
fn StatCard(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] note: Option<Signal<String>>,
    #[prop(default = "text-primary")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{move || title.get()}</div>
            <div class=format!("stat-value {accent}")>{move || value.get()}</div>
            {note.map(|n| view! { <div class="stat-desc">{move || n.get()}</div> })}
        </div>
    }
}

#[component]
fn SlotBar(#[prop(into)] label: Signal<String>, share: Signal<SlotShare>) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-sm">
                <span>{move || label.get()}</span>
                <span class="text-base-content/70">
                    {move || format!("{} ({}%)", share.get().count, share.get().percentage)}
                </span>
            </div>
            <progress class="progress progress-primary w-full" max="100" value=move || share.get().percentage.to_string()></progress>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();
    let screen = Screen::<Dashboard>::mount();

    // 快照变化时重新聚合
    let metrics = Memo::new(move |_| screen.with_snapshot(|s| s.metrics()));
    let m = move |f: fn(&DashboardMetrics) -> String| Signal::derive(move || metrics.with(f));
    // 快速统计直接取汇总接口的计数
    let st = move |f: fn(&DashboardStats) -> u64| {
        Signal::derive(move || screen.with_snapshot(|s| format_number(f(&s.stats) as f64)))
    };
    let t = move |f: fn(&'static DashboardMessages) -> &'static str| {
        Signal::derive(move || f(&i18n.messages().dashboard).to_string())
    };

    let slot_label = move |slot: TimeSlot| {
        Signal::derive(move || {
            let d = &i18n.messages().dashboard;
            match slot {
                TimeSlot::Morning => d.morning,
                TimeSlot::Afternoon => d.afternoon,
                TimeSlot::Evening => d.evening,
            }
            .to_string()
        })
    };
    let slot_share =
        move |slot: TimeSlot| Signal::derive(move || metrics.with(|m| m.bookings_by_time_slot.get(slot)));

    view! {
        <NoticeToast notice=screen.notice() on_dismiss=screen.dismiss() />

        <PageHeader title=t(|d| d.title) description=t(|d| d.description) />

        <Show
            when=move || !screen.is_loading()
            fallback=|| view! {
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard title=t(|d| d.total_users) value=m(|m| format_number(m.total_users as f64)) />
                <StatCard
                    title=t(|d| d.active_users)
                    value=m(|m| format_number(m.active_user_count as f64))
                    note=Signal::derive(move || {
                        format!("{} {}", i18n.messages().dashboard.retention_rate, metrics.with(|m| format_percentage(m.retention_rate)))
                    })
                    accent="text-success"
                />
                <StatCard title=t(|d| d.total_bookings) value=m(|m| format_number(m.total_bookings as f64)) accent="text-secondary" />
                <StatCard
                    title=t(|d| d.revenue)
                    value=m(|m| format_currency(m.estimated_revenue as f64))
                    note=t(|d| d.revenue_estimate_note)
                    accent="text-accent"
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">{move || i18n.messages().dashboard.bookings_by_time}</h3>
                        {TimeSlot::ALL
                            .into_iter()
                            .map(|slot| view! { <SlotBar label=slot_label(slot) share=slot_share(slot) /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">{move || i18n.messages().dashboard.course_status}</h3>
                        <ul class="space-y-2">
                            <li class="flex justify-between">
                                <span class="badge badge-success">{move || i18n.messages().dashboard.courses_open}</span>
                                <span>{move || metrics.with(|m| m.course_status_counts.open)}</span>
                            </li>
                            <li class="flex justify-between">
                                <span class="badge badge-error">{move || i18n.messages().dashboard.courses_closed}</span>
                                <span>{move || metrics.with(|m| m.course_status_counts.closed)}</span>
                            </li>
                            <li class="flex justify-between">
                                <span class="badge badge-warning">{move || i18n.messages().dashboard.courses_maintenance}</span>
                                <span>{move || metrics.with(|m| m.course_status_counts.maintenance)}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">{move || i18n.messages().dashboard.quick_stats}</h3>
                        <div class="stats stats-vertical">
                            <StatCard title=t(|d| d.total_users) value=st(|s| s.total_users) />
                            <StatCard title=t(|d| d.golf_courses) value=st(|s| s.total_courses) />
                            <StatCard title=t(|d| d.active_subscriptions) value=st(|s| s.active_subscriptions) />
                            <StatCard title=t(|d| d.competitions) value=st(|s| s.upcoming_competitions) />
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
