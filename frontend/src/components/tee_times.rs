use crate::components::layout::PageHeader;
use crate::components::modal::{Modal, ModalActions};
use crate::components::toast::NoticeToast;
use crate::components::{EmptyRow, LoadingRow};
use crate::i18n::use_i18n;
use crate::screen::Screen;
use crate::web;
use leptos::prelude::*;
use teebook_admin::resources::TeeTimes;
use teebook_shared::format::format_date;
use teebook_shared::forms::TeeTimeForm;

#[component]
pub fn TeeTimesPage() -> impl IntoView {
    let i18n = use_i18n();
    let screen = Screen::<TeeTimes>::mount();

    let open = RwSignal::new(false);
    let form = RwSignal::new(TeeTimeForm::new(&web::today()));
    // 没有球场时无法新建
    let can_create = Signal::derive(move || screen.with_snapshot(|s| s.can_create()));

    let open_create = move |_| {
        let mut fresh = TeeTimeForm::new(&web::today());
        if let Some(first) = screen.with_snapshot(|s| s.courses.first().map(|c| c.id.clone())) {
            fresh.course_id = first;
        }
        form.set(fresh);
        open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.create(form.with_untracked(TeeTimeForm::validate));
        open.set(false);
    };

    let rows = move || {
        let snapshot = screen.snapshot();
        snapshot
            .tee_times
            .iter()
            .map(|tee_time| {
                let id = tee_time.id.clone();
                let (badge, label) = if tee_time.is_available() {
                    ("badge badge-success", "Available")
                } else {
                    ("badge badge-error", "Full")
                };
                view! {
                    <tr>
                        <td class="font-semibold">{snapshot.course_name(&tee_time.course_id).to_string()}</td>
                        <td>{format_date(&tee_time.date)}</td>
                        <td class="font-mono">{tee_time.time.clone()}</td>
                        <td>{format!("{} / {}", tee_time.available_slots, tee_time.max_slots)}</td>
                        <td><span class=badge>{label}</span></td>
                        <td class="text-right">
                            <button
                                class="btn btn-ghost btn-sm text-error"
                                disabled=move || screen.is_busy()
                                on:click=move |_| screen.delete(id.clone(), "Delete this tee time?")
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let course_options = move || {
        screen.with_snapshot(|s| {
            s.courses
                .iter()
                .map(|course| {
                    let id = course.id.clone();
                    let selected_id = id.clone();
                    view! {
                        <option value=id selected=move || form.with(|f| f.course_id == selected_id)>
                            {course.name.clone()}
                        </option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <NoticeToast notice=screen.notice() on_dismiss=screen.dismiss() />

        <PageHeader title=move || i18n.messages().nav.tee_times.to_string() description="Schedule tee times per course">
            <button
                class="btn btn-primary"
                disabled=move || !can_create.get()
                title=move || if can_create.get() { "" } else { "Create a course first" }
                on:click=open_create
            >
                "Add tee time"
            </button>
        </PageHeader>

        <div class="card bg-base-100 shadow-xl">
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Slots"</th>
                            <th>"Availability"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <LoadingRow when=Signal::derive(move || screen.is_loading()) colspan=6 />
                        <EmptyRow
                            when=Signal::derive(move || !screen.is_loading() && screen.with_snapshot(|s| s.tee_times.is_empty()))
                            colspan=6
                            text="No tee times scheduled."
                        />
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>

        <Modal open=open title="Add tee time">
            <form on:submit=on_submit class="space-y-4">
                <div class="form-control">
                    <label class="label" for="tee_course"><span class="label-text">"Course"</span></label>
                    <select id="tee_course" class="select select-bordered w-full"
                        on:change=move |ev| form.update(|f| f.course_id = event_target_value(&ev))
                    >
                        {course_options}
                    </select>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="tee_date"><span class="label-text">"Date"</span></label>
                        <input id="tee_date" type="date" required class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="tee_time"><span class="label-text">"Time"</span></label>
                        <input id="tee_time" type="time" required class="input input-bordered w-full"
                            prop:value=move || form.with(|f| f.time.clone())
                            on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="tee_slots"><span class="label-text">"Max slots"</span></label>
                    <input id="tee_slots" type="number" min="1" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.max_slots.clone())
                        on:input=move |ev| form.update(|f| f.max_slots = event_target_value(&ev))
                    />
                </div>
                <ModalActions
                    open=open
                    busy=Signal::derive(move || screen.is_busy())
                    submit_label=move || i18n.messages().save
                    cancel_label=move || i18n.messages().cancel
                />
            </form>
        </Modal>
    }
}
