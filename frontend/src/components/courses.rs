use crate::components::layout::PageHeader;
use crate::components::modal::{Modal, ModalActions};
use crate::components::toast::NoticeToast;
use crate::components::{EmptyRow, LoadingRow};
use crate::i18n::use_i18n;
use crate::screen::Screen;
use leptos::prelude::*;
use teebook_admin::resources::Courses;
use teebook_shared::forms::CourseForm;
use teebook_shared::{Course, CourseStatus};

fn status_badge(status: CourseStatus) -> (&'static str, &'static str) {
    match status {
        CourseStatus::Open => ("badge badge-success", "Open"),
        CourseStatus::Closed => ("badge badge-error", "Closed"),
        CourseStatus::Maintenance => ("badge badge-warning", "Maintenance"),
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let i18n = use_i18n();
    let screen = Screen::<Courses>::mount();

    let open = RwSignal::new(false);
    let form = RwSignal::new(CourseForm::default());
    // `None` 表示新建
    let editing = RwSignal::new(Option::<String>::None);

    let open_create = move |_| {
        editing.set(None);
        form.set(CourseForm::default());
        open.set(true);
    };

    let open_edit = move |course: &Course| {
        editing.set(Some(course.id.clone()));
        form.set(CourseForm::from(course));
        open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.with_untracked(CourseForm::validate);
        match editing.get_untracked() {
            Some(id) => screen.update(id, draft),
            None => screen.create(draft),
        }
        open.set(false);
    };

    let rows = move || {
        screen
            .snapshot()
            .into_iter()
            .map(|course| {
                let (badge, status) = status_badge(course.status());
                let id = course.id.clone();
                let edit_target = course.clone();
                view! {
                    <tr>
                        <td class="font-semibold">{course.name.clone()}</td>
                        <td class="hidden md:table-cell text-base-content/70">
                            {course.description.clone().unwrap_or_default()}
                        </td>
                        <td>{course.holes_count}</td>
                        <td><span class=badge>{status}</span></td>
                        <td class="flex gap-2 justify-end">
                            <button class="btn btn-ghost btn-sm" on:click=move |_| open_edit(&edit_target)>
                                "Edit"
                            </button>
                            <button
                                class="btn btn-ghost btn-sm text-error"
                                disabled=move || screen.is_busy()
                                on:click=move |_| screen.delete(id.clone(), "Delete this course?")
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <NoticeToast notice=screen.notice() on_dismiss=screen.dismiss() />

        <PageHeader title=move || i18n.messages().nav.courses.to_string() description="Manage golf courses">
            <button class="btn btn-primary" on:click=open_create>"Add course"</button>
        </PageHeader>

        <div class="card bg-base-100 shadow-xl">
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th class="hidden md:table-cell">"Description"</th>
                            <th>"Holes"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <LoadingRow when=Signal::derive(move || screen.is_loading()) colspan=5 />
                        <EmptyRow
                            when=Signal::derive(move || !screen.is_loading() && screen.with_snapshot(Vec::is_empty))
                            colspan=5
                            text="No courses yet."
                        />
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>

        <Modal
            open=open
            title=move || if editing.get().is_some() { "Edit course" } else { "Add course" }.to_string()
        >
            <form on:submit=on_submit class="space-y-4">
                <div class="form-control">
                    <label class="label" for="course_name"><span class="label-text">"Name"</span></label>
                    <input id="course_name" required type="text" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="course_description"><span class="label-text">"Description"</span></label>
                    <textarea id="course_description" class="textarea textarea-bordered w-full"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-control">
                    <label class="label" for="course_holes"><span class="label-text">"Holes"</span></label>
                    <input id="course_holes" type="number" min="1" class="input input-bordered w-full"
                        prop:value=move || form.with(|f| f.holes_count.clone())
                        on:input=move |ev| form.update(|f| f.holes_count = event_target_value(&ev))
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
