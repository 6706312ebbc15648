use crate::components::layout::PageHeader;
use crate::components::modal::{Modal, ModalActions};
use crate::components::toast::NoticeToast;
use crate::components::{EmptyRow, LoadingRow};
use crate::i18n::use_i18n;
use crate::screen::Screen;
use crate::web;
use leptos::prelude::*;
use teebook_admin::resources::Competitions;
use teebook_shared::format::{format_currency, format_date};
use teebook_shared::forms::CompetitionForm;
use teebook_shared::{Competition, CompetitionStatus};

/// 状态徽章：未知状态原样显示原始值
fn status_badge(competition: &Competition) -> (&'static str, String) {
    match competition.status() {
        CompetitionStatus::Upcoming => ("badge badge-info", "Upcoming".to_string()),
        CompetitionStatus::Ongoing => ("badge badge-warning", "Ongoing".to_string()),
        CompetitionStatus::Completed => ("badge badge-success", "Completed".to_string()),
        CompetitionStatus::Other => (
            "badge badge-ghost",
            competition.status.clone().unwrap_or_else(|| "-".to_string()),
        ),
    }
}

#[component]
pub fn CompetitionsPage() -> impl IntoView {
    let i18n = use_i18n();
    let screen = Screen::<Competitions>::mount();

    let open = RwSignal::new(false);
    let form = RwSignal::new(CompetitionForm::new(&web::today()));
    let editing = RwSignal::new(Option::<String>::None);

    let open_create = move |_| {
        editing.set(None);
        form.set(CompetitionForm::new(&web::today()));
        open.set(true);
    };

    let open_edit = move |competition: &Competition| {
        editing.set(Some(competition.id.clone()));
        form.set(CompetitionForm::from(competition));
        open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.with_untracked(CompetitionForm::validate);
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
            .map(|competition| {
                let (badge, status) = status_badge(&competition);
                let id = competition.id.clone();
                let edit_target = competition.clone();
                view! {
                    <tr>
                        <td>
                            <div class="font-semibold">{competition.name.clone()}</div>
                            <div class="text-sm text-base-content/60">
                                {competition.description.clone().unwrap_or_default()}
                            </div>
                        </td>
                        <td>{format_date(&competition.date)}</td>
                        <td>{competition.max_participants}</td>
                        <td>{format_currency(competition.entry_fee)}</td>
                        <td><span class=badge>{status}</span></td>
                        <td class="flex gap-2 justify-end">
                            <button class="btn btn-ghost btn-sm" on:click=move |_| open_edit(&edit_target)>
                                "Edit"
                            </button>
                            <button
                                class="btn btn-ghost btn-sm text-error"
                                disabled=move || screen.is_busy()
                                on:click=move |_| screen.delete(id.clone(), "Delete this competition?")
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      get: fn(&CompetitionForm) -> String,
                      set: fn(&mut CompetitionForm, String)| {
        view! {
            <div class="form-control">
                <label class="label" for=id><span class="label-text">{label}</span></label>
                <input id=id type=kind class="input input-bordered w-full"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <NoticeToast notice=screen.notice() on_dismiss=screen.dismiss() />

        <PageHeader title=move || i18n.messages().nav.competitions.to_string() description="Tournaments and entry fees">
            <button class="btn btn-primary" on:click=open_create>"Add competition"</button>
        </PageHeader>

        <div class="card bg-base-100 shadow-xl">
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Date"</th>
                            <th>"Participants"</th>
                            <th>"Entry fee"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <LoadingRow when=Signal::derive(move || screen.is_loading()) colspan=6 />
                        <EmptyRow
                            when=Signal::derive(move || !screen.is_loading() && screen.with_snapshot(Vec::is_empty))
                            colspan=6
                            text="No competitions yet."
                        />
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>

        <Modal
            open=open
            title=move || if editing.get().is_some() { "Edit competition" } else { "Add competition" }.to_string()
        >
            <form on:submit=on_submit class="space-y-4">
                {field("competition_name", "Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("competition_description", "Description", "text", |f| f.description.clone(), |f, v| f.description = v)}
                {field("competition_date", "Date", "date", |f| f.date.clone(), |f, v| f.date = v)}
                <div class="grid grid-cols-2 gap-4">
                    {field("competition_max", "Max participants", "number", |f| f.max_participants.clone(), |f, v| f.max_participants = v)}
                    {field("competition_fee", "Entry fee (FCFA)", "number", |f| f.entry_fee.clone(), |f, v| f.entry_fee = v)}
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
