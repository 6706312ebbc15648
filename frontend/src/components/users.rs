use crate::components::layout::PageHeader;
use crate::components::modal::{Modal, ModalActions};
use crate::components::toast::NoticeToast;
use crate::components::{EmptyRow, LoadingRow};
use crate::i18n::use_i18n;
use crate::screen::Screen;
use leptos::prelude::*;
use teebook_admin::resources::Users;
use teebook_shared::forms::UserForm;
use teebook_shared::{Role, User, filter_users};

#[component]
pub fn UsersPage() -> impl IntoView {
    let i18n = use_i18n();
    let screen = Screen::<Users>::mount();

    let (query, set_query) = signal(String::new());
    let open = RwSignal::new(false);
    let editing = RwSignal::new(String::new());
    let form = RwSignal::new(Option::<UserForm>::None);

    let open_edit = move |user: &User| {
        editing.set(user.id.clone());
        form.set(Some(UserForm::from(user)));
        open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(patch) = form.with_untracked(|f| f.as_ref().map(UserForm::validate)) {
            screen.update(editing.get_untracked(), patch);
        }
        open.set(false);
    };

    // 每次输入同步过滤，不发请求
    let rows = move || {
        let needle = query.get();
        screen.with_snapshot(|users| {
            filter_users(users, &needle)
                .into_iter()
                .map(|user| {
                    let target = user.clone();
                    let (role_badge, role_label) = match user.role {
                        Role::Admin => ("badge badge-primary", "Admin"),
                        Role::User => ("badge badge-ghost", "User"),
                    };
                    view! {
                        <tr>
                            <td class="font-semibold">{user.full_name()}</td>
                            <td class="text-base-content/70">{user.email.clone()}</td>
                            <td><span class=role_badge>{role_label}</span></td>
                            <td class="hidden md:table-cell">
                                {user.handicap_index.map(|h| format!("{h:.1}")).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td>
                                {if user.is_active {
                                    view! { <span class="badge badge-success">"Active"</span> }.into_any()
                                } else {
                                    view! { <span class="badge badge-error">"Inactive"</span> }.into_any()
                                }}
                            </td>
                            <td class="text-right">
                                <button class="btn btn-ghost btn-sm" on:click=move |_| open_edit(&target)>
                                    "Edit"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           get: fn(&UserForm) -> String,
                           set: fn(&mut UserForm, String)| {
        view! {
            <div class="form-control">
                <label class="label" for=id><span class="label-text">{label}</span></label>
                <input id=id type="text" class="input input-bordered w-full"
                    prop:value=move || form.with(|f| f.as_ref().map(get).unwrap_or_default())
                    on:input=move |ev| form.update(|f| {
                        if let Some(f) = f.as_mut() {
                            set(f, event_target_value(&ev));
                        }
                    })
                />
            </div>
        }
    };

    view! {
        <NoticeToast notice=screen.notice() on_dismiss=screen.dismiss() />

        <PageHeader title=move || i18n.messages().nav.users.to_string() description="Players and administrators" />

        <div class="card bg-base-100 shadow-xl">
            <div class="p-4">
                <input
                    type="search"
                    placeholder="Search by name or email"
                    class="input input-bordered w-full md:w-80"
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th class="hidden md:table-cell">"Handicap"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <LoadingRow when=Signal::derive(move || screen.is_loading()) colspan=6 />
                        <EmptyRow
                            when=Signal::derive(move || {
                                !screen.is_loading()
                                    && screen.with_snapshot(|users| filter_users(users, &query.get()).is_empty())
                            })
                            colspan=6
                            text="No users match."
                        />
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>

        <Modal open=open title="Edit user">
            <form on:submit=on_submit class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    {text_field("user_first_name", "First name", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {text_field("user_last_name", "Last name", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                </div>
                {text_field("user_handicap", "Handicap index", |f| f.handicap_index.clone(), |f, v| f.handicap_index = v)}
                <div class="form-control">
                    <label class="label" for="user_role"><span class="label-text">"Role"</span></label>
                    <select id="user_role" class="select select-bordered w-full"
                        on:change=move |ev| {
                            let role = Role::from_wire(&event_target_value(&ev));
                            form.update(|f| if let Some(f) = f.as_mut() { f.role = role; });
                        }
                    >
                        <option value="user" selected=move || form.with(|f| f.as_ref().is_some_and(|f| f.role == Role::User))>"User"</option>
                        <option value="admin" selected=move || form.with(|f| f.as_ref().is_some_and(|f| f.role == Role::Admin))>"Admin"</option>
                    </select>
                </div>
                <div class="form-control">
                    <label class="label cursor-pointer">
                        <span class="label-text">"Active"</span>
                        <input type="checkbox" class="toggle toggle-primary"
                            prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.is_active))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| if let Some(f) = f.as_mut() { f.is_active = checked; });
                            }
                        />
                    </label>
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
