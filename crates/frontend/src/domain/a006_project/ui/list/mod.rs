use super::create::{ProjectCreateForm, ProjectCreateVm};
use crate::domain::a001_contact::api::{self as contact_api, contact_label};
use crate::domain::a006_project::api;
use crate::shared::api_client::use_api;
use crate::shared::components::StatusBadge;
use crate::shared::format::date_or_dash;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_seq::{still_current, LoadSequence};
use contracts::domain::a001_contact::Contact;
use contracts::domain::a006_project::Project;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let client = use_api();
    let items = RwSignal::new(Vec::<Project>::new());
    let contacts = RwSignal::new(Vec::<Contact>::new());
    let loading = RwSignal::new(false);
    let seq = StoredValue::new(LoadSequence::new());

    let load = Callback::new({
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let ticket = seq.with_value(|s| s.begin());
            loading.set(true);
            spawn_local(async move {
                let (projects, contact_list) =
                    futures::join!(api::fetch_all(&client), contact_api::fetch_all(&client));
                if !still_current(seq, ticket) {
                    log::debug!("projects: stale load discarded");
                    return;
                }
                items.set(projects);
                contacts.set(contact_list);
                loading.set(false);
            });
        }
    });

    let vm = ProjectCreateVm::new(client);

    load.run(());

    view! {
        <PageFrame page_id="a006_project--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-text">
                    <h1 class="page__title">"Projects"</h1>
                    <p class="page__subtitle">"Customer projects and their timelines"</p>
                </div>
                <div class="page__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load.run(())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ProjectCreateForm vm=vm contacts=contacts on_saved=load />

                <div class="card">
                    <h3 class="card__title">
                        {move || format!("All Projects ({})", items.with(|v| v.len()))}
                    </h3>
                    <Show
                        when=move || items.with(|v| !v.is_empty())
                        fallback=|| view! {
                            <div class="empty-state">"No projects yet. Create one above."</div>
                        }
                    >
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Code"</th>
                                        <th class="table__header-cell">"Name"</th>
                                        <th class="table__header-cell">"Contact"</th>
                                        <th class="table__header-cell">"Start"</th>
                                        <th class="table__header-cell">"End"</th>
                                        <th class="table__header-cell">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|p| p.id.as_string()
                                        children=move |p: Project| {
                                            let contact_id = p.contact_id;
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--mono">{p.code}</td>
                                                    <td class="table__cell table__cell--strong">{p.name}</td>
                                                    <td class="table__cell">
                                                        {move || contacts.with(|c| contact_label(c, contact_id))}
                                                    </td>
                                                    <td class="table__cell">{date_or_dash(p.start_date)}</td>
                                                    <td class="table__cell">{date_or_dash(p.end_date)}</td>
                                                    <td class="table__cell">
                                                        <StatusBadge variant=p.status.badge_variant() label=p.status.display_name() />
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
