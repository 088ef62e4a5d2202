//! View rendering for the workspace dashboard.
//!
//! Layout: a dark top navigation bar, a sidebar with the office switcher
//! and section navigation, and a content area that renders one of five
//! sections (overview, my/office contracts, integrity records, team).
//! List derivations (my-vs-office views, filtering, sorting, counts) come
//! from `integrity_common::dashboard`.

use num_format::{Locale, ToFormattedString};
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use integrity_common::dashboard::{
    arrange, my_awards, office_awards, records_created_by, status_counts, SortKey, StatusFilter,
};
use integrity_common::model::award::{Award, AwardStatus};
use integrity_common::model::record::RecordStatus;
use integrity_common::model::team::Office;

use crate::components::uswds::{award_status_badge, record_status_badge};

use super::messages::Msg;
use super::props::WorkspaceProps;
use super::state::{SectionTab, WorkspaceComponent};

pub fn view(component: &WorkspaceComponent, ctx: &Context<WorkspaceComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    let mine = my_awards(&props.awards, &props.user.name);
    let office = office_awards(&props.awards);
    let my_records = records_created_by(&props.records, &props.user.name);
    let current_office = props
        .offices
        .iter()
        .find(|office| office.id == component.current_office_id)
        .or_else(|| props.offices.first());

    html! {
        <div class="workspace">
            { build_top_nav(props) }
            <div class="workspace-layout">
                {
                    if component.is_mobile && component.sidebar_open {
                        html! {
                            <div
                                class="sidebar-overlay"
                                onclick={link.callback(|_| Msg::CloseSidebar)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if component.sidebar_open {
                        build_sidebar(
                            component,
                            props,
                            link,
                            current_office,
                            mine.len(),
                            office.len(),
                            my_records.len(),
                        )
                    } else {
                        html! {}
                    }
                }
                <main class="workspace-main">
                    { build_content_header(component, props, link, current_office, &mine, &office, my_records.len()) }
                    <div class="workspace-content">
                        {
                            match component.active_section {
                                SectionTab::Overview => build_overview(props, link, &mine),
                                SectionTab::MyAwards | SectionTab::OfficeAwards => {
                                    let shown = if component.active_section == SectionTab::MyAwards {
                                        &mine
                                    } else {
                                        &office
                                    };
                                    build_awards_section(component, link, shown)
                                }
                                SectionTab::Records => build_records_section(link, &props.records, &props.user.name),
                                SectionTab::Team => build_team_section(props, current_office),
                            }
                        }
                    </div>
                </main>
            </div>
        </div>
    }
}

fn build_top_nav(props: &WorkspaceProps) -> Html {
    html! {
        <nav class="top-nav">
            <div class="top-nav-brand">
                <div class="brand-mark" />
                <div>
                    <h1>{ "SAM.gov" }</h1>
                    <p class="text-muted">{ "System for Award Management" }</p>
                </div>
            </div>
            <div class="top-nav-user">
                <span>{ props.user.name.clone() }</span>
            </div>
        </nav>
    }
}

fn build_sidebar(
    component: &WorkspaceComponent,
    props: &WorkspaceProps,
    link: &Scope<WorkspaceComponent>,
    current_office: Option<&Office>,
    my_count: usize,
    office_count: usize,
    record_count: usize,
) -> Html {
    html! {
        <aside class="sidebar">
            { build_office_switcher(component, props, link, current_office) }
            <nav class="sidebar-nav">
                { nav_button(component, link, SectionTab::Overview, None) }
                { nav_button(component, link, SectionTab::MyAwards, Some(my_count)) }
                { nav_button(component, link, SectionTab::OfficeAwards, Some(office_count)) }
                { nav_button(component, link, SectionTab::Records, Some(record_count)) }
                { nav_button(component, link, SectionTab::Team, None) }
            </nav>
        </aside>
    }
}

fn nav_button(
    component: &WorkspaceComponent,
    link: &Scope<WorkspaceComponent>,
    section: SectionTab,
    count: Option<usize>,
) -> Html {
    let active = component.active_section == section;
    html! {
        <button
            type="button"
            class={classes!("nav-item", active.then_some("nav-item-active"))}
            onclick={link.callback(move |_| Msg::SetSection(section))}
        >
            { section.title() }
            {
                match count {
                    Some(count) => html! { <span class="nav-count">{ count }</span> },
                    None => html! {},
                }
            }
        </button>
    }
}

fn build_office_switcher(
    component: &WorkspaceComponent,
    props: &WorkspaceProps,
    link: &Scope<WorkspaceComponent>,
    current_office: Option<&Office>,
) -> Html {
    let pending = props.pending_requests.len();
    html! {
        <div class="office-switcher dropdown-container">
            <div class="office-switcher-header">
                <p class="field-hint">{ "Contracting Office" }</p>
                {
                    if pending > 0 {
                        html! {
                            <span class="badge badge-warning">
                                { format!("{pending} pending") }
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button
                type="button"
                class="office-switcher-button"
                onclick={link.callback(|_| Msg::ToggleOfficeMenu)}
            >
                {
                    match current_office {
                        Some(office) => html! {
                            <span class="office-switcher-label">
                                <span>{ office.name.clone() }</span>
                                <span class="field-hint mono">{ office.id.clone() }</span>
                            </span>
                        },
                        None => html! { <span>{ "No office" }</span> },
                    }
                }
                <span class="dropdown-caret">{ "\u{25be}" }</span>
            </button>
            {
                if component.office_menu_open {
                    build_office_menu(component, props, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_office_menu(
    component: &WorkspaceComponent,
    props: &WorkspaceProps,
    link: &Scope<WorkspaceComponent>,
) -> Html {
    html! {
        <div class="dropdown-menu office-menu">
            <p class="dropdown-heading">{ "Your Offices" }</p>
            {
                for props.offices.iter().map(|office| {
                    let office_id = office.id.clone();
                    let selected = office.id == component.current_office_id;
                    html! {
                        <button
                            type="button"
                            class={classes!("dropdown-item", selected.then_some("dropdown-item-selected"))}
                            onclick={link.callback(move |_| Msg::SelectOffice(office_id.clone()))}
                        >
                            <span class="office-item-name">{ office.name.clone() }</span>
                            <span class="field-hint">
                                { format!(
                                    "{} \u{2022} {} contracts \u{2022} {}",
                                    office.id,
                                    office.contract_count,
                                    office.role.label()
                                ) }
                            </span>
                        </button>
                    }
                })
            }
            {
                if props.pending_requests.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <p class="dropdown-heading">
                                { format!("Pending Requests ({})", props.pending_requests.len()) }
                            </p>
                            {
                                for props.pending_requests.iter().map(|request| html! {
                                    <div class="dropdown-item pending-request">
                                        <span class="office-item-name">{ request.office_name.clone() }</span>
                                        <span class="field-hint">
                                            { format!(
                                                "{} \u{2022} {} \u{2022} Requested {}",
                                                request.office_id,
                                                request.requested_role.label(),
                                                request.requested_date
                                            ) }
                                        </span>
                                    </div>
                                })
                            }
                        </>
                    }
                }
            }
            <button
                type="button"
                class="dropdown-item dropdown-action"
                onclick={link.callback(|_| Msg::CloseMenus)}
            >
                { "Add New Office" }
            </button>
            <button
                type="button"
                class="dropdown-item dropdown-action"
                onclick={link.callback(|_| Msg::CloseMenus)}
            >
                { "Request Office Access" }
            </button>
        </div>
    }
}

fn build_content_header(
    component: &WorkspaceComponent,
    props: &WorkspaceProps,
    link: &Scope<WorkspaceComponent>,
    current_office: Option<&Office>,
    mine: &[Award],
    office: &[Award],
    record_count: usize,
) -> Html {
    let office_id = current_office.map(|o| o.id.clone()).unwrap_or_default();
    let subtitle = match component.active_section {
        SectionTab::Overview => String::new(),
        SectionTab::MyAwards => format!(
            "{} contracts needing integrity reports assigned to you",
            mine.len()
        ),
        SectionTab::OfficeAwards => format!(
            "{} contracts needing integrity reports in {office_id}",
            office.len()
        ),
        SectionTab::Records => format!("{record_count} records created by you"),
        SectionTab::Team => format!("{} members in {office_id}", props.team.len()),
    };

    html! {
        <div class="content-header">
            <button
                type="button"
                class="hamburger"
                onclick={link.callback(|_| Msg::ToggleSidebar)}
            >
                { "\u{2630}" }
            </button>
            <div>
                <h2>{ component.active_section.title() }</h2>
                {
                    if subtitle.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="text-muted">{ subtitle }</p> }
                    }
                }
            </div>
            <button
                type="button"
                class="btn btn-primary content-header-action"
                onclick={link.callback(|_| Msg::CreateRecord)}
            >
                { "Create New Record" }
            </button>
        </div>
    }
}

fn build_overview(props: &WorkspaceProps, link: &Scope<WorkspaceComponent>, mine: &[Award]) -> Html {
    let counts = status_counts(mine);
    let submitted = mine.iter().filter(|a| a.integrity_records > 0).count();
    html! {
        <div class="overview">
            {
                if props.pending_requests.is_empty() {
                    html! {}
                } else {
                    let names = props
                        .pending_requests
                        .iter()
                        .map(|r| r.office_name.clone())
                        .collect::<Vec<_>>()
                        .join(", ");
                    let label = if props.pending_requests.len() == 1 { "Request" } else { "Requests" };
                    html! {
                        <div class="notice notice-warning">
                            <p class="form-label">
                                { format!(
                                    "{} Pending Office Access {label}",
                                    props.pending_requests.len()
                                ) }
                            </p>
                            <p>{ format!("You have requested access to: {names}") }</p>
                            <button
                                type="button"
                                class="btn-link"
                                onclick={link.callback(|_| Msg::OpenOfficeMenu)}
                            >
                                { "View requests in office switcher" }
                            </button>
                        </div>
                    }
                }
            }
            <div class="stat-tiles">
                { stat_tile(link, "Contracts Needing Reports", counts.all, SectionTab::MyAwards, StatusFilter::All) }
                { stat_tile(link, "Active", counts.active, SectionTab::MyAwards, StatusFilter::Active) }
                { stat_tile(link, "Terminated", counts.terminated, SectionTab::MyAwards, StatusFilter::Terminated) }
                { stat_tile(link, "Reports Submitted", submitted, SectionTab::Records, StatusFilter::All) }
            </div>
            <div class="panel">
                <h3 class="panel-heading">{ "Recent Activity" }</h3>
                <div class="activity-row">
                    <span class="activity-dot activity-dot-green" />
                    <div>
                        <p>
                            { "Integrity record " }
                            <span class="mono">{ "NEWPSC24C0011" }</span>
                            { " published" }
                        </p>
                        <p class="field-hint">{ "2024-01-20" }</p>
                    </div>
                </div>
                <div class="activity-row">
                    <span class="activity-dot activity-dot-amber" />
                    <div>
                        <p>
                            { "Draft record for contract " }
                            <span class="mono">{ "N00024-23-C-4321" }</span>
                            { " needs completion" }
                        </p>
                        <p class="field-hint">{ "2025-02-15" }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn stat_tile(
    link: &Scope<WorkspaceComponent>,
    label: &'static str,
    value: usize,
    section: SectionTab,
    filter: StatusFilter,
) -> Html {
    html! {
        <button
            type="button"
            class="stat-tile"
            onclick={link.batch_callback(move |_| {
                vec![Msg::SetSection(section), Msg::SetFilter(filter)]
            })}
        >
            <p class="text-muted">{ label }</p>
            <p class="stat-value">{ value }</p>
        </button>
    }
}

fn build_awards_section(
    component: &WorkspaceComponent,
    link: &Scope<WorkspaceComponent>,
    shown: &[Award],
) -> Html {
    let counts = status_counts(shown);
    let sorted = arrange(shown, component.filter, component.sort);
    let in_office_view = component.active_section == SectionTab::OfficeAwards;

    html! {
        <div>
            <div class="list-controls">
                <div class="filter-tabs">
                    { filter_tab(component, link, StatusFilter::All, format!("All ({})", counts.all)) }
                    { filter_tab(component, link, StatusFilter::Active, format!("Active ({})", counts.active)) }
                    { filter_tab(component, link, StatusFilter::Terminated, format!("Terminated ({})", counts.terminated)) }
                </div>
                <div class="sort-control">
                    <label for="sort-select" class="text-muted">{ "Sort by:" }</label>
                    <select
                        id="sort-select"
                        class="form-input sort-select"
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetSort(select.value())
                        })}
                    >
                        {
                            for [SortKey::DateLatest, SortKey::DateOldest, SortKey::TitleAz, SortKey::TitleZa]
                                .iter()
                                .map(|key| html! {
                                    <option
                                        value={key.as_str()}
                                        selected={component.sort == *key}
                                    >
                                        { key.label() }
                                    </option>
                                })
                        }
                    </select>
                </div>
            </div>
            <div class="award-list">
                {
                    for sorted.iter().map(|award| {
                        build_award_card(component, link, award, in_office_view)
                    })
                }
            </div>
        </div>
    }
}

fn filter_tab(
    component: &WorkspaceComponent,
    link: &Scope<WorkspaceComponent>,
    filter: StatusFilter,
    label: String,
) -> Html {
    let active = component.filter == filter;
    html! {
        <button
            type="button"
            class={classes!("filter-tab", active.then_some("filter-tab-active"))}
            onclick={link.callback(move |_| Msg::SetFilter(filter))}
        >
            { label }
        </button>
    }
}

fn build_award_card(
    component: &WorkspaceComponent,
    link: &Scope<WorkspaceComponent>,
    award: &Award,
    in_office_view: bool,
) -> Html {
    let menu_open = component.manage_menu_open.as_deref() == Some(award.id.as_str());
    let value = format!("${}", award.value.to_formatted_string(&Locale::en));
    html! {
        <div class="award-card">
            <div class="award-card-main">
                <div class="award-card-title">
                    <h3 class="mono">{ award.award_number.clone() }</h3>
                    { award_status_badge(award.status) }
                    {
                        if award.integrity_records > 0 {
                            let noun = if award.integrity_records == 1 { "record" } else { "records" };
                            html! {
                                <button
                                    type="button"
                                    class="btn-link"
                                    onclick={link.callback(|_| Msg::SetSection(SectionTab::Records))}
                                >
                                    { format!("{} integrity {noun}", award.integrity_records) }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <p>{ award.title.clone() }</p>
                <p class="text-muted">{ award.contractor_name.clone() }</p>
                <div class="award-meta">
                    <span>{ format!("Type: {}", award.award_type) }</span>
                    <span>{ format!("Period: {} \u{2013} {}", award.pop_start, award.pop_end) }</span>
                    <span>{ format!("Value: {value}") }</span>
                    <span>{ format!("UEI: {}", award.uei) }</span>
                    {
                        if in_office_view {
                            html! { <span>{ format!("COR: {}", award.assigned_to) }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="dropdown-container manage-menu">
                {
                    {
                        let award_id = award.id.clone();
                        html! {
                            <button
                                type="button"
                                class="btn btn-outline"
                                onclick={link.callback(move |_| {
                                    Msg::ToggleManageMenu(award_id.clone())
                                })}
                            >
                                { "Manage \u{25be}" }
                            </button>
                        }
                    }
                }
                {
                    if menu_open {
                        build_manage_menu(link, award)
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn build_manage_menu(link: &Scope<WorkspaceComponent>, award: &Award) -> Html {
    let terminate_id = award.id.clone();
    let share_id = award.id.clone();
    let details_id = award.id.clone();
    html! {
        <div class="dropdown-menu">
            <button
                type="button"
                class="dropdown-item"
                onclick={link.callback(|_| Msg::CreateRecord)}
            >
                { "Add Integrity Record" }
            </button>
            {
                if award.status == AwardStatus::Active {
                    html! {
                        <button
                            type="button"
                            class="dropdown-item dropdown-item-danger"
                            onclick={link.callback(move |_| {
                                Msg::ManageAward(terminate_id.clone())
                            })}
                        >
                            { "Terminate Contract" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <button
                type="button"
                class="dropdown-item"
                onclick={link.callback(move |_| Msg::ManageAward(share_id.clone()))}
            >
                { "Share Access" }
            </button>
            <button
                type="button"
                class="dropdown-item"
                onclick={link.callback(move |_| Msg::ManageAward(details_id.clone()))}
            >
                { "View Award Details" }
            </button>
        </div>
    }
}

fn build_records_section(
    link: &Scope<WorkspaceComponent>,
    records: &[integrity_common::model::record::RecordListing],
    user: &str,
) -> Html {
    let mine = records_created_by(records, user);
    html! {
        <div class="panel">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Document Number" }</th>
                        <th>{ "Type" }</th>
                        <th>{ "Contract" }</th>
                        <th>{ "Contractor" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Last Modified" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for mine.iter().map(|record| {
                            let draft = record.status == RecordStatus::Draft;
                            let open_id = record.id.clone();
                            let action_id = record.id.clone();
                            let open = link.callback(move |_| {
                                if draft {
                                    Msg::EditReport(open_id.clone())
                                } else {
                                    Msg::ViewReport(open_id.clone())
                                }
                            });
                            html! {
                                <tr>
                                    <td>
                                        <button type="button" class="btn-link mono" onclick={open}>
                                            { record.document_number.clone() }
                                        </button>
                                    </td>
                                    <td>{ record.record_type.clone() }</td>
                                    <td class="mono">{ record.award_number.clone() }</td>
                                    <td>{ record.contractor_name.clone() }</td>
                                    <td>{ record_status_badge(record.status) }</td>
                                    <td>{ record.last_modified.clone() }</td>
                                    <td>
                                        <button
                                            type="button"
                                            class="btn-link"
                                            onclick={link.callback(move |_| {
                                                if draft {
                                                    Msg::EditReport(action_id.clone())
                                                } else {
                                                    Msg::ViewReport(action_id.clone())
                                                }
                                            })}
                                        >
                                            { if draft { "Continue Editing" } else { "View" } }
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

fn build_team_section(props: &WorkspaceProps, current_office: Option<&Office>) -> Html {
    let office_id = current_office.map(|o| o.id.clone()).unwrap_or_default();
    html! {
        <div>
            <p class="text-muted">
                { format!("Manage contract access for team members in {office_id}") }
            </p>
            <div class="panel">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Email" }</th>
                            <th>{ "Role" }</th>
                            <th>{ "Access Level" }</th>
                            <th>{ "Contracts" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for props.team.iter().map(|member| html! {
                                <tr>
                                    <td>{ member.name.clone() }</td>
                                    <td>{ member.email.clone() }</td>
                                    <td>{ member.role.label() }</td>
                                    <td>{ member.access_level.label() }</td>
                                    <td>{ member.contracts_assigned }</td>
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
