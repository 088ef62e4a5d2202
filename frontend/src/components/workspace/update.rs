//! Update function for the workspace dashboard.
//!
//! Besides routine state changes, this module manages the document-level
//! mousedown listener that closes open menus when the user clicks outside
//! their container. The listener exists only while a menu is open and is
//! removed as soon as every menu is closed.

use gloo_console::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use integrity_common::dashboard::SortKey;

use super::messages::Msg;
use super::state::WorkspaceComponent;

pub fn update(
    component: &mut WorkspaceComponent,
    ctx: &Context<WorkspaceComponent>,
    msg: Msg,
) -> bool {
    let changed = match msg {
        Msg::ToggleSidebar => {
            component.sidebar_open = !component.sidebar_open;
            true
        }
        Msg::CloseSidebar => {
            component.sidebar_open = false;
            true
        }
        Msg::ViewportChanged(width) => {
            let mobile = width < 1024.0;
            component.is_mobile = mobile;
            component.sidebar_open = !mobile;
            true
        }
        Msg::SetSection(section) => {
            component.active_section = section;
            if component.is_mobile {
                component.sidebar_open = false;
            }
            true
        }
        Msg::SetFilter(filter) => {
            component.filter = filter;
            true
        }
        Msg::SetSort(tag) => match SortKey::parse(&tag) {
            Some(sort) => {
                component.sort = sort;
                true
            }
            None => {
                warn!("unknown sort key", tag);
                false
            }
        },
        Msg::ToggleManageMenu(award_id) => {
            component.manage_menu_open = match &component.manage_menu_open {
                Some(open) if *open == award_id => None,
                _ => Some(award_id),
            };
            true
        }
        Msg::ToggleOfficeMenu => {
            component.office_menu_open = !component.office_menu_open;
            true
        }
        Msg::OpenOfficeMenu => {
            component.office_menu_open = true;
            true
        }
        Msg::CloseMenus => {
            let was_open = component.any_menu_open();
            component.manage_menu_open = None;
            component.office_menu_open = false;
            was_open
        }
        Msg::SelectOffice(office_id) => {
            // Switching offices updates the header context only; the award
            // and record collections are not office-scoped.
            component.current_office_id = office_id;
            component.office_menu_open = false;
            true
        }
        Msg::CreateRecord => {
            component.manage_menu_open = None;
            ctx.props().on_create_record.emit(());
            false
        }
        Msg::ViewReport(report_id) => {
            ctx.props().on_view_report.emit(report_id);
            false
        }
        Msg::EditReport(report_id) => {
            ctx.props().on_edit_report.emit(report_id);
            false
        }
        Msg::ManageAward(award_id) => {
            component.manage_menu_open = None;
            ctx.props().on_manage_award.emit(award_id);
            false
        }
    };

    sync_outside_click_listener(component, ctx);
    changed
}

/// Attaches the outside-click listener while any menu is open and removes
/// it otherwise.
fn sync_outside_click_listener(
    component: &mut WorkspaceComponent,
    ctx: &Context<WorkspaceComponent>,
) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    if component.any_menu_open() && component.outside_click.is_none() {
        let link = ctx.link().clone();
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |event: web_sys::MouseEvent| {
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .map(|element| {
                        element.closest(".dropdown-container").ok().flatten().is_some()
                    })
                    .unwrap_or(false);
                if !inside {
                    link.send_message(Msg::CloseMenus);
                }
            },
        );
        let _ = document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        component.outside_click = Some(closure);
    } else if !component.any_menu_open() {
        if let Some(closure) = component.outside_click.take() {
            let _ = document
                .remove_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        }
    }
}
