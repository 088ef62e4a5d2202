//! Component state for the workspace dashboard: the active sidebar
//! section, list filter/sort, which contextual menu is open, and the
//! document-level listener that closes menus on outside clicks.

use integrity_common::dashboard::{SortKey, StatusFilter};
use wasm_bindgen::closure::Closure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTab {
    Overview,
    MyAwards,
    OfficeAwards,
    Records,
    Team,
}

impl SectionTab {
    pub fn title(&self) -> &'static str {
        match self {
            SectionTab::Overview => "Overview",
            SectionTab::MyAwards => "My Contracts",
            SectionTab::OfficeAwards => "Office Contracts",
            SectionTab::Records => "Integrity Records",
            SectionTab::Team => "Team & Access",
        }
    }
}

pub struct WorkspaceComponent {
    /// Sidebar visibility; collapsed automatically below the mobile
    /// breakpoint.
    pub sidebar_open: bool,
    pub is_mobile: bool,

    pub active_section: SectionTab,
    pub filter: StatusFilter,
    pub sort: SortKey,

    /// Award id whose "Manage" menu is open, if any.
    pub manage_menu_open: Option<String>,
    pub office_menu_open: bool,
    pub current_office_id: String,

    /// Document mousedown listener, attached only while a menu is open.
    pub outside_click: Option<Closure<dyn FnMut(web_sys::MouseEvent)>>,
}

impl WorkspaceComponent {
    pub fn new(initial_office_id: String) -> Self {
        Self {
            sidebar_open: true,
            is_mobile: false,
            active_section: SectionTab::MyAwards,
            filter: StatusFilter::All,
            sort: SortKey::DateLatest,
            manage_menu_open: None,
            office_menu_open: false,
            current_office_id: initial_office_id,
            outside_click: None,
        }
    }

    pub fn any_menu_open(&self) -> bool {
        self.manage_menu_open.is_some() || self.office_menu_open
    }
}
