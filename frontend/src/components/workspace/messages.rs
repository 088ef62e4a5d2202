use integrity_common::dashboard::StatusFilter;

use super::state::SectionTab;

#[derive(Clone)]
pub enum Msg {
    ToggleSidebar,
    CloseSidebar,
    ViewportChanged(f64),
    SetSection(SectionTab),
    SetFilter(StatusFilter),
    SetSort(String),
    ToggleManageMenu(String),
    ToggleOfficeMenu,
    OpenOfficeMenu,
    CloseMenus,
    SelectOffice(String),
    CreateRecord,
    ViewReport(String),
    EditReport(String),
    ManageAward(String),
}
