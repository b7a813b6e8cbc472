//! Menu-change transitions: recompute dependent menus, keep what survives.

use gn_catalog::{Catalog, SeriesKey};

use crate::menu::{populate_series_menu, populate_service_menu, MenuModel};
use crate::selection::Selection;

/// Menus to re-render after a host change.
#[derive(Debug, Clone, PartialEq)]
pub struct HostChangeOutcome {
    pub service_menu: MenuModel,
    pub series_menu: Vec<SeriesKey>,
}

/// React to a new host choice.
///
/// The service menu is rebuilt against the new host; the previous service
/// stays selected when the new host still offers it and drops to none
/// otherwise. The series menu follows, with the previous series selection
/// re-applied to it.
pub fn on_host_changed(
    catalog: &Catalog,
    selection: &mut Selection,
    new_host: Option<&str>,
) -> HostChangeOutcome {
    selection.host = new_host.map(str::to_string);
    let service_menu = populate_service_menu(
        catalog,
        selection.host.as_deref(),
        selection.service.as_deref(),
    );
    if service_menu.selected.is_none() {
        selection.service = None;
    }
    let series_menu = populate_series_menu(
        catalog,
        selection.host.as_deref(),
        selection.service.as_deref(),
    );
    reapply_series(selection, &series_menu);
    HostChangeOutcome {
        service_menu,
        series_menu,
    }
}

/// React to a new service choice: rebuild the series menu and re-apply the
/// series selection to it.
pub fn on_service_changed(
    catalog: &Catalog,
    selection: &mut Selection,
    new_service: Option<&str>,
) -> Vec<SeriesKey> {
    selection.service = new_service.map(str::to_string);
    let series_menu = populate_series_menu(
        catalog,
        selection.host.as_deref(),
        selection.service.as_deref(),
    );
    reapply_series(selection, &series_menu);
    series_menu
}

/// Keep previously selected series that still exist in the menu; when none
/// survive, select everything rather than nothing.
fn reapply_series(selection: &mut Selection, menu: &[SeriesKey]) {
    let kept: Vec<SeriesKey> = menu
        .iter()
        .filter(|key| selection.series.contains(key))
        .cloned()
        .collect();
    selection.series = if kept.is_empty() { menu.to_vec() } else { kept };
}
