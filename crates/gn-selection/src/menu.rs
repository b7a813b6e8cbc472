//! Pure menu derivations from the catalog.

use gn_catalog::{Catalog, SeriesKey};

/// Label hosts render for the "nothing chosen" row of the host and service
/// menus. The core never stores it as a value; adapters translate that row
/// back to `None` when reading a choice.
pub const NONE_LABEL: &str = "-";

/// An ordered list of menu labels plus the preselected index, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuModel {
    pub items: Vec<String>,
    pub selected: Option<usize>,
}

impl MenuModel {
    fn with_selection(items: Vec<String>, selected_label: Option<&str>) -> Self {
        let selected =
            selected_label.and_then(|label| items.iter().position(|item| item == label));
        Self { items, selected }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|index| self.items[index].as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Host menu: every catalog host in catalog order.
pub fn populate_host_menu(catalog: &Catalog, selected_host: Option<&str>) -> MenuModel {
    let items = catalog.hosts.iter().map(|host| host.name.clone()).collect();
    MenuModel::with_selection(items, selected_host)
}

/// Service menu.
///
/// With a host: that host's services in catalog order, and an unknown host
/// lists nothing. Without a host: the deduplicated union of every service
/// name across all hosts, first appearance first.
pub fn populate_service_menu(
    catalog: &Catalog,
    host: Option<&str>,
    selected_service: Option<&str>,
) -> MenuModel {
    let items = match host {
        Some(name) => catalog.service_names(name),
        None => catalog.all_service_names(),
    };
    MenuModel::with_selection(items, selected_service)
}

/// Series menu for the current host and service; empty when either side
/// does not resolve.
pub fn populate_series_menu(
    catalog: &Catalog,
    host: Option<&str>,
    service: Option<&str>,
) -> Vec<SeriesKey> {
    catalog.series_for(host, service)
}

/// The series picker only shows when there is a real choice to make.
pub fn series_controls_visible(menu: &[SeriesKey]) -> bool {
    menu.len() > 1
}

/// Rows the series picker displays at once.
pub fn series_menu_rows(menu: &[SeriesKey]) -> usize {
    menu.len().min(5)
}
