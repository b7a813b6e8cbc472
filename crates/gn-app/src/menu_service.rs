//! Menu wiring: page load, cascading menu changes, and navigation.

use gn_catalog::{Catalog, HostLookup};
use gn_core::Period;
use gn_selection::{
    expansion_indicator, navigation_target, parse_selection_from_query, populate_host_menu,
    populate_series_menu, populate_service_menu, select_default_series, series_controls_visible,
    series_menu_rows, on_host_changed, on_service_changed, Selection, SelectionDefaults,
};

use crate::page::Page;

fn host_not_found(page: &mut dyn Page, name: &str) {
    page.alert(&format!("{name} not found in the configured hosts and services"));
}

/// Page load: parse the URL, render every menu and control from the
/// resulting selection, and hand the selection back for the handlers.
///
/// An unknown host in the URL gets one alert and leaves the page untouched.
pub fn initialize(
    page: &mut dyn Page,
    catalog: &Catalog,
    defaults: &SelectionDefaults,
) -> Selection {
    let query = page.query();
    let mut selection = parse_selection_from_query(&query, defaults);

    if let Some(host) = selection.host.clone() {
        if let HostLookup::NotFound(name) = catalog.find_host(&host) {
            host_not_found(page, &name);
            return selection;
        }
    }

    page.render_host_menu(&populate_host_menu(catalog, selection.host.as_deref()));

    let service_menu = populate_service_menu(
        catalog,
        selection.host.as_deref(),
        selection.service.as_deref(),
    );
    if service_menu.selected.is_none() {
        selection.service = None;
    }
    page.render_service_menu(&service_menu);

    let series_menu = populate_series_menu(
        catalog,
        selection.host.as_deref(),
        selection.service.as_deref(),
    );
    selection.series.retain(|key| series_menu.contains(key));
    select_default_series(&mut selection, defaults, &series_menu);
    page.render_series_menu(
        &series_menu,
        &selection.series,
        series_controls_visible(&series_menu),
        series_menu_rows(&series_menu),
    );

    page.render_period_menu(selection.periods);
    page.set_controls_expanded(selection.controls_expanded);
    page.set_fixed_scale_checked(selection.fixed_scale);
    page.set_geometry_choice(selection.geometry.as_deref());
    for period in Period::ALL {
        let expanded = selection.period_expanded(period);
        page.set_period_expanded(period, expanded, expansion_indicator(expanded));
    }

    selection
}

/// The host menu changed: rebuild the dependent menus around the surviving
/// state. An unknown host gets one alert and changes nothing.
pub fn host_changed(page: &mut dyn Page, catalog: &Catalog, selection: &mut Selection) {
    let choice = page.host_choice();
    if let Some(host) = &choice {
        if let HostLookup::NotFound(name) = catalog.find_host(host) {
            host_not_found(page, &name);
            return;
        }
    }
    let outcome = on_host_changed(catalog, selection, choice.as_deref());
    page.render_service_menu(&outcome.service_menu);
    page.render_series_menu(
        &outcome.series_menu,
        &selection.series,
        series_controls_visible(&outcome.series_menu),
        series_menu_rows(&outcome.series_menu),
    );
}

/// The service menu changed: rebuild the series menu around the surviving
/// selection.
pub fn service_changed(page: &mut dyn Page, catalog: &Catalog, selection: &mut Selection) {
    let choice = page.service_choice();
    let series_menu = on_service_changed(catalog, selection, choice.as_deref());
    page.render_series_menu(
        &series_menu,
        &selection.series,
        series_controls_visible(&series_menu),
        series_menu_rows(&series_menu),
    );
}

/// The update button: collect the current page state, keep what only the
/// query string knew (offset, pass-through), and navigate.
pub fn update_pressed(page: &mut dyn Page, defaults: &SelectionDefaults) {
    let carried = parse_selection_from_query(&page.query(), defaults);
    let selection = Selection {
        host: page.host_choice(),
        service: page.service_choice(),
        series: page.series_choice(),
        periods: page.period_choice(),
        geometry: page
            .geometry_choice()
            .filter(|value| !value.is_empty() && value != "default"),
        offset_secs: carried.offset_secs,
        fixed_scale: page.fixed_scale_checked(),
        controls_expanded: page.controls_checkbox_checked(),
        expanded_periods: page.expanded_periods(),
        pass_through: carried.pass_through,
    };
    let target = navigation_target(&page.path(), &selection);
    page.navigate(&target);
}

/// The series-controls expansion toggle.
pub fn toggle_controls(page: &mut dyn Page, selection: &mut Selection) {
    selection.toggle_controls_expanded();
    page.set_controls_expanded(selection.controls_expanded);
}

/// One period section's expansion toggle.
pub fn toggle_period(page: &mut dyn Page, selection: &mut Selection, period: Period) {
    selection.toggle_period_expanded(period);
    let expanded = selection.period_expanded(period);
    page.set_period_expanded(period, expanded, expansion_indicator(expanded));
}
