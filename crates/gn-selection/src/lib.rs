//! gn-selection: the cascading host, service and data-series selection,
//! round-tripped through the page's URL query string.
//!
//! Everything here is a pure derivation. The query string, catalog and
//! defaults come in as parameters; the next state and the menu models come
//! out. Rendering and ambient page reads live behind the page adapter in
//! gn-app, never here.

pub mod menu;
pub mod parse;
pub mod selection;
pub mod serialize;
pub mod transitions;

pub use menu::{
    populate_host_menu, populate_service_menu, populate_series_menu, series_controls_visible,
    series_menu_rows, MenuModel, NONE_LABEL,
};
pub use parse::{parse_selection_from_query, RECOGNIZED_KEYS};
pub use selection::{
    expansion_indicator, select_default_series, Selection, SelectionDefaults,
};
pub use serialize::{navigation_target, serialize_to_query, NavigationTarget};
pub use transitions::{on_host_changed, on_service_changed, HostChangeOutcome};
