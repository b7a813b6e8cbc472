//! gn-catalog: the static host, service and data-series catalog behind
//! every navigation menu.
//!
//! The catalog arrives as nested JSON arrays produced by the graph backend,
//! gets ingested once per page, and is read-only from then on. Lookup misses
//! are explicit values, not errors: callers decide whether to tell the user
//! or degrade to an empty menu.

pub mod error;
pub mod load;
pub mod lookup;
pub mod model;

pub use error::{CatalogError, CatalogResult};
pub use load::{catalog_from_json, catalog_from_value, load_catalog};
pub use lookup::HostLookup;
pub use model::{Catalog, HostEntry, SeriesGroup, SeriesKey, ServiceEntry};
