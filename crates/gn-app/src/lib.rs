//! gn-app: the shared application layer for graphnav hosts.
//!
//! One seam for every frontend: a [`Page`] adapter owns the real page
//! elements, the services translate page events into the pure selection and
//! zoom crates, and apply the results back through the adapter. The
//! in-memory adapter used by tests and the CLI lives here too.

pub mod config;
pub mod error;
pub mod menu_service;
pub mod page;
pub mod zoom_service;

pub use config::{defaults_from_file, load_defaults, DefaultsFile};
pub use error::{AppError, AppResult};
pub use menu_service::{
    host_changed, initialize, service_changed, toggle_controls, toggle_period, update_pressed,
};
pub use page::{MemoryImage, MemoryPage, Page};
pub use zoom_service::{hide_graph_popup, show_graph_popup, ZoomController};
