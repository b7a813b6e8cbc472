//! gn-zoom: drag-to-zoom over a rendered time-series graph image.
//!
//! The engine recovers the image's time window from its own source URL,
//! maps drag pixels back onto times, and produces the replacement-image
//! request for the zoomed window. It owns no page elements and performs no
//! I/O: hosts feed it pointer events and apply the returned frames and
//! URLs through their own adapter.

pub mod drag;
pub mod geometry;
pub mod graph_url;
pub mod session;

pub use drag::{DragFrame, DragPhase, DragState, PointerButton, ReleaseAction};
pub use geometry::{
    box_geometry, popup_anchor, readout_anchor, selection_rect, BoxGeometry, GeometryHints,
    OverlayFrame,
};
pub use graph_url::GraphUrl;
pub use session::ZoomSession;
