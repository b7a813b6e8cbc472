//! Wiring between page pointer events and the zoom engine.

use gn_zoom::{
    box_geometry, popup_anchor, DragState, GraphUrl, OverlayFrame, PointerButton, ReleaseAction,
    ZoomSession,
};

use crate::page::Page;

/// Drives drag-to-zoom over the page's graph image.
///
/// The controller holds the session and drag state; every effect goes back
/// out through the [`Page`] adapter. When the page has no image, events
/// fall through without doing anything.
#[derive(Debug, Clone, Default)]
pub struct ZoomController {
    session: Option<ZoomSession>,
    drag: DragState,
}

impl ZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&ZoomSession> {
        self.session.as_ref()
    }

    /// Pointer entered the image: re-derive the session against the current
    /// source and layout, record the original source once, and arm the
    /// capture panel over the plot area.
    pub fn pointer_enter(&mut self, page: &mut dyn Page, now: i64) {
        let Some(src) = page.image_src() else {
            self.abandon(page);
            return;
        };
        if page.image_original_src().is_none() {
            page.record_image_original_src(&src);
        }
        let graph = GraphUrl::parse(&src, now);
        let geometry = box_geometry(page.image_offset(), page.image_size(), &page.geometry_hints());
        page.place_capture_panel(&OverlayFrame::from(geometry));
        self.session = Some(ZoomSession::new(graph, geometry));
        self.drag.enter();
    }

    /// Pointer left the image: the gesture is over, overlays come down.
    pub fn pointer_leave(&mut self, page: &mut dyn Page) {
        self.abandon(page);
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if let Some(session) = &self.session {
            self.drag.press(session, x, y);
        }
    }

    pub fn pointer_move(&mut self, page: &mut dyn Page, x: f64) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(frame) = self.drag.motion(session, x) else {
            return;
        };
        if let Some(rect) = frame.rect {
            page.show_selection_box(&rect);
        }
        page.show_readout(&frame.readout, frame.readout_at);
    }

    pub fn pointer_up(&mut self, page: &mut dyn Page, button: PointerButton, now: i64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match self.drag.release(session, button) {
            ReleaseAction::None => {}
            ReleaseAction::HideBox => page.hide_selection_box(),
            ReleaseAction::Zoom { start, end } => {
                let url = session.graph.zoom_request_url(start, end);
                page.set_image_src(&url);
                session.refresh_from_url(&url, now);
                page.hide_selection_box();
            }
            ReleaseAction::Revert => {
                if let Some(original) = page.image_original_src() {
                    page.set_image_src(&original);
                    session.refresh_from_url(&original, now);
                }
            }
        }
    }

    fn abandon(&mut self, page: &mut dyn Page) {
        self.drag.leave();
        self.session = None;
        page.hide_selection_box();
        page.hide_readout();
    }
}

/// Show the hover popup for an element carrying a preview URL. Elements
/// without one show nothing.
pub fn show_graph_popup(page: &mut dyn Page, preview_url: Option<&str>, element_offset: (f64, f64)) {
    let Some(url) = preview_url.filter(|url| !url.is_empty()) else {
        return;
    };
    page.show_popup(url, popup_anchor(element_offset));
}

pub fn hide_graph_popup(page: &mut dyn Page) {
    page.hide_popup();
}
