//! Where the plottable area of a graph image sits on the page.

/// The graph's plottable area, in page pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxGeometry {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Optional plot-area hints carried as attributes on the image element.
/// Absent hints fall back to the stock graph margins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryHints {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

// Stock margins of the rendered graph: title above, y-axis labels to the
// left, legend below.
const DEFAULT_TOP: f64 = 20.0;
const DEFAULT_LEFT: f64 = 50.0;
const RIGHT_MARGIN: f64 = 30.0;
const BOTTOM_MARGIN: f64 = 40.0;

/// Compute the plottable area from the image's page offset, its natural
/// size, and any hints.
pub fn box_geometry(
    image_offset: (f64, f64),
    image_size: (f64, f64),
    hints: &GeometryHints,
) -> BoxGeometry {
    let top = hints.top.unwrap_or(DEFAULT_TOP);
    let left = hints.left.unwrap_or(DEFAULT_LEFT);
    let width = hints.width.unwrap_or(image_size.0 - left - RIGHT_MARGIN);
    let height = hints.height.unwrap_or(image_size.1 - top - BOTTOM_MARGIN);
    BoxGeometry {
        left: image_offset.0 + left,
        top: image_offset.1 + top,
        width,
        height,
    }
}

/// A rectangle the host positions an overlay element over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<BoxGeometry> for OverlayFrame {
    fn from(geometry: BoxGeometry) -> Self {
        Self {
            left: geometry.left,
            top: geometry.top,
            width: geometry.width,
            height: geometry.height,
        }
    }
}

/// The translucent drag rectangle between two x positions. The left edge
/// never passes the right one; vertically it spans the whole box.
pub fn selection_rect(geometry: &BoxGeometry, x0: f64, x1: f64) -> OverlayFrame {
    OverlayFrame {
        left: x0.min(x1),
        top: geometry.top,
        width: (x1 - x0).abs(),
        height: geometry.height,
    }
}

/// Where the hover popup anchors, relative to the hovered element's page
/// offset.
pub fn popup_anchor(element_offset: (f64, f64)) -> (f64, f64) {
    (element_offset.0 + 20.0, element_offset.1 + 16.0)
}

/// Where the time readout sits: one text line above the plot, following the
/// pointer horizontally.
pub fn readout_anchor(geometry: &BoxGeometry, x: f64) -> (f64, f64) {
    (x, geometry.top - 18.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_margins_apply_without_hints() {
        let geometry = box_geometry((100.0, 200.0), (580.0, 240.0), &GeometryHints::default());
        assert_eq!(geometry.left, 150.0);
        assert_eq!(geometry.top, 220.0);
        assert_eq!(geometry.width, 500.0);
        assert_eq!(geometry.height, 180.0);
    }

    #[test]
    fn hints_override_the_stock_margins() {
        let hints = GeometryHints {
            top: Some(10.0),
            left: Some(40.0),
            width: Some(300.0),
            height: Some(100.0),
        };
        let geometry = box_geometry((0.0, 0.0), (580.0, 240.0), &hints);
        assert_eq!(geometry.left, 40.0);
        assert_eq!(geometry.top, 10.0);
        assert_eq!(geometry.width, 300.0);
        assert_eq!(geometry.height, 100.0);
    }

    #[test]
    fn partial_hints_mix_with_defaults() {
        let hints = GeometryHints {
            width: Some(320.0),
            ..GeometryHints::default()
        };
        let geometry = box_geometry((0.0, 0.0), (580.0, 240.0), &hints);
        assert_eq!(geometry.width, 320.0);
        assert_eq!(geometry.height, 180.0);
    }

    #[test]
    fn containment_includes_the_edges() {
        let geometry = BoxGeometry {
            left: 50.0,
            top: 20.0,
            width: 500.0,
            height: 180.0,
        };
        assert!(geometry.contains(50.0, 20.0));
        assert!(geometry.contains(550.0, 200.0));
        assert!(!geometry.contains(49.9, 100.0));
        assert!(!geometry.contains(551.0, 100.0));
        assert!(!geometry.contains(100.0, 201.0));
    }

    #[test]
    fn drag_rect_is_normalized_left_to_right() {
        let geometry = BoxGeometry {
            left: 50.0,
            top: 20.0,
            width: 500.0,
            height: 180.0,
        };
        let rect = selection_rect(&geometry, 300.0, 120.0);
        assert_eq!(rect.left, 120.0);
        assert_eq!(rect.width, 180.0);
        assert_eq!(rect.top, 20.0);
        assert_eq!(rect.height, 180.0);
    }

    #[test]
    fn popup_anchors_below_right_of_the_element() {
        assert_eq!(popup_anchor((10.0, 30.0)), (30.0, 46.0));
    }
}
