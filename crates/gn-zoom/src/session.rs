//! One image wired for zooming: its parsed time window plus its on-page
//! geometry.

use crate::geometry::BoxGeometry;
use crate::graph_url::GraphUrl;

/// A zoom session over one graph image.
///
/// Derived fresh whenever the pointer enters the image (the layout may have
/// shifted) and refreshed whenever the image's source changes, so the pixel
/// mapping always reflects what is actually displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSession {
    pub graph: GraphUrl,
    pub geometry: BoxGeometry,
}

impl ZoomSession {
    pub fn new(graph: GraphUrl, geometry: BoxGeometry) -> Self {
        Self { graph, geometry }
    }

    /// Translate a page x coordinate into a time inside the window. The box
    /// edges map exactly onto the window edges; positions outside the box
    /// extrapolate linearly.
    pub fn pixel_to_time(&self, x: f64) -> i64 {
        if self.geometry.width <= 0.0 {
            return self.graph.start;
        }
        let span = (self.graph.end - self.graph.start) as f64;
        let fraction = (x - self.geometry.left) / self.geometry.width;
        self.graph.start + (fraction * span) as i64
    }

    /// Re-derive the window after the image's source changed.
    pub fn refresh_from_url(&mut self, url: &str, now: i64) {
        self.graph = GraphUrl::parse(url, now);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn session(start: i64, end: i64) -> ZoomSession {
        ZoomSession::new(
            GraphUrl {
                base: "graph.png".into(),
                start,
                end,
                rrd_options: String::new(),
                pass_through: Vec::new(),
            },
            BoxGeometry {
                left: 50.0,
                top: 20.0,
                width: 500.0,
                height: 180.0,
            },
        )
    }

    proptest! {
        #[test]
        fn pixels_inside_the_box_stay_inside_the_window(
            x in 50.0f64..=550.0,
            span in 60i64..10_000_000,
        ) {
            let session = session(0, span);
            let t = session.pixel_to_time(x);
            prop_assert!(t >= 0);
            prop_assert!(t <= span);
        }

        #[test]
        fn mapping_is_monotone(a in 50.0f64..=550.0, b in 50.0f64..=550.0) {
            let session = session(0, 1_000_000);
            if a <= b {
                prop_assert!(session.pixel_to_time(a) <= session.pixel_to_time(b));
            } else {
                prop_assert!(session.pixel_to_time(a) >= session.pixel_to_time(b));
            }
        }
    }
}
