//! The pointer drag-state machine.
//!
//! `Idle` until the pointer enters the image, `Hovering` while over it,
//! `Dragging` between a press inside the box and the release. Leaving the
//! image (or losing it) resets to `Idle`. A right-button release asks for a
//! revert without moving between states.

use gn_core::time::format_timestamp;

use crate::geometry::{readout_anchor, selection_rect, OverlayFrame};
use crate::session::ZoomSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Overlay state for one pointer event: the drag rectangle while a drag is
/// live, plus the time readout.
#[derive(Debug, Clone, PartialEq)]
pub struct DragFrame {
    pub rect: Option<OverlayFrame>,
    pub readout: String,
    pub readout_at: (f64, f64),
}

/// What the host must do after a button release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseAction {
    /// The release was not part of a gesture.
    None,
    /// A zero-width drag: hide the rectangle, change nothing else.
    HideBox,
    /// Request a replacement image for this window.
    Zoom { start: i64, end: i64 },
    /// Restore the original image.
    Revert,
}

/// Pointer state over one wired image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    phase: DragPhase,
    press_x: Option<f64>,
    current_x: Option<f64>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Pointer entered the image. The caller re-derives the session first.
    pub fn enter(&mut self) {
        self.phase = DragPhase::Hovering;
        self.press_x = None;
        self.current_x = None;
    }

    /// Pointer left the image, or the image went away.
    pub fn leave(&mut self) {
        *self = DragState::default();
    }

    /// Button press. Only a press inside the box starts a drag; anything
    /// else is ignored.
    pub fn press(&mut self, session: &ZoomSession, x: f64, y: f64) -> bool {
        if self.phase == DragPhase::Idle || !session.geometry.contains(x, y) {
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.press_x = Some(x);
        self.current_x = Some(x);
        true
    }

    /// Pointer motion. While hovering the readout shows the time under the
    /// pointer; mid-drag it shows both ends of the dragged span, earliest
    /// first, alongside the rectangle.
    pub fn motion(&mut self, session: &ZoomSession, x: f64) -> Option<DragFrame> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Hovering => Some(DragFrame {
                rect: None,
                readout: format_timestamp(session.pixel_to_time(x)),
                readout_at: readout_anchor(&session.geometry, x),
            }),
            DragPhase::Dragging => {
                self.current_x = Some(x);
                let press_x = self.press_x.unwrap_or(x);
                let lo = press_x.min(x);
                let hi = press_x.max(x);
                Some(DragFrame {
                    rect: Some(selection_rect(&session.geometry, press_x, x)),
                    readout: format!(
                        "{} - {}",
                        format_timestamp(session.pixel_to_time(lo)),
                        format_timestamp(session.pixel_to_time(hi))
                    ),
                    readout_at: readout_anchor(&session.geometry, x),
                })
            }
        }
    }

    /// Button release. A left release finishes a live drag; a right release
    /// asks for a revert from any hover or drag state, leaving the state
    /// machine where it was.
    pub fn release(&mut self, session: &ZoomSession, button: PointerButton) -> ReleaseAction {
        match button {
            PointerButton::Right => {
                if self.phase == DragPhase::Idle {
                    ReleaseAction::None
                } else {
                    ReleaseAction::Revert
                }
            }
            PointerButton::Left => {
                if self.phase != DragPhase::Dragging {
                    return ReleaseAction::None;
                }
                self.phase = DragPhase::Hovering;
                let (press_x, current_x) = match (self.press_x.take(), self.current_x.take()) {
                    (Some(press_x), Some(current_x)) => (press_x, current_x),
                    _ => return ReleaseAction::HideBox,
                };
                let lo = press_x.min(current_x);
                let hi = press_x.max(current_x);
                if hi > lo {
                    ReleaseAction::Zoom {
                        start: session.pixel_to_time(lo),
                        end: session.pixel_to_time(hi),
                    }
                } else {
                    ReleaseAction::HideBox
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoxGeometry;
    use crate::graph_url::GraphUrl;

    fn session() -> ZoomSession {
        ZoomSession::new(
            GraphUrl {
                base: "graph.png".into(),
                start: 0,
                end: 1_000,
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

    #[test]
    fn idle_state_ignores_everything_but_enter() {
        let session = session();
        let mut drag = DragState::new();
        assert!(!drag.press(&session, 100.0, 100.0));
        assert_eq!(drag.motion(&session, 100.0), None);
        assert_eq!(drag.release(&session, PointerButton::Left), ReleaseAction::None);
        assert_eq!(drag.release(&session, PointerButton::Right), ReleaseAction::None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn entering_starts_a_hover_with_a_single_time_readout() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        assert_eq!(drag.phase(), DragPhase::Hovering);
        let frame = drag.motion(&session, 300.0).unwrap();
        assert!(frame.rect.is_none());
        assert_eq!(frame.readout, "1.1.1970 0:08");
        assert_eq!(frame.readout_at, (300.0, 2.0));
    }

    #[test]
    fn presses_outside_the_box_do_not_start_a_drag() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        assert!(!drag.press(&session, 10.0, 100.0));
        assert_eq!(drag.phase(), DragPhase::Hovering);
        assert!(!drag.press(&session, 100.0, 10.0));
        assert_eq!(drag.phase(), DragPhase::Hovering);
    }

    #[test]
    fn a_drag_shows_the_rectangle_and_both_span_ends() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        assert!(drag.press(&session, 300.0, 100.0));
        assert_eq!(drag.phase(), DragPhase::Dragging);
        let frame = drag.motion(&session, 150.0).unwrap();
        let rect = frame.rect.unwrap();
        assert_eq!(rect.left, 150.0);
        assert_eq!(rect.width, 150.0);
        // earliest end first even though the drag went leftwards
        assert_eq!(frame.readout, "1.1.1970 0:03 - 1.1.1970 0:08");
    }

    #[test]
    fn releasing_a_real_drag_requests_the_dragged_window() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        drag.press(&session, 100.0, 100.0);
        drag.motion(&session, 400.0);
        let action = drag.release(&session, PointerButton::Left);
        assert_eq!(action, ReleaseAction::Zoom { start: 100, end: 700 });
        assert_eq!(drag.phase(), DragPhase::Hovering);
    }

    #[test]
    fn leftward_drags_map_to_the_same_window_as_rightward_ones() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        drag.press(&session, 400.0, 100.0);
        drag.motion(&session, 100.0);
        let action = drag.release(&session, PointerButton::Left);
        assert_eq!(action, ReleaseAction::Zoom { start: 100, end: 700 });
    }

    #[test]
    fn zero_width_drags_only_hide_the_box() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        drag.press(&session, 250.0, 100.0);
        let action = drag.release(&session, PointerButton::Left);
        assert_eq!(action, ReleaseAction::HideBox);
        assert_eq!(drag.phase(), DragPhase::Hovering);
    }

    #[test]
    fn right_release_requests_a_revert_without_changing_state() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        assert_eq!(drag.release(&session, PointerButton::Right), ReleaseAction::Revert);
        assert_eq!(drag.phase(), DragPhase::Hovering);

        drag.press(&session, 250.0, 100.0);
        assert_eq!(drag.release(&session, PointerButton::Right), ReleaseAction::Revert);
        assert_eq!(drag.phase(), DragPhase::Dragging);
    }

    #[test]
    fn leaving_resets_to_idle_mid_drag() {
        let session = session();
        let mut drag = DragState::new();
        drag.enter();
        drag.press(&session, 250.0, 100.0);
        drag.leave();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.motion(&session, 300.0), None);
    }
}
