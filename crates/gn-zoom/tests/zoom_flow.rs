//! End-to-end zoom flows: parse a graph URL, drag a window, build the
//! replacement request, and parse that request back.

use gn_zoom::{
    box_geometry, DragState, GeometryHints, GraphUrl, PointerButton, ReleaseAction, ZoomSession,
};

const NOW: i64 = 1_288_888_860; // on a minute boundary

fn wired_session(url: &str) -> ZoomSession {
    let graph = GraphUrl::parse(url, NOW);
    let geometry = box_geometry((0.0, 0.0), (580.0, 240.0), &GeometryHints::default());
    ZoomSession::new(graph, geometry)
}

#[test]
fn relative_window_resolves_against_the_clock() {
    let session = wired_session("graph.png?host=web1&rrdopts=-s+now-3600+-e+now");
    assert_eq!(session.graph.start, NOW - 3_600);
    assert_eq!(session.graph.end, NOW);
    assert_eq!(session.graph.rrd_options, "");
    assert_eq!(session.graph.pass_through, vec!["host=web1"]);
}

#[test]
fn a_full_drag_produces_a_parsable_replacement_url() {
    let mut session = wired_session("graph.png?host=web1&service=CPU&period=day");
    let mut drag = DragState::new();
    drag.enter();
    assert!(drag.press(&session, 150.0, 100.0));
    drag.motion(&session, 400.0);
    let ReleaseAction::Zoom { start, end } = drag.release(&session, PointerButton::Left) else {
        panic!("expected a zoom request");
    };
    assert!(start < end);
    assert!(start >= session.graph.start);
    assert!(end <= session.graph.end);

    let url = session.graph.zoom_request_url(start, end);
    assert!(url.starts_with("graph.png?host=web1&service=CPU&rrdopts="));

    // The session re-derives its window from the replacement URL, so the
    // next drag maps pixels against the zoomed window.
    session.refresh_from_url(&url, NOW);
    assert_eq!(session.graph.start, start);
    assert_eq!(session.graph.end, end);
    assert_eq!(session.graph.pass_through, vec!["host=web1", "service=CPU"]);
}

#[test]
fn zooming_twice_narrows_the_window_twice() {
    let mut session = wired_session("graph.png?period=day");
    let mut drag = DragState::new();
    drag.enter();

    drag.press(&session, 50.0, 100.0);
    drag.motion(&session, 300.0);
    let ReleaseAction::Zoom { start, end } = drag.release(&session, PointerButton::Left) else {
        panic!("expected a zoom request");
    };
    let first_span = end - start;
    let url = session.graph.zoom_request_url(start, end);
    session.refresh_from_url(&url, NOW);

    drag.press(&session, 50.0, 100.0);
    drag.motion(&session, 300.0);
    let ReleaseAction::Zoom { start, end } = drag.release(&session, PointerButton::Left) else {
        panic!("expected a zoom request");
    };
    assert!(end - start < first_span);
}

#[test]
fn edge_to_edge_drag_reproduces_the_whole_window() {
    let session = wired_session("graph.png?rrdopts=-s+1000000+-e+1036000");
    let mut drag = DragState::new();
    drag.enter();
    drag.press(&session, 50.0, 100.0);
    drag.motion(&session, 550.0);
    assert_eq!(
        drag.release(&session, PointerButton::Left),
        ReleaseAction::Zoom {
            start: 1_000_000,
            end: 1_036_000
        }
    );
}
