// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use common::{board, claim, setup_3x3, RecordingArtist};
use dotbox_core::GameError;
use dotbox_ui_egui::{BoardRenderer, PointerEvent, ScreenPoint, Viewport};

#[test]
fn lattice_points_round_trip_to_an_incident_edge() {
    let canvases = [
        (3, 3, 300.0, 300.0),
        (5, 5, 500.0, 500.0),
        (5, 3, 500.0, 300.0),
        // Sizes that do not divide evenly into cells
        (3, 3, 301.0, 301.0),
        (6, 6, 517.3, 517.3),
        (7, 4, 613.7, 409.1),
        (9, 5, 777.7, 333.3),
    ];
    for (w, h, cw, ch) in canvases {
        let board = board(w, h);
        let renderer = BoardRenderer::new(Viewport::new(cw, ch));

        for p in 0..board.point_count() {
            let sp = renderer.map_point_to_screen(p, &board);
            let edge = renderer.map_screen_to_edge(sp, &board);
            if p / w == h - 1 {
                // The tie-break picks the vertical edge going down; the last row has none
                assert!(edge.is_none(), "point {} on {}x{}", p, w, h);
            } else {
                let edge = edge.unwrap_or_else(|| panic!("point {} on {}x{}", p, w, h));
                assert_eq!(edge.ends, (p, p + w));
            }
        }
    }
}

#[test]
fn pointer_near_top_left_horizontal_edge() {
    let (renderer, mut board) = setup_3x3();
    let edge = renderer
        .map_screen_to_edge(ScreenPoint::new(100.0, 50.0), &board)
        .unwrap();
    assert_eq!(edge.ends, (0, 1));

    // Above the canvas: clamped down onto the first row
    let mut artist = RecordingArtist::default();
    let outcome = renderer
        .select_edge(PointerEvent::new(100.0, -40.0), 0, &mut board, &mut artist)
        .unwrap()
        .unwrap();
    assert_eq!(board.edge(outcome.edge).unwrap().ends, (0, 1));
    assert_eq!(board.get_edge(0, 1).unwrap().owner, Some(0));
}

#[test]
fn select_edge_plays_and_redraws() {
    let (renderer, mut board) = setup_3x3();
    let mut artist = RecordingArtist::default();

    let outcome = renderer
        .select_edge(PointerEvent::new(150.0, 200.0), 0, &mut board, &mut artist)
        .unwrap()
        .expect("edge under pointer");

    assert_eq!(board.edge(outcome.edge).unwrap().ends, (4, 7));
    assert_eq!(outcome.next_player, 1);
    assert_eq!(artist.clears(), 1);
    assert_eq!(artist.points().len(), 9);
    assert_eq!(
        artist.edges().iter().filter(|(_, owner)| *owner == Some(0)).count(),
        1
    );
}

#[test]
fn select_edge_respects_canvas_offset() {
    init();
    let mut board = board(3, 3);
    let renderer = BoardRenderer::new(Viewport::new(300.0, 300.0).at(40.0, 25.0));
    let mut artist = RecordingArtist::default();

    let outcome = renderer
        .select_edge(PointerEvent::new(140.0, 75.0), 0, &mut board, &mut artist)
        .unwrap()
        .unwrap();
    assert_eq!(board.edge(outcome.edge).unwrap().ends, (0, 1));
}

#[test]
fn taken_edge_still_reaches_the_board() {
    let (renderer, mut board) = setup_3x3();
    claim(&mut board, 0, 1);
    let taken = board.get_edge(0, 1).unwrap().id;
    let mover = board.current_player().id;

    let mut artist = RecordingArtist::default();
    let click = PointerEvent::new(100.0, 50.0);
    let result = renderer.select_edge(click, mover, &mut board, &mut artist);

    assert_eq!(result, Err(GameError::EdgeTaken(taken)));
    // Board state untouched, canvas repainted anyway
    assert_eq!(board.get_edge(0, 1).unwrap().owner, Some(0));
    assert_eq!(board.current_player().id, mover);
    assert_eq!(artist.clears(), 1);
}

#[test]
fn wrong_player_is_reported() {
    let (renderer, mut board) = setup_3x3();
    let mut artist = RecordingArtist::default();
    let result = renderer.select_edge(PointerEvent::new(100.0, 50.0), 1, &mut board, &mut artist);
    assert_eq!(result, Err(GameError::NotYourTurn(1)));
    assert!(board.edges().iter().all(|e| e.owner.is_none()));
}

#[test]
fn click_below_last_row_point_is_a_no_op() {
    let (renderer, mut board) = setup_3x3();
    let mut artist = RecordingArtist::default();

    // Clamped onto point 7 exactly: the tie-break asks for a vertical edge below it
    let result = renderer.select_edge(PointerEvent::new(150.0, 290.0), 0, &mut board, &mut artist);
    assert_eq!(result, Ok(None));
    assert!(artist.calls.is_empty());
    assert!(board.edges().iter().all(|e| e.owner.is_none()));
}

#[test]
fn zero_sized_canvas_never_resolves() {
    init();
    let mut board = board(3, 3);
    let renderer = BoardRenderer::default();
    let mut artist = RecordingArtist::default();
    let result = renderer.select_edge(PointerEvent::new(10.0, 10.0), 0, &mut board, &mut artist);
    assert_eq!(result, Ok(None));
}

fn init() {
    common::init_logging();
}
