//! Selection tool: picking up shapes to move or resize them.

use crate::helpers::{TestBoardBuilder, click, coords_of, drag};
use sketchboard::geometry::HitTolerance;
use sketchboard::input::{Action, PointerInput};
use sketchboard::settings::Settings;
use sketchboard::{Coords, CursorStyle, HitPosition, Point, ToolType};

fn selection_board() -> TestBoardBuilder {
    TestBoardBuilder::new().with_tool(ToolType::Selection)
}

// ============================================================================
// Moving
// ============================================================================

#[test]
fn test_move_rectangle_keeps_extent() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();

    drag(&mut board, (30.0, 25.0), &[(80.0, 60.0), (130.0, 125.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(110.0, 110.0, 150.0, 140.0));
    // Initial snapshot plus one for the move
    assert_eq!(board.history().len(), 2);
}

#[test]
fn test_move_line() {
    let mut board = selection_board().with_line(0.0, 0.0, 100.0, 0.0).build();

    drag(&mut board, (50.0, 0.0), &[(50.0, 30.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(0.0, 30.0, 100.0, 30.0));
}

#[test]
fn test_move_freehand_translates_every_point() {
    let mut board = selection_board().with_stroke(&[(0.0, 0.0), (5.0, 5.0)]).build();

    drag(&mut board, (5.0, 5.0), &[(15.0, 15.0)]);

    assert_eq!(
        board.elements().get(0).and_then(|s| s.points()),
        Some(&[Point::new(10.0, 10.0), Point::new(15.0, 15.0)][..])
    );
}

#[test]
fn test_moving_state_during_gesture() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();

    board.handle_pointer_down(&PointerInput::mouse(30.0, 25.0)).unwrap();

    assert_eq!(board.interaction().action(), Action::Moving);
    assert_eq!(board.interaction().selected_shape(), Some(0));
}

#[test]
fn test_overlap_picks_first_inserted_shape() {
    let mut board = selection_board()
        .with_rectangle(0.0, 0.0, 100.0, 100.0)
        .with_rectangle(50.0, 50.0, 150.0, 150.0)
        .build();

    drag(&mut board, (75.0, 75.0), &[(85.0, 75.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(10.0, 0.0, 110.0, 100.0));
    assert_eq!(coords_of(&board, 1), Coords::new(50.0, 50.0, 150.0, 150.0));
}

// ============================================================================
// Resizing
// ============================================================================

#[test]
fn test_resize_bottom_right() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();

    board.handle_pointer_down(&PointerInput::mouse(50.0, 40.0)).unwrap();
    assert!(board.interaction().is_resizing());
    board.handle_pointer_move(&PointerInput::mouse(70.0, 60.0)).unwrap();
    board.handle_pointer_up().unwrap();

    assert_eq!(coords_of(&board, 0), Coords::new(10.0, 10.0, 70.0, 60.0));
    assert_eq!(board.history().len(), 2);
}

#[test]
fn test_resize_top_left_past_opposite_corner() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();

    drag(&mut board, (10.0, 10.0), &[(80.0, 90.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(50.0, 40.0, 80.0, 90.0));
}

#[test]
fn test_resize_top_right_and_bottom_left() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();

    drag(&mut board, (50.0, 10.0), &[(60.0, 0.0)]);
    assert_eq!(coords_of(&board, 0), Coords::new(10.0, 0.0, 60.0, 40.0));

    drag(&mut board, (10.0, 40.0), &[(0.0, 50.0)]);
    assert_eq!(coords_of(&board, 0), Coords::new(0.0, 0.0, 60.0, 50.0));
}

#[test]
fn test_resize_line_end() {
    let mut board = selection_board().with_line(0.0, 0.0, 100.0, 0.0).build();

    drag(&mut board, (100.0, 0.0), &[(60.0, 80.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(0.0, 0.0, 60.0, 80.0));
}

#[test]
fn test_resize_line_start_past_end_is_canonicalized() {
    let mut board = selection_board().with_line(0.0, 0.0, 100.0, 0.0).build();

    drag(&mut board, (0.0, 0.0), &[(150.0, 10.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(100.0, 0.0, 150.0, 10.0));
}

#[test]
fn test_custom_handle_size() {
    let settings = Settings {
        hit: HitTolerance {
            near_point: 10.0,
            ..HitTolerance::default()
        },
        ..Settings::default()
    };
    let mut board = selection_board()
        .with_rectangle(10.0, 10.0, 50.0, 40.0)
        .with_settings(settings)
        .build();

    assert_eq!(board.element_at(2.0, 2.0).map(|hit| hit.position), Some(HitPosition::TopLeft));
    drag(&mut board, (2.0, 2.0), &[(0.0, 0.0)]);

    assert_eq!(coords_of(&board, 0), Coords::new(0.0, 0.0, 50.0, 40.0));
}

// ============================================================================
// Misses and hover
// ============================================================================

#[test]
fn test_click_on_empty_space_is_noop() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();

    click(&mut board, (300.0, 300.0));

    assert!(board.interaction().is_idle());
    assert_eq!(board.history().len(), 1);
    assert!(!board.history().can_redo());
}

#[test]
fn test_hover_cursor() {
    let mut board = selection_board().with_rectangle(10.0, 10.0, 50.0, 40.0).build();
    let mut hover = |x, y| {
        board.handle_pointer_move(&PointerInput::mouse(x, y)).unwrap();
        board.cursor()
    };

    assert_eq!(hover(10.0, 10.0), CursorStyle::NwseResize);
    assert_eq!(hover(50.0, 10.0), CursorStyle::NeswResize);
    assert_eq!(hover(30.0, 25.0), CursorStyle::Move);
    assert_eq!(hover(300.0, 300.0), CursorStyle::Default);
}

#[test]
fn test_hover_cursor_only_with_selection_tool() {
    let mut board = TestBoardBuilder::new()
        .with_rectangle(10.0, 10.0, 50.0, 40.0)
        .with_tool(ToolType::Line)
        .build();

    board.handle_pointer_move(&PointerInput::mouse(30.0, 25.0)).unwrap();

    assert_eq!(board.cursor(), CursorStyle::Default);
}

#[test]
fn test_hit_follows_moved_shape() {
    let mut board = selection_board().with_rectangle(0.0, 0.0, 20.0, 20.0).build();

    drag(&mut board, (10.0, 10.0), &[(210.0, 210.0)]);

    assert!(board.element_at(10.0, 10.0).is_none());
    assert_eq!(board.element_at(210.0, 210.0).map(|hit| hit.id), Some(0));
}

// ============================================================================
// Hit index upkeep
// ============================================================================

#[test]
fn test_drag_reindexes_only_the_dragged_shape() {
    let mut board = selection_board()
        .with_rectangle(10.0, 10.0, 50.0, 40.0)
        .with_rectangle(300.0, 300.0, 340.0, 330.0)
        .build();
    let path: Vec<(f64, f64)> = (1..=50).map(|i| (30.0 + 2.0 * i as f64, 25.0 + 2.0 * i as f64)).collect();

    drag(&mut board, (30.0, 25.0), &path);

    // Built once by the pointer-down hit test, never by the overwrite commits
    assert_eq!(board.hit_tester().rebuild_count(), 1);
    assert_eq!(coords_of(&board, 0), Coords::new(110.0, 110.0, 150.0, 140.0));
    assert!(board.element_at(30.0, 25.0).is_none());
    assert_eq!(board.element_at(130.0, 125.0).map(|hit| hit.id), Some(0));
    assert_eq!(board.element_at(320.0, 315.0).map(|hit| hit.id), Some(1));
    assert_eq!(board.hit_tester().rebuild_count(), 1);
}

#[test]
fn test_resize_and_freehand_move_keep_index_current() {
    let mut board = selection_board()
        .with_rectangle(10.0, 10.0, 50.0, 40.0)
        .with_stroke(&[(200.0, 200.0), (205.0, 205.0)])
        .build();

    drag(&mut board, (10.0, 10.0), &[(60.0, 60.0), (80.0, 90.0)]);
    drag(&mut board, (205.0, 205.0), &[(305.0, 305.0)]);

    assert_eq!(board.hit_tester().rebuild_count(), 1);
    assert_eq!(board.element_at(65.0, 65.0).map(|hit| hit.id), Some(0));
    assert_eq!(board.element_at(302.0, 302.0).map(|hit| hit.id), Some(1));
    assert!(board.element_at(202.0, 202.0).is_none());
}

#[test]
fn test_undo_rebuilds_index() {
    let mut board = selection_board().with_rectangle(0.0, 0.0, 20.0, 20.0).build();
    drag(&mut board, (10.0, 10.0), &[(210.0, 210.0)]);
    assert_eq!(board.hit_tester().rebuild_count(), 1);

    board.undo();

    assert_eq!(board.element_at(10.0, 10.0).map(|hit| hit.id), Some(0));
    assert_eq!(board.hit_tester().rebuild_count(), 2);
}
