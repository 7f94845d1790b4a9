//! History navigation through the whiteboard: undo, redo, clear, shortcuts.

use crate::helpers::{TestBoardBuilder, assert_shape_count, coords_of, drag, draw};
use sketchboard::input::{KeyInput, PointerInput, ShortcutAction};
use sketchboard::{Coords, ToolType, WhiteboardError};

fn board_with_three_shapes() -> sketchboard::Whiteboard {
    let mut board = TestBoardBuilder::new().build();
    draw(&mut board, ToolType::Rectangle, (0.0, 0.0), (10.0, 10.0));
    draw(&mut board, ToolType::Line, (20.0, 20.0), (30.0, 30.0));
    draw(&mut board, ToolType::Pencil, (40.0, 40.0), (45.0, 45.0));
    board
}

#[test]
fn test_undo_redo_walks_history() {
    let mut board = board_with_three_shapes();
    assert_eq!(board.history().len(), 4);

    for expected in [2, 1, 0] {
        assert!(board.undo());
        assert_shape_count(&board, expected);
    }
    assert!(!board.undo());
    assert!(!board.history().can_undo());

    for expected in [1, 2, 3] {
        assert!(board.redo());
        assert_shape_count(&board, expected);
    }
    assert!(!board.redo());
    assert_eq!(board.history().len(), 4);
}

#[test]
fn test_draw_after_undo_discards_redo() {
    let mut board = board_with_three_shapes();

    board.undo();
    board.undo();
    draw(&mut board, ToolType::Rectangle, (100.0, 100.0), (120.0, 120.0));

    assert_eq!(board.history().len(), 3);
    assert!(!board.history().can_redo());
    assert!(!board.redo());
    assert_shape_count(&board, 2);
    assert_eq!(coords_of(&board, 1), Coords::new(100.0, 100.0, 120.0, 120.0));
}

#[test]
fn test_long_drag_is_one_step() {
    let mut board = TestBoardBuilder::new().with_tool(ToolType::Line).build();
    let path: Vec<(f64, f64)> = (1..=100).map(|i| (i as f64, i as f64 * 2.0)).collect();

    drag(&mut board, (0.0, 0.0), &path);

    assert_eq!(board.history().len(), 2);
    assert_eq!(coords_of(&board, 0), Coords::new(0.0, 0.0, 100.0, 200.0));
}

#[test]
fn test_undo_move_restores_position() {
    let mut board = TestBoardBuilder::new()
        .with_rectangle(10.0, 10.0, 50.0, 40.0)
        .with_tool(ToolType::Selection)
        .build();

    drag(&mut board, (30.0, 25.0), &[(40.0, 35.0), (130.0, 125.0)]);
    assert_eq!(coords_of(&board, 0), Coords::new(110.0, 110.0, 150.0, 140.0));

    assert!(board.undo());
    assert_eq!(coords_of(&board, 0), Coords::new(10.0, 10.0, 50.0, 40.0));

    assert!(board.redo());
    assert_eq!(coords_of(&board, 0), Coords::new(110.0, 110.0, 150.0, 140.0));
}

#[test]
fn test_undo_resize_restores_shape() {
    let mut board = TestBoardBuilder::new()
        .with_rectangle(10.0, 10.0, 50.0, 40.0)
        .with_tool(ToolType::Selection)
        .build();

    drag(&mut board, (10.0, 10.0), &[(80.0, 90.0)]);
    board.undo();

    assert_eq!(coords_of(&board, 0), Coords::new(10.0, 10.0, 50.0, 40.0));
}

#[test]
fn test_clear_is_undoable() {
    let mut board = board_with_three_shapes();

    board.clear();
    assert_shape_count(&board, 0);
    assert_eq!(board.history().len(), 5);

    assert!(board.undo());
    assert_shape_count(&board, 3);
}

#[test]
fn test_keyboard_shortcuts() {
    let mut board = board_with_three_shapes();

    assert_eq!(
        board.handle_key(&KeyInput::new("z").with_control()),
        Some(ShortcutAction::Undo)
    );
    assert_shape_count(&board, 2);

    assert_eq!(
        board.handle_key(&KeyInput::new("y").with_control()),
        Some(ShortcutAction::Redo)
    );
    assert_shape_count(&board, 3);

    board.handle_key(&KeyInput::new("z").with_platform());
    board.handle_key(&KeyInput::new("z").with_platform().with_shift());
    assert_shape_count(&board, 3);

    assert_eq!(board.handle_key(&KeyInput::new("z")), None);
    assert_shape_count(&board, 3);
}

#[test]
fn test_undo_mid_gesture_abandons_it() {
    let mut board = TestBoardBuilder::new().with_tool(ToolType::Rectangle).build();

    board.handle_pointer_down(&PointerInput::mouse(10.0, 10.0)).unwrap();
    board.undo();

    let err = board.handle_pointer_move(&PointerInput::mouse(20.0, 20.0)).unwrap_err();
    assert!(matches!(err, WhiteboardError::UnknownShape(0)));
    assert!(board.interaction().is_idle());

    board.handle_pointer_up().unwrap();
    assert_shape_count(&board, 0);
    assert!(board.history().can_redo());
}

#[test]
fn test_unknown_tool_leaves_history_alone() {
    let mut board = board_with_three_shapes();
    board.set_tool(ToolType::Line);

    let err = board.select_tool("eraser").unwrap_err();

    assert!(matches!(err, WhiteboardError::UnsupportedTool { .. }));
    assert_eq!(board.tool(), ToolType::Line);
    assert_eq!(board.history().len(), 4);

    board.select_tool("rectangle").unwrap();
    assert_eq!(board.tool(), ToolType::Rectangle);
}
