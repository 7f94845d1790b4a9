//! Board lifecycle: open from the store, save, export and generate.

use crate::helpers::{TestBoardBuilder, assert_shape_count, coords_of, draw};
use futures::executor::block_on;
use sketchboard::comic::{Comic, GenerationError, GenerationSession, ImageGenerator};
use sketchboard::export::{ExportedImage, Exporter};
use sketchboard::notifications::ToastManager;
use sketchboard::settings::Settings;
use sketchboard::store::{BoardId, BoardStore};
use sketchboard::{Coords, ShapeCollection, ToolType, Whiteboard, WhiteboardError, WhiteboardResult};

/// Exporter that encodes the shape count as the image payload.
struct CountingExporter;

impl Exporter for CountingExporter {
    fn export(&self, shapes: &ShapeCollection) -> WhiteboardResult<ExportedImage> {
        Ok(ExportedImage::from_png_bytes(&[shapes.len() as u8]))
    }
}

struct FailingExporter;

impl Exporter for FailingExporter {
    fn export(&self, _shapes: &ShapeCollection) -> WhiteboardResult<ExportedImage> {
        Err(WhiteboardError::Export("surface lost".into()))
    }
}

struct EchoGenerator;

impl ImageGenerator for EchoGenerator {
    async fn generate(&self, image: &ExportedImage, style_prompt: &str) -> Result<String, GenerationError> {
        Ok(format!("{}#{}", image.as_str(), style_prompt))
    }
}

#[test]
fn test_open_unsaved_board_is_empty() {
    let store = BoardStore::new();
    let board = Whiteboard::open(BoardId::new("fresh"), &store, &Settings::default());

    assert_shape_count(&board, 0);
    assert_eq!(board.history().len(), 1);
    assert_eq!(board.tool(), ToolType::Pencil);
    assert_eq!(board.id().as_str(), "fresh");
}

#[test]
fn test_save_and_reopen() {
    let mut store = BoardStore::new();
    let settings = Settings::default();
    let id = BoardId::generate();

    let mut board = Whiteboard::open(id.clone(), &store, &settings);
    draw(&mut board, ToolType::Rectangle, (50.0, 40.0), (10.0, 10.0));
    board.save(&mut store);

    let reopened = Whiteboard::open(id, &store, &settings);
    assert_eq!(reopened.elements(), board.elements());
    // History does not survive a reopen
    assert_eq!(reopened.history().len(), 1);
    assert!(!reopened.history().can_undo());
}

#[test]
fn test_boards_do_not_share_state() {
    let mut store = BoardStore::new();
    let settings = Settings::default();

    let mut first = Whiteboard::open(BoardId::new("one"), &store, &settings);
    let mut second = Whiteboard::open(BoardId::new("two"), &store, &settings);
    draw(&mut first, ToolType::Line, (0.0, 0.0), (10.0, 0.0));
    first.save(&mut store);
    second.save(&mut store);

    assert_eq!(store.load(&BoardId::new("one")).map(ShapeCollection::len), Some(1));
    assert_eq!(store.load(&BoardId::new("two")).map(ShapeCollection::len), Some(0));
    assert_shape_count(&second, 0);
    assert!(!second.undo());
}

#[test]
fn test_prepare_generation_saves_then_exports() {
    let mut store = BoardStore::new();
    let mut board = TestBoardBuilder::new().build();
    draw(&mut board, ToolType::Rectangle, (0.0, 0.0), (10.0, 10.0));
    draw(&mut board, ToolType::Line, (0.0, 0.0), (10.0, 10.0));

    let image = board.prepare_generation(&mut store, &CountingExporter).unwrap();

    assert_eq!(image.png_bytes(), Some(vec![2]));
    assert_eq!(store.load(board.id()), Some(board.elements()));
}

#[test]
fn test_export_failure_still_saves() {
    let mut store = BoardStore::new();
    let board = TestBoardBuilder::new().with_rectangle(1.0, 1.0, 5.0, 5.0).build();

    let err = board.prepare_generation(&mut store, &FailingExporter).unwrap_err();

    assert!(matches!(err, WhiteboardError::Export(_)));
    assert_eq!(err.to_string(), "Export failed: surface lost");
    assert!(store.contains(board.id()));
}

#[test]
fn test_sketch_to_comic_panel() {
    let mut store = BoardStore::new();
    let mut notices = ToastManager::new();
    let mut comic = Comic::new();
    let mut board = TestBoardBuilder::new().build();
    draw(&mut board, ToolType::Rectangle, (10.0, 10.0), (50.0, 40.0));

    let sketch = board.prepare_generation(&mut store, &CountingExporter).unwrap();
    let settings = Settings {
        default_theme: "manga".to_string(),
        ..Settings::default()
    };
    let mut session = GenerationSession::from_settings(sketch, &settings).unwrap();
    block_on(session.spin(&EchoGenerator, &mut notices)).unwrap();
    session.confirm(&mut comic);

    assert_eq!(comic.len(), 1);
    assert!(comic.panels()[0].ends_with("#a manga panel"));
    assert_eq!(notices.count(), 0);
    // Generation never touches the board
    assert_eq!(board.history().len(), 2);
    assert_eq!(coords_of(&board, 0), Coords::new(10.0, 10.0, 50.0, 40.0));
}
