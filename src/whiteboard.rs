//! The whiteboard controller.
//!
//! A [`Whiteboard`] owns everything one board needs while it is open: the
//! snapshot history, the selected tool, the gesture state machine and a hit
//! tester over the displayed snapshot. Pointer handlers live in
//! [`crate::input`]; this module holds construction, tool and history
//! commands, and the hand-offs to the store and exporter.

use crate::error::{WhiteboardError, WhiteboardResult};
use crate::export::{ExportedImage, Exporter};
use crate::hit_testing::{Hit, HitTester};
use crate::history::History;
use crate::input::{InteractionState, KeyInput, ShortcutAction, shortcut_for};
use crate::settings::Settings;
use crate::shape::{Shape, ShapeCollection, ShapeId};
use crate::store::{BoardId, BoardStore};
use crate::types::{Coords, CursorStyle, ToolType};
use tracing::{debug, warn};

pub struct Whiteboard {
    id: BoardId,
    history: History<ShapeCollection>,
    tool: ToolType,
    stroke_size: f64,
    pub(crate) input_state: InteractionState,
    pub(crate) hit_tester: HitTester,
    pub(crate) cursor: CursorStyle,
}

impl Whiteboard {
    /// A board whose history starts at `initial`.
    pub fn new(id: BoardId, initial: ShapeCollection, settings: &Settings) -> Self {
        Self {
            id,
            history: History::new(initial),
            tool: settings.default_tool,
            stroke_size: settings.stroke_size,
            input_state: InteractionState::Idle,
            hit_tester: HitTester::new(settings.hit),
            cursor: CursorStyle::Default,
        }
    }

    /// Open a board, seeded from its last saved state (empty if never saved).
    pub fn open(id: BoardId, store: &BoardStore, settings: &Settings) -> Self {
        let initial = store.load(&id).cloned().unwrap_or_default();
        debug!(board = %id, shapes = initial.len(), "opening whiteboard");
        Self::new(id, initial, settings)
    }

    pub fn id(&self) -> &BoardId {
        &self.id
    }

    /// Shapes in the displayed snapshot.
    pub fn elements(&self) -> &ShapeCollection {
        self.history.current()
    }

    pub fn history(&self) -> &History<ShapeCollection> {
        &self.history
    }

    pub fn tool(&self) -> ToolType {
        self.tool
    }

    pub fn stroke_size(&self) -> f64 {
        self.stroke_size
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.input_state
    }

    /// Cursor hint from the last pointer move.
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Switch tools. Any gesture in progress is abandoned as-is.
    pub fn set_tool(&mut self, tool: ToolType) {
        if self.tool != tool {
            debug!(from = %self.tool, to = %tool, "tool changed");
        }
        self.tool = tool;
        self.input_state.reset();
        self.cursor = CursorStyle::Default;
    }

    /// Switch tools by identifier, rejecting unknown ids.
    pub fn select_tool(&mut self, tool_id: &str) -> WhiteboardResult<()> {
        let tool = tool_id.parse::<ToolType>().inspect_err(|e| warn!("{}", e))?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            self.hit_tester.invalidate();
        }
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            self.hit_tester.invalidate();
        }
        moved
    }

    /// Remove every shape. Undoable.
    pub fn clear(&mut self) {
        self.commit(ShapeCollection::new(), false);
    }

    /// Run the history shortcut for a key press, if there is one.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<ShortcutAction> {
        let action = shortcut_for(input)?;
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
        };
        Some(action)
    }

    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    /// First shape, in insertion order, under `(x, y)`.
    pub fn element_at(&mut self, x: f64, y: f64) -> Option<Hit> {
        self.hit_tester.element_at(x, y, self.history.current())
    }

    /// Write the displayed snapshot to the store.
    pub fn save(&self, store: &mut BoardStore) {
        store.save(self.id.clone(), self.elements().clone());
    }

    /// Save the board, then export it for image generation.
    ///
    /// The store is updated even when the export fails.
    pub fn prepare_generation(&self, store: &mut BoardStore, exporter: &dyn Exporter) -> WhiteboardResult<ExportedImage> {
        self.save(store);
        exporter.export(self.elements()).inspect_err(|e| {
            warn!(board = %self.id, "export failed: {}", e);
        })
    }

    pub(crate) fn commit(&mut self, shapes: ShapeCollection, overwrite: bool) {
        self.history.commit(shapes, overwrite);
        self.hit_tester.invalidate();
    }

    /// Append a copy of the displayed snapshot, so the gesture that follows
    /// overwrites the copy and undoes as one step.
    pub(crate) fn checkpoint(&mut self) {
        let unchanged = self.elements().clone();
        self.history.commit(unchanged, false);
    }

    /// Overwrite-commit `shape` at `id`, re-indexing only that shape.
    pub(crate) fn replace_in_place(&mut self, id: ShapeId, shape: Shape) -> WhiteboardResult<()> {
        let next = self.elements().with_replaced(id, shape)?;
        self.history.commit(next, true);
        if let Some(shape) = self.history.current().get(id) {
            self.hit_tester.refresh_shape(id, shape);
        }
        Ok(())
    }

    /// Overwrite-commit the shape at `id` with a gesture update applied.
    pub(crate) fn update_element(&mut self, id: ShapeId, coords: Coords) -> WhiteboardResult<()> {
        let mut shape = self
            .elements()
            .get(id)
            .cloned()
            .ok_or(WhiteboardError::UnknownShape(id))?;
        shape.update(coords);
        self.replace_in_place(id, shape)
    }
}
