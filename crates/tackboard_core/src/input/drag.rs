//! Per-sticker drag state machine.
//!
//! # Responsibility
//! - Capture the pointer-to-sticker offset on pointer-down.
//! - Translate pointer-move events into new sticker positions while a drag
//!   is active.
//!
//! # Invariants
//! - The grab offset is fixed for the lifetime of one drag; the sticker
//!   never jumps relative to the pointer.
//! - Pointer-down is ignored while the sticker's text editor is open.
//! - Pointer-up always returns to `Idle`, even if no move was observed.

use crate::model::board::Position;

/// Current phase of one sticker's drag interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { offset: Position },
}

/// Tracks a single sticker's drag lifecycle.
///
/// The host registers pointer-move/up listeners only while `is_dragging()`
/// reports true and tears them down on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragController {
    phase: DragPhase,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self { phase: DragPhase::Idle }
    }

    /// Whether a drag is in progress and move/up events should be routed
    /// here.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Begins a drag at `pointer` on a sticker currently at
    /// `sticker_position`.
    ///
    /// Suppressed while the sticker's text editor is open. Returns whether
    /// a drag started.
    pub fn pointer_down(
        &mut self,
        pointer: Position,
        sticker_position: Position,
        text_editing: bool,
    ) -> bool {
        if text_editing {
            return false;
        }
        self.phase = DragPhase::Dragging {
            offset: Position::new(
                pointer.x - sticker_position.x,
                pointer.y - sticker_position.y,
            ),
        };
        true
    }

    /// Maps a pointer position to the sticker's new canvas position.
    ///
    /// Returns `None` when no drag is active; moves outside a drag carry no
    /// meaning and must not reposition the sticker.
    pub fn pointer_move(&self, pointer: Position) -> Option<Position> {
        match self.phase {
            DragPhase::Dragging { offset } => {
                Some(Position::new(pointer.x - offset.x, pointer.y - offset.y))
            }
            DragPhase::Idle => None,
        }
    }

    /// Ends the drag. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }
}
