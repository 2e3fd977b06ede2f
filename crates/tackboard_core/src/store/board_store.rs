//! Owned board collections with replace-on-write mutation semantics.
//!
//! # Responsibility
//! - Hold the session's columns and stickers in insertion order.
//! - Apply merge-patch updates, cascading deletes and color cycling.
//!
//! # Invariants
//! - An update to an unknown id is a silent no-op; the collections are
//!   untouched and no placeholder record is created.
//! - Deleting a column removes every sticker whose `column_id` matches it
//!   in the same call.
//! - A patch carrying a blank column title is dropped in full, including any
//!   emoji change riding along with it.

use log::debug;

use crate::model::board::{BoardSnapshot, Column, ColumnId, Position, Sticker, StickerColor};

/// Horizontal span reserved per column when placing a new sticker.
pub const COLUMN_WIDTH: f64 = 400.0;
/// Horizontal inset of a fresh sticker within its column's span.
pub const STICKER_OFFSET_X: f64 = 50.0;
/// Vertical position of every fresh sticker.
pub const STICKER_DEFAULT_Y: f64 = 100.0;

/// Partial update for a column. `None` fields keep the current value.
#[derive(Debug, Clone, Default)]
pub struct ColumnPatch {
    pub title: Option<String>,
    pub emoji: Option<String>,
}

/// Partial update for a sticker. `None` fields keep the current value.
#[derive(Debug, Clone, Default)]
pub struct StickerPatch {
    pub text: Option<String>,
    pub color: Option<StickerColor>,
    pub column_id: Option<ColumnId>,
    pub position: Option<Position>,
}

/// Insertion-ordered board collections with a narrow mutating API.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    columns: Vec<Column>,
    stickers: Vec<Sticker>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    /// Returns a deep copy of the current state for persistence.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone(),
            stickers: self.stickers.clone(),
        }
    }

    /// Replaces the whole board, e.g. after loading a persisted record.
    pub fn replace(&mut self, snapshot: BoardSnapshot) {
        self.columns = snapshot.columns;
        self.stickers = snapshot.stickers;
        debug!(
            "event=board_replace module=store columns={} stickers={}",
            self.columns.len(),
            self.stickers.len()
        );
    }

    /// Appends a new column with the given title.
    ///
    /// Returns `None` without mutating when the title is blank after
    /// trimming.
    pub fn add_column(&mut self, title: &str) -> Option<Column> {
        if title.trim().is_empty() {
            debug!("event=column_add module=store status=rejected reason=blank_title");
            return None;
        }
        let column = Column::new(title);
        self.columns.push(column.clone());
        debug!(
            "event=column_add module=store status=ok columns={}",
            self.columns.len()
        );
        Some(column)
    }

    /// Merges `patch` into the column with `id` and replaces the record.
    ///
    /// A patch whose title is present but blank after trimming is dropped
    /// entirely. Returns whether a column was changed.
    pub fn update_column(&mut self, id: &str, patch: ColumnPatch) -> bool {
        if matches!(&patch.title, Some(title) if title.trim().is_empty()) {
            debug!("event=column_update module=store status=rejected reason=blank_title");
            return false;
        }
        let Some(existing) = self.columns.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        let mut merged = existing.clone();
        if let Some(title) = patch.title {
            merged.title = title;
        }
        if let Some(emoji) = patch.emoji {
            merged.emoji = emoji;
        }
        *existing = merged;
        debug!("event=column_update module=store status=ok");
        true
    }

    /// Removes the column with `id` and every sticker referencing it.
    ///
    /// Returns the number of cascaded sticker deletions, or `None` when no
    /// such column exists.
    pub fn delete_column(&mut self, id: &str) -> Option<usize> {
        let before = self.columns.len();
        self.columns.retain(|c| c.id != id);
        if self.columns.len() == before {
            return None;
        }
        let sticker_count = self.stickers.len();
        self.stickers.retain(|s| s.column_id != id);
        let cascaded = sticker_count - self.stickers.len();
        debug!(
            "event=column_delete module=store status=ok cascaded_stickers={}",
            cascaded
        );
        Some(cascaded)
    }

    /// Appends a default sticker placed within the column at `column_index`.
    ///
    /// The column id is taken on trust; placement depends only on the index
    /// of the column in display order.
    pub fn add_sticker(&mut self, column_id: &str, column_index: usize) -> Sticker {
        let position = Position::new(
            column_index as f64 * COLUMN_WIDTH + STICKER_OFFSET_X,
            STICKER_DEFAULT_Y,
        );
        let sticker = Sticker::new(column_id, position);
        self.stickers.push(sticker.clone());
        debug!(
            "event=sticker_add module=store status=ok stickers={}",
            self.stickers.len()
        );
        sticker
    }

    /// Merges `patch` into the sticker with `id` and replaces the record.
    ///
    /// Returns whether a sticker was changed.
    pub fn update_sticker(&mut self, id: &str, patch: StickerPatch) -> bool {
        let Some(existing) = self.stickers.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        let mut merged = existing.clone();
        if let Some(text) = patch.text {
            merged.text = text;
        }
        if let Some(color) = patch.color {
            merged.color = color;
        }
        if let Some(column_id) = patch.column_id {
            merged.column_id = column_id;
        }
        if let Some(position) = patch.position {
            merged.position = position;
        }
        *existing = merged;
        debug!("event=sticker_update module=store status=ok");
        true
    }

    /// Removes the sticker with `id`. Returns whether one was removed.
    pub fn delete_sticker(&mut self, id: &str) -> bool {
        let before = self.stickers.len();
        self.stickers.retain(|s| s.id != id);
        let removed = self.stickers.len() != before;
        if removed {
            debug!("event=sticker_delete module=store status=ok");
        }
        removed
    }

    /// Advances the sticker's color one step along the fixed cycle.
    ///
    /// Returns whether a sticker was changed.
    pub fn cycle_sticker_color(&mut self, id: &str) -> bool {
        let Some(existing) = self.stickers.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        let mut merged = existing.clone();
        merged.color = merged.color.next();
        *existing = merged;
        debug!("event=sticker_color_cycle module=store status=ok");
        true
    }
}
