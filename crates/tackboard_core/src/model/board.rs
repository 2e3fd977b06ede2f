//! Column and sticker domain records.
//!
//! # Responsibility
//! - Define the `Column`/`Sticker` records and their wire shape.
//! - Generate stable opaque entity ids.
//!
//! # Invariants
//! - Ids are random (UUID v4), never derived from wall-clock time, so rapid
//!   creation cannot collide.
//! - `Sticker::position` is independent of `column_id`; a sticker may sit
//!   anywhere on the canvas, including outside its nominal column region.
//! - Remote records may carry arbitrary opaque ids; ids are kept as plain
//!   strings and never re-parsed into structured form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a column.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ColumnId = String;

/// Stable identifier for a sticker.
pub type StickerId = String;

/// Opaque identifier handed out by the identity provider.
pub type UserId = String;

/// Default text for a freshly created sticker.
pub const DEFAULT_STICKER_TEXT: &str = "New task";

/// Returns a fresh opaque entity id.
pub fn generate_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sticker background color, a fixed cyclic set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerColor {
    Green,
    Purple,
    Yellow,
    White,
}

impl StickerColor {
    /// Cycle order used by the color-cycle action.
    pub const CYCLE: [StickerColor; 4] = [
        StickerColor::Green,
        StickerColor::Purple,
        StickerColor::Yellow,
        StickerColor::White,
    ];

    /// Returns the next color in the fixed green→purple→yellow→white cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Green => Self::Purple,
            Self::Purple => Self::Yellow,
            Self::Yellow => Self::White,
            Self::White => Self::Green,
        }
    }
}

/// 2D coordinate in canvas pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Named, optionally emoji-tagged grouping on the board.
///
/// A column is not a physical container: stickers reference it by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable opaque id, assigned at creation.
    pub id: ColumnId,
    /// Display title; blank titles are rejected at commit time.
    pub title: String,
    /// Single emoji glyph identifier; empty string means "no emoji set".
    pub emoji: String,
}

impl Column {
    /// Creates a column with a generated id and no emoji.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_entity_id(),
            title: title.into(),
            emoji: String::new(),
        }
    }
}

/// Positioned, colored, text-bearing note on the board canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    /// Stable opaque id, assigned at creation.
    pub id: StickerId,
    /// Free-form display text; may be multi-line.
    pub text: String,
    pub color: StickerColor,
    /// Soft reference to the owning column (value equality, cascade-deleted,
    /// not otherwise validated).
    pub column_id: ColumnId,
    /// Canvas position, independent of `column_id`.
    pub position: Position,
}

impl Sticker {
    /// Creates a sticker with a generated id and the default text/color.
    pub fn new(column_id: impl Into<ColumnId>, position: Position) -> Self {
        Self {
            id: generate_entity_id(),
            text: DEFAULT_STICKER_TEXT.to_string(),
            color: StickerColor::Yellow,
            column_id: column_id.into(),
            position,
        }
    }
}

/// Full board state, the unit of persistence (whole-record replace).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<Column>,
    pub stickers: Vec<Sticker>,
}

impl BoardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.stickers.is_empty()
    }
}
