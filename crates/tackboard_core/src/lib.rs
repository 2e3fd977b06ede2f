//! Core domain logic for Tackboard.
//! This crate is the single source of truth for board business invariants.

pub mod config;
pub mod db;
pub mod identity;
pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod sync;

pub use config::{database_path_from_env, resolve_database_path, ConfigError, DB_PATH_ENV};
pub use identity::{IdentityProvider, StaticIdentity};
pub use input::drag::DragController;
pub use input::editor::{CommitOutcome, CommitPolicy, EmojiPicker, InlineEditor};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{
    BoardSnapshot, Column, ColumnId, Position, Sticker, StickerColor, StickerId, UserId,
};
pub use repo::board_repo::{BoardRepository, RepoError, RepoResult, SqliteBoardRepository};
pub use service::board_service::{BoardService, SessionPhase, TickOutcome};
pub use store::board_store::{BoardStore, ColumnPatch, StickerPatch};
pub use sync::debounce::WriteDebouncer;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
