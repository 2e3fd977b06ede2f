//! Board session service and persistence bridge.
//!
//! # Responsibility
//! - Drive the `Uninitialized -> Loading -> Ready` session lifecycle.
//! - Route mutations through the board store and schedule debounced writes.
//! - Wire the single active drag to sticker position updates.
//!
//! # Invariants
//! - Mutations outside `Ready` are suppressed no-ops; nothing is written
//!   before the initial load settles.
//! - Guest sessions (no user id) never schedule or issue writes.
//! - Identity changes cancel any pending write before reloading.
//! - Every write carries the full board snapshot, never a diff.

use std::time::Instant;

use log::{error, info, warn};

use crate::identity::IdentityProvider;
use crate::input::drag::DragController;
use crate::model::board::{BoardSnapshot, Column, Position, Sticker, StickerId, UserId};
use crate::repo::board_repo::{BoardRepository, RepoResult};
use crate::store::board_store::{BoardStore, ColumnPatch, StickerPatch};
use crate::sync::debounce::WriteDebouncer;

/// Lifecycle phase of one board session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No identity resolution has happened yet.
    Uninitialized,
    /// A load is in flight for a resolved user.
    Loading,
    /// The board is interactive.
    Ready,
}

impl SessionPhase {
    fn label(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Ready => "ready",
        }
    }
}

/// Result of one `tick` pass over the write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No write was due.
    Idle,
    /// A due snapshot was written.
    Saved,
}

/// Session-level facade over store, drag input and persistence.
pub struct BoardService<R: BoardRepository> {
    repo: R,
    phase: SessionPhase,
    user: Option<UserId>,
    store: BoardStore,
    debouncer: WriteDebouncer,
    active_drag: Option<(StickerId, DragController)>,
}

impl<R: BoardRepository> BoardService<R> {
    /// Creates an unresolved session over the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            phase: SessionPhase::Uninitialized,
            user: None,
            store: BoardStore::new(),
            debouncer: WriteDebouncer::default(),
            active_drag: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        self.store.columns()
    }

    pub fn stickers(&self) -> &[Sticker] {
        self.store.stickers()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    pub fn has_pending_write(&self) -> bool {
        self.debouncer.has_pending()
    }

    /// Re-runs identity resolution when the provider reports a change.
    ///
    /// A provider that has not finished loading leaves the session untouched;
    /// an unchanged identity on an already-resolved session is a no-op, so
    /// repeated host calls never trigger redundant loads.
    pub fn sync_identity(&mut self, provider: &dyn IdentityProvider) {
        if !provider.is_loaded() {
            return;
        }
        let reported = provider.current_user();
        if self.phase != SessionPhase::Uninitialized && reported == self.user {
            return;
        }
        self.resolve_identity(reported);
    }

    /// Runs the resolution transition for `user`.
    ///
    /// Cancels any pending write, loads the user's record (or starts empty
    /// for guests, absent records and failed loads), then enters `Ready`.
    pub fn resolve_identity(&mut self, user: Option<UserId>) {
        if self.debouncer.cancel_pending() {
            info!("event=board_save module=service status=canceled reason=identity_change");
        }
        self.active_drag = None;
        self.phase = SessionPhase::Loading;

        let Some(user_id) = user else {
            self.store.replace(BoardSnapshot::default());
            self.user = None;
            self.phase = SessionPhase::Ready;
            info!("event=board_load module=service status=ok mode=guest");
            return;
        };

        let snapshot = match self.repo.load(&user_id) {
            Ok(Some(snapshot)) => {
                info!(
                    "event=board_load module=service status=ok found=true columns={} stickers={}",
                    snapshot.columns.len(),
                    snapshot.stickers.len()
                );
                snapshot
            }
            Ok(None) => {
                info!("event=board_load module=service status=ok found=false");
                BoardSnapshot::default()
            }
            Err(err) => {
                error!("event=board_load module=service status=error error={err}");
                BoardSnapshot::default()
            }
        };

        self.store.replace(snapshot);
        self.user = Some(user_id);
        self.phase = SessionPhase::Ready;
    }

    /// Saves a due snapshot, if any. Called from the host's event loop.
    ///
    /// A failed save is logged and returned, never retried; the next edit
    /// schedules a fresh write.
    pub fn tick(&mut self, now: Instant) -> RepoResult<TickOutcome> {
        let Some(snapshot) = self.debouncer.take_due(now) else {
            return Ok(TickOutcome::Idle);
        };
        let Some(user_id) = self.user.clone() else {
            return Ok(TickOutcome::Idle);
        };

        match self.repo.save(&user_id, &snapshot) {
            Ok(()) => {
                info!(
                    "event=board_save module=service status=ok columns={} stickers={}",
                    snapshot.columns.len(),
                    snapshot.stickers.len()
                );
                Ok(TickOutcome::Saved)
            }
            Err(err) => {
                error!("event=board_save module=service status=error error={err}");
                Err(err)
            }
        }
    }

    pub fn add_column(&mut self, title: &str, now: Instant) -> Option<Column> {
        if !self.guard_ready("column_add") {
            return None;
        }
        let column = self.store.add_column(title)?;
        self.mark_changed(now);
        Some(column)
    }

    pub fn update_column(&mut self, id: &str, patch: ColumnPatch, now: Instant) -> bool {
        if !self.guard_ready("column_update") {
            return false;
        }
        let changed = self.store.update_column(id, patch);
        if changed {
            self.mark_changed(now);
        }
        changed
    }

    pub fn delete_column(&mut self, id: &str, now: Instant) -> Option<usize> {
        if !self.guard_ready("column_delete") {
            return None;
        }
        let cascaded = self.store.delete_column(id)?;
        self.mark_changed(now);
        Some(cascaded)
    }

    pub fn add_sticker(
        &mut self,
        column_id: &str,
        column_index: usize,
        now: Instant,
    ) -> Option<Sticker> {
        if !self.guard_ready("sticker_add") {
            return None;
        }
        let sticker = self.store.add_sticker(column_id, column_index);
        self.mark_changed(now);
        Some(sticker)
    }

    pub fn update_sticker(&mut self, id: &str, patch: StickerPatch, now: Instant) -> bool {
        if !self.guard_ready("sticker_update") {
            return false;
        }
        let changed = self.store.update_sticker(id, patch);
        if changed {
            self.mark_changed(now);
        }
        changed
    }

    pub fn delete_sticker(&mut self, id: &str, now: Instant) -> bool {
        if !self.guard_ready("sticker_delete") {
            return false;
        }
        let deleted = self.store.delete_sticker(id);
        if deleted {
            if matches!(&self.active_drag, Some((dragged, _)) if dragged.as_str() == id) {
                self.active_drag = None;
            }
            self.mark_changed(now);
        }
        deleted
    }

    pub fn cycle_sticker_color(&mut self, id: &str, now: Instant) -> bool {
        if !self.guard_ready("sticker_color_cycle") {
            return false;
        }
        let changed = self.store.cycle_sticker_color(id);
        if changed {
            self.mark_changed(now);
        }
        changed
    }

    /// Whether a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        matches!(&self.active_drag, Some((_, ctrl)) if ctrl.is_dragging())
    }

    /// Starts dragging the sticker with `id` from `pointer`.
    ///
    /// Suppressed while `text_editing` (the sticker's text editor is open)
    /// and for unknown ids. Returns whether a drag started.
    pub fn begin_drag(&mut self, id: &str, pointer: Position, text_editing: bool) -> bool {
        if !self.guard_ready("drag_begin") {
            return false;
        }
        let Some(sticker) = self.store.stickers().iter().find(|s| s.id == id) else {
            return false;
        };
        let mut controller = DragController::new();
        if !controller.pointer_down(pointer, sticker.position, text_editing) {
            return false;
        }
        self.active_drag = Some((sticker.id.clone(), controller));
        true
    }

    /// Routes a pointer-move into a sticker position update.
    ///
    /// Every move mutates the store immediately; only persistence debounces.
    pub fn drag_to(&mut self, pointer: Position, now: Instant) -> bool {
        let Some((id, controller)) = &self.active_drag else {
            return false;
        };
        let Some(position) = controller.pointer_move(pointer) else {
            return false;
        };
        let id = id.clone();
        self.update_sticker(
            &id,
            StickerPatch {
                position: Some(position),
                ..StickerPatch::default()
            },
            now,
        )
    }

    /// Ends the active drag, wherever the pointer is.
    pub fn end_drag(&mut self) -> bool {
        match self.active_drag.take() {
            Some((_, mut controller)) => controller.pointer_up(),
            None => false,
        }
    }

    fn guard_ready(&self, event: &str) -> bool {
        if self.phase == SessionPhase::Ready {
            return true;
        }
        warn!(
            "event={event} module=service status=suppressed phase={}",
            self.phase.label()
        );
        false
    }

    fn mark_changed(&mut self, now: Instant) {
        if self.user.is_some() {
            self.debouncer.schedule(self.store.snapshot(), now);
        }
    }
}
