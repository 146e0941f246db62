//! Lifecycle Controller
//!
//! Reacts to outline lifecycle notifications from the host and drives capture,
//! replay, the store, and persistence at the right moments.
//!
//! ```text
//! Clear / BeforeFill  -> capture outgoing tree, put under previous file
//! Clear               -> also schedule AfterCleared
//! AfterFill           -> replay snapshot of current file
//! AfterCleared        -> replay snapshot of current file
//! Exit                -> capture + put, then save
//! ```
//!
//! All handling is single-threaded and synchronous inside the host callback.

use crate::config::KeeperConfig;
use crate::error::ApiError;
use crate::store::persistence::FoldStatePersistence;
use crate::store::FoldStateStore;
use crate::tree::{capture, replay, OutlineTree};
use crate::types::{file_key, FileKey};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Outline lifecycle notifications issued by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    /// The outline is being emptied
    Clear,
    /// The outline is about to be filled for the now-current file
    BeforeFill,
    /// The outline has been filled
    AfterFill,
    /// The process is exiting
    Exit,
}

/// Deferred callbacks the controller asks the host to invoke later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredCallback {
    /// Fired shortly after `Clear`, since some hosts repopulate the outline
    /// right after clearing it without a fill notification.
    AfterCleared,
}

/// Host timer facility. Callbacks must fire on the same thread as notifications.
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, callback: DeferredCallback);
}

/// What the controller needs from the host editor
pub trait EditorHost {
    type Tree: OutlineTree;

    /// Path of the file now current, or None when no file is open
    fn current_file(&self) -> Option<PathBuf>;

    /// The live outline, or None when the host has none
    fn outline(&mut self) -> Option<&mut Self::Tree>;
}

/// Owns the fold-state store for the process lifetime.
///
/// Constructed once at startup with [`open`](Self::open), which loads persisted
/// state; [`TreeEvent::Exit`] saves it back.
pub struct LifecycleController<S: Scheduler> {
    store: FoldStateStore,
    persistence: FoldStatePersistence,
    scheduler: S,
    previous_file: Option<FileKey>,
    after_clear_delay: Duration,
}

impl<S: Scheduler> LifecycleController<S> {
    /// Load persisted state as configured.
    ///
    /// A corrupt state file is returned as an error; the caller decides whether
    /// to start empty instead.
    pub fn open(config: &KeeperConfig, scheduler: S) -> Result<Self, ApiError> {
        let persistence =
            FoldStatePersistence::new(config.state_file_path()?, config.max_history);
        let store = persistence.load()?;
        Ok(Self::with_store(
            store,
            persistence,
            scheduler,
            config.after_clear_delay(),
        ))
    }

    pub fn with_store(
        store: FoldStateStore,
        persistence: FoldStatePersistence,
        scheduler: S,
        after_clear_delay: Duration,
    ) -> Self {
        Self {
            store,
            persistence,
            scheduler,
            previous_file: None,
            after_clear_delay,
        }
    }

    pub fn store(&self) -> &FoldStateStore {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn previous_file(&self) -> Option<&FileKey> {
        self.previous_file.as_ref()
    }

    /// Handle a host notification. Only `Exit` can fail, when saving fails.
    pub fn handle<H: EditorHost>(&mut self, host: &mut H, event: TreeEvent) -> Result<(), ApiError> {
        debug!(?event, previous = ?self.previous_file, "Outline notification");
        match event {
            TreeEvent::Clear => {
                self.store_outgoing(host);
                self.scheduler
                    .schedule_once(self.after_clear_delay, DeferredCallback::AfterCleared);
                self.previous_file = current_key(host);
            }
            TreeEvent::BeforeFill => {
                self.store_outgoing(host);
                self.previous_file = current_key(host);
            }
            TreeEvent::AfterFill => self.restore_current(host),
            TreeEvent::Exit => {
                self.store_outgoing(host);
                self.persistence.save(&self.store)?;
            }
        }
        Ok(())
    }

    /// Entry point for callbacks scheduled through [`Scheduler`]
    pub fn on_deferred<H: EditorHost>(&mut self, host: &mut H, callback: DeferredCallback) {
        match callback {
            DeferredCallback::AfterCleared => self.on_after_cleared(host),
        }
    }

    pub fn on_after_cleared<H: EditorHost>(&mut self, host: &mut H) {
        self.restore_current(host);
    }

    /// Capture the outline still on screen and file it under the previous file.
    fn store_outgoing<H: EditorHost>(&mut self, host: &mut H) {
        let Some(previous) = self.previous_file.clone() else {
            return;
        };
        let Some(tree) = host.outline() else {
            return;
        };
        let snapshot = capture(&*tree);
        if snapshot.is_empty() {
            return;
        }
        debug!(file = %previous.display(), paths = snapshot.len(), "Captured fold state");
        self.store.put(previous, snapshot);
    }

    fn restore_current<H: EditorHost>(&mut self, host: &mut H) {
        let Some(current) = current_key(host) else {
            return;
        };
        let Some(snapshot) = self.store.get(&current) else {
            return;
        };
        if snapshot.is_empty() {
            return;
        }
        let Some(tree) = host.outline() else {
            return;
        };
        debug!(file = %current.display(), paths = snapshot.len(), "Restoring fold state");
        replay(tree, snapshot);
    }
}

fn current_key<H: EditorHost>(host: &H) -> Option<FileKey> {
    host.current_file()
        .filter(|path| !path.as_os_str().is_empty())
        .map(|path| file_key(&path))
}
