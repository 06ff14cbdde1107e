//! Shareable fixture around a headless app running `MoveInputPlugin`.
//!
//! rspec clones its environment into every example, so the `App` sits behind
//! an `Arc<Mutex<_>>` and every clone drives the same world.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;
use stride::{FrameOutcome, InputBridge, MoveInput};

/// `App` wrapper forwarding `Send` and `Sync` for use inside rspec suites.
#[derive(Debug)]
pub struct SharedApp(pub App);

impl Deref for SharedApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SharedApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: suites run through `run_serial`, and every access to the wrapped
// `App` goes through the fixture's mutex, so no two threads touch it at once.
unsafe impl Send for SharedApp {}
unsafe impl Sync for SharedApp {}

/// Clonable handle on one headless app.
#[derive(Debug, Clone)]
pub struct BridgeFixture {
    app: Arc<Mutex<SharedApp>>,
}

impl BridgeFixture {
    /// Wraps an already-configured app.
    #[must_use]
    pub fn new(app: App) -> Self {
        Self {
            app: Arc::new(Mutex::new(SharedApp(app))),
        }
    }

    /// Locks the app, recovering from a poisoned mutex.
    pub fn app_guard(&self) -> MutexGuard<'_, SharedApp> {
        self.app.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances the app by one frame.
    pub fn tick(&self) {
        test_utils::tick(&mut self.app_guard());
    }

    /// Presses `keys` ahead of the next frame.
    pub fn press(&self, keys: &[KeyCode]) {
        test_utils::press(&mut self.app_guard(), keys);
    }

    /// Releases every key ahead of the next frame.
    pub fn release_all(&self) {
        test_utils::release_all(&mut self.app_guard());
    }

    /// Copy of the single `MoveInput` record.
    pub fn record(&self) -> MoveInput {
        test_utils::single_record(&mut self.app_guard())
    }

    /// Outcome of the bridge's most recent frame.
    pub fn last_outcome(&self) -> Option<FrameOutcome> {
        self.app_guard()
            .world()
            .resource::<InputBridge>()
            .last_outcome()
    }
}
