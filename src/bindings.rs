//! Key bindings that drive the named input actions.
//!
//! Bindings load from JSON so players can remap controls without a rebuild.
//! Any field left out of the file keeps its default binding.
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::InputAction;

/// Four keys composed into a 2D axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeKeys {
    /// Key producing `+y`.
    pub up: KeyCode,
    /// Key producing `-y`.
    pub down: KeyCode,
    /// Key producing `-x`.
    pub left: KeyCode,
    /// Key producing `+x`.
    pub right: KeyCode,
}

impl CompositeKeys {
    const fn keys(&self) -> [KeyCode; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

/// Runtime configuration mapping physical keys onto input actions.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionBindings {
    /// Keys composed into the movement axis.
    pub movement: CompositeKeys,
    /// Keys composed into the look axis, added to mouse motion.
    pub look_keys: CompositeKeys,
    /// Multiplier applied to raw mouse motion before it reaches the look axis.
    pub look_sensitivity: f32,
    /// Key performing the jump action.
    pub jump: KeyCode,
    /// Key held for the sprint action.
    pub sprint: KeyCode,
    /// Key performing the interact action.
    pub interact: KeyCode,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            movement: CompositeKeys {
                up: KeyCode::KeyW,
                down: KeyCode::KeyS,
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
            },
            look_keys: CompositeKeys {
                up: KeyCode::ArrowUp,
                down: KeyCode::ArrowDown,
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
            },
            look_sensitivity: 0.1,
            jump: KeyCode::Space,
            sprint: KeyCode::ShiftLeft,
            interact: KeyCode::KeyE,
        }
    }
}

/// Errors raised while loading [`ActionBindings`].
#[derive(Debug, Error)]
pub enum BindingsError {
    /// The bindings file could not be read.
    #[error("failed to read bindings from {path}: {source}")]
    Read {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The bindings document was not valid JSON for this schema.
    #[error("failed to parse bindings: {0}")]
    Parse(#[from] serde_json::Error),
    /// One key was assigned to two different actions.
    #[error("key {key:?} is bound to both {first:?} and {second:?}")]
    DuplicateKey {
        /// The contested key.
        key: KeyCode,
        /// Action that claimed the key first.
        first: InputAction,
        /// Action that claimed the key second.
        second: InputAction,
    },
}

impl ActionBindings {
    /// Parses bindings from a JSON document and validates them.
    ///
    /// # Errors
    ///
    /// Returns [`BindingsError::Parse`] for malformed JSON and
    /// [`BindingsError::DuplicateKey`] when two actions share a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::prelude::KeyCode;
    /// use stride::bindings::ActionBindings;
    ///
    /// let bindings = ActionBindings::from_json_str(r#"{ "jump": "KeyJ" }"#)?;
    /// assert_eq!(bindings.jump, KeyCode::KeyJ);
    /// assert_eq!(bindings.sprint, KeyCode::ShiftLeft);
    /// # Ok::<(), stride::bindings::BindingsError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, BindingsError> {
        let bindings: Self = serde_json::from_str(json)?;
        bindings.validate()?;
        Ok(bindings)
    }

    /// Reads and validates bindings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`BindingsError::Read`] when the file cannot be read, otherwise
    /// the errors of [`ActionBindings::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BindingsError> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|source| BindingsError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        let bindings = Self::from_json_str(&contents)?;
        log::info!("Loaded action bindings from {}", path_ref.display());
        Ok(bindings)
    }

    /// Checks that no key drives two different actions.
    ///
    /// Keys within a single composite may not repeat either, since one press
    /// would then cancel itself out.
    ///
    /// # Errors
    ///
    /// Returns [`BindingsError::DuplicateKey`] naming the first clash found.
    pub fn validate(&self) -> Result<(), BindingsError> {
        let mut claimed: HashMap<KeyCode, InputAction> = HashMap::new();
        let assignments = self
            .movement
            .keys()
            .into_iter()
            .map(|key| (key, InputAction::Move))
            .chain(
                self.look_keys
                    .keys()
                    .into_iter()
                    .map(|key| (key, InputAction::Look)),
            )
            .chain([
                (self.jump, InputAction::Jump),
                (self.sprint, InputAction::Sprint),
                (self.interact, InputAction::Interact),
            ]);

        for (key, action) in assignments {
            if let Some(first) = claimed.insert(key, action) {
                return Err(BindingsError::DuplicateKey {
                    key,
                    first,
                    second: action,
                });
            }
        }
        Ok(())
    }
}
