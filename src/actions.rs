//! Named input actions sampled from the platform input layer.
//!
//! The bridge never looks at raw keys or mouse motion. It asks an
//! [`InputActionSource`] three kinds of question per action: the current 2D
//! value, whether the action was performed this frame, and whether it is held.
//! [`ActionState`] answers them inside the ECS; `sample_action_state` refreshes
//! it from `bevy_input` once per frame.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::bindings::{ActionBindings, CompositeKeys};

/// The five actions feeding `MoveInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputAction {
    /// Continuous movement axis.
    Move,
    /// Continuous look axis.
    Look,
    /// Edge-triggered jump button.
    Jump,
    /// Level-triggered sprint button.
    Sprint,
    /// Edge-triggered interact button.
    Interact,
}

impl InputAction {
    /// Every action, in `MoveInput` field order.
    pub const ALL: [Self; 5] = [
        Self::Move,
        Self::Look,
        Self::Jump,
        Self::Sprint,
        Self::Interact,
    ];
}

/// Query surface of a platform input-action layer.
///
/// Disabled actions must report a zero vector and no button activity.
pub trait InputActionSource {
    /// Starts sampling `action`.
    fn enable(&mut self, action: InputAction);

    /// Stops sampling `action`.
    fn disable(&mut self, action: InputAction);

    /// Whether `action` is currently enabled.
    fn is_enabled(&self, action: InputAction) -> bool;

    /// Instantaneous 2D value of `action`.
    fn read_vector(&self, action: InputAction) -> Vec2;

    /// Whether `action` transitioned to performed during the current frame.
    fn was_performed_this_frame(&self, action: InputAction) -> bool;

    /// Whether `action` is held down right now.
    fn is_pressed(&self, action: InputAction) -> bool;
}

/// Raw per-frame reading of one action.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionSample {
    /// Axis value; zero for button actions.
    pub vector: Vec2,
    /// Set on the frame the action was performed.
    pub performed: bool,
    /// Set while the action is held.
    pub held: bool,
}

/// ECS-resident implementation of [`InputActionSource`].
///
/// Samples are only stored for enabled actions, so disabling an action drops
/// whatever it last reported.
#[derive(Resource, Debug, Default)]
pub struct ActionState {
    enabled: HashSet<InputAction>,
    samples: HashMap<InputAction, ActionSample>,
}

impl ActionState {
    /// Records the reading for `action`. Ignored while the action is disabled.
    pub fn set_sample(&mut self, action: InputAction, sample: ActionSample) {
        if self.enabled.contains(&action) {
            self.samples.insert(action, sample);
        }
    }

    /// Returns the stored reading for `action`, or the zero sample.
    #[must_use]
    pub fn sample(&self, action: InputAction) -> ActionSample {
        self.samples.get(&action).copied().unwrap_or_default()
    }
}

impl InputActionSource for ActionState {
    fn enable(&mut self, action: InputAction) {
        self.enabled.insert(action);
    }

    fn disable(&mut self, action: InputAction) {
        self.enabled.remove(&action);
        self.samples.remove(&action);
    }

    fn is_enabled(&self, action: InputAction) -> bool {
        self.enabled.contains(&action)
    }

    fn read_vector(&self, action: InputAction) -> Vec2 {
        self.sample(action).vector
    }

    fn was_performed_this_frame(&self, action: InputAction) -> bool {
        self.sample(action).performed
    }

    fn is_pressed(&self, action: InputAction) -> bool {
        self.sample(action).held
    }
}

/// Directional key states for a composite axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "This struct represents the pressed state of exactly four directional keys."
)]
pub struct CompositeInput {
    /// Whether the `+y` key is pressed.
    pub up: bool,
    /// Whether the `-y` key is pressed.
    pub down: bool,
    /// Whether the `-x` key is pressed.
    pub left: bool,
    /// Whether the `+x` key is pressed.
    pub right: bool,
}

impl CompositeInput {
    fn read(keys: &CompositeKeys, keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            up: keyboard.pressed(keys.up),
            down: keyboard.pressed(keys.down),
            left: keyboard.pressed(keys.left),
            right: keyboard.pressed(keys.right),
        }
    }
}

/// Composes four directional keys into a 2D axis.
///
/// Opposing keys cancel. Diagonals are normalised so holding two keys is no
/// faster than holding one.
///
/// # Examples
///
/// ```
/// use bevy::math::Vec2;
/// use stride::actions::{compose_axis, CompositeInput};
///
/// let right = compose_axis(CompositeInput { right: true, ..Default::default() });
/// assert_eq!(right, Vec2::new(1.0, 0.0));
///
/// let diagonal = compose_axis(CompositeInput { up: true, left: true, ..Default::default() });
/// assert!((diagonal.length() - 1.0).abs() < 0.001);
/// ```
#[must_use]
pub fn compose_axis(input: CompositeInput) -> Vec2 {
    const fn axis(neg: bool, pos: bool) -> f32 {
        match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    let raw = Vec2::new(axis(input.left, input.right), axis(input.down, input.up));
    raw.normalize_or_zero()
}

fn button_sample(keyboard: &ButtonInput<KeyCode>, key: KeyCode) -> ActionSample {
    ActionSample {
        vector: Vec2::ZERO,
        performed: keyboard.just_pressed(key),
        held: keyboard.pressed(key),
    }
}

fn axis_sample(vector: Vec2) -> ActionSample {
    ActionSample {
        vector,
        ..ActionSample::default()
    }
}

/// Refreshes [`ActionState`] from the keyboard and mouse.
///
/// Runs after `bevy_input` has processed this frame's device events. Missing
/// device resources (a headless app, say) read as no input.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn sample_action_state(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    bindings: Res<ActionBindings>,
    mut state: ResMut<ActionState>,
) {
    let idle = ButtonInput::<KeyCode>::default();
    let keys = keyboard.as_deref().unwrap_or(&idle);
    let mouse_delta = mouse_motion.map_or(Vec2::ZERO, |motion| motion.delta);

    let movement = compose_axis(CompositeInput::read(&bindings.movement, keys));
    let look = mouse_delta * bindings.look_sensitivity
        + compose_axis(CompositeInput::read(&bindings.look_keys, keys));

    state.set_sample(InputAction::Move, axis_sample(movement));
    state.set_sample(InputAction::Look, axis_sample(look));
    state.set_sample(InputAction::Jump, button_sample(keys, bindings.jump));
    state.set_sample(InputAction::Sprint, button_sample(keys, bindings.sprint));
    state.set_sample(InputAction::Interact, button_sample(keys, bindings.interact));
}
