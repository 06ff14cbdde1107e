//! Per-frame bridge from input actions into the singleton `MoveInput` record.
//!
//! The bridge starts disabled. Enabling it enables the five actions it reads;
//! disabling it disables them again and stops all further writes. While
//! enabled, every frame it:
//!
//! 1. skips the frame if the world has not finished initialising,
//! 2. resolves the single entity carrying `MoveInput`, skipping the frame if
//!    there is none,
//! 3. samples all five actions and overwrites the whole record.
//!
//! A missing record is never created here. Scenes provide one through
//! [`crate::bake`].

use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

use crate::actions::{ActionState, InputAction, InputActionSource};
use crate::components::{EdgeFlag, LevelFlag, MoveInput};

/// Lifecycle state of the [`InputBridge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BridgeState {
    /// No sampling and no writes.
    #[default]
    Disabled,
    /// Sampling and publishing once per frame.
    Enabled,
}

/// What one call to [`InputBridge::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameOutcome {
    /// The bridge is disabled; nothing was sampled.
    Disabled,
    /// The world is not initialised yet; the frame was skipped.
    WorldUninitialised,
    /// No entity carries `MoveInput`; the frame was skipped.
    NoTarget,
    /// More than one entity carries `MoveInput`; the frame was skipped.
    AmbiguousTarget,
    /// The record on this entity was overwritten.
    Published(Entity),
}

impl FrameOutcome {
    /// Whether this frame wrote to a record.
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published(_))
    }
}

/// Samples every action feeding `MoveInput` into a fresh record.
///
/// Axes are read as instantaneous values. Jump and interact are edge
/// triggered, sprint is level triggered.
///
/// # Examples
///
/// ```
/// use stride::actions::{ActionSample, ActionState, InputAction, InputActionSource};
/// use stride::bridge::sample_move_input;
///
/// let mut actions = ActionState::default();
/// actions.enable(InputAction::Sprint);
/// actions.set_sample(InputAction::Sprint, ActionSample { held: true, ..Default::default() });
///
/// let input = sample_move_input(&actions);
/// assert!(input.sprint.is_set());
/// assert!(!input.jump.is_set());
/// ```
#[must_use]
pub fn sample_move_input<S: InputActionSource + ?Sized>(source: &S) -> MoveInput {
    MoveInput {
        movement: source.read_vector(InputAction::Move),
        look: source.read_vector(InputAction::Look),
        jump: EdgeFlag(source.was_performed_this_frame(InputAction::Jump)),
        sprint: LevelFlag(source.is_pressed(InputAction::Sprint)),
        interact: EdgeFlag(source.was_performed_this_frame(InputAction::Interact)),
    }
}

/// Bridge state plus the handle of the record it last published into.
#[derive(Resource, Debug, Default)]
pub struct InputBridge {
    state: BridgeState,
    target: Option<Entity>,
    last_outcome: Option<FrameOutcome>,
}

impl InputBridge {
    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BridgeState {
        self.state
    }

    /// Entity published into on the most recent frame that resolved exactly
    /// one `MoveInput` record.
    ///
    /// This is only a report. The singleton is checked again every frame, and
    /// the handle is cleared whenever that check finds no record or several.
    #[must_use]
    pub const fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Result of the most recent [`InputBridge::update`] call.
    #[must_use]
    pub const fn last_outcome(&self) -> Option<FrameOutcome> {
        self.last_outcome
    }

    /// Enables the bridge and every action it reads.
    pub fn enable<S: InputActionSource + ?Sized>(&mut self, source: &mut S) {
        for action in InputAction::ALL {
            source.enable(action);
        }
        if self.state == BridgeState::Disabled {
            log::info!("Input bridge enabled");
        }
        self.state = BridgeState::Enabled;
    }

    /// Disables the bridge and every action it reads.
    ///
    /// The reported target is cleared along with the state.
    pub fn disable<S: InputActionSource + ?Sized>(&mut self, source: &mut S) {
        for action in InputAction::ALL {
            source.disable(action);
        }
        if self.state == BridgeState::Enabled {
            log::info!("Input bridge disabled");
        }
        self.state = BridgeState::Disabled;
        self.target = None;
    }

    /// Runs one frame of the bridge.
    ///
    /// `world_ready` reports whether the world has finished initialising.
    /// Only [`FrameOutcome::Published`] touches a record, and then every
    /// field is overwritten.
    pub fn update<S: InputActionSource + ?Sized>(
        &mut self,
        world_ready: bool,
        source: &S,
        targets: &mut Query<(Entity, &mut MoveInput)>,
    ) -> FrameOutcome {
        let outcome = self.run_frame(world_ready, source, targets);
        if outcome == FrameOutcome::AmbiguousTarget
            && self.last_outcome != Some(FrameOutcome::AmbiguousTarget)
        {
            log::warn!("Several entities carry MoveInput; skipping input publication");
        }
        self.last_outcome = Some(outcome);
        outcome
    }

    fn run_frame<S: InputActionSource + ?Sized>(
        &mut self,
        world_ready: bool,
        source: &S,
        targets: &mut Query<(Entity, &mut MoveInput)>,
    ) -> FrameOutcome {
        if self.state == BridgeState::Disabled {
            return FrameOutcome::Disabled;
        }
        if !world_ready {
            return FrameOutcome::WorldUninitialised;
        }

        let entity = match self.resolve_target(targets) {
            Ok(entity) => entity,
            Err(skipped) => return skipped,
        };

        let Ok((_, mut record)) = targets.get_mut(entity) else {
            self.target = None;
            return FrameOutcome::NoTarget;
        };
        *record = sample_move_input(source);
        FrameOutcome::Published(entity)
    }

    /// Resolves the singleton by query on every frame.
    fn resolve_target(
        &mut self,
        targets: &Query<(Entity, &mut MoveInput)>,
    ) -> Result<Entity, FrameOutcome> {
        match targets.single() {
            Ok((entity, _)) => {
                if self.target != Some(entity) {
                    log::debug!("Input bridge publishing into {entity:?}");
                }
                self.target = Some(entity);
                Ok(entity)
            }
            Err(QuerySingleError::NoEntities(_)) => {
                self.target = None;
                Err(FrameOutcome::NoTarget)
            }
            Err(QuerySingleError::MultipleEntities(_)) => {
                self.target = None;
                Err(FrameOutcome::AmbiguousTarget)
            }
        }
    }
}

/// Marker resource signalling that the world has finished initialising.
///
/// The bridge skips every frame until it is present.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct WorldReady;

/// Requests that the bridge start sampling.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct EnableInputBridge;

/// Requests that the bridge stop sampling.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DisableInputBridge;

/// Observer applying [`EnableInputBridge`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub fn handle_enable_input_bridge(
    _event: bevy::ecs::prelude::On<EnableInputBridge>,
    mut bridge: ResMut<InputBridge>,
    mut actions: ResMut<ActionState>,
) {
    bridge.enable(actions.as_mut());
}

/// Observer applying [`DisableInputBridge`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub fn handle_disable_input_bridge(
    _event: bevy::ecs::prelude::On<DisableInputBridge>,
    mut bridge: ResMut<InputBridge>,
    mut actions: ResMut<ActionState>,
) {
    bridge.disable(actions.as_mut());
}

/// Publishes this frame's input into the singleton `MoveInput` record.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn publish_move_input(
    mut bridge: ResMut<InputBridge>,
    actions: Res<ActionState>,
    ready: Option<Res<WorldReady>>,
    mut targets: Query<(Entity, &mut MoveInput)>,
) {
    bridge.update(ready.is_some(), actions.as_ref(), &mut targets);
}
