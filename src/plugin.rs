//! Bevy plugin wiring baking, action sampling and the input bridge together.
//!
//! Within `PreUpdate`, after `bevy_input` has processed device events, the
//! plugin runs three chained steps: bake new placeholders, refresh the action
//! state, publish into the `MoveInput` record. Startup bakes authored
//! placeholders, marks the world ready and enables the bridge unless
//! [`InputBridgeSettings::enable_on_startup`] is cleared.

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::actions::{sample_action_state, ActionState};
use crate::bake::{bake_move_input_authoring, MoveInputAuthoring, MoveInputBaked, TransformUsage};
use crate::bindings::ActionBindings;
use crate::bridge::{
    handle_disable_input_bridge, handle_enable_input_bridge, publish_move_input,
    DisableInputBridge, EnableInputBridge, InputBridge, WorldReady,
};
use crate::components::{EdgeFlag, LevelFlag, MoveInput};

/// Runtime configuration for the input bridge.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct InputBridgeSettings {
    /// When true, the bridge is enabled once startup has finished.
    pub enable_on_startup: bool,
}

impl Default for InputBridgeSettings {
    fn default() -> Self {
        Self {
            enable_on_startup: true,
        }
    }
}

/// Ordering labels for the per-frame systems of [`MoveInputPlugin`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveInputSystems {
    /// Converts new authoring placeholders into runtime records.
    Bake,
    /// Refreshes `ActionState` from the input devices.
    Sample,
    /// Writes the sampled actions into `MoveInput`.
    Publish,
}

#[derive(Resource, Default)]
struct MoveInputPluginInstalled;

fn mark_world_ready(mut commands: Commands) {
    commands.insert_resource(WorldReady);
    log::debug!("World ready for input publication");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn enable_bridge_on_startup(mut commands: Commands, settings: Res<InputBridgeSettings>) {
    if settings.enable_on_startup {
        commands.trigger(EnableInputBridge);
    }
}

fn disable_bridge_on_exit(mut commands: Commands, mut exits: MessageReader<AppExit>) {
    if exits.is_empty() {
        return;
    }
    exits.clear();
    commands.trigger(DisableInputBridge);
}

/// Bevy plugin publishing player input into the `MoveInput` singleton.
///
/// The plugin is safe to add multiple times; systems are installed once.
/// `ActionBindings` and `InputBridgeSettings` inserted before the plugin take
/// precedence over the defaults.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use stride::{MoveInput, MoveInputAuthoring, MoveInputPlugin};
///
/// let mut app = App::new();
/// app.add_plugins(MoveInputPlugin);
/// app.world_mut().spawn(MoveInputAuthoring::default());
/// app.update();
///
/// let mut records = app.world_mut().query::<&MoveInput>();
/// assert_eq!(records.iter(app.world()).count(), 1);
/// ```
#[derive(Debug)]
pub struct MoveInputPlugin;

impl Plugin for MoveInputPlugin {
    fn build(&self, app: &mut App) {
        if app.world().contains_resource::<MoveInputPluginInstalled>() {
            return;
        }

        app.insert_resource(MoveInputPluginInstalled);
        app.register_type::<MoveInput>()
            .register_type::<EdgeFlag>()
            .register_type::<LevelFlag>()
            .register_type::<MoveInputAuthoring>()
            .register_type::<MoveInputBaked>()
            .register_type::<TransformUsage>();
        app.init_resource::<ActionBindings>();
        app.init_resource::<ActionState>();
        app.init_resource::<InputBridge>();
        app.init_resource::<InputBridgeSettings>();
        app.add_observer(handle_enable_input_bridge);
        app.add_observer(handle_disable_input_bridge);
        app.add_systems(
            PostStartup,
            (
                bake_move_input_authoring,
                mark_world_ready,
                enable_bridge_on_startup,
            )
                .chain(),
        );
        app.configure_sets(
            PreUpdate,
            (
                MoveInputSystems::Bake,
                MoveInputSystems::Sample,
                MoveInputSystems::Publish,
            )
                .chain()
                .after(InputSystems),
        );
        app.add_systems(
            PreUpdate,
            (
                bake_move_input_authoring.in_set(MoveInputSystems::Bake),
                sample_action_state.in_set(MoveInputSystems::Sample),
                publish_move_input.in_set(MoveInputSystems::Publish),
            ),
        );
        app.add_systems(Last, disable_bridge_on_exit);
    }

    fn is_unique(&self) -> bool {
        false
    }
}
