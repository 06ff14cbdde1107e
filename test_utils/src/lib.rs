//! Shared helpers for driving a headless `MoveInputPlugin` app in tests.
//!
//! Tests run without `bevy_input`'s `InputPlugin`, so nothing clears
//! `ButtonInput::just_pressed` between frames. [`tick`] does that after each
//! update to keep edge-triggered actions one frame wide.

use bevy::prelude::*;
use stride::{InputBridge, MoveInput, MoveInputAuthoring, MoveInputPlugin};

/// Builds an app with the plugin and an idle keyboard.
#[must_use]
pub fn headless_app() -> App {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(MoveInputPlugin);
    app
}

/// Builds [`headless_app`] with one authoring placeholder already spawned.
#[must_use]
pub fn app_with_placeholder() -> App {
    let mut app = headless_app();
    app.world_mut().spawn(MoveInputAuthoring::default());
    app
}

/// Runs one frame, then ends the frame for the keyboard.
pub fn tick(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

/// Presses each key in `keys`.
pub fn press(app: &mut App, keys: &[KeyCode]) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    for key in keys {
        keyboard.press(*key);
    }
}

/// Releases every key.
pub fn release_all(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release_all();
}

/// Returns every entity carrying `MoveInput` with a copy of its record.
pub fn move_input_records(app: &mut App) -> Vec<(Entity, MoveInput)> {
    let world = app.world_mut();
    let mut query = world.query::<(Entity, &MoveInput)>();
    query
        .iter(world)
        .map(|(entity, input)| (entity, *input))
        .collect()
}

/// Returns the single `MoveInput` record.
///
/// # Panics
///
/// Panics unless exactly one entity carries `MoveInput`.
pub fn single_record(app: &mut App) -> MoveInput {
    let records = move_input_records(app);
    match records.as_slice() {
        [(_, input)] => *input,
        other => panic!("expected exactly one MoveInput, found {}", other.len()),
    }
}

/// Borrows the bridge resource.
#[must_use]
pub fn bridge(app: &App) -> &InputBridge {
    app.world().resource::<InputBridge>()
}
