//! Behavioural test: a baked `MoveInput` record follows the keyboard frame by
//! frame, with edge-triggered jump and interact and level-triggered sprint.

#[path = "support/bridge_fixture.rs"]
mod bridge_fixture;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use bevy::prelude::*;
use bridge_fixture::BridgeFixture;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use stride::{EdgeFlag, FrameOutcome, LevelFlag, MoveInput};

fn bootstrap() -> BridgeFixture {
    BridgeFixture::new(test_utils::app_with_placeholder())
}

#[test]
fn record_follows_sampled_input_each_frame() {
    run_serial(&rspec::given(
        "a baked placeholder and an enabled bridge",
        bootstrap(),
        |scenario: &mut Scenario<BridgeFixture>| {
            scenario.when("the first frame runs with no keys pressed", |ctx| {
                ctx.before_each(|state| state.tick());

                ctx.then("the record is all zero", |state| {
                    assert_eq!(state.record(), MoveInput::default());
                });
            });

            scenario.when("frame 1 samples move right and a jump press", |ctx| {
                ctx.before_each(|state| {
                    state.press(&[KeyCode::KeyD, KeyCode::Space]);
                    state.tick();
                });

                ctx.then("move is (1, 0) and jump is raised", |state| {
                    let expected = MoveInput {
                        movement: Vec2::new(1.0, 0.0),
                        jump: EdgeFlag(true),
                        ..Default::default()
                    };
                    assert_eq!(state.record(), expected);
                    assert!(matches!(
                        state.last_outcome(),
                        Some(FrameOutcome::Published(_))
                    ));
                });
            });

            scenario.when("frame 2 samples no movement and no jump edge", |ctx| {
                ctx.before_each(|state| {
                    state.release_all();
                    state.tick();
                });

                ctx.then("the whole record is overwritten back to zero", |state| {
                    assert_eq!(state.record(), MoveInput::default());
                });
            });
        },
    ));
}

#[test]
fn held_buttons_only_raise_level_flags_after_the_first_frame() {
    run_serial(&rspec::given(
        "a baked placeholder and an enabled bridge",
        bootstrap(),
        |scenario: &mut Scenario<BridgeFixture>| {
            scenario.when("sprint, jump and interact are pressed", |ctx| {
                ctx.before_each(|state| {
                    state.tick();
                    state.press(&[KeyCode::ShiftLeft, KeyCode::Space, KeyCode::KeyE]);
                    state.tick();
                });

                ctx.then("every flag is raised on the press frame", |state| {
                    let record = state.record();
                    assert_eq!(record.jump, EdgeFlag(true));
                    assert_eq!(record.interact, EdgeFlag(true));
                    assert_eq!(record.sprint, LevelFlag(true));
                });
            });

            scenario.when("the same keys stay held for another frame", |ctx| {
                ctx.before_each(|state| state.tick());

                ctx.then("only sprint remains raised", |state| {
                    let record = state.record();
                    assert_eq!(record.jump, EdgeFlag(false));
                    assert_eq!(record.interact, EdgeFlag(false));
                    assert_eq!(record.sprint, LevelFlag(true));
                });
            });
        },
    ));
}
