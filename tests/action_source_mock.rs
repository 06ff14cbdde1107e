//! Tests pinning how the bridge queries an `InputActionSource`.

use bevy::math::Vec2;
use mockall::predicate::eq;
use mockall::{mock, Sequence};
use stride::{sample_move_input, EdgeFlag, InputAction, InputActionSource, InputBridge};

mock! {
    pub Source {}
    impl InputActionSource for Source {
        fn enable(&mut self, action: InputAction);
        fn disable(&mut self, action: InputAction);
        fn is_enabled(&self, action: InputAction) -> bool;
        fn read_vector(&self, action: InputAction) -> Vec2;
        fn was_performed_this_frame(&self, action: InputAction) -> bool;
        fn is_pressed(&self, action: InputAction) -> bool;
    }
}

#[test]
fn jump_and_interact_use_edges_and_sprint_uses_level() {
    let mut source = MockSource::new();
    source
        .expect_read_vector()
        .with(eq(InputAction::Move))
        .return_const(Vec2::new(0.5, -0.5));
    source
        .expect_read_vector()
        .with(eq(InputAction::Look))
        .return_const(Vec2::new(3.0, 4.0));
    source
        .expect_was_performed_this_frame()
        .with(eq(InputAction::Jump))
        .times(1)
        .return_const(true);
    source
        .expect_was_performed_this_frame()
        .with(eq(InputAction::Interact))
        .times(1)
        .return_const(false);
    source
        .expect_is_pressed()
        .with(eq(InputAction::Sprint))
        .times(1)
        .return_const(true);

    let input = sample_move_input(&source);

    assert_eq!(input.movement, Vec2::new(0.5, -0.5));
    assert_eq!(input.look, Vec2::new(3.0, 4.0));
    assert_eq!(input.jump, EdgeFlag(true));
    assert!(input.sprint.is_set());
    assert!(!input.interact.is_set());
}

#[test]
fn enable_then_disable_toggles_every_action_once() {
    let mut source = MockSource::new();
    let mut seq = Sequence::new();
    for action in InputAction::ALL {
        source
            .expect_enable()
            .with(eq(action))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    for action in InputAction::ALL {
        source
            .expect_disable()
            .with(eq(action))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }

    let mut bridge = InputBridge::default();
    bridge.enable(&mut source);
    bridge.disable(&mut source);
}
