//! ECS component types published by the input bridge.
//!
//! `MoveInput` is the single record downstream movement and camera systems
//! read each frame. Its button fields use tagged flag types so the trigger
//! semantics travel with the value instead of living in a comment.
use bevy::prelude::*;
use serde::Serialize;

/// Button state that is set only on the frame its action was performed.
///
/// # Examples
///
/// ```
/// use stride::components::EdgeFlag;
///
/// let flag = EdgeFlag::from(true);
/// assert!(flag.is_set());
/// assert_eq!(flag.as_byte(), 1);
/// ```
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[reflect(Default)]
pub struct EdgeFlag(pub bool);

/// Button state that stays set for every frame its action is held.
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[reflect(Default)]
pub struct LevelFlag(pub bool);

macro_rules! flag_impl {
    ($name:ident) => {
        impl $name {
            /// Returns whether the flag is raised.
            #[must_use]
            pub const fn is_set(self) -> bool {
                self.0
            }

            /// Single-byte encoding of the flag: `1` when raised, `0` otherwise.
            #[must_use]
            pub const fn as_byte(self) -> u8 {
                if self.0 {
                    1
                } else {
                    0
                }
            }
        }

        impl From<bool> for $name {
            fn from(value: bool) -> Self {
                Self(value)
            }
        }

        impl From<$name> for bool {
            fn from(flag: $name) -> Self {
                flag.0
            }
        }
    };
}

flag_impl!(EdgeFlag);
flag_impl!(LevelFlag);

/// Per-frame player input snapshot.
///
/// One entity in the running world carries this component. The input bridge
/// overwrites every field each frame it publishes; nothing clamps or
/// normalises the axes, so values arrive exactly as the action layer
/// reported them.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Serialize)]
#[reflect(Component, Default)]
pub struct MoveInput {
    /// Movement axis, typically within `[-1, 1]` per component.
    pub movement: Vec2,
    /// Look or aim axis.
    pub look: Vec2,
    /// Raised on the frame the jump action was performed.
    pub jump: EdgeFlag,
    /// Raised while the sprint action is held.
    pub sprint: LevelFlag,
    /// Raised on the frame the interact action was performed.
    pub interact: EdgeFlag,
}

/// Links a baked runtime entity back to the authoring placeholder it came from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BakedFrom(pub Entity);
