#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate publishing sampled player input into the ECS.
//!
//! An authoring placeholder bakes into one entity carrying [`MoveInput`].
//! Every frame the [`InputBridge`] samples the move, look, jump, sprint and
//! interact actions and overwrites that record, where movement and camera
//! systems pick it up.
pub mod actions;
pub mod bake;
pub mod bindings;
pub mod bridge;
pub mod components;
pub mod logging;
pub mod plugin;

// Re-export commonly used items
pub use actions::{ActionState, InputAction, InputActionSource};
pub use bake::{bake_move_input_authoring, MoveInputAuthoring, TransformUsage};
pub use bindings::{ActionBindings, BindingsError};
pub use bridge::{
    publish_move_input, sample_move_input, BridgeState, DisableInputBridge, EnableInputBridge,
    FrameOutcome, InputBridge, WorldReady,
};
pub use components::{EdgeFlag, LevelFlag, MoveInput};
pub use logging::init as init_logging;
pub use plugin::{InputBridgeSettings, MoveInputPlugin, MoveInputSystems};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use stride::prelude::*;
    //! ```

    pub use crate::ActionBindings;
    pub use crate::InputBridge;
    pub use crate::MoveInput;
    pub use crate::MoveInputAuthoring;
    pub use crate::MoveInputPlugin;
}
