//! Conversion of authoring placeholders into runtime `MoveInput` entities.
//!
//! A scene marks where player input should live by spawning an entity with
//! [`MoveInputAuthoring`]. Baking turns each placeholder into exactly one
//! runtime entity carrying a zeroed [`MoveInput`].
//!
//! The bake system is idempotent: placeholders are tagged
//! [`MoveInputBaked`] after use, so later runs and scene reloads skip them.

use bevy::prelude::*;

use crate::components::{BakedFrom, MoveInput};

/// How the baked runtime entity relates to the placeholder's transform.
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Default)]
pub enum TransformUsage {
    /// The runtime entity carries no transform.
    #[default]
    Detached,
    /// The runtime entity copies the placeholder's `Transform`.
    Dynamic,
}

/// Authoring-time placeholder requesting a `MoveInput` entity.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct MoveInputAuthoring {
    /// Transform policy applied when baking.
    pub transform_usage: TransformUsage,
}

/// Marker indicating that this placeholder has already been baked.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct MoveInputBaked;

/// Components of a freshly baked runtime entity.
#[derive(Bundle)]
pub struct MoveInputBundle {
    /// Zeroed input record.
    pub input: MoveInput,
    /// Placeholder the entity was baked from.
    pub baked_from: BakedFrom,
    /// Human-readable name for debugging.
    pub name: Name,
}

impl MoveInputBundle {
    /// Creates the bundle for a runtime entity baked from `authoring_entity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::prelude::*;
    /// use stride::bake::MoveInputBundle;
    /// use stride::MoveInput;
    ///
    /// let mut world = World::new();
    /// let placeholder = world.spawn_empty().id();
    /// let bundle = MoveInputBundle::new(placeholder);
    ///
    /// assert_eq!(bundle.input, MoveInput::default());
    /// assert_eq!(bundle.baked_from.0, placeholder);
    /// ```
    #[must_use]
    pub fn new(authoring_entity: Entity) -> Self {
        Self {
            input: MoveInput::default(),
            baked_from: BakedFrom(authoring_entity),
            name: Name::new("MoveInput"),
        }
    }
}

/// Bakes one placeholder and returns the runtime entity it produced.
///
/// The placeholder is tagged [`MoveInputBaked`]. `transform` is only consulted
/// under [`TransformUsage::Dynamic`].
#[must_use]
pub fn bake(
    commands: &mut Commands,
    authoring_entity: Entity,
    authoring: &MoveInputAuthoring,
    transform: Option<&Transform>,
) -> Entity {
    let mut runtime = commands.spawn(MoveInputBundle::new(authoring_entity));
    if authoring.transform_usage == TransformUsage::Dynamic {
        runtime.insert(transform.copied().unwrap_or_default());
    }
    let runtime_entity = runtime.id();

    commands.entity(authoring_entity).insert(MoveInputBaked);

    log::debug!(
        "Baked MoveInput placeholder {authoring_entity:?} -> entity {runtime_entity:?} \
         ({:?} transform)",
        authoring.transform_usage
    );
    runtime_entity
}

/// Bakes every placeholder that has not been baked yet.
///
/// Each placeholder produces its own runtime entity; keeping a single
/// placeholder per scene is up to the scene author.
#[expect(
    clippy::type_complexity,
    reason = "Bevy ECS query with filter combinators is inherently verbose."
)]
pub fn bake_move_input_authoring(
    mut commands: Commands,
    placeholders: Query<
        (Entity, &MoveInputAuthoring, Option<&Transform>),
        Without<MoveInputBaked>,
    >,
) {
    let baked: Vec<Entity> = placeholders
        .iter()
        .map(|(entity, authoring, transform)| bake(&mut commands, entity, authoring, transform))
        .collect();

    if !baked.is_empty() {
        log::info!("Baked {} MoveInput placeholder(s): {baked:?}", baked.len());
    }
}
