use bevy::prelude::*;

pub mod math;

/// World-space position in canvas units. Synced into `Transform` once per
/// frame after integration.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Reflect)]
pub struct Position(pub Vec2);
