use bevy::prelude::*;

pub mod behaviors;
pub mod paths;
pub mod plugin;
pub mod prelude;

pub trait SteeringTarget {
    /// World-space position of the target.
    fn position(&self) -> Vec2;
}

impl SteeringTarget for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

impl SteeringTarget for common::Position {
    fn position(&self) -> Vec2 {
        self.0
    }
}

/// A component that stores only the position part of the `SteeringTarget` trait.
#[derive(Component, Debug, Default, Reflect)]
pub struct SteeringTargetVec2(pub Vec2);

impl SteeringTarget for SteeringTargetVec2 {
    fn position(&self) -> Vec2 {
        self.0
    }
}
