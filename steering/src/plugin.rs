use bevy::prelude::*;
use common::{math::truncate_vec2, Position};

use crate::behaviors::{SteerSeek, SteeringBehavior};
use crate::paths::{Path, SteerPathFollow};
use crate::SteeringTargetVec2;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct VehicleParams {
    /// Top speed, in units per frame.
    pub max_speed: f32,
    /// Cap on the magnitude of a single steering force. Set this value
    /// lower than `max_speed` to achieve smooth turning.
    pub max_force: f32,
    /// Display half-size of the vehicle, also used as the wrap margin.
    pub radius: f32,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            max_force: 0.1,
            radius: 4.0,
        }
    }
}

/// Kinematic state of one steered agent. Mass is 1, so forces land on the
/// acceleration unscaled.
#[derive(Component, Debug, Default, Clone, PartialEq, Reflect)]
pub struct Vehicle {
    /// Current velocity, in units per frame.
    pub velocity: Vec2,
    /// Force accumulator. Zero outside of a frame's steering phase.
    pub acceleration: Vec2,
}

impl Vehicle {
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            acceleration: Vec2::ZERO,
        }
    }

    /// Accumulates a steering force for this frame.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }
}

#[derive(Bundle, Default)]
pub struct VehicleBundle {
    pub position: Position,
    pub vehicle: Vehicle,
    pub params: VehicleParams,
}

/// Per-frame phases: behaviors accumulate forces, then integration runs.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteeringSet {
    Steer,
    Integrate,
}

pub struct SteeringPlugin;

impl Plugin for SteeringPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (SteeringSet::Steer, SteeringSet::Integrate).chain());
        app.add_systems(
            Update,
            (
                steer_vec2::<SteerSeek>,
                steer_path_follow.run_if(resource_exists::<Path>),
            )
                .in_set(SteeringSet::Steer),
        );
        app.add_systems(
            Update,
            (
                integrate,
                wrap_along_path.run_if(resource_exists::<Path>),
                update_translation,
            )
                .chain()
                .in_set(SteeringSet::Integrate),
        );
    }
}

/// Applies behavior `B` towards each host's `SteeringTargetVec2`.
pub fn steer_vec2<B: SteeringBehavior>(
    mut hosts: Query<(&B, &Position, &mut Vehicle, &VehicleParams, &SteeringTargetVec2)>,
) {
    for (behavior, position, mut vehicle, params, target) in &mut hosts {
        let force = behavior.steer(position, &vehicle, params, target);
        vehicle.apply_force(force);
    }
}

pub fn steer_path_follow(
    path: Res<Path>,
    mut hosts: Query<(&SteerPathFollow, &Position, &mut Vehicle, &VehicleParams)>,
) {
    for (follow, position, mut vehicle, params) in &mut hosts {
        let force = follow.steer(position, &vehicle, params, &path);
        vehicle.apply_force(force);
    }
}

/// One explicit Euler step per frame: velocity absorbs the accumulated
/// forces and is capped at `max_speed`, position absorbs the velocity, and
/// the accumulator is cleared for the next frame.
pub fn integrate(mut hosts: Query<(&mut Position, &mut Vehicle, &VehicleParams)>) {
    for (mut position, mut vehicle, params) in &mut hosts {
        let acceleration = vehicle.acceleration;
        vehicle.velocity = truncate_vec2(vehicle.velocity + acceleration, params.max_speed);
        position.0 += vehicle.velocity;
        vehicle.acceleration = Vec2::ZERO;
    }
}

/// Wraps path followers from the path's end back to its start, preserving
/// their lateral offset.
pub fn wrap_along_path(
    path: Res<Path>,
    mut hosts: Query<(&mut Position, &VehicleParams), With<SteerPathFollow>>,
) {
    for (mut position, params) in &mut hosts {
        if position.0.x > path.end.x + params.radius {
            position.0.x = path.start.x - params.radius;
            position.0.y = path.start.y + (position.0.y - path.end.y);
        }
    }
}

pub fn update_translation(mut hosts: Query<(&mut Transform, &Position)>) {
    for (mut transform, position) in &mut hosts {
        transform.translation = position.0.extend(1.0);
    }
}
