use bevy::prelude::*;
use common::{math::truncate_vec2, Position};

use crate::plugin::{Vehicle, VehicleParams};
use crate::SteeringTarget;

/// A steering behavior computes one force per frame for its host. The
/// returned force is already capped at `params.max_force`.
pub trait SteeringBehavior: Component {
    fn steer(
        &self,
        position: &Position,
        vehicle: &Vehicle,
        params: &VehicleParams,
        target: &impl SteeringTarget,
    ) -> Vec2;
}

/// Seeks the specified target moving directly towards it.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
pub struct SteerSeek;

impl SteeringBehavior for SteerSeek {
    fn steer(
        &self,
        position: &Position,
        vehicle: &Vehicle,
        params: &VehicleParams,
        target: &impl SteeringTarget,
    ) -> Vec2 {
        let dv = target.position() - position.0;
        // A zero offset has no usable direction; skip rather than normalize it.
        if dv == Vec2::ZERO {
            return Vec2::ZERO;
        }

        let desired = dv.normalize() * params.max_speed;

        truncate_vec2(desired - vehicle.velocity, params.max_force)
    }
}
