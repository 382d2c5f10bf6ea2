use bevy::prelude::*;
use common::Position;

use crate::behaviors::{SteerSeek, SteeringBehavior};
use crate::plugin::{Vehicle, VehicleParams};

/// A line segment with a width, used as a steering target.
/// Immutable once constructed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Path {
    pub start: Vec2,
    pub end: Vec2,
    /// Half-width of the path band. Predictions inside it need no correction.
    pub radius: f32,
}

impl Path {
    pub fn new(start: Vec2, end: Vec2, radius: f32) -> Self {
        Self { start, end, radius }
    }

    /// Unit vector pointing from `start` to `end`.
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }
}

/// Closest point to `point` on the infinite line through `a` and `b`, via
/// scalar projection. The projection parameter is not clamped to the
/// segment; steering targets are always taken ahead along the direction.
pub fn normal_point(point: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ap = point - a;
    let ab = (b - a).normalize_or_zero();

    a + ab * ap.dot(ab)
}

/// Keeps the host near a `Path` by predicting its future position and
/// seeking a point slightly ahead on the path whenever the prediction
/// drifts out of the path band.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct SteerPathFollow {
    /// How far ahead of the host, along its velocity, the future position
    /// is predicted.
    pub lookahead: f32,
    /// How far beyond the normal point the steering target is placed.
    pub lead: f32,
}

impl Default for SteerPathFollow {
    fn default() -> Self {
        Self {
            lookahead: 50.0,
            lead: 10.0,
        }
    }
}

/// Intermediate values of one path-following step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathProjection {
    pub predicted: Vec2,
    pub normal: Vec2,
    pub target: Vec2,
    /// Distance from the predicted position to its normal point.
    pub distance: f32,
}

impl SteerPathFollow {
    pub fn project(&self, position: &Position, vehicle: &Vehicle, path: &Path) -> PathProjection {
        let predicted = position.0 + vehicle.velocity.normalize_or_zero() * self.lookahead;
        let normal = normal_point(predicted, path.start, path.end);
        let target = normal + path.direction() * self.lead;

        PathProjection {
            predicted,
            normal,
            target,
            distance: predicted.distance(normal),
        }
    }

    pub fn steer(
        &self,
        position: &Position,
        vehicle: &Vehicle,
        params: &VehicleParams,
        path: &Path,
    ) -> Vec2 {
        let projection = self.project(position, vehicle, path);
        if projection.distance > path.radius {
            SteerSeek.steer(position, vehicle, params, &projection.target)
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_point_projects_onto_line() {
        let n = normal_point(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::new(10.0, 0.0));
        assert_eq!(n, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn normal_point_same_for_swapped_endpoints() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        let p = Vec2::new(5.0, 5.0);
        assert_eq!(normal_point(p, a, b), normal_point(p, b, a));
    }

    #[test]
    fn target_leads_down_the_path() {
        let path = Path::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 20.0);
        let position = Position(Vec2::new(10.0, 50.0));
        let vehicle = Vehicle::with_velocity(Vec2::new(1.0, 0.0));

        let projection = SteerPathFollow::default().project(&position, &vehicle, &path);
        assert_eq!(projection.normal, Vec2::new(60.0, 0.0));
        assert_eq!(projection.target, Vec2::new(70.0, 0.0));
        assert_eq!(projection.distance, 50.0);
    }

    #[test]
    fn follow_corrects_when_off_path() {
        let path = Path::new(Vec2::new(-320.0, 0.0), Vec2::new(320.0, 0.0), 20.0);
        let position = Position(Vec2::new(0.0, 100.0));
        let vehicle = Vehicle::with_velocity(Vec2::new(2.0, 0.0));
        let params = VehicleParams::default();

        let follow = SteerPathFollow::default();
        let projection = follow.project(&position, &vehicle, &path);
        assert!(projection.distance > path.radius);

        let force = follow.steer(&position, &vehicle, &params, &path);
        assert!(force.length() > 0.0);
    }

    #[test]
    fn follow_leaves_on_path_vehicles_alone() {
        let path = Path::new(Vec2::new(-320.0, 0.0), Vec2::new(320.0, 0.0), 20.0);
        let position = Position(Vec2::new(0.0, 5.0));
        let vehicle = Vehicle::with_velocity(Vec2::new(2.0, 0.0));
        let params = VehicleParams::default();

        let force = SteerPathFollow::default().steer(&position, &vehicle, &params, &path);
        assert_eq!(force, Vec2::ZERO);
    }
}
