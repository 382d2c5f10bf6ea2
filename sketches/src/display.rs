use bevy::{prelude::*, sprite::MaterialMesh2dBundle};
use common::Position;
use steering::paths::Path;
use steering::plugin::{SteeringSet, Vehicle, VehicleBundle, VehicleParams};

pub struct DisplayPlugin;

impl Plugin for DisplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, orient_vehicles.after(SteeringSet::Integrate));
    }
}

/// Spawns a vehicle rendered as a gray triangle pointing along its velocity.
pub fn spawn_vehicle(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    position: Vec2,
    velocity: Vec2,
    params: VehicleParams,
) -> Entity {
    let r = params.radius;
    let mesh = meshes.add(Triangle2d::new(
        Vec2::new(0.0, 2.0 * r),
        Vec2::new(-r, -2.0 * r),
        Vec2::new(r, -2.0 * r),
    ));

    commands
        .spawn((
            MaterialMesh2dBundle {
                mesh: mesh.into(),
                material: materials.add(Color::srgb(0.5, 0.5, 0.5)),
                transform: Transform::from_translation(position.extend(1.0)),
                ..default()
            },
            VehicleBundle {
                position: Position(position),
                vehicle: Vehicle::with_velocity(velocity),
                params,
            },
            Name::new("vehicle"),
        ))
        .id()
}

/// Keeps each vehicle's triangle pointing along its velocity. The mesh
/// points up, so the heading is offset by a quarter turn.
fn orient_vehicles(mut vehicles: Query<(&mut Transform, &Vehicle)>) {
    for (mut transform, vehicle) in &mut vehicles {
        if vehicle.velocity == Vec2::ZERO {
            continue;
        }

        transform.rotation =
            Quat::from_rotation_z(vehicle.velocity.to_angle() - std::f32::consts::FRAC_PI_2);
    }
}

/// Draws the path band: center line plus both edges.
pub fn draw_path(gizmos: &mut Gizmos, path: &Path) {
    let offset = path.direction().perp() * path.radius;

    gizmos.line_2d(path.start, path.end, Color::srgb(0.8, 0.8, 0.8));
    gizmos.line_2d(
        path.start + offset,
        path.end + offset,
        Color::srgba(0.8, 0.8, 0.8, 0.4),
    );
    gizmos.line_2d(
        path.start - offset,
        path.end - offset,
        Color::srgba(0.8, 0.8, 0.8, 0.4),
    );
}
