//! Vehicles follow a line segment across the window. Click to spawn more.

use bevy::{prelude::*, window::PrimaryWindow};
use common::math::rng_f32;
use common::Position;
use sketches::assets::SketchSettings;
use sketches::camera::cursor_world_position;
use sketches::debug::DebugSettings;
use sketches::{base_app, display, AppState, HEIGHT, WIDTH};
use steering::prelude::*;

fn main() {
    let mut app = base_app("Path Following", "config/path_following.json");
    app.add_plugins(PathSketchPlugin);
    app.run();
}

struct PathSketchPlugin;

impl Plugin for PathSketchPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), setup).add_systems(
            Update,
            (spawn_on_click, draw_scene, draw_projection).run_if(in_state(AppState::Running)),
        );
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<SketchSettings>,
) {
    let radius = settings.0.path.map(|path| path.radius).unwrap_or(20.0);
    // Diagonal across the window: left edge at a third of the height down
    // to the right edge at two thirds.
    let path = Path::new(
        Vec2::new(-WIDTH / 2.0, HEIGHT / 6.0),
        Vec2::new(WIDTH / 2.0, -HEIGHT / 6.0),
        radius,
    );

    let entity = display::spawn_vehicle(
        &mut commands,
        &mut meshes,
        &mut materials,
        path.start,
        Vec2::new(2.0, 0.0),
        settings.0.vehicle.into(),
    );
    commands.entity(entity).insert(SteerPathFollow::default());

    commands.insert_resource(path);

    info!("path following sketch running");
}

fn spawn_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let window = window.single();
    let (camera, camera_transform) = camera.single();
    let Some(cursor) = cursor_world_position(window, camera, camera_transform) else {
        return;
    };

    let params = VehicleParams {
        max_speed: rng_f32(2.0, 5.0),
        max_force: rng_f32(0.1, 0.5),
        radius: 4.0,
    };
    let entity = display::spawn_vehicle(
        &mut commands,
        &mut meshes,
        &mut materials,
        cursor,
        Vec2::new(2.0, 0.0),
        params,
    );
    commands.entity(entity).insert(SteerPathFollow::default());

    info!("spawned vehicle at {cursor} with {params:?}");
}

fn draw_scene(mut gizmos: Gizmos, path: Res<Path>) {
    display::draw_path(&mut gizmos, &path);
}

fn draw_projection(
    mut gizmos: Gizmos,
    settings: Res<DebugSettings>,
    path: Res<Path>,
    vehicles: Query<(&SteerPathFollow, &Position, &Vehicle)>,
) {
    if !settings.draw_projection {
        return;
    }

    let gray = Color::srgb(0.8, 0.8, 0.8);
    for (follow, position, vehicle) in &vehicles {
        let projection = follow.project(position, vehicle, &path);
        let off_path = projection.distance > path.radius;

        gizmos.line_2d(position.0, projection.predicted, gray);
        gizmos.line_2d(projection.predicted, projection.normal, gray);
        gizmos.circle_2d(projection.predicted, 2.0, gray);

        let target_color = if off_path {
            Color::srgb(1.0, 0.0, 0.0)
        } else {
            gray
        };
        gizmos.circle_2d(projection.target, 4.0, target_color);
    }
}
