//! One vehicle seeks the mouse cursor.

use bevy::{prelude::*, window::PrimaryWindow};
use sketches::assets::SketchSettings;
use sketches::camera::cursor_world_position;
use sketches::{base_app, display, AppState};
use steering::prelude::*;

fn main() {
    let mut app = base_app("Seek", "config/seek.json");
    app.add_plugins(SeekSketchPlugin);
    app.run();
}

struct SeekSketchPlugin;

impl Plugin for SeekSketchPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), spawn).add_systems(
            Update,
            (track_cursor.before(SteeringSet::Steer), draw_target)
                .run_if(in_state(AppState::Running)),
        );
    }
}

fn spawn(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<SketchSettings>,
) {
    let entity = display::spawn_vehicle(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec2::ZERO,
        Vec2::new(0.0, 2.0),
        settings.0.vehicle.into(),
    );
    commands
        .entity(entity)
        .insert((SteerSeek, SteeringTargetVec2::default()));

    info!("seek sketch running");
}

fn track_cursor(
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut targets: Query<&mut SteeringTargetVec2, With<SteerSeek>>,
) {
    let window = window.single();
    let (camera, camera_transform) = camera.single();

    let Some(cursor) = cursor_world_position(window, camera, camera_transform) else {
        return;
    };

    for mut target in &mut targets {
        target.0 = cursor;
    }
}

fn draw_target(mut gizmos: Gizmos, targets: Query<&SteeringTargetVec2, With<SteerSeek>>) {
    for target in &targets {
        gizmos.circle_2d(target.0, 24.0, Color::srgb(0.5, 0.5, 0.5));
    }
}
