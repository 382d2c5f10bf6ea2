use bevy::prelude::*;
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use steering::plugin::SteeringPlugin;

pub mod assets;
pub mod camera;
pub mod debug;
pub mod display;

pub const WIDTH: f32 = 640.0;
pub const HEIGHT: f32 = 360.0;
pub const FRAMERATE: f64 = 60.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, States)]
pub enum AppState {
    #[default]
    LoadAssets,
    Running,
}

/// Builds the shared sketch skeleton: window, frame pacing, camera,
/// steering systems, vehicle display and the config loading state. The
/// sketch itself goes on top as one more plugin.
pub fn base_app(title: &str, config_path: &'static str) -> App {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: title.into(),
                resolution: (WIDTH, HEIGHT).into(),
                ..default()
            }),
            ..default()
        }),
    )
    .init_state::<AppState>()
    .add_plugins(FramepacePlugin)
    .add_plugins(camera::CameraPlugin)
    .add_plugins(SteeringPlugin)
    .add_plugins(display::DisplayPlugin)
    .add_plugins(assets::SketchAssetsPlugin { config_path })
    .add_plugins(debug::DebugPlugin)
    .add_systems(Startup, set_framerate)
    .add_systems(Update, exit_on_esc);

    app
}

fn set_framerate(mut settings: ResMut<FramepaceSettings>) {
    // Velocities are tuned in units per frame, so pace frames.
    settings.limiter = Limiter::from_framerate(FRAMERATE);
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
