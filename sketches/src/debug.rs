use bevy::prelude::*;
#[cfg(debug_assertions)]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Runtime switch for the projection overlay, in place of a process-wide
/// debug flag. The initial value comes from the sketch config; Space
/// toggles it while running.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DebugSettings {
    pub draw_projection: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugSettings>();
        app.add_systems(Update, toggle_projection);

        #[cfg(debug_assertions)]
        {
            app.register_type::<steering::plugin::Vehicle>();
            app.register_type::<steering::plugin::VehicleParams>();
            app.register_type::<steering::paths::SteerPathFollow>();
            app.register_type::<steering::SteeringTargetVec2>();
            app.add_plugins(WorldInspectorPlugin::new());
        }
    }
}

fn toggle_projection(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<DebugSettings>) {
    if keys.just_pressed(KeyCode::Space) {
        settings.draw_projection = !settings.draw_projection;
    }
}
