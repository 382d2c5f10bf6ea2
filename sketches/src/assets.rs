use bevy::{
    asset::{io::Reader, Asset, AssetLoader, AsyncReadExt, LoadContext},
    prelude::*,
    reflect::TypePath,
};
use serde::{Deserialize, Serialize};
use steering::plugin::VehicleParams;
use thiserror::Error;

use crate::debug::DebugSettings;
use crate::AppState;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub max_speed: f32,
    pub max_force: f32,
    pub radius: f32,
}

impl From<VehicleConfig> for VehicleParams {
    fn from(config: VehicleConfig) -> Self {
        Self {
            max_speed: config.max_speed,
            max_force: config.max_force,
            radius: config.radius,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathConfig {
    pub radius: f32,
}

#[derive(Debug, Asset, TypePath, Clone, Copy, Serialize, Deserialize)]
pub struct SketchConfig {
    pub vehicle: VehicleConfig,
    #[serde(default)]
    pub path: Option<PathConfig>,
    /// Whether the projection overlay starts enabled.
    #[serde(default)]
    pub debug: bool,
}

#[derive(Default)]
pub struct SketchConfigLoader;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SketchConfigLoaderError {
    #[error("Could not load config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssetLoader for SketchConfigLoader {
    type Asset = SketchConfig;
    type Settings = ();
    type Error = SketchConfigLoaderError;

    async fn load<'a>(
        &'a self,
        reader: &'a mut Reader<'_>,
        _settings: &'a Self::Settings,
        _load_context: &'a mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut json_str = String::new();

        reader.read_to_string(&mut json_str).await?;

        let config = serde_json::from_str::<SketchConfig>(&json_str)?;

        Ok(config)
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Active sketch configuration, present once `AppState::Running` is entered.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SketchSettings(pub SketchConfig);

#[derive(Resource)]
struct SketchConfigPath(&'static str);

#[derive(Resource)]
struct SketchConfigHandle(Handle<SketchConfig>);

pub struct SketchAssetsPlugin {
    pub config_path: &'static str,
}

impl Plugin for SketchAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SketchConfigPath(self.config_path))
            .init_asset::<SketchConfig>()
            .init_asset_loader::<SketchConfigLoader>()
            .add_systems(Startup, load_config)
            .add_systems(
                Update,
                monitor_config.run_if(in_state(AppState::LoadAssets)),
            );
    }
}

fn load_config(mut commands: Commands, server: Res<AssetServer>, path: Res<SketchConfigPath>) {
    commands.insert_resource(SketchConfigHandle(server.load(path.0)));
}

fn monitor_config(
    mut commands: Commands,
    handle: Res<SketchConfigHandle>,
    configs: Res<Assets<SketchConfig>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(config) = configs.get(&handle.0) {
        info!("sketch config loaded: {config:?}");
        commands.insert_resource(SketchSettings(*config));
        commands.insert_resource(DebugSettings {
            draw_projection: config.debug,
        });
        next_state.set(AppState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_shape_parses() {
        let json = r#"{
            "vehicle": { "max_speed": 4.0, "max_force": 0.1, "radius": 4.0 },
            "path": { "radius": 20.0 },
            "debug": true
        }"#;

        let config = serde_json::from_str::<SketchConfig>(json).unwrap();
        assert_eq!(config.vehicle.max_speed, 4.0);
        assert_eq!(config.path.unwrap().radius, 20.0);
        assert!(config.debug);
    }

    #[test]
    fn path_section_is_optional() {
        let json = r#"{ "vehicle": { "max_speed": 8.0, "max_force": 0.2, "radius": 6.0 } }"#;

        let config = serde_json::from_str::<SketchConfig>(json).unwrap();
        assert!(config.path.is_none());
        assert!(!config.debug);
    }
}
