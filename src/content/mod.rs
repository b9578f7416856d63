//! Content domain: loading and sanitizing actor tuning at startup.

pub mod loader;
pub mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::PathBuf;

pub use loader::{ConfigLoadError, load_actor_config, parse_actor_config};
pub use validation::{ConfigWarning, sanitize_config};

use crate::movement::ActorConfig;

/// Where the startup loader looks for the actor tuning file.
#[derive(Resource, Debug, Clone)]
pub struct ActorConfigPath(pub PathBuf);

impl Default for ActorConfigPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data/actor.ron"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActorConfigPath>()
            .init_resource::<ActorConfig>()
            .register_type::<ActorConfig>()
            .add_systems(PreStartup, load_actor_config_system);
    }
}

fn load_actor_config_system(path: Res<ActorConfigPath>, mut config: ResMut<ActorConfig>) {
    match load_actor_config(&path.0) {
        Ok(loaded) => {
            let (loaded, warnings) = sanitize_config(loaded);
            for warning in &warnings {
                warn!("{}: {}", path.0.display(), warning);
            }
            info!(
                "Loaded actor config from {}: jump_height={}, jump_count={}, dash_power={}",
                path.0.display(),
                loaded.jump_height,
                loaded.jump_count,
                loaded.dash_power
            );
            *config = loaded;
        }
        Err(e) => {
            warn!("{}, using default actor config", e);
        }
    }
}
