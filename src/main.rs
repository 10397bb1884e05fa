use bevy::prelude::*;
use bevy::window::WindowResolution;

use apterus::config::{self, GameConfig};
use apterus::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use apterus::graphics::{self, GameFont};
use apterus::level::LevelPlugin;
use apterus::menu::MenuPlugin;
use apterus::rendering;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Apterus".into(),
                resolution: WindowResolution::new(
                    PLAYFIELD_WIDTH as u32,
                    PLAYFIELD_HEIGHT as u32,
                ),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.05, 0.10)))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup
        // schedule.
        .insert_resource(GameConfig::default())
        .init_resource::<GameFont>()
        .add_plugins(MenuPlugin)
        .add_plugins(LevelPlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                graphics::load_game_font.after(config::load_game_config),
                graphics::setup_camera.after(config::load_game_config),
                rendering::load_actor_sheets.after(config::load_game_config),
            ),
        )
        .run();
}
