//! Camera and font setup, plus the side-scrolling camera follow.

use crate::config::GameConfig;
use crate::player::Player;
use bevy::prelude::*;

/// Game font resource — stores the loaded UI font handle.
///
/// All HUD and menu text references `font.0.clone()` instead of the default
/// Bevy font.  Created by [`load_game_font`] at startup.
#[derive(Resource, Default)]
pub struct GameFont(pub Handle<Font>);

/// Load the UI font from assets at startup.
///
/// Must run before any UI setup systems that spawn text.
pub fn load_game_font(mut font: ResMut<GameFont>, asset_server: Res<AssetServer>) {
    font.0 = asset_server.load("fonts/prototype.ttf");
}

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(
            config.playfield_width / 2.0,
            config.playfield_height / 2.0,
            0.0,
        ),
    ));
}

/// Keep the camera tracking the player horizontally.
///
/// The view is clamped so it never shows past either end of the level;
/// vertical framing is fixed — the level scrolls sideways only.
pub fn camera_follow_system(
    config: Res<GameConfig>,
    q_player: Query<&Player>,
    mut q_camera: Query<&mut Transform, With<Camera>>,
) {
    let Ok(player) = q_player.single() else {
        return;
    };
    let Ok(mut cam) = q_camera.single_mut() else {
        return;
    };

    let half_view = config.playfield_width / 2.0;
    cam.translation.x = player
        .pos
        .x
        .clamp(half_view, config.level_width - half_view);
    cam.translation.y = config.playfield_height / 2.0;
}
