//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the behavioural
//! constants in [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! Add `config: Res<GameConfig>` to any system parameter list to read values.

use crate::constants::*;
use crate::error::GameError;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ────────────────────────────────────────────────────────────
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub level_width: f32,
    pub kill_plane_y: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_run_speed: f32,
    pub player_jump_speed: f32,
    pub gravity: f32,
    pub player_max_hp: i32,
    pub player_invincibility_ms: f32,
    pub player_stomp_bounce_speed: f32,

    // ── Venus boss ───────────────────────────────────────────────────────────
    pub venus_max_hp: i32,
    pub venus_attack_cooldown_ms: f32,
    pub venus_frame_ms: f32,
    pub venus_slow_frame_ms: f32,
    pub venus_body_damage: i32,
    pub venus_stomp_damage: i32,

    // ── Thorn ────────────────────────────────────────────────────────────────
    pub thorn_step_x: f32,
    pub thorn_wave_amplitude: f32,
    pub thorn_wave_rate: f32,
    pub thorn_damage: i32,

    // ── Map builder ──────────────────────────────────────────────────────────
    pub cloud_segment_width: f32,
    pub cloud_band_low_y: f32,
    pub cloud_band_high_y: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            level_width: LEVEL_WIDTH,
            kill_plane_y: KILL_PLANE_Y,
            player_run_speed: PLAYER_RUN_SPEED,
            player_jump_speed: PLAYER_JUMP_SPEED,
            gravity: GRAVITY,
            player_max_hp: PLAYER_MAX_HP,
            player_invincibility_ms: PLAYER_INVINCIBILITY_MS,
            player_stomp_bounce_speed: PLAYER_STOMP_BOUNCE_SPEED,
            venus_max_hp: VENUS_MAX_HP,
            venus_attack_cooldown_ms: VENUS_ATTACK_COOLDOWN_MS,
            venus_frame_ms: VENUS_FRAME_MS,
            venus_slow_frame_ms: VENUS_SLOW_FRAME_MS,
            venus_body_damage: VENUS_BODY_DAMAGE,
            venus_stomp_damage: VENUS_STOMP_DAMAGE,
            thorn_step_x: THORN_STEP_X,
            thorn_wave_amplitude: THORN_WAVE_AMPLITUDE,
            thorn_wave_rate: THORN_WAVE_RATE,
            thorn_damage: THORN_DAMAGE,
            cloud_segment_width: CLOUD_SEGMENT_WIDTH,
            cloud_band_low_y: CLOUD_BAND_LOW_Y,
            cloud_band_high_y: CLOUD_BAND_HIGH_Y,
        }
    }
}

impl GameConfig {
    /// Reject values the simulation cannot run on.
    ///
    /// Only genuinely unsafe ranges are checked — a zero playfield width
    /// would make the thorn reset threshold unreachable, and non-positive
    /// timing values would wedge the attack cycle.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.playfield_width <= 0.0 {
            return Err(GameError::UnsafeValue {
                name: "playfield_width",
                value: self.playfield_width,
                safe_range: "> 0",
            });
        }
        if self.venus_attack_cooldown_ms <= 0.0 {
            return Err(GameError::UnsafeValue {
                name: "venus_attack_cooldown_ms",
                value: self.venus_attack_cooldown_ms,
                safe_range: "> 0",
            });
        }
        if self.venus_frame_ms <= 0.0 {
            return Err(GameError::UnsafeValue {
                name: "venus_frame_ms",
                value: self.venus_frame_ms,
                safe_range: "> 0",
            });
        }
        if self.thorn_step_x <= 0.0 {
            return Err(GameError::UnsafeValue {
                name: "thorn_step_x",
                value: self.thorn_step_x,
                safe_range: "> 0 (the thorn must advance toward the threshold)",
            });
        }
        Ok(())
    }
}

/// Overwrite the config resource from `assets/game.toml` if present.
///
/// Parse failures keep the compiled defaults and log a diagnostic — a bad
/// tuning file must never take the game down.  Values that parse but fail
/// [`GameConfig::validate`] are likewise discarded.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    println!("✓ Loaded game config from {path}");
                }
                Err(e) => {
                    eprintln!("⚠ Rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                let err = GameError::ConfigParse {
                    path,
                    detail: e.to_string(),
                };
                eprintln!("⚠ {err}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let cfg: GameConfig =
            toml::from_str("playfield_width = 1024.0\nvenus_max_hp = 50").unwrap();
        assert_eq!(cfg.playfield_width, 1024.0);
        assert_eq!(cfg.venus_max_hp, 50);
        // untouched key keeps the compiled default
        assert_eq!(cfg.player_run_speed, PLAYER_RUN_SPEED);
    }

    #[test]
    fn zero_playfield_width_is_rejected() {
        let cfg = GameConfig {
            playfield_width: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
