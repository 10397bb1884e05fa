//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors the behavioural subset and lets
//! `assets/game.toml` override any of those values at startup; sprite
//! footprints and sheet layouts stay compile-time.

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Horizontal extent of the visible playfield (world units).
///
/// The boss's thorn resets its attack cycle once it crosses this line, and
/// the camera clamps so the view never shows past the level edge.
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Vertical extent of the visible playfield (world units).
pub const PLAYFIELD_HEIGHT: f32 = 480.0;

/// Total horizontal length of the level.
///
/// The ground run and the cloud-platform scatter both span this range.
pub const LEVEL_WIDTH: f32 = 3200.0;

/// Falling below this y kills the player outright (pit death).
pub const KILL_PLANE_Y: f32 = -200.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Horizontal run speed (world units / second).
pub const PLAYER_RUN_SPEED: f32 = 220.0;

/// Upward velocity applied on jump (world units / second).
///
/// With `GRAVITY` at 900 this clears roughly 110 world units — enough to
/// reach a cloud platform from the ground run but not to skip a whole tier.
pub const PLAYER_JUMP_SPEED: f32 = 440.0;

/// Downward acceleration (world units / second²).
pub const GRAVITY: f32 = 900.0;

/// Player hit points.
pub const PLAYER_MAX_HP: i32 = 100;

/// Invincibility window after taking a hit (milliseconds).
///
/// Prevents a single sustained thorn contact from draining the whole bar in
/// a handful of frames.
pub const PLAYER_INVINCIBILITY_MS: f32 = 1000.0;

/// Upward velocity applied after a successful stomp on the boss.
pub const PLAYER_STOMP_BOUNCE_SPEED: f32 = 330.0;

/// Player sprite footprint (world units).
pub const PLAYER_WIDTH: f32 = 48.0;
pub const PLAYER_HEIGHT: f32 = 64.0;

/// Frames in the player's run cycle sheet.
pub const PLAYER_RUN_FRAMES: usize = 8;

/// Frame duration of the player's run cycle (milliseconds).
pub const PLAYER_RUN_FRAME_MS: f32 = 80.0;

// ── Venus boss ────────────────────────────────────────────────────────────────

/// Boss hit points.
pub const VENUS_MAX_HP: i32 = 30;

/// Cool-down between attack cycles (milliseconds).
///
/// The boss stands idle for this long, then plays its attack one-shot and
/// launches the thorn.  Lowering it below ~2000 leaves no safe window to
/// stomp.
pub const VENUS_ATTACK_COOLDOWN_MS: f32 = 5000.0;

/// Base frame duration for the boss sheets (milliseconds).
pub const VENUS_FRAME_MS: f32 = 100.0;

/// Slow frame duration used by the right-facing attack and left-facing dying
/// sheets, which were drawn for a slower cadence.
pub const VENUS_SLOW_FRAME_MS: f32 = 200.0;

/// Boss sprite footprint (world units).
pub const VENUS_WIDTH: f32 = 182.0;
pub const VENUS_HEIGHT: f32 = 150.0;

/// Damage dealt to the player by body contact with the boss.
pub const VENUS_BODY_DAMAGE: i32 = 15;

/// Damage dealt to the boss by one player stomp.
pub const VENUS_STOMP_DAMAGE: i32 = 10;

// ── Thorn projectile ──────────────────────────────────────────────────────────

/// Thorn spawn offset from the boss origin (world units).
///
/// The thorn emerges from the boss's mouth, well right of and above its root
/// position, matching the sheet art.
pub const THORN_OFFSET_X: f32 = 91.0;
pub const THORN_OFFSET_Y: f32 = 50.0;

/// Horizontal advance per tick during the projectile phase (world units).
///
/// Per tick, not per second — the thorn moves in fixed steps, so its ground
/// speed scales with the frame rate.
pub const THORN_STEP_X: f32 = 5.0;

/// Amplitude of the thorn's vertical oscillation (world units).
pub const THORN_WAVE_AMPLITUDE: f32 = 10.0;

/// Phase advance of the oscillation per tick (radians).
pub const THORN_WAVE_RATE: f32 = 0.5;

/// Thorn hit box (world units).
pub const THORN_WIDTH: f32 = 16.0;
pub const THORN_HEIGHT: f32 = 15.0;

/// Damage dealt to the player by a thorn hit.
pub const THORN_DAMAGE: i32 = 10;

// ── Platforms ─────────────────────────────────────────────────────────────────

/// Ground platform footprint (world units).
pub const GROUND_PLATFORM_WIDTH: f32 = 256.0;
pub const GROUND_PLATFORM_HEIGHT: f32 = 64.0;

/// Cloud platform footprint (world units).
pub const CLOUD_PLATFORM_WIDTH: f32 = 128.0;
pub const CLOUD_PLATFORM_HEIGHT: f32 = 32.0;

/// Width of each random-scatter segment used by the map builder.
///
/// One cloud platform is sampled per segment, so smaller values pack the sky
/// more densely.
pub const CLOUD_SEGMENT_WIDTH: f32 = 400.0;

/// Vertical band the cloud scatter samples from (world units).
pub const CLOUD_BAND_LOW_Y: f32 = 120.0;
pub const CLOUD_BAND_HIGH_Y: f32 = 260.0;
