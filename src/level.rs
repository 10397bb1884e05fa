//! The level orchestrator: map construction, actor spawning, the per-tick
//! update order, contact resolution, pause, and the end-of-session checks.
//!
//! One tick runs strictly in sequence — input/player, boss, contacts, camera,
//! visual sync, HUD, outcome — so entity updates never interleave and the
//! ordering between actors is stable across frames.

use crate::collision::HitBox;
use crate::config::GameConfig;
use crate::constants::{GROUND_PLATFORM_HEIGHT, GROUND_PLATFORM_WIDTH, PLAYER_HEIGHT};
use crate::graphics::{camera_follow_system, GameFont};
use crate::menu::{GameState, SessionOutcome};
use crate::platform::{PlatformField, PlatformKind};
use crate::player::{player_control_system, Player, PlayerHealth};
use crate::rendering::{
    attach_player_sprite_system, attach_venus_sprite_system, setup_hud, spawn_platform_sprites,
    sync_hud_system, sync_player_sprite_system, sync_thorn_sprite_system,
    sync_venus_sprite_system, LifeBarRoot, PlatformSprite, ThornSprite,
};
use crate::venus::{venus_update_system, VenusBoss};
use bevy::prelude::*;
use rand::Rng;

/// Whether the level is frozen by the pause key.
#[derive(Resource, Default)]
pub struct Paused(pub bool);

/// Marker for the pause overlay text.
#[derive(Component)]
pub struct PauseOverlay;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Paused>()
            .add_systems(
                OnEnter(GameState::Playing),
                (enter_level, spawn_platform_sprites, setup_hud).chain(),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(
                Update,
                pause_toggle_system.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    player_control_system,
                    venus_update_system,
                    boss_contact_system,
                    camera_follow_system,
                    attach_venus_sprite_system,
                    attach_player_sprite_system,
                    sync_venus_sprite_system,
                    sync_thorn_sprite_system,
                    sync_player_sprite_system,
                    sync_hud_system,
                    level_outcome_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(level_unpaused),
            );
    }
}

fn level_unpaused(paused: Res<Paused>) -> bool {
    !paused.0
}

// ── Map construction ──────────────────────────────────────────────────────────

/// Build the level's platform set: an unbroken ground run along the floor,
/// plus one cloud platform per sky segment, sampled inside the cloud band.
///
/// Randomness comes through the injected `rng` so the layout is replayable
/// under a seeded generator.
pub fn build_map(config: &GameConfig, rng: &mut impl Rng) -> PlatformField {
    let mut field = PlatformField::new();

    let mut x = 0.0;
    while x < config.level_width {
        field.add(x, 0.0, PlatformKind::Ground);
        x += GROUND_PLATFORM_WIDTH;
    }

    let mut segment = 0.0;
    while segment + config.cloud_segment_width <= config.level_width {
        field.add_between(
            (segment, config.cloud_band_low_y),
            (
                segment + config.cloud_segment_width,
                config.cloud_band_high_y,
            ),
            PlatformKind::Cloud,
            rng,
        );
        segment += config.cloud_segment_width;
    }

    field
}

// ── Session lifecycle ─────────────────────────────────────────────────────────

/// Build the map and spawn the actors on entering `Playing`.
pub fn enter_level(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut paused: ResMut<Paused>,
    mut outcome: ResMut<SessionOutcome>,
) {
    paused.0 = false;
    *outcome = SessionOutcome::None;

    let mut rng = rand::thread_rng();
    let field = build_map(&config, &mut rng);
    info!("level built with {} platforms", field.platforms().len());
    commands.insert_resource(field);

    commands.spawn((
        Player::new(Vec2::new(64.0, GROUND_PLATFORM_HEIGHT + PLAYER_HEIGHT)),
        PlayerHealth::new(config.player_max_hp),
    ));

    let boss_x = config.level_width - 600.0;
    commands.spawn(VenusBoss::new(
        Vec2::new(boss_x, GROUND_PLATFORM_HEIGHT),
        &config,
    ));
}

/// Despawn every level entity so the menu returns to a clean world.
#[allow(clippy::type_complexity)]
pub fn cleanup_level(
    mut commands: Commands,
    entities: Query<
        Entity,
        Or<(
            With<Player>,
            With<VenusBoss>,
            With<ThornSprite>,
            With<PlatformSprite>,
            With<LifeBarRoot>,
            With<PauseOverlay>,
        )>,
    >,
) {
    for entity in entities.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<PlatformField>();
}

// ── Pause ─────────────────────────────────────────────────────────────────────

/// Toggle the pause flag and its overlay.
pub fn pause_toggle_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<Paused>,
    font: Res<GameFont>,
    overlay: Query<Entity, With<PauseOverlay>>,
) {
    if !keys.just_pressed(KeyCode::KeyP) {
        return;
    }
    paused.0 = !paused.0;

    if paused.0 {
        commands
            .spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                PauseOverlay,
            ))
            .with_children(|root| {
                root.spawn((
                    Text::new("PAUSED"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 40.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
    } else {
        for entity in overlay.iter() {
            commands.entity(entity).despawn();
        }
    }
}

// ── Contacts ──────────────────────────────────────────────────────────────────

/// Resolve player↔boss interactions for the tick.
///
/// A stomp — the player's descent crossing the boss's hurt-box top, same
/// one-way rule as platform landings — damages the boss and bounces the
/// player.  Otherwise the thorn and the boss body deal contact damage to the
/// player, both gated by the invincibility window.
pub fn boss_contact_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_player: Query<(&mut Player, &mut PlayerHealth)>,
    mut q_boss: Query<&mut VenusBoss>,
) {
    let dt = time.delta_secs();
    let Ok((mut player, mut health)) = q_player.single_mut() else {
        return;
    };

    for mut boss in q_boss.iter_mut() {
        if boss.dead {
            continue;
        }

        // The player has already been moved this tick, so the one-way test
        // runs against the pre-move box — otherwise the frame that crosses
        // the boss's top would slip past the rule.
        let descent = -player.vel.y * dt;
        let boss_box: HitBox = boss.hit_box;
        let mut pre_move = player.hit_box;
        pre_move.offset(0.0, descent.max(0.0));
        if pre_move.one_way_collided_with(descent, &boss_box) {
            boss.take_damage(config.venus_stomp_damage);
            let (x, top) = (player.pos.x, boss_box.top());
            player.pos.y = top;
            player.hit_box.set_position(x, top);
            player.vel.y = config.player_stomp_bounce_speed;
            continue;
        }

        if let Some(thorn) = boss.thorn.as_ref() {
            if thorn.hit_box.intersects(&player.hit_box) {
                health.take_damage(config.thorn_damage, &config);
            }
        }

        if boss_box.intersects(&player.hit_box) {
            health.take_damage(config.venus_body_damage, &config);
        }
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// End the session when either side dies.
pub fn level_outcome_system(
    q_boss: Query<&VenusBoss>,
    q_health: Query<&PlayerHealth>,
    mut outcome: ResMut<SessionOutcome>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let boss_down = q_boss.iter().all(|b| b.dead);
    let player_down = q_health.iter().any(|h| h.is_dead());

    if player_down {
        *outcome = SessionOutcome::PlayerDied;
        next_state.set(GameState::GameOver);
    } else if boss_down {
        *outcome = SessionOutcome::BossDefeated;
        next_state.set(GameState::GameOver);
    }
}
