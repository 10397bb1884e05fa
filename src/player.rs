//! The player ("apterus"): run/jump kinematics over one-way platforms.
//!
//! Kinematics are pure methods so landing behaviour is testable against a
//! hand-built [`PlatformField`]; [`player_control_system`] is the input-facing
//! driver.  Damage interactions with the boss live in the level orchestrator,
//! which owns the tick order.

use crate::animation::Animation;
use crate::collision::HitBox;
use crate::config::GameConfig;
use crate::constants::{PLAYER_HEIGHT, PLAYER_RUN_FRAMES, PLAYER_RUN_FRAME_MS, PLAYER_WIDTH};
use crate::platform::PlatformField;
use bevy::prelude::*;

/// Player simulation state.  `pos` is the hit box's min corner.
#[derive(Component, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub hit_box: HitBox,
    pub on_ground: bool,
    pub facing_left: bool,
    pub run_anim: Animation,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        let mut run_anim = Animation::looping(PLAYER_RUN_FRAMES, PLAYER_RUN_FRAME_MS);
        run_anim.start();
        Self {
            pos,
            vel: Vec2::ZERO,
            hit_box: HitBox::new(pos.x, pos.y, PLAYER_WIDTH, PLAYER_HEIGHT),
            on_ground: false,
            facing_left: false,
            run_anim,
        }
    }

    /// Jump is only available with ground under the feet.
    pub fn try_jump(&mut self, config: &GameConfig) {
        if self.on_ground {
            self.vel.y = config.player_jump_speed;
            self.on_ground = false;
        }
    }

    /// Integrate one tick of movement and resolve one-way landings.
    ///
    /// Horizontal motion is applied first and clamped to the level; vertical
    /// motion asks the platform field whether this frame's descent crosses a
    /// platform top, and snaps to it if so.  Upward motion never collides —
    /// that is the one-way rule.
    pub fn step_kinematics(&mut self, platforms: &PlatformField, dt_ms: f32, config: &GameConfig) {
        let dt = dt_ms / 1000.0;

        self.pos.x =
            (self.pos.x + self.vel.x * dt).clamp(0.0, config.level_width - PLAYER_WIDTH);
        self.vel.y -= config.gravity * dt;
        self.hit_box.set_position(self.pos.x, self.pos.y);

        let descent = -self.vel.y * dt;
        if let Some(platform) = platforms.landing_for(&self.hit_box, descent) {
            self.pos.y = platform.hit_box.top();
            self.vel.y = 0.0;
            self.on_ground = true;
        } else {
            self.pos.y += self.vel.y * dt;
            if descent > 0.0 {
                self.on_ground = false;
            }
        }

        self.hit_box.set_position(self.pos.x, self.pos.y);
    }
}

/// Hit points plus the post-hit invincibility window.
///
/// The window prevents a single sustained contact from draining the whole
/// bar over consecutive ticks.
#[derive(Component, Debug)]
pub struct PlayerHealth {
    pub hp: i32,
    pub max_hp: i32,
    /// Milliseconds of invincibility remaining; decremented each tick.
    pub inv_timer_ms: f32,
}

impl PlayerHealth {
    pub fn new(max_hp: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            inv_timer_ms: 0.0,
        }
    }

    /// Apply damage unless still invincible from the previous hit.
    pub fn take_damage(&mut self, amount: i32, config: &GameConfig) {
        if self.inv_timer_ms > 0.0 {
            return;
        }
        self.hp -= amount;
        self.inv_timer_ms = config.player_invincibility_ms;
        info!("player took {amount} damage, {} hp left", self.hp.max(0));
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// Input, kinematics, and the run-cycle animation for the player.
pub fn player_control_system(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    platforms: Res<PlatformField>,
    mut q_player: Query<(&mut Player, &mut PlayerHealth)>,
) {
    let dt_ms = time.delta_secs() * 1000.0;

    let Ok((mut player, mut health)) = q_player.single_mut() else {
        return;
    };

    let mut dir = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA) {
        dir -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD) {
        dir += 1.0;
    }
    player.vel.x = dir * config.player_run_speed;
    if dir != 0.0 {
        player.facing_left = dir < 0.0;
    }

    if keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::ArrowUp) {
        player.try_jump(&config);
    }

    player.step_kinematics(&platforms, dt_ms, &config);

    // Run cycle only advances while actually running on the ground.
    if dir != 0.0 && player.on_ground {
        player.run_anim.update(dt_ms);
    }

    health.inv_timer_ms = (health.inv_timer_ms - dt_ms).max(0.0);

    // Pit death: falling out of the level bypasses the invincibility window.
    if player.pos.y < config.kill_plane_y && !health.is_dead() {
        warn!("player fell below the kill plane");
        health.hp = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformKind;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn ground_field() -> PlatformField {
        let mut field = PlatformField::new();
        field.add(0.0, 0.0, PlatformKind::Ground);
        field
    }

    #[test]
    fn falls_until_landing_then_rests_on_platform_top() {
        let config = cfg();
        let field = ground_field();
        let (_, ground_h) = PlatformKind::Ground.size();
        let mut p = Player::new(Vec2::new(50.0, ground_h + 300.0));

        for _ in 0..300 {
            p.step_kinematics(&field, 16.0, &config);
            if p.on_ground {
                break;
            }
        }

        assert!(p.on_ground);
        assert_eq!(p.pos.y, ground_h);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn jumping_up_passes_through_platform_from_below() {
        let config = cfg();
        let mut field = PlatformField::new();
        field.add(0.0, 150.0, PlatformKind::Cloud);
        let (_, cloud_h) = PlatformKind::Cloud.size();

        let mut p = Player::new(Vec2::new(20.0, 100.0));
        p.vel.y = config.player_jump_speed;

        let mut max_y = p.pos.y;
        for _ in 0..20 {
            p.step_kinematics(&field, 16.0, &config);
            max_y = max_y.max(p.pos.y);
            assert!(!p.on_ground || p.pos.y >= 150.0 + cloud_h);
        }
        // rose through the platform band unobstructed
        assert!(max_y > 150.0);
    }

    #[test]
    fn jump_only_works_on_ground() {
        let config = cfg();
        let mut p = Player::new(Vec2::new(0.0, 500.0));
        p.try_jump(&config);
        assert_eq!(p.vel.y, 0.0);
        p.on_ground = true;
        p.try_jump(&config);
        assert_eq!(p.vel.y, config.player_jump_speed);
        assert!(!p.on_ground);
    }

    #[test]
    fn horizontal_motion_clamps_to_level_bounds() {
        let config = cfg();
        let field = PlatformField::new();
        let mut p = Player::new(Vec2::new(5.0, 100.0));
        p.vel.x = -1000.0;
        p.step_kinematics(&field, 100.0, &config);
        assert_eq!(p.pos.x, 0.0);

        p.pos.x = config.level_width - PLAYER_WIDTH - 1.0;
        p.vel.x = 1000.0;
        p.step_kinematics(&field, 100.0, &config);
        assert_eq!(p.pos.x, config.level_width - PLAYER_WIDTH);
    }

    #[test]
    fn invincibility_window_swallows_repeat_hits() {
        let config = cfg();
        let mut health = PlayerHealth::new(config.player_max_hp);
        health.take_damage(10, &config);
        health.take_damage(10, &config);
        assert_eq!(health.hp, config.player_max_hp - 10);

        health.inv_timer_ms = 0.0;
        health.take_damage(10, &config);
        assert_eq!(health.hp, config.player_max_hp - 20);
    }
}
