//! The Venus boss: a timer-driven attack cycle over an animation state
//! machine.
//!
//! The boss idles on a cool-down, plays its attack one-shot, then drives a
//! single owned thorn projectile along a sine-wave trajectory until it leaves
//! the playfield, at which point the whole cycle resets.  Every visual state
//! exists as a left/right animation pair and state selection only ever picks
//! within the pair matching the current facing.
//!
//! All behaviour lives in pure methods on [`VenusBoss`] so the state machine
//! is testable tick-by-tick without an app; [`venus_update_system`] is the
//! thin driver the orchestrator schedules.

use crate::animation::Animation;
use crate::collision::HitBox;
use crate::config::GameConfig;
use crate::constants::{THORN_OFFSET_X, THORN_OFFSET_Y, VENUS_HEIGHT, VENUS_WIDTH};
use crate::player::Player;
use crate::thorn::Thorn;
use crate::timer::TickTimer;
use bevy::prelude::*;

// ── Facing ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

// ── Animation inventory ───────────────────────────────────────────────────────

/// One tag per sheet.  The boss owns one [`Animation`] per tag and selects
/// exactly one as current; the rendering layer maps the tag to its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenusAnimation {
    StandingLeft,
    StandingRight,
    DamagingLeft,
    DamagingRight,
    AttackLeft,
    AttackRight,
    DyingLeft,
    DyingRight,
}

impl VenusAnimation {
    pub const ALL: [VenusAnimation; 8] = [
        VenusAnimation::StandingLeft,
        VenusAnimation::StandingRight,
        VenusAnimation::DamagingLeft,
        VenusAnimation::DamagingRight,
        VenusAnimation::AttackLeft,
        VenusAnimation::AttackRight,
        VenusAnimation::DyingLeft,
        VenusAnimation::DyingRight,
    ];

    pub fn index(self) -> usize {
        match self {
            VenusAnimation::StandingLeft => 0,
            VenusAnimation::StandingRight => 1,
            VenusAnimation::DamagingLeft => 2,
            VenusAnimation::DamagingRight => 3,
            VenusAnimation::AttackLeft => 4,
            VenusAnimation::AttackRight => 5,
            VenusAnimation::DyingLeft => 6,
            VenusAnimation::DyingRight => 7,
        }
    }

    pub fn standing(facing: Facing) -> Self {
        match facing {
            Facing::Left => VenusAnimation::StandingLeft,
            Facing::Right => VenusAnimation::StandingRight,
        }
    }

    pub fn damaging(facing: Facing) -> Self {
        match facing {
            Facing::Left => VenusAnimation::DamagingLeft,
            Facing::Right => VenusAnimation::DamagingRight,
        }
    }

    pub fn attack(facing: Facing) -> Self {
        match facing {
            Facing::Left => VenusAnimation::AttackLeft,
            Facing::Right => VenusAnimation::AttackRight,
        }
    }

    pub fn dying(facing: Facing) -> Self {
        match facing {
            Facing::Left => VenusAnimation::DyingLeft,
            Facing::Right => VenusAnimation::DyingRight,
        }
    }

    pub fn is_attack(self) -> bool {
        matches!(self, VenusAnimation::AttackLeft | VenusAnimation::AttackRight)
    }

    /// Frames in this tag's sheet.
    pub fn frames(self) -> usize {
        match self {
            VenusAnimation::StandingLeft | VenusAnimation::StandingRight => 10,
            VenusAnimation::DamagingLeft | VenusAnimation::DamagingRight => 5,
            VenusAnimation::AttackLeft | VenusAnimation::AttackRight => 16,
            VenusAnimation::DyingLeft | VenusAnimation::DyingRight => 10,
        }
    }

    /// Sheet asset path for the rendering layer.
    pub fn sheet_path(self) -> &'static str {
        match self {
            VenusAnimation::StandingLeft => "img/spritesheets/venus-standby-left.png",
            VenusAnimation::StandingRight => "img/spritesheets/venus-standby-right.png",
            VenusAnimation::DamagingLeft => "img/spritesheets/venus-damaging-left.png",
            VenusAnimation::DamagingRight => "img/spritesheets/venus-damaging-right.png",
            VenusAnimation::AttackLeft => "img/spritesheets/venus-attack-left.png",
            VenusAnimation::AttackRight => "img/spritesheets/venus-attack-right.png",
            VenusAnimation::DyingLeft => "img/spritesheets/venus-dying-left.png",
            VenusAnimation::DyingRight => "img/spritesheets/venus-dying-right.png",
        }
    }

    /// The right-facing attack and left-facing dying sheets play at the slow
    /// frame duration; everything else at the base duration.
    fn frame_ms(self, config: &GameConfig) -> f32 {
        match self {
            VenusAnimation::AttackRight | VenusAnimation::DyingLeft => config.venus_slow_frame_ms,
            _ => config.venus_frame_ms,
        }
    }

    fn build(self, config: &GameConfig) -> Animation {
        match self {
            VenusAnimation::StandingLeft | VenusAnimation::StandingRight => {
                Animation::looping(self.frames(), self.frame_ms(config))
            }
            _ => Animation::one_shot(self.frames(), self.frame_ms(config)),
        }
    }
}

// ── Boss controller ───────────────────────────────────────────────────────────

/// The boss entity's whole simulation state.
///
/// The hurt-box is half the sprite width, nudged toward the visual center —
/// narrower than the visible footprint so grazing the leaves doesn't count.
#[derive(Component, Debug)]
pub struct VenusBoss {
    pub pos: Vec2,
    pub hit_box: HitBox,
    pub health: i32,
    pub dead: bool,
    pub facing: Facing,
    pub attacking: bool,
    pub attack_timer: TickTimer,
    /// Single-owner slot; `None` means "not yet spawned", never an error.
    pub thorn: Option<Thorn>,
    /// Monotone tick counter parameterising the thorn's sine wave.  Never
    /// reset, so the wave phase continues smoothly across attack cycles.
    pub phase_count: u32,
    animations: [Animation; 8],
    current: VenusAnimation,
}

impl VenusBoss {
    pub fn new(pos: Vec2, config: &GameConfig) -> Self {
        let animations = [
            VenusAnimation::StandingLeft.build(config),
            VenusAnimation::StandingRight.build(config),
            VenusAnimation::DamagingLeft.build(config),
            VenusAnimation::DamagingRight.build(config),
            VenusAnimation::AttackLeft.build(config),
            VenusAnimation::AttackRight.build(config),
            VenusAnimation::DyingLeft.build(config),
            VenusAnimation::DyingRight.build(config),
        ];

        let mut attack_timer = TickTimer::new(config.venus_attack_cooldown_ms);
        attack_timer.start();

        // Start by looking at our right.
        let current = VenusAnimation::StandingRight;

        let mut boss = Self {
            pos,
            hit_box: Self::hit_box_at(pos),
            health: config.venus_max_hp,
            dead: false,
            facing: Facing::Right,
            attacking: false,
            attack_timer,
            thorn: None,
            phase_count: 0,
            animations,
            current,
        };
        boss.animations[current.index()].start();
        boss
    }

    fn hit_box_at(pos: Vec2) -> HitBox {
        let mut hit_box = HitBox::new(pos.x, pos.y, VENUS_WIDTH, VENUS_HEIGHT);
        hit_box.stretch(0.5, 1.0);
        hit_box.offset(5.0, 0.0);
        hit_box
    }

    /// Pure query; the `dead` flag is refreshed from it once per update.
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn current_animation(&self) -> &Animation {
        &self.animations[self.current.index()]
    }

    fn current_animation_mut(&mut self) -> &mut Animation {
        &mut self.animations[self.current.index()]
    }

    /// Tag of the animation currently selected for display.
    pub fn current_tag(&self) -> VenusAnimation {
        self.current
    }

    fn thorn_spawn_point(&self) -> Vec2 {
        Vec2::new(self.pos.x + THORN_OFFSET_X, self.pos.y + THORN_OFFSET_Y)
    }

    /// Switch the current animation, restarting only on an actual change.
    fn enter(&mut self, tag: VenusAnimation) {
        if self.current != tag {
            self.current = tag;
            self.animations[tag.index()].start();
        }
    }

    /// Face the side of the boss the player is on.
    ///
    /// Only flips while idling in the standing loop — one-shots are never
    /// re-oriented mid-play, so left/right pairs always play out whole.
    pub fn face_towards(&mut self, x: f32) {
        if self.dead || self.attacking || self.current != VenusAnimation::standing(self.facing) {
            return;
        }
        let desired = if x < self.pos.x {
            Facing::Left
        } else {
            Facing::Right
        };
        if desired != self.facing {
            self.facing = desired;
            self.enter(VenusAnimation::standing(desired));
        }
    }

    /// Apply `amount` of damage.
    ///
    /// Outside an attack cycle the damaging one-shot takes over the display;
    /// mid-cycle it is skipped so `attacking == true` always implies an
    /// attack animation is current.
    pub fn take_damage(&mut self, amount: i32) {
        if self.dead {
            return;
        }
        self.health -= amount;
        info!("venus took {amount} damage, {} hp left", self.health.max(0));
        if !self.is_dead() && !self.attacking {
            let damaging = VenusAnimation::damaging(self.facing);
            self.current = damaging;
            self.animations[damaging.index()].start();
        }
    }

    /// Advance the whole boss by `dt_ms`.
    pub fn update(&mut self, dt_ms: f32, config: &GameConfig) {
        if self.is_dead() {
            // Flagged the same tick health reaches zero; the dying one-shot
            // still plays underneath (see DESIGN.md on this discrepancy).
            self.dead = true;
            self.attacking = false;
            self.enter(VenusAnimation::dying(self.facing));
            self.current_animation_mut().update(dt_ms);
            return;
        }

        self.attack_timer.update(dt_ms);
        if self.attack_timer.is_done() {
            self.attacking = true;
        }

        // A finished attack one-shot means the cycle is in its projectile
        // phase; the phase runs every tick until the thorn leaves the field.
        if self.attacking
            && self.current_tag().is_attack()
            && !self.current_animation().is_running()
        {
            self.update_attack(dt_ms, config);
        }

        self.refresh_animation();
        self.current_animation_mut().update(dt_ms);
        self.hit_box = Self::hit_box_at(self.pos);
    }

    /// Select which animation should be current, by priority:
    /// attack while a cycle runs, then an in-flight damaging one-shot,
    /// then the standing loop.
    fn refresh_animation(&mut self) {
        let damaging = VenusAnimation::damaging(self.facing);
        let target = if self.attacking {
            VenusAnimation::attack(self.facing)
        } else if self.current == damaging && self.animations[damaging.index()].is_running() {
            damaging
        } else {
            VenusAnimation::standing(self.facing)
        };
        self.enter(target);
    }

    /// Projectile phase: runs each tick once the attack one-shot has played
    /// out.  An empty thorn slot means "not yet spawned" and is filled
    /// lazily; a thorn past the playfield edge ends the cycle.
    fn update_attack(&mut self, dt_ms: f32, config: &GameConfig) {
        let spawn = self.thorn_spawn_point();
        if self.thorn.is_none() {
            self.thorn = Some(Thorn::new(spawn));
        }

        let in_flight = self
            .thorn
            .as_ref()
            .is_some_and(|t| t.pos.x <= config.playfield_width);

        if in_flight {
            let dy = config.thorn_wave_amplitude
                * (self.phase_count as f32 * config.thorn_wave_rate).sin();
            if let Some(thorn) = self.thorn.as_mut() {
                thorn.shift(config.thorn_step_x, dy);
                thorn.update(dt_ms);
            }
            self.phase_count += 1;
        } else {
            // Cycle reset: park the thorn at the launch x (same y, so the
            // wave continues without a pop), rewind the attack one-shot, and
            // re-arm the cool-down.
            if let Some(thorn) = self.thorn.as_mut() {
                thorn.reset_x(spawn.x);
                thorn.update(dt_ms);
            }
            self.attacking = false;
            let attack = VenusAnimation::attack(self.facing);
            self.animations[attack.index()].start();
            self.attack_timer.restart();
        }
    }
}

// ── System ────────────────────────────────────────────────────────────────────

/// Per-tick boss driver: orient toward the player, then advance the state
/// machine with the frame's wall-clock delta.
pub fn venus_update_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    q_player: Query<&Player>,
    mut q_boss: Query<&mut VenusBoss>,
) {
    let dt_ms = time.delta_secs() * 1000.0;
    let player_x = q_player.single().map(|p| p.pos.x).ok();

    for mut boss in q_boss.iter_mut() {
        if let Some(x) = player_x {
            boss.face_towards(x);
        }
        boss.update(dt_ms, &config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn boss() -> VenusBoss {
        VenusBoss::new(Vec2::new(600.0, 64.0), &cfg())
    }

    /// Advance `n` ticks of `dt_ms` each.
    fn step(boss: &mut VenusBoss, config: &GameConfig, n: usize, dt_ms: f32) {
        for _ in 0..n {
            boss.update(dt_ms, config);
        }
    }

    #[test]
    fn starts_standing_right_and_idle() {
        let b = boss();
        assert_eq!(b.current_tag(), VenusAnimation::StandingRight);
        assert!(!b.attacking);
        assert!(b.thorn.is_none());
    }

    #[test]
    fn cooldown_expiry_enters_attack_animation() {
        let config = cfg();
        let mut b = boss();
        // just under the cool-down: still standing
        step(&mut b, &config, 49, 100.0);
        assert!(!b.attacking);
        // crossing 5000 ms flips the cycle on
        step(&mut b, &config, 1, 100.0);
        assert!(b.attacking);
        assert!(b.current_tag().is_attack());
        assert!(b.current_animation().is_running());
    }

    #[test]
    fn attack_one_shot_completion_spawns_the_thorn() {
        let config = cfg();
        let mut b = boss();
        step(&mut b, &config, 50, 100.0); // cool-down
        // right-facing attack: 16 frames at the slow duration
        let attack_ms = 16.0 * config.venus_slow_frame_ms;
        step(&mut b, &config, (attack_ms / 100.0) as usize + 1, 100.0);
        assert!(b.thorn.is_some());
    }

    #[test]
    fn thorn_x_strictly_increases_until_threshold_then_cycle_resets() {
        let config = cfg();
        let mut b = boss();
        step(&mut b, &config, 50, 100.0);
        step(&mut b, &config, 33, 100.0); // play out the attack one-shot
        assert!(b.thorn.is_some());

        let mut last_x = b.thorn.as_ref().map(|t| t.pos.x).unwrap_or(0.0);
        let mut ticks = 0;
        while b.attacking {
            b.update(100.0, &config);
            if let Some(t) = b.thorn.as_ref() {
                if b.attacking {
                    assert!(t.pos.x > last_x, "thorn must advance every tick");
                    last_x = t.pos.x;
                }
            }
            ticks += 1;
            assert!(ticks < 10_000, "cycle never reset");
        }

        assert!(!b.attacking);
        assert_eq!(b.current_tag(), VenusAnimation::StandingRight);
        // parked back at the launch offset for the next cycle
        let spawn_x = b.pos.x + THORN_OFFSET_X;
        assert_eq!(b.thorn.as_ref().map(|t| t.pos.x), Some(spawn_x));
        // cool-down re-armed
        assert!(!b.attack_timer.is_done());
    }

    #[test]
    fn phase_count_is_monotone_across_cycles() {
        let config = cfg();
        let mut b = boss();
        // first full cycle
        while !b.attacking {
            b.update(100.0, &config);
        }
        while b.attacking {
            b.update(100.0, &config);
        }
        let after_first = b.phase_count;
        assert!(after_first > 0);
        // second full cycle
        while !b.attacking {
            b.update(100.0, &config);
        }
        while b.attacking {
            b.update(100.0, &config);
        }
        assert!(b.phase_count > after_first);
    }

    #[test]
    fn damage_outside_attack_plays_damaging_then_returns_to_standing() {
        let config = cfg();
        let mut b = boss();
        b.update(100.0, &config);
        b.take_damage(5);
        assert_eq!(b.current_tag(), VenusAnimation::DamagingRight);
        // 5 frames at the base duration, plus one tick for the stop to land
        step(&mut b, &config, 7, 100.0);
        assert_eq!(b.current_tag(), VenusAnimation::StandingRight);
    }

    #[test]
    fn damage_during_attack_keeps_attack_animation_current() {
        let config = cfg();
        let mut b = boss();
        step(&mut b, &config, 50, 100.0);
        assert!(b.attacking);
        b.take_damage(5);
        assert!(b.current_tag().is_attack());
    }

    #[test]
    fn lethal_damage_flags_dead_immediately_and_plays_dying() {
        let config = cfg();
        let mut b = boss();
        b.take_damage(config.venus_max_hp);
        assert!(b.is_dead());
        b.update(100.0, &config);
        assert!(b.dead);
        assert!(!b.attacking);
        assert_eq!(b.current_tag(), VenusAnimation::DyingRight);
        // terminal: further updates only advance the cosmetic one-shot
        step(&mut b, &config, 100, 100.0);
        assert!(b.dead);
        assert_eq!(b.current_tag(), VenusAnimation::DyingRight);
    }

    #[test]
    fn faces_the_player_only_while_standing() {
        let config = cfg();
        let mut b = boss();
        b.update(100.0, &config);
        b.face_towards(0.0);
        assert_eq!(b.facing, Facing::Left);
        assert_eq!(b.current_tag(), VenusAnimation::StandingLeft);

        step(&mut b, &config, 50, 100.0);
        assert!(b.attacking);
        b.face_towards(10_000.0);
        // locked while the cycle runs
        assert_eq!(b.facing, Facing::Left);
    }
}
