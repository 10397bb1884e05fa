//! The boss's thorn projectile.
//!
//! A thorn is not an independent entity: exactly one lives inside its boss's
//! `Option<Thorn>` slot, is spawned lazily the first time an attack cycle
//! reaches the projectile phase, and is repositioned — not reallocated — when
//! the cycle resets.  The rendering layer mirrors it onto a sprite entity.

use crate::collision::HitBox;
use crate::constants::{THORN_HEIGHT, THORN_WIDTH};
use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct Thorn {
    pub pos: Vec2,
    pub hit_box: HitBox,
}

impl Thorn {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            hit_box: HitBox::new(pos.x, pos.y, THORN_WIDTH, THORN_HEIGHT),
        }
    }

    /// Advance along the trajectory by `(dx, dy)`.
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    /// Snap back to the launch x for the next cycle, keeping the current y
    /// so the sine wave continues without a visible pop.
    pub fn reset_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Per-tick bookkeeping: keep the hit box glued to the position.
    pub fn update(&mut self, _dt_ms: f32) {
        self.hit_box.set_position(self.pos.x, self.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_box_follows_position_after_update() {
        let mut t = Thorn::new(Vec2::new(100.0, 50.0));
        t.shift(5.0, -3.0);
        t.update(16.0);
        assert_eq!(t.hit_box.x, 105.0);
        assert_eq!(t.hit_box.y, 47.0);
        assert_eq!(t.hit_box.w, THORN_WIDTH);
    }

    #[test]
    fn reset_keeps_vertical_position() {
        let mut t = Thorn::new(Vec2::new(700.0, 80.0));
        t.shift(200.0, 12.0);
        t.reset_x(191.0);
        assert_eq!(t.pos.x, 191.0);
        assert_eq!(t.pos.y, 92.0);
    }
}
