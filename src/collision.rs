//! Axis-aligned hit boxes and the one-way platform rule.
//!
//! The world is y-up: a box's `top` is its maximum y.  "Moving downward"
//! therefore means negative vertical velocity, expressed here as a
//! non-negative `descent` — the distance the object will fall this frame.
//!
//! The one-way rule is the key collision policy of the whole game: platforms
//! are solid from above only, so the player can jump up through one and land
//! on it on the way down.

/// Axis-aligned bounding rectangle: min corner + size, world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HitBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    /// Move the min corner to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Scale the box about its center.  Used to shrink a hurt-box relative
    /// to the visible sprite footprint.
    pub fn stretch(&mut self, fx: f32, fy: f32) {
        let cx = self.x + self.w / 2.0;
        let cy = self.y + self.h / 2.0;
        self.w *= fx;
        self.h *= fy;
        self.x = cx - self.w / 2.0;
        self.y = cy - self.h / 2.0;
    }

    /// Shift the box without resizing it.
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Plain symmetric AABB overlap — used for damage contacts (thorn vs
    /// player, player vs boss body), where the one-way asymmetry does not
    /// apply.
    pub fn intersects(&self, other: &HitBox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() < other.top()
            && self.top() > other.bottom()
    }

    /// One-way landing test against `platform`.
    ///
    /// True iff the boxes overlap on the horizontal axis AND this box's
    /// bottom edge starts at-or-above the platform's top edge and reaches it
    /// within this frame's `descent`.  An object whose bottom edge is exactly
    /// at the platform top while falling counts as landed; anything moving
    /// upward (`descent <= 0`) passes through.
    pub fn one_way_collided_with(&self, descent: f32, platform: &HitBox) -> bool {
        if descent <= 0.0 {
            return false;
        }
        let horizontal_overlap =
            self.right() > platform.left() && self.left() < platform.right();
        horizontal_overlap
            && self.bottom() >= platform.top()
            && self.bottom() - descent <= platform.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> HitBox {
        HitBox::new(0.0, 0.0, 100.0, 20.0)
    }

    #[test]
    fn lands_when_bottom_exactly_at_platform_top_while_falling() {
        let faller = HitBox::new(40.0, 20.0, 10.0, 10.0);
        assert!(faller.one_way_collided_with(5.0, &platform()));
    }

    #[test]
    fn passes_through_when_moving_upward() {
        let riser = HitBox::new(40.0, 10.0, 10.0, 10.0);
        assert!(!riser.one_way_collided_with(0.0, &platform()));
        assert!(!riser.one_way_collided_with(-5.0, &platform()));
    }

    #[test]
    fn no_landing_without_horizontal_overlap() {
        let faller = HitBox::new(200.0, 21.0, 10.0, 10.0);
        assert!(!faller.one_way_collided_with(5.0, &platform()));
    }

    #[test]
    fn no_landing_when_already_below_platform_top() {
        let faller = HitBox::new(40.0, 5.0, 10.0, 10.0);
        assert!(!faller.one_way_collided_with(5.0, &platform()));
    }

    #[test]
    fn no_landing_when_descent_falls_short_of_platform_top() {
        let faller = HitBox::new(40.0, 50.0, 10.0, 10.0);
        assert!(!faller.one_way_collided_with(5.0, &platform()));
        assert!(faller.one_way_collided_with(30.0, &platform()));
    }

    #[test]
    fn query_is_idempotent_for_unchanged_positions() {
        let faller = HitBox::new(40.0, 25.0, 10.0, 10.0);
        let first = faller.one_way_collided_with(10.0, &platform());
        let second = faller.one_way_collided_with(10.0, &platform());
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn stretch_shrinks_about_center() {
        let mut b = HitBox::new(0.0, 0.0, 100.0, 40.0);
        b.stretch(0.5, 1.0);
        assert_eq!(b.w, 50.0);
        assert_eq!(b.h, 40.0);
        assert_eq!(b.x, 25.0);
        assert_eq!(b.y, 0.0);
    }

    #[test]
    fn intersects_is_symmetric_and_rejects_touching_edges() {
        let a = HitBox::new(0.0, 0.0, 10.0, 10.0);
        let b = HitBox::new(5.0, 5.0, 10.0, 10.0);
        let c = HitBox::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }
}
