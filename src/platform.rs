//! Platform obstacles and the field that owns them.
//!
//! [`PlatformField`] is a plain container resource — the orchestrator owns it
//! through the Bevy `World` and hands it to whichever system needs a landing
//! query.  Platforms are immutable after placement; their sprites are shared
//! per-kind handles attached by the rendering layer, not owned per-platform.

use crate::collision::HitBox;
use crate::constants::{
    CLOUD_PLATFORM_HEIGHT, CLOUD_PLATFORM_WIDTH, GROUND_PLATFORM_HEIGHT, GROUND_PLATFORM_WIDTH,
};
use bevy::prelude::*;
use rand::Rng;

/// Which sprite (and footprint) a platform uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Solid-looking ground tile; forms the floor run of the level.
    Ground,
    /// Floating cloud tile; scattered through the sky band.
    Cloud,
}

impl PlatformKind {
    /// Footprint shared by every platform of this kind.
    pub fn size(self) -> (f32, f32) {
        match self {
            PlatformKind::Ground => (GROUND_PLATFORM_WIDTH, GROUND_PLATFORM_HEIGHT),
            PlatformKind::Cloud => (CLOUD_PLATFORM_WIDTH, CLOUD_PLATFORM_HEIGHT),
        }
    }
}

/// One placed platform.  Immutable after placement.
#[derive(Debug, Clone)]
pub struct Platform {
    pub kind: PlatformKind,
    pub hit_box: HitBox,
}

/// Ordered set of platforms plus the documented `empty` short-circuit.
///
/// The short-circuit is a contract, not just an optimisation: update and
/// collision queries on a never-populated field are guaranteed no-ops, and
/// `collides_with` returns `false` for any input.
#[derive(Resource, Debug, Default)]
pub struct PlatformField {
    platforms: Vec<Platform>,
    empty: bool,
}

impl PlatformField {
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
            empty: true,
        }
    }

    /// Append a platform with its min corner at `(x, y)`.
    pub fn add(&mut self, x: f32, y: f32, kind: PlatformKind) {
        let (w, h) = kind.size();
        self.platforms.push(Platform {
            kind,
            hit_box: HitBox::new(x, y, w, h),
        });
        self.empty = false;
        debug!("platform added: {:?} at ({x}, {y})", kind);
    }

    /// Append a platform at a position uniformly sampled within the rect
    /// spanned by `(ax, ay)`–`(bx, by)`.
    ///
    /// The horizontal range is reduced by the platform's own width so the
    /// placed platform never extends past `bx`.  Randomness comes through
    /// the injected `rng` so callers control determinism.
    pub fn add_between(
        &mut self,
        (ax, ay): (f32, f32),
        (bx, by): (f32, f32),
        kind: PlatformKind,
        rng: &mut impl Rng,
    ) {
        let (w, _) = kind.size();
        let max_x = (bx - w).max(ax);
        let x = if max_x > ax { rng.gen_range(ax..=max_x) } else { ax };
        let y = if by > ay { rng.gen_range(ay..=by) } else { ay };
        self.add(x, y, kind);
    }

    /// Per-tick delegation.  Platforms are static, so this is a no-op body
    /// behind the `empty` guard; it exists so the orchestrator's tick
    /// sequence treats the field like every other updatable collaborator.
    pub fn update(&mut self, _dt_ms: f32) {
        if self.empty {
            return;
        }
        // Static platforms carry no per-tick state to advance.
    }

    /// First platform the falling box would land on this frame, if any.
    ///
    /// Short-circuits on the first match — an existence check, not an
    /// exhaustive list.
    pub fn landing_for(&self, faller: &HitBox, descent: f32) -> Option<&Platform> {
        if self.empty {
            return None;
        }
        self.platforms
            .iter()
            .find(|p| faller.one_way_collided_with(descent, &p.hit_box))
    }

    /// Boolean form of [`PlatformField::landing_for`].
    pub fn collides_with(&self, faller: &HitBox, descent: f32) -> bool {
        self.landing_for(faller, descent).is_some()
    }

    /// Read access for the rendering layer.
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Whether any platform has ever been added.
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_field_never_collides() {
        let field = PlatformField::new();
        let faller = HitBox::new(0.0, 10.0, 10.0, 10.0);
        assert!(field.is_empty());
        assert!(!field.collides_with(&faller, 100.0));
    }

    #[test]
    fn add_places_exactly_and_clears_empty() {
        let mut field = PlatformField::new();
        field.add(64.0, 0.0, PlatformKind::Ground);
        assert!(!field.is_empty());
        let p = &field.platforms()[0];
        assert_eq!(p.hit_box.x, 64.0);
        assert_eq!(p.hit_box.w, GROUND_PLATFORM_WIDTH);
    }

    #[test]
    fn add_between_never_extends_past_right_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut field = PlatformField::new();
            field.add_between((0.0, 0.0), (200.0, 20.0), PlatformKind::Cloud, &mut rng);
            let p = &field.platforms()[0];
            assert!(p.hit_box.x >= 0.0);
            assert!(p.hit_box.x <= 200.0 - CLOUD_PLATFORM_WIDTH);
            assert!(p.hit_box.y >= 0.0 && p.hit_box.y <= 20.0);
        }
    }

    #[test]
    fn add_between_degenerate_range_pins_to_a() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = PlatformField::new();
        // range narrower than the platform itself
        field.add_between((50.0, 30.0), (60.0, 30.0), PlatformKind::Cloud, &mut rng);
        let p = &field.platforms()[0];
        assert_eq!(p.hit_box.x, 50.0);
        assert_eq!(p.hit_box.y, 30.0);
    }

    #[test]
    fn landing_query_finds_platform_under_faller() {
        let mut field = PlatformField::new();
        field.add(0.0, 0.0, PlatformKind::Ground);
        field.add(500.0, 0.0, PlatformKind::Ground);
        let (_, h) = PlatformKind::Ground.size();
        let faller = HitBox::new(510.0, h + 4.0, 10.0, 10.0);
        let hit = field.landing_for(&faller, 8.0);
        assert!(hit.is_some());
        assert_eq!(hit.map(|p| p.hit_box.x), Some(500.0));
    }

    #[test]
    fn landing_query_is_idempotent() {
        let mut field = PlatformField::new();
        field.add(0.0, 0.0, PlatformKind::Cloud);
        let (_, h) = PlatformKind::Cloud.size();
        let faller = HitBox::new(10.0, h, 10.0, 10.0);
        assert_eq!(
            field.collides_with(&faller, 5.0),
            field.collides_with(&faller, 5.0)
        );
    }
}
