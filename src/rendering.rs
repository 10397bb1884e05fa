//! Sprite attachment and per-frame visual sync, plus the HUD life bar.
//!
//! Simulation components never touch textures: systems here attach a
//! `Sprite` when an actor appears (via `Added<..>`), then mirror simulation
//! state — positions, animation frames, facing — into the sprite and
//! transform every frame.  The thorn is not an entity of its own in the
//! simulation, so a dedicated sprite entity mirrors the boss's owned slot.

use crate::constants::{
    PLAYER_HEIGHT, PLAYER_RUN_FRAMES, PLAYER_WIDTH, THORN_HEIGHT, THORN_WIDTH, VENUS_HEIGHT,
    VENUS_WIDTH,
};
use crate::graphics::GameFont;
use crate::platform::{PlatformField, PlatformKind};
use crate::player::{Player, PlayerHealth};
use crate::venus::{VenusAnimation, VenusBoss};
use bevy::prelude::*;

// ── Z layering ────────────────────────────────────────────────────────────────

const Z_PLATFORM: f32 = 1.0;
const Z_BOSS: f32 = 2.0;
const Z_THORN: f32 = 3.0;
const Z_PLAYER: f32 = 4.0;

// ── Sheet resources ───────────────────────────────────────────────────────────

/// One image + atlas layout per boss animation tag, indexed by
/// [`VenusAnimation::index`].  Shared by every boss instance.
#[derive(Resource)]
pub struct VenusSheets {
    pub images: [Handle<Image>; 8],
    pub layouts: [Handle<TextureAtlasLayout>; 8],
}

/// Player run-cycle sheet.
#[derive(Resource)]
pub struct PlayerSheet {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
}

/// Shared per-kind platform sprites plus the thorn sprite.
///
/// Every platform of a kind references the same handle — the field never
/// stores per-platform copies.
#[derive(Resource)]
pub struct ActorSprites {
    pub ground: Handle<Image>,
    pub cloud: Handle<Image>,
    pub thorn: Handle<Image>,
}

/// Load every sheet and build the atlas layouts at startup.
///
/// A missing file shows up as Bevy's placeholder texture rather than a
/// crash; the diagnostic is the asset server's load warning.
pub fn load_actor_sheets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let venus_images =
        VenusAnimation::ALL.map(|tag| asset_server.load::<Image>(tag.sheet_path()));
    let venus_layouts = VenusAnimation::ALL.map(|tag| {
        layouts.add(TextureAtlasLayout::from_grid(
            UVec2::new(VENUS_WIDTH as u32, VENUS_HEIGHT as u32),
            tag.frames() as u32,
            1,
            None,
            None,
        ))
    });
    commands.insert_resource(VenusSheets {
        images: venus_images,
        layouts: venus_layouts,
    });

    commands.insert_resource(PlayerSheet {
        image: asset_server.load("img/spritesheets/apterus-running.png"),
        layout: layouts.add(TextureAtlasLayout::from_grid(
            UVec2::new(PLAYER_WIDTH as u32, PLAYER_HEIGHT as u32),
            PLAYER_RUN_FRAMES as u32,
            1,
            None,
            None,
        )),
    });

    commands.insert_resource(ActorSprites {
        ground: asset_server.load("img/plataforma1.png"),
        cloud: asset_server.load("img/plataforma2.png"),
        thorn: asset_server.load("img/sprites/venus-heart.png"),
    });
}

// ── Actor sprite attachment ───────────────────────────────────────────────────

/// Marker for the sprite entity mirroring a boss's owned thorn.
#[derive(Component)]
pub struct ThornSprite;

/// Marker for platform sprite entities (cleanup handle).
#[derive(Component)]
pub struct PlatformSprite;

/// Attach a sheet sprite to each newly spawned boss, plus the mirror entity
/// for its thorn (hidden until the first projectile phase).
pub fn attach_venus_sprite_system(
    mut commands: Commands,
    query: Query<(Entity, &VenusBoss), Added<VenusBoss>>,
    sheets: Res<VenusSheets>,
    sprites: Res<ActorSprites>,
) {
    for (entity, boss) in query.iter() {
        let tag = boss.current_tag();
        commands.entity(entity).insert((
            Sprite::from_atlas_image(
                sheets.images[tag.index()].clone(),
                TextureAtlas {
                    layout: sheets.layouts[tag.index()].clone(),
                    index: 0,
                },
            ),
            Transform::from_xyz(
                boss.pos.x + VENUS_WIDTH / 2.0,
                boss.pos.y + VENUS_HEIGHT / 2.0,
                Z_BOSS,
            ),
            Visibility::default(),
        ));

        commands.spawn((
            ThornSprite,
            Sprite::from_image(sprites.thorn.clone()),
            Transform::from_xyz(0.0, 0.0, Z_THORN),
            Visibility::Hidden,
        ));
    }
}

/// Attach the run-cycle sprite to a newly spawned player.
pub fn attach_player_sprite_system(
    mut commands: Commands,
    query: Query<(Entity, &Player), Added<Player>>,
    sheet: Res<PlayerSheet>,
) {
    for (entity, player) in query.iter() {
        commands.entity(entity).insert((
            Sprite::from_atlas_image(
                sheet.image.clone(),
                TextureAtlas {
                    layout: sheet.layout.clone(),
                    index: 0,
                },
            ),
            Transform::from_xyz(
                player.pos.x + PLAYER_WIDTH / 2.0,
                player.pos.y + PLAYER_HEIGHT / 2.0,
                Z_PLAYER,
            ),
            Visibility::default(),
        ));
    }
}

/// Spawn one sprite entity per placed platform.
///
/// Runs once on entering `Playing`, after the map has been built.  All
/// platforms of a kind share the same image handle.
pub fn spawn_platform_sprites(
    mut commands: Commands,
    field: Res<PlatformField>,
    sprites: Res<ActorSprites>,
) {
    for platform in field.platforms() {
        let image = match platform.kind {
            PlatformKind::Ground => sprites.ground.clone(),
            PlatformKind::Cloud => sprites.cloud.clone(),
        };
        let hit_box = &platform.hit_box;
        commands.spawn((
            PlatformSprite,
            Sprite {
                image,
                custom_size: Some(Vec2::new(hit_box.w, hit_box.h)),
                ..default()
            },
            Transform::from_xyz(
                hit_box.x + hit_box.w / 2.0,
                hit_box.y + hit_box.h / 2.0,
                Z_PLATFORM,
            ),
        ));
    }
}

// ── Per-frame visual sync ─────────────────────────────────────────────────────

/// Mirror the boss's current animation tag and frame into its sprite, and
/// its simulation position into its transform.
pub fn sync_venus_sprite_system(
    sheets: Res<VenusSheets>,
    mut q_boss: Query<(&VenusBoss, &mut Sprite, &mut Transform)>,
) {
    for (boss, mut sprite, mut transform) in q_boss.iter_mut() {
        let tag = boss.current_tag();
        sprite.image = sheets.images[tag.index()].clone();
        sprite.texture_atlas = Some(TextureAtlas {
            layout: sheets.layouts[tag.index()].clone(),
            index: boss.current_animation().current_frame(),
        });
        transform.translation.x = boss.pos.x + VENUS_WIDTH / 2.0;
        transform.translation.y = boss.pos.y + VENUS_HEIGHT / 2.0;
    }
}

/// Mirror the boss's owned thorn onto its sprite entity; hidden while the
/// slot is empty.
pub fn sync_thorn_sprite_system(
    q_boss: Query<&VenusBoss>,
    mut q_thorn: Query<(&mut Transform, &mut Visibility), With<ThornSprite>>,
) {
    let Ok(boss) = q_boss.single() else {
        return;
    };
    let Ok((mut transform, mut visibility)) = q_thorn.single_mut() else {
        return;
    };

    match boss.thorn.as_ref() {
        Some(thorn) => {
            transform.translation.x = thorn.pos.x + THORN_WIDTH / 2.0;
            transform.translation.y = thorn.pos.y + THORN_HEIGHT / 2.0;
            *visibility = Visibility::Visible;
        }
        None => {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Mirror the player's run frame, facing, and position into its sprite.
pub fn sync_player_sprite_system(mut q_player: Query<(&Player, &mut Sprite, &mut Transform)>) {
    for (player, mut sprite, mut transform) in q_player.iter_mut() {
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = player.run_anim.current_frame();
        }
        sprite.flip_x = player.facing_left;
        transform.translation.x = player.pos.x + PLAYER_WIDTH / 2.0;
        transform.translation.y = player.pos.y + PLAYER_HEIGHT / 2.0;
    }
}

// ── HUD life bar ──────────────────────────────────────────────────────────────

/// Root node of the life bar (cleanup handle).
#[derive(Component)]
pub struct LifeBarRoot;

/// The filled portion; its width tracks the player's hp fraction.
#[derive(Component)]
pub struct LifeBarFill;

/// The "HP 100/100" label.
#[derive(Component)]
pub struct LifeBarText;

/// Filled fraction of the life bar, clamped to `[0, 1]`.
///
/// The bar grows from the left; 0 is empty, 1 is full.
pub fn life_fraction(hp: i32, max_hp: i32) -> f32 {
    if max_hp <= 0 {
        return 0.0;
    }
    (hp as f32 / max_hp as f32).clamp(0.0, 1.0)
}

fn bar_background() -> Color {
    Color::srgb(0.05, 0.05, 0.07)
}
fn bar_fill() -> Color {
    Color::srgb(0.16, 0.68, 0.26)
}
fn bar_border() -> Color {
    Color::srgb(0.45, 0.45, 0.52)
}

/// Spawn the life bar in the bottom-left corner on entering `Playing`.
pub fn setup_hud(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(16.0),
                width: Val::Px(240.0),
                height: Val::Px(22.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(bar_background()),
            BorderColor::all(bar_border()),
            LifeBarRoot,
        ))
        .with_children(|bar| {
            bar.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(bar_fill()),
                LifeBarFill,
            ));
        });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(24.0),
            bottom: Val::Px(42.0),
            ..default()
        },
        Text::new("HP"),
        TextFont {
            font: font.0.clone(),
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        LifeBarRoot,
        LifeBarText,
    ));
}

/// Keep the fill width and label in step with the player's health.
pub fn sync_hud_system(
    q_health: Query<&PlayerHealth>,
    mut q_fill: Query<&mut Node, With<LifeBarFill>>,
    mut q_text: Query<&mut Text, With<LifeBarText>>,
) {
    let Ok(health) = q_health.single() else {
        return;
    };

    if let Ok(mut node) = q_fill.single_mut() {
        node.width = Val::Percent(life_fraction(health.hp, health.max_hp) * 100.0);
    }
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = format!("HP {}/{}", health.hp.max(0), health.max_hp);
    }
}
