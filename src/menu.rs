//! App-level state machine and the menu / game-over screens.
//!
//! ## States
//!
//! | State      | Description                                  |
//! |------------|----------------------------------------------|
//! | `MainMenu` | Initial state; splash screen shown           |
//! | `Playing`  | Level running; all gameplay systems active   |
//! | `GameOver` | Win/lose screen; level world despawned       |
//!
//! Every gameplay system in [`crate::level::LevelPlugin`] runs under
//! `.run_if(in_state(GameState::Playing))`, so the simulation is fully
//! inactive outside the level.

use crate::graphics::GameFont;
use bevy::prelude::*;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Splash screen; shown on startup.
    #[default]
    MainMenu,
    /// Active level.
    Playing,
    /// Win/lose screen after the level ends.
    GameOver,
}

/// How the last session ended; read by the game-over screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionOutcome {
    #[default]
    None,
    BossDefeated,
    PlayerDied,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the main menu; the tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Start" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the game-over screen.
#[derive(Component)]
pub struct GameOverRoot;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, the menu UI setup/teardown, and the button handler.
///
/// Must be added before any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionOutcome>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over)
            .add_systems(
                Update,
                game_over_input_system.run_if(in_state(GameState::GameOver)),
            );
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn title_color() -> Color {
    Color::srgb(0.62, 0.88, 0.55)
}
fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

// ── OnEnter(MainMenu): spawn UI ───────────────────────────────────────────────

/// Spawn the full-screen main-menu overlay: title, Start and Quit buttons,
/// and the controls hint.
pub fn setup_main_menu(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("APTERUS"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("A side-scrolling action game"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 52.0);

            menu_button(root, &font, "START", start_bg(), start_border(), true);
            spacer(root, 14.0);
            menu_button(root, &font, "QUIT", quit_bg(), quit_border(), false);

            spacer(root, 52.0);

            root.spawn((
                Text::new("← → move   SPACE jump   P pause"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

fn menu_button(
    parent: &mut ChildSpawnerCommands<'_>,
    font: &GameFont,
    label: &str,
    bg: Color,
    border: Color,
    is_start: bool,
) {
    let mut button = parent.spawn((
        Button,
        Node {
            width: Val::Px(220.0),
            height: Val::Px(50.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(bg),
        BorderColor::all(border),
    ));
    if is_start {
        button.insert(MenuStartButton);
    } else {
        button.insert(MenuQuitButton);
    }
    button.with_children(|btn| {
        btn.spawn((
            Text::new(label.to_string()),
            TextFont {
                font: font.0.clone(),
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });
}

/// Spawn a fixed-height invisible spacer node.
fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

// ── OnExit(MainMenu): despawn UI ──────────────────────────────────────────────

/// Recursively despawn all main-menu entities.
pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

// ── Update (MainMenu only): button interaction ────────────────────────────────

/// Handle Start and Quit presses.
///
/// - **Start** → [`GameState::Playing`]; `OnEnter(Playing)` builds the level.
/// - **Quit** → sends [`AppExit`] to gracefully shut down.
#[allow(clippy::type_complexity)]
pub fn menu_button_system(
    start_query: Query<&Interaction, (Changed<Interaction>, With<MenuStartButton>)>,
    quit_query: Query<&Interaction, (Changed<Interaction>, With<MenuQuitButton>)>,
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    for interaction in start_query.iter() {
        if *interaction == Interaction::Pressed {
            next_state.set(GameState::Playing);
        }
    }
    for interaction in quit_query.iter() {
        if *interaction == Interaction::Pressed {
            exit.write(bevy::app::AppExit::Success);
        }
    }
    // Keyboard shortcut mirrors the buttons.
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::Playing);
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(bevy::app::AppExit::Success);
    }
}

// ── Game over ─────────────────────────────────────────────────────────────────

/// Spawn the win/lose overlay based on [`SessionOutcome`].
pub fn setup_game_over(
    mut commands: Commands,
    font: Res<GameFont>,
    outcome: Res<SessionOutcome>,
) {
    let (headline, color) = match *outcome {
        SessionOutcome::BossDefeated => ("YOU WIN", title_color()),
        _ => ("GAME OVER", quit_border()),
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            GameOverRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(headline),
                TextFont {
                    font: font.0.clone(),
                    font_size: 48.0,
                    ..default()
                },
                TextColor(color),
            ));
            spacer(root, 24.0);
            root.spawn((
                Text::new("ENTER — menu    ESC — quit"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 16.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));
        });
}

pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Return to the menu or quit from the game-over screen.
pub fn game_over_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        next_state.set(GameState::MainMenu);
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(bevy::app::AppExit::Success);
    }
}
