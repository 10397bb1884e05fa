//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering — so they
//! run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. A `NextState` request transitions `MainMenu` → `Playing`.
//! 3. `Playing` persists across frames with no new transition request.
//! 4. The session round-trip `Playing` → `GameOver` → `MainMenu`.

use apterus::menu::GameState;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered.
///
/// `MinimalPlugins` provides the required scheduling infrastructure;
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(
        current_state(&app),
        GameState::MainMenu,
        "initial state must be MainMenu"
    );
}

#[test]
fn transition_main_menu_to_playing() {
    let mut app = app_with_default_state();
    app.update(); // settle into MainMenu

    set_state(&mut app, GameState::Playing);
    app.update(); // StateTransition fires; state becomes Playing

    assert_eq!(current_state(&app), GameState::Playing);
}

#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    set_state(&mut app, GameState::Playing);

    for _ in 0..5 {
        app.update();
    }

    assert_eq!(current_state(&app), GameState::Playing);
}

#[test]
fn session_round_trip_ends_back_at_the_menu() {
    let mut app = app_with_default_state();
    app.update();

    set_state(&mut app, GameState::Playing);
    app.update();
    assert_eq!(current_state(&app), GameState::Playing);

    set_state(&mut app, GameState::GameOver);
    app.update();
    assert_eq!(current_state(&app), GameState::GameOver);

    set_state(&mut app, GameState::MainMenu);
    app.update();
    assert_eq!(current_state(&app), GameState::MainMenu);
}
