//! Application state
//!
//! One screen at a time: the menu, a live run, or the game-over card.
//! Everything session-independent (asset catalog, sound bank, best-score
//! store, current selections) lives here and survives across runs.

use crate::assets::AssetCatalog;
use crate::audio::SoundBank;
use crate::game::GameSession;
use crate::profile::{CarKind, LevelKind};
use crate::storage::ScoreStore;

/// The screens the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// Root application state.
pub struct AppState {
    pub screen: Screen,

    /// Menu selections, kept between runs
    pub selected_car: CarKind,
    pub selected_level: LevelKind,
    /// Master volume, 0.0-1.0
    pub volume: f32,

    /// Lazily filled asset cache (sky textures, car/drum models)
    pub catalog: AssetCatalog,
    /// Sound cues; `None` until first successfully loaded
    pub sounds: Option<SoundBank>,
    /// Durable best score
    pub store: ScoreStore,

    /// The live run, if any
    pub session: Option<GameSession>,
    /// Score of the most recently finished run
    pub last_score: u32,
    /// Did the last run beat the stored best?
    pub new_best: bool,
    /// Shown on the menu when asset loading failed
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            selected_car: CarKind::Skyline,
            selected_level: LevelKind::Morning,
            volume: 0.5,
            catalog: AssetCatalog::new(),
            sounds: None,
            store: ScoreStore::open(),
            session: None,
            last_score: 0,
            new_best: false,
            load_error: None,
        }
    }
}
