//! Run configuration
//!
//! Persisted as JSON: LocalStorage on the web, an optional file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Color, Playfield};

/// How often the paddles are stepped within one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddleCadence {
    /// Once per body processed (paddle speed scales with body count)
    #[default]
    PerBody,
    /// Once per frame
    PerFrame,
}

/// Geometry and look of one paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleSpec {
    pub width: f32,
    pub height: f32,
    /// Pixels per step
    pub speed: f32,
    pub color: Color,
    /// Distance of the top edge above the playfield's vertical center
    pub offset: f32,
}

impl PaddleSpec {
    pub fn player() -> Self {
        Self {
            width: PLAYER_PADDLE_WIDTH,
            height: PLAYER_PADDLE_HEIGHT,
            speed: PLAYER_PADDLE_SPEED,
            color: Color::Green,
            offset: PLAYER_PADDLE_OFFSET,
        }
    }

    pub fn autopilot() -> Self {
        Self {
            width: AUTOPILOT_PADDLE_WIDTH,
            height: AUTOPILOT_PADDLE_HEIGHT,
            speed: AUTOPILOT_PADDLE_SPEED,
            color: Color::Red,
            offset: AUTOPILOT_PADDLE_OFFSET,
        }
    }

    fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.speed > 0.0
    }

    /// Shrink a paddle that does not fit the playfield to half its extent
    fn fit_to(&mut self, playfield_width: f32, playfield_height: f32) {
        if self.height > playfield_height {
            log::warn!(
                "Paddle height {} exceeds playfield height {}, using {}",
                self.height,
                playfield_height,
                playfield_height / 2.0
            );
            self.height = playfield_height / 2.0;
        }
        if self.width > playfield_width {
            log::warn!(
                "Paddle width {} exceeds playfield width {}, using {}",
                self.width,
                playfield_width,
                playfield_width / 2.0
            );
            self.width = playfield_width / 2.0;
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield size when no canvas dictates it
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub body_count: usize,
    pub background: Color,
    pub player: PaddleSpec,
    pub autopilot: PaddleSpec,
    pub paddle_cadence: PaddleCadence,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Frames simulated by the native binary
    pub headless_frames: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            body_count: BODY_COUNT,
            background: Color::Charcoal,
            player: PaddleSpec::player(),
            autopilot: PaddleSpec::autopilot(),
            paddle_cadence: PaddleCadence::PerBody,
            seed: None,
            headless_frames: HEADLESS_FRAMES,
        }
    }
}

impl Config {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "bounce_pong_config";

    /// Environment variable naming a JSON config file (native only)
    pub const ENV_PATH: &'static str = "BOUNCE_PONG_CONFIG";

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    /// Override the playfield size (e.g. with the canvas size), then revalidate
    pub fn with_playfield(mut self, width: f32, height: f32) -> Self {
        self.playfield_width = width;
        self.playfield_height = height;
        self.validated()
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values that would break simulation invariants with defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            log::warn!(
                "Invalid playfield {}x{}, using default",
                self.playfield_width,
                self.playfield_height
            );
            self.playfield_width = defaults.playfield_width;
            self.playfield_height = defaults.playfield_height;
        }
        if !self.player.is_valid() {
            log::warn!("Invalid player paddle {:?}, using default", self.player);
            self.player = defaults.player;
        }
        if !self.autopilot.is_valid() {
            log::warn!("Invalid autopilot paddle {:?}, using default", self.autopilot);
            self.autopilot = defaults.autopilot;
        }
        self.player.fit_to(self.playfield_width, self.playfield_height);
        self.autopilot.fit_to(self.playfield_width, self.playfield_height);
        self
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Load config from the file named by `BOUNCE_PONG_CONFIG`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::debug!("{} not set, using default config", Self::ENV_PATH);
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}, using default", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}, using default", path, e);
                Self::default()
            }
        }
    }
}
