use std::{path::PathBuf, time::Duration};

use wordseek_core::{Difficulty, Grid};
use wordseek_generator::GridBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generation: GenerationSettings,
    pub autosave: AutosaveSettings,
    pub store_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation: GenerationSettings::default(),
            autosave: AutosaveSettings::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

pub const DEFAULT_STORE_PATH: &str = "wordseek.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub grid_size: usize,
    pub difficulty: Difficulty,
    pub max_attempts: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            grid_size: Grid::DEFAULT_SIZE,
            difficulty: Difficulty::default(),
            max_attempts: GridBuilder::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveSettings {
    /// Quiet period after the last change before the session is written.
    pub debounce: Duration,
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_secs(1),
        }
    }
}
