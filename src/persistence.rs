//! High score and colour-scheme persistence
//!
//! Both values live as plain text in a data directory: `high_score.txt`
//! holds a single integer and `settings.txt` the scheme name. Reads never
//! fail; a missing or corrupt file falls back to the default and is logged.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::render::ColorScheme;

const HIGH_SCORE_FILE: &str = "high_score.txt";
const SETTINGS_FILE: &str = "settings.txt";

/// Plain-text store rooted at a data directory
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Best score recorded so far, 0 if none could be read
    pub fn load_high_score(&self) -> u32 {
        let path = self.dir.join(HIGH_SCORE_FILE);
        match read_trimmed(&path).and_then(|text| {
            text.parse::<u32>()
                .with_context(|| format!("Invalid high score {:?} in {:?}", text, path))
        }) {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!("{err:#}; starting from 0");
                0
            }
        }
    }

    pub fn save_high_score(&self, score: u32) -> Result<()> {
        self.write(HIGH_SCORE_FILE, &score.to_string())?;
        tracing::info!(score, "high score saved");
        Ok(())
    }

    /// Saved colour scheme, `Classic` if none could be read
    pub fn load_color_scheme(&self) -> ColorScheme {
        let path = self.dir.join(SETTINGS_FILE);
        match read_trimmed(&path).and_then(|text| text.parse::<ColorScheme>()) {
            Ok(scheme) => scheme,
            Err(err) => {
                tracing::warn!("{err:#}; using the default colour scheme");
                ColorScheme::default()
            }
        }
    }

    pub fn save_color_scheme(&self, scheme: ColorScheme) -> Result<()> {
        self.write(SETTINGS_FILE, scheme.name())
    }

    fn write(&self, file: &str, contents: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {:?}", self.dir))?;
        let path = self.dir.join(file);
        std::fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))
    }
}

fn read_trimmed(path: &Path) -> Result<String> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(text.trim().to_string())
}
