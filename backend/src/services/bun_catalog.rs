use chrono::NaiveTime;
use rand::{seq::SliceRandom, Rng};
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::BunDefinition;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read bun catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse bun catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid bun {filename}: {errors}")]
    Invalid {
        filename: String,
        errors: ValidationErrors,
    },
}

/// The set of known buns, loaded from a JSON array of definitions.
#[derive(Debug, Clone, Default)]
pub struct BunCatalog {
    buns: Vec<BunDefinition>,
}

impl BunCatalog {
    pub fn new(buns: Vec<BunDefinition>) -> Result<Self, CatalogError> {
        for bun in &buns {
            bun.validate().map_err(|errors| CatalogError::Invalid {
                filename: bun.filename.clone(),
                errors,
            })?;
        }
        Ok(Self { buns })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let buns: Vec<BunDefinition> = serde_json::from_str(raw)?;
        Self::new(buns)
    }

    /// Reads the catalog from disk. Called per request so new buns show up
    /// without a restart.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), buns = catalog.len(), "Loaded bun catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.buns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buns.is_empty()
    }

    /// Picks one of the buns showing `time`, at random when several do.
    pub fn find_matching<R: Rng + ?Sized>(
        &self,
        time: &NaiveTime,
        rng: &mut R,
    ) -> Option<&BunDefinition> {
        let matches: Vec<&BunDefinition> =
            self.buns.iter().filter(|bun| bun.matches(time)).collect();
        matches.choose(rng).copied()
    }

    pub fn find_by_filename(&self, filename: &str) -> Option<&BunDefinition> {
        self.buns.iter().find(|bun| bun.filename == filename)
    }
}

/// A plausible minute for a minute hand pointing at clock position `position`.
pub fn random_minute_near<R: Rng + ?Sized>(position: u32, rng: &mut R) -> u32 {
    if position == 12 {
        return *[58, 59, 0, 1, 2].choose(rng).unwrap_or(&0);
    }
    let centre = position * 5;
    rng.gen_range(centre - 2..=centre + 2)
}

/// A random time that `bun`'s ears could be telling.
pub fn generate_time_for_bun<R: Rng + ?Sized>(bun: &BunDefinition, rng: &mut R) -> NaiveTime {
    let (mut hour, minute) = if rng.gen_bool(0.5) {
        (bun.left_ear, random_minute_near(bun.right_ear, rng))
    } else {
        (bun.right_ear, random_minute_near(bun.left_ear, rng))
    };
    if rng.gen_bool(0.5) {
        hour = (hour + 12) % 24;
    }
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
