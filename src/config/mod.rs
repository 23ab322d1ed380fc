use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::generator::GenerationParams;

fn default_count() -> usize {
    1000
}
fn default_min_size_km() -> f64 {
    1.0
}
fn default_max_size_km() -> f64 {
    315.0
}
fn default_min_vertices() -> usize {
    4
}
fn default_max_vertices() -> usize {
    4
}
fn default_true() -> bool {
    true
}

/// Settings read from `mockgons.toml`
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_min_size_km")]
    pub min_size_km: f64,
    #[serde(default = "default_max_size_km")]
    pub max_size_km: f64,
    #[serde(default = "default_min_vertices")]
    pub min_vertices: usize,
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    #[serde(default = "default_true")]
    pub circles: bool,
    #[serde(default = "default_true")]
    pub ovals: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            min_size_km: default_min_size_km(),
            max_size_km: default_max_size_km(),
            min_vertices: default_min_vertices(),
            max_vertices: default_max_vertices(),
            circles: true,
            ovals: true,
            seed: None,
            output: None,
            pretty: false,
            verbose: false,
        }
    }
}

impl FileConfig {
    /// Search the usual locations and load the first config that parses
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Generation parameters described by this file
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            count: self.count,
            min_size_km: self.min_size_km,
            max_size_km: self.max_size_km,
            min_vertices: self.min_vertices,
            max_vertices: self.max_vertices,
            include_circles: self.circles,
            include_ovals: self.ovals,
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mockgons.toml"));
    paths.push(PathBuf::from(".mockgons.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mockgons").join("config.toml"));
        paths.push(config_dir.join("mockgons.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mockgons.toml"));
    }

    paths
}
