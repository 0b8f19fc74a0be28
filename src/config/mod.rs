use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use log::info;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gateway::ENDPOINT_PATH;


const CONFIG_FILE_NAME: &'static str = "config.json";
const ENV_BACKEND_URL: &'static str = "LECTURE_QUIZ_BACKEND_URL";
const ENV_CONFIG_PATH: &'static str = "LECTURE_QUIZ_CONFIG";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub backend_url: String,
    pub question_count: u32,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: "http://127.0.0.1:5000".to_owned(),
            question_count: 5,
            request_timeout_secs: None,
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(ENV_CONFIG_PATH) {
        return Ok(PathBuf::from(path));
    }
    let mut path = ProjectDirs::from("", "", "lecture-quiz")
        .context("could not locate system directories")?
        .config_dir()
        .to_path_buf();
    path.push(CONFIG_FILE_NAME);
    Ok(path)
}

impl Config {
    pub fn load() -> Result<Config> {
        let path = get_config_path()?;
        let mut config = Config::from_path(&path)?;
        if let Ok(backend_url) = env::var(ENV_BACKEND_URL) {
            config.backend_url = backend_url;
        }
        Ok(config)
    }

    /// Missing files yield the defaults.
    pub fn from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Default::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("Could not read {:?}", path))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Could not parse config file {:?}", path))?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), ENDPOINT_PATH)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
