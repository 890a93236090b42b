use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::defaults;

/// Name of the per-project configuration file
pub const LOCAL_CONFIG_FILE: &str = ".benchplotconfig";

/// Read hierarchical configuration (user -> local override)
pub fn read_hierarchical_config() -> Result<Config, ConfigError> {
    let mut builder = Config::builder();

    // 1. User config (XDG_CONFIG_HOME or ~/.config/bench-plot/config.toml)
    if let Some(user_config_path) = user_config_path() {
        builder = builder.add_source(
            File::from(user_config_path)
                .format(FileFormat::Toml)
                .required(false),
        );
    }

    // 2. Local config (.benchplotconfig) - this overrides user config
    if let Some(local_path) = find_local_config_path() {
        builder = builder.add_source(
            File::from(local_path)
                .format(FileFormat::Toml)
                .required(false),
        );
    }

    builder.build()
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return Some(
            Path::new(&xdg_config_home)
                .join("bench-plot")
                .join("config.toml"),
        );
    }

    dirs_next::home_dir().map(|home| home.join(".config").join("bench-plot").join("config.toml"))
}

fn find_local_config_path() -> Option<PathBuf> {
    let mut current_dir = env::current_dir().ok()?;
    loop {
        let candidate = current_dir.join(LOCAL_CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current_dir.pop() {
            return None;
        }
    }
}

/// Chart appearance as read from the `[chart]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    /// Fixed y range of the miss ratio panel
    pub miss_ratio_ylim: Option<(f64, f64)>,
    /// Fixed y range of the load admission panel
    pub load_admit_ylim: Option<(f64, f64)>,
    /// Fixed y range of the throughput panel, in MiB/s
    pub throughput_ylim: Option<(f64, f64)>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            width: defaults::DEFAULT_CHART_WIDTH,
            height: defaults::DEFAULT_CHART_HEIGHT,
            miss_ratio_ylim: None,
            load_admit_ylim: None,
            throughput_ylim: None,
        }
    }
}

impl ChartSettings {
    /// Replace an image size below the supported minimum with the default size.
    pub fn with_supported_size(self) -> ChartSettings {
        if self.width >= defaults::MIN_CHART_WIDTH && self.height >= defaults::MIN_CHART_HEIGHT {
            return self;
        }

        log::debug!(
            "Ignoring chart size {}x{}, minimum is {}x{}",
            self.width,
            self.height,
            defaults::MIN_CHART_WIDTH,
            defaults::MIN_CHART_HEIGHT
        );
        ChartSettings {
            width: defaults::DEFAULT_CHART_WIDTH,
            height: defaults::DEFAULT_CHART_HEIGHT,
            ..self
        }
    }
}

fn chart_settings_from(config: &Config) -> ChartSettings {
    match config.get::<ChartSettings>("chart") {
        Ok(settings) => settings.with_supported_size(),
        Err(ConfigError::NotFound(_)) => ChartSettings::default(),
        Err(e) => {
            log::debug!("Ignoring invalid chart configuration: {}", e);
            ChartSettings::default()
        }
    }
}

/// Returns the chart settings from config, or the defaults if not set.
pub fn chart_settings() -> ChartSettings {
    match read_hierarchical_config() {
        Ok(config) => chart_settings_from(&config),
        Err(e) => {
            // Expected when no config exists or it does not parse
            log::debug!("Could not read hierarchical config: {}", e);
            ChartSettings::default()
        }
    }
}

fn input_directory_from(config: &Config) -> PathBuf {
    config
        .get_string("input.directory")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::DEFAULT_INPUT_DIRECTORY))
}

/// Returns the directory scanned for logs from config, or `result` if not set.
pub fn input_directory() -> PathBuf {
    match read_hierarchical_config() {
        Ok(config) => input_directory_from(&config),
        Err(e) => {
            log::debug!("Could not read hierarchical config: {}", e);
            PathBuf::from(defaults::DEFAULT_INPUT_DIRECTORY)
        }
    }
}
