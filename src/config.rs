//! Runtime settings read from the environment.
//!
//! `main` loads a `.env` file (if present) with `dotenv` before calling
//! [`Settings::from_env`]. Nothing is ever written back.

use std::path::PathBuf;

/// Default log4rs configuration file, relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// When to emit ANSI colors on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Leave the decision to `colored` (honours `NO_COLOR` / `CLICOLOR`).
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `MASK_LOG_CONFIG`: log4rs YAML file.
    pub log_config: PathBuf,
    /// `MASK_BANNER`: print the ASCII banner before the report.
    pub show_banner: bool,
    /// `MASK_COLOR`: `auto`, `always` or `never`.
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            show_banner: true,
            color: ColorChoice::Auto,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(path) = lookup("MASK_LOG_CONFIG").filter(|p| !p.trim().is_empty()) {
            settings.log_config = PathBuf::from(path.trim());
        }
        if let Some(value) = lookup("MASK_BANNER") {
            match parse_flag(&value) {
                Some(flag) => settings.show_banner = flag,
                None => log::warn!("Ignoring MASK_BANNER={value:?}"),
            }
        }
        if let Some(value) = lookup("MASK_COLOR") {
            match value.trim().to_ascii_lowercase().as_str() {
                "auto" => settings.color = ColorChoice::Auto,
                "always" => settings.color = ColorChoice::Always,
                "never" => settings.color = ColorChoice::Never,
                _ => log::warn!("Ignoring MASK_COLOR={value:?}"),
            }
        }

        settings
    }

    /// Apply the color choice to `colored`'s global override.
    pub fn apply_color(&self) {
        match self.color {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
