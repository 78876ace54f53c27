//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by an optional user file, either next to the content document
//! or passed explicitly with `--config`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "German Lessons"
//! lang = "en"
//! description = "Private and small-group German lessons"
//!
//! [carousel]
//! initial_interval_ms = 2500   # auto-advance period after page load
//! resume_interval_ms = 4000    # period after an indicator click or hover ends
//!
//! [nav]
//! edge_offset = 100            # px: theme threshold, active-section marker, anchor offset
//! hide_after = 100             # px scrolled before the navbar may hide
//! debounce_ms = 100            # quiet period before deciding visibility
//!
//! [colors]
//! primary = "#1e3a8a"
//! accent_red = "#dc2626"
//! accent_gold = "#f59e0b"
//! accent_black = "#111827"
//! ```
//!
//! Config files are sparse; unknown keys are rejected to catch typos early.

use crate::carousel::CarouselTiming;
use crate::nav::NavSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document metadata.
    pub site: SiteMeta,
    /// Tutor photo carousel timing.
    pub carousel: CarouselConfig,
    /// Navbar scroll behaviour.
    pub nav: NavConfig,
    /// Brand colors, exposed as CSS custom properties.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.initial_interval_ms == 0 || self.carousel.resume_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel intervals must be non-zero".into(),
            ));
        }
        for (name, value) in [
            ("edge_offset", u64::from(self.nav.edge_offset)),
            ("hide_after", u64::from(self.nav.hide_after)),
            ("debounce_ms", self.nav.debounce_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "nav.{name} must be non-zero"
                )));
            }
        }
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        for (name, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// `<title>` and navbar logo text.
    pub title: String,
    /// `<html lang>` attribute.
    pub lang: String,
    /// `<meta name="description">`.
    pub description: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "German Lessons".to_string(),
            lang: "en".to_string(),
            description: "Private and small-group German lessons".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Auto-advance period from page load until the first interaction.
    pub initial_interval_ms: u64,
    /// Auto-advance period after an indicator click or the pointer leaving.
    pub resume_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 2500,
            resume_interval_ms: 4000,
        }
    }
}

impl CarouselConfig {
    pub fn timing(&self) -> CarouselTiming {
        CarouselTiming {
            initial: Duration::from_millis(self.initial_interval_ms),
            resume: Duration::from_millis(self.resume_interval_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Pixel offset shared by the theme threshold, the active-section marker
    /// and smooth-scroll anchor targets.
    pub edge_offset: u32,
    /// The navbar never hides above this scroll offset.
    pub hide_after: u32,
    /// Quiet period before the show/hide decision.
    pub debounce_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            edge_offset: 100,
            hide_after: 100,
            debounce_ms: 100,
        }
    }
}

impl NavConfig {
    pub fn settings(&self) -> NavSettings {
        NavSettings {
            edge_offset: f64::from(self.edge_offset),
            hide_after: f64::from(self.hide_after),
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

/// Brand colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Buttons, taglines, link hover borders.
    pub primary: String,
    /// Course badges and the accent bar.
    pub accent_red: String,
    /// Stars and certification checks.
    pub accent_gold: String,
    /// First stripe of the accent bar.
    pub accent_black: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#1e3a8a".to_string(),
            accent_red: "#dc2626".to_string(),
            accent_gold: "#f59e0b".to_string(),
            accent_black: "#111827".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("primary", self.primary.as_str()),
            ("accent_red", self.accent_red.as_str()),
            ("accent_gold", self.accent_gold.as_str()),
            ("accent_black", self.accent_black.as_str()),
        ]
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from the given directory, over stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    load_config_file(&dir.join("config.toml"))
}

/// Load an explicit config file over stock defaults. A missing file yields
/// the defaults.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Tutor Landing Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to data.json, or pass it with --config.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Document metadata
# ---------------------------------------------------------------------------
[site]
# Page <title> and navbar logo text.
title = "German Lessons"

# <html lang> attribute.
lang = "en"

# <meta name="description"> content.
description = "Private and small-group German lessons"

# ---------------------------------------------------------------------------
# Tutor photo carousel
# ---------------------------------------------------------------------------
[carousel]
# Auto-advance period from page load until the first interaction.
initial_interval_ms = 2500

# Auto-advance period after an indicator click or when the pointer leaves.
resume_interval_ms = 4000

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[nav]
# Pixels used for the color switch (hero height minus this), the
# active-section marker and smooth-scroll anchor targets. Must be non-zero.
edge_offset = 100

# The navbar never hides while scrolled less than this many pixels (non-zero).
hide_after = 100

# Quiet period (ms) after the last scroll event before showing/hiding.
debounce_ms = 100

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#1e3a8a"
accent_red = "#dc2626"
accent_gold = "#f59e0b"
accent_black = "#111827"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-accent-red: {accent_red};
    --color-accent-gold: {accent_gold};
    --color-accent-black: {accent_black};
}}"#,
        primary = colors.primary,
        accent_red = colors.accent_red,
        accent_gold = colors.accent_gold,
        accent_black = colors.accent_black,
    )
}
