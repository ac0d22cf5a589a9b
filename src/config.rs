//! Pane configuration
//!
//! Stores layout and tab bar preferences in `~/.config/viewpane/config.yaml`.
//! Every field has a default, so a partial file only overrides what it names.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::{Insets, Side};

/// Top-level configuration for a view pane
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Division engine settings
    pub layout: LayoutConfig,
    /// Insets of the division area's content rectangle
    pub insets: Insets,
    /// Insets around the side bars, outside the division area
    pub side_bar_insets: Insets,
    /// Insets between each content area and the node it hosts
    pub content_insets: Insets,
    /// Tab button sizing
    pub tab_bar: TabBarMetrics,
}

/// Settings consumed by the division-layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Thickness of a divider handle, centered on the boundary it controls
    pub divider_thickness: f32,
    /// Smallest extent the center keeps on each axis while space allows
    pub min_center: f32,
    /// Smallest extent a divider drag may shrink a region to
    pub min_region: f32,
    /// Round boundary coordinates to whole pixels
    pub snap_to_pixel: bool,
    /// Initial extent of slots on each side
    pub default_extent: EdgeExtents,
    /// Initial share of a strip's length given to its leading slot
    pub default_split: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            divider_thickness: 4.0,
            min_center: 100.0,
            min_region: 24.0,
            snap_to_pixel: true,
            default_extent: EdgeExtents::default(),
            default_split: 0.5,
        }
    }
}

/// Per-side initial extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeExtents {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for EdgeExtents {
    fn default() -> Self {
        Self {
            top: 150.0,
            bottom: 150.0,
            left: 220.0,
            right: 220.0,
        }
    }
}

impl EdgeExtents {
    pub fn get(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Sizing used to compute tab button preferred sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarMetrics {
    pub button_height: f32,
    /// Average advance of one character of tab text
    pub char_width: f32,
    /// Horizontal padding on each side of a button's label
    pub button_padding: f32,
    pub graphic_size: f32,
}

impl Default for TabBarMetrics {
    fn default() -> Self {
        Self {
            button_height: 24.0,
            char_width: 7.0,
            button_padding: 8.0,
            graphic_size: 16.0,
        }
    }
}

impl PaneConfig {
    /// Load config from the user config directory, or return defaults if
    /// it is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: PaneConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace out-of-range values with something the engine can use
    pub fn sanitized(mut self) -> Self {
        let defaults = LayoutConfig::default();
        let layout = &mut self.layout;

        if !(layout.divider_thickness >= 0.0) {
            layout.divider_thickness = defaults.divider_thickness;
        }
        if !(layout.min_center >= 0.0) {
            layout.min_center = defaults.min_center;
        }
        if !(layout.min_region >= 0.0) {
            layout.min_region = defaults.min_region;
        }
        if !(layout.default_split > 0.0 && layout.default_split < 1.0) {
            tracing::warn!(
                "default_split {} outside (0, 1), using {}",
                layout.default_split,
                defaults.default_split
            );
            layout.default_split = defaults.default_split;
        }
        for side in Side::ALL {
            let extent = layout.default_extent.get(side);
            if !(extent >= 0.0) {
                let fallback = defaults.default_extent.get(side);
                match side {
                    Side::Top => layout.default_extent.top = fallback,
                    Side::Bottom => layout.default_extent.bottom = fallback,
                    Side::Left => layout.default_extent.left = fallback,
                    Side::Right => layout.default_extent.right = fallback,
                }
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: PaneConfig = serde_yaml::from_str("layout:\n  min_center: 50\n").unwrap();
        assert_eq!(config.layout.min_center, 50.0);
        assert_eq!(config.layout.divider_thickness, 4.0);
        assert_eq!(config.layout.default_extent.left, 220.0);
        assert_eq!(config.insets, Insets::NONE);
        assert_eq!(config.content_insets, Insets::NONE);
    }

    #[test]
    fn test_sanitized_replaces_bad_split() {
        let mut config = PaneConfig::default();
        config.layout.default_split = 1.5;
        config.layout.min_region = -3.0;
        let config = config.sanitized();
        assert_eq!(config.layout.default_split, 0.5);
        assert_eq!(config.layout.min_region, 24.0);
    }

    #[test]
    fn test_sanitized_replaces_nan_extent() {
        let mut config = PaneConfig::default();
        config.layout.default_extent.bottom = f32::NAN;
        let config = config.sanitized();
        assert_eq!(config.layout.default_extent.bottom, 150.0);
    }
}
