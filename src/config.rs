//! Layout configuration and builder
//!
//! Configuration types for deterministic layout-graph generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Level size presets
///
/// Each preset maps to level-rectangle dimensions and a recommended room
/// count used when no explicit count is configured.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSize {
    /// Compact level: 60x60, ~4 rooms
    Compact,
    /// Standard level: 100x100, ~8 rooms (default)
    Standard,
    /// Sprawling level: 160x160, ~16 rooms
    Sprawling,
    /// Custom level rectangle
    Custom {
        /// Level extent along the x axis
        width: i32,
        /// Level extent along the z axis
        length: i32,
    },
}

impl LevelSize {
    /// Level extent along the x axis
    pub fn width(self) -> i32 {
        match self {
            LevelSize::Compact => 60,
            LevelSize::Standard => 100,
            LevelSize::Sprawling => 160,
            LevelSize::Custom { width, .. } => width,
        }
    }

    /// Level extent along the z axis
    pub fn length(self) -> i32 {
        match self {
            LevelSize::Compact => 60,
            LevelSize::Standard => 100,
            LevelSize::Sprawling => 160,
            LevelSize::Custom { length, .. } => length,
        }
    }

    /// Recommended room count for this size
    ///
    /// Used as the `total_rooms` default. Counts scale with the area so the
    /// default minimum room size still leaves valid cut intervals.
    pub fn recommended_rooms(self) -> u32 {
        match self {
            LevelSize::Compact => 4,
            LevelSize::Standard => 8,
            LevelSize::Sprawling => 16,
            LevelSize::Custom { width, length } => {
                // One room per ~35x35 patch, at least the degenerate minimum
                // the triangulation stage accepts
                let patches = (width as i64 * length as i64) / (35 * 35);
                patches.clamp(3, 64) as u32
            }
        }
    }

    /// Human-readable name for this size
    pub fn name(self) -> &'static str {
        match self {
            LevelSize::Compact => "Compact",
            LevelSize::Standard => "Standard",
            LevelSize::Sprawling => "Sprawling",
            LevelSize::Custom { .. } => "Custom",
        }
    }
}

impl Default for LevelSize {
    fn default() -> Self {
        LevelSize::Standard
    }
}

/// Configuration for deterministic layout generation
///
/// The same configuration always produces the identical layout, so only the
/// configuration needs to be persisted or shared; the layout is regenerated
/// from it on load.
///
/// # Example
///
/// ```rust
/// use room_layout_graph::*;
///
/// let config = LayoutConfigBuilder::new()
///     .seed(42)
///     .level_size(LevelSize::Standard)
///     .total_rooms(8)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width(), 100);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Random seed for the partition stage
    ///
    /// The same seed (with the same other parameters) always produces the
    /// exact same partition tree and therefore the same layout graph.
    pub seed: u32,

    /// Level size preset (determines the level rectangle)
    pub level_size: LevelSize,

    /// Requested number of rooms
    ///
    /// Best effort: the partitioner may exhaust splittable area first, in
    /// which case the shortfall is reported as unused budget rather than an
    /// error.
    pub total_rooms: u32,

    /// Minimum extent a room region keeps along a cut axis
    pub min_room_size: i32,
}

impl LayoutConfig {
    /// Level extent along the x axis
    #[inline]
    pub fn width(&self) -> i32 {
        self.level_size.width()
    }

    /// Level extent along the z axis
    #[inline]
    pub fn length(&self) -> i32 {
        self.level_size.length()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating [`LayoutConfig`] with validation
///
/// # Example
///
/// ```rust
/// use room_layout_graph::*;
///
/// // Use defaults (random seed)
/// let config = LayoutConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = LayoutConfigBuilder::new()
///     .seed(12345)
///     .level_size(LevelSize::Sprawling)
///     .min_room_size(25)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LayoutConfigBuilder {
    seed: Option<u32>,
    level_size: LevelSize,
    total_rooms: Option<u32>,
    min_room_size: i32,
}

impl LayoutConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random (generated from thread_rng)
    /// - level_size: Standard (100x100)
    /// - total_rooms: the level size's recommended count
    /// - min_room_size: 20
    pub fn new() -> Self {
        Self {
            seed: None,
            level_size: LevelSize::default(),
            total_rooms: None,
            min_room_size: 20,
        }
    }

    /// Set the random seed for layout generation
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the level size preset
    pub fn level_size(mut self, size: LevelSize) -> Self {
        self.level_size = size;
        self
    }

    /// Set the requested room count
    ///
    /// If not set, the level size's recommended count is used. Fewer than 3
    /// rooms cannot form a triangulation downstream.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `rooms < 3` or `rooms > 4096`.
    pub fn total_rooms(mut self, rooms: u32) -> Result<Self> {
        if rooms < 3 {
            return Err(LayoutError::InvalidConfig(format!(
                "total rooms must be >= 3 to triangulate (got {})",
                rooms
            )));
        }
        if rooms > 4096 {
            return Err(LayoutError::InvalidConfig(format!(
                "total rooms must be <= 4096 (got {})",
                rooms
            )));
        }
        self.total_rooms = Some(rooms);
        Ok(self)
    }

    /// Set the minimum room size
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `size < 1`.
    pub fn min_room_size(mut self, size: i32) -> Result<Self> {
        if size < 1 {
            return Err(LayoutError::InvalidConfig(format!(
                "minimum room size must be >= 1 (got {})",
                size
            )));
        }
        self.min_room_size = size;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a `Custom` level size with non-positive
    /// dimensions.
    pub fn build(self) -> Result<LayoutConfig> {
        if self.level_size.width() < 1 || self.level_size.length() < 1 {
            return Err(LayoutError::InvalidConfig(format!(
                "level dimensions must be positive (got {}x{})",
                self.level_size.width(),
                self.level_size.length()
            )));
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let total_rooms = self
            .total_rooms
            .unwrap_or_else(|| self.level_size.recommended_rooms());

        Ok(LayoutConfig {
            seed,
            level_size: self.level_size,
            total_rooms,
            min_room_size: self.min_room_size,
        })
    }
}

impl Default for LayoutConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
