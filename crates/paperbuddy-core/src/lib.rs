//! Core types shared across the PaperBuddy starfield crates.

mod color;

pub use color::{ParseColorError, Rgb};

use serde::{Deserialize, Serialize};

/// Dimensions of a drawing surface or viewport, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Construct a new [`Size`].
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Global drift speed applied on top of each star's own speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(&self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to per-star drift.
    pub fn multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
        }
    }
}

/// Colors used to paint the starfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Gradient color at the top edge.
    pub gradient_top: Rgb,
    /// Gradient color at the bottom edge.
    pub gradient_bottom: Rgb,
    /// Fill color for stars.
    pub star: Rgb,
}

impl Palette {
    /// Deepest navy, used as the page background.
    pub const NAVY_900: Rgb = Rgb::new(0x0a, 0x19, 0x2f);
    /// Card navy, slightly lighter.
    pub const NAVY_800: Rgb = Rgb::new(0x11, 0x22, 0x40);
    /// Muted slate for secondary text.
    pub const SLATE_300: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);
    /// Bright cyan accent.
    pub const ACCENT_CYAN: Rgb = Rgb::new(0x64, 0xff, 0xda);
    /// Logo purple accent.
    pub const ACCENT_PURPLE: Rgb = Rgb::new(0xbd, 0x34, 0xfe);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_top: Self::NAVY_900,
            gradient_bottom: Self::NAVY_800,
            star: Rgb::WHITE,
        }
    }
}
