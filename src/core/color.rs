//! Tile colors and blending.
//!
//! Channels are `f32` in `0.0..=1.0`. Merging two tiles blends their colors
//! with a component-wise mean, so the palette drifts toward gray as tiles
//! of both spawn colors combine.

use serde::{Deserialize, Serialize};

/// RGBA color with `f32` channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// The neutral marker: what an equal blend of black and white produces.
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Component-wise mean of two colors.
    ///
    /// ```
    /// use chroma_2048::core::Color;
    ///
    /// assert_eq!(Color::BLACK.blend(Color::WHITE), Color::GRAY);
    /// ```
    #[must_use]
    pub fn blend(self, other: Color) -> Color {
        Color {
            r: (self.r + other.r) / 2.0,
            g: (self.g + other.g) / 2.0,
            b: (self.b + other.b) / 2.0,
            a: (self.a + other.a) / 2.0,
        }
    }

    /// Largest per-channel difference between two colors.
    #[must_use]
    pub fn max_channel_distance(self, other: Color) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }
}

/// How a tile color is compared against the neutral marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ColorMatch {
    /// Bit-for-bit channel equality.
    #[default]
    Exact,
    /// Every channel within the given distance.
    Within(f32),
}

impl ColorMatch {
    /// Does `color` match `target` under this rule?
    #[must_use]
    pub fn matches(self, color: Color, target: Color) -> bool {
        match self {
            ColorMatch::Exact => color == target,
            ColorMatch::Within(eps) => color.max_channel_distance(target) <= eps,
        }
    }
}
