//! Color handling for interaction grids
//!
//! This module provides the [`Color`] type. Colors are parsed from CSS color
//! strings with the `color` crate and stored as 8-bit sRGBA, which is what the
//! raster canvas writes.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use image::Rgba;

/// An 8-bit sRGB color with alpha, ready to be written to a canvas pixel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    rgba: [u8; 4],
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use interactions_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red, Color::rgb(255, 0, 0));
    ///
    /// let blue = Color::new("blue").unwrap();
    /// assert_eq!(blue.to_rgba().0, [0, 0, 255, 255]);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => {
                let rgba8 = color.to_alpha_color::<Srgb>().to_rgba8();
                Ok(Self {
                    rgba: [rgba8.r, rgba8.g, rgba8.b, rgba8.a],
                })
            }
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates an opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgba: [r, g, b, 255],
        }
    }

    /// Creates a new color with the specified alpha value (0 transparent, 255 opaque).
    pub const fn with_alpha(self, alpha: u8) -> Self {
        let [r, g, b, _] = self.rgba;
        Self {
            rgba: [r, g, b, alpha],
        }
    }

    /// Returns the alpha component of this color.
    pub const fn alpha(self) -> u8 {
        self.rgba[3]
    }

    /// Returns the pixel value written to the canvas for this color.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.rgba)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Self { rgba: pixel.0 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba;
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert_eq!(red, Ok(Color::rgb(255, 0, 0)));

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_named_and_functional() {
        assert_eq!(Color::new("white").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(
            Color::new("rgb(220, 235, 250)").unwrap(),
            Color::rgb(220, 235, 250)
        );
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "#000000");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::rgb(255, 0, 0);
        let transparent = color.with_alpha(128);
        assert_eq!(transparent.alpha(), 128);
        assert_eq!(transparent.to_string(), "#ff000080");
    }

    #[test]
    fn test_color_display() {
        let color = Color::rgb(20, 40, 120);
        assert_eq!(format!("{color}"), "#142878");
    }

    #[test]
    fn test_color_pixel_roundtrip() {
        let color = Color::rgb(1, 2, 3);
        assert_eq!(Color::from(color.to_rgba()), color);
    }
}
