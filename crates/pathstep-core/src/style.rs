//! Cell colours: [`Color`] and the per-type palette.

use crate::cell::CellType;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const MINT: Self = Self::from_rgb(62, 180, 137);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREY: Self = Self::from_rgb(128, 128, 128);
    pub const LIGHT_GREY: Self = Self::from_rgb(211, 211, 211);
    pub const PINK: Self = Self::from_rgb(255, 192, 203);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl CellType {
    /// Fill colour used when drawing a cell of this type.
    pub const fn colour(self) -> Color {
        match self {
            Self::Empty => Color::WHITE,
            Self::Wall => Color::BLACK,
            Self::Start => Color::MINT,
            Self::End => Color::RED,
            Self::Searching => Color::GREY,
            Self::Searched => Color::LIGHT_GREY,
            Self::Path => Color::PINK,
        }
    }
}
