// Core value types shared by the canvas, the composer and the window.

use image::Rgba;

/// One RGBA8 color. Visual: the exact shade a pixel ends up with.
pub type Color = Rgba<u8>;

#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Rgba([r, g, b, a])
}

pub const BLACK: Color = rgba(0, 0, 0, 255);
pub const WHITE: Color = rgba(255, 255, 255, 255);
pub const RED: Color = rgba(255, 0, 0, 255);
pub const GREEN: Color = rgba(0, 255, 0, 255);

/// Integer pixel coordinate (may lie outside the canvas; draws clip).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// How `Canvas::composite` merges source pixels into the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Source overwrites destination
    Replace,
    /// dst = min(dst + src, 255) per channel
    Additive,
}
