// Software canvas: a clipped RGBA pixel surface with shape/text rasterization.
// Visual effects provided here:
// 1) Lines, rectangles, circles and polylines in solid colors.
// 2) Bitmap text (see font.rs).
// 3) Canvas-on-canvas compositing, either straight replace or additive glow.
// Anything drawn outside the canvas is silently dropped.

use crate::error::Error;
use crate::font::{glyph5x7, glyph_bit, Font, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::types::{BlendMode, Color, Point};
use image::RgbaImage;

pub struct Canvas {
    pixels: RgbaImage,
    blend: BlendMode, // used when something is composited *onto* this canvas
}

impl Canvas {
    /// Create a canvas cleared to transparent black.
    pub fn new(width: u32, height: u32, blend: BlendMode) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        Ok(Self { pixels: RgbaImage::new(width, height), blend })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.pixels.width() as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.pixels.height() as i32
    }

    #[cfg(test)]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    /// Read back one pixel; `None` outside the canvas.
    #[cfg(test)]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.in_bounds(x, y).then(|| *self.pixels.get_pixel(x as u32, y as u32))
    }

    /// Visual: the whole canvas becomes one flat color.
    pub fn fill(&mut self, color: Color) {
        for p in self.pixels.pixels_mut() {
            *p = color;
        }
    }

    /// Put a pixel if (x,y) is inside bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Horizontal span [x0, x1] on row y, clipped up front.
    fn hspan(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height() {
            return;
        }
        let (lo, hi) = (x0.min(x1).max(0), x0.max(x1).min(self.width() - 1));
        for x in lo..=hi {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Outlined rectangle with inclusive corners.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.hspan(left, right, top, color);
        self.hspan(left, right, bottom, color);
        for y in top..=bottom {
            self.set_pixel(left, y, color);
            self.set_pixel(right, y, color);
        }
    }

    /// Solid rectangle with inclusive corners.
    pub fn rect_filled(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let top = y0.min(y1).max(0);
        let bottom = y0.max(y1).min(self.height() - 1);
        for y in top..=bottom {
            self.hspan(x0, x1, y, color);
        }
    }

    /// Midpoint circle ring, one pixel wide. Negative radius draws nothing.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        let (mut x, mut y) = (r, 0);
        let mut err = 1 - r;
        while x >= y {
            for (px, py) in [
                (x, y), (y, x), (-y, x), (-x, y),
                (-x, -y), (-y, -x), (y, -x), (x, -y),
            ] {
                self.set_pixel(cx + px, cy + py, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Solid disc. Visual: a flat colored dot of radius `r`.
    pub fn circle_filled(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        for dy in -r..=r {
            let half = ((r * r - dy * dy) as f64).sqrt() as i32;
            self.hspan(cx - half, cx + half, cy + dy, color);
        }
    }

    /// Disc in `fill` with a one-pixel ring in `outline` on top.
    pub fn circle_outline(&mut self, cx: i32, cy: i32, r: i32, fill: Color, outline: Color) {
        self.circle_filled(cx, cy, r, fill);
        self.circle(cx, cy, r, outline);
    }

    /// Connect consecutive points with lines. A single point is just a pixel.
    pub fn path(&mut self, points: &[Point], color: Color) {
        match points {
            [] => {}
            [p] => self.set_pixel(p.x, p.y, color),
            _ => {
                for pair in points.windows(2) {
                    self.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
                }
            }
        }
    }

    /// Draw a string with (x,y) as the top-left of the first glyph.
    /// Characters without a glyph still advance the pen.
    pub fn text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Color) {
        let mut pen = x;
        for ch in text.chars() {
            if let Some(glyph) = glyph5x7(ch) {
                self.stamp_glyph(glyph, pen, y, font.scale, color);
                if font.bold {
                    self.stamp_glyph(glyph, pen + 1, y, font.scale, color);
                }
            }
            pen += font.advance();
        }
    }

    fn stamp_glyph(&mut self, glyph: &[u8; 5], x: i32, y: i32, scale: i32, color: Color) {
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if glyph_bit(glyph, col, row) {
                    let (bx, by) = (x + col * scale, y + row * scale);
                    self.rect_filled(bx, by, bx + scale - 1, by + scale - 1, color);
                }
            }
        }
    }

    /// Blend `src` onto this canvas with this canvas's blend mode.
    /// Source pixel (src_x, src_y) lands on (dst_x, dst_y); only the part of
    /// `src` from that origin to its far edge is used.
    pub fn composite(&mut self, dst_x: i32, dst_y: i32, src_x: i32, src_y: i32, src: &Canvas) {
        for sy in src_y.max(0)..src.height() {
            let ty = dst_y + (sy - src_y);
            if ty < 0 || ty >= self.height() {
                continue;
            }
            for sx in src_x.max(0)..src.width() {
                let tx = dst_x + (sx - src_x);
                if tx < 0 || tx >= self.width() {
                    continue;
                }
                let s = *src.pixels.get_pixel(sx as u32, sy as u32);
                let d = self.pixels.get_pixel_mut(tx as u32, ty as u32);
                match self.blend {
                    BlendMode::Replace => *d = s,
                    BlendMode::Additive => {
                        // Add with clamp (saturating); repeated draws stack until white
                        for (dc, sc) in d.0.iter_mut().zip(s.0) {
                            *dc = dc.saturating_add(sc);
                        }
                    }
                }
            }
        }
    }

    /// Pack into `out` as 0x00RRGGBB per pixel, the layout minifb expects.
    pub fn write_argb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.pixels.pixels().map(|p| {
            let [r, g, b, _] = p.0;
            ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        }));
    }
}
