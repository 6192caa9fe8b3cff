// Per-frame composition.
// Visual: every call repaints the whole window from scratch:
//   black background, a scrolling patch of TV-static, collapsing squares,
//   a fan of green lines, two pulsing circles, a sliding white bar,
//   the bouncing ring, typing text, the FPS readout and a jittery grey wave.

use crate::anim::{self, BallState};
use crate::canvas::Canvas;
use crate::error::Error;
use crate::font::Font;
use crate::types::{rgba, BlendMode, Point, BLACK, GREEN, RED, WHITE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side of the square static-noise canvas.
pub const NOISE_SIZE: u32 = 50;
/// Where the noise patch lands on the primary canvas.
pub const NOISE_ORIGIN: Point = Point::new(800, 300);

pub const TYPED_TEXT: &str = "Hello World! 123456789@#$%^&*)";
pub const TYPED_TEXT_POS: Point = Point::new(15, 300);
pub const FPS_POS: Point = Point::new(16, 16);

pub const PATH_POINTS: i32 = 199;
pub const PATH_START_X: i32 = 702;
pub const PATH_BASE_Y: i32 = 100;
pub const PATH_JITTER: i32 = 50;

/// Everything a frame needs besides the target canvas and the clock.
/// The render loop owns exactly one of these.
pub struct Scene {
    noise: Canvas,
    ball: BallState,
    rng: StdRng,
}

impl Scene {
    /// `seed` makes the noise and the wave reproducible; `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Result<Self, Error> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(rng: StdRng) -> Result<Self, Error> {
        Ok(Self {
            noise: Canvas::new(NOISE_SIZE, NOISE_SIZE, BlendMode::Replace)?,
            ball: BallState::new(),
            rng,
        })
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    /// Paint one frame onto `primary`. `dt` is the previous frame's duration,
    /// `time` the total elapsed seconds. Also advances the ball by one step.
    pub fn compose(&mut self, primary: &mut Canvas, dt: f64, time: f64) {
        let (w, h) = (primary.width(), primary.height());

        primary.fill(BLACK);

        // Static noise, blended with the primary canvas's own mode (additive)
        self.refresh_noise();
        let (ox, oy) = anim::noise_offset(time);
        primary.composite(NOISE_ORIGIN.x, NOISE_ORIGIN.y, ox, oy, &self.noise);

        for i in anim::nested_rect_offsets(time) {
            primary.rect(100 + i, 100 + i, 500 + i, 500 + i, RED);
        }

        let sweep = anim::sweep_x(time);
        for i in (0..1000).step_by(100) {
            primary.line(0, h - i, i + sweep, 0, GREEN);
        }

        primary.circle_filled(w / 4, h / 4, anim::filled_radius(time), rgba(128, 255, 255, 255));
        primary.circle_outline(w - 150, h - 150, anim::outlined_radius(time), RED, GREEN);
        primary.rect_filled(w - anim::bar_phase(time) - 15, 15, w - 15, 100, WHITE);

        self.ball.step(w, h);
        primary.circle(
            self.ball.x,
            self.ball.y,
            self.ball.radius,
            rgba(anim::ball_red(time), 255, 255, 255),
        );

        // ASCII only, so byte length == character count
        let shown = &TYPED_TEXT[..anim::typed_len(time, TYPED_TEXT.len())];
        primary.text(shown, TYPED_TEXT_POS.x, TYPED_TEXT_POS.y, Font::REGULAR, WHITE);
        primary.text(&anim::fps_label(dt), FPS_POS.x, FPS_POS.y, Font::BOLD, WHITE);

        let path = self.jitter_path();
        primary.path(&path, rgba(123, 123, 123, 255));
    }

    /// Visual: every pixel of the noise canvas becomes a random grey.
    fn refresh_noise(&mut self) {
        for y in 0..self.noise.height() {
            for x in 0..self.noise.width() {
                let v = self.rng.gen_range(0..=u8::MAX);
                self.noise.set_pixel(x, y, rgba(v, v, v, 255));
            }
        }
    }

    /// A fresh random wave each frame; nothing carries over.
    fn jitter_path(&mut self) -> Vec<Point> {
        (0..PATH_POINTS)
            .map(|k| {
                Point::new(
                    PATH_START_X + 2 * k,
                    PATH_BASE_Y + self.rng.gen_range(0..PATH_JITTER),
                )
            })
            .collect()
    }
}
