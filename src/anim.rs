// Animation phases and the bouncing ball.
// Everything except the ball is derived straight from the global time with
// modulo arithmetic, so each formula is a small pure function.

/// Integer phase of `time * rate`, wrapped into [0, period).
#[inline]
fn phase(time: f64, rate: f64, period: i64) -> i64 {
    // `as` saturates on huge/NaN input, rem_euclid keeps the result in range
    ((time * rate) as i64).rem_euclid(period)
}

/// Read origin inside the noise canvas. Visual: the noise patch scrolls and wraps.
pub fn noise_offset(time: f64) -> (i32, i32) {
    (phase(time, 100.0, 200) as i32, phase(time, 170.0, 400) as i32)
}

/// Nested squares are drawn for offsets 0, 10, .. below this limit.
/// Visual: the stack collapses towards the top-left corner, then pops back.
pub fn rect_limit(time: f64) -> i32 {
    100 - phase(time, 100.0, 100) as i32
}

pub fn nested_rect_offsets(time: f64) -> impl Iterator<Item = i32> {
    (0..rect_limit(time)).step_by(10)
}

/// Shared end x of the line fan.
pub fn sweep_x(time: f64) -> i32 {
    phase(time, 150.0, 900) as i32
}

pub const CIRCLE_PERIOD_RADIUS: i32 = 70;

/// Grows from 0 to 69, then resets.
pub fn filled_radius(time: f64) -> i32 {
    phase(time, 50.0, CIRCLE_PERIOD_RADIUS as i64) as i32
}

/// Anti-phase to `filled_radius`: shrinks while the other grows.
pub fn outlined_radius(time: f64) -> i32 {
    CIRCLE_PERIOD_RADIUS - filled_radius(time)
}

/// How far the top-right bar has grown leftwards past its minimum.
pub fn bar_phase(time: f64) -> i32 {
    phase(time, 100.0, 100) as i32
}

/// Red channel of the ball; green/blue stay at full.
pub fn ball_red(time: f64) -> u8 {
    phase(time, 150.0, 255) as u8
}

/// Number of characters of a `len`-character string shown at `time`.
/// Visual: the text types itself out, then restarts from one character.
pub fn typed_len(time: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    phase(time, 15.0, len as i64) as usize + 1
}

/// Rounded frames-per-second for a frame that took `dt` seconds.
/// `None` when dt is zero, negative or not finite (no meaningful rate).
pub fn fps(dt: f64) -> Option<u32> {
    if dt.is_nan() || dt <= 0.0 {
        return None;
    }
    let rate = (1.0 / dt).round();
    (rate.is_finite() && rate <= u32::MAX as f64).then_some(rate as u32)
}

pub fn fps_label(dt: f64) -> String {
    match fps(dt) {
        Some(n) => format!("{n} FPS"),
        None => String::from("-- FPS"),
    }
}

pub const BALL_RADIUS: i32 = 70;
pub const BALL_SPEED: i32 = 10;

/// The only stored animation state. Visual: a ring bouncing off the window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallState {
    pub x: i32,
    pub y: i32,
    pub dx: i32, // -1 or +1
    pub dy: i32, // -1 or +1
    pub radius: i32,
    pub speed: i32,
}

impl BallState {
    pub fn new() -> Self {
        Self {
            x: BALL_RADIUS,
            y: BALL_RADIUS,
            dx: 1,
            dy: 1,
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
        }
    }

    /// One physics step inside a `width` x `height` surface.
    /// The wall test looks ahead a single unit (`x + dx`) while the move is
    /// `dx * speed`, so a bound that isn't a multiple of the speed away from
    /// the start can be overshot by up to `speed - 1` pixels for one frame.
    pub fn step(&mut self, width: i32, height: i32) {
        if self.x + self.dx > width - self.radius || self.x + self.dx < self.radius {
            self.dx = -self.dx;
        }
        if self.y + self.dy > height - self.radius || self.y + self.dy < self.radius {
            self.dy = -self.dy;
        }
        self.x += self.dx * self.speed;
        self.y += self.dy * self.speed;
    }
}

impl Default for BallState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES: [f64; 9] = [0.0, 0.013, 0.5, 1.39, 2.0, 7.77, 123.456, 9_999.99, 1.0e12];

    #[test]
    fn circle_radii_are_anti_phase() {
        for t in TIMES {
            assert_eq!(filled_radius(t) + outlined_radius(t), 70, "t = {t}");
            assert!((0..70).contains(&filled_radius(t)));
        }
    }

    #[test]
    fn rect_limit_steps_down_then_resets() {
        let mut prev = i32::MAX;
        for k in 0..100 {
            let t = (k as f64 + 0.5) / 100.0;
            let limit = rect_limit(t);
            assert_eq!(limit, 100 - k);
            assert!(limit <= prev);
            prev = limit;
        }
        assert_eq!(rect_limit(1.005), 100);
    }

    #[test]
    fn nested_rect_count_follows_limit() {
        assert_eq!(nested_rect_offsets(0.0).collect::<Vec<_>>(), (0..100).step_by(10).collect::<Vec<_>>());
        // limit 100 - 95 = 5 -> only the outermost square
        assert_eq!(nested_rect_offsets(0.955).count(), 1);
        // limit 100 - 89 = 11 -> offsets 0 and 10
        assert_eq!(nested_rect_offsets(0.895).count(), 2);
    }

    #[test]
    fn noise_offset_stays_in_window() {
        for t in TIMES.into_iter().chain([f64::MAX, f64::INFINITY, f64::NAN]) {
            let (ox, oy) = noise_offset(t);
            assert!((0..200).contains(&ox), "x offset {ox} at t = {t}");
            assert!((0..400).contains(&oy), "y offset {oy} at t = {t}");
        }
        assert_eq!(noise_offset(1.0), (100, 170));
        assert_eq!(noise_offset(2.5), (50, 25));
    }

    #[test]
    fn typed_text_grows_then_wraps() {
        let len = "Hello World! 123456789@#$%^&*)".len();
        let mut prev = 0;
        for k in 0..len {
            let t = (k as f64 + 0.5) / 15.0;
            let n = typed_len(t, len);
            assert_eq!(n, k + 1);
            assert!(n >= prev && (1..=len).contains(&n));
            prev = n;
        }
        assert_eq!(typed_len((len as f64 + 0.5) / 15.0, len), 1);
        assert_eq!(typed_len(3.0, 0), 0);
    }

    #[test]
    fn sweep_bar_and_hue_wrap() {
        assert_eq!(sweep_x(6.0), 0);
        assert_eq!(sweep_x(1.0), 150);
        assert_eq!(bar_phase(0.425), 42);
        assert_eq!(ball_red(0.0), 0);
        assert_eq!(ball_red(2.0), 45);
        assert_eq!(ball_red(1.0), 150);
    }

    #[test]
    fn fps_guards_zero_dt() {
        assert_eq!(fps(0.0), None);
        assert_eq!(fps(-1.0), None);
        assert_eq!(fps(f64::NAN), None);
        assert_eq!(fps(f64::MIN_POSITIVE), None);
        assert_eq!(fps_label(0.0), "-- FPS");
    }

    #[test]
    fn fps_rounds() {
        assert_eq!(fps(1.0 / 60.0), Some(60));
        assert_eq!(fps(0.0166), Some(60));
        assert_eq!(fps(2.0), Some(1));
        assert_eq!(fps_label(0.004), "250 FPS");
    }

    #[test]
    fn ball_first_step() {
        let mut ball = BallState::new();
        ball.step(1280, 720);
        assert_eq!((ball.x, ball.y), (80, 80));
        assert_eq!((ball.dx, ball.dy), (1, 1));
    }

    #[test]
    fn ball_flips_on_the_frame_the_lookahead_triggers() {
        let mut ball = BallState::new();
        for _ in 0..114 {
            ball.step(1280, 2000);
        }
        // reached the right bound exactly, still heading right
        assert_eq!((ball.x, ball.dx), (1210, 1));

        ball.step(1280, 2000);
        assert_eq!((ball.x, ball.dx), (1200, -1));
    }

    #[test]
    fn ball_stays_inside_default_surface() {
        let mut ball = BallState::new();
        for _ in 0..10_000 {
            ball.step(1280, 720);
            assert!((70..=1210).contains(&ball.x), "x = {}", ball.x);
            assert!((70..=650).contains(&ball.y), "y = {}", ball.y);
        }
    }

    #[test]
    fn ball_overshoot_is_bounded_on_unaligned_surface() {
        // 1285 - 70 = 1215 is not reachable in steps of 10 from 70
        let mut ball = BallState::new();
        let mut worst = 0;
        for _ in 0..5_000 {
            ball.step(1285, 725);
            worst = worst.max(ball.x - 1215).max(ball.y - 655);
            assert!(ball.x >= 70 - (ball.speed - 1));
        }
        assert!(worst > 0);
        assert!(worst < ball.speed);
    }
}
