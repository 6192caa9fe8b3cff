// Render loop + frame handoff.
// The render thread composes into its own back buffer and swaps it into a
// shared slot; the window thread swaps the slot out into its front buffer.
// The swap under one mutex is the only point where the two threads meet.
// Visual: the window always shows the newest fully-drawn frame, never a half-drawn one.

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::compose::Scene;
use crate::error::Error;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Shared stop flag. The window thread cancels, the render thread observes it
/// at the top of every iteration.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

struct Slot {
    pixels: Vec<u32>,
    fresh: bool, // set by publish, cleared by take_latest
    published: u64,
}

/// Double-buffer handoff for 0x00RRGGBB frames.
pub struct FrameExchange {
    slot: Mutex<Slot>,
}

impl FrameExchange {
    pub fn new(len: usize) -> Self {
        Self {
            slot: Mutex::new(Slot { pixels: vec![0; len], fresh: false, published: 0 }),
        }
    }

    /// Hand a finished frame over. `back` gets the previous slot contents in return.
    /// Returns the sequence number of this frame.
    pub fn publish(&self, back: &mut Vec<u32>) -> u64 {
        let mut slot = self.slot.lock();
        std::mem::swap(&mut slot.pixels, back);
        slot.fresh = true;
        slot.published += 1;
        slot.published
    }

    /// Swap the newest frame into `front` if one arrived since the last take.
    pub fn take_latest(&self, front: &mut Vec<u32>) -> bool {
        let mut slot = self.slot.lock();
        if !slot.fresh {
            return false;
        }
        std::mem::swap(&mut slot.pixels, front);
        slot.fresh = false;
        true
    }

    pub fn published(&self) -> u64 {
        self.slot.lock().published
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub seconds: f64,
}

/// Compose and publish frames as fast as possible until `cancel` fires.
pub fn run_render_loop(
    mut scene: Scene,
    mut primary: Canvas,
    exchange: &FrameExchange,
    cancel: &CancelToken,
) -> RenderStats {
    let mut clock = FrameClock::new();
    let mut back = Vec::with_capacity((primary.width() * primary.height()) as usize);
    let mut frames = 0u64;

    let mut last_fps_time = Instant::now();
    let mut frames_this_second = 0u32;

    while !cancel.is_cancelled() {
        let dt = clock.elapsed().as_secs_f64();
        scene.compose(&mut primary, dt, clock.total());

        primary.write_argb(&mut back);
        exchange.publish(&mut back);
        frames += 1;

        frames_this_second += 1;
        let since = last_fps_time.elapsed();
        if since >= Duration::from_secs(1) {
            let ball = scene.ball();
            log::debug!(
                "render: {:.1} fps, ball at ({}, {})",
                frames_this_second as f64 / since.as_secs_f64(),
                ball.x,
                ball.y
            );
            frames_this_second = 0;
            last_fps_time = Instant::now();
        }
    }

    RenderStats { frames, seconds: clock.total() }
}

/// Cancels the token when dropped, including while unwinding from a panic,
/// so the window thread notices a dead render thread.
struct CancelOnDrop(CancelToken);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Run `work` on a named thread that always cancels `cancel` on the way out.
fn spawn_guarded<T, F>(name: &str, cancel: CancelToken, work: F) -> Result<JoinHandle<T>, Error>
where
    T: Send + 'static,
    F: FnOnce(&CancelToken) -> T + Send + 'static,
{
    thread::Builder::new()
        .name(name.into())
        .spawn(move || {
            let guard = CancelOnDrop(cancel);
            work(&guard.0)
        })
        .map_err(|e| Error::RenderThread(format!("spawn: {e}")))
}

/// Move the scene and canvas onto a dedicated render thread.
pub fn spawn_render_thread(
    scene: Scene,
    primary: Canvas,
    exchange: Arc<FrameExchange>,
    cancel: CancelToken,
) -> Result<JoinHandle<RenderStats>, Error> {
    spawn_guarded("render", cancel, move |cancel| {
        log::info!("render thread started");
        let stats = run_render_loop(scene, primary, &exchange, cancel);
        log::info!("render thread stopping after {} frames", stats.frames);
        stats
    })
}
