// What you SEE:
// • A 1280x720 window that repaints as fast as the machine allows.
// • Static noise scrolling through a small patch, collapsing red squares,
//   a sweeping fan of green lines, two pulsing circles, a sliding white bar.
// • A ring bouncing off the edges, text typing itself out, an FPS readout,
//   and a jittery grey wave along the top.
// • ESC (or closing the window) quits.

mod anim;
mod canvas;
mod clock;
mod compose;
mod config;
mod draw;
mod error;
mod font;
mod present;
mod types;

use canvas::Canvas;
use clap::Parser;
use compose::Scene;
use config::Args;
use draw::Drawer;
use error::Error;
use present::{CancelToken, FrameExchange};
use std::sync::Arc;
use std::thread;
use types::BlendMode;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    run(&args).inspect_err(|e| log::error!("{e}"))
}

fn run(args: &Args) -> Result<(), Error> {
    let (w, h) = (args.width as usize, args.height as usize);
    log::info!(
        "starting: {}x{} \"{}\" seed={:?}",
        args.width,
        args.height,
        args.title,
        args.seed
    );

    /* --- Window + canvases ---
       Visual: window opens (black until the first frame lands). */
    let mut drawer = Drawer::new(&args.title, w, h)?;
    let primary = Canvas::new(args.width, args.height, BlendMode::Additive)?;
    let scene = Scene::new(args.seed)?;
    log::info!("window created");

    /* --- Render thread ---
       Composes frames into its own buffer and hands them over through `exchange`. */
    let exchange = Arc::new(FrameExchange::new(w * h));
    let cancel = CancelToken::new();
    let render = present::spawn_render_thread(scene, primary, Arc::clone(&exchange), cancel.clone())?;

    /* ------------------------------ Event loop ------------------------------ */
    let mut front = vec![0u32; w * h];
    let mut presented = 0u64;
    let mut outcome: Result<(), Error> = Ok(());
    let mut quit_requested = false;
    while !cancel.is_cancelled() && !render.is_finished() {
        if drawer.should_close() {
            log::info!("quit requested");
            quit_requested = true;
            break;
        }

        // Upload only when a new frame is ready; otherwise just keep events flowing.
        if exchange.take_latest(&mut front) {
            if let Err(e) = drawer.present(&front) {
                outcome = Err(e);
                break;
            }
            presented += 1;
        } else {
            drawer.pump();
            thread::yield_now();
        }
    }
    if !quit_requested && outcome.is_ok() {
        log::warn!("render thread ended on its own");
    }

    // Stop the render thread before the window (and its buffer) go away.
    cancel.cancel();
    let stats = render
        .join()
        .map_err(|_| Error::RenderThread("render thread panicked".into()))?;
    log::info!(
        "stopped: {} frames published, {} presented in {:.1}s",
        exchange.published(),
        presented,
        stats.seconds
    );

    outcome
}
