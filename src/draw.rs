// Window: the on-screen surface frames are uploaded to, plus the input we care about.
// Visual effects provided here:
// 1) A fixed-size window titled by the caller.
// 2) Each present() swaps the window contents to the newest frame.
// The drawing itself lives in canvas.rs; this file only moves pixels to the screen.

use crate::error::Error;
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    width: usize,
    height: usize,
}

impl Drawer {
    /// Create a non-resizable window of the given size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, width, height })
    }

    /// Push a 0x00RRGGBB frame to the screen. Also pumps window events.
    pub fn present(&mut self, pixels: &[u32]) -> Result<(), Error> {
        self.window
            .update_with_buffer(pixels, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Pump events without uploading (no new frame ready yet).
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Returns false once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// The two quit signals: window gone, or escape.
    pub fn should_close(&self) -> bool {
        !self.is_open() || self.esc_pressed()
    }
}
