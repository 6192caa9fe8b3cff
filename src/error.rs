// Error type for the demo. Every variant states *where* things went wrong.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Uploading a frame to the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// A canvas was requested with a zero dimension
    #[error("invalid canvas size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// The render thread died before it could be joined cleanly
    #[error("render thread error: {0}")]
    RenderThread(String),
}
