//! Frame-rate readout.

use crate::types::FPS_WINDOW_MS;

/// Counts frames per one-second window.
///
/// The reported value only changes when a window completes, so the readout
/// updates once per second rather than every frame.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start_ms: Option<u64>,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame processed at `now_ms`.
    pub fn frame(&mut self, now_ms: u64) {
        let start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames += 1;
        if now_ms.saturating_sub(start) >= FPS_WINDOW_MS {
            self.window_start_ms = Some(now_ms);
            self.fps = self.frames;
            self.frames = 0;
        }
    }

    /// Frames counted in the last completed window.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
