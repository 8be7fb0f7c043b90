//! Presentation boundary
//!
//! The simulation never draws. Each frame it is turned into a [`DrawList`]
//! that a [`RenderBackend`] paints however it likes.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList, Font, SpriteKind};

/// A backend that can paint a frame's draw list
pub trait RenderBackend {
    fn draw(&mut self, frame: &DrawList);
}

/// Backend that paints nothing and logs the HUD at trace level
#[derive(Debug, Default)]
pub struct LogBackend {
    pub frames: u64,
}

impl RenderBackend for LogBackend {
    fn draw(&mut self, frame: &DrawList) {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let hud: Vec<&str> = frame.texts().collect();
            log::trace!("frame {}: {}", self.frames, hud.join(" | "));
        }
    }
}
