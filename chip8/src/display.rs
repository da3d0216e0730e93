use chip8vm::FrameBuffer;
use log::{log_enabled, trace, Level};

const ON: char = '#';
const OFF: char = '.';

/// # Display
/// A headless stand-in for a window: the 64x32 frame is rendered as text,
/// one line per row, `#` for a lit pixel and `.` for a dark one.
pub struct Display {
    frames: u64,
}

impl Display {
    pub fn new() -> Self {
        Display { frames: 0 }
    }

    /// Formats a Chip-8 FrameBuffer as text by:
    /// - mapping each pixel to a character
    /// - joining each row and terminating it with a newline
    pub fn frame_to_text(frame: &FrameBuffer) -> String {
        frame
            .iter()
            .flat_map(|row| {
                row.iter()
                    .map(|&lit| if lit { ON } else { OFF })
                    .chain(std::iter::once('\n'))
            })
            .collect()
    }

    /// Renders a frame the interpreter has reported as changed.
    /// The text only goes out at trace level; every frame is counted.
    pub fn render(&mut self, frame: &FrameBuffer) {
        self.frames += 1;
        if log_enabled!(Level::Trace) {
            trace!("frame {}\n{}", self.frames, Display::frame_to_text(frame));
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
