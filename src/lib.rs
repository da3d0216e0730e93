pub use chip8::Chip8;
pub use error::RomError;
pub use state::{CriticalError, FrameBuffer, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
pub mod rng;
mod rom;
mod stack;
pub mod state;
