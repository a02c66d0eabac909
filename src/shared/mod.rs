// Shared kernel: error taxonomy and logging used by every module

pub mod errors; // Classified error taxonomy
pub mod utils; // Logging helpers

pub use errors::{AppError, AppResult};
