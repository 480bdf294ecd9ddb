pub mod output;
pub mod rigol;

use thiserror::Error;

/// Failures while getting samples in or packet bytes out.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed capture row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

pub use output::*;
pub use rigol::*;
