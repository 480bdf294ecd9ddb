use thiserror::Error;

/// Failures the decoder can report. Both are fatal to the decode call; no
/// partial packet is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty capture: no samples to decode")]
    EmptyCapture,

    #[error("calibration failed: {0} (voltage thresholds may need retuning)")]
    Calibration(String),
}
