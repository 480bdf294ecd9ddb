use tracing::{debug, info};

use crate::decoder::config::DecoderConfig;
use crate::decoder::detect::Calibration;
use crate::decoder::error::DecodeError;
use crate::decoder::framing;
use crate::utils::consts::PULSE_CLASS_DIVISOR;

/// Classifies a completed pulse run as one bit.
///
/// Short runs map to 0 and long runs to 1 unless `reverse` swaps the
/// assignment. A run exactly at the threshold counts as long. A zero-length
/// run yields no bit.
pub fn classify(run_len: usize, long_pulse: f64, reverse: bool) -> Option<bool> {
    if run_len == 0 {
        return None;
    }

    let is_short = (run_len as f64) < long_pulse - long_pulse / PULSE_CLASS_DIVISOR;
    Some(!(is_short ^ reverse))
}

/// Decodes an oscilloscope capture into the packet bytes it carries.
///
/// Calibrates timing from the preamble, classifies every high pulse run in
/// the payload, strips the START bit and packs the rest into bytes.
pub fn decode(samples: &[f64], config: &DecoderConfig) -> Result<Vec<u8>, DecodeError> {
    let calibration = Calibration::detect(samples, config)?;

    let mut bits = Vec::new();
    let mut run_len = 0usize;
    for &sample in &samples[calibration.preamble_end..] {
        if sample > config.v_high {
            run_len += 1;
        } else {
            if let Some(bit) = classify(run_len, calibration.long_pulse, config.reverse) {
                bits.push(bit);
            }
            run_len = 0;
        }
    }
    // A run still open at end-of-capture never saw its closing transition
    // and is dropped.
    debug!("classified {} pulse runs", bits.len());

    let packet = framing::pack(framing::strip_start_bit(&bits), config.invert_bit_order);
    info!("decoded {} bytes", packet.len());
    Ok(packet)
}
