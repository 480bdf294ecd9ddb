use tracing::debug;

use crate::decoder::config::DecoderConfig;
use crate::decoder::error::DecodeError;
use crate::utils::consts::{LONG_PULSE_DIVISOR, SHORT_PULSE_DIVISOR};

/// Pulse timing derived from the capture's preamble. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    /// Index of the first sample after the leading idle-high run.
    pub preamble_start: usize,
    /// Index of the first payload sample.
    pub preamble_end: usize,
    /// Number of idle-low samples between start and end.
    pub preamble_size: usize,
    /// Expected short pulse length, in samples.
    pub short_pulse: f64,
    /// Expected long pulse length, in samples.
    pub long_pulse: f64,
}

impl Calibration {
    /// Locates the preamble and derives pulse timing from its idle-low gap.
    ///
    /// The leading run of samples at or above `v_high` is discarded; the gap
    /// of samples at or below `v_low` that follows is the timing reference.
    pub fn detect(samples: &[f64], config: &DecoderConfig) -> Result<Self, DecodeError> {
        if samples.is_empty() {
            return Err(DecodeError::EmptyCapture);
        }

        let preamble_start = samples
            .iter()
            .take_while(|&&sample| sample >= config.v_high)
            .count();
        debug!("preamble start detected at sample {}", preamble_start);

        let preamble_size = samples[preamble_start..]
            .iter()
            .take_while(|&&sample| sample <= config.v_low)
            .count();
        if preamble_start + preamble_size == samples.len() {
            return Err(DecodeError::Calibration(
                "preamble gap never ends".to_string(),
            ));
        }

        let preamble_end = preamble_start + preamble_size;
        let short_pulse = preamble_size as f64 / SHORT_PULSE_DIVISOR;
        let long_pulse = preamble_size as f64 / LONG_PULSE_DIVISOR;

        debug!("preamble end detected at sample {}", preamble_end);
        debug!(
            "preamble {} samples, short pulse {:.2}, long pulse {:.2}",
            preamble_size, short_pulse, long_pulse
        );

        if preamble_size == 0 || short_pulse == 0.0 || long_pulse == 0.0 {
            return Err(DecodeError::Calibration(
                "zero-length preamble gap".to_string(),
            ));
        }

        Ok(Self {
            preamble_start,
            preamble_end,
            preamble_size,
            short_pulse,
            long_pulse,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DecoderConfig {
        DecoderConfig::default()
    }

    #[test]
    fn derives_timing_from_preamble_gap() {
        let mut samples = vec![3.0; 12];
        samples.extend(vec![0.0; 33]);
        samples.push(3.0);

        let cal = Calibration::detect(&samples, &config()).unwrap();
        assert_eq!(cal.preamble_start, 12);
        assert_eq!(cal.preamble_size, 33);
        assert_eq!(cal.preamble_end, 45);
        assert_eq!(cal.short_pulse, 3.0);
        assert_eq!(cal.long_pulse, 11.0);
    }

    #[test]
    fn calibration_uses_real_division() {
        // A 9-sample gap must not truncate the short pulse to zero.
        let mut samples = vec![3.0; 3];
        samples.extend(vec![0.0; 9]);
        samples.push(3.0);

        let cal = Calibration::detect(&samples, &config()).unwrap();
        assert_eq!(cal.preamble_size, 9);
        assert_eq!(cal.short_pulse, 9.0 / 11.0);
        assert_eq!(cal.long_pulse, 3.0);
        assert!(cal.short_pulse > 0.0);
    }

    #[test]
    fn fails_on_zero_length_gap() {
        // Sample right after the high run sits between the thresholds, so
        // the measured gap is empty.
        let samples = vec![3.0, 3.0, 3.0, 1.5, 3.0];
        let err = Calibration::detect(&samples, &config()).unwrap_err();
        assert!(matches!(err, DecodeError::Calibration(_)));
    }

    #[test]
    fn fails_when_gap_never_ends() {
        let samples = vec![3.0, 3.0, 3.0, 0.0, 0.0, 0.0];
        let err = Calibration::detect(&samples, &config()).unwrap_err();
        assert!(matches!(err, DecodeError::Calibration(_)));
    }

    #[test]
    fn fails_when_capture_is_all_high() {
        let samples = vec![3.0; 16];
        let err = Calibration::detect(&samples, &config()).unwrap_err();
        assert!(matches!(err, DecodeError::Calibration(_)));
    }

    #[test]
    fn fails_on_empty_capture() {
        let err = Calibration::detect(&[], &config()).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyCapture));
    }
}
