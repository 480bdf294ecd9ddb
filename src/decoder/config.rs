use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::utils::consts::{V_HIGH, V_LOW};

/// Decoder settings for one capture. Thresholds are in volts and depend on
/// how the capture was taken; the defaults match a 3.3 V receiver probed
/// directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Voltage at or above which a sample belongs to an active pulse.
    pub v_high: f64,
    /// Voltage at or below which a sample is idle during preamble detection.
    pub v_low: f64,
    /// Assign '1' to short pulses instead of '0'.
    pub reverse: bool,
    /// Reverse the bit order inside each packed byte.
    pub invert_bit_order: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            v_high: V_HIGH,
            v_low: V_LOW,
            reverse: false,
            invert_bit_order: false,
        }
    }
}

impl DecoderConfig {
    /// Loads a JSON threshold profile. Missing fields keep their defaults.
    pub fn from_profile(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("{err}")))
    }
}
