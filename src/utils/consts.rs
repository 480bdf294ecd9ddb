/// Default log level (overridable via RUST_LOG).
pub const LOG_LEVEL: &str = "info";

/// Voltage at or above which a sample belongs to an active pulse.
/// Capture-dependent; may need retuning for a different scope setup.
pub const V_HIGH: f64 = 2.0;

/// Voltage at or below which a sample counts as idle while measuring the
/// preamble gap.
pub const V_LOW: f64 = 1.0;

/// Preamble gap length divided by this gives the short pulse duration.
pub const SHORT_PULSE_DIVISOR: f64 = 11.0;

/// Preamble gap length divided by this gives the long pulse duration.
pub const LONG_PULSE_DIVISOR: f64 = 3.0;

/// A run shorter than `long_pulse - long_pulse / PULSE_CLASS_DIVISOR`
/// counts as a short pulse.
pub const PULSE_CLASS_DIVISOR: f64 = 2.5;
