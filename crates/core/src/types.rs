/// Power readings are kilowatts.
pub type Kilowatts = f64;

/// Timestamps used by the generators are naive local wall-clock times.
pub type LocalTimestamp = chrono::NaiveDateTime;
