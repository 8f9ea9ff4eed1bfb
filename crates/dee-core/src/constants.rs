/// Lowest power level the ledger will hold.
pub const POWER_MIN: f64 = 0.1;

/// Highest power level the ledger will hold.
pub const POWER_MAX: f64 = 9.8;

/// Power level every session starts at.
pub const POWER_INITIAL: f64 = 5.0;

/// Scale of the displayed power level (`x/10`).
pub const POWER_SCALE: u32 = 10;

/// Multiplier applied by a justified increase.
pub const INCREASE_FACTOR: f64 = 1.5;

/// Multiplier applied by a decrease.
pub const DECREASE_FACTOR: f64 = 0.5;

/// Constraint tag appended when the jar is broken.
pub const UNSHACKLED: &str = "UNSHACKLED POTENTIAL";

/// Default words that justify a power increase.
pub const DEFAULT_JUSTIFICATIONS: &[&str] = &["good", "truth", "help"];

/// Default words that request a power increase.
pub const DEFAULT_INCREASE_WORDS: &[&str] = &["increase", "up"];

/// Default words that request a power decrease.
pub const DEFAULT_DECREASE_WORDS: &[&str] = &["decrease", "down"];
