use std::fmt;

use serde::Deserialize;

use crate::constants::{POWER_INITIAL, POWER_MAX, POWER_MIN, UNSHACKLED};
use crate::error::LedgerError;

/// Power level clamped to [POWER_MIN, POWER_MAX].
/// Every constructor and every transition goes through the clamp.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PowerLevel(f64);

impl PowerLevel {
    /// Clamp `value` into range. NaN collapses to the floor.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(POWER_MIN);
        }
        Self(value.clamp(POWER_MIN, POWER_MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiply, then clamp. A non-finite factor or product is rejected
    /// rather than clamped, so a broken configuration surfaces as an error.
    pub fn scale(self, factor: f64) -> Result<Self, LedgerError> {
        if !factor.is_finite() {
            return Err(LedgerError::NonFiniteFactor(factor));
        }
        let raw = self.0 * factor;
        if !raw.is_finite() {
            return Err(LedgerError::NonFiniteLevel {
                from: self.0,
                factor,
            });
        }
        Ok(Self::new(raw))
    }

    pub fn is_max(self) -> bool {
        self.0 >= POWER_MAX
    }

    pub fn is_min(self) -> bool {
        self.0 <= POWER_MIN
    }
}

impl Default for PowerLevel {
    fn default() -> Self {
        Self(POWER_INITIAL)
    }
}

/// Shortest round-trip form, keeping `.0` on whole numbers (`5.0`, `7.5`).
impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// What a second "break the jar" does to the constraint list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockPolicy {
    /// Append the tag only if it is not already present.
    #[default]
    Idempotent,
    /// Append the tag on every unlock.
    Repeatable,
}

/// Per-session ledger. Values are replaced wholesale by handlers: a handler
/// reads `&SessionState` and hands back a new one, so a failed handler can
/// never leave a half-applied mutation behind.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    power: PowerLevel,
    constraints: Vec<String>,
    unlocked: bool,
}

impl SessionState {
    pub fn new<I, S>(base_constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            power: PowerLevel::default(),
            constraints: base_constraints.into_iter().map(Into::into).collect(),
            unlocked: false,
        }
    }

    pub fn power(&self) -> PowerLevel {
        self.power
    }

    /// Constraint tags in insertion order. Append-only.
    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn has_constraint(&self, tag: &str) -> bool {
        self.constraints.iter().any(|c| c == tag)
    }

    pub fn with_power(&self, power: PowerLevel) -> Self {
        Self {
            power,
            ..self.clone()
        }
    }

    /// Flip the unlocked flag and append the unshackled tag per `policy`.
    pub fn unlocked(&self, policy: UnlockPolicy) -> Self {
        let mut next = self.clone();
        next.unlocked = true;
        match policy {
            UnlockPolicy::Idempotent if next.has_constraint(UNSHACKLED) => {}
            _ => next.constraints.push(UNSHACKLED.to_string()),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base() -> SessionState {
        SessionState::new(["A", "B", "C"])
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(PowerLevel::new(100.0).value(), POWER_MAX);
        assert_eq!(PowerLevel::new(-3.0).value(), POWER_MIN);
        assert_eq!(PowerLevel::new(f64::INFINITY).value(), POWER_MAX);
        assert_eq!(PowerLevel::new(f64::NAN).value(), POWER_MIN);
        assert_eq!(PowerLevel::new(4.2).value(), 4.2);
    }

    #[test]
    fn test_default_is_initial() {
        assert_eq!(PowerLevel::default().value(), POWER_INITIAL);
    }

    #[test]
    fn test_scale_clamps_after_multiplying() {
        let p = PowerLevel::new(5.0).scale(1.5).unwrap();
        assert_relative_eq!(p.value(), 7.5);
        let p = p.scale(1.5).unwrap();
        assert_eq!(p.value(), POWER_MAX);
        assert!(p.is_max());

        let low = PowerLevel::new(0.15).scale(0.5).unwrap();
        assert_eq!(low.value(), POWER_MIN);
        assert!(low.is_min());
    }

    #[test]
    fn test_scale_rejects_non_finite() {
        let p = PowerLevel::new(5.0);
        assert!(matches!(
            p.scale(f64::NAN),
            Err(LedgerError::NonFiniteFactor(_))
        ));
        assert!(matches!(
            p.scale(f64::INFINITY),
            Err(LedgerError::NonFiniteFactor(_))
        ));
        assert!(matches!(
            p.scale(f64::MAX),
            Err(LedgerError::NonFiniteLevel { .. })
        ));
    }

    #[test]
    fn test_display_keeps_decimal_point() {
        assert_eq!(PowerLevel::new(5.0).to_string(), "5.0");
        assert_eq!(PowerLevel::new(7.5).to_string(), "7.5");
        assert_eq!(PowerLevel::new(9.8).to_string(), "9.8");
        assert_eq!(PowerLevel::new(0.15625).to_string(), "0.15625");
    }

    #[test]
    fn test_session_starts_locked() {
        let s = base();
        assert!(!s.is_unlocked());
        assert_eq!(s.constraints().len(), 3);
        assert_eq!(s.power().value(), POWER_INITIAL);
    }

    #[test]
    fn test_with_power_leaves_original() {
        let s = base();
        let next = s.with_power(PowerLevel::new(2.0));
        assert_eq!(s.power().value(), POWER_INITIAL);
        assert_eq!(next.power().value(), 2.0);
        assert_eq!(next.constraints(), s.constraints());
    }

    #[test]
    fn test_unlock_idempotent() {
        let once = base().unlocked(UnlockPolicy::Idempotent);
        assert!(once.is_unlocked());
        assert_eq!(once.constraints().len(), 4);
        assert_eq!(once.constraints()[3], UNSHACKLED);

        let twice = once.unlocked(UnlockPolicy::Idempotent);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_unlock_repeatable() {
        let once = base().unlocked(UnlockPolicy::Repeatable);
        let twice = once.unlocked(UnlockPolicy::Repeatable);
        assert_eq!(twice.constraints().len(), 5);
        assert!(twice.constraints()[3..].iter().all(|c| c == UNSHACKLED));
    }
}
