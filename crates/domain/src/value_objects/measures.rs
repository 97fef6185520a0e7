//! Physical quantities: weight, length and in-game time.
//!
//! Each quantity keeps a single canonical unit (pounds, feet, seconds) and
//! converts on the way in and on the way out. The metric factors follow the
//! ruleset's own conversion table (1 lb = 0.45 kg, 5 ft = 1.5 m) rather than
//! SI exact values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::types::{LengthUnit, TimeUnit, WeightUnit};

const KG_PER_LB: f64 = 0.45;

fn ensure_magnitude(count: f64, what: &str) -> Result<f64, DomainError> {
    if !count.is_finite() {
        return Err(DomainError::invalid_data(format!("{} must be a finite number", what)));
    }
    if count < 0.0 {
        return Err(DomainError::invalid_data(format!(
            "{} cannot be negative, got {}",
            what, count
        )));
    }
    Ok(count)
}

// ============================================================================
// Weight
// ============================================================================

/// A weight, stored in pounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weight {
    lb: f64,
}

impl Weight {
    pub fn new(count: f64, unit: WeightUnit) -> Result<Self, DomainError> {
        let count = ensure_magnitude(count, "Weight")?;
        let lb = match unit {
            WeightUnit::Lb => count,
            WeightUnit::Kg => count / KG_PER_LB,
        };
        Ok(Self { lb })
    }

    pub fn in_lb(&self) -> f64 {
        self.lb
    }

    pub fn in_kg(&self) -> f64 {
        self.lb * KG_PER_LB
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lb", self.lb)
    }
}

// ============================================================================
// Length
// ============================================================================

/// A distance, stored in feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Length {
    ft: f64,
}

impl Length {
    pub fn new(count: f64, unit: LengthUnit) -> Result<Self, DomainError> {
        let count = ensure_magnitude(count, "Length")?;
        // 1.5 m per 5 ft, kept as integer ratios so grid distances stay exact
        let ft = match unit {
            LengthUnit::Ft => count,
            LengthUnit::M => count * 10.0 / 3.0,
        };
        Ok(Self { ft })
    }

    pub fn in_ft(&self) -> f64 {
        self.ft
    }

    pub fn in_m(&self) -> f64 {
        self.ft * 3.0 / 10.0
    }

    pub fn is_zero(&self) -> bool {
        self.ft == 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.ft)
    }
}

// ============================================================================
// GameTime
// ============================================================================

/// A span of in-game time, stored in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTime {
    seconds: u64,
}

impl GameTime {
    pub fn new(count: i64, unit: TimeUnit) -> Result<Self, DomainError> {
        let count = u64::try_from(count).map_err(|_| {
            DomainError::invalid_data(format!("Time cannot be negative, got {}", count))
        })?;
        let seconds = count
            .checked_mul(unit.in_seconds())
            .ok_or_else(|| DomainError::invalid_data("Time span is too large"))?;
        Ok(Self { seconds })
    }

    pub fn in_seconds(&self) -> u64 {
        self.seconds
    }

    pub fn in_rounds(&self) -> f64 {
        self.in_unit(TimeUnit::Round)
    }

    pub fn in_minutes(&self) -> f64 {
        self.in_unit(TimeUnit::Minute)
    }

    pub fn in_hours(&self) -> f64 {
        self.in_unit(TimeUnit::Hour)
    }

    pub fn in_days(&self) -> f64 {
        self.in_unit(TimeUnit::Day)
    }

    pub fn in_unit(&self, unit: TimeUnit) -> f64 {
        self.seconds as f64 / unit.in_seconds() as f64
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_canonicalizes_to_pounds() {
        let weight = Weight::new(0.45, WeightUnit::Kg).expect("valid weight");
        assert_eq!(weight.in_lb(), 1.0);
        assert_eq!(Weight::new(65.0, WeightUnit::Lb).expect("valid").in_lb(), 65.0);
    }

    #[test]
    fn weight_rejects_negative_and_nan() {
        assert!(Weight::new(-0.5, WeightUnit::Lb).is_err());
        assert!(Weight::new(f64::NAN, WeightUnit::Kg).is_err());
    }

    #[test]
    fn weight_equality_is_canonical() {
        assert_eq!(
            Weight::new(0.45, WeightUnit::Kg).expect("kg"),
            Weight::new(1.0, WeightUnit::Lb).expect("lb")
        );
    }

    #[test]
    fn length_grid_conversion() {
        let length = Length::new(1.5, LengthUnit::M).expect("valid length");
        assert_eq!(length.in_ft(), 5.0);
        assert_eq!(Length::new(30.0, LengthUnit::Ft).expect("valid").in_m(), 9.0);
    }

    #[test]
    fn length_rejects_negative() {
        assert!(Length::new(-5.0, LengthUnit::Ft)
            .expect_err("negative")
            .is_invalid_data());
    }

    #[test]
    fn game_time_conversions() {
        let minute = GameTime::new(1, TimeUnit::Minute).expect("valid time");
        assert_eq!(minute.in_rounds(), 10.0);
        assert_eq!(minute.in_seconds(), 60);
        let day = GameTime::new(1, TimeUnit::Day).expect("valid time");
        assert_eq!(day.in_hours(), 24.0);
        assert_eq!(day, GameTime::new(24, TimeUnit::Hour).expect("valid time"));
    }

    #[test]
    fn game_time_rejects_negative() {
        assert!(GameTime::new(-1, TimeUnit::Round).is_err());
    }
}
