//! Body-mass-index calculation and tiering.

use serde::{Deserialize, Serialize};

/// BMI tier over the standard half-open intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiTier {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiTier {
    /// Classify a BMI value. Boundaries are half-open: 18.5 is Normal,
    /// 25.0 is Overweight, 30.0 is Obese.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human-readable tier name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Fixed guidance for this tier.
    #[must_use]
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Underweight => "Consider consulting a nutritionist for healthy weight gain.",
            Self::Normal => "Maintain your healthy lifestyle!",
            Self::Overweight => "Consider increasing physical activity and improving diet.",
            Self::Obese => {
                "Please consult with a healthcare provider for weight management options."
            }
        }
    }
}

impl std::fmt::Display for BmiTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed BMI with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// Body mass index in kg/m^2
    pub bmi: f64,
    /// Tier classification of `bmi`
    pub tier: BmiTier,
}

impl BmiReport {
    /// Fixed guidance for the report's tier.
    #[must_use]
    pub fn advisory(&self) -> &'static str {
        self.tier.advisory()
    }
}

/// Compute BMI from weight in kilograms and height in meters, then tier it.
///
/// Callers are expected to pass positive, finite measurements; degenerate
/// inputs produce a degenerate BMI that lands in the highest tier.
#[must_use]
pub fn bmi_report(weight_kg: f64, height_m: f64) -> BmiReport {
    let bmi = weight_kg / (height_m * height_m);
    BmiReport {
        bmi,
        tier: BmiTier::from_bmi(bmi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_half_open() {
        assert_eq!(BmiTier::from_bmi(18.4), BmiTier::Underweight);
        assert_eq!(BmiTier::from_bmi(18.5), BmiTier::Normal);
        assert_eq!(BmiTier::from_bmi(24.999), BmiTier::Normal);
        assert_eq!(BmiTier::from_bmi(25.0), BmiTier::Overweight);
        assert_eq!(BmiTier::from_bmi(29.999), BmiTier::Overweight);
        assert_eq!(BmiTier::from_bmi(30.0), BmiTier::Obese);
    }

    #[test]
    fn test_bmi_computation() {
        let report = bmi_report(70.0, 1.7);
        assert!((report.bmi - 24.221).abs() < 0.001);
        assert_eq!(report.tier, BmiTier::Normal);
        assert_eq!(report.advisory(), "Maintain your healthy lifestyle!");
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(BmiTier::from_bmi(17.0).label(), "Underweight");
        assert_eq!(BmiTier::Obese.to_string(), "Obese");
    }
}
