//! Parameter types for the resampling operator.
//!
//! These types describe *what* a resample should do, not *how*. The fit mode
//! comes from the caller; the sharpening profile is selected deterministically
//! from the target width by [`calculations::sharpen_profile_for`] and is never
//! user-tunable — icon-scale output needs aggressive sharpening to survive
//! the detail loss, large output needs a light touch to avoid halos.
//!
//! [`calculations::sharpen_profile_for`]: super::calculations::sharpen_profile_for

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Resize policy.
///
/// - `Contain`: preserve aspect ratio, center on a transparent canvas.
/// - `Fill`: stretch each axis independently to the exact target dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    #[default]
    Contain,
    Fill,
}

/// Unsharp-mask parameters applied after resampling.
///
/// - `amount`: percentage-like gain applied to the high-frequency residual
///   (resampled image minus a Gaussian blur of itself)
/// - `radius`: sigma of that Gaussian blur, in pixels
/// - `threshold`: residuals with magnitude below this are left untouched,
///   so near-flat noise is not amplified
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharpenProfile {
    pub amount: u8,
    pub radius: f32,
    pub threshold: u8,
}

impl SharpenProfile {
    /// Aggressive tier for icon-scale output (target width ≤ 64).
    pub fn aggressive() -> Self {
        Self {
            amount: 120,
            radius: 0.55,
            threshold: 0,
        }
    }

    /// Moderate tier for mid-size output (64 < target width ≤ 256).
    pub fn moderate() -> Self {
        Self {
            amount: 60,
            radius: 0.6,
            threshold: 2,
        }
    }

    /// Subtle tier for large output (target width > 256).
    pub fn subtle() -> Self {
        Self {
            amount: 20,
            radius: 0.8,
            threshold: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_mode_default_is_contain() {
        assert_eq!(FitMode::default(), FitMode::Contain);
    }

    #[test]
    fn fit_mode_toml_names_are_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            mode: FitMode,
        }
        let holder: Holder = toml::from_str("mode = \"fill\"").unwrap();
        assert_eq!(holder.mode, FitMode::Fill);
    }

    #[test]
    fn profile_tiers_are_distinct() {
        let tiers = [
            SharpenProfile::aggressive(),
            SharpenProfile::moderate(),
            SharpenProfile::subtle(),
        ];
        assert_ne!(tiers[0], tiers[1]);
        assert_ne!(tiers[1], tiers[2]);
        assert_ne!(tiers[0], tiers[2]);
    }

    #[test]
    fn aggressive_tier_values() {
        let p = SharpenProfile::aggressive();
        assert_eq!(p.amount, 120);
        assert_eq!(p.radius, 0.55);
        assert_eq!(p.threshold, 0);
    }
}
