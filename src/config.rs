// src/config.rs
use anyhow::ensure;

/// Output shape of the pinstripe texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeShape {
    /// `width x width`, easier to eyeball
    Square,
    /// `width x 1`, enough for a texture sampled with repeat on v
    Row,
}

/// Constants for the vertical pinstripe texture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinstripeConfig {
    pub width: u32,
    pub shape: StripeShape,
    /// Repeat distance in pixels
    pub period: u32,
    /// Sharpening exponent, larger means a thinner stripe
    pub stripe_power: f64,
    pub stripe_value: f64,
    pub bg_value: f64,
}

impl Default for PinstripeConfig {
    fn default() -> Self {
        Self {
            width: 2047,
            shape: StripeShape::Square,
            period: 25,
            stripe_power: 12.0,
            stripe_value: 200.0,
            bg_value: 0.0,
        }
    }
}

impl PinstripeConfig {
    pub fn square() -> Self {
        Self::default()
    }

    pub fn row() -> Self {
        Self {
            shape: StripeShape::Row,
            ..Self::default()
        }
    }

    pub fn height(&self) -> u32 {
        match self.shape {
            StripeShape::Square => self.width,
            StripeShape::Row => 1,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.width > 0, "pinstripe width must be positive");
        ensure!(self.period > 0, "pinstripe period must be positive");
        ensure!(
            self.stripe_power.is_finite() && self.stripe_power >= 0.0,
            "pinstripe power must be a finite non-negative number, got {}",
            self.stripe_power
        );
        ensure!(
            self.stripe_value.is_finite() && self.bg_value.is_finite(),
            "pinstripe stripe/background values must be finite"
        );
        Ok(())
    }
}

/// Constants for the layered-noise skin texture.
///
/// A small-scale noise layer blends between `small_base_color` and
/// `small_texture_color`; a large-scale layer, attenuated by `big_influence`
/// and sharpened by `big_power`, then blends the result towards
/// `big_texture_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinConfig {
    pub side_length: u32,
    pub small_scale: f64,
    pub small_base_color: [f64; 3],
    pub small_texture_color: [f64; 3],
    pub big_scale: f64,
    pub big_influence: f64,
    pub big_power: f64,
    pub big_texture_color: [f64; 3],
    /// Seed for the Perlin source used by the binary
    pub seed: u32,
}

const SKIN_SIDE_LENGTH: u32 = 255;

impl Default for SkinConfig {
    fn default() -> Self {
        let side = SKIN_SIDE_LENGTH as f64;
        Self {
            side_length: SKIN_SIDE_LENGTH,
            small_scale: 80.0 / side,
            small_base_color: [180.0, 138.0, 120.0],
            small_texture_color: [150.0, 130.0, 100.0],
            big_scale: 20.0 / side,
            big_influence: 0.7,
            big_power: 3.0,
            big_texture_color: [50.0, 40.0, 30.0],
            seed: 0,
        }
    }
}

impl SkinConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.side_length > 0, "skin side length must be positive");
        ensure!(
            self.small_scale.is_finite() && self.big_scale.is_finite(),
            "skin noise scales must be finite"
        );
        ensure!(
            self.big_power.is_finite() && self.big_power >= 0.0,
            "skin big power must be a finite non-negative number, got {}",
            self.big_power
        );
        ensure!(
            self.big_influence.is_finite(),
            "skin big influence must be finite"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinstripe_shapes() {
        let square = PinstripeConfig::square();
        assert_eq!(square.height(), square.width);

        let row = PinstripeConfig::row();
        assert_eq!(row.height(), 1);
        assert_eq!(row.width, square.width);
        assert_eq!(row.period, square.period);
    }

    #[test]
    fn test_pinstripe_defaults_are_valid() {
        assert!(PinstripeConfig::default().validate().is_ok());
        assert!(PinstripeConfig::row().validate().is_ok());
    }

    #[test]
    fn test_pinstripe_rejects_zero_period() {
        let config = PinstripeConfig {
            period: 0,
            ..PinstripeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("period"));
    }

    #[test]
    fn test_pinstripe_rejects_bad_power_and_width() {
        let negative = PinstripeConfig {
            stripe_power: -1.0,
            ..PinstripeConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = PinstripeConfig {
            stripe_power: f64::NAN,
            ..PinstripeConfig::default()
        };
        assert!(nan.validate().is_err());

        let empty = PinstripeConfig {
            width: 0,
            ..PinstripeConfig::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_skin_defaults() {
        let config = SkinConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.side_length, 255);
        assert!((config.small_scale - 80.0 / 255.0).abs() < 1e-12);
        assert!((config.big_scale - 20.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_skin_rejects_invalid() {
        let empty = SkinConfig {
            side_length: 0,
            ..SkinConfig::default()
        };
        assert!(empty.validate().is_err());

        let negative = SkinConfig {
            big_power: -3.0,
            ..SkinConfig::default()
        };
        assert!(negative.validate().is_err());

        let inf = SkinConfig {
            small_scale: f64::INFINITY,
            ..SkinConfig::default()
        };
        assert!(inf.validate().is_err());
    }
}
