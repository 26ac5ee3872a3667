use thiserror::Error;

/// Error type for blasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlastingError {
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("division by zero: {0}")]
    DivisionByZero(String),

    #[error("design file error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BlastingError>;

/// Require a finite value strictly greater than zero.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BlastingError::InvalidParameter {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(BlastingError::InvalidParameter {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Require a finite value of any sign.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BlastingError::InvalidParameter {
            field,
            value,
            reason: "must be finite",
        });
    }
    Ok(value)
}

/// Require a finite value greater than or equal to zero.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BlastingError::InvalidParameter {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(BlastingError::InvalidParameter {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("density", 1.25), Ok(1.25));

        let err = require_positive("density", 0.0).unwrap_err();
        assert_eq!(
            err,
            BlastingError::InvalidParameter {
                field: "density",
                value: 0.0,
                reason: "must be greater than zero",
            }
        );

        assert!(require_positive("vod", -4000.0).is_err());
        assert!(require_positive("vod", f64::NAN).is_err());
        assert!(require_positive("vod", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("hole_diameter_mm", -140.0), Ok(-140.0));
        assert!(require_finite("hole_diameter_mm", f64::NAN).is_err());
        assert!(require_finite("charge_weight_kg", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("standoff", 0.0), Ok(0.0));
        assert_eq!(require_non_negative("standoff", 1.0), Ok(1.0));
        assert!(require_non_negative("standoff", -0.1).is_err());
        assert!(require_non_negative("subdrilling", f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = BlastingError::InvalidParameter {
            field: "burden",
            value: -3.0,
            reason: "must be greater than zero",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter `burden` = -3: must be greater than zero"
        );

        let err = BlastingError::DivisionByZero("rws is zero".to_string());
        assert_eq!(err.to_string(), "division by zero: rws is zero");
    }
}
