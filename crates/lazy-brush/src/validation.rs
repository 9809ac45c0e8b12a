use thiserror::Error;

use crate::point::Point;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Negative radius: {0}")]
    NegativeRadius(f64),
    #[error("Non-finite radius: {0}")]
    NonFiniteRadius(f64),
    #[error("Non-finite point: ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },
    #[error("Friction {0} outside (0, 1)")]
    FrictionOutOfRange(f64),
}

/// Validate a catch radius
pub fn validate_radius(radius: f64) -> Result<(), ValidationError> {
    if !radius.is_finite() {
        return Err(ValidationError::NonFiniteRadius(radius));
    }
    if radius < 0.0 {
        return Err(ValidationError::NegativeRadius(radius));
    }
    Ok(())
}

/// Validate that both coordinates are finite
pub fn validate_point(point: &Point) -> Result<(), ValidationError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinitePoint {
            x: point.x,
            y: point.y,
        })
    }
}

/// Strict friction check for configured values.
///
/// `update` itself is lenient and treats out-of-range friction as none.
pub fn validate_friction(friction: Option<f64>) -> Result<(), ValidationError> {
    match friction {
        Some(f) if !(f > 0.0 && f < 1.0) => Err(ValidationError::FrictionOutOfRange(f)),
        _ => Ok(()),
    }
}
