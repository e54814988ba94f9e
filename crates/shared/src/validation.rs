//! Common validation utilities.

use validator::ValidationError;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a coordinate is set.
///
/// The submission form initializes both coordinates to 0.0, so an exact zero
/// means "never filled in" rather than a real position. Each coordinate must
/// be individually non-zero for a report to be accepted.
pub fn validate_coordinate_set(value: f64) -> Result<(), ValidationError> {
    if value != 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("coordinate_unset");
        err.message = Some("Coordinate is required (0.0 means unset)".into());
        Err(err)
    }
}

/// Validates that a text field contains at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Field must not be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}
