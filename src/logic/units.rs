use crate::models::{AreaUnit, AreaValue};

/// Convert an area to hectares.
///
/// Non-finite or non-positive areas come back as 0. A missing or
/// unrecognized unit is treated as hectares already.
pub fn area_to_hectares(area: f64, unit: Option<&AreaUnit>) -> f64 {
    if !area.is_finite() || area <= 0.0 {
        return 0.0;
    }

    let factor = unit.map(AreaUnit::hectare_factor).unwrap_or(1.0);
    area * factor
}

/// Same as [`area_to_hectares`] for an area that may still be text.
pub fn area_value_to_hectares(area: Option<&AreaValue>, unit: Option<&AreaUnit>) -> f64 {
    let area = area.map(AreaValue::as_number).unwrap_or(f64::NAN);
    area_to_hectares(area, unit)
}
