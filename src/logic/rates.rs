use crate::models::{PlantingMethod, SeedRate, VarietyLength};
use serde::Serialize;

/// Trays of pre-germinated seedlings per hectare for parachute seeding.
pub const PARACHUTE_TRAYS_PER_HA: u32 = 1000;

/// Seeding rate per hectare for a planting method and variety length.
///
/// | method            | long        | short       |
/// |-------------------|-------------|-------------|
/// | direct_seeding    | 100         | 75-80       |
/// | parachute_seeding | 37.5        | 32.5        |
///
/// Any other or missing method returns [`SeedRate::UNDEFINED`].
pub fn get_seed_rate_per_hectare(
    method: Option<&PlantingMethod>,
    length: VarietyLength,
) -> SeedRate {
    match (method, length) {
        (Some(PlantingMethod::DirectSeeding), VarietyLength::Long) => SeedRate::new(100.0, 100.0),
        (Some(PlantingMethod::DirectSeeding), VarietyLength::Short) => SeedRate::new(75.0, 80.0),
        (Some(PlantingMethod::ParachuteSeeding), VarietyLength::Long) => SeedRate::new(37.5, 37.5),
        (Some(PlantingMethod::ParachuteSeeding), VarietyLength::Short) => {
            SeedRate::new(32.5, 32.5)
        }
        _ => SeedRate::UNDEFINED,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTableRow {
    pub method: PlantingMethod,
    pub length: VarietyLength,
    pub rate: SeedRate,
}

/// Every (method, length) pair that has a defined rate.
pub fn rate_table() -> Vec<RateTableRow> {
    PlantingMethod::supported()
        .iter()
        .flat_map(|method| {
            VarietyLength::all().iter().map(move |&length| RateTableRow {
                method: method.clone(),
                length,
                rate: get_seed_rate_per_hectare(Some(method), length),
            })
        })
        .collect()
}
