use super::classify::resolve_variety_length;
use super::rates::{get_seed_rate_per_hectare, PARACHUTE_TRAYS_PER_HA};
use super::units::area_value_to_hectares;
use crate::models::{PlantingMethod, SeedTotals, SeedTotalsRequest, SeedTotalsResult};

/// Compute recommended seed quantities for an area.
///
/// Never fails. A planting method without a defined rate yields
/// `computed: false` and nothing else; callers must check `computed`
/// before reading the totals.
pub fn compute_seed_totals(request: &SeedTotalsRequest) -> SeedTotalsResult {
    let length = resolve_variety_length(request.variety.as_ref());
    let method = request.planting_method.as_ref();
    let rate = get_seed_rate_per_hectare(method, length);

    let (Some(rate_min), Some(rate_max)) = (rate.min, rate.max) else {
        tracing::debug!(
            method = method.map(PlantingMethod::as_str).unwrap_or("<none>"),
            "No seeding rate defined for planting method"
        );
        return SeedTotalsResult::not_computed();
    };

    let area_ha = area_value_to_hectares(request.area.as_ref(), request.unit.as_ref());

    let mut totals = SeedTotals {
        per_ha_label: per_ha_label(rate_min, rate_max),
        min_total_kg: finite_or_zero(area_ha * rate_min),
        max_total_kg: finite_or_zero(area_ha * rate_max),
        tray_count: None,
        trays_per_ha: None,
    };

    if method == Some(&PlantingMethod::ParachuteSeeding) {
        totals.trays_per_ha = Some(PARACHUTE_TRAYS_PER_HA);
        totals.tray_count = Some(tray_count(area_ha));
    }

    tracing::debug!(
        %length,
        area_ha,
        min_kg = totals.min_total_kg,
        max_kg = totals.max_total_kg,
        "Computed seed totals"
    );

    SeedTotalsResult::from_totals(totals)
}

/// "100 kg/ha" for a single rate, "75-80 kg/ha" for a range. Numbers keep
/// their natural form (37.5 stays 37.5, 100 prints without decimals).
pub fn per_ha_label(min: f64, max: f64) -> String {
    if min == max {
        format!("{} kg/ha", min)
    } else {
        format!("{}-{} kg/ha", min, max)
    }
}

/// Trays needed for an area, rounded to the nearest tray (halves round up).
fn tray_count(area_ha: f64) -> u64 {
    let trays = (area_ha * f64::from(PARACHUTE_TRAYS_PER_HA)).round();
    if trays.is_finite() && trays > 0.0 {
        trays as u64
    } else {
        0
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
