use super::seed_totals::compute_seed_totals;
use super::units::area_value_to_hectares;
use crate::models::{PlantingMethod, SeasonPlan, SeedTotalsResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Seed recommendation for one plan entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLine {
    pub field: String,
    pub crop: Option<String>,
    pub sowing_date: Option<NaiveDate>,
    pub planting_method: Option<PlantingMethod>,
    pub area_ha: f64,
    pub result: SeedTotalsResult,
}

/// Seed and tray needs summed over every computed entry of one method.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodTotals {
    pub entries: usize,
    pub area_ha: f64,
    pub min_total_kg: f64,
    pub max_total_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tray_count: Option<u64>,
}

impl MethodTotals {
    fn add(&mut self, area_ha: f64, result: &SeedTotalsResult) {
        let Some(totals) = result.totals.as_ref() else {
            return;
        };
        self.entries += 1;
        self.area_ha += area_ha;
        self.min_total_kg += totals.min_total_kg;
        self.max_total_kg += totals.max_total_kg;
        if let Some(trays) = totals.tray_count {
            *self.tray_count.get_or_insert(0) += trays;
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub plan: String,
    pub season: Option<String>,
    pub lines: Vec<PlanLine>,
    pub method_totals: BTreeMap<String, MethodTotals>,
    /// Fields whose planting method has no seeding rate.
    pub skipped: Vec<String>,
}

impl PlanReport {
    /// Total seed range across all methods, in kilograms.
    pub fn grand_total_kg(&self) -> (f64, f64) {
        self.method_totals
            .values()
            .fold((0.0, 0.0), |(min, max), t| {
                (min + t.min_total_kg, max + t.max_total_kg)
            })
    }
}

/// Run the seed calculator over a whole season plan.
///
/// Lines are ordered by sowing date; undated entries follow in file order.
pub fn build_plan_report(plan: &SeasonPlan) -> PlanReport {
    let mut lines: Vec<PlanLine> = plan
        .entries
        .iter()
        .map(|entry| {
            let request = entry.request();
            PlanLine {
                field: entry.field.clone(),
                crop: entry.crop.clone(),
                sowing_date: entry.sowing_date,
                planting_method: entry.planting_method.clone(),
                area_ha: area_value_to_hectares(request.area.as_ref(), request.unit.as_ref()),
                result: compute_seed_totals(&request),
            }
        })
        .collect();

    lines.sort_by_key(|line| (line.sowing_date.is_none(), line.sowing_date));

    let mut method_totals: BTreeMap<String, MethodTotals> = BTreeMap::new();
    let mut skipped = Vec::new();

    for line in &lines {
        match (&line.planting_method, line.result.computed) {
            (Some(method), true) => {
                method_totals
                    .entry(method.as_str().to_string())
                    .or_default()
                    .add(line.area_ha, &line.result);
            }
            _ => {
                tracing::warn!(
                    field = %line.field,
                    method = line
                        .planting_method
                        .as_ref()
                        .map(PlantingMethod::as_str)
                        .unwrap_or("<none>"),
                    "No seeding rate for plan entry, skipping from totals"
                );
                skipped.push(line.field.clone());
            }
        }
    }

    tracing::info!(
        plan = %plan.name,
        entries = lines.len(),
        skipped = skipped.len(),
        "Built season plan seed report"
    );

    PlanReport {
        plan: plan.name.clone(),
        season: plan.season.clone(),
        lines,
        method_totals,
        skipped,
    }
}
