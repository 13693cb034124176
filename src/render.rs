//! Plain-text rendering of results for the terminal.

use crate::logic::{per_ha_label, rate_table, PlanReport};
use crate::models::{SeedTotalsRequest, SeedTotalsResult};
use std::fmt::Write;

pub fn render_result(request: &SeedTotalsRequest, result: &SeedTotalsResult) -> String {
    let method = request
        .planting_method
        .as_ref()
        .map(|m| m.as_str())
        .unwrap_or("<none>");

    let Some(totals) = result.totals.as_ref() else {
        return format!("No seeding rate defined for planting method '{}'.\n", method);
    };

    let mut out = String::new();
    let _ = writeln!(out, "Planting method: {}", method);
    let _ = writeln!(out, "Seed rate:       {}", totals.per_ha_label);
    let _ = writeln!(out, "Seed required:   {}", kg_range(totals.min_total_kg, totals.max_total_kg));
    if let (Some(trays), Some(per_ha)) = (totals.tray_count, totals.trays_per_ha) {
        let _ = writeln!(out, "Trays:           {} ({} per ha)", trays, per_ha);
    }
    out
}

pub fn render_rate_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:<8} {}", "Method", "Length", "Rate");
    for row in rate_table() {
        let label = match (row.rate.min, row.rate.max) {
            (Some(min), Some(max)) => per_ha_label(min, max),
            _ => "-".to_string(),
        };
        let _ = writeln!(out, "{:<20} {:<8} {}", row.method.as_str(), row.length.as_str(), label);
    }
    out
}

pub fn render_plan_report(report: &PlanReport) -> String {
    let mut out = String::new();
    match &report.season {
        Some(season) => {
            let _ = writeln!(out, "{} ({})", report.plan, season);
        }
        None => {
            let _ = writeln!(out, "{}", report.plan);
        }
    }
    let _ = writeln!(out);

    for line in &report.lines {
        let date = line
            .sowing_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "undated".to_string());
        let method = line
            .planting_method
            .as_ref()
            .map(|m| m.as_str())
            .unwrap_or("<none>");
        let detail = match line.result.totals.as_ref() {
            Some(t) => {
                let mut s = format!("{} => {}", t.per_ha_label, kg_range(t.min_total_kg, t.max_total_kg));
                if let Some(trays) = t.tray_count {
                    let _ = write!(s, ", {} trays", trays);
                }
                s
            }
            None => "no seeding rate".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<10} {:<16} {:<18} {:>8.2} ha  {}",
            date, line.field, method, line.area_ha, detail
        );
    }

    if !report.method_totals.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Totals by method:");
        for (method, totals) in &report.method_totals {
            let _ = write!(
                out,
                "  {:<18} {} entries, {:.2} ha, {}",
                method,
                totals.entries,
                totals.area_ha,
                kg_range(totals.min_total_kg, totals.max_total_kg)
            );
            if let Some(trays) = totals.tray_count {
                let _ = write!(out, ", {} trays", trays);
            }
            let _ = writeln!(out);
        }
        let (min, max) = report.grand_total_kg();
        let _ = writeln!(out, "  {:<18} {}", "all methods", kg_range(min, max));
    }

    if !report.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No seeding rate for: {}", report.skipped.join(", "));
    }

    out
}

fn kg_range(min: f64, max: f64) -> String {
    if (max - min).abs() < 0.005 {
        format!("{:.2} kg", min)
    } else {
        format!("{:.2} - {:.2} kg", min, max)
    }
}
