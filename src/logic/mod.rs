pub mod classify;
pub mod plan_report;
pub mod rates;
pub mod seed_totals;
pub mod units;

pub use classify::{classify_variety_length, resolve_variety_length};
pub use plan_report::{build_plan_report, MethodTotals, PlanLine, PlanReport};
pub use rates::{get_seed_rate_per_hectare, rate_table, RateTableRow, PARACHUTE_TRAYS_PER_HA};
pub use seed_totals::{compute_seed_totals, per_ha_label};
pub use units::{area_to_hectares, area_value_to_hectares};
