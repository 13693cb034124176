use super::lenient::lenient;
use super::{AreaUnit, AreaValue, PlantingMethod, SeedTotalsRequest, VarietyInput};
use crate::error::{Result, SeedRateError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The field plantings scheduled for one growing season.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPlan {
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub field: String,
    #[serde(default, deserialize_with = "lenient")]
    pub crop: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sowing_date: Option<NaiveDate>,
    #[serde(default)]
    pub area: Option<AreaValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<AreaUnit>,
    #[serde(default, deserialize_with = "lenient")]
    pub planting_method: Option<PlantingMethod>,
    #[serde(default)]
    pub variety: Option<VarietyInput>,
}

impl PlanEntry {
    pub fn request(&self) -> SeedTotalsRequest {
        SeedTotalsRequest {
            area: self.area.clone(),
            unit: self.unit.clone(),
            planting_method: self.planting_method.clone(),
            variety: self.variety.clone(),
        }
    }
}

impl SeasonPlan {
    /// Load a plan from disk. `.json` files are read as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SeedRateError::NotFound(format!(
                "Season plan not found at {:?}",
                path
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let plan: SeasonPlan = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        if plan.entries.is_empty() {
            tracing::warn!(plan = %plan.name, "Season plan has no entries");
        }

        Ok(plan)
    }
}
