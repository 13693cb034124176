use super::lenient::{lenient, Unrecognized};
use super::{AreaUnit, PlantingMethod, VarietyInput};
use serde::{Deserialize, Serialize};

/// Cultivated area as callers send it: a number, or text typed into a form.
/// Booleans and values of any other shape are kept rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Unrecognized(Unrecognized),
}

impl AreaValue {
    /// Numeric value of the area. Blank text reads as zero and unparseable
    /// text as NaN; the unit normalizer turns both into a zero area.
    /// Text is parsed as a decimal float (`"1e3"`, `"+2.5"`, `"inf"`), so
    /// hex or binary literals such as `"0x10"` are unparseable here.
    /// `true` reads as 1, `false` as 0, any other shape as NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            AreaValue::Number(n) => *n,
            AreaValue::Bool(b) => f64::from(u8::from(*b)),
            AreaValue::Unrecognized(_) => f64::NAN,
            AreaValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl From<f64> for AreaValue {
    fn from(n: f64) -> Self {
        AreaValue::Number(n)
    }
}

impl From<&str> for AreaValue {
    fn from(s: &str) -> Self {
        AreaValue::Text(s.to_string())
    }
}

/// Seeding rate range in kilograms per hectare. `None` marks a method
/// without a defined rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeedRate {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SeedRate {
    pub const UNDEFINED: SeedRate = SeedRate {
        min: None,
        max: None,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.min.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTotalsRequest {
    #[serde(default)]
    pub area: Option<AreaValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub unit: Option<AreaUnit>,
    #[serde(default, deserialize_with = "lenient")]
    pub planting_method: Option<PlantingMethod>,
    #[serde(default)]
    pub variety: Option<VarietyInput>,
}

impl SeedTotalsRequest {
    pub fn new(area: impl Into<AreaValue>, unit: AreaUnit, planting_method: PlantingMethod) -> Self {
        Self {
            area: Some(area.into()),
            unit: Some(unit),
            planting_method: Some(planting_method),
            variety: None,
        }
    }

    pub fn with_variety(mut self, variety: impl Into<VarietyInput>) -> Self {
        self.variety = Some(variety.into());
        self
    }
}

/// Seed quantities for a request whose planting method has a known rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTotals {
    pub per_ha_label: String,
    pub min_total_kg: f64,
    pub max_total_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tray_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trays_per_ha: Option<u32>,
}

/// Outcome of a seed calculation. Serializes to `{"computed": false}` when
/// no rate is known, otherwise to the flattened totals plus `computed: true`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedTotalsResult {
    pub computed: bool,
    #[serde(flatten)]
    pub totals: Option<SeedTotals>,
}

impl SeedTotalsResult {
    pub fn not_computed() -> Self {
        Self {
            computed: false,
            totals: None,
        }
    }

    pub fn from_totals(totals: SeedTotals) -> Self {
        Self {
            computed: true,
            totals: Some(totals),
        }
    }

    pub fn min_total_kg(&self) -> Option<f64> {
        self.totals.as_ref().map(|t| t.min_total_kg)
    }

    pub fn max_total_kg(&self) -> Option<f64> {
        self.totals.as_ref().map(|t| t.max_total_kg)
    }

    pub fn tray_count(&self) -> Option<u64> {
        self.totals.as_ref().and_then(|t| t.tray_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_value_coercion() {
        assert_eq!(AreaValue::from(2.5).as_number(), 2.5);
        assert_eq!(AreaValue::from(" 1.25 ").as_number(), 1.25);
        assert_eq!(AreaValue::from("").as_number(), 0.0);
        assert!(AreaValue::from("two acres").as_number().is_nan());
        assert_eq!(AreaValue::from("1e3").as_number(), 1000.0);
        assert!(AreaValue::from("0x10").as_number().is_nan());
        assert_eq!(AreaValue::Bool(true).as_number(), 1.0);
        assert_eq!(AreaValue::Bool(false).as_number(), 0.0);
        assert!(AreaValue::Unrecognized(Unrecognized).as_number().is_nan());
    }

    #[test]
    fn area_value_accepts_number_or_string() {
        let n: AreaValue = serde_json::from_str("3").unwrap();
        assert_eq!(n, AreaValue::Number(3.0));
        let s: AreaValue = serde_json::from_str(r#""3.5""#).unwrap();
        assert_eq!(s.as_number(), 3.5);
    }

    #[test]
    fn seed_rate_undefined() {
        assert!(!SeedRate::UNDEFINED.is_defined());
        assert!(SeedRate::new(75.0, 80.0).is_defined());
    }

    #[test]
    fn request_reads_camel_case_wire_shape() {
        let json = r#"{
            "area": "0.5",
            "unit": "acres",
            "plantingMethod": "parachute_seeding",
            "variety": null
        }"#;
        let request: SeedTotalsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.unit, Some(AreaUnit::Acres));
        assert_eq!(request.planting_method, Some(PlantingMethod::ParachuteSeeding));
        assert!(request.variety.is_none());
    }

    #[test]
    fn not_computed_serializes_minimal_payload() {
        let json = serde_json::to_value(SeedTotalsResult::not_computed()).unwrap();
        assert_eq!(json, serde_json::json!({ "computed": false }));
    }

    #[test]
    fn computed_result_flattens_totals() {
        let result = SeedTotalsResult::from_totals(SeedTotals {
            per_ha_label: "75-80 kg/ha".into(),
            min_total_kg: 37.5,
            max_total_kg: 40.0,
            tray_count: None,
            trays_per_ha: None,
        });
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "computed": true,
                "perHaLabel": "75-80 kg/ha",
                "minTotalKg": 37.5,
                "maxTotalKg": 40.0
            })
        );
    }

    #[test]
    fn malformed_request_fields_still_deserialize() {
        let json = r#"{
            "area": 1,
            "unit": "hectares",
            "plantingMethod": "direct_seeding",
            "variety": { "type": "Long Duration", "characteristics": "n/a" }
        }"#;
        let request: SeedTotalsRequest = serde_json::from_str(json).unwrap();
        match request.variety {
            Some(VarietyInput::Descriptor(ref d)) => {
                assert_eq!(d.variety_type.as_deref(), Some("Long Duration"));
                assert!(d.characteristics.is_none());
            }
            ref other => panic!("unexpected variety {:?}", other),
        }

        let json = r#"{ "area": true, "unit": 5, "plantingMethod": ["x"], "variety": 7 }"#;
        let request: SeedTotalsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.area, Some(AreaValue::Bool(true)));
        assert!(request.unit.is_none());
        assert!(request.planting_method.is_none());
        assert_eq!(request.variety, Some(VarietyInput::Unrecognized(Unrecognized)));

        let json = r#"{ "area": {"value": 2} }"#;
        let request: SeedTotalsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.area, Some(AreaValue::Unrecognized(Unrecognized)));
    }
}
