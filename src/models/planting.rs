use serde::{Deserialize, Serialize};

const SUPPORTED_METHODS: &[PlantingMethod] =
    &[PlantingMethod::DirectSeeding, PlantingMethod::ParachuteSeeding];

const RECOGNIZED_UNITS: &[AreaUnit] = &[
    AreaUnit::Hectares,
    AreaUnit::Acres,
    AreaUnit::SqMeters,
    AreaUnit::SqFeet,
];

/// Planting method identifier. Only direct and parachute seeding carry
/// seeding rates; any other identifier is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlantingMethod {
    DirectSeeding,
    ParachuteSeeding,
    Other(String),
}

impl PlantingMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PlantingMethod::DirectSeeding => "direct_seeding",
            PlantingMethod::ParachuteSeeding => "parachute_seeding",
            PlantingMethod::Other(s) => s,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            PlantingMethod::DirectSeeding => "Direct Seeding",
            PlantingMethod::ParachuteSeeding => "Parachute Seeding",
            PlantingMethod::Other(s) => s,
        }
    }

    /// Identifiers are matched exactly, the way stored plan records spell them.
    pub fn from_id(s: &str) -> Self {
        match s {
            "direct_seeding" => PlantingMethod::DirectSeeding,
            "parachute_seeding" => PlantingMethod::ParachuteSeeding,
            other => PlantingMethod::Other(other.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, PlantingMethod::Other(_))
    }

    pub fn supported() -> &'static [PlantingMethod] {
        SUPPORTED_METHODS
    }
}

impl From<String> for PlantingMethod {
    fn from(s: String) -> Self {
        PlantingMethod::from_id(&s)
    }
}

impl From<PlantingMethod> for String {
    fn from(method: PlantingMethod) -> Self {
        method.as_str().to_string()
    }
}

impl std::fmt::Display for PlantingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Area unit. Unrecognized labels are kept and treated as hectares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AreaUnit {
    #[default]
    Hectares,
    Acres,
    SqMeters,
    SqFeet,
    Other(String),
}

impl AreaUnit {
    pub fn as_str(&self) -> &str {
        match self {
            AreaUnit::Hectares => "hectares",
            AreaUnit::Acres => "acres",
            AreaUnit::SqMeters => "sq meters",
            AreaUnit::SqFeet => "sq feet",
            AreaUnit::Other(s) => s,
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hectares" => AreaUnit::Hectares,
            "acres" => AreaUnit::Acres,
            "sq meters" => AreaUnit::SqMeters,
            "sq feet" => AreaUnit::SqFeet,
            _ => AreaUnit::Other(s.to_string()),
        }
    }

    /// Multiplier from this unit to hectares.
    pub fn hectare_factor(&self) -> f64 {
        match self {
            AreaUnit::Hectares => 1.0,
            AreaUnit::Acres => 0.404685642,
            AreaUnit::SqMeters => 0.0001,
            AreaUnit::SqFeet => 0.000009290304,
            AreaUnit::Other(_) => 1.0,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AreaUnit::Other(_))
    }

    pub fn all() -> &'static [AreaUnit] {
        RECOGNIZED_UNITS
    }
}

impl From<String> for AreaUnit {
    fn from(s: String) -> Self {
        AreaUnit::from_label(&s)
    }
}

impl From<AreaUnit> for String {
    fn from(unit: AreaUnit) -> Self {
        unit.as_str().to_string()
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
