use super::lenient::{lenient, Unrecognized};
use serde::{Deserialize, Serialize};

/// Coarse maturity-length category used to pick a seeding rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarietyLength {
    Long,
    #[default]
    Short,
}

impl VarietyLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            VarietyLength::Long => "long",
            VarietyLength::Short => "short",
        }
    }

    /// Resolve a pre-classified length label. Only the exact label "long"
    /// selects the long-duration rates; every other label, including
    /// "Long" or " long", falls back to short.
    pub fn from_label(s: &str) -> Self {
        if s == "long" {
            VarietyLength::Long
        } else {
            VarietyLength::Short
        }
    }

    pub fn all() -> &'static [VarietyLength] {
        &[VarietyLength::Long, VarietyLength::Short]
    }
}

impl std::fmt::Display for VarietyLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrainQuality {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub grain_shape: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyCharacteristics {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub grain_quality: Option<GrainQuality>,
}

/// Crop variety as stored by the farm records: a free-text maturity label
/// plus optional grain characteristics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyDescriptor {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub variety_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub characteristics: Option<VarietyCharacteristics>,
}

impl VarietyDescriptor {
    pub fn new(variety_type: impl Into<String>) -> Self {
        Self {
            variety_type: Some(variety_type.into()),
            characteristics: None,
        }
    }

    pub fn with_grain_shape(mut self, grain_shape: impl Into<String>) -> Self {
        self.characteristics = Some(VarietyCharacteristics {
            grain_quality: Some(GrainQuality {
                grain_shape: Some(grain_shape.into()),
            }),
        });
        self
    }

    pub fn grain_shape(&self) -> Option<&str> {
        self.characteristics
            .as_ref()?
            .grain_quality
            .as_ref()?
            .grain_shape
            .as_deref()
    }
}

/// Variety as supplied by callers: either a full descriptor or a length
/// label that was already resolved upstream. Values of any other shape are
/// kept as `Unrecognized` and classify as short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarietyInput {
    Length(String),
    Descriptor(VarietyDescriptor),
    Unrecognized(Unrecognized),
}

impl From<VarietyDescriptor> for VarietyInput {
    fn from(descriptor: VarietyDescriptor) -> Self {
        VarietyInput::Descriptor(descriptor)
    }
}

impl From<VarietyLength> for VarietyInput {
    fn from(length: VarietyLength) -> Self {
        VarietyInput::Length(length.as_str().to_string())
    }
}
