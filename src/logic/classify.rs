use crate::models::{VarietyDescriptor, VarietyInput, VarietyLength};

/// Classify a variety into a maturity-length category.
///
/// The maturity label (`type`) is checked first, then the grain shape.
/// Matching is case-insensitive substring containment, first match wins:
/// - "long" => Long
/// - "short" => Short
/// - "medium" / "intermediate" => Short
///
/// Anything that matches nothing, including a missing variety, is Short.
pub fn classify_variety_length(variety: Option<&VarietyDescriptor>) -> VarietyLength {
    let Some(variety) = variety else {
        return VarietyLength::Short;
    };

    if let Some(length) = variety.variety_type.as_deref().and_then(match_duration) {
        return length;
    }

    variety
        .grain_shape()
        .and_then(match_grain_shape)
        .unwrap_or_default()
}

/// Resolve the length for any form a caller may supply.
pub fn resolve_variety_length(variety: Option<&VarietyInput>) -> VarietyLength {
    match variety {
        Some(VarietyInput::Descriptor(descriptor)) => classify_variety_length(Some(descriptor)),
        Some(VarietyInput::Length(label)) => VarietyLength::from_label(label),
        Some(VarietyInput::Unrecognized(_)) | None => VarietyLength::Short,
    }
}

fn match_duration(label: &str) -> Option<VarietyLength> {
    let label = label.to_lowercase();
    if label.contains("long") {
        Some(VarietyLength::Long)
    } else if label.contains("short") || label.contains("medium") || label.contains("intermediate")
    {
        Some(VarietyLength::Short)
    } else {
        None
    }
}

fn match_grain_shape(shape: &str) -> Option<VarietyLength> {
    let shape = shape.to_lowercase();
    if shape.contains("long") {
        Some(VarietyLength::Long)
    } else if shape.contains("short") || shape.contains("intermediate") {
        Some(VarietyLength::Short)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(label: &str) -> VarietyDescriptor {
        VarietyDescriptor::new(label)
    }

    #[test]
    fn duration_labels() {
        assert_eq!(
            classify_variety_length(Some(&typed("Long Duration"))),
            VarietyLength::Long
        );
        assert_eq!(
            classify_variety_length(Some(&typed("Short Duration"))),
            VarietyLength::Short
        );
        assert_eq!(
            classify_variety_length(Some(&typed("Medium Duration"))),
            VarietyLength::Short
        );
        assert_eq!(
            classify_variety_length(Some(&typed("intermediate"))),
            VarietyLength::Short
        );
    }

    #[test]
    fn missing_variety_is_short() {
        assert_eq!(classify_variety_length(None), VarietyLength::Short);
        assert_eq!(
            classify_variety_length(Some(&VarietyDescriptor::default())),
            VarietyLength::Short
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify_variety_length(Some(&typed("LONG"))),
            VarietyLength::Long
        );
        assert_eq!(
            classify_variety_length(Some(&typed("extra-LONG duration"))),
            VarietyLength::Long
        );
    }

    #[test]
    fn long_wins_over_short_in_same_label() {
        // "long" is checked before "short"
        assert_eq!(
            classify_variety_length(Some(&typed("short to long"))),
            VarietyLength::Long
        );
    }

    #[test]
    fn grain_shape_fallback() {
        let long_grain = VarietyDescriptor::default().with_grain_shape("Long Slender");
        assert_eq!(classify_variety_length(Some(&long_grain)), VarietyLength::Long);

        let unmatched_type = typed("Hybrid").with_grain_shape("long bold");
        assert_eq!(
            classify_variety_length(Some(&unmatched_type)),
            VarietyLength::Long
        );

        let intermediate = VarietyDescriptor::default().with_grain_shape("Intermediate");
        assert_eq!(
            classify_variety_length(Some(&intermediate)),
            VarietyLength::Short
        );

        let round = VarietyDescriptor::default().with_grain_shape("Round");
        assert_eq!(classify_variety_length(Some(&round)), VarietyLength::Short);
    }

    #[test]
    fn type_match_takes_precedence_over_grain_shape() {
        let variety = typed("Short Duration").with_grain_shape("Long Slender");
        assert_eq!(classify_variety_length(Some(&variety)), VarietyLength::Short);

        let medium = typed("Medium Duration").with_grain_shape("Long Slender");
        assert_eq!(classify_variety_length(Some(&medium)), VarietyLength::Short);
    }

    #[test]
    fn resolve_each_input_form() {
        assert_eq!(resolve_variety_length(None), VarietyLength::Short);
        assert_eq!(
            resolve_variety_length(Some(&VarietyInput::Length("long".into()))),
            VarietyLength::Long
        );
        assert_eq!(
            resolve_variety_length(Some(&VarietyInput::Length("Long Duration".into()))),
            VarietyLength::Short
        );
        assert_eq!(
            resolve_variety_length(Some(&VarietyInput::Descriptor(typed("Long Duration")))),
            VarietyLength::Long
        );
        assert_eq!(
            resolve_variety_length(Some(&VarietyInput::Unrecognized(Default::default()))),
            VarietyLength::Short
        );
    }
}
