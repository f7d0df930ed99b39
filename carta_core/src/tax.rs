//! The tax resolution rule.
//!
//! Tax settings cascade down the catalog hierarchy at *creation time only*:
//! a subcategory inherits from its category, an item from its subcategory
//! (when it has one) and otherwise from its category. Each field resolves
//! independently, and an explicit `false` or `0` counts as provided:
//! presence is `Option::is_some`, never truthiness.
//!
//! Once resolved, the values are stored on the created record as plain
//! fields; later edits to the parent do not propagate.

/// How a category's tax rate is to be interpreted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaxType {
    /// The rate is a percentage of the amount.
    Percentage,

    /// The rate is a fixed amount.
    Fixed,
}

impl TaxType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TaxType::Percentage => "percentage",
            TaxType::Fixed => "fixed",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("not a recognized tax type: {unrecognized_value}")]
pub struct TaxTypeParsingError {
    pub unrecognized_value: String,
}

impl std::str::FromStr for TaxType {
    type Err = TaxTypeParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            _ => Err(TaxTypeParsingError {
                unrecognized_value: s.to_string(),
            }),
        }
    }
}


/// Concrete tax settings, as stored on a category (and on every item
/// after resolution).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaxDefaults {
    pub applicability: bool,

    pub rate: f64,
}


/// Possibly-absent tax settings: caller input at creation time, or a
/// subcategory's stored fields (where `None` means "inherit").
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaxOverrides {
    pub applicability: Option<bool>,

    pub rate: Option<f64>,
}

impl TaxOverrides {
    #[inline]
    pub const fn new(applicability: Option<bool>, rate: Option<f64>) -> Self {
        Self {
            applicability,
            rate,
        }
    }
}


/// Resolves effective tax settings for a subcategory being created under
/// `parent_category`. Each field independently falls back to the parent's
/// value when not provided.
pub fn resolve_subcategory_tax(
    overrides: TaxOverrides,
    parent_category: TaxDefaults,
) -> TaxDefaults {
    TaxDefaults {
        applicability: overrides
            .applicability
            .unwrap_or(parent_category.applicability),
        rate: overrides.rate.unwrap_or(parent_category.rate),
    }
}


/// Resolves effective tax settings for an item being created.
///
/// Priority per field: explicit item input, then the parent subcategory's
/// stored field (when the item has a subcategory and that field is set),
/// then the parent category's value. Without a subcategory, resolution
/// skips straight from the item input to the category.
pub fn resolve_item_tax(
    overrides: TaxOverrides,
    parent_subcategory: Option<TaxOverrides>,
    parent_category: TaxDefaults,
) -> TaxDefaults {
    let subcategory = parent_subcategory.unwrap_or_default();

    TaxDefaults {
        applicability: overrides
            .applicability
            .or(subcategory.applicability)
            .unwrap_or(parent_category.applicability),
        rate: overrides
            .rate
            .or(subcategory.rate)
            .unwrap_or(parent_category.rate),
    }
}



#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn tax_type_serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_value(TaxType::Percentage).unwrap(),
            serde_json::json!("percentage")
        );

        assert_eq!(
            TaxType::from_str("fixed").unwrap(),
            TaxType::Fixed
        );

        assert!(TaxType::from_str("flat").is_err());
    }

    const TAXED_AT_FIVE: TaxDefaults = TaxDefaults {
        applicability: true,
        rate: 5.0,
    };

    #[test]
    fn subcategory_inherits_both_fields_when_nothing_is_provided() {
        let resolved = resolve_subcategory_tax(TaxOverrides::default(), TAXED_AT_FIVE);

        assert_eq!(resolved, TAXED_AT_FIVE);
    }

    #[test]
    fn explicit_false_overrides_inherited_true() {
        let resolved = resolve_subcategory_tax(
            TaxOverrides::new(Some(false), None),
            TAXED_AT_FIVE,
        );

        assert!(!resolved.applicability);
        assert_eq!(resolved.rate, 5.0);
    }

    #[test]
    fn explicit_zero_rate_overrides_inherited_rate() {
        let resolved = resolve_subcategory_tax(
            TaxOverrides::new(None, Some(0.0)),
            TAXED_AT_FIVE,
        );

        assert!(resolved.applicability);
        assert_eq!(resolved.rate, 0.0);
    }

    #[test]
    fn subcategory_fields_resolve_independently() {
        let resolved = resolve_subcategory_tax(
            TaxOverrides::new(Some(false), None),
            TaxDefaults {
                applicability: true,
                rate: 9.5,
            },
        );

        assert_eq!(
            resolved,
            TaxDefaults {
                applicability: false,
                rate: 9.5,
            }
        );
    }

    #[test]
    fn item_prefers_its_own_input_over_both_parents() {
        let resolved = resolve_item_tax(
            TaxOverrides::new(Some(false), Some(1.5)),
            Some(TaxOverrides::new(Some(true), Some(8.0))),
            TAXED_AT_FIVE,
        );

        assert_eq!(
            resolved,
            TaxDefaults {
                applicability: false,
                rate: 1.5,
            }
        );
    }

    #[test]
    fn item_falls_back_to_subcategory_before_category() {
        let resolved = resolve_item_tax(
            TaxOverrides::default(),
            Some(TaxOverrides::new(Some(false), Some(2.0))),
            TAXED_AT_FIVE,
        );

        assert_eq!(
            resolved,
            TaxDefaults {
                applicability: false,
                rate: 2.0,
            }
        );
    }

    #[test]
    fn item_skips_unset_subcategory_fields() {
        // Subcategory present, but with no stored rate: the rate must come
        // from the category while applicability comes from the subcategory.
        let resolved = resolve_item_tax(
            TaxOverrides::default(),
            Some(TaxOverrides::new(Some(false), None)),
            TAXED_AT_FIVE,
        );

        assert_eq!(
            resolved,
            TaxDefaults {
                applicability: false,
                rate: 5.0,
            }
        );
    }

    #[test]
    fn item_without_subcategory_resolves_from_category() {
        let resolved = resolve_item_tax(TaxOverrides::default(), None, TAXED_AT_FIVE);

        assert_eq!(resolved, TAXED_AT_FIVE);
    }

    #[test]
    fn beverages_scenario_cascades_to_subcategory_and_item() {
        let beverages = TaxDefaults {
            applicability: true,
            rate: 5.0,
        };

        let soda = resolve_subcategory_tax(TaxOverrides::default(), beverages);
        assert_eq!(soda, beverages);

        let item = resolve_item_tax(
            TaxOverrides::default(),
            Some(TaxOverrides::new(
                Some(soda.applicability),
                Some(soda.rate),
            )),
            beverages,
        );
        assert_eq!(item, beverages);
    }
}
