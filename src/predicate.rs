//! Visibility predicates.
//!
//! A predicate pairs a comparison operator with a typed value and travels as
//! a tagged union with payload key `predicate`. Three closed predicate sets
//! exist, one per schema flavor: the general and layout-variant sets cover
//! all nine condition kinds (differing only in how domain state is keyed);
//! the outer-layout set is restricted to six.
//!
//! Each condition family has its own operator enum, so an orderable
//! predicate can never carry an existence operator — illegal combinations
//! are unrepresentable rather than validated.

use serde::{Deserialize, Serialize};

use crate::macros::tagged_union;

// =============================================================================
// Comparison operators
// =============================================================================

/// Operators for conditions over ordered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderableCondition {
    Is,
    IsNot,
    IsBelow,
    IsAbove,
}

/// Operators for plain equality conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EqualityCondition {
    Is,
    IsNot,
}

/// Operators for presence conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExistenceCondition {
    Exists,
    NotExists,
}

/// Operators for boolean conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BooleanCondition {
    IsTrue,
    IsFalse,
}

// =============================================================================
// Predicate records
// =============================================================================

/// Condition on the active breakpoint name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointPredicate {
    pub condition: OrderableCondition,
    pub value: String,
}

/// Condition on the item's position within a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPredicate {
    pub condition: OrderableCondition,
    pub value: String,
}

/// Condition on the progression index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionPredicate {
    pub condition: OrderableCondition,
    pub value: String,
}

/// Condition on the platform color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarkModePredicate {
    pub condition: EqualityCondition,
    pub value: bool,
}

/// Condition on whether a creative copy key is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeCopyPredicate {
    pub condition: ExistenceCondition,
    pub value: String,
}

/// Condition on an authored boolean literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticBooleanPredicate {
    pub condition: BooleanCondition,
    pub value: bool,
}

/// Condition on a renderer-managed custom state counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStatePredicate {
    pub key: String,
    pub condition: OrderableCondition,
    pub value: i32,
}

/// Condition on a domain state counter, keyed by a closed key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStatePredicate<K> {
    pub key: K,
    pub condition: OrderableCondition,
    pub value: i32,
}

/// Condition comparing an authored input string against a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticStringPredicate {
    pub input: String,
    pub condition: EqualityCondition,
    pub value: String,
}

/// Domain state keys available to the general schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainStateKey {
    OfferComplete,
}

/// Domain state keys available to layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutVariantDomainStateKey {
    OfferComplete,
}

// =============================================================================
// Predicate unions
// =============================================================================

tagged_union! {
    /// Predicate set for the general layout tree.
    pub enum WhenPredicate, payload_key = "predicate" {
        "Breakpoint" => Breakpoint(BreakpointPredicate),
        "Position" => Position(PositionPredicate),
        "Progression" => Progression(ProgressionPredicate),
        "DarkMode" => DarkMode(DarkModePredicate),
        "CreativeCopy" => CreativeCopy(CreativeCopyPredicate),
        "StaticBoolean" => StaticBoolean(StaticBooleanPredicate),
        "CustomState" => CustomState(CustomStatePredicate),
        "DomainState" => DomainState(DomainStatePredicate<DomainStateKey>),
        "StaticString" => StaticString(StaticStringPredicate),
    }
}

tagged_union! {
    /// Predicate set for layout-variant trees. Identical to the general set
    /// except domain state is keyed by [`LayoutVariantDomainStateKey`].
    pub enum LayoutVariantWhenPredicate, payload_key = "predicate" {
        "Breakpoint" => Breakpoint(BreakpointPredicate),
        "Position" => Position(PositionPredicate),
        "Progression" => Progression(ProgressionPredicate),
        "DarkMode" => DarkMode(DarkModePredicate),
        "CreativeCopy" => CreativeCopy(CreativeCopyPredicate),
        "StaticBoolean" => StaticBoolean(StaticBooleanPredicate),
        "CustomState" => CustomState(CustomStatePredicate),
        "DomainState" => DomainState(DomainStatePredicate<LayoutVariantDomainStateKey>),
        "StaticString" => StaticString(StaticStringPredicate),
    }
}

tagged_union! {
    /// Predicate set for outer-layout trees. Position, creative-copy and
    /// domain-state conditions are not available at this level.
    pub enum OuterLayoutWhenPredicate, payload_key = "predicate" {
        "Breakpoint" => Breakpoint(BreakpointPredicate),
        "Progression" => Progression(ProgressionPredicate),
        "DarkMode" => DarkMode(DarkModePredicate),
        "StaticBoolean" => StaticBoolean(StaticBooleanPredicate),
        "CustomState" => CustomState(CustomStatePredicate),
        "StaticString" => StaticString(StaticStringPredicate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode_string, encode_value};
    use crate::error::DecodeError;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(encode_value(&OrderableCondition::IsBelow).unwrap(), "is-below");
        assert_eq!(encode_value(&ExistenceCondition::NotExists).unwrap(), "not-exists");
        assert_eq!(encode_value(&BooleanCondition::IsTrue).unwrap(), "is-true");
        assert_eq!(encode_value(&EqualityCondition::Is).unwrap(), "is");
    }

    #[test]
    fn test_predicate_decode() {
        let predicate: WhenPredicate = decode_str(
            r#"{"type":"Breakpoint","predicate":{"condition":"is-above","value":"tablet"}}"#,
        )
        .unwrap();
        assert_eq!(
            predicate,
            WhenPredicate::Breakpoint(BreakpointPredicate {
                condition: OrderableCondition::IsAbove,
                value: "tablet".to_string(),
            })
        );
    }

    #[test]
    fn test_predicate_roundtrip_all_kinds() {
        let predicates = vec![
            WhenPredicate::Breakpoint(BreakpointPredicate {
                condition: OrderableCondition::Is,
                value: "mobile".into(),
            }),
            WhenPredicate::Position(PositionPredicate {
                condition: OrderableCondition::IsNot,
                value: "0".into(),
            }),
            WhenPredicate::Progression(ProgressionPredicate {
                condition: OrderableCondition::IsBelow,
                value: "3".into(),
            }),
            WhenPredicate::DarkMode(DarkModePredicate {
                condition: EqualityCondition::Is,
                value: true,
            }),
            WhenPredicate::CreativeCopy(CreativeCopyPredicate {
                condition: ExistenceCondition::Exists,
                value: "title".into(),
            }),
            WhenPredicate::StaticBoolean(StaticBooleanPredicate {
                condition: BooleanCondition::IsFalse,
                value: false,
            }),
            WhenPredicate::CustomState(CustomStatePredicate {
                key: "expanded".into(),
                condition: OrderableCondition::Is,
                value: 1,
            }),
            WhenPredicate::DomainState(DomainStatePredicate {
                key: DomainStateKey::OfferComplete,
                condition: OrderableCondition::Is,
                value: 1,
            }),
            WhenPredicate::StaticString(StaticStringPredicate {
                input: "%^DATA^%".into(),
                condition: EqualityCondition::IsNot,
                value: "".into(),
            }),
        ];
        for predicate in predicates {
            let json = encode_string(&predicate).unwrap();
            let back: WhenPredicate = decode_str(&json).unwrap();
            assert_eq!(back, predicate);
        }
    }

    #[test]
    fn test_outer_layout_set_is_restricted() {
        let err = decode_str::<OuterLayoutWhenPredicate>(
            r#"{"type":"Position","predicate":{"condition":"is","value":"0"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedDiscriminator { family: "OuterLayoutWhenPredicate", ref token }
                if token == "Position"
        ));
        assert_eq!(OuterLayoutWhenPredicate::TOKENS.len(), 6);
    }

    #[test]
    fn test_operator_family_is_closed() {
        // An existence operator is not valid in an orderable predicate.
        let err = decode_str::<WhenPredicate>(
            r#"{"type":"Breakpoint","predicate":{"condition":"exists","value":"x"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::PayloadMismatch { family: "WhenPredicate", token: "Breakpoint", .. }
        ));
    }

    #[test]
    fn test_domain_state_key_token() {
        let json = encode_string(&DomainStateKey::OfferComplete).unwrap();
        assert_eq!(json, "\"offerComplete\"");
    }
}
