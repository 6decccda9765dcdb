//! uidoc - strongly-typed schema and JSON codec for declarative UI layout
//! documents.
//!
//! A layout document is a tree of typed nodes — containers, text, images,
//! interactive controls, conditional-visibility blocks — each carrying
//! optional style and transition data. Renderer clients decode a document
//! once, hold it read-only, and discard it when replaced; every type here is
//! an immutable value object with structural equality.
//!
//! ## Wire format
//!
//! Every polymorphic value travels as a tagged union:
//!
//! ```json
//! { "type": "Row", "node": { "children": [ ... ] } }
//! ```
//!
//! Decoding dispatches on the `type` discriminator to exactly one payload
//! type and fails with a typed [`DecodeError`] when the discriminator is
//! missing, unrecognized, or the payload does not match. Which node kinds
//! are legal where is captured in the type system: each tree context is its
//! own closed sum type (see [`tree`]).
//!
//! ## Modules
//! - [`tree`]: the closed tree grammars, one per context
//! - [`node`]: per-kind payload records
//! - [`predicate`]: condition predicates and their three closed sets
//! - [`style`]: styling property bags and state/transition blocks
//! - [`values`]: discriminated dimension values
//! - [`transition`]: transition effects
//! - [`document`]: the generic root document wrapper
//! - [`codec`]: encode/decode entry points and the dispatch mechanism
//!
//! ## Usage
//!
//! ```
//! use uidoc::{decode_str, encode_string, LayoutSchema};
//!
//! let json = r#"{"type":"Row","node":{"children":[
//!     {"type":"BasicText","node":{"value":"hi"}}
//! ]}}"#;
//!
//! let node: LayoutSchema = decode_str(json).unwrap();
//! assert_eq!(node.discriminator(), "Row");
//!
//! let reencoded = encode_string(&node).unwrap();
//! let back: LayoutSchema = decode_str(&reencoded).unwrap();
//! assert_eq!(back, node);
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Encode/decode entry points and the shared tagged-union dispatch.
pub mod codec;

/// Root document wrapper and placement settings.
pub mod document;

/// Error types.
pub mod error;

/// Node payload records.
pub mod node;

/// Predicates and condition operators.
pub mod predicate;

/// Styling property bags and blocks.
pub mod style;

/// Transition effects.
pub mod transition;

/// The closed tree grammars.
pub mod tree;

/// Discriminated dimension values.
pub mod values;

mod macros;

// =============================================================================
// Re-exports
// =============================================================================

// Entry points
pub use codec::{MAX_DECODE_DEPTH, decode_slice, decode_str, decode_value, encode_string, encode_value};

// Errors
pub use error::{DecodeError, DecodeResult};

// Document
pub use document::{LayoutDisplayPreset, LayoutSettings, RootSchema};

// Tree grammars
pub use tree::{
    AccessibilityGroupedChildren, LayoutSchema, LayoutVariantChildren,
    LayoutVariantNonInteractableChildren, LayoutVariantSchema, ModalChildren,
    NonInteractableChildren, OuterLayoutChildren, OuterLayoutNonInteractableChildren,
    OuterLayoutSchema, ScrollableChildren, ScrollableLayoutVariantChildren,
    ScrollableOuterLayoutChildren,
};

// Predicates
pub use predicate::{
    BooleanCondition, BreakpointPredicate, CreativeCopyPredicate, CustomStatePredicate,
    DarkModePredicate, DomainStateKey, DomainStatePredicate, EqualityCondition,
    ExistenceCondition, LayoutVariantDomainStateKey, LayoutVariantWhenPredicate,
    OrderableCondition, OuterLayoutWhenPredicate, PositionPredicate, ProgressionPredicate,
    StaticBooleanPredicate, StaticStringPredicate, WhenPredicate,
};

// Dimension values and transitions
pub use transition::{
    FadeInOutTransitionSettings, FadeInTransitionSettings, FadeOutTransitionSettings,
    InTransition, OutTransition, Transition, WhenTransition,
};
pub use values::{
    DimensionHeightFitValue, DimensionHeightValue, DimensionWidthFitValue, DimensionWidthValue,
    PeekThroughSize,
};
