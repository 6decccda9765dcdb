//! Node payload records.
//!
//! One record per node kind, generic over the children union `C` and/or the
//! predicate union `P` so the same record serves every tree context. The
//! per-kind style records (`*Style`), named sub-part maps (`*Elements`) and
//! transition deltas (`*Transitions`) are co-located with their node.
//!
//! Grouped by role:
//! - [`container`] — Row, Column, scrollables, ZStack, AccessibilityGrouped
//! - [`content`] — images, text, progress indicator
//! - [`interactive`] — response buttons, links, state triggers
//! - [`overlay`] — Overlay, BottomSheet, When
//! - [`distribution`] — offer distribution containers

use serde::{Deserialize, Serialize};

use crate::style::{ConditionalStyleTransition, LayoutStyle};

pub mod container;
pub mod content;
pub mod distribution;
pub mod interactive;
pub mod overlay;

pub use container::*;
pub use content::*;
pub use distribution::*;
pub use interactive::*;
pub use overlay::*;

/// Style attachment shorthand used by every node record: sub-part styles for
/// `Elements`, conditional transitions over `Transitions` gated by the
/// context's predicate set.
pub type NodeStyles<Elements, Transitions, Predicates> =
    LayoutStyle<Elements, ConditionalStyleTransition<Transitions, Predicates>>;

/// Where a link or response destination opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkOpenTarget {
    Internally,
    Externally,
    Passthrough,
}

/// Declare six-field container style records
/// (container/background/border/dimension/flexChild/spacing, all optional).
macro_rules! container_style {
    ( $( $(#[$meta:meta])* $name:ident ),+ $(,)? ) => { $(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub container: Option<crate::style::ContainerStylingProperties>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub background: Option<crate::style::BackgroundStylingProperties>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub border: Option<crate::style::BorderStylingProperties>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub dimension: Option<crate::style::DimensionStylingProperties>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub flex_child: Option<crate::style::FlexChildStylingProperties>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub spacing: Option<crate::style::SpacingStylingProperties>,
        }
    )+ };
}

/// Declare the `*Elements`/`*Transitions` pair for a kind whose only styled
/// sub-part is itself (`own`). `stateful` kinds use state-keyed blocks;
/// `stateless` kinds carry default-only blocks.
macro_rules! own_style_block {
    ( $( $elements:ident / $transitions:ident : stateful $style:ty ),+ $(,)? ) => { $(
        /// Named sub-part styles (`own` only).
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $elements {
            pub own: Vec<crate::style::BasicStateStylingBlock<$style>>,
        }

        /// Transition style deltas (`own` only).
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $transitions {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub own: Option<$style>,
        }
    )+ };
    ( $( $elements:ident / $transitions:ident : stateless $style:ty ),+ $(,)? ) => { $(
        /// Named sub-part styles (`own` only, stateless).
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $elements {
            pub own: Vec<crate::style::StatelessStylingBlock<$style>>,
        }

        /// Transition style deltas (`own` only).
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $transitions {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub own: Option<$style>,
        }
    )+ };
}

pub(crate) use {container_style, own_style_block};
