//! Discriminated dimension values.
//!
//! Width/height and carousel peek-through sizes are tagged unions with
//! payload key `value`. Dimension tokens are lowercase (`fixed`,
//! `percentage`, `fit`); peek-through tokens are capitalized (`Fixed`,
//! `Percentage`) — the casing difference is part of the wire format and is
//! preserved exactly.
//!
//! Non-finite floats are not representable on the wire: encoding NaN or ±∞
//! produces JSON `null`, which fails any subsequent decode.

use serde::{Deserialize, Serialize};

use crate::macros::tagged_union;

/// Keyword widths for `fit`-sized nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionWidthFitValue {
    WrapContent,
    FitWidth,
}

/// Keyword heights for `fit`-sized nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionHeightFitValue {
    WrapContent,
    FitHeight,
}

tagged_union! {
    /// Width of a node: fixed points, a percentage of the parent, or a fit
    /// keyword.
    pub enum DimensionWidthValue, payload_key = "value" {
        "fixed" => Fixed(f32),
        "percentage" => Percentage(f32),
        "fit" => Fit(DimensionWidthFitValue),
    }
}

tagged_union! {
    /// Height of a node: fixed points, a percentage of the parent, or a fit
    /// keyword.
    pub enum DimensionHeightValue, payload_key = "value" {
        "fixed" => Fixed(f32),
        "percentage" => Percentage(f32),
        "fit" => Fit(DimensionHeightFitValue),
    }
}

tagged_union! {
    /// How much of the neighboring carousel item stays visible.
    pub enum PeekThroughSize, payload_key = "value" {
        "Fixed" => Fixed(f32),
        "Percentage" => Percentage(f32),
    }
}
