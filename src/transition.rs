//! Transition effects.
//!
//! Effects are tagged unions with payload key `settings`. Each union is
//! currently single-variant (a fade), but the wire format is open to growth
//! and decoding still dispatches through the closed table.

use serde::{Deserialize, Serialize};

use crate::macros::tagged_union;

/// Settings for a combined entry/exit fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeInOutTransitionSettings {
    /// Duration in milliseconds.
    pub duration: i32,
}

/// Settings for an entry-only fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeInTransitionSettings {
    /// Duration in milliseconds.
    pub duration: i32,
}

/// Settings for an exit-only fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeOutTransitionSettings {
    /// Duration in milliseconds.
    pub duration: i32,
}

tagged_union! {
    /// Transition applied when a distribution advances.
    pub enum Transition, payload_key = "settings" {
        "FadeInOut" => FadeInOut(FadeInOutTransitionSettings),
    }
}

tagged_union! {
    /// Transition applied when a `When` block becomes visible.
    pub enum InTransition, payload_key = "settings" {
        "FadeIn" => FadeIn(FadeInTransitionSettings),
    }
}

tagged_union! {
    /// Transition applied when a `When` block is hidden.
    pub enum OutTransition, payload_key = "settings" {
        "FadeOut" => FadeOut(FadeOutTransitionSettings),
    }
}

/// Entry/exit transitions attached to a `When` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhenTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_transition: Option<Vec<InTransition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_transition: Option<Vec<OutTransition>>,
}
