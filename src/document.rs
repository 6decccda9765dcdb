//! Root document wrapper.
//!
//! A layout document pairs the breakpoint table with a layout tree and
//! optional placement settings. The wrapper is generic: the serving system
//! decides which tree grammar ([`crate::tree::LayoutSchema`],
//! [`crate::tree::OuterLayoutSchema`], …) and which settings/display types a
//! given document carries.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A decoded layout document.
///
/// ```
/// use uidoc::{decode_str, LayoutDisplayPreset, LayoutSettings, LayoutSchema, RootSchema};
///
/// let doc = r#"{
///     "breakpoints": {"mobile": 0.0, "desktop": 1024.0},
///     "layout": {"type": "Column", "node": {"children": []}}
/// }"#;
/// let root: RootSchema<LayoutSchema, LayoutDisplayPreset, LayoutSettings> =
///     decode_str(doc).unwrap();
/// assert_eq!(root.breakpoints.len(), 2);
/// assert!(root.settings.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootSchema<Layout, Display, Settings> {
    /// Named viewport widths the document's breakpoint predicates refer to.
    pub breakpoints: FxHashMap<String, f32>,
    /// The layout tree.
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
}

/// Placement-level settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_on_complete: Option<bool>,
}

/// How the placement is presented. Tokens are uppercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutDisplayPreset {
    #[serde(rename = "FULLSCREEN")]
    FullScreen,
    Embedded,
    #[serde(rename = "BOTTOMSHEET")]
    BottomSheet,
}
