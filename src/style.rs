//! Shared styling vocabulary.
//!
//! Flat property bags and leaf enums referenced by every node kind's style
//! records, plus the generic state/transition blocks. These carry no logic;
//! the codec moves them opaquely as payload data.
//!
//! Leaf enum wire values are kebab-case except where the wire explicitly
//! uses other casing (`FontWeight` numeric strings, `Forward`/`Backward`).

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::values::{DimensionHeightValue, DimensionWidthValue};

// =============================================================================
// Theme-aware values
// =============================================================================

/// A color with an optional dark-mode override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub light: CompactString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<CompactString>,
}

/// A URL with an optional dark-mode override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeUrl {
    pub light: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

// =============================================================================
// Flex and container enums
// =============================================================================

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlignment {
    Center,
    FlexStart,
    FlexEnd,
    Stretch,
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexJustification {
    Center,
    FlexStart,
    FlexEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    Solid,
    Dashed,
}

// =============================================================================
// Background
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundImagePosition {
    Top,
    Right,
    Bottom,
    Left,
    Center,
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundImageScale {
    Crop,
    Fit,
    Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub url: ThemeUrl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<BackgroundImagePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<BackgroundImageScale>,
}

// =============================================================================
// Text enums
// =============================================================================

/// Font weight as the wire's numeric string tokens (`"100"`–`"900"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "100")]
    W100,
    #[serde(rename = "200")]
    W200,
    #[serde(rename = "300")]
    W300,
    #[serde(rename = "400")]
    W400,
    #[serde(rename = "500")]
    W500,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "700")]
    W700,
    #[serde(rename = "800")]
    W800,
    #[serde(rename = "900")]
    W900,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontJustification {
    Left,
    Right,
    Center,
    Start,
    End,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontBaselineAlignment {
    Super,
    Sub,
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    Capitalize,
    Uppercase,
    Lowercase,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    Underline,
    StrikeThrough,
    None,
}

// =============================================================================
// Shared property bags
// =============================================================================

/// Width/height constraints and rotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<DimensionWidthValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<DimensionHeightValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_z: Option<f32>,
}

/// How a node behaves as a flex child of its parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexChildStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<FlexAlignment>,
}

/// Padding/margin/offset shorthand strings (e.g. `"8 16 8 16"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<CompactString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<CompactString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<CompactString>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<CompactString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
}

/// Drop shadow. `color` is the only required field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_radius: Option<f32>,
    pub color: ThemeColor,
}

/// Container layout properties for flex containers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<FlexJustification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<FlexAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f32>,
}

/// Container properties for `ZStack`. Stacked children have no gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZStackContainerStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<FlexJustification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<FlexAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f32>,
}

/// Block-level text properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<CompactString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_text_align: Option<FontJustification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_text_align: Option<FontBaselineAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_limit: Option<i32>,
}

/// Inline-span text properties (no block-level alignment or line control).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineTextStylingProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<CompactString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_text_align: Option<FontBaselineAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
}

// =============================================================================
// State and transition blocks
// =============================================================================

/// Style values keyed by interaction state. `default` is required; the
/// remaining states fall back to it when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStateStylingBlock<T> {
    pub default: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressed: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovered: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<T>,
}

/// Style block for kinds with no interaction states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatelessStylingBlock<T> {
    pub default: T,
}

/// A node's style attachment: named sub-part styles plus an ordered list of
/// conditional transitions.
///
/// `conditional_transitions` entries are evaluated in order and the first
/// match wins, so list order is semantically significant and preserved
/// exactly across decode/encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle<Elements, Transitions> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Elements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_transitions: Option<Vec<Transitions>>,
}

/// One conditional-transition entry: when all `predicates` hold, animate to
/// `value` over `duration` milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalStyleTransition<Styles, Predicates> {
    pub predicates: Vec<Predicates>,
    pub duration: i32,
    pub value: Styles,
}

impl<T> BasicStateStylingBlock<T> {
    /// A block with only the default state populated.
    pub fn uniform(default: T) -> Self {
        Self { default, pressed: None, hovered: None, disabled: None }
    }
}

impl<Elements, Transitions> Default for LayoutStyle<Elements, Transitions> {
    fn default() -> Self {
        Self { elements: None, conditional_transitions: None }
    }
}
