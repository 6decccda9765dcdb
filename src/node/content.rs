//! Content leaves: images, text and the progress indicator.

use serde::{Deserialize, Serialize};

use crate::style::{
    BackgroundStylingProperties, BasicStateStylingBlock, BorderStylingProperties,
    ContainerStylingProperties, DimensionStylingProperties, FlexChildStylingProperties,
    InlineTextStylingProperties, SpacingStylingProperties, TextStylingProperties,
};

use super::{LinkOpenTarget, NodeStyles, container_style, own_style_block};

// =============================================================================
// Images
// =============================================================================

/// Styling for image leaves. Images are not containers, so there is no
/// container bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticImageStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChildStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingStylingProperties>,
}

/// Styling for data-bound image leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImageStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChildStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingStylingProperties>,
}

own_style_block! {
    StaticImageElements / StaticImageTransitions: stateful StaticImageStyle,
    DataImageElements / DataImageTransitions: stateful DataImageStyle,
}

/// An image URL pair with an optional dark-mode source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticImageUrl {
    pub light: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

/// An image with an authored URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticImageNode<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<StaticImageElements, StaticImageTransitions, P>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: StaticImageUrl,
}

/// An image whose source is looked up from creative data by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImageNode<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<DataImageElements, DataImageTransitions, P>>,
    pub image_key: String,
}

// =============================================================================
// Text
// =============================================================================

/// Styling for plain text leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChildStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStylingProperties>,
}

/// Styling for markup-capable text leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChildStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStylingProperties>,
}

/// Styling for inline link spans inside rich text. The text properties are
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineTextStyle {
    pub text: InlineTextStylingProperties,
}

own_style_block! {
    BasicTextElements / BasicTextTransitions: stateful BasicTextStyle,
}

/// Named sub-part styles for rich text: the block itself plus embedded link
/// spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextElements {
    pub own: Vec<BasicStateStylingBlock<RichTextStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<BasicStateStylingBlock<InlineTextStyle>>>,
}

/// Transition deltas for rich text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextTransitions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own: Option<RichTextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<InlineTextStyle>,
}

/// A plain text leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicTextNode<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<BasicTextElements, BasicTextTransitions, P>>,
    pub value: String,
}

/// A text leaf whose value may carry markup and embedded links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextNode<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<RichTextElements, RichTextTransitions, P>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_links: Option<LinkOpenTarget>,
    pub value: String,
}

// =============================================================================
// Progress indicator
// =============================================================================

container_style! {
    /// Styling for the indicator strip itself.
    ProgressIndicatorStyle,
}

/// Styling for an individual indicator dot/label. Carries text properties so
/// indicators can render position numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChildStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStylingProperties>,
}

/// Named sub-part styles for the progress indicator: the strip, every
/// indicator, and optional overrides for the active and already-seen ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressIndicatorElements {
    pub own: Vec<BasicStateStylingBlock<ProgressIndicatorStyle>>,
    pub indicator: Vec<BasicStateStylingBlock<IndicatorStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_indicator: Option<Vec<BasicStateStylingBlock<IndicatorStyle>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_indicator: Option<Vec<BasicStateStylingBlock<IndicatorStyle>>>,
}

/// Transition deltas for the progress indicator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressIndicatorTransitions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own: Option<ProgressIndicatorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<IndicatorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_indicator: Option<IndicatorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_indicator: Option<IndicatorStyle>,
}

/// Progress dots/labels for a multi-offer distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressIndicatorNode<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ProgressIndicatorElements, ProgressIndicatorTransitions, P>>,
    /// Data binding for the indicator text (e.g. a position placeholder).
    pub indicator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_hidden: Option<bool>,
}
