//! Modal surfaces and conditional visibility.
//!
//! `Overlay` and `BottomSheet` are the two modal surfaces; both style a
//! backdrop `wrapper` sub-part in addition to themselves. `When` gates a
//! subtree behind a predicate list.

use serde::{Deserialize, Serialize};

use crate::style::{BackgroundStylingProperties, BasicStateStylingBlock, ContainerStylingProperties};
use crate::transition::WhenTransition;

use super::{NodeStyles, container_style};

container_style! {
    /// Styling for a centered overlay surface.
    OverlayStyle,
    /// Styling for a bottom sheet surface.
    BottomSheetStyle,
}

/// Styling for the overlay backdrop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayWrapperStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
}

/// Styling for the bottom sheet backdrop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomSheetWrapperStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerStylingProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStylingProperties>,
}

/// Named sub-part styles for an overlay: the surface and its backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayElements {
    pub own: Vec<BasicStateStylingBlock<OverlayStyle>>,
    pub wrapper: Vec<BasicStateStylingBlock<OverlayWrapperStyle>>,
}

/// Transition deltas for an overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayTransitions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own: Option<OverlayStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<OverlayWrapperStyle>,
}

/// Named sub-part styles for a bottom sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomSheetElements {
    pub own: Vec<BasicStateStylingBlock<BottomSheetStyle>>,
    pub wrapper: Vec<BasicStateStylingBlock<BottomSheetWrapperStyle>>,
}

/// Transition deltas for a bottom sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomSheetTransitions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own: Option<BottomSheetStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<BottomSheetWrapperStyle>,
}

/// A modal surface centered over the placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayNode<C, P> {
    pub allow_backdrop_to_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<OverlayElements, OverlayTransitions, P>>,
    pub children: Vec<C>,
}

/// A modal surface anchored to the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomSheetNode<C, P> {
    pub allow_backdrop_to_close: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<BottomSheetElements, BottomSheetTransitions, P>>,
    pub children: Vec<C>,
}

/// How hidden `When` content is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhenHidden {
    /// Hidden from view but still occupying the tree.
    Visually,
    /// Removed from the tree entirely.
    Functionally,
}

/// Shows its children only while every predicate holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenNode<C, P> {
    pub predicates: Vec<P>,
    pub children: Vec<C>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<WhenTransition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide: Option<WhenHidden>,
}
