//! Container nodes: Row, Column, their scrollable variants, ZStack and the
//! accessibility grouping wrapper.

use serde::{Deserialize, Serialize};

use crate::style::{
    BackgroundStylingProperties, BorderStylingProperties, DimensionStylingProperties,
    FlexChildStylingProperties, SpacingStylingProperties, ZStackContainerStylingProperties,
};

use super::{NodeStyles, container_style, own_style_block};

container_style! {
    /// Styling for a horizontal flex container.
    RowStyle,
    /// Styling for a vertical flex container.
    ColumnStyle,
    /// Styling for a vertically scrolling column.
    ScrollableColumnStyle,
    /// Styling for a horizontally scrolling row.
    ScrollableRowStyle,
}

/// Styling for a depth-stacked container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZStackStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ZStackContainerStylingProperties>,
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
    RowElements / RowTransitions: stateful RowStyle,
    ColumnElements / ColumnTransitions: stateful ColumnStyle,
    ScrollableColumnElements / ScrollableColumnTransitions: stateful ScrollableColumnStyle,
    ScrollableRowElements / ScrollableRowTransitions: stateful ScrollableRowStyle,
    ZStackElements / ZStackTransitions: stateful ZStackStyle,
}

/// A horizontal flex container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<RowElements, RowTransitions, P>>,
    pub children: Vec<C>,
}

/// A vertical flex container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ColumnElements, ColumnTransitions, P>>,
    pub children: Vec<C>,
}

/// A vertically scrolling column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollableColumnNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ScrollableColumnElements, ScrollableColumnTransitions, P>>,
    pub children: Vec<C>,
}

/// A horizontally scrolling row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollableRowNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ScrollableRowElements, ScrollableRowTransitions, P>>,
    pub children: Vec<C>,
}

/// A container stacking children along the z axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZStackNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ZStackElements, ZStackTransitions, P>>,
    pub children: Vec<C>,
}

/// Wraps a single subtree that assistive technology should announce as one
/// element. The child grammar is restricted to plain containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityGroupedNode<T> {
    pub child: T,
}
