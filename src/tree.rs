//! The layout tree grammars.
//!
//! Which node kinds are legal as children — and which predicate set applies —
//! depends on *context*. Each context is its own closed sum type over node
//! kinds, declared here as a `tagged_union!` table (payload key `node`).
//! The tables are deliberately not collapsed even where two are identical:
//! every context is a distinct closed world, and a node decoded under
//! context C can only ever contain children legal in C, recursively, by
//! construction.
//!
//! Contexts:
//! - general ([`LayoutSchema`]) and its scrollable form
//!   ([`ScrollableChildren`])
//! - layout-variant ([`LayoutVariantSchema`] / [`LayoutVariantChildren`])
//!   and its scrollable form ([`ScrollableLayoutVariantChildren`])
//! - outer layout ([`OuterLayoutSchema`] / [`OuterLayoutChildren`]), its
//!   scrollable form ([`ScrollableOuterLayoutChildren`]) and its modal
//!   surfaces ([`ModalChildren`])
//! - the non-interactable grammars used inside buttons and links
//! - the accessibility-grouped grammar ([`AccessibilityGroupedChildren`])

use crate::macros::tagged_union;
use crate::node::{
    AccessibilityGroupedNode, BasicTextNode, BottomSheetNode, CarouselDistributionNode,
    CloseButtonNode, ColumnNode, CreativeResponseNode, DataImageNode, GroupedDistributionNode,
    OneByOneDistributionNode, OverlayNode, ProgressControlNode, ProgressIndicatorNode,
    RichTextNode, RowNode, ScrollableColumnNode, ScrollableRowNode, StaticImageNode,
    StaticLinkNode, ToggleButtonStateTriggerNode, WhenNode, ZStackNode,
};
use crate::predicate::{LayoutVariantWhenPredicate, OuterLayoutWhenPredicate, WhenPredicate};

tagged_union! {
    /// The general layout tree: every node kind is legal.
    pub enum LayoutSchema, payload_key = "node" {
        "Row" => Row(RowNode<LayoutSchema, WhenPredicate>),
        "Column" => Column(ColumnNode<LayoutSchema, WhenPredicate>),
        "ScrollableColumn" => ScrollableColumn(ScrollableColumnNode<LayoutSchema, WhenPredicate>),
        "ScrollableRow" => ScrollableRow(ScrollableRowNode<LayoutSchema, WhenPredicate>),
        "ZStack" => ZStack(ZStackNode<LayoutSchema, WhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<WhenPredicate>),
        "DataImage" => DataImage(DataImageNode<WhenPredicate>),
        "RichText" => RichText(RichTextNode<WhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<WhenPredicate>),
        "ProgressIndicator" => ProgressIndicator(ProgressIndicatorNode<WhenPredicate>),
        "CreativeResponse" => CreativeResponse(CreativeResponseNode<LayoutSchema, WhenPredicate>),
        "OneByOneDistribution" => OneByOneDistribution(OneByOneDistributionNode<WhenPredicate>),
        "Overlay" => Overlay(OverlayNode<LayoutSchema, WhenPredicate>),
        "BottomSheet" => BottomSheet(BottomSheetNode<LayoutSchema, WhenPredicate>),
        "When" => When(WhenNode<LayoutSchema, WhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<LayoutSchema, WhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<LayoutSchema, WhenPredicate>),
        "CarouselDistribution" => CarouselDistribution(CarouselDistributionNode<WhenPredicate>),
        "ProgressControl" => ProgressControl(ProgressControlNode<LayoutSchema, WhenPredicate>),
        "GroupedDistribution" => GroupedDistribution(GroupedDistributionNode<WhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<LayoutSchema, WhenPredicate>),
    }
}

tagged_union! {
    /// Root of a layout-variant document (the per-offer creative layout).
    /// No distributions, modals or progress chrome at this level.
    pub enum LayoutVariantSchema, payload_key = "node" {
        "Row" => Row(RowNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "Column" => Column(ColumnNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "ScrollableColumn" => ScrollableColumn(ScrollableColumnNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "ScrollableRow" => ScrollableRow(ScrollableRowNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<LayoutVariantWhenPredicate>),
        "DataImage" => DataImage(DataImageNode<LayoutVariantWhenPredicate>),
        "RichText" => RichText(RichTextNode<LayoutVariantWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<LayoutVariantWhenPredicate>),
        "CreativeResponse" => CreativeResponse(CreativeResponseNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "When" => When(WhenNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
    }
}

tagged_union! {
    /// Children of layout-variant containers. Same kind set as
    /// [`LayoutVariantSchema`], kept as its own closed world.
    pub enum LayoutVariantChildren, payload_key = "node" {
        "Row" => Row(RowNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "Column" => Column(ColumnNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "ScrollableColumn" => ScrollableColumn(ScrollableColumnNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "ScrollableRow" => ScrollableRow(ScrollableRowNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<LayoutVariantWhenPredicate>),
        "DataImage" => DataImage(DataImageNode<LayoutVariantWhenPredicate>),
        "RichText" => RichText(RichTextNode<LayoutVariantWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<LayoutVariantWhenPredicate>),
        "CreativeResponse" => CreativeResponse(CreativeResponseNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "When" => When(WhenNode<LayoutVariantChildren, LayoutVariantWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
    }
}

tagged_union! {
    /// Root of the outer layout (placement chrome around distributions).
    /// No data images or creative responses; modal surfaces are legal here.
    pub enum OuterLayoutSchema, payload_key = "node" {
        "Row" => Row(RowNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "Column" => Column(ColumnNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ScrollableColumn" => ScrollableColumn(ScrollableColumnNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ScrollableRow" => ScrollableRow(ScrollableRowNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<OuterLayoutWhenPredicate>),
        "RichText" => RichText(RichTextNode<OuterLayoutWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<OuterLayoutWhenPredicate>),
        "ProgressIndicator" => ProgressIndicator(ProgressIndicatorNode<OuterLayoutWhenPredicate>),
        "OneByOneDistribution" => OneByOneDistribution(OneByOneDistributionNode<OuterLayoutWhenPredicate>),
        "Overlay" => Overlay(OverlayNode<ModalChildren, OuterLayoutWhenPredicate>),
        "BottomSheet" => BottomSheet(BottomSheetNode<ModalChildren, OuterLayoutWhenPredicate>),
        "When" => When(WhenNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CarouselDistribution" => CarouselDistribution(CarouselDistributionNode<OuterLayoutWhenPredicate>),
        "ProgressControl" => ProgressControl(ProgressControlNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "GroupedDistribution" => GroupedDistribution(GroupedDistributionNode<OuterLayoutWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
    }
}

tagged_union! {
    /// Children of outer-layout containers. Modal surfaces are only legal at
    /// the outer root, so Overlay and BottomSheet are absent here.
    pub enum OuterLayoutChildren, payload_key = "node" {
        "Row" => Row(RowNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "Column" => Column(ColumnNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ScrollableColumn" => ScrollableColumn(ScrollableColumnNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ScrollableRow" => ScrollableRow(ScrollableRowNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<OuterLayoutWhenPredicate>),
        "RichText" => RichText(RichTextNode<OuterLayoutWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<OuterLayoutWhenPredicate>),
        "ProgressIndicator" => ProgressIndicator(ProgressIndicatorNode<OuterLayoutWhenPredicate>),
        "OneByOneDistribution" => OneByOneDistribution(OneByOneDistributionNode<OuterLayoutWhenPredicate>),
        "When" => When(WhenNode<OuterLayoutChildren, OuterLayoutWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CarouselDistribution" => CarouselDistribution(CarouselDistributionNode<OuterLayoutWhenPredicate>),
        "ProgressControl" => ProgressControl(ProgressControlNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "GroupedDistribution" => GroupedDistribution(GroupedDistributionNode<OuterLayoutWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
    }
}

tagged_union! {
    /// Children inside a general-context scrollable container. Scrollables
    /// do not nest, and modal surfaces are not legal inside them.
    pub enum ScrollableChildren, payload_key = "node" {
        "Row" => Row(RowNode<ScrollableChildren, WhenPredicate>),
        "Column" => Column(ColumnNode<ScrollableChildren, WhenPredicate>),
        "ZStack" => ZStack(ZStackNode<ScrollableChildren, WhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<WhenPredicate>),
        "DataImage" => DataImage(DataImageNode<WhenPredicate>),
        "RichText" => RichText(RichTextNode<WhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<WhenPredicate>),
        "ProgressIndicator" => ProgressIndicator(ProgressIndicatorNode<WhenPredicate>),
        "CreativeResponse" => CreativeResponse(CreativeResponseNode<LayoutVariantNonInteractableChildren, WhenPredicate>),
        "OneByOneDistribution" => OneByOneDistribution(OneByOneDistributionNode<WhenPredicate>),
        "When" => When(WhenNode<ScrollableChildren, WhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<NonInteractableChildren, WhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<OuterLayoutNonInteractableChildren, WhenPredicate>),
        "CarouselDistribution" => CarouselDistribution(CarouselDistributionNode<WhenPredicate>),
        "ProgressControl" => ProgressControl(ProgressControlNode<OuterLayoutNonInteractableChildren, WhenPredicate>),
        "GroupedDistribution" => GroupedDistribution(GroupedDistributionNode<WhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<NonInteractableChildren, WhenPredicate>),
    }
}

tagged_union! {
    /// Children inside an outer-layout scrollable container.
    pub enum ScrollableOuterLayoutChildren, payload_key = "node" {
        "Row" => Row(RowNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "Column" => Column(ColumnNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<OuterLayoutWhenPredicate>),
        "RichText" => RichText(RichTextNode<OuterLayoutWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<OuterLayoutWhenPredicate>),
        "ProgressIndicator" => ProgressIndicator(ProgressIndicatorNode<OuterLayoutWhenPredicate>),
        "OneByOneDistribution" => OneByOneDistribution(OneByOneDistributionNode<OuterLayoutWhenPredicate>),
        "When" => When(WhenNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CarouselDistribution" => CarouselDistribution(CarouselDistributionNode<OuterLayoutWhenPredicate>),
        "ProgressControl" => ProgressControl(ProgressControlNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "GroupedDistribution" => GroupedDistribution(GroupedDistributionNode<OuterLayoutWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
    }
}

tagged_union! {
    /// Children inside a layout-variant scrollable container.
    pub enum ScrollableLayoutVariantChildren, payload_key = "node" {
        "Row" => Row(RowNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "Column" => Column(ColumnNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "ZStack" => ZStack(ZStackNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "StaticImage" => StaticImage(StaticImageNode<LayoutVariantWhenPredicate>),
        "DataImage" => DataImage(DataImageNode<LayoutVariantWhenPredicate>),
        "RichText" => RichText(RichTextNode<LayoutVariantWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<LayoutVariantWhenPredicate>),
        "CreativeResponse" => CreativeResponse(CreativeResponseNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "When" => When(WhenNode<ScrollableLayoutVariantChildren, LayoutVariantWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
    }
}

tagged_union! {
    /// Children of a modal surface. Scrollables are legal again, but modals
    /// do not nest.
    pub enum ModalChildren, payload_key = "node" {
        "Row" => Row(RowNode<ModalChildren, OuterLayoutWhenPredicate>),
        "ScrollableColumn" => ScrollableColumn(ScrollableColumnNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "ScrollableRow" => ScrollableRow(ScrollableRowNode<ScrollableOuterLayoutChildren, OuterLayoutWhenPredicate>),
        "Column" => Column(ColumnNode<ModalChildren, OuterLayoutWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<ModalChildren, OuterLayoutWhenPredicate>),
        "AccessibilityGrouped" => AccessibilityGrouped(AccessibilityGroupedNode<AccessibilityGroupedChildren>),
        "StaticImage" => StaticImage(StaticImageNode<OuterLayoutWhenPredicate>),
        "RichText" => RichText(RichTextNode<OuterLayoutWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<OuterLayoutWhenPredicate>),
        "ProgressIndicator" => ProgressIndicator(ProgressIndicatorNode<OuterLayoutWhenPredicate>),
        "OneByOneDistribution" => OneByOneDistribution(OneByOneDistributionNode<OuterLayoutWhenPredicate>),
        "When" => When(WhenNode<ModalChildren, OuterLayoutWhenPredicate>),
        "StaticLink" => StaticLink(StaticLinkNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CloseButton" => CloseButton(CloseButtonNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "CarouselDistribution" => CarouselDistribution(CarouselDistributionNode<OuterLayoutWhenPredicate>),
        "ProgressControl" => ProgressControl(ProgressControlNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "GroupedDistribution" => GroupedDistribution(GroupedDistributionNode<OuterLayoutWhenPredicate>),
        "ToggleButtonStateTrigger" => ToggleButtonStateTrigger(ToggleButtonStateTriggerNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
    }
}

tagged_union! {
    /// Content legal inside outer-layout interactive nodes: plain structure
    /// and static content only.
    pub enum OuterLayoutNonInteractableChildren, payload_key = "node" {
        "Row" => Row(RowNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "Column" => Column(ColumnNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
        "StaticImage" => StaticImage(StaticImageNode<OuterLayoutWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<OuterLayoutWhenPredicate>),
        "When" => When(WhenNode<OuterLayoutNonInteractableChildren, OuterLayoutWhenPredicate>),
    }
}

tagged_union! {
    /// Content legal inside layout-variant interactive nodes.
    pub enum LayoutVariantNonInteractableChildren, payload_key = "node" {
        "Row" => Row(RowNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "Column" => Column(ColumnNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "ZStack" => ZStack(ZStackNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<LayoutVariantWhenPredicate>),
        "StaticImage" => StaticImage(StaticImageNode<LayoutVariantWhenPredicate>),
        "DataImage" => DataImage(DataImageNode<LayoutVariantWhenPredicate>),
        "When" => When(WhenNode<LayoutVariantNonInteractableChildren, LayoutVariantWhenPredicate>),
    }
}

tagged_union! {
    /// Content legal inside general-context interactive nodes.
    pub enum NonInteractableChildren, payload_key = "node" {
        "Row" => Row(RowNode<NonInteractableChildren, WhenPredicate>),
        "Column" => Column(ColumnNode<NonInteractableChildren, WhenPredicate>),
        "ZStack" => ZStack(ZStackNode<NonInteractableChildren, WhenPredicate>),
        "BasicText" => BasicText(BasicTextNode<WhenPredicate>),
        "StaticImage" => StaticImage(StaticImageNode<WhenPredicate>),
        "DataImage" => DataImage(DataImageNode<WhenPredicate>),
        "When" => When(WhenNode<NonInteractableChildren, WhenPredicate>),
    }
}

tagged_union! {
    /// Subtree of an accessibility group: plain containers only.
    pub enum AccessibilityGroupedChildren, payload_key = "node" {
        "Row" => Row(RowNode<AccessibilityGroupedChildren, WhenPredicate>),
        "Column" => Column(ColumnNode<AccessibilityGroupedChildren, WhenPredicate>),
        "ZStack" => ZStack(ZStackNode<AccessibilityGroupedChildren, WhenPredicate>),
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::const_assert_eq;

    use super::*;
    use crate::codec::{decode_str, decode_value, encode_value, MAX_DECODE_DEPTH};
    use crate::error::DecodeError;
    use crate::node::{BasicTextNode, RowNode};
    use crate::style::{ConditionalStyleTransition, LayoutStyle};

    // Table arities, pinned at compile time.
    const_assert_eq!(LayoutSchema::TOKENS.len(), 22);
    const_assert_eq!(LayoutVariantSchema::TOKENS.len(), 15);
    const_assert_eq!(LayoutVariantChildren::TOKENS.len(), 15);
    const_assert_eq!(OuterLayoutSchema::TOKENS.len(), 20);
    const_assert_eq!(OuterLayoutChildren::TOKENS.len(), 18);
    const_assert_eq!(ScrollableChildren::TOKENS.len(), 18);
    const_assert_eq!(ScrollableOuterLayoutChildren::TOKENS.len(), 16);
    const_assert_eq!(ScrollableLayoutVariantChildren::TOKENS.len(), 12);
    const_assert_eq!(ModalChildren::TOKENS.len(), 18);
    const_assert_eq!(OuterLayoutNonInteractableChildren::TOKENS.len(), 6);
    const_assert_eq!(LayoutVariantNonInteractableChildren::TOKENS.len(), 7);
    const_assert_eq!(NonInteractableChildren::TOKENS.len(), 7);
    const_assert_eq!(AccessibilityGroupedChildren::TOKENS.len(), 3);

    #[test]
    fn test_general_token_table() {
        assert_eq!(
            LayoutSchema::TOKENS,
            &[
                "Row",
                "Column",
                "ScrollableColumn",
                "ScrollableRow",
                "ZStack",
                "AccessibilityGrouped",
                "StaticImage",
                "DataImage",
                "RichText",
                "BasicText",
                "ProgressIndicator",
                "CreativeResponse",
                "OneByOneDistribution",
                "Overlay",
                "BottomSheet",
                "When",
                "StaticLink",
                "CloseButton",
                "CarouselDistribution",
                "ProgressControl",
                "GroupedDistribution",
                "ToggleButtonStateTrigger",
            ][..]
        );
    }

    #[test]
    fn test_restricted_tables_are_subsets_of_general() {
        let general = LayoutSchema::TOKENS;
        for token in OuterLayoutSchema::TOKENS
            .iter()
            .chain(LayoutVariantChildren::TOKENS)
            .chain(ScrollableChildren::TOKENS)
            .chain(ModalChildren::TOKENS)
            .chain(NonInteractableChildren::TOKENS)
            .chain(AccessibilityGroupedChildren::TOKENS)
        {
            assert!(general.contains(token), "`{token}` missing from the general table");
        }
    }

    #[test]
    fn test_context_exclusions() {
        assert!(!OuterLayoutSchema::TOKENS.contains(&"DataImage"));
        assert!(!OuterLayoutSchema::TOKENS.contains(&"CreativeResponse"));
        assert!(!OuterLayoutChildren::TOKENS.contains(&"Overlay"));
        assert!(!OuterLayoutChildren::TOKENS.contains(&"BottomSheet"));
        assert!(!ScrollableChildren::TOKENS.contains(&"ScrollableColumn"));
        assert!(!ModalChildren::TOKENS.contains(&"Overlay"));
        assert!(!NonInteractableChildren::TOKENS.contains(&"StaticLink"));
        assert!(ModalChildren::TOKENS.contains(&"ScrollableColumn"));
    }

    #[test]
    fn test_row_with_basic_text_child() {
        let node: LayoutSchema = decode_str(
            r#"{"type":"Row","node":{"children":[{"type":"BasicText","node":{"value":"hi"}}]}}"#,
        )
        .unwrap();
        let LayoutSchema::Row(row) = &node else {
            panic!("expected a Row, got {node:?}");
        };
        assert_eq!(row.children.len(), 1);
        let LayoutSchema::BasicText(text) = &row.children[0] else {
            panic!("expected a BasicText child");
        };
        assert_eq!(text.value, "hi");

        let encoded = encode_value(&node).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "type": "Row",
                "node": {"children": [{"type": "BasicText", "node": {"value": "hi"}}]}
            })
        );
    }

    #[test]
    fn test_unknown_kind_fails_in_every_context() {
        let doc = r#"{"type":"Circle","node":{}}"#;
        fn expect_unrecognized<T: serde::de::DeserializeOwned + std::fmt::Debug>(doc: &str) {
            match decode_str::<T>(doc) {
                Err(DecodeError::UnrecognizedDiscriminator { token, .. }) => {
                    assert_eq!(token, "Circle");
                }
                other => panic!("expected UnrecognizedDiscriminator, got {other:?}"),
            }
        }
        expect_unrecognized::<LayoutSchema>(doc);
        expect_unrecognized::<LayoutVariantSchema>(doc);
        expect_unrecognized::<LayoutVariantChildren>(doc);
        expect_unrecognized::<OuterLayoutSchema>(doc);
        expect_unrecognized::<OuterLayoutChildren>(doc);
        expect_unrecognized::<ScrollableChildren>(doc);
        expect_unrecognized::<ScrollableOuterLayoutChildren>(doc);
        expect_unrecognized::<ScrollableLayoutVariantChildren>(doc);
        expect_unrecognized::<ModalChildren>(doc);
        expect_unrecognized::<OuterLayoutNonInteractableChildren>(doc);
        expect_unrecognized::<LayoutVariantNonInteractableChildren>(doc);
        expect_unrecognized::<NonInteractableChildren>(doc);
        expect_unrecognized::<AccessibilityGroupedChildren>(doc);
    }

    #[test]
    fn test_closed_grammar_rejects_out_of_context_child() {
        // CarouselDistribution is a real kind, but not inside an
        // accessibility group.
        let err = decode_str::<AccessibilityGroupedChildren>(
            r#"{"type":"CarouselDistribution","node":{"viewableItems":[1],"peekThroughSize":[]}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedDiscriminator {
                family: "AccessibilityGroupedChildren",
                ref token,
            } if token == "CarouselDistribution"
        ));

        // The same payload under the general context is fine.
        assert!(decode_str::<LayoutSchema>(
            r#"{"type":"CarouselDistribution","node":{"viewableItems":[1],"peekThroughSize":[]}}"#,
        )
        .is_ok());
    }

    #[test]
    fn test_child_error_propagates_as_root_cause() {
        // The bad discriminator sits two levels down; the reported error
        // must name it, not the enclosing Row payloads.
        let err = decode_str::<LayoutSchema>(
            r#"{"type":"Row","node":{"children":[
                {"type":"Row","node":{"children":[{"type":"Circle","node":{}}]}}
            ]}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedDiscriminator { family: "LayoutSchema", ref token }
                if token == "Circle"
        ));
    }

    #[test]
    fn test_missing_discriminator() {
        let err = decode_str::<LayoutSchema>(r#"{"node":{"children":[]}}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingDiscriminator { family: "LayoutSchema" }
        ));

        // A non-string discriminator is just as unusable.
        let err = decode_str::<LayoutSchema>(r#"{"type":7,"node":{"children":[]}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MissingDiscriminator { .. }));
    }

    #[test]
    fn test_recognized_token_with_foreign_payload_is_mismatch() {
        // A BasicText payload under the Overlay token: the discriminator
        // decides the target type, and Overlay's own shape rejects this.
        let err = decode_str::<LayoutSchema>(
            r#"{"type":"Overlay","node":{"value":"hi"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::PayloadMismatch { family: "LayoutSchema", token: "Overlay", .. }
        ));
    }

    #[test]
    fn test_envelope_extra_keys_ignored() {
        let node: LayoutSchema = decode_str(
            r#"{"type":"BasicText","unknown":1,"node":{"value":"x"}}"#,
        )
        .unwrap();
        assert!(node.is_basic_text());
    }

    #[test]
    fn test_envelope_field_order_is_insignificant() {
        let node: LayoutSchema =
            decode_str(r#"{"node":{"value":"x"},"type":"BasicText"}"#).unwrap();
        assert_eq!(node.as_basic_text().unwrap().value, "x");
    }

    #[test]
    fn test_conditional_transitions_preserve_order() {
        let entries: Vec<i32> = (0..5).collect();
        let transitions: Vec<_> = entries
            .iter()
            .map(|i| ConditionalStyleTransition {
                predicates: Vec::<WhenPredicate>::new(),
                duration: *i * 100,
                value: crate::node::RowTransitions::default(),
            })
            .collect();
        let row = LayoutSchema::Row(RowNode {
            styles: Some(LayoutStyle {
                elements: None,
                conditional_transitions: Some(transitions),
            }),
            children: vec![],
        });

        let encoded = encode_value(&row).unwrap();
        let durations: Vec<i64> = encoded["node"]["styles"]["conditionalTransitions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["duration"].as_i64().unwrap())
            .collect();
        assert_eq!(durations, vec![0, 100, 200, 300, 400]);

        let back: LayoutSchema = decode_value(encoded).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_layout_variant_roundtrip() {
        let doc = r#"{"type":"Column","node":{"children":[
            {"type":"DataImage","node":{"imageKey":"creative.hero"}},
            {"type":"CreativeResponse","node":{
                "responseKey":"negative",
                "children":[{"type":"BasicText","node":{"value":"No thanks"}}]
            }},
            {"type":"When","node":{
                "predicates":[{"type":"DomainState","predicate":{
                    "key":"offerComplete","condition":"is","value":1
                }}],
                "children":[]
            }}
        ]}}"#;
        let node: LayoutVariantSchema = decode_str(doc).unwrap();
        let encoded = encode_value(&node).unwrap();
        let back: LayoutVariantSchema = decode_value(encoded).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_interactive_children_are_non_interactable() {
        // In a layout variant, a response button cannot nest another
        // interactive node.
        let err = decode_str::<LayoutVariantSchema>(
            r#"{"type":"CreativeResponse","node":{
                "responseKey":"positive",
                "children":[{"type":"StaticLink","node":{
                    "src":"https://example.com","open":"internally","children":[]
                }}]
            }}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnrecognizedDiscriminator {
                family: "LayoutVariantNonInteractableChildren",
                ref token,
            } if token == "StaticLink"
        ));
    }

    #[test]
    fn test_deep_tree_roundtrip() {
        let mut node = LayoutSchema::BasicText(BasicTextNode { styles: None, value: "leaf".into() });
        for _ in 0..40 {
            node = LayoutSchema::Column(crate::node::ColumnNode {
                styles: None,
                children: vec![node],
            });
        }
        let encoded = encode_value(&node).unwrap();
        let back: LayoutSchema = decode_value(encoded).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_parser_depth_limit_reported_as_recursion() {
        // Deep raw JSON trips the text parser's own nesting limit; that is
        // surfaced through the same error kind as the union depth guard.
        let mut doc = String::new();
        for _ in 0..150 {
            doc.push_str(r#"{"type":"Column","node":{"children":["#);
        }
        doc.push_str(r#"{"type":"BasicText","node":{"value":"x"}}"#);
        for _ in 0..150 {
            doc.push_str("]}}");
        }
        let err = decode_str::<LayoutSchema>(&doc).unwrap_err();
        assert!(matches!(err, DecodeError::RecursionLimitExceeded { .. }));
    }

    #[test]
    fn test_recursion_limit() {
        // Build a Value nested beyond the depth bound without going through
        // the parser.
        let mut value = serde_json::json!({"type": "BasicText", "node": {"value": "x"}});
        for _ in 0..MAX_DECODE_DEPTH + 8 {
            value = serde_json::json!({"type": "Column", "node": {"children": [value]}});
        }
        let err = decode_value::<LayoutSchema>(value).unwrap_err();
        assert!(matches!(err, DecodeError::RecursionLimitExceeded { .. }));
    }

    #[test]
    fn test_roundtrip_every_kind_in_general_context() {
        let documents = [
            r#"{"type":"Row","node":{"children":[]}}"#,
            r#"{"type":"Column","node":{"children":[]}}"#,
            r#"{"type":"ScrollableColumn","node":{"children":[]}}"#,
            r#"{"type":"ScrollableRow","node":{"children":[]}}"#,
            r#"{"type":"ZStack","node":{"children":[]}}"#,
            r#"{"type":"AccessibilityGrouped","node":{"child":{"type":"Column","node":{"children":[]}}}}"#,
            r#"{"type":"StaticImage","node":{"url":{"light":"https://cdn.example/a.png"}}}"#,
            r#"{"type":"DataImage","node":{"imageKey":"creative.image"}}"#,
            r#"{"type":"RichText","node":{"value":"<b>hi</b>"}}"#,
            r#"{"type":"BasicText","node":{"value":"hi"}}"#,
            r#"{"type":"ProgressIndicator","node":{"indicator":"%^STATE.IndicatorPosition^%"}}"#,
            r#"{"type":"CreativeResponse","node":{"responseKey":"positive","children":[]}}"#,
            r#"{"type":"OneByOneDistribution","node":{"transition":{"type":"FadeInOut","settings":{"duration":200}}}}"#,
            r#"{"type":"Overlay","node":{"allowBackdropToClose":true,"children":[]}}"#,
            r#"{"type":"BottomSheet","node":{"allowBackdropToClose":false,"children":[]}}"#,
            r#"{"type":"When","node":{"predicates":[],"children":[]}}"#,
            r#"{"type":"StaticLink","node":{"src":"https://example.com","open":"externally","children":[]}}"#,
            r#"{"type":"CloseButton","node":{"children":[]}}"#,
            r#"{"type":"CarouselDistribution","node":{"viewableItems":[1,2],"peekThroughSize":[{"type":"Percentage","value":10.0}]}}"#,
            r#"{"type":"ProgressControl","node":{"direction":"Forward","children":[]}}"#,
            r#"{"type":"GroupedDistribution","node":{"viewableItems":[2],"transition":{"type":"FadeInOut","settings":{"duration":150}}}}"#,
            r#"{"type":"ToggleButtonStateTrigger","node":{"children":[],"customStateKey":"expanded"}}"#,
        ];
        for document in documents {
            let node: LayoutSchema = decode_str(document).unwrap();
            let expected_token = serde_json::from_str::<serde_json::Value>(document).unwrap()
                ["type"]
                .as_str()
                .unwrap()
                .to_string();
            assert_eq!(node.discriminator(), expected_token);

            let encoded = encode_value(&node).unwrap();
            let back: LayoutSchema = decode_value(encoded).unwrap();
            assert_eq!(back, node, "round-trip failed for {expected_token}");
        }
    }
}
