//! Interactive nodes: response buttons, links, close/progress controls and
//! custom-state toggles.
//!
//! Interactive kinds hold children typed to a *non-interactable* grammar in
//! most contexts, so a button can never nest another button.

use serde::{Deserialize, Serialize};

use super::{LinkOpenTarget, NodeStyles, container_style, own_style_block};

container_style! {
    /// Styling for a creative response button.
    CreativeResponseStyle,
    /// Styling for an authored link.
    StaticLinkStyle,
    /// Styling for the close button.
    CloseButtonStyle,
    /// Styling for a progression control.
    ProgressControlStyle,
    /// Styling for a custom-state toggle button.
    ToggleButtonStateTriggerStyle,
}

own_style_block! {
    CreativeResponseElements / CreativeResponseTransitions: stateful CreativeResponseStyle,
    StaticLinkElements / StaticLinkTransitions: stateful StaticLinkStyle,
    CloseButtonElements / CloseButtonTransitions: stateful CloseButtonStyle,
    ProgressControlElements / ProgressControlTransitions: stateful ProgressControlStyle,
    ToggleButtonStateTriggerElements / ToggleButtonStateTriggerTransitions: stateful ToggleButtonStateTriggerStyle,
}

/// Which way a progress control advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionDirection {
    Forward,
    Backward,
}

/// A button that records a response against a creative response key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeResponseNode<C, P> {
    pub response_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<CreativeResponseElements, CreativeResponseTransitions, P>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_links: Option<LinkOpenTarget>,
    pub children: Vec<C>,
}

/// An authored link wrapping non-interactable content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticLinkNode<C, P> {
    pub src: String,
    pub open: LinkOpenTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<StaticLinkElements, StaticLinkTransitions, P>>,
    pub children: Vec<C>,
}

/// Dismisses the enclosing placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseButtonNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<CloseButtonElements, CloseButtonTransitions, P>>,
    pub children: Vec<C>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismissal_method: Option<String>,
}

/// Advances or rewinds a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressControlNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ProgressControlElements, ProgressControlTransitions, P>>,
    pub direction: ProgressionDirection,
    pub children: Vec<C>,
}

/// Toggles a renderer-managed custom state value when activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleButtonStateTriggerNode<C, P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<ToggleButtonStateTriggerElements, ToggleButtonStateTriggerTransitions, P>>,
    pub children: Vec<C>,
    pub custom_state_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode_string, encode_value};
    use crate::predicate::WhenPredicate;
    use crate::tree::NonInteractableChildren;

    #[test]
    fn test_progression_direction_tokens() {
        // Direction tokens are capitalized on the wire.
        assert_eq!(encode_value(&ProgressionDirection::Forward).unwrap(), "Forward");
        assert_eq!(encode_value(&ProgressionDirection::Backward).unwrap(), "Backward");
        assert!(decode_str::<ProgressionDirection>("\"forward\"").is_err());
    }

    #[test]
    fn test_creative_response_fields() {
        let json = r#"{
            "responseKey": "positive",
            "openLinks": "externally",
            "children": []
        }"#;
        let node: CreativeResponseNode<NonInteractableChildren, WhenPredicate> =
            decode_str(json).unwrap();
        assert_eq!(node.response_key, "positive");
        assert_eq!(node.open_links, Some(LinkOpenTarget::Externally));
    }

    #[test]
    fn test_static_link_open_is_required() {
        let json = r#"{"src":"https://example.com","children":[]}"#;
        assert!(
            decode_str::<StaticLinkNode<NonInteractableChildren, WhenPredicate>>(json).is_err()
        );
    }

    #[test]
    fn test_toggle_button_roundtrip() {
        let node = ToggleButtonStateTriggerNode::<NonInteractableChildren, WhenPredicate> {
            styles: None,
            children: vec![],
            custom_state_key: "expanded".into(),
        };
        let json = encode_string(&node).unwrap();
        assert!(json.contains("customStateKey"));
        let back: ToggleButtonStateTriggerNode<NonInteractableChildren, WhenPredicate> =
            decode_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
