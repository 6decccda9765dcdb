//! Offer distribution containers.
//!
//! Distributions place creative content one offer at a time (`OneByOne`), in
//! a swipeable strip (`Carousel`) or in visible groups (`Grouped`). They are
//! leaves of the layout tree: the distributed content comes from a separate
//! layout-variant document, not from authored children.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::transition::Transition;
use crate::values::PeekThroughSize;

use super::{NodeStyles, container_style, own_style_block};

container_style! {
    /// Styling for a one-by-one distribution.
    OneByOneDistributionStyle,
    /// Styling for a carousel distribution.
    CarouselDistributionStyle,
    /// Styling for a grouped distribution.
    GroupedDistributionStyle,
}

own_style_block! {
    OneByOneDistributionElements / OneByOneDistributionTransitions: stateless OneByOneDistributionStyle,
    CarouselDistributionElements / CarouselDistributionTransitions: stateless CarouselDistributionStyle,
    GroupedDistributionElements / GroupedDistributionTransitions: stateless GroupedDistributionStyle,
}

/// Shows one offer at a time, advancing with `transition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneByOneDistributionNode<P> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<OneByOneDistributionElements, OneByOneDistributionTransitions, P>>,
    pub transition: Transition,
}

/// A swipeable strip of offers.
///
/// `viewable_items` and `peek_through_size` are breakpoint-indexed: entry
/// *i* applies from the *i*-th breakpoint upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselDistributionNode<P> {
    pub viewable_items: SmallVec<[u8; 4]>,
    pub peek_through_size: SmallVec<[PeekThroughSize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<CarouselDistributionElements, CarouselDistributionTransitions, P>>,
}

/// Pages through offers in fixed-size groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedDistributionNode<P> {
    /// Breakpoint-indexed group sizes.
    pub viewable_items: SmallVec<[u8; 4]>,
    pub transition: Transition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<NodeStyles<GroupedDistributionElements, GroupedDistributionTransitions, P>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode_string, encode_value};
    use crate::predicate::WhenPredicate;
    use crate::transition::FadeInOutTransitionSettings;
    use smallvec::smallvec;

    #[test]
    fn test_carousel_roundtrip() {
        let node = CarouselDistributionNode::<WhenPredicate> {
            viewable_items: smallvec![1, 2, 3],
            peek_through_size: smallvec![
                PeekThroughSize::Fixed(24.0),
                PeekThroughSize::Percentage(10.0),
            ],
            styles: None,
        };
        let json = encode_string(&node).unwrap();
        let back: CarouselDistributionNode<WhenPredicate> = decode_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_carousel_wire_shape() {
        let node = CarouselDistributionNode::<WhenPredicate> {
            viewable_items: smallvec![2],
            peek_through_size: smallvec![PeekThroughSize::Fixed(16.0)],
            styles: None,
        };
        assert_eq!(
            encode_value(&node).unwrap(),
            serde_json::json!({
                "viewableItems": [2],
                "peekThroughSize": [{"type": "Fixed", "value": 16.0}]
            })
        );
    }

    #[test]
    fn test_grouped_requires_transition() {
        assert!(
            decode_str::<GroupedDistributionNode<WhenPredicate>>(r#"{"viewableItems":[1]}"#)
                .is_err()
        );
    }

    #[test]
    fn test_one_by_one_transition() {
        let node: OneByOneDistributionNode<WhenPredicate> = decode_str(
            r#"{"transition":{"type":"FadeInOut","settings":{"duration":250}}}"#,
        )
        .unwrap();
        assert_eq!(
            node.transition,
            Transition::FadeInOut(FadeInOutTransitionSettings { duration: 250 })
        );
    }
}
