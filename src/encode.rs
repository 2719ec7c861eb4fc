use crate::graph::ModeMembership;
use crate::retrieval::{RetrievalMode, RetrievedIdSet};

/// Border width applied to a node when a highlight channel is on.
pub const HIGHLIGHT_BORDER_WIDTH: f32 = 8.0;

/// Minimum rendered diameter so sparsely cited cases stay legible.
const MIN_NODE_DIAMETER: f32 = 15.0;

/// Maps a recall percentage onto a red→green gradient, returned as a
/// `#rrggbb` hex string. Inputs outside [0, 100] saturate.
pub fn recall_color(percentage: f64) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    // Red is the complement of green; rounding the channels separately
    // would push half-way values like 127.5 up on both.
    let green = (255.0 * (clamped / 100.0)).round() as u8;
    let red = 255 - green;
    format!("#{red:02x}{green:02x}00")
}

/// Rendered diameter for a case node: linear in its inbound citation
/// count, floored at the legibility minimum.
pub fn node_diameter(reference_count: u32) -> f32 {
    ((reference_count * 3) as f32).max(MIN_NODE_DIAMETER)
}

/// Border width for the "would this mode surface this case" channel.
///
/// Keyed only on the currently active mode, so switching modes re-derives
/// every node's highlight without re-fetching anything.
pub fn mode_strength(mode: RetrievalMode, membership: ModeMembership) -> f32 {
    if membership.covers(mode) {
        HIGHLIGHT_BORDER_WIDTH
    } else {
        0.0
    }
}

/// Border width for the "did this query actually retrieve this case"
/// channel. Independent of `mode_strength`; conflating the two would make
/// false negatives and false positives indistinguishable.
pub fn retrieval_strength(id: &str, retrieved: &RetrievedIdSet) -> f32 {
    if retrieved.contains(id) {
        HIGHLIGHT_BORDER_WIDTH
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [RetrievalMode; 3] = [
        RetrievalMode::Vector,
        RetrievalMode::Semantic,
        RetrievalMode::GraphRag,
    ];

    #[test]
    fn recall_color_endpoints() {
        assert_eq!(recall_color(0.0), "#ff0000");
        assert_eq!(recall_color(100.0), "#00ff00");
    }

    #[test]
    fn recall_color_midpoint_keeps_channels_complementary() {
        // 255 * 0.5 = 127.5 rounds up to 0x80 green; red is its complement.
        assert_eq!(recall_color(50.0), "#7f8000");
    }

    #[test]
    fn recall_color_channels_always_sum_to_full_intensity() {
        for percentage in [0.0, 12.5, 33.0, 50.0, 66.7, 90.0, 100.0] {
            let hex = recall_color(percentage);
            let red = u8::from_str_radix(&hex[1..3], 16).unwrap();
            let green = u8::from_str_radix(&hex[3..5], 16).unwrap();
            assert_eq!(red as u16 + green as u16, 255, "at {percentage}");
        }
    }

    #[test]
    fn recall_color_saturates_out_of_range() {
        assert_eq!(recall_color(-40.0), recall_color(0.0));
        assert_eq!(recall_color(170.0), recall_color(100.0));
        assert_eq!(recall_color(f64::NEG_INFINITY), "#ff0000");
    }

    #[test]
    fn node_diameter_floors_at_minimum() {
        assert_eq!(node_diameter(0), 15.0);
        assert_eq!(node_diameter(5), 15.0);
    }

    #[test]
    fn node_diameter_scales_linearly_above_floor() {
        assert_eq!(node_diameter(10), 30.0);
        assert_eq!(node_diameter(40), 120.0);
    }

    #[test]
    fn mode_strength_is_eight_or_zero_for_every_mode() {
        for mode in ALL_MODES {
            let member = ModeMembership {
                vector: true,
                semantic: true,
                graph_rag: true,
            };
            assert_eq!(mode_strength(mode, member), 8.0);
            assert_eq!(mode_strength(mode, ModeMembership::NONE), 0.0);
        }
    }

    #[test]
    fn mode_strength_respects_per_mode_flags() {
        let semantic_only = ModeMembership {
            vector: false,
            semantic: true,
            graph_rag: false,
        };
        assert_eq!(mode_strength(RetrievalMode::Semantic, semantic_only), 8.0);
        assert_eq!(mode_strength(RetrievalMode::Vector, semantic_only), 0.0);
        assert_eq!(mode_strength(RetrievalMode::GraphRag, semantic_only), 0.0);
    }

    #[test]
    fn retrieval_strength_tracks_set_membership() {
        let retrieved: RetrievedIdSet =
            ["615468".to_owned(), "1127907".to_owned()].into_iter().collect();
        assert_eq!(retrieval_strength("615468", &retrieved), 8.0);
        assert_eq!(retrieval_strength("999999", &retrieved), 0.0);
        assert_eq!(retrieval_strength("615468", &RetrievedIdSet::new()), 0.0);
    }
}
