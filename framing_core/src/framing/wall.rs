//! # Single Wall Framing
//!
//! Counts the boards and posts for one straight wall span measured between
//! its corner posts.
//!
//! ## Layout Model
//!
//! ```text
//! corner |<-- 240" max -->| post |<-- 240" max -->| ... | corner
//!        [plates, studs @ 16" o.c.]
//! ```
//!
//! - Top and bottom plates are spliced from 96" stock.
//! - Studs stand every 16" on center, plus an end stud.
//! - A post is mandatory whenever a run exceeds 240". Where possible the
//!   runs between posts are laid out as 192" "full board sections" (two
//!   whole boards, no offcut) and only the leftover span is cut to fit.
//!
//! All lengths are inches. Counting functions expect non-negative lengths;
//! [`HouseDimensions`](super::HouseDimensions) guarantees that for every span
//! the engine builds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BOARD_LENGTH, FULL_BOARD_SECTION_SIZE, POST_INTERVAL, POST_WIDTH, STUD_SPACING};

/// Framing for one wall orientation.
///
/// `boards` is the billed count of 2x framing members (`studs + plates`).
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_in": 353.0,
///   "posts": 1,
///   "full_sections": 1,
///   "last_section_in": 157.5,
///   "boards": 31,
///   "studs": 23,
///   "plates": 8
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Span between the corner posts
    pub length_in: f64,

    /// Interior support posts (corners excluded)
    pub posts: u32,

    /// Runs laid out as whole-board sections
    pub full_sections: u32,

    /// Span left over after the full sections and posts
    pub last_section_in: f64,

    /// Studs plus plates
    pub boards: u32,

    /// Vertical studs only
    pub studs: u32,

    /// Top and bottom plate pieces only
    pub plates: u32,
}

/// Convert a non-negative whole-valued float into a count.
fn whole(value: f64) -> u32 {
    value.max(0.0) as u32
}

/// Plate pieces for a span: top and bottom plates, each spliced from
/// [`BOARD_LENGTH`] stock.
pub fn plates_in_length(inches: f64) -> u32 {
    whole((inches / BOARD_LENGTH).ceil() * 2.0)
}

/// Studs for a span at [`STUD_SPACING`] on center.
///
/// An exact multiple of the spacing lands a stud on the far end, and still
/// needs one more to close the run.
pub fn studs_in_length(inches: f64) -> u32 {
    let studs = (inches / STUD_SPACING).ceil();
    let end_stud = if inches % STUD_SPACING == 0.0 { 1.0 } else { 0.0 };
    whole(studs + end_stud)
}

/// Plates plus studs for a span with no intervening post.
pub fn boards_in_length(inches: f64) -> u32 {
    plates_in_length(inches) + studs_in_length(inches)
}

/// 1 when the span is longer than [`POST_INTERVAL`], otherwise 0.
pub fn is_post_required(inches: f64) -> u32 {
    u32::from(inches > POST_INTERVAL)
}

/// Length past the first mandatory interval, clamped at zero.
pub fn wall_length_over_minimum_required_before_post(inches: f64) -> f64 {
    (inches - POST_INTERVAL).max(0.0)
}

/// Interior posts needed for a span.
///
/// Only the length beyond the first interval needs posts, and each post
/// consumes [`POST_WIDTH`] of the span it makes room for.
pub fn required_posts_in_length(inches: f64) -> u32 {
    let over = wall_length_over_minimum_required_before_post(inches);
    whole((over / (POST_INTERVAL + POST_WIDTH)).ceil())
}

/// Number of inter-post runs that can be shortened to a
/// [`FULL_BOARD_SECTION_SIZE`] run without forcing another post.
///
/// Never exceeds `posts`, and is zero when the span needs no post.
pub fn full_sections(inches: f64, posts: u32) -> u32 {
    let inches_reduced_per_section = POST_INTERVAL - FULL_BOARD_SECTION_SIZE;

    // last run if every post sat at the full interval
    let last_section_size = inches - f64::from(posts) * (POST_INTERVAL + POST_WIDTH);
    let remaining_before_new_post = POST_INTERVAL - last_section_size;

    let fits = whole((remaining_before_new_post / inches_reduced_per_section).floor());
    fits.min(posts) * is_post_required(inches)
}

/// Span left to board individually once the posts and full sections are
/// taken out.
pub fn last_section_size(inches: f64, posts: u32) -> f64 {
    let sections = full_sections(inches, posts);
    inches - f64::from(posts) * POST_WIDTH - f64::from(sections) * FULL_BOARD_SECTION_SIZE
}

/// Build the framing for one wall span.
///
/// # Example
///
/// ```rust
/// use framing_core::framing::build_wall;
///
/// let wall = build_wall(353.0);
/// assert_eq!(wall.posts, 1);
/// assert_eq!(wall.boards, 31);
/// assert_eq!(wall.boards, wall.studs + wall.plates);
/// ```
pub fn build_wall(inches: f64) -> Wall {
    let posts = required_posts_in_length(inches);
    let sections = full_sections(inches, posts);
    let last_section_in = last_section_size(inches, posts);

    let studs = studs_in_length(FULL_BOARD_SECTION_SIZE) * sections + studs_in_length(last_section_in);
    let plates = plates_in_length(FULL_BOARD_SECTION_SIZE) * sections + plates_in_length(last_section_in);

    let wall = Wall {
        length_in: inches,
        posts,
        full_sections: sections,
        last_section_in,
        boards: studs + plates,
        studs,
        plates,
    };

    debug!(
        length_in = inches,
        posts,
        full_sections = sections,
        last_section_in,
        boards = wall.boards,
        "built wall"
    );

    wall
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_board_length_counts() {
        assert_eq!(studs_in_length(96.0), 7);
        assert_eq!(plates_in_length(96.0), 2);
        assert_eq!(boards_in_length(96.0), 9);
    }

    #[test]
    fn test_studs_end_stud_only_on_exact_multiple() {
        // ceil(113 / 16) = 8, not a multiple
        assert_eq!(studs_in_length(113.0), 8);
        // 192 / 16 = 12 exactly, plus the end stud
        assert_eq!(studs_in_length(192.0), 13);
        assert_eq!(studs_in_length(0.0), 1);
    }

    #[test]
    fn test_plates_round_up_to_whole_boards() {
        assert_eq!(plates_in_length(97.0), 4);
        assert_eq!(plates_in_length(157.5), 4);
        assert_eq!(plates_in_length(192.0), 4);
    }

    #[test]
    fn test_post_required_threshold() {
        assert_eq!(is_post_required(240.0), 0);
        assert_eq!(is_post_required(240.5), 1);
        assert_eq!(wall_length_over_minimum_required_before_post(100.0), 0.0);
        assert_eq!(wall_length_over_minimum_required_before_post(353.0), 113.0);
    }

    #[test]
    fn test_required_posts() {
        assert_eq!(required_posts_in_length(0.0), 0);
        assert_eq!(required_posts_in_length(240.0), 0);
        assert_eq!(required_posts_in_length(241.0), 1);
        // 240 + 243.5 fits exactly one post
        assert_eq!(required_posts_in_length(483.5), 1);
        assert_eq!(required_posts_in_length(484.0), 2);
    }

    #[test]
    fn test_section_partitioning() {
        // 353": L0 = 109.5, remaining 130.5 -> 2 fit, clamped to 1 post
        assert_eq!(full_sections(353.0, 1), 1);
        assert_eq!(last_section_size(353.0, 1), 157.5);

        // no post, no full sections
        assert_eq!(full_sections(113.0, 0), 0);
        assert_eq!(last_section_size(113.0, 0), 113.0);
    }

    #[test]
    fn test_build_wall_short_span() {
        let wall = build_wall(113.0);
        assert_eq!(wall.posts, 0);
        assert_eq!(wall.full_sections, 0);
        assert_eq!(wall.boards, 12);
        assert_eq!(wall.plates, 4);
        assert_eq!(wall.studs, 8);
    }

    #[test]
    fn test_build_wall_with_post() {
        let wall = build_wall(353.0);
        assert_eq!(wall.posts, 1);
        assert_eq!(wall.full_sections, 1);
        assert_eq!(wall.last_section_in, 157.5);
        // full section 17 boards + leftover 14 boards
        assert_eq!(wall.boards, 31);
        assert_eq!(wall.studs, 23);
        assert_eq!(wall.plates, 8);
    }

    #[test]
    fn test_build_wall_leftover_too_long_for_full_sections() {
        // L0 = 213, only 27" before a new post: floor(27 / 48) = 0
        let wall = build_wall(700.0);
        assert_eq!(wall.posts, 2);
        assert_eq!(wall.full_sections, 0);
        assert_eq!(wall.last_section_in, 693.0);
        assert_eq!(wall.boards, 60);
        assert_eq!(wall.studs, 44);
        assert_eq!(wall.plates, 16);
    }

    #[test]
    fn test_build_wall_two_full_sections() {
        // L0 = 113, 127" before a new post: floor(127 / 48) = 2 = posts
        let wall = build_wall(600.0);
        assert_eq!(wall.posts, 2);
        assert_eq!(wall.full_sections, 2);
        assert_eq!(wall.last_section_in, 209.0);
        assert_eq!(wall.boards, 54);
        assert_eq!(wall.studs, 40);
        assert_eq!(wall.plates, 14);
    }

    #[test]
    fn test_full_sections_limited_by_remaining_span() {
        // 1100": 4 posts, L0 = 126, 114" left -> floor(114 / 48) = 2 < 4
        assert_eq!(required_posts_in_length(1100.0), 4);
        assert_eq!(full_sections(1100.0, 4), 2);
        assert_eq!(last_section_size(1100.0, 4), 702.0);
    }

    #[test]
    fn test_negative_span_frames_nothing() {
        let wall = build_wall(-1.0);
        assert_eq!(wall.posts, 0);
        assert_eq!(wall.boards, 0);
    }

    proptest! {
        #[test]
        fn prop_no_posts_within_interval(inches in 0.0f64..=240.0) {
            prop_assert_eq!(required_posts_in_length(inches), 0);
        }

        #[test]
        fn prop_posts_non_decreasing(inches in 0.0f64..10_000.0, extra in 0.0f64..1_000.0) {
            prop_assert!(build_wall(inches).posts <= build_wall(inches + extra).posts);
        }

        #[test]
        fn prop_boards_split_into_studs_and_plates(inches in 0.0f64..50_000.0) {
            let wall = build_wall(inches);
            prop_assert_eq!(wall.boards, wall.studs + wall.plates);
            prop_assert!(wall.full_sections <= wall.posts);
            prop_assert!(wall.last_section_in >= 0.0);
        }

        #[test]
        fn prop_build_wall_is_pure(inches in 0.0f64..50_000.0) {
            prop_assert_eq!(build_wall(inches), build_wall(inches));
        }
    }
}
