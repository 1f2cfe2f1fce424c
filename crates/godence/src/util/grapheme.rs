//! Single-grapheme checks for Cadence `Character` values.

use unicode_segmentation::UnicodeSegmentation;

/// Returns true when `s` holds exactly one extended grapheme cluster.
pub fn is_single_grapheme(s: &str) -> bool {
    let mut clusters = s.graphemes(true);
    clusters.next().is_some() && clusters.next().is_none()
}
