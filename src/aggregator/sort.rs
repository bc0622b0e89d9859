//! Final settle sort: the one-time reordering pass after completion.
//!
//! Intermediate renders are arrival-ordered; only once every provider
//! has reported does the accumulated list get sorted, by title with
//! ties broken by source name. The sort is stable, so items identical
//! in both keys keep their arrival order.
//!
//! Comparison is Unicode code-point order (`str::cmp`), a deterministic
//! stand-in for locale collation.

use crate::types::VideoItem;
use std::cmp::Ordering;

/// Sort the accumulated results into settled order, in place.
pub fn settle(items: &mut [VideoItem]) {
    items.sort_by(compare);
}

/// Settled ordering: title first, source name as tie-breaker.
fn compare(a: &VideoItem, b: &VideoItem) -> Ordering {
    a.title
        .cmp(&b.title)
        .then_with(|| a.source_name.cmp(&b.source_name))
}
