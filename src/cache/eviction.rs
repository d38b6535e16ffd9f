//! Eviction Module
//!
//! Picks the entry to drop when the cache is at capacity: the entry with the
//! fewest hits, and among those the oldest insertion.

use crate::cache::CacheEntry;

// == Select Victim ==
/// Returns the key of the entry to evict, or None if there are no entries.
///
/// Ordering is `(hit_count, inserted_at, sequence)`, smallest first. The
/// sequence number only matters when two entries share a timestamp.
pub fn select_victim<'a, I>(entries: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a String, &'a CacheEntry)>,
{
    entries
        .into_iter()
        .min_by(|(_, a), (_, b)| {
            a.hit_count
                .cmp(&b.hit_count)
                .then(a.inserted_at.cmp(&b.inserted_at))
                .then(a.sequence.cmp(&b.sequence))
        })
        .map(|(key, _)| key.as_str())
}
