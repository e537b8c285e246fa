//! Frequency ranking shared by the sender, word and emoji statistics.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Counts items and ranks them by count, highest first.
///
/// Items with equal counts keep the order in which they were first seen.
///
/// ```
/// use whatstat::core::rank::rank_by_frequency;
///
/// let ranked = rank_by_frequency(["b", "a", "b", "c", "a"]);
/// assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1)]);
/// ```
pub fn rank_by_frequency<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.entry(item) {
            Entry::Occupied(slot) => counts[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                counts.push((slot.key().clone(), 1));
                slot.insert(counts.len() - 1);
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
