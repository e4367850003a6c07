use ahash::AHashSet;

/// Jaccard similarity over the sets of distinct characters.
///
/// Two empty strings score `1.0`; a single empty side scores `0.0`.
pub fn jaccard(left: &str, right: &str) -> f64 {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let left_set: AHashSet<char> = left.chars().collect();
    let right_set: AHashSet<char> = right.chars().collect();

    let union_size = left_set.union(&right_set).count();
    let intersection_size = left_set.len() + right_set.len() - union_size;

    intersection_size as f64 / union_size as f64
}
