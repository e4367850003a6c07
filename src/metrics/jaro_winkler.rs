const SCALING_FACTOR: f64 = 0.1;
const BOOST_THRESHOLD: f64 = 0.7;
const MAX_PREFIX: usize = 4;

struct MatchCounts {
    matches: usize,
    half_transpositions: usize,
    prefix: usize,
}

/// Jaro-Winkler similarity in `[0, 1]`.
///
/// Equal inputs (including two empty strings) score `1.0`. The Winkler prefix
/// boost only applies once the plain Jaro score reaches `0.7`.
pub fn jaro_winkler(left: &str, right: &str) -> f64 {
    if left == right {
        return 1.0;
    }

    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();

    let counts = count_matches(&left, &right);
    if counts.matches == 0 {
        return 0.0;
    }

    let m = counts.matches as f64;
    let jaro = (m / left.len() as f64
        + m / right.len() as f64
        + (m - counts.half_transpositions as f64 / 2.0) / m)
        / 3.0;

    if jaro < BOOST_THRESHOLD {
        jaro
    } else {
        jaro + SCALING_FACTOR * counts.prefix as f64 * (1.0 - jaro)
    }
}

fn count_matches(first: &[char], second: &[char]) -> MatchCounts {
    let (longer, shorter) = if first.len() > second.len() {
        (first, second)
    } else {
        (second, first)
    };

    let range = (longer.len() / 2).saturating_sub(1);
    let mut match_indexes: Vec<Option<usize>> = vec![None; shorter.len()];
    let mut match_flags = vec![false; longer.len()];
    let mut matches = 0;

    for (mi, &c) in shorter.iter().enumerate() {
        let start = mi.saturating_sub(range);
        let end = (mi + range + 1).min(longer.len());
        for xi in start..end {
            if !match_flags[xi] && c == longer[xi] {
                match_indexes[mi] = Some(xi);
                match_flags[xi] = true;
                matches += 1;
                break;
            }
        }
    }

    let shorter_matched = shorter
        .iter()
        .zip(&match_indexes)
        .filter(|(_, idx)| idx.is_some())
        .map(|(c, _)| c);
    let longer_matched = longer
        .iter()
        .zip(&match_flags)
        .filter(|(_, flag)| **flag)
        .map(|(c, _)| c);

    let half_transpositions = shorter_matched
        .zip(longer_matched)
        .filter(|(a, b)| a != b)
        .count();

    let prefix = first
        .iter()
        .zip(second)
        .take(MAX_PREFIX.min(shorter.len()))
        .take_while(|(a, b)| a == b)
        .count();

    MatchCounts {
        matches,
        half_transpositions,
        prefix,
    }
}
