/// Length of the longest common (not necessarily contiguous) subsequence.
pub fn lcs_length(left: &str, right: &str) -> usize {
    let right: Vec<char> = right.chars().collect();
    if right.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; right.len() + 1];
    let mut curr = vec![0usize; right.len() + 1];

    for lc in left.chars() {
        for (j, &rc) in right.iter().enumerate() {
            curr[j + 1] = if lc == rc {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[right.len()]
}
