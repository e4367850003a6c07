/// Fuzzy match score of `query` against `term`.
///
/// Both sides are lowercased. The term is scanned once, left to right; every
/// query character found scores one point and two more when it sits right after
/// the previous match. A query character that is never found consumes the rest
/// of the term, so later characters cannot match either.
pub fn fuzzy_score(term: &str, query: &str) -> i64 {
    let term: Vec<char> = term.to_lowercase().chars().collect();
    let query = query.to_lowercase();

    let mut score = 0;
    let mut term_index = 0;
    let mut previous_match: Option<usize> = None;

    for query_char in query.chars() {
        while term_index < term.len() {
            let index = term_index;
            term_index += 1;

            if term[index] == query_char {
                score += 1;
                if previous_match.map_or(false, |prev| prev + 1 == index) {
                    score += 2;
                }
                previous_match = Some(index);
                break;
            }
        }
    }

    score
}
