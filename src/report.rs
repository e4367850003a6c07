use crate::config::DEFAULT_DIFF_TOOL;
use crate::pair::ScoredPair;
use std::fmt;

const HEADER_LABELS: [&str; 7] = ["", "Jaccard", "Jaro", "LCS", "Fuzzy", "File 1", "File 2"];
const SCORE_WIDTH: usize = 7;

/// Ranked comparison results rendered as a bordered text table.
///
/// Every row is followed by a ready-to-run diff tool invocation for the pair.
#[derive(Debug)]
pub struct ResultTable {
    pairs: Vec<ScoredPair>,
    rank_width: usize,
    path_width: usize,
    diff_tool: String,
}

impl ResultTable {
    /// `pairs` must already be ranked.
    pub fn new(pairs: Vec<ScoredPair>) -> Self {
        Self {
            pairs,
            rank_width: 1,
            path_width: 0,
            diff_tool: DEFAULT_DIFF_TOOL.to_string(),
        }
    }

    /// The rank column is as wide as the ordered-pair count has digits.
    pub fn with_total_visits(mut self, total_visits: u64) -> Self {
        self.rank_width = total_visits.to_string().len();
        self
    }

    pub fn with_path_width(mut self, path_width: usize) -> Self {
        self.path_width = path_width;
        self
    }

    pub fn with_diff_tool(mut self, diff_tool: &str) -> Self {
        self.diff_tool = diff_tool.to_string();
        self
    }

    pub fn pairs(&self) -> &[ScoredPair] {
        &self.pairs
    }

    fn column_widths(&self) -> [usize; 7] {
        [
            self.rank_width,
            SCORE_WIDTH,
            SCORE_WIDTH,
            SCORE_WIDTH,
            SCORE_WIDTH,
            self.path_width,
            self.path_width,
        ]
    }

    fn separator(&self) -> String {
        let runs: Vec<String> = self
            .column_widths()
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect();
        format!("+{}+", runs.join("+"))
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let separator = self.separator();

        writeln!(f, "{separator}")?;
        write!(f, "|")?;
        for (label, width) in HEADER_LABELS.iter().zip(widths) {
            write!(f, " {label:<width$} |")?;
        }
        writeln!(f)?;
        writeln!(f, "{separator}")?;

        let [rank_w, score_w, _, _, _, path_w, _] = widths;
        for (i, pair) in self.pairs.iter().enumerate() {
            let scores = pair.scores();
            let first = pair.first().display();
            let second = pair.second().display();
            writeln!(
                f,
                "| {:<rank_w$} | {:<score_w$} | {:<score_w$} | {:<score_w$} | {:<score_w$} | {:<path_w$} | {:<path_w$} | {}   {}  {}",
                i + 1,
                format_score(scores.jaccard),
                format_score(scores.jaro_winkler),
                scores.lcs_length,
                scores.fuzzy_score,
                first.to_string(),
                second.to_string(),
                self.diff_tool,
                first,
                second,
            )?;
            writeln!(f, "{separator}")?;
        }

        Ok(())
    }
}

/// Five decimals, rounding half-up on the shortest decimal form of `value`.
/// `{:.5}` works on the exact binary value instead and prints `0.015625` as
/// `0.01562`.
pub fn format_score(value: f64) -> String {
    format_half_up(value, 5)
}

fn format_half_up(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.decimals$}");
    }

    // `Display` for f64 never switches to exponent notation
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let sign = if value.is_sign_negative() && digits.iter().any(|d| *d != 0) {
        "-"
    } else {
        ""
    };
    if decimals == 0 {
        return format!("{sign}{text}");
    }
    let (whole, fraction) = text.split_at(text.len() - decimals);
    format!("{sign}{whole}.{fraction}")
}

/// Elapsed seconds with four decimals and thousands grouping, e.g. `1,234.5678`.
pub fn format_seconds(secs: f64) -> String {
    let fixed = format!("{:.4}", secs);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}.{frac_part}")
}
