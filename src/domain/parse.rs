// src/domain/parse.rs

/// Reads a price out of free-form sheet text by dropping every non-digit.
///
/// "$1,200/wk" becomes 1200. Anything without digits is 0; a digit run too
/// long for a `u64` saturates so it still falls outside any price cap.
pub fn parse_price(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Leading-integer parse for bed/bath/car counts.
///
/// Leading whitespace and a `+` sign are skipped, then digits are read up to
/// the first non-digit: "3 beds" is 3, "2.5" is 2. Negative or missing
/// values are 0.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().unwrap_or(0)
}
