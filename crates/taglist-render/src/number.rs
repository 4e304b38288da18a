//! Integer formatting with thin-space digit grouping.

/// Separator inserted between digit groups.
pub const THIN_SPACE: &str = "&thinsp;";

/// Format `n` with [`THIN_SPACE`] between groups of three digits, counted
/// from the right.
///
/// # Examples
///
/// ```
/// use taglist_render::group_digits;
///
/// assert_eq!(group_digits(999), "999");
/// assert_eq!(group_digits(1000), "1&thinsp;000");
/// ```
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * THIN_SPACE.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(THIN_SPACE);
        }
        out.push(c);
    }
    out
}
