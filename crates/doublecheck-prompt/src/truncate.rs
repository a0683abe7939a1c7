/// Keep at most `budget` characters from the start of `text`
///
/// Counts Unicode scalar values, so the cut never lands inside a multibyte
/// sequence.
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
