/// Literal values commonly left behind by example `.env` files
const PLACEHOLDER_LITERALS: &[&str] = &["changeme", "placeholder", "xxx", "todo"];

/// Look up a variable, treating blank values as absent
pub fn non_empty(lookup: impl Fn(&str) -> Option<String>, var: &str) -> Option<String> {
    lookup(var)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Whether a credential value is a template or example rather than a key
///
/// Matches `<...>`, unexpanded `{{ ... }}` or `${...}` templates, values
/// starting with `your-`/`your_`, and a handful of stock literals.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();

    (value.starts_with('<') && value.ends_with('>'))
        || (value.starts_with("{{") && value.ends_with("}}"))
        || (value.starts_with("${") && value.ends_with('}'))
        || lower.starts_with("your-")
        || lower.starts_with("your_")
        || PLACEHOLDER_LITERALS.contains(&lower.as_str())
}
