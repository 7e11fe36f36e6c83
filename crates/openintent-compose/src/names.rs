//! Recipient display-name resolution.

/// Placeholder used when the address has no `@`.
pub const RECIPIENT_PLACEHOLDER: &str = "[Recipient]";

/// Resolve the name to greet.
///
/// A non-blank `override_name` always wins, with each run of whitespace
/// (newlines included) collapsed to one space.  Otherwise the local-part of the
/// address is split on `.`, else on `_`, and each piece is title-cased:
/// `john.doe` and `john_doe` become `John Doe`, `johndoe` becomes `Johndoe`.
pub fn resolve_display_name(address: &str, override_name: Option<&str>) -> String {
    if let Some(name) = override_name.filter(|n| !n.trim().is_empty()) {
        return name.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    let Some((local, _)) = address.trim().split_once('@') else {
        return RECIPIENT_PLACEHOLDER.to_string();
    };

    let separator = if local.contains('.') {
        Some('.')
    } else if local.contains('_') {
        Some('_')
    } else {
        None
    };

    let name = match separator {
        Some(sep) => local
            .split(sep)
            .filter(|part| !part.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        None => capitalize(local),
    };

    if name.is_empty() {
        RECIPIENT_PLACEHOLDER.to_string()
    } else {
        name
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
