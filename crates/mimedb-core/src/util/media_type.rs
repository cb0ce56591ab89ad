/// The bare `type/subtype` token of a media type string, lowercased.
///
/// Leading whitespace is skipped and the token ends at the first `;` or
/// whitespace, so parameters never take part in a lookup.
pub fn bare_type(media_type: &str) -> String {
    media_type
        .trim_start()
        .split(|c: char| c == ';' || c.is_whitespace())
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
