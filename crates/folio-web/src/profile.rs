// Parsing for the profile attributes carried by the page markup.

/// Split a comma separated attribute, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `"label=address; label=address"`. Entries without `=` or with an
/// empty side are ignored.
pub fn parse_contacts(raw: &str) -> Vec<(String, String)> {
    raw.split(';')
        .filter_map(|entry| {
            let (label, addr) = entry.split_once('=')?;
            let (label, addr) = (label.trim(), addr.trim());
            (!label.is_empty() && !addr.is_empty()).then(|| (label.to_string(), addr.to_string()))
        })
        .collect()
}

/// Non-empty trimmed attribute value.
#[inline]
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Links that navigate the current page instead of opening a new tab.
pub fn opens_in_place(url: &str) -> bool {
    url.starts_with("mailto:") || url.starts_with("tel:")
}
