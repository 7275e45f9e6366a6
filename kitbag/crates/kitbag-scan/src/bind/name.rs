//! Mapping from configuration identifiers to record field names.

/// Segments spelled in upper case rather than title case.
const UPPERCASE_WORDS: [&str; 9] = ["http", "https", "url", "uri", "urn", "smtp", "xml", "json", "id"];

/// Converts a configuration identifier into the name of the field it sets.
///
/// The identifier is split at `-` and `_` and where a run of upper-case
/// letters begins. Each segment is lower-cased, then upper-cased if it is a
/// well-known acronym and title-cased otherwise.
///
/// ```
/// use kitbag_scan::bind::camel_case_from_identifier;
///
/// assert_eq!(camel_case_from_identifier("log-level"), "LogLevel");
/// assert_eq!(camel_case_from_identifier("server_url"), "ServerURL");
/// assert_eq!(camel_case_from_identifier("userId"), "UserID");
/// ```
pub fn camel_case_from_identifier(identifier: &str) -> String {
    let mut segments = Vec::new();
    let mut segment = String::new();
    let mut last_was_upper = false;

    for c in identifier.chars() {
        match c {
            '-' | '_' => {
                segments.push(std::mem::take(&mut segment));
                last_was_upper = false;
            }
            c if c.is_uppercase() => {
                if !last_was_upper {
                    segments.push(std::mem::take(&mut segment));
                }
                segment.push(c);
                last_was_upper = true;
            }
            c => {
                segment.push(c);
                last_was_upper = false;
            }
        }
    }
    segments.push(segment);

    segments
        .iter()
        .map(|segment| segment.to_lowercase())
        .map(|segment| {
            if UPPERCASE_WORDS.contains(&segment.as_str()) {
                segment.to_uppercase()
            } else {
                title_case(&segment)
            }
        })
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
