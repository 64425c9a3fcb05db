/// JSON/JS string literal for `text`, quotes included.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// 1-based line and column of a byte offset.
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None          => before.chars().count() + 1,
    };
    (line, column)
}

/// Two-space indentation for `depth` levels.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Object literal key for a field name. Names the JS grammar would reject as
/// bare keys (leading digit) are quoted.
pub fn object_key(name: &str) -> String {
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => quote(name),
        _ => name.to_string(),
    }
}

/// Converts a string to kebab-case.
/// Consecutive uppercase letters stay together so acronyms remain intact
/// (e.g. "APIKeys" becomes "api-keys").
pub fn to_kebab_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut kebab = String::new();
    for i in 0..chars.len() {
        let c = chars[i];
        if c == '_' {
            if !kebab.is_empty() && !kebab.ends_with('-') {
                kebab.push('-');
            }
            continue;
        }
        if c.is_uppercase() {
            if i > 0 && !kebab.is_empty() && !kebab.ends_with('-') {
                let prev = chars[i - 1];
                // Break before a new word: after a lowercase/digit, or at the
                // last capital of an acronym that is followed by lowercase.
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    kebab.push('-');
                }
            }
            kebab.extend(c.to_lowercase());
        } else {
            kebab.push(c);
        }
    }
    kebab
}

/// Heuristic English plural, case preserving.
/// - consonant + `y` becomes `ies` (Story -> Stories)
/// - `s`, `x`, `z`, `ch`, `sh` take `es` (Box -> Boxes)
/// - everything else takes `s`
pub fn pluralize(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut tail = lower.chars().rev();
    let last = tail.next();
    let before_last = tail.next();

    if last == Some('y') {
        if let Some(prev) = before_last {
            if !"aeiou".contains(prev) {
                return format!("{}ies", &name[..name.len() - 1]);
            }
        }
    }
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{}es", name);
    }
    format!("{}s", name)
}
