/// Clean up reconstructed segment text.
///
/// Order-sensitive transformation chain:
/// 1. Collapse whitespace runs to single spaces (trims both ends)
/// 2. Remove whitespace before `. , ! ? ; :`
/// 3. Insert a space between a sentence terminal and a following uppercase
///    letter when none exists
/// 4. Capitalize the first character
/// 5. Append `.` when the text does not end in `. ! ?`
///
/// The chain is idempotent; empty or whitespace-only input yields "".
pub fn normalize_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut unspaced = String::with_capacity(collapsed.len());
    for ch in collapsed.chars() {
        if matches!(ch, '.' | ',' | '!' | '?' | ';' | ':') {
            while unspaced.ends_with(' ') {
                unspaced.pop();
            }
        }
        unspaced.push(ch);
    }

    let mut spaced = String::with_capacity(unspaced.len() + 8);
    let mut prev: Option<char> = None;
    for ch in unspaced.chars() {
        if let Some(p) = prev {
            if matches!(p, '.' | '!' | '?') && ch.is_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    let mut chars = spaced.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };

    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }

    out.trim().to_string()
}
