//! Shared text helpers

/// Take the first `max_chars` characters of `text`, appending "..." only
/// when something was actually cut off. Counts characters, not bytes, so
/// it is safe for emoji and CJK content.
pub fn preview(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", chars[..max_chars].iter().collect::<String>())
    }
}
