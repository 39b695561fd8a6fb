/// First line of a possibly multi-line description, trimmed
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}

/// Shorten text to at most `max` characters, ending with an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let kept: String = text.chars().take(max - 1).collect();
    format!("{kept}…")
}
