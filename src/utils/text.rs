//! # Text Helpers

/// Greedy word wrap.
///
/// Words are packed onto a line until adding the next one (plus a space)
/// would exceed `max_chars`. A single word longer than `max_chars` gets a
/// line of its own and is never split.
///
/// # Examples
///
/// ```
/// use hideseek::wrap_text;
///
/// assert_eq!(wrap_text("I may be wrong, but I doubt it.", 16), "I may be wrong,\nbut I doubt it.");
/// ```
pub fn wrap_text(text: &str, max_chars: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if !line.is_empty() && line.chars().count() + word_len + 1 > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}
