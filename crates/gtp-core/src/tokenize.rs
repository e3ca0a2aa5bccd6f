//! Argument tokenizer for response text.

/// Split `s` on whitespace, keeping double-quoted runs together.
///
/// Quotes are removed; `\"` inside or outside a quoted run is a literal quote.
/// An empty quoted run (`""`) yields an empty token.
pub fn split_arguments(s: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut token = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                token.push('"');
                chars.next();
            }
            '"' => {
                if in_quotes {
                    result.push(std::mem::take(&mut token));
                }
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !token.is_empty() {
                    result.push(std::mem::take(&mut token));
                }
            }
            c => token.push(c),
        }
    }
    if !token.is_empty() {
        result.push(token);
    }
    result
}
