//! Argument splitting and quoting

use anyhow::Result;

use crate::ParseError;

/// Split a command body on whitespace, keeping "double quoted" runs together
///
/// Inside quotes a backslash takes the next character literally, so `\"`
/// and `\\` stand for a quote and a backslash.
pub fn split(body: &str) -> Result<Vec<String>> {
    let mut parts = Vec::new();
    let mut chars = body.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(&first) = chars.peek() else {
            break;
        };

        let mut part = String::new();
        if first == '"' {
            chars.next();
            loop {
                let next = match chars.next() {
                    Some('"') => break,
                    Some('\\') => chars.next(),
                    other => other,
                };
                let Some(c) = next else {
                    return Err(ParseError::InvalidFormat(format!(
                        "unterminated quote in '{}'",
                        body.trim()
                    ))
                    .into());
                };
                part.push(c);
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                part.push(c);
            }
        }
        parts.push(part);
    }

    Ok(parts)
}

/// Quote an argument if `split` would otherwise break it apart
pub fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.starts_with('"') && !arg.contains(char::is_whitespace) {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
