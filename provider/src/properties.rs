use std::collections::HashMap;

use errors::ProviderError;

/// Parse the contents of a `.properties` file into key/value pairs
///
/// Lines starting with `#` or `!` are comments. A key ends at the first
/// unescaped `=`, `:`, or whitespace. A line ending in an unescaped backslash
/// continues on the next line. Later keys override earlier ones.
pub fn parse_properties(input: &str) -> Result<HashMap<String, String>, ProviderError> {
    let mut values = HashMap::new();

    for (line_number, line) in logical_lines(input) {
        let (key, value) = split_key_value(&line);

        let key = unescape(key).map_err(|message| ProviderError::InvalidProperties {
            line: line_number,
            message,
        })?;
        let value = unescape(value).map_err(|message| ProviderError::InvalidProperties {
            line: line_number,
            message,
        })?;

        values.insert(key, value);
    }

    Ok(values)
}

/// Join continued lines, dropping blank and comment lines
///
/// Each logical line is paired with the 1-based number of the line it starts on.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines = vec![];
    let mut current: Option<(usize, String)> = None;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim_start();

        let (line_number, mut text) = match current.take() {
            Some(continued) => continued,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }

                (index + 1, String::new())
            }
        };

        if ends_with_continuation(line) {
            text.push_str(&line[..line.len() - 1]);
            current = Some((line_number, text));
        } else {
            text.push_str(line);
            lines.push((line_number, text));
        }
    }

    // A continuation on the last line of the file
    if let Some(continued) = current {
        lines.push(continued);
    }

    lines
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = index;
                break;
            }
            c if c.is_whitespace() => {
                key_end = index;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start();

    let value = match rest.strip_prefix(['=', ':']) {
        Some(value) => value.trim_start(),
        None => rest,
    };

    (key, value)
}

fn unescape(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => output.push('\t'),
            Some('n') => output.push('\n'),
            Some('r') => output.push('\r'),
            Some('f') => output.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();

                let code = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("invalid unicode escape: \\u{hex}"))?;

                output.push(code);
            }
            Some(other) => output.push(other),
            None => {}
        }
    }

    Ok(output)
}
