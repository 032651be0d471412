use std::borrow::Cow;

/// Escapes leading syntax that markdown would read as a block construct.
///
/// Inline text handed to the markdown parser is always a single line of a
/// single Gemtext block, so list markers, heading hashes, quote arrows,
/// thematic breaks, fences and reference definitions at its start must stay
/// literal. Each is neutralised with a backslash escape, which markdown
/// renders as the bare character. Leading whitespace is dropped so the line
/// cannot become an indented code block.
pub fn neutralize_block_syntax(text: &str) -> Cow<'_, str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let escape_at = match bytes {
        [b'#' | b'>', ..] => Some(0),
        [b'`', b'`', b'`', ..] | [b'~', b'~', b'~', ..] => Some(0),
        [b'-' | b'+' | b'*'] | [b'-' | b'+' | b'*', b' ' | b'\t', ..] => Some(0),
        [b'[', ..] if is_reference_definition(text) => Some(0),
        _ if is_thematic_break(bytes) => Some(0),
        _ => ordered_list_delimiter(bytes),
    };

    match escape_at {
        Some(idx) => {
            let mut escaped = String::with_capacity(text.len() + 1);
            escaped.push_str(&text[..idx]);
            escaped.push('\\');
            escaped.push_str(&text[idx..]);
            Cow::Owned(escaped)
        }
        None => Cow::Borrowed(text),
    }
}

/// Three or more of the same `-`, `*` or `_`, optionally separated by blanks.
fn is_thematic_break(bytes: &[u8]) -> bool {
    let Some(&marker) = bytes.first() else {
        return false;
    };
    if !matches!(marker, b'-' | b'*' | b'_') {
        return false;
    }

    let mut count = 0;
    for &b in bytes {
        match b {
            b' ' | b'\t' => {}
            _ if b == marker => count += 1,
            _ => return false,
        }
    }
    count >= 3
}

/// Byte index of the `.` or `)` in a leading `1.` / `1)` list marker.
fn ordered_list_delimiter(bytes: &[u8]) -> Option<usize> {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    match bytes.get(digits) {
        Some(b'.' | b')') => match bytes.get(digits + 1) {
            None | Some(b' ' | b'\t') => Some(digits),
            _ => None,
        },
        _ => None,
    }
}

/// `[label]: destination` would be swallowed as a link reference definition.
fn is_reference_definition(text: &str) -> bool {
    text.find(']')
        .is_some_and(|close| text[close + 1..].starts_with(':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain words", "plain words")]
    #[case("   indented code?", "indented code?")]
    #[case("# not a heading", "\\# not a heading")]
    #[case("> not a quote", "\\> not a quote")]
    #[case("- not a list", "\\- not a list")]
    #[case("+ not a list", "\\+ not a list")]
    #[case("* not a list", "\\* not a list")]
    #[case("-", "\\-")]
    #[case("*emphasis* stays", "*emphasis* stays")]
    #[case("**strong** stays", "**strong** stays")]
    #[case("---", "\\---")]
    #[case("* * *", "\\* * *")]
    #[case("___", "\\___")]
    #[case("--", "--")]
    #[case("1. first", "1\\. first")]
    #[case("2024) year", "2024\\) year")]
    #[case("1.5 litres", "1.5 litres")]
    #[case("```fence", "\\```fence")]
    #[case("~~~", "\\~~~")]
    #[case("[ref]: /url", "\\[ref]: /url")]
    #[case("[link](/url) stays", "[link](/url) stays")]
    fn neutralizes_block_openers(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(neutralize_block_syntax(input), expected);
    }

    #[test]
    fn borrows_when_untouched() {
        assert!(matches!(
            neutralize_block_syntax("nothing to do"),
            Cow::Borrowed(_)
        ));
    }
}
