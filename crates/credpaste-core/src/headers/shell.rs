//! Minimal shell-word tokenizer for pasted curl commands.
//!
//! Models the quoting browsers emit for "Copy as cURL (bash)": single-quoted
//! segments, ANSI-C `$'...'` segments, backslash escapes outside quotes and
//! backslash-newline continuations. Adjacent segments join into one word, so
//! `'it'\''s'` is the single word `it's`. No variable expansion.

/// How a word was quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quoting {
    /// No quote characters, e.g. `curl`, `-H`, `--compressed`.
    Bare,
    /// At least one `'...'` or `$'...'` segment and no double quotes.
    Single,
    /// Contains a `"..."` segment; never used as a value.
    Double,
}

/// One shell word after quote removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub text: String,
    pub quoting: Quoting,
}

impl Token {
    fn is_bare(&self, word: &str) -> bool {
        self.quoting == Quoting::Bare && self.text == word
    }
}

/// Splits `input` into words.
///
/// An unterminated quote ends tokenization and the partial word is dropped.
pub(crate) fn tokenize(input: &str) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut word: Option<Token> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            tokens.extend(word.take());
            i += 1;
            continue;
        }
        if b == b'\\' && is_line_continuation(&bytes[i + 1..]) {
            tokens.extend(word.take());
            i += 1;
            continue;
        }

        let current = word.get_or_insert_with(|| Token {
            text: String::new(),
            quoting: Quoting::Bare,
        });
        let next = match b {
            b'\'' => single_quoted(input, i + 1, current),
            b'$' if bytes.get(i + 1) == Some(&b'\'') => ansi_c_quoted(input, i + 2, current),
            b'"' => double_quoted(input, i + 1, current),
            b'\\' => {
                let escaped = input[i + 1..].chars().next();
                if let Some(c) = escaped {
                    current.text.push(c);
                }
                Some(i + 1 + escaped.map_or(0, char::len_utf8))
            }
            _ => {
                let c = input[i..].chars().next().unwrap_or_default();
                current.text.push(c);
                Some(i + c.len_utf8().max(1))
            }
        };
        match next {
            Some(n) => i = n,
            None => {
                tracing::trace!(offset = i, "unterminated quote in curl command");
                return tokens;
            }
        }
    }
    tokens.extend(word);
    tokens
}

fn mark_single(token: &mut Token) {
    if token.quoting == Quoting::Bare {
        token.quoting = Quoting::Single;
    }
}

/// `'...'`: no escapes. Returns the offset after the closing quote.
fn single_quoted(input: &str, start: usize, token: &mut Token) -> Option<usize> {
    let close = start + input[start..].find('\'')?;
    token.text.push_str(&input[start..close]);
    mark_single(token);
    Some(close + 1)
}

/// `$'...'`: backslash escapes, ends at the first unescaped `'`.
fn ansi_c_quoted(input: &str, start: usize, token: &mut Token) -> Option<usize> {
    let mut chars = input[start..].char_indices();
    while let Some((off, c)) = chars.next() {
        match c {
            '\'' => {
                mark_single(token);
                return Some(start + off + 1);
            }
            '\\' => {
                let (_, e) = chars.next()?;
                match e {
                    'n' => token.text.push('\n'),
                    't' => token.text.push('\t'),
                    'r' => token.text.push('\r'),
                    '\\' | '\'' | '"' | '?' => token.text.push(e),
                    other => {
                        token.text.push('\\');
                        token.text.push(other);
                    }
                }
            }
            other => token.text.push(other),
        }
    }
    None
}

/// `"..."`: `\"`, `\\`, `` \` `` and `\$` are unescaped.
fn double_quoted(input: &str, start: usize, token: &mut Token) -> Option<usize> {
    let mut chars = input[start..].char_indices();
    while let Some((off, c)) = chars.next() {
        match c {
            '"' => {
                token.quoting = Quoting::Double;
                return Some(start + off + 1);
            }
            '\\' => {
                let (_, e) = chars.next()?;
                if !matches!(e, '"' | '\\' | '`' | '$') {
                    token.text.push('\\');
                }
                token.text.push(e);
            }
            other => token.text.push(other),
        }
    }
    None
}

/// `\` followed by optional spaces/tabs and a newline.
fn is_line_continuation(rest: &[u8]) -> bool {
    for &c in rest {
        match c {
            b' ' | b'\t' | b'\r' => continue,
            b'\n' => return true,
            _ => return false,
        }
    }
    false
}

/// Values of every bare `flag` followed by a single-quoted word, in order.
pub(crate) fn flag_values<'t>(tokens: &'t [Token], flags: &[&str]) -> Vec<&'t str> {
    tokens
        .windows(2)
        .filter(|pair| flags.iter().any(|f| pair[0].is_bare(f)))
        .filter(|pair| pair[1].quoting == Quoting::Single)
        .map(|pair| pair[1].text.as_str())
        .collect()
}

/// Single-quoted word right after a bare `curl` (any case).
pub(crate) fn curl_url(tokens: &[Token]) -> Option<&str> {
    tokens
        .windows(2)
        .find(|pair| {
            pair[0].quoting == Quoting::Bare
                && pair[0].text.eq_ignore_ascii_case("curl")
                && pair[1].quoting == Quoting::Single
        })
        .map(|pair| pair[1].text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(s: &str) -> Token {
        Token {
            text: s.to_string(),
            quoting: Quoting::Bare,
        }
    }

    fn single(s: &str) -> Token {
        Token {
            text: s.to_string(),
            quoting: Quoting::Single,
        }
    }

    fn double(s: &str) -> Token {
        Token {
            text: s.to_string(),
            quoting: Quoting::Double,
        }
    }

    #[test]
    fn words_and_quotes() {
        let t = tokenize("curl 'https://x.com/a?b=1' -H 'Accept: */*' --compressed");
        assert_eq!(
            t,
            vec![
                bare("curl"),
                single("https://x.com/a?b=1"),
                bare("-H"),
                single("Accept: */*"),
                bare("--compressed"),
            ]
        );
    }

    #[test]
    fn double_quotes_are_opaque() {
        let t = tokenize(r#"curl "https://x.com" -H "it's: \"fine\"""#);
        assert_eq!(
            t,
            vec![
                bare("curl"),
                double("https://x.com"),
                bare("-H"),
                double("it's: \"fine\""),
            ]
        );
    }

    #[test]
    fn line_continuations() {
        let t = tokenize("curl 'https://x.com' \\\n  -H 'a: 1' \\\r\n  -b 'c=2'");
        assert_eq!(
            t,
            vec![
                bare("curl"),
                single("https://x.com"),
                bare("-H"),
                single("a: 1"),
                bare("-b"),
                single("c=2"),
            ]
        );
    }

    #[test]
    fn escaped_quote_joins_segments() {
        let t = tokenize(r"-H 'X-Note: it'\''s' -H 'Cookie: a=1'");
        assert_eq!(
            t,
            vec![bare("-H"), single("X-Note: it's"), bare("-H"), single("Cookie: a=1")]
        );
    }

    #[test]
    fn ansi_c_quoting() {
        let t = tokenize(r#"--data-raw $'{"t":"it\'s\n"}' -H 'Cookie: a=1'"#);
        assert_eq!(
            t,
            vec![
                bare("--data-raw"),
                single("{\"t\":\"it's\n\"}"),
                bare("-H"),
                single("Cookie: a=1"),
            ]
        );
    }

    #[test]
    fn backslash_outside_quotes_is_literal() {
        assert_eq!(tokenize(r"a\ b \$x"), vec![bare("a b"), bare("$x")]);
    }

    #[test]
    fn glued_quote_is_one_word() {
        assert_eq!(tokenize("-H'X: 1'"), vec![single("-HX: 1")]);
    }

    #[test]
    fn unterminated_quote_stops() {
        assert_eq!(
            tokenize("curl 'https://x.com' -H 'broken"),
            vec![bare("curl"), single("https://x.com"), bare("-H")]
        );
        assert_eq!(tokenize("-H $'open\\'"), vec![bare("-H")]);
    }

    #[test]
    fn flag_values_requires_adjacent_single_quote() {
        let t = tokenize("-H 'a: 1' -H \"b: 2\" --header 'c: 3' -H -H 'd: 4' '-H' 'e: 5'");
        assert_eq!(flag_values(&t, &["-H", "--header"]), vec!["a: 1", "c: 3", "d: 4"]);
    }

    #[test]
    fn curl_url_follows_curl_word() {
        assert_eq!(curl_url(&tokenize("CURL 'u' -H 'a: 1'")), Some("u"));
        assert_eq!(curl_url(&tokenize("curl -X GET 'u'")), None);
    }
}
