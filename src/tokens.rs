/// Split `document` into words, each keeping the whitespace that follows it.
///
/// Every whitespace character ends a token, so consecutive separators produce
/// tokens made only of whitespace. A `"\r\n"` pair is kept as one separator.
/// Concatenating the result always gives back `document`.
pub fn tokenize(document: &str) -> Vec<&str> {
    let mut tokens = vec![];
    let mut start = 0;
    let mut chars = document.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !c.is_whitespace() {
            continue;
        }
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            continue;
        }

        let end = i + c.len_utf8();
        tokens.push(&document[start..end]);
        start = end;
    }

    if start < document.len() {
        tokens.push(&document[start..]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_trailing_spaces() {
        assert_eq!(
            tokenize("insert the original text"),
            vec!["insert ", "the ", "original ", "text"]
        );
    }

    #[test]
    fn it_tokenizes_nothing() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn repeated_whitespace_becomes_its_own_token() {
        assert_eq!(tokenize("a  b\n"), vec!["a ", " ", "b\n"]);
    }

    #[test]
    fn crlf_is_a_single_separator() {
        assert_eq!(tokenize("one\r\ntwo\rthree"), vec!["one\r\n", "two\r", "three"]);
    }

    #[test]
    fn it_splits_on_unicode_whitespace() {
        assert_eq!(tokenize("été\u{2003}déjà"), vec!["été\u{2003}", "déjà"]);
    }

    #[test]
    fn tokens_reconstruct_the_document() {
        let document = " leading\ttabs\n\nand  gaps ";

        assert_eq!(tokenize(document).concat(), document);
    }
}
