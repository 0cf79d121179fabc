// Tags go in whole so the markup never renders half-open
pub fn chunks(html: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = html;
    while let Some(c) = rest.chars().next() {
        let len = if c == '<' {
            rest.find('>').map(|i| i + 1).unwrap_or(rest.len())
        } else {
            c.len_utf8()
        };
        let (head, tail) = rest.split_at(len);
        out.push(head);
        rest = tail;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_atomic() {
        assert_eq!(
            chunks("a<br>b"),
            vec!["a", "<br>", "b"]
        );
        assert_eq!(
            chunks("<span class=\"x\">ok</span>"),
            vec!["<span class=\"x\">", "o", "k", "</span>"]
        );
    }

    #[test]
    fn multibyte_text_splits_per_char() {
        assert_eq!(chunks("وی‌پی‌ان").concat(), "وی‌پی‌ان");
        assert_eq!(chunks("سلام").len(), 4);
    }

    #[test]
    fn unterminated_tag_takes_the_rest() {
        assert_eq!(chunks("x<b"), vec!["x", "<b"]);
        assert!(chunks("").is_empty());
    }
}
