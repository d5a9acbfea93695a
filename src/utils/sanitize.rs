use std::collections::HashSet;

use ammonia::Builder;

/// Strip every HTML tag from `text`. `<script>` and `<style>` lose their
/// content too, the remaining text is escaped. Applying it twice gives the
/// same result as applying it once.
pub fn sanitize(text: &str) -> String {
    Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(text)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_tags() {
        assert_eq!(sanitize("<b>there</b>"), "there");
        assert_eq!(sanitize("<p>Hello <i>world</i></p>"), "Hello world");
    }

    #[test]
    fn drops_scripts_with_their_content() {
        assert_eq!(sanitize("<script>alert('xss')</script>Hi"), "Hi");
        assert_eq!(sanitize("<img src=x onerror=alert(1)>ok"), "ok");
    }

    #[test]
    fn escapes_stray_markup_characters() {
        let cleaned = sanitize("1 < 2 & 3 > 2");
        assert!(!cleaned.contains('<'));
        assert!(cleaned.contains("&lt;"));
        assert!(cleaned.contains("&amp;"));
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize("Just a sentence."), "Just a sentence.");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "<b>there</b>",
            "<script>alert(1)</script>",
            "1 < 2 & 3 > 2",
            "&lt;script&gt;alert(1)&lt;/script&gt;",
        ] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input: {input}");
        }
    }
}
