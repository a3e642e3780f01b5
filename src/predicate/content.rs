//! Content predicates
//!
//! Both predicates remove markup and compare the result with the input. If
//! anything was removed, the input carried markup it was not allowed to.

use super::combinators::Predicate;
use crate::markup::{contains_markup, strip_tags, AllowList};

/// Predicate that checks a string contains no markup at all.
#[derive(Clone, Copy, Default, Debug)]
pub struct PlainText;

impl Predicate<str> for PlainText {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !contains_markup(value)
    }
}

text_inputs!(PlainText);

/// Create a predicate that checks a string is plain text.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// assert!(plain_text().check("Hello World"));
/// assert!(plain_text().check("1 < 2"));
/// assert!(!plain_text().check("<p>Hello World</p>"));
/// ```
pub fn plain_text() -> PlainText {
    PlainText
}

/// Predicate that checks a string only uses allowed tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedHtml {
    allowed: AllowList,
}

impl AllowedHtml {
    /// The tags this predicate lets through.
    pub fn allowed(&self) -> &AllowList {
        &self.allowed
    }
}

impl Predicate<str> for AllowedHtml {
    fn check(&self, value: &str) -> bool {
        strip_tags(value, &self.allowed) == value
    }
}

text_inputs!(AllowedHtml);

/// Create a predicate that allows the default formatting tags.
///
/// See [`DEFAULT_ALLOWED_TAGS`](crate::markup::DEFAULT_ALLOWED_TAGS).
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// assert!(allowed_html().check("<p>Hello <b>World</b></p>"));
/// assert!(!allowed_html().check("<p>Hello <script>alert(1)</script></p>"));
/// ```
pub fn allowed_html() -> AllowedHtml {
    AllowedHtml::default()
}

/// Create a predicate that allows only the given tags.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// assert!(allowed_html_with("<p>").check("<p>Test</p>"));
/// assert!(!allowed_html_with("<p>").check("<p><b>Test</b></p>"));
/// ```
pub fn allowed_html_with(allowed: impl Into<AllowList>) -> AllowedHtml {
    AllowedHtml {
        allowed: allowed.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_plain_text() {
        assert!(plain_text().check("Hello World"));
        assert!(plain_text().check(""));
        assert!(plain_text().check("a > b"));
        assert!(!plain_text().check("<p>Hello World</p>"));
        assert!(!plain_text().check("Hello<br>World"));
        assert!(!plain_text().check("x <!-- hidden -->"));
        assert!(!plain_text().check("dangling <img src=x onerror=alert(1)"));
    }

    #[test]
    fn test_allowed_html_defaults() {
        let p = allowed_html();
        assert!(p.check("<p>Hello <b>World</b></p>"));
        assert!(p.check("<h1>Title</h1><ul><li>one</li></ul><hr/>"));
        assert!(p.check(r#"<a href="https://example.com">link</a>"#));
        assert!(p.check("<STRONG>loud</STRONG>"));
        assert!(!p.check("<p>Hello <script>alert(1)</script></p>"));
        assert!(!p.check("<img src=x>"));
        assert!(!p.check("<iframe></iframe>"));
    }

    #[test]
    fn test_allowed_html_custom_list() {
        assert!(allowed_html_with("<p>").check("<p>Test</p>"));
        assert!(!allowed_html_with("<p>").check("<p><b>Test</b></p>"));
        assert!(allowed_html_with("<p><b>").check("<p><b>Test</b></p>"));
    }

    #[test]
    fn test_empty_allow_list_behaves_like_plain_text() {
        let p = allowed_html_with(AllowList::none());
        for input in ["plain", "<p>x</p>", "1 < 2", "<!-- c -->"] {
            assert_eq!(p.check(input), plain_text().check(input), "{:?}", input);
        }
    }

    #[test]
    fn test_comments_fail_even_with_allow_list() {
        assert!(!allowed_html().check("<p>x</p><!-- note -->"));
    }

    #[test]
    fn test_value_input() {
        assert!(plain_text().check(&Value::from("ok")));
        assert!(plain_text().check(&Value::from(12)));
        assert!(!plain_text().check(&Value::Null));
        assert!(!allowed_html().check(&Value::from("<script>")));
    }

    #[test]
    fn test_allowed_accessor() {
        assert_eq!(allowed_html_with("<em>").allowed().to_string(), "<em>");
    }
}
