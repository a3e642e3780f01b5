//! Well-formedness predicates for emails and URLs
//!
//! These check syntax only. Nothing is resolved or contacted.

use validator::ValidateEmail;

use super::combinators::Predicate;

/// Predicate that checks a string is a syntactically valid email address.
///
/// Follows the HTML5 email grammar: a local part, `@`, and a domain.
#[derive(Clone, Copy, Default, Debug)]
pub struct Email;

impl Predicate<str> for Email {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.validate_email()
    }
}

text_inputs!(Email);

/// Create a predicate that checks for a valid email address.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// assert!(email().check("test@example.com"));
/// assert!(!email().check("invalid-email"));
/// ```
pub fn email() -> Email {
    Email
}

/// Predicate that checks a string is an absolute URL with a host.
#[derive(Clone, Copy, Default, Debug)]
pub struct Url;

impl Predicate<str> for Url {
    fn check(&self, value: &str) -> bool {
        url::Url::parse(value).is_ok_and(|url| url.has_host())
    }
}

text_inputs!(Url);

/// Create a predicate that checks for a valid URL.
///
/// A scheme and an authority are both required, so `mailto:` links and
/// relative paths are rejected.
///
/// # Example
///
/// ```rust
/// use formcheck::predicate::*;
///
/// assert!(url().check("https://www.example.com"));
/// assert!(!url().check("invalid-url"));
/// ```
pub fn url() -> Url {
    Url
}
