//! Markup scanning and tag allow-lists
//!
//! A small tag tokenizer that removes markup from a string, keeping only the
//! tags named in an [`AllowList`]. Kept tags are copied byte for byte, so a
//! string that contains nothing but allowed tags comes back unchanged.
//!
//! Scanning rules:
//!
//! - `<` starts a tag only when followed by an ASCII letter, `/` + letter,
//!   `!` or `?`. Any other `<` is text (`a < b`, `<3`).
//! - A tag ends at the first `>` outside a quoted attribute value. A tag that
//!   never closes runs to the end of the input.
//! - Comments (`<!-- -->`), declarations (`<!DOCTYPE ...>`) and processing
//!   instructions (`<? ?>`) are always removed.
//! - Tag names are matched case-insensitively; attributes are not inspected.

use std::borrow::Cow;
use std::fmt;

/// Tags permitted by default in formatted user content.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "a",
    "b",
    "blockquote",
    "br",
    "code",
    "div",
    "em",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "li",
    "ol",
    "p",
    "s",
    "span",
    "strong",
    "u",
    "ul",
];

/// An ordered set of permitted tag names.
///
/// Written in the bracketed form `<a><b><p>`; names are stored lowercase.
///
/// # Example
///
/// ```rust
/// use formcheck::AllowList;
///
/// let tags = AllowList::parse("<p><B>");
/// assert!(tags.contains("p"));
/// assert!(tags.contains("b"));
/// assert!(!tags.contains("script"));
/// assert_eq!(tags.to_string(), "<p><b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct AllowList {
    tags: Vec<String>,
}

impl AllowList {
    /// An allow-list that permits no tags at all.
    pub fn none() -> Self {
        Self { tags: Vec::new() }
    }

    /// Parse the bracketed form, e.g. `<a><b>`.
    ///
    /// Closing slashes and surrounding whitespace inside the brackets are
    /// ignored; empty entries and duplicates are dropped.
    pub fn parse(list: &str) -> Self {
        Self::from_tags(
            list.split('<')
                .filter_map(|chunk| chunk.split_once('>').map(|(name, _)| name)),
        )
    }

    /// Build an allow-list from bare tag names.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::none();
        for tag in tags {
            let name = tag.as_ref().trim().trim_matches('/').trim();
            if name.is_empty() {
                continue;
            }
            let name = name.to_ascii_lowercase();
            if !list.tags.contains(&name) {
                list.tags.push(name);
            }
        }
        list
    }

    /// Whether `name` is permitted, ignoring ASCII case.
    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(name))
    }

    /// The permitted names in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of permitted names.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag is permitted.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::from_tags(DEFAULT_ALLOWED_TAGS)
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            write!(f, "<{}>", tag)?;
        }
        Ok(())
    }
}

impl From<&str> for AllowList {
    fn from(list: &str) -> Self {
        Self::parse(list)
    }
}

impl From<String> for AllowList {
    fn from(list: String) -> Self {
        Self::parse(&list)
    }
}

impl From<AllowList> for String {
    fn from(list: AllowList) -> Self {
        list.to_string()
    }
}

/// What kind of markup a scanned tag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    /// An opening, closing or self-closing element tag.
    Element,
    /// Comment, declaration or processing instruction.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tag<'a> {
    kind: TagKind,
    name: &'a str,
    end: usize,
}

/// Remove every tag not named in `allowed`.
///
/// Returns the input borrowed when nothing was removed.
///
/// # Example
///
/// ```rust
/// use formcheck::{strip_tags, AllowList};
///
/// let allowed = AllowList::parse("<b>");
/// assert_eq!(strip_tags("<p>Hi <b>there</b></p>", &allowed), "Hi <b>there</b>");
/// assert_eq!(strip_tags("1 < 2", &AllowList::none()), "1 < 2");
/// ```
pub fn strip_tags<'a>(input: &'a str, allowed: &AllowList) -> Cow<'a, str> {
    let mut out = String::new();
    let mut copied = 0;
    let mut pos = 0;
    let mut changed = false;

    while let Some(offset) = input[pos..].find('<') {
        let start = pos + offset;
        let Some(tag) = scan_tag(input, start) else {
            pos = start + 1;
            continue;
        };

        pos = tag.end;
        if tag.kind == TagKind::Element && allowed.contains(tag.name) {
            continue;
        }

        out.push_str(&input[copied..start]);
        copied = tag.end;
        changed = true;
    }

    if changed {
        out.push_str(&input[copied..]);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}

/// Whether `input` contains any markup at all.
pub fn contains_markup(input: &str) -> bool {
    matches!(strip_tags(input, &AllowList::none()), Cow::Owned(_))
}

fn scan_tag(input: &str, start: usize) -> Option<Tag<'_>> {
    let bytes = input.as_bytes();
    let rest = &input[start..];

    match *bytes.get(start + 1)? {
        b'!' => {
            let end = if rest.starts_with("<!--") {
                find_from(input, start + 4, "-->").map(|i| i + 3)
            } else {
                find_from(input, start + 2, ">").map(|i| i + 1)
            };
            Some(other(end.unwrap_or(input.len())))
        }
        b'?' => {
            let end = find_from(input, start + 2, "?>").map(|i| i + 2);
            Some(other(end.unwrap_or(input.len())))
        }
        b'/' => {
            if !bytes.get(start + 2)?.is_ascii_alphabetic() {
                return None;
            }
            Some(element(input, start + 2))
        }
        b if b.is_ascii_alphabetic() => Some(element(input, start + 1)),
        _ => None,
    }
}

fn other(end: usize) -> Tag<'static> {
    Tag {
        kind: TagKind::Other,
        name: "",
        end,
    }
}

fn element(input: &str, name_start: usize) -> Tag<'_> {
    let bytes = input.as_bytes();
    let name_len = bytes[name_start..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    let name_end = name_start + name_len;

    let mut quote = None;
    let mut end = input.len();
    for (i, &b) in bytes.iter().enumerate().skip(name_end) {
        match (quote, b) {
            (None, b'"' | b'\'') => quote = Some(b),
            (Some(q), _) if b == q => quote = None,
            (None, b'>') => {
                end = i + 1;
                break;
            }
            _ => {}
        }
    }

    Tag {
        kind: TagKind::Element,
        name: &input[name_start..name_end],
        end,
    }
}

fn find_from(input: &str, from: usize, needle: &str) -> Option<usize> {
    input.get(from..)?.find(needle).map(|i| from + i)
}
