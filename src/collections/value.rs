//! The value contract shared by every collection in this crate.
//!
//! A collection is either text-valued or integer-valued, decided by its type parameter. Only
//! [`String`] and [`i64`] implement [`TableValue`], and the trait is sealed.

use std::borrow::Cow;
use std::fmt::{self, Formatter};

use derive_more::{Display, Error, IsVariant};

/// The kind of value a collection stores.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum ValueKind {
    #[display("text")]
    Text,
    #[display("integer")]
    Number,
}

/// A line of text couldn't be interpreted as a value of the expected kind.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unable to read {line:?} as {kind} value")]
pub struct ParseValueError {
    pub line: String,
    pub kind: ValueKind,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
}

/// A value which can be stored as a single line of text and rendered in a collection listing.
pub trait TableValue: sealed::Sealed + Sized {
    /// The kind of value represented by this type.
    const KIND: ValueKind;

    /// Renders the value as one line of text. Text values are returned verbatim and integers are
    /// written in base-10.
    fn render(&self) -> Cow<'_, str>;

    /// Reads a value back from a line previously produced by [`render`](TableValue::render).
    fn parse(line: &str) -> Result<Self, ParseValueError>;

    /// Writes the value the way collection listings show it: quoted for text, bare for integers.
    fn fmt_listing(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

impl TableValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn render(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn parse(line: &str) -> Result<Self, ParseValueError> {
        Ok(line.to_owned())
    }

    fn fmt_listing(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl TableValue for i64 {
    const KIND: ValueKind = ValueKind::Number;

    fn render(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    /// Surrounding whitespace is ignored.
    fn parse(line: &str) -> Result<Self, ParseValueError> {
        line.trim().parse().map_err(|_| ParseValueError {
            line: line.to_owned(),
            kind: ValueKind::Number,
        })
    }

    fn fmt_listing(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(String::parse("23 Oak St"), Ok(String::from("23 Oak St")));
        assert_eq!(String::parse(""), Ok(String::new()), "Empty text values are allowed.");

        assert_eq!(i64::parse("-42"), Ok(-42));
        assert_eq!(i64::parse(" 7 \r"), Ok(7), "Whitespace around integers should be ignored.");
        assert_eq!(
            i64::parse("seven"),
            Err(ParseValueError { line: String::from("seven"), kind: ValueKind::Number })
        );
        assert!(i64::parse("9223372036854775808").is_err(), "Values beyond i64 should fail.");
    }

    #[test]
    fn test_render() {
        assert_eq!(String::from("a b").render(), "a b");
        assert_eq!(i64::MIN.render(), "-9223372036854775808");
    }
}
