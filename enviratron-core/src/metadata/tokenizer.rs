use super::resolution::{FieldGap, Resolution};
use once_cell::sync::Lazy;
use regex::Regex;

const SEGMENT_SEPARATOR: char = '/';
const EXTENSION_SEPARATOR: char = '.';
const TOKEN_SEPARATOR: char = '_';

static INTEGER_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[+-]?[0-9]+\z").expect("integer literal regex should compile"));

/// A token that reads as a base-10 integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntToken {
    Value(i64),
    /// Digits only, but out of `i64` range. Holds its position so later
    /// tokens keep their index.
    Overflow,
}

impl IntToken {
    pub fn value(self) -> Option<i64> {
        match self {
            IntToken::Value(value) => Some(value),
            IntToken::Overflow => None,
        }
    }

    fn read(token: &str) -> Option<Self> {
        let token = token.trim();
        if !INTEGER_LITERAL.is_match(token) {
            return None;
        }
        Some(token.parse().map_or(IntToken::Overflow, IntToken::Value))
    }
}

/// A path broken into the pieces every resolver works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedPath<'a> {
    /// All `/`-separated segments, the filename included as the last one.
    pub segments: Vec<&'a str>,
    pub filename: &'a str,
    pub stem: &'a str,
    pub extension: Resolution<&'a str>,
    /// `stem` split on `_`.
    pub tokens: Vec<&'a str>,
    /// Tokens that read as base-10 integers, in order, duplicates kept.
    pub ints: Vec<IntToken>,
}

impl<'a> TokenizedPath<'a> {
    /// Directory segments above the filename.
    pub fn ancestors(&self) -> &[&'a str] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }
}

pub fn tokenize(path: &str) -> TokenizedPath<'_> {
    let segments: Vec<&str> = path.split(SEGMENT_SEPARATOR).collect();
    let filename = segments.last().copied().unwrap_or(path);

    let (stem, extension) = match filename.rsplit_once(EXTENSION_SEPARATOR) {
        Some((stem, extension)) => (stem, Resolution::Found(extension)),
        None => (filename, Resolution::Missing(FieldGap::MissingExtension)),
    };

    let tokens: Vec<&str> = stem.split(TOKEN_SEPARATOR).collect();
    let ints = tokens.iter().filter_map(|token| IntToken::read(token)).collect();

    TokenizedPath {
        segments,
        filename,
        stem,
        extension,
        tokens,
        ints,
    }
}

/// Reads a token as a signed base-10 integer, tolerating surrounding
/// whitespace and a leading sign.
pub(crate) fn parse_integer(token: &str) -> Option<i64> {
    IntToken::read(token).and_then(IntToken::value)
}
