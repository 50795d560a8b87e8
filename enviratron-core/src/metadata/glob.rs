use regex::Regex;
use std::fmt;

/// Anchored, case-sensitive shell glob over a bare filename.
///
/// `*` matches any run of characters (including none) and `?` exactly one;
/// every other character is literal.
#[derive(Clone)]
pub struct Glob {
    pattern: String,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let mut translated = String::with_capacity(pattern.len() * 2 + 8);
        translated.push_str(r"(?s)\A");
        let mut buf = [0u8; 4];
        for ch in pattern.chars() {
            match ch {
                '*' => translated.push_str(".*"),
                '?' => translated.push('.'),
                literal => translated.push_str(&regex::escape(literal.encode_utf8(&mut buf))),
            }
        }
        translated.push_str(r"\z");

        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(&translated)?,
        })
    }

    /// For the built-in pattern tables, which are known to compile.
    pub(crate) fn builtin(pattern: &'static str) -> Self {
        Self::new(pattern).expect("built-in filename glob should compile")
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.regex.is_match(filename)
    }
}

impl fmt::Debug for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Glob").field(&self.pattern).finish()
    }
}
