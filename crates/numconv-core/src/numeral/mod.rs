//! Chinese/Japanese numeral phrases to Arabic digits.
//!
//! A [`Convertor`] owns one input. Its output is computed on the first
//! [`Convertor::evaluate`] and cached; later calls return the same string.
//!
//! ```
//! use numconv_core::{convert, Language};
//!
//! assert_eq!(convert("买这个电脑我花了一万五", Language::Chinese), "买这个电脑我花了15000");
//! assert_eq!(convert("マイナス百", Language::Japanese), "-100");
//! ```

pub mod cursor;
pub mod dialect;
pub mod parser;
pub mod scanner;
pub mod tables;

#[cfg(test)]
mod tests;

use std::cell::OnceCell;

use tracing::debug_span;

use crate::unicode::{DecodeError, Utf8Text};
use cursor::{Cursor, IdiomTable};
use dialect::Dialect;
use parser::Parser;
use scanner::Scanner;
use tables::Tables;

pub use dialect::{Language, ParseLanguageError};

#[derive(Debug)]
pub struct Convertor {
    text: Utf8Text,
    dialect: &'static Dialect,
    tables: Tables,
    idioms: IdiomTable,
    output: OnceCell<String>,
}

impl Convertor {
    pub fn new(input: impl Into<Vec<u8>>, language: Language) -> Self {
        let dialect = language.dialect();
        Self {
            text: Utf8Text::new(input),
            dialect,
            tables: Tables::new(dialect),
            idioms: IdiomTable::new(dialect),
            output: OnceCell::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.dialect.language
    }

    /// Converted text. Computed once, then served from cache.
    pub fn evaluate(&self) -> &str {
        self.output.get_or_init(|| self.run())
    }

    /// Decode diagnostics for the input (malformed bytes replaced by spaces).
    pub fn diagnostics(&self) -> &[DecodeError] {
        self.text.diagnostics()
    }

    pub fn into_output(self) -> String {
        self.evaluate();
        self.output.into_inner().unwrap_or_default()
    }

    fn run(&self) -> String {
        let chars = self.text.chars();
        let _span = debug_span!(
            "convert",
            language = %self.dialect.language,
            len = chars.len()
        )
        .entered();
        let cursor = Cursor::new(chars, &self.idioms);
        let parser = Parser::new(cursor, &self.tables, self.dialect);
        Scanner::new(parser, self.dialect.elision, self.text.as_bytes().len()).run()
    }
}

/// Convert every numeral phrase in `input` to Arabic digits.
pub fn convert(input: impl AsRef<[u8]>, language: Language) -> String {
    Convertor::new(input.as_ref(), language).into_output()
}
