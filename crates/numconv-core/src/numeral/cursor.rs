//! Token cursor over a decoded codepoint buffer.
//!
//! The cursor sits on one token at a time. Most tokens are a single
//! codepoint; dialect idioms (`マイナス`, `ゼロ`) span several codepoints and
//! are folded into one [`PseudoToken`]. Navigation is index arithmetic over the
//! buffer, so a mark is just a saved index.

use super::dialect::{Dialect, PseudoToken};
use crate::unicode::Utf8Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Glyph(char),
    Pseudo(PseudoToken),
    Eof,
}

/// Ordered spelling → pseudo-token table, longest spelling first.
#[derive(Debug, Default)]
pub struct IdiomTable {
    entries: Vec<(Vec<char>, PseudoToken)>,
}

impl IdiomTable {
    pub fn new(dialect: &Dialect) -> Self {
        let mut entries: Vec<(Vec<char>, PseudoToken)> = dialect
            .idioms
            .iter()
            .map(|&(spelling, token)| {
                let text = Utf8Text::new(spelling.as_bytes());
                (text.chars().to_vec(), token)
            })
            .filter(|(chars, _)| !chars.is_empty())
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Idiom starting at `pos`, with its width in codepoints.
    pub fn fold_forward(&self, text: &[char], pos: usize) -> Option<(PseudoToken, usize)> {
        self.fold(text, |len| Some(pos..pos.checked_add(len)?))
    }

    /// Idiom ending right before `end`, with its width in codepoints.
    pub fn fold_backward(&self, text: &[char], end: usize) -> Option<(PseudoToken, usize)> {
        self.fold(text, |len| Some(end.checked_sub(len)?..end))
    }

    fn fold(
        &self,
        text: &[char],
        span: impl Fn(usize) -> Option<std::ops::Range<usize>>,
    ) -> Option<(PseudoToken, usize)> {
        self.entries.iter().find_map(|(spelling, token)| {
            let range = span(spelling.len())?;
            (text.get(range)? == spelling.as_slice()).then_some((*token, spelling.len()))
        })
    }
}

/// Saved cursor position. Consumed by [`Cursor::restore`] or [`Cursor::release`].
#[derive(Debug)]
#[must_use = "an open mark must be restored or released"]
pub struct Mark {
    pos: usize,
}

#[derive(Debug)]
pub struct Cursor<'a> {
    text: &'a [char],
    idioms: &'a IdiomTable,
    /// Index of the first codepoint of the current token.
    pos: usize,
    /// Codepoints covered by the current token (0 at EOF).
    width: usize,
    token: Token,
    open_mark: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Cursor positioned on the first token of `text`.
    pub fn new(text: &'a [char], idioms: &'a IdiomTable) -> Self {
        let mut cursor = Self {
            text,
            idioms,
            pos: 0,
            width: 0,
            token: Token::Eof,
            open_mark: None,
        };
        cursor.relex();
        cursor
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Source codepoints of the current token.
    pub fn lexeme(&self) -> &'a [char] {
        &self.text[self.pos..self.pos + self.width]
    }

    /// The token after the current one, without moving.
    pub fn peek(&self) -> Token {
        self.lex_at(self.pos + self.width).0
    }

    /// Move to the next token. Stays on `Eof` once reached.
    pub fn advance(&mut self) -> Token {
        self.pos += self.width;
        self.relex();
        self.token
    }

    /// Move back exactly one token.
    pub fn retract(&mut self) -> Token {
        if self.pos == 0 {
            return self.token;
        }
        let (token, width) = match self.idioms.fold_backward(self.text, self.pos) {
            Some((pseudo, width)) => (Token::Pseudo(pseudo), width),
            None => (Token::Glyph(self.text[self.pos - 1]), 1),
        };
        debug_assert_eq!(
            self.lex_at(self.pos - width),
            (token, width),
            "backward fold disagrees with forward lexing"
        );
        self.pos -= width;
        self.width = width;
        self.token = token;
        self.token
    }

    /// Open the single mark at the current token.
    ///
    /// # Panics
    /// If a mark is already open.
    pub fn save(&mut self) -> Mark {
        assert!(
            self.open_mark.is_none(),
            "cursor mark already open at {:?}",
            self.open_mark
        );
        self.open_mark = Some(self.pos);
        Mark { pos: self.pos }
    }

    /// Return to `mark` and close it.
    ///
    /// # Panics
    /// If `mark` is not the currently open mark.
    pub fn restore(&mut self, mark: Mark) {
        self.close(&mark);
        self.pos = mark.pos;
        self.relex();
    }

    /// Close `mark` without moving.
    pub fn release(&mut self, mark: Mark) {
        self.close(&mark);
    }

    fn close(&mut self, mark: &Mark) {
        assert_eq!(
            self.open_mark.take(),
            Some(mark.pos),
            "restoring a mark that is not open"
        );
    }

    fn relex(&mut self) {
        let (token, width) = self.lex_at(self.pos);
        self.token = token;
        self.width = width;
    }

    fn lex_at(&self, pos: usize) -> (Token, usize) {
        let Some(&c) = self.text.get(pos) else {
            return (Token::Eof, 0);
        };
        match self.idioms.fold_forward(self.text, pos) {
            Some((pseudo, width)) => (Token::Pseudo(pseudo), width),
            None => (Token::Glyph(c), 1),
        }
    }
}
