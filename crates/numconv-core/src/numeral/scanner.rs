//! Left-to-right driver: decides at each token whether to attempt a phrase
//! parse, and assembles the output from literal spans and formatted numbers.

use tracing::{debug, debug_span};

use super::cursor::Token;
use super::dialect::Elision;
use super::parser::{Parser, Phrase};
use super::tables::{Rank, DECIMAL_POINT};

/// Values at or above this get a separating space when they directly follow
/// another parsed number. Single digits stay glued, so digit-by-digit phone
/// numbers and years come out as one run.
const SEPARATE_FROM: i64 = 10;

pub struct Scanner<'a> {
    parser: Parser<'a>,
    elision: Elision,
    out: String,
    last_is_num: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(parser: Parser<'a>, elision: Elision, capacity: usize) -> Self {
        Self {
            parser,
            elision,
            out: String::with_capacity(capacity),
            last_is_num: false,
        }
    }

    pub fn run(mut self) -> String {
        let _span = debug_span!("scan").entered();
        loop {
            let token = self.parser.cursor().token();
            if token == Token::Eof {
                break;
            }
            if self.parser.starts_signed(token) {
                self.try_phrase();
            } else {
                let is_point = token == Token::Glyph(DECIMAL_POINT);
                if is_point && self.last_is_num && self.fraction_follows() {
                    self.out.push('.');
                } else {
                    self.emit_literal();
                }
                self.last_is_num = false;
                self.parser.cursor_mut().advance();
            }
        }
        self.out
    }

    fn try_phrase(&mut self) {
        let mark = self.parser.cursor_mut().save();
        match self.parser.parse_signed() {
            Some(phrase) => {
                self.parser.cursor_mut().release(mark);
                let value = self.correct(phrase);
                debug!(value, consumed = phrase.consumed, "phrase");
                if self.last_is_num && value >= SEPARATE_FROM {
                    self.out.push(' ');
                }
                self.out.push_str(&value.to_string());
                self.last_is_num = true;
            }
            None => {
                self.parser.cursor_mut().restore(mark);
                self.emit_literal();
                self.last_is_num = false;
                self.parser.cursor_mut().advance();
            }
        }
    }

    fn fraction_follows(&self) -> bool {
        self.parser.starts_phrase(self.parser.cursor().peek())
    }

    fn emit_literal(&mut self) {
        self.out.extend(self.parser.cursor().lexeme());
    }

    fn correct(&self, phrase: Phrase) -> i64 {
        match self.elision {
            Elision::Oral => correct_oral_elision(phrase.value, phrase.unit),
            Elision::Never => phrase.value,
        }
    }
}

/// Spoken Chinese drops the marker of a trailing sub-ten-thousand quantity:
/// `二百五` is 250, not 205. When the finest marker seen is above ten, the
/// final digit belongs one rank below that marker.
pub fn correct_oral_elision(value: i64, unit: Option<Rank>) -> i64 {
    match unit {
        Some(rank) if rank > Rank::Ten && rank <= Rank::TenThousand => {
            let tail = value % 10;
            value
                .wrapping_sub(tail)
                .wrapping_add(tail.wrapping_mul(rank.scale()) / 10)
        }
        _ => value,
    }
}
