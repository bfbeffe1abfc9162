//! Recursive-descent evaluation of a single numeral phrase.
//!
//! ```text
//! Signed         := [Sign] HundredMillion
//! HundredMillion := TenThousand [ 億 TenThousand ]
//! TenThousand    := Thousand [ 万 Thousand ]
//! Thousand       := Digit 千 (Hundred | 零 Ten) | Hundred
//! Hundred        := Digit 百 (Ten | 零 Digit)    | Ten
//! Ten            := Digit 十 Digit | 十 Digit | Digit
//! ```
//!
//! Every rank routine tries a leading digit and then its own marker. On a miss
//! it puts the digit back and hands over to the next finer rank, so a bare
//! digit is a valid number at every rank. The `零` branches exist only for
//! dialects with oral elision.

use tracing::debug;

use super::cursor::{Cursor, Token};
use super::dialect::{Dialect, Elision};
use super::tables::{Rank, Tables, ZERO};

/// Value of a rank routine and the number of tokens it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parsed {
    pub value: i64,
    pub consumed: usize,
}

impl Parsed {
    fn digit(d: Option<i64>) -> Self {
        Self {
            value: d.unwrap_or(0),
            consumed: usize::from(d.is_some()),
        }
    }
}

/// A successfully parsed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub value: i64,
    /// Last rank marker matched, if any.
    pub unit: Option<Rank>,
    pub consumed: usize,
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    tables: &'a Tables,
    dialect: &'static Dialect,
    unit: Option<Rank>,
}

impl<'a> Parser<'a> {
    pub fn new(cursor: Cursor<'a>, tables: &'a Tables, dialect: &'static Dialect) -> Self {
        Self {
            cursor,
            tables,
            dialect,
            unit: None,
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Whether `token` can open an unsigned phrase.
    pub fn starts_phrase(&self, token: Token) -> bool {
        if self.tables.digit(token).is_some() || self.tables.is_unit(token, Rank::Ten) {
            return true;
        }
        self.dialect.lone_high_markers
            && Rank::ALL[1..]
                .iter()
                .any(|&rank| self.tables.is_unit(token, rank))
    }

    /// Whether `token` can open a signed phrase.
    pub fn starts_signed(&self, token: Token) -> bool {
        self.starts_phrase(token) || self.tables.is_sign(token)
    }

    /// Parse `Signed` at the cursor.
    ///
    /// Returns `None` when the token after an optional sign cannot open a
    /// phrase. The sign, if any, has been consumed in that case; callers
    /// restore their mark.
    pub fn parse_signed(&mut self) -> Option<Phrase> {
        self.unit = None;
        let negative = self.tables.is_sign(self.cursor.token());
        if negative {
            self.cursor.advance();
        }
        if !self.starts_phrase(self.cursor.token()) {
            debug!(pos = self.cursor.pos(), "no phrase after sign");
            return None;
        }
        let body = self.hundred_million();
        let value = if negative {
            body.value.wrapping_neg()
        } else {
            body.value
        };
        Some(Phrase {
            value,
            unit: self.unit,
            consumed: body.consumed + usize::from(negative),
        })
    }

    fn digit(&mut self) -> Option<i64> {
        let d = self.tables.digit(self.cursor.token())?;
        self.cursor.advance();
        Some(d)
    }

    /// Consume the marker of `rank` if it is the current token.
    fn marker(&mut self, rank: Rank) -> bool {
        if !self.tables.is_unit(self.cursor.token(), rank) {
            return false;
        }
        self.cursor.advance();
        self.unit = Some(rank);
        true
    }

    /// Consume a `零` standing for an omitted finer marker (oral dialects only).
    fn oral_zero(&mut self) -> bool {
        if self.dialect.elision != Elision::Oral
            || self.cursor.token() != Token::Glyph(ZERO)
        {
            return false;
        }
        self.cursor.advance();
        self.unit = Some(Rank::Ten);
        true
    }

    pub fn ten(&mut self) -> Parsed {
        let n = self.digit();
        if self.marker(Rank::Ten) {
            let m = self.digit();
            return Parsed {
                value: lead(n).wrapping_mul(10).wrapping_add(m.unwrap_or(0)),
                consumed: usize::from(n.is_some()) + 1 + usize::from(m.is_some()),
            };
        }
        Parsed::digit(n)
    }

    pub fn hundred(&mut self) -> Parsed {
        let n = self.digit();
        if self.marker(Rank::Hundred) {
            let rest = if self.oral_zero() {
                let mut p = Parsed::digit(self.digit());
                p.consumed += 1;
                p
            } else {
                self.ten()
            };
            return combine(lead(n), n.is_some(), Rank::Hundred, rest);
        }
        if n.is_some() {
            self.cursor.retract();
        }
        self.ten()
    }

    pub fn thousand(&mut self) -> Parsed {
        let n = self.digit();
        if self.marker(Rank::Thousand) {
            let rest = if self.oral_zero() {
                let mut p = self.ten();
                p.consumed += 1;
                p
            } else {
                self.hundred()
            };
            return combine(lead(n), n.is_some(), Rank::Thousand, rest);
        }
        if n.is_some() {
            self.cursor.retract();
        }
        self.hundred()
    }

    pub fn ten_thousand(&mut self) -> Parsed {
        let n = self.thousand();
        self.group(n, Rank::TenThousand, Self::thousand)
    }

    pub fn hundred_million(&mut self) -> Parsed {
        let n = self.ten_thousand();
        self.group(n, Rank::HundredMillion, Self::ten_thousand)
    }

    /// `higher [marker [零] lower]` for the grouping ranks (万, 億).
    fn group(&mut self, higher: Parsed, rank: Rank, lower: fn(&mut Self) -> Parsed) -> Parsed {
        if !self.marker(rank) {
            return higher;
        }
        let zero = self.oral_zero();
        let mut rest = lower(self);
        rest.consumed += usize::from(zero);
        // A bare marker counts one of itself.
        let multiplier = if higher.consumed == 0 { 1 } else { higher.value };
        Parsed {
            value: multiplier.wrapping_mul(rank.scale()).wrapping_add(rest.value),
            consumed: higher.consumed + 1 + rest.consumed,
        }
    }
}

/// Multiplier in front of a digit-level marker: `十` alone is 10, `零十` too.
fn lead(n: Option<i64>) -> i64 {
    n.map_or(1, |d| d.max(1))
}

fn combine(lead: i64, had_digit: bool, rank: Rank, rest: Parsed) -> Parsed {
    Parsed {
        value: lead.wrapping_mul(rank.scale()).wrapping_add(rest.value),
        consumed: usize::from(had_digit) + 1 + rest.consumed,
    }
}
