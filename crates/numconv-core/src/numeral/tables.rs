//! Character class tables: token → digit value, token → rank.
//!
//! Built once per convertor from fixed glyph strings, then read-only.

use std::collections::HashMap;

use super::cursor::Token;
use super::dialect::{Dialect, PseudoToken};
use crate::unicode::Utf8Text;

const ORDINARY_DIGITS: &str = "零一二三四五六七八九";
const FORMAL_DIGITS: &str = "零壹贰叁肆伍陆柒捌玖";
/// `两` is the counting form of 2.
const TWO_ALIAS: char = '两';

pub(crate) const ZERO: char = '零';
pub(crate) const DECIMAL_POINT: char = '点';

const TEN: &str = "十拾";
const HUNDRED: &str = "百佰";
const THOUSAND: &str = "千仟";
const TEN_THOUSAND: &str = "万";

/// Grammatical number-unit tier, ordered finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ten,
    Hundred,
    Thousand,
    TenThousand,
    HundredMillion,
}

impl Rank {
    pub const ALL: [Rank; 5] = [
        Rank::Ten,
        Rank::Hundred,
        Rank::Thousand,
        Rank::TenThousand,
        Rank::HundredMillion,
    ];

    pub fn scale(self) -> i64 {
        match self {
            Rank::Ten => 10,
            Rank::Hundred => 100,
            Rank::Thousand => 1_000,
            Rank::TenThousand => 10_000,
            Rank::HundredMillion => 100_000_000,
        }
    }
}

#[derive(Debug)]
pub struct Tables {
    digits: HashMap<Token, i64>,
    /// Indexed by `Rank as usize`; values are the glyph's ordinal within its rank.
    units: [HashMap<Token, usize>; 5],
    signs: Vec<Token>,
}

impl Tables {
    pub fn new(dialect: &Dialect) -> Self {
        let mut digits = HashMap::new();
        index_glyphs(ORDINARY_DIGITS, &mut digits);
        index_glyphs(FORMAL_DIGITS, &mut digits);
        digits.insert(Token::Glyph(TWO_ALIAS), 2);

        let units = [
            glyph_map(TEN),
            glyph_map(HUNDRED),
            glyph_map(THOUSAND),
            glyph_map(TEN_THOUSAND),
            glyph_map(dialect.hundred_million),
        ];

        let mut signs = vec![Token::Glyph(dialect.negative)];
        for &(_, pseudo) in dialect.idioms {
            match pseudo {
                PseudoToken::Zero => {
                    digits.insert(Token::Pseudo(pseudo), 0);
                }
                PseudoToken::Minus => {
                    if !signs.contains(&Token::Pseudo(pseudo)) {
                        signs.push(Token::Pseudo(pseudo));
                    }
                }
            }
        }

        Self {
            digits,
            units,
            signs,
        }
    }

    pub fn digit(&self, token: Token) -> Option<i64> {
        self.digits.get(&token).copied()
    }

    pub fn is_unit(&self, token: Token, rank: Rank) -> bool {
        self.units[rank as usize].contains_key(&token)
    }

    /// Rank-local ordinal of `token`, e.g. `拾` is ordinal 1 of the ten rank.
    pub fn unit_ordinal(&self, token: Token, rank: Rank) -> Option<usize> {
        self.units[rank as usize].get(&token).copied()
    }

    pub fn is_sign(&self, token: Token) -> bool {
        self.signs.contains(&token)
    }
}

/// Map each glyph of `glyphs` to its index in the string.
fn index_glyphs<V: TryFrom<usize>>(glyphs: &str, map: &mut HashMap<Token, V>) {
    let text = Utf8Text::new(glyphs.as_bytes());
    for (i, &c) in text.chars().iter().enumerate() {
        if let Ok(v) = V::try_from(i) {
            map.insert(Token::Glyph(c), v);
        }
    }
}

fn glyph_map(glyphs: &str) -> HashMap<Token, usize> {
    let mut map = HashMap::new();
    index_glyphs(glyphs, &mut map);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::dialect::{CHINESE, JAPANESE};

    fn g(c: char) -> Token {
        Token::Glyph(c)
    }

    #[test]
    fn test_digits_merge_both_sets() {
        let t = Tables::new(&CHINESE);
        assert_eq!(t.digit(g('零')), Some(0));
        assert_eq!(t.digit(g('三')), Some(3));
        assert_eq!(t.digit(g('叁')), Some(3));
        assert_eq!(t.digit(g('玖')), Some(9));
        assert_eq!(t.digit(g('两')), Some(2));
        assert_eq!(t.digit(g('十')), None);
        assert_eq!(t.digit(g('a')), None);
    }

    #[test]
    fn test_units_accept_alternate_glyphs() {
        let t = Tables::new(&CHINESE);
        assert!(t.is_unit(g('十'), Rank::Ten));
        assert_eq!(t.unit_ordinal(g('拾'), Rank::Ten), Some(1));
        assert!(t.is_unit(g('佰'), Rank::Hundred));
        assert!(t.is_unit(g('仟'), Rank::Thousand));
        assert!(!t.is_unit(g('十'), Rank::Hundred));
    }

    #[test]
    fn test_hundred_million_glyph_per_dialect() {
        let zh = Tables::new(&CHINESE);
        let ja = Tables::new(&JAPANESE);
        assert!(zh.is_unit(g('亿'), Rank::HundredMillion));
        assert!(!zh.is_unit(g('億'), Rank::HundredMillion));
        assert!(ja.is_unit(g('億'), Rank::HundredMillion));
        assert!(!ja.is_unit(g('亿'), Rank::HundredMillion));
    }

    #[test]
    fn test_pseudo_tokens_registered_for_japanese_only() {
        let zh = Tables::new(&CHINESE);
        let ja = Tables::new(&JAPANESE);
        assert_eq!(zh.digit(Token::Pseudo(PseudoToken::Zero)), None);
        assert!(!zh.is_sign(Token::Pseudo(PseudoToken::Minus)));
        assert_eq!(ja.digit(Token::Pseudo(PseudoToken::Zero)), Some(0));
        assert!(ja.is_sign(Token::Pseudo(PseudoToken::Minus)));
        assert!(zh.is_sign(g('负')));
        assert!(ja.is_sign(g('負')));
        assert!(!ja.is_sign(g('负')));
    }

    #[test]
    fn test_rank_order_and_scale() {
        assert!(Rank::Ten < Rank::Hundred);
        assert!(Rank::TenThousand < Rank::HundredMillion);
        assert_eq!(Rank::Thousand.scale(), 1000);
        assert_eq!(Rank::HundredMillion.scale(), 100_000_000);
    }
}
