//! Property-based checks over generated input.

use proptest::prelude::*;

use super::{convert, Convertor, Language};

/// Characters that can never open or continue a numeral phrase in either
/// dialect. Sign glyphs and 点 are included: without a number next to them
/// they must come out unchanged.
fn arb_plain_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'a', 'Z', ' ', '。', '，', '的', '人', '年', '円', 'は', 'で', 'す', 'イ', 'ロ', 'ー',
        '负', '負', '点', '个', '元',
    ])
}

fn arb_numeral_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '两', '十', '百', '千', '万',
        '亿', '億', '负', '負', '点', 'ゼ', 'ロ', 'ー', 'マ', 'イ', 'ナ', 'ス', '壹', '拾', 'x',
    ])
}

fn arb_language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::Chinese), Just(Language::Japanese)]
}

proptest! {
    #[test]
    fn plain_text_is_unchanged(
        s in prop::collection::vec(arb_plain_char(), 0..40).prop_map(String::from_iter),
        lang in arb_language(),
    ) {
        prop_assert_eq!(convert(&s, lang), s);
    }

    #[test]
    fn conversion_is_deterministic(
        s in prop::collection::vec(arb_numeral_char(), 0..30).prop_map(String::from_iter),
        lang in arb_language(),
    ) {
        let c = Convertor::new(s.as_bytes(), lang);
        let first = c.evaluate().to_string();
        prop_assert_eq!(c.evaluate(), first.as_str());
        prop_assert_eq!(convert(&s, lang), first);
    }

    #[test]
    fn arbitrary_bytes_never_panic(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        lang in arb_language(),
    ) {
        let c = Convertor::new(bytes, lang);
        let _ = c.evaluate();
    }

    #[test]
    fn ascii_text_is_never_consumed(
        s in prop::collection::vec(arb_numeral_char(), 0..30).prop_map(String::from_iter),
    ) {
        // Only ASCII 'x' is never touched; every one of them must survive.
        let out = convert(&s, Language::Chinese);
        prop_assert_eq!(
            out.chars().filter(|&c| c == 'x').count(),
            s.chars().filter(|&c| c == 'x').count()
        );
    }
}
