use super::zh;

#[test]
fn test_oral_elision() {
    assert_eq!(zh("三千零五"), "3005");
    assert_eq!(zh("两万五"), "25000");
    assert_eq!(zh("买这个电脑我花了一万五"), "买这个电脑我花了15000");
    assert_eq!(zh("六百五"), "650");
    assert_eq!(zh("三千五"), "3500");
    assert_eq!(zh("一万二千三"), "12300");
}

#[test]
fn test_explicit_zero_keeps_ones() {
    assert_eq!(zh("三百零五"), "305");
    assert_eq!(zh("一万零五"), "10005");
    assert_eq!(
        zh("二百五加三百六等于六百一。三百零五加四十五等于三百五"),
        "250加360等于610。305加45等于350"
    );
}

#[test]
fn test_digit_runs_do_not_merge() {
    assert_eq!(zh("电话是一三五一二三四五六七八"), "电话是13512345678");
    assert_eq!(zh("今天是二零二三年十月三十一日"), "今天是2023年10月31日");
}

#[test]
fn test_large_numbers() {
    assert_eq!(
        zh("截至二零二三年十二月，中国有十四亿一千七十七万八千七百二十四人，GDP超过两万五千五百亿人民币"),
        "截至2023年12月，中国有1410778724人，GDP超过2550000000000人民币"
    );
    assert_eq!(zh("一百万五千九百九十五英镑"), "1005995英镑");
}

#[test]
fn test_negative_and_false_sign() {
    assert_eq!(
        zh("今年的增长率为负三十五个百分点，需要负责人研究如何止住负增长趋势"),
        "今年的增长率为-35个百分点，需要负责人研究如何止住负增长趋势"
    );
    assert_eq!(zh("负"), "负");
}

#[test]
fn test_decimal_point() {
    assert_eq!(
        zh("pi等于三点一四一五九二六五三五，她的电话是一三五一二三四五六七八。"),
        "pi等于3.1415926535，她的电话是13512345678。"
    );
    assert_eq!(
        zh("刚刚清点了今天的收入，总共九万八千五百二十一点一零元"),
        "刚刚清点了今天的收入，总共98521.10元"
    );
}

#[test]
fn test_decimal_point_needs_numbers_on_both_sides() {
    assert_eq!(zh("三点钟"), "3点钟");
    assert_eq!(zh("点五"), "点5");
    assert_eq!(zh("清点"), "清点");
}

#[test]
fn test_space_between_adjacent_numbers() {
    assert_eq!(zh("给我推荐一个四五千的手机"), "给我推荐1个4 5000的手机");
    // Exactly ten after another number is separated too.
    assert_eq!(zh("二十十"), "20 10");
    // Single digits never are.
    assert_eq!(zh("三十五"), "35");
}

#[test]
fn test_formal_digits() {
    assert_eq!(zh("壹佰贰拾叁元"), "123元");
    assert_eq!(zh("伍仟零陆"), "5006");
}

#[test]
fn test_high_markers_need_a_number_in_chinese() {
    assert_eq!(zh("百分点"), "百分点");
    assert_eq!(zh("千万别"), "千万别");
}

#[test]
fn test_japanese_idioms_are_literal() {
    assert_eq!(zh("マイナス五"), "マイナス5");
    assert_eq!(zh("ゼロ"), "ゼロ");
}
