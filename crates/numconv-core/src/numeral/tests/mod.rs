mod chinese;
mod properties;

use super::{convert, Convertor, Language};

fn zh(s: &str) -> String {
    convert(s, Language::Chinese)
}

fn ja(s: &str) -> String {
    convert(s, Language::Japanese)
}

#[test]
fn test_evaluate_is_cached() {
    let c = Convertor::new("三百五".as_bytes(), Language::Chinese);
    let first = c.evaluate().as_ptr();
    assert_eq!(c.evaluate(), "350");
    assert_eq!(c.evaluate().as_ptr(), first);
    assert_eq!(c.language(), Language::Chinese);
}

#[test]
fn test_into_output_without_evaluate() {
    let c = Convertor::new("五十三万".as_bytes(), Language::Japanese);
    assert_eq!(c.into_output(), "530000");
}

#[test]
fn test_empty_input() {
    assert_eq!(zh(""), "");
    assert_eq!(ja(""), "");
}

#[test]
fn test_malformed_bytes_substitute_and_continue() {
    let mut bytes = "三百".as_bytes().to_vec();
    bytes.push(0xFF);
    bytes.extend_from_slice("五".as_bytes());
    let c = Convertor::new(bytes, Language::Chinese);
    // The placeholder space breaks the phrase in two.
    assert_eq!(c.evaluate(), "300 5");
    assert_eq!(c.diagnostics().len(), 1);
    assert_eq!(c.diagnostics()[0].byte, 0xFF);
}
