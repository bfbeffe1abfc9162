pub mod numeral;
pub mod settings;
pub mod unicode;

pub use numeral::{convert, Convertor, Language, ParseLanguageError};
pub use unicode::DecodeError;
