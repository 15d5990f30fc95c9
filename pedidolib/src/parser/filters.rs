//! Правила отбора токенов для имени клиента. Каждое правило это отдельный
//! предикат без состояния, поэтому порядок проверок на результат не влияет.

use super::vocab::{FILLER_WORDS, GENERIC_TRIGGERS, NUMBER_WORDS, SPECIFIC_PRODUCTS};

pub fn has_digit(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// Токен содержит ключевое слово конкретного продукта как подстроку.
///
/// Срабатывает и на части имён ("cubolino" содержит "cubo"), такие токены
/// тоже выбрасываются.
pub fn has_product_keyword(token: &str) -> bool {
    SPECIFIC_PRODUCTS.iter().any(|(keyword, _)| token.contains(keyword))
}

pub fn has_generic_trigger(token: &str) -> bool {
    GENERIC_TRIGGERS.iter().any(|t| token.contains(t))
}

pub fn is_number_word(token: &str) -> bool {
    NUMBER_WORDS.iter().any(|(word, _)| *word == token)
}

pub fn is_filler(token: &str) -> bool {
    FILLER_WORDS.contains(&token)
}

/// Токен не может быть частью имени клиента.
pub fn is_discarded(token: &str) -> bool {
    has_digit(token)
        || has_product_keyword(token)
        || has_generic_trigger(token)
        || is_number_word(token)
        || is_filler(token)
}
