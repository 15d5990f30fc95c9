//! Разбор одной фразы в структуру заказа: количество, продукт, клиент.

use super::filters;
use super::vocab::{
    BAGGED_ICE, GENERIC_TRIGGERS, NUMBER_WORDS, SPECIFIC_PRODUCTS, UNKNOWN_PRODUCT,
    WALK_IN_CUSTOMER,
};
use crate::{
    error::{PedidoError, Result},
    model::ParsedOrder,
};
use regex::Regex;

/// Разборщик голосовых команд. Регулярные выражения собираются один раз
/// в `new`, сам `parse` ошибок не возвращает.
#[derive(Debug, Clone)]
pub struct CommandParser {
    digits: Regex,
    number_words: Vec<(Regex, u32)>,
}

impl CommandParser {
    pub fn new() -> Result<Self> {
        let digits = Regex::new(r"[0-9]+").map_err(|e| PedidoError::Parse(e.to_string()))?;

        let number_words = NUMBER_WORDS
            .iter()
            .map(|&(word, value)| {
                Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                    .map(|re| (re, value))
                    .map_err(|e| PedidoError::Parse(format!("number word {word}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { digits, number_words })
    }

    /// `None` для пустой строки или строки из одних пробелов.
    pub fn parse(&self, text: &str) -> Option<ParsedOrder> {
        if text.trim().is_empty() {
            return None;
        }
        let lower = text.to_lowercase();

        let quantity = self.quantity(&lower);
        let product = product(&lower);
        let customer = customer(&lower);
        tracing::debug!(quantity, product, customer = %customer, "parsed utterance");

        Some(ParsedOrder {
            quantity,
            product: product.to_string(),
            customer,
            original_text: text.to_string(),
        })
    }

    /// Сначала первая группа цифр, затем числительные по порядку таблицы, иначе 1.
    pub fn quantity(&self, lower: &str) -> u32 {
        if let Some(m) = self.digits.find(lower) {
            match m.as_str().parse::<u32>() {
                Ok(n) if n >= 1 => return n,
                _ => tracing::warn!(digits = m.as_str(), "ignoring unusable quantity"),
            }
        }

        self.number_words
            .iter()
            .find(|(re, _)| re.is_match(lower))
            .map(|&(_, value)| value)
            .unwrap_or(1)
    }
}

/// Конкретный продукт важнее общего: "gelo negroni" даёт Negroni, а не мешок льда.
pub fn product(lower: &str) -> &'static str {
    if let Some(&(_, name)) = SPECIFIC_PRODUCTS.iter().find(|(keyword, _)| lower.contains(keyword)) {
        return name;
    }
    if GENERIC_TRIGGERS.iter().any(|t| lower.contains(t)) {
        return BAGGED_ICE;
    }
    UNKNOWN_PRODUCT
}

/// Слова, оставшиеся после фильтров, с заглавной буквы через пробел.
/// Токены берутся как есть, вместе с пунктуацией: "Ana." остаётся "Ana.".
pub fn customer(lower: &str) -> String {
    let words: Vec<String> = lower
        .split_whitespace()
        .filter(|w| !filters::is_discarded(w))
        .map(capitalize)
        .collect();

    if words.is_empty() {
        WALK_IN_CUSTOMER.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(w: &str) -> String {
    let mut chars = w.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
