//! Приближённое сравнение имён клиентов по расстоянию Левенштейна.

use serde::{Deserialize, Serialize};

/// Порог сходства и минимальная длина имени для нечёткого сравнения.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Максимальное допустимое расстояние (включительно).
    pub threshold: usize,
    /// Имена короче этого сравниваются только на точное совпадение.
    pub min_len: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: 2,
            min_len: 4,
        }
    }
}

impl SimilarityConfig {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Сравнение после приведения к нижнему регистру и обрезки пробелов.
    pub fn similar(&self, a: &str, b: &str) -> bool {
        let a = normalize(a);
        let b = normalize(b);
        if a == b {
            return true;
        }
        // "Jo" и "To" различаются одной буквой, но это разные люди
        if a.chars().count() < self.min_len || b.chars().count() < self.min_len {
            return false;
        }
        levenshtein(&a, &b) <= self.threshold
    }
}

/// `similar` с настройками по умолчанию (порог 2, длина от 4 символов).
pub fn similar(a: &str, b: &str) -> bool {
    SimilarityConfig::default().similar(a, b)
}

pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Число вставок, удалений и замен символов, переводящих `a` в `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // две строки таблицы вместо полной матрицы
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
