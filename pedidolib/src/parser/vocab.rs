//! Словари разбора для pt-BR. Порядок записей значим: при поиске побеждает
//! первая подходящая запись, поэтому здесь срезы пар, а не отображения.

/// Продукт, если ни одно ключевое слово не подошло.
pub const UNKNOWN_PRODUCT: &str = "Desconhecido";

/// Клиент по умолчанию (продажа у стойки).
pub const WALK_IN_CUSTOMER: &str = "Balcão";

/// Общий продукт для «просто льда».
pub const BAGGED_ICE: &str = "Gelo (Saco)";

pub const NEGRONI_ICE: &str = "Gelo Negroni";
pub const WHISKY_ICE: &str = "Gelo Whisky";
pub const SPHERE: &str = "Esfera";
pub const CUBE_ICE: &str = "Gelo (Cubo)";

/// Конкретные продукты: ключевое слово (подстрока) -> каноническое имя.
pub const SPECIFIC_PRODUCTS: &[(&str, &str)] = &[
    ("negroni", NEGRONI_ICE),
    ("negronis", NEGRONI_ICE),
    ("whisky", WHISKY_ICE),
    ("esfera", SPHERE),
    ("esferas", SPHERE),
    ("cubo", CUBE_ICE),
    ("cubos", CUBE_ICE),
];

/// Общие слова; дают `BAGGED_ICE`, только если конкретный продукт не найден.
pub const GENERIC_TRIGGERS: &[&str] = &["gelo", "saco", "sacos", "pacote", "pacotes"];

/// Предлоги, артикли и глаголы команд, которые не относятся к имени клиента.
pub const FILLER_WORDS: &[&str] = &[
    "para", "o", "a", "do", "da", "de", "entregar", "manda", "mandar", "cliente", "separar",
    "por", "favor",
];

/// Числительные прописью.
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("um", 1),
    ("uma", 1),
    ("dois", 2),
    ("duas", 2),
    ("tres", 3),
    ("três", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("treze", 13),
    ("quatorze", 14),
    ("quinze", 15),
    ("dezesseis", 16),
    ("dezessete", 17),
    ("dezoito", 18),
    ("dezenove", 19),
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("sessenta", 60),
];

/// Все канонические имена продуктов, включая `UNKNOWN_PRODUCT`.
pub fn canonical_products() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for &(_, name) in SPECIFIC_PRODUCTS {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out.push(BAGGED_ICE);
    out.push(UNKNOWN_PRODUCT);
    out
}
