//! pedidolib: разбор голосовых заказов льда и группировка их по клиентам.

pub mod aggregate;
pub mod capture;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod similarity;
pub mod store;
pub mod traits;

pub mod parser {
    mod command;
    pub mod filters;
    pub mod vocab;

    pub use command::{customer, product, CommandParser};
}

pub mod formats {
    pub mod csv;
    pub mod json;
}

pub use aggregate::{aggregate, Aggregator};
pub use parser::CommandParser;
pub use similarity::similar;
