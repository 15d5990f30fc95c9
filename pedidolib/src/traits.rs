//! Унифицированные трэйты: чтение заказов, запись групп, внешнее хранилище.

use crate::{
    error::Result,
    model::{AggregatedBundle, Order, OrderStatus, ParsedOrder},
};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, bundles: &[AggregatedBundle]) -> Result<()>;
}

/// Хранилище заказов. Идентификаторы, время создания и статус назначает оно.
pub trait OrderStore {
    /// Сохраняет разобранный заказ со статусом `pending`.
    fn create(&mut self, order: &ParsedOrder) -> Result<Order>;

    /// Не более `limit` последних заказов, новые первыми.
    fn recent(&self, limit: usize) -> Result<Vec<Order>>;

    /// Массовый перевод статуса; возвращает число изменённых записей.
    fn set_status(&mut self, ids: &[String], status: OrderStatus) -> Result<usize>;
}
