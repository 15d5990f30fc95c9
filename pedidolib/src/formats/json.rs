//! JSON: массив заказов на входе, массив групп на выходе.

use crate::{
    error::{PedidoError, Result},
    model::{AggregatedBundle, Order},
};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>> {
        let orders: Vec<Order> = serde_json::from_reader(r)?;
        if let Some(bad) = orders.iter().find(|o| o.quantity == 0) {
            return Err(PedidoError::Parse(format!("order {}: quantity must be >= 1", bad.id)));
        }
        Ok(orders)
    }
}

impl crate::traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, bundles: &[AggregatedBundle]) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, bundles)?;
        writeln!(w)?;
        Ok(())
    }
}
