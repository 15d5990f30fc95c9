//! CSV: заказы на входе, группы на выходе.
//!
//! Заказы: id,created_at,status,quantity,product,customer (created_at в RFC 3339).
//! Группы: customer,product,quantity,order_ids,created_at,latest_activity,status,
//! по строке на каждый продукт группы; order_ids через ';'.

use crate::{
    error::{PedidoError, Result},
    model::{AggregatedBundle, Order, OrderStatus},
};
use chrono::{DateTime, SecondsFormat, Utc};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    id: String,
    created_at: String,
    status: String,
    quantity: u32,
    product: String,
    customer: String,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    customer: &'a str,
    product: &'a str,
    quantity: u64,
    order_ids: String,
    created_at: String,
    latest_activity: String,
    status: &'a str,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(r);
        let mut orders = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            let created_at = parse_timestamp(&row.created_at)
                .map_err(|e| PedidoError::Parse(format!("order {}: created_at: {e}", row.id)))?;
            let status: OrderStatus = row.status.parse()?;
            if row.quantity == 0 {
                return Err(PedidoError::Parse(format!("order {}: quantity must be >= 1", row.id)));
            }

            orders.push(Order {
                id: row.id,
                created_at,
                status,
                quantity: row.quantity,
                product: row.product,
                customer: row.customer,
            });
        }

        tracing::debug!(count = orders.len(), "orders read from csv");
        Ok(orders)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, bundles: &[AggregatedBundle]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for b in bundles {
            let order_ids = b.order_ids.join(";");
            for (product, &quantity) in &b.items {
                wrt.serialize(CsvOutRow {
                    customer: &b.customer,
                    product,
                    quantity,
                    order_ids: order_ids.clone(),
                    created_at: format_timestamp(&b.created_at),
                    latest_activity: format_timestamp(&b.latest_activity),
                    status: b.status.as_str(),
                })?;
            }
        }
        wrt.flush()?;
        Ok(())
    }
}

fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
