//! События подписки на заказы и их слияние с локальной коллекцией.

use crate::model::Order;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "order", rename_all = "lowercase")]
pub enum OrderEvent {
    Inserted(Order),
    Updated(Order),
}

/// Новые заказы ставятся в начало; изменённый заменяет запись с тем же id,
/// а незнакомый id обрабатывается как вставка.
pub fn apply_event(orders: &mut Vec<Order>, event: OrderEvent) {
    match event {
        OrderEvent::Inserted(order) => {
            if let Some(existing) = orders.iter_mut().find(|o| o.id == order.id) {
                *existing = order;
            } else {
                orders.insert(0, order);
            }
        }
        OrderEvent::Updated(order) => match orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order,
            None => orders.insert(0, order),
        },
    }
}
