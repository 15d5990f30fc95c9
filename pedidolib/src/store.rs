//! Хранилище заказов в памяти. Реализует `OrderStore` для CLI и тестов;
//! настоящая база живёт за тем же трэйтом.

use crate::{
    error::{PedidoError, Result},
    feed::OrderEvent,
    model::{Order, OrderStatus, ParsedOrder},
    traits::OrderStore,
};
use chrono::{DateTime, Utc};

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct MemoryStore {
    orders: Vec<Order>,
    next_id: u64,
    clock: Clock,
    events: Vec<OrderEvent>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с подменяемыми часами.
    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
            clock: Box::new(clock),
            events: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Забирает накопленные события вставки и изменения для подписчиков.
    ///
    /// События копятся, пока их не заберут: без регулярного вызова журнал
    /// растёт с каждой вставкой и сменой статуса.
    pub fn drain_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.events)
    }
}

impl OrderStore for MemoryStore {
    fn create(&mut self, parsed: &ParsedOrder) -> Result<Order> {
        if parsed.quantity == 0 {
            return Err(PedidoError::Parse("quantity must be >= 1".into()));
        }
        let order = Order {
            id: format!("ord-{:06}", self.next_id),
            created_at: (self.clock)(),
            status: OrderStatus::Pending,
            quantity: parsed.quantity,
            product: parsed.product.clone(),
            customer: parsed.customer.clone(),
        };
        self.next_id += 1;
        tracing::info!(id = %order.id, customer = %order.customer, "order created");

        self.orders.push(order.clone());
        self.events.push(OrderEvent::Inserted(order.clone()));
        Ok(order)
    }

    fn recent(&self, limit: usize) -> Result<Vec<Order>> {
        Ok(crate::aggregate::recent(&self.orders, limit))
    }

    fn set_status(&mut self, ids: &[String], status: OrderStatus) -> Result<usize> {
        if status == OrderStatus::Pending {
            return Err(PedidoError::Unsupported("moving orders back to pending"));
        }
        let mut touched = 0;
        for order in self.orders.iter_mut().filter(|o| ids.contains(&o.id)) {
            if order.status != status {
                order.status = status;
                touched += 1;
                self.events.push(OrderEvent::Updated(order.clone()));
            }
        }
        tracing::info!(touched, status = status.as_str(), "bulk status change");
        Ok(touched)
    }
}
