//! Группировка заказов по клиентам с нечётким совпадением имён.

use crate::{
    model::{AggregatedBundle, BundleStatus, Order, OrderStatus},
    similarity::SimilarityConfig,
};
use std::collections::BTreeMap;

/// Группировка с настройками сходства по умолчанию.
pub fn aggregate(orders: &[Order]) -> Vec<AggregatedBundle> {
    Aggregator::default().aggregate(orders)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    similarity: SimilarityConfig,
}

impl Aggregator {
    pub fn new(similarity: SimilarityConfig) -> Self {
        Self { similarity }
    }

    /// Заказы обрабатываются от новых к старым; заказ попадает в первую
    /// группу, чьё имя похоже на его клиента. Имя группы не меняется.
    /// Результат отсортирован по последней активности, новые сверху.
    pub fn aggregate(&self, orders: &[Order]) -> Vec<AggregatedBundle> {
        let mut sorted: Vec<&Order> = orders.iter().collect();
        // стабильная сортировка: при равных метках сохраняется входной порядок
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut bundles: Vec<AggregatedBundle> = Vec::new();
        for order in sorted {
            match bundles
                .iter_mut()
                .find(|b| self.similarity.similar(&b.customer, &order.customer))
            {
                Some(bundle) => {
                    tracing::debug!(order = %order.id, bundle = %bundle.customer, "merging order");
                    merge(bundle, order);
                }
                None => bundles.push(seed(order)),
            }
        }

        bundles.sort_by(|a, b| b.latest_activity.cmp(&a.latest_activity));
        bundles
    }

    /// Только готовые к отправке заказы (`completed`), сгруппированные по клиентам.
    pub fn ready_for_delivery(&self, orders: &[Order]) -> Vec<AggregatedBundle> {
        let ready: Vec<Order> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .cloned()
            .collect();
        self.aggregate(&ready)
    }
}

fn seed(order: &Order) -> AggregatedBundle {
    AggregatedBundle {
        customer: order.customer.clone(),
        items: BTreeMap::from([(order.product.clone(), u64::from(order.quantity))]),
        order_ids: vec![order.id.clone()],
        created_at: order.created_at,
        latest_activity: order.created_at,
        status: BundleStatus::from(order.status),
    }
}

fn merge(bundle: &mut AggregatedBundle, order: &Order) {
    add_quantity(&mut bundle.items, &order.product, order.quantity);
    bundle.order_ids.push(order.id.clone());
    // при обработке от новых к старым не срабатывает, но входной порядок не гарантирован
    if order.created_at > bundle.latest_activity {
        bundle.latest_activity = order.created_at;
    }
    if order.created_at < bundle.created_at {
        bundle.created_at = order.created_at;
    }
    bundle.status = bundle.status.merge(order.status);
}

/// Сумма количества по каждому продукту для всех заказов.
pub fn product_totals(orders: &[Order]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for order in orders {
        add_quantity(&mut totals, &order.product, order.quantity);
    }
    totals
}

fn add_quantity(items: &mut BTreeMap<String, u64>, product: &str, quantity: u32) {
    let total = items.entry(product.to_string()).or_insert(0);
    *total = total.saturating_add(u64::from(quantity));
}

/// Не более `limit` самых свежих заказов, новые первыми.
pub fn recent(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
