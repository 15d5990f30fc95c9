//! Доменные модели: разобранная фраза, сохранённый заказ и группа заказов клиента.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Результат разбора одной фразы. Живёт до передачи в хранилище.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOrder {
    pub quantity: u32,
    pub product: String,
    pub customer: String,
    pub original_text: String,
}

/// Этапы жизни заказа, упорядочены: pending < completed < delivered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = crate::error::PedidoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(crate::error::PedidoError::Parse(format!("unknown status: {other}"))),
        }
    }
}

/// Заказ в том виде, в каком его хранит внешнее хранилище.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub quantity: u32,
    pub product: String,
    pub customer: String,
}

/// Сводный статус группы: общий статус заказов или `Mixed`, если они расходятся.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BundleStatus {
    Pending,
    Completed,
    Delivered,
    Mixed,
}

impl BundleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BundleStatus::Pending => "pending",
            BundleStatus::Completed => "completed",
            BundleStatus::Delivered => "delivered",
            BundleStatus::Mixed => "mixed",
        }
    }

    /// Учитывает статус очередного заказа, влитого в группу.
    pub fn merge(self, next: OrderStatus) -> Self {
        if self == BundleStatus::from(next) {
            self
        } else {
            BundleStatus::Mixed
        }
    }
}

impl From<OrderStatus> for BundleStatus {
    fn from(s: OrderStatus) -> Self {
        match s {
            OrderStatus::Pending => BundleStatus::Pending,
            OrderStatus::Completed => BundleStatus::Completed,
            OrderStatus::Delivered => BundleStatus::Delivered,
        }
    }
}

/// Группа заказов одного клиента. Пересчитывается заново на каждом проходе.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedBundle {
    pub customer: String,
    /// Суммы в `u64`: сумма нескольких `u32` не переполняется.
    pub items: BTreeMap<String, u64>,
    pub order_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub latest_activity: DateTime<Utc>,
    pub status: BundleStatus,
}

impl AggregatedBundle {
    pub fn total_quantity(&self) -> u64 {
        self.items.values().fold(0, |acc, &q| acc.saturating_add(q))
    }
}
