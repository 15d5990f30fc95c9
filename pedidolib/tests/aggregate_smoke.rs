use chrono::{DateTime, TimeZone, Utc};
use pedidolib::{
    aggregate::{aggregate, product_totals, recent, Aggregator},
    model::{BundleStatus, Order, OrderStatus},
    similarity::SimilarityConfig,
};

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, minute, 0).unwrap()
}

fn order(id: &str, minute: u32, customer: &str, product: &str, quantity: u32) -> Order {
    Order {
        id: id.into(),
        created_at: at(minute),
        status: OrderStatus::Pending,
        quantity,
        product: product.into(),
        customer: customer.into(),
    }
}

#[test]
fn similar_names_merge_into_one_bundle() {
    let orders = vec![
        order("a", 1, "João", "Gelo (Saco)", 2),
        order("b", 5, "Joao", "Gelo (Saco)", 3),
    ];
    let bundles = aggregate(&orders);
    assert_eq!(bundles.len(), 1);

    let b = &bundles[0];
    // первой обрабатывается более новая запись, её имя и становится меткой
    assert_eq!(b.customer, "Joao");
    assert_eq!(b.items["Gelo (Saco)"], 5);
    assert_eq!(b.order_ids, vec!["b".to_string(), "a".to_string()]);
    assert_eq!(b.created_at, at(1));
    assert_eq!(b.latest_activity, at(5));
    assert_eq!(b.status, BundleStatus::Pending);
}

#[test]
fn different_products_are_kept_apart_inside_bundle() {
    let orders = vec![
        order("a", 1, "Maria", "Gelo (Saco)", 2),
        order("b", 2, "Maria", "Esfera", 1),
        order("c", 3, "Marla", "Esfera", 4),
    ];
    let bundles = aggregate(&orders);
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].items["Gelo (Saco)"], 2);
    assert_eq!(bundles[0].items["Esfera"], 5);
    assert_eq!(bundles[0].total_quantity(), 7);
}

#[test]
fn distinct_customers_give_one_bundle_each() {
    let orders = vec![
        order("1", 1, "Maria", "Esfera", 1),
        order("2", 2, "Pedro", "Esfera", 1),
        order("3", 3, "Ana", "Esfera", 1),
        order("4", 4, "Pedro", "Gelo (Cubo)", 2),
        order("5", 5, "Carlos", "Esfera", 1),
        order("6", 6, "Ana", "Esfera", 1),
    ];
    let bundles = aggregate(&orders);
    assert_eq!(bundles.len(), 4);

    let mut seen: Vec<&String> = bundles.iter().flat_map(|b| &b.order_ids).collect();
    seen.sort();
    assert_eq!(seen, vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn bundles_sorted_by_latest_activity() {
    let orders = vec![
        order("1", 10, "Maria", "Esfera", 1),
        order("2", 20, "Pedro", "Esfera", 1),
        order("3", 30, "Maria", "Esfera", 1),
    ];
    let bundles = aggregate(&orders);
    let names: Vec<&str> = bundles.iter().map(|b| b.customer.as_str()).collect();
    assert_eq!(names, vec!["Maria", "Pedro"]);
    assert!(bundles.iter().all(|b| b.latest_activity >= b.created_at));
}

#[test]
fn input_order_does_not_matter() {
    let mut orders = vec![
        order("1", 3, "Beatriz", "Esfera", 1),
        order("2", 1, "Beatris", "Esfera", 2),
        order("3", 2, "Carlos", "Gelo (Saco)", 1),
    ];
    let first = aggregate(&orders);
    orders.reverse();
    let second = aggregate(&orders);
    assert_eq!(first, second);
    assert_eq!(first, aggregate(&orders));
}

#[test]
fn short_names_only_merge_on_exact_match() {
    let orders = vec![order("1", 1, "Jo", "Esfera", 1), order("2", 2, "To", "Esfera", 1)];
    assert_eq!(aggregate(&orders).len(), 2);
}

#[test]
fn first_similar_bundle_wins_and_label_sticks() {
    // "Marcas" похоже и на "Marcos", и на "Marta"; берётся группа, созданная раньше
    let orders = vec![
        order("1", 3, "Marcos", "Esfera", 1),
        order("2", 2, "Marta", "Esfera", 1),
        order("3", 1, "Marcas", "Esfera", 1),
    ];
    let bundles = aggregate(&orders);
    assert_eq!(bundles.len(), 2);

    let marcos = bundles.iter().find(|b| b.customer == "Marcos").expect("marcos bundle");
    assert_eq!(marcos.order_ids, vec!["1".to_string(), "3".to_string()]);
    assert!(bundles.iter().all(|b| b.customer != "Marcas"));
}

#[test]
fn mixed_status_is_reported() {
    let mut done = order("2", 2, "Maria", "Esfera", 1);
    done.status = OrderStatus::Completed;
    let orders = vec![order("1", 1, "Maria", "Esfera", 1), done];
    assert_eq!(aggregate(&orders)[0].status, BundleStatus::Mixed);
}

#[test]
fn ready_for_delivery_only_uses_completed_orders() {
    let mut a = order("1", 1, "Maria", "Esfera", 1);
    a.status = OrderStatus::Completed;
    let mut b = order("2", 2, "Maria", "Esfera", 2);
    b.status = OrderStatus::Completed;
    let c = order("3", 3, "Maria", "Esfera", 5);
    let mut d = order("4", 4, "Pedro", "Esfera", 1);
    d.status = OrderStatus::Delivered;

    let bundles = Aggregator::default().ready_for_delivery(&[a, b, c, d]);
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].items["Esfera"], 3);
    assert_eq!(bundles[0].order_ids, vec!["2".to_string(), "1".to_string()]);
    assert_eq!(bundles[0].status, BundleStatus::Completed);
}

#[test]
fn stricter_threshold_splits_bundles() {
    let orders = vec![
        order("1", 1, "Beatriz", "Esfera", 1),
        order("2", 2, "Beatris", "Esfera", 1),
    ];
    let strict = Aggregator::new(SimilarityConfig::default().with_threshold(0));
    assert_eq!(strict.aggregate(&orders).len(), 2);
    assert_eq!(aggregate(&orders).len(), 1);
}

#[test]
fn totals_and_recent() {
    let orders = vec![
        order("1", 1, "Maria", "Esfera", 1),
        order("2", 2, "Pedro", "Esfera", 2),
        order("3", 3, "Ana", "Gelo (Saco)", 4),
    ];
    let totals = product_totals(&orders);
    assert_eq!(totals["Esfera"], 3);
    assert_eq!(totals["Gelo (Saco)"], 4);

    let last_two = recent(&orders, 2);
    let ids: Vec<&str> = last_two.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn empty_input_gives_no_bundles() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn large_quantities_do_not_overflow() {
    let orders = vec![
        order("1", 1, "Maria", "Esfera", 3_000_000_000),
        order("2", 2, "Maria", "Esfera", 3_000_000_000),
        order("3", 3, "Maria", "Gelo (Saco)", u32::MAX),
    ];
    let bundles = aggregate(&orders);
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].items["Esfera"], 6_000_000_000);
    assert_eq!(bundles[0].total_quantity(), 6_000_000_000 + u64::from(u32::MAX));

    let totals = product_totals(&orders);
    assert_eq!(totals["Esfera"], 6_000_000_000);
}
