use chrono::{TimeZone, Utc};
use std::sync::Arc;
use storefront::catalog::{seed, CatalogFilter};
use storefront::config::StorefrontConfig;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{OrderId, OrderQuantities, ProductId};
use storefront::session_actor::{FixedClock, SessionContext, SessionError};
use storefront::stats;
use storefront::views::{Customer, Dashboard, FormStep, OrderForm};

async fn start() -> (StorefrontSystem, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
    ));
    let system = StorefrontSystem::start_with(
        StorefrontConfig::default(),
        SessionContext::new(clock.clone()),
    )
    .await
    .expect("Failed to start storefront");
    (system, clock)
}

#[tokio::test]
async fn test_order_decrements_stock_and_records_revenue() {
    let (system, _) = start().await;
    let store = system.store();

    let order = store
        .apply_order(OrderQuantities::from([(2, 3)]))
        .await
        .unwrap()
        .expect("order should be recorded");

    assert_eq!(order.id, OrderId(1_700_000_000_000));
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].qty, 3);
    assert_eq!(order.lines[0].subtotal, 150.0);

    let jean = store
        .products()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.id == ProductId(2))
        .unwrap();
    assert_eq!(jean.quantity, 2);
    assert_eq!(store.total_revenue().await.unwrap(), 150.0);
    assert_eq!(store.orders_count().await.unwrap(), 1);
    assert_eq!(store.version().await.unwrap(), 1);

    drop(store);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unclamped_order_floors_at_zero() {
    let (system, _) = start().await;
    let store = system.store();

    store
        .apply_order(OrderQuantities::from([(2, 10)]))
        .await
        .unwrap();
    let snapshot = store.snapshot().await.unwrap();
    assert_eq!(snapshot.product(ProductId(2)).unwrap().quantity, 0);

    drop(store);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_changes_nothing() {
    let (system, _) = start().await;
    let store = system.store();
    let before = store.snapshot().await.unwrap();

    assert!(store
        .apply_order(OrderQuantities::from([(1, 0), (2, 0)]))
        .await
        .unwrap()
        .is_none());
    assert!(store
        .apply_order(OrderQuantities::new())
        .await
        .unwrap()
        .is_none());

    assert_eq!(store.snapshot().await.unwrap(), before);
    drop(store);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_never_increases_and_revenue_matches_lines() {
    let (system, clock) = start().await;
    let store = system.store();
    let batches = [
        OrderQuantities::from([(1, 2), (13, 1)]),
        OrderQuantities::from([(1, 20), (6, 1), (19, 5)]),
        OrderQuantities::from([(26, 7), (13, 2)]),
    ];

    for (i, quantities) in batches.into_iter().enumerate() {
        let before = store.products().await.unwrap();
        clock.set(Utc.timestamp_millis_opt(1_700_000_000_000 + i as i64).unwrap());
        store.apply_order(quantities.clone()).await.unwrap();
        let after = store.products().await.unwrap();

        for (old, new) in before.iter().zip(&after) {
            let expected = old.quantity.saturating_sub(quantities.get(old.id));
            assert_eq!(new.quantity, expected, "{}", old.id);
            assert!(new.quantity <= old.quantity);
        }
    }

    let orders = store.orders().await.unwrap();
    assert_eq!(orders.len(), 3);
    let from_lines: f64 = orders
        .iter()
        .flat_map(|o| &o.lines)
        .map(|l| f64::from(l.qty) * l.price)
        .sum();
    assert_eq!(store.total_revenue().await.unwrap(), from_lines);

    // T-shirt 2 + 20 = 22, Brosse 7, Chaise 5; Smartphone 3 does not make it
    let top = store.top_products().await.unwrap();
    let ranked: Vec<(u32, u64)> = top.iter().map(|t| (t.product_id.0, t.qty)).collect();
    assert_eq!(ranked, vec![(1, 22), (26, 7), (19, 5)]);

    drop(store);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_best_seller_counts_exceed_u32() {
    let (system, clock) = start().await;
    let store = system.store();

    for i in 0..2 {
        clock.set(Utc.timestamp_millis_opt(1_700_000_000_000 + i).unwrap());
        store
            .apply_order(OrderQuantities::from([(1, 3_000_000_000)]))
            .await
            .unwrap()
            .expect("order should be recorded");
    }

    let top = store.top_products().await.unwrap();
    assert_eq!(top[0].product_id, ProductId(1));
    assert_eq!(top[0].qty, 6_000_000_000);

    // session still answers after the large aggregate
    assert_eq!(store.orders_count().await.unwrap(), 2);
    let tshirt = store
        .products()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.id == ProductId(1))
        .unwrap();
    assert_eq!(tshirt.quantity, 0);

    drop(store);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_form_end_to_end() {
    let (system, _) = start().await;
    let mut form = OrderForm::open(system.store()).await.unwrap();
    let mut dashboard = Dashboard::new(system.store());

    let before = dashboard.refresh().await.unwrap();
    assert_eq!(before.orders_count, 0);
    assert_eq!(before.product_count, 30);
    assert_eq!(before.average_stock, 11);

    form.customer = Customer {
        first_name: "Camille".into(),
        last_name: "Durand".into(),
        email: "camille@example.com".into(),
    };
    // clamped to the 5 in stock
    assert_eq!(form.set_quantity(ProductId(2), "8"), Some(5));
    assert_eq!(form.set_quantity(ProductId(3), "2.5"), Some(2));
    assert_eq!(form.total_price(), 5.0 * 50.0 + 2.0 * 15.0);

    form.submit().unwrap();
    let confirmation = form.confirm().await.unwrap();
    assert_eq!(confirmation.total_items(), 7);
    assert_eq!(confirmation.total_price(), 280.0);
    assert!(matches!(form.step(), FormStep::Confirmed(_)));
    assert_eq!(form.products()[1].quantity, 0);

    let after = dashboard.refresh().await.unwrap();
    assert_eq!(after.orders_count, 1);
    assert_eq!(after.total_revenue, 280.0);
    assert_eq!(after.top_sellers[0].name, "Jean");

    form.new_order().await.unwrap();
    assert!(form.cart().is_empty());
    assert_eq!(form.step(), &FormStep::Editing);

    drop(form);
    drop(dashboard);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reload_resets_session_and_retires_old_handles() {
    let (mut system, _) = start().await;
    let old = system.store();
    old.apply_order(OrderQuantities::from([(5, 4)]))
        .await
        .unwrap();

    let fresh = system.reload().await.unwrap();
    assert_ne!(fresh.session_id(), old.session_id());
    assert_eq!(fresh.orders_count().await.unwrap(), 0);
    assert_eq!(fresh.products().await.unwrap(), seed::products());

    assert!(matches!(
        old.products().await,
        Err(SessionError::NotFound(_))
    ));

    drop(old);
    drop(fresh);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_default_filter_lists_whole_catalog() {
    let (system, _) = start().await;
    let products = system.store().products().await.unwrap();
    let all = CatalogFilter::default().apply(&products);
    assert_eq!(all.len(), products.len());
    assert!(all.iter().zip(&products).all(|(a, b)| a.id == b.id));
    assert_eq!(stats::rounded_average_stock(&products), 11);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_seed_is_rejected() {
    let path = std::env::temp_dir().join(format!("{}-dup-seed.toml", std::process::id()));
    std::fs::write(
        &path,
        "[[products]]\nid = 1\nname = \"A\"\ncategory = \"X\"\nprice = 1.0\nquantity = 1\nrestock_threshold = 1\n\
         [[products]]\nid = 1\nname = \"B\"\ncategory = \"X\"\nprice = 1.0\nquantity = 1\nrestock_threshold = 1\n",
    )
    .unwrap();
    let config = StorefrontConfig {
        seed: Some(path.clone()),
        ..StorefrontConfig::default()
    };

    let err = StorefrontSystem::start(config)
        .await
        .err()
        .expect("duplicate ids must be rejected");
    assert!(matches!(
        err.downcast_ref::<SessionError>(),
        Some(SessionError::InvalidSeed(_))
    ));
    std::fs::remove_file(path).unwrap();
}
