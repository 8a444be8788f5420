//! Basket behaviour through the application state.

use corner_shop_core::{Price, ProductId};
use corner_shop_integration_tests::{product, state_for};

fn contents(state: &corner_shop_storefront::state::AppState) -> Vec<(i32, u32)> {
    state
        .basket()
        .items()
        .iter()
        .map(|item| (item.id().as_i32(), item.quantity()))
        .collect()
}

#[test]
fn test_add_update_and_total_scenario() {
    let state = state_for("http://127.0.0.1:9");

    let first = product(1, "Kettle", 20.0);
    let second = product(2, "Teabags", 5.0);

    state.update_basket(|b| b.add(&first));
    state.update_basket(|b| b.add(&second));
    state.update_basket(|b| b.add(&first));

    assert_eq!(contents(&state), vec![(1, 2), (2, 1)]);
    assert_eq!(state.basket().total_price(), Price::from_cents(4500));

    state.update_basket(|b| b.update_quantity(ProductId::new(2), 0));

    assert_eq!(contents(&state), vec![(1, 2)]);
    assert_eq!(state.basket().total_price(), Price::from_cents(4000));
}

#[test]
fn test_distinct_products_each_counted() {
    let state = state_for("http://127.0.0.1:9");
    let adds = [5, 3, 5, 5, 8, 3];

    for id in adds {
        state.update_basket(|b| b.add(&product(id, "Thing", 1.5)));
    }

    assert_eq!(contents(&state), vec![(5, 3), (3, 2), (8, 1)]);
    assert_eq!(state.basket().item_count(), 6);
    assert_eq!(state.basket().total_price(), Price::from_cents(900));
}

#[test]
fn test_total_from_mixed_quantities() {
    let state = state_for("http://127.0.0.1:9");
    state.update_basket(|b| {
        b.add(&product(1, "Ten", 10.0));
        b.update_quantity(ProductId::new(1), 2);
        b.add(&product(2, "Five", 5.0));
    });

    assert_eq!(state.basket().total_price(), Price::from_cents(2500));
}

#[test]
fn test_remove_and_negative_update() {
    let state = state_for("http://127.0.0.1:9");
    state.update_basket(|b| {
        b.add(&product(1, "A", 1.0));
        b.add(&product(2, "B", 1.0));
        b.add(&product(3, "C", 1.0));
    });

    state.update_basket(|b| b.remove(ProductId::new(99)));
    assert_eq!(contents(&state).len(), 3);

    state.update_basket(|b| b.remove(ProductId::new(2)));
    state.update_basket(|b| b.update_quantity(ProductId::new(3), -5));
    assert_eq!(contents(&state), vec![(1, 1)]);
}
