use super::*;
use shared::models::{Item, OrderCustomer, OrderLine, PriceMethod, PricePack};

fn flat_order(qty: f64, unit_price: f64) -> Order {
    Order {
        order_id: "order-1".to_string(),
        customer: OrderCustomer {
            uid: Some("12345".to_string()),
            profile_url: Some("https://example.com/profile/12345".to_string()),
            ..Default::default()
        },
        item: OrderLine {
            kind: Some("size M".to_string()),
            unit_price,
            qty,
            total_price: (unit_price * qty).round(),
            ..Default::default()
        },
        status_code: "ORDERED".to_string(),
        currency: "VND".to_string(),
        ..Default::default()
    }
}

fn pack_order(qty: f64) -> Order {
    let mut order = flat_order(qty, 0.0);
    order.matched_item = Some(Item {
        name: Some("blanket".to_string()),
        kind: None,
        prices: vec![
            PricePack {
                qty: 2.0,
                bundle_price: 90000.0,
            },
            PricePack {
                qty: 1.0,
                bundle_price: 50000.0,
            },
        ],
    });
    order.price_calc = Some(compute_min_cost(
        &order.matched_item.as_ref().unwrap().prices,
        qty,
    ));
    order
}

#[test]
fn split_conserves_quantity_exactly() {
    let order = flat_order(10.0, 50000.0);
    let plan = plan_split(&order, 4.0, Some("NEW")).unwrap();

    assert_eq!(plan.original_update.qty, Some(6.0));
    assert_eq!(plan.new_order.qty, 4.0);
    assert_eq!(
        plan.original_update.qty.unwrap() + plan.new_order.qty,
        order.item.qty
    );
    assert_eq!(plan.new_order.status_code, "NEW");
}

#[test]
fn each_side_is_repriced_from_its_own_quantity() {
    let order = flat_order(10.0, 50000.0);
    let plan = plan_split(&order, 4.0, None).unwrap();

    assert_eq!(plan.original_update.unit_price, Some(50000.0));
    assert_eq!(plan.original_update.total_price, Some(300000.0));
    assert_eq!(plan.new_order.price_calc, None);
    // the new side keeps the same per-unit price and customer
    assert_eq!(plan.new_order.url, "https://example.com/profile/12345");
    assert_eq!(plan.new_order.kind.as_deref(), Some("size M"));
}

#[test]
fn default_status_is_new() {
    let order = flat_order(3.0, 1000.0);
    let plan = plan_split(&order, 1.0, None).unwrap();
    assert_eq!(plan.new_order.status_code, STATUS_NEW);
    assert_eq!(plan.request.new_status_code.as_deref(), Some(STATUS_NEW));
}

#[test]
fn equal_split_is_rejected() {
    let order = flat_order(5.0, 1000.0);
    let err = plan_split(&order, 5.0, None).unwrap_err();
    assert_eq!(
        err,
        SplitError::ExceedsOriginal {
            split_qty: 5.0,
            order_qty: 5.0
        }
    );
}

#[test]
fn out_of_range_splits_are_rejected() {
    let order = flat_order(5.0, 1000.0);
    assert_eq!(
        plan_split(&order, 0.0, None).unwrap_err(),
        SplitError::NonPositive(0.0)
    );
    assert_eq!(
        plan_split(&order, -2.0, None).unwrap_err(),
        SplitError::NonPositive(-2.0)
    );
    assert!(matches!(
        plan_split(&order, 9.0, None).unwrap_err(),
        SplitError::ExceedsOriginal { .. }
    ));
    assert_eq!(
        plan_split(&order, 2.5, None).unwrap_err(),
        SplitError::Fractional(2.5)
    );
    assert!(matches!(
        plan_split(&order, f64::NAN, None).unwrap_err(),
        SplitError::NonPositive(_)
    ));
}

#[test]
fn pack_priced_sides_get_fresh_calculations() {
    // 5 units: dp total 230 000 (2+2+1). After a 2-off split the sides are
    // 3 -> 140 000 and 2 -> 90 000; pack breakpoints mean the sides do not
    // sum to the original 230 000 minus anything proportional.
    let order = pack_order(5.0);
    let plan = plan_split(&order, 2.0, None).unwrap();

    let original_calc = plan.original_update.price_calc.as_ref().unwrap();
    assert_eq!(original_calc.method, PriceMethod::Dp);
    assert_eq!(original_calc.total, 140000.0);

    let new_calc = plan.new_order.price_calc.as_ref().unwrap();
    assert_eq!(new_calc.method, PriceMethod::Dp);
    assert_eq!(new_calc.total, 90000.0);
}

#[test]
fn plan_carries_the_wire_request() {
    let order = flat_order(10.0, 50000.0);
    let plan = plan_split(&order, 4.0, Some("DELIVERING")).unwrap();
    assert_eq!(plan.request.split_qty, 4.0);
    assert_eq!(plan.request.new_status_code.as_deref(), Some("DELIVERING"));
}
