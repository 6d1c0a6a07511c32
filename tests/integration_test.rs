use order_desk::kitchen;
use order_desk::model::{Customer, Order, OrderKind, OrderStatus};
use order_desk::runtime::{OrderError, OrderSystem};

/// Full workflow: a standard order then an express order on a fresh system.
#[test]
fn test_standard_then_express_order() {
    let mut system = OrderSystem::new();

    // Standard order
    let receipt = system
        .try_process_order(Order::standard(101, "Burger", "Delivery"))
        .expect("Failed to process standard order");
    assert_eq!(system.len(), 1);
    assert_eq!(receipt.id(), 1);
    assert_eq!(receipt.details(), "Order #101 registered");

    let burger = system.order(101).expect("Order 101 not registered");
    assert_eq!(burger.status(), OrderStatus::Prepared);
    assert_eq!(burger.shipping_type(), Some("Delivery"));

    // Express order
    let receipt = system
        .try_process_order(Order::express(102, "Pizza", 30))
        .expect("Failed to process express order");
    assert_eq!(system.len(), 2);
    assert_eq!(receipt.id(), 2);

    let pizza = system.order(102).expect("Order 102 not registered");
    assert_eq!(pizza.status(), OrderStatus::Prepared);
    assert_eq!(pizza.kind(), &OrderKind::Express { delivery_minutes: 30 });

    // Registry keeps submission order
    let ids: Vec<u64> = system.orders().iter().map(Order::id).collect();
    assert_eq!(ids, vec![101, 102]);
}

#[test]
fn test_zero_id_is_rejected() {
    let mut system = OrderSystem::new();
    system.process_order(Order::new(1, "Soup"));

    let rejected = system
        .try_process_order(Order::new(0, "X"))
        .expect_err("Order with id 0 should be rejected");

    assert!(matches!(rejected.error, OrderError::InvalidOrder(_)));
    assert_eq!(system.len(), 1, "Registry should not change on rejection");
    assert!(system.order(0).is_none());

    // The caller gets its order back, never prepared
    let order = rejected.into_order();
    assert_eq!(order.id(), 0);
    assert_eq!(order.status(), OrderStatus::Pending);
}

#[test]
fn test_empty_details_are_rejected() {
    let mut system = OrderSystem::new();

    let rejected = system
        .try_process_order(Order::new(55, ""))
        .expect_err("Should fail when details are empty");

    assert_eq!(rejected.order().status(), OrderStatus::Pending);
    assert!(system.is_empty());
    assert!(system.order(55).is_none());
}

/// `process_order` never reports failure; a turned-down order just comes back.
#[test]
fn test_process_order_swallows_rejection() {
    let mut system = OrderSystem::new();

    let returned = system
        .process_order(Order::new(0, ""))
        .expect("Rejected order should be handed back");
    assert_eq!(returned.status(), OrderStatus::Pending);

    let returned = system
        .process_order(Order::standard(0, "Fries", "Pickup"))
        .expect("Rejected order should be handed back");
    assert_eq!(returned.status(), OrderStatus::Pending);
    assert_eq!(returned.shipping_type(), Some("Pickup"));
    assert!(system.is_empty());

    assert!(system.process_order(Order::standard(7, "Fries", "Pickup")).is_none());
    assert_eq!(system.len(), 1);
}

/// A returned order can be fixed up by the caller; the system never touched it.
#[test]
fn test_returned_order_keeps_caller_changes() {
    let mut system = OrderSystem::new();

    let mut order = system
        .process_order(Order::new(0, "Salad"))
        .expect("Rejected order should be handed back");
    kitchen::prepare(&mut order);
    assert_eq!(order.status(), OrderStatus::Prepared);
    assert!(system.is_empty());
}

#[test]
fn test_customer_places_orders() {
    let mut system = OrderSystem::new();
    let customer = Customer::new("Juan Perez", 1);
    assert_eq!(customer.name(), "Juan Perez");
    assert_eq!(customer.id(), 1);

    let burger = Order::standard(101, "Burger and fries", "Delivery").create();
    assert!(customer.place_order(&mut system, burger).is_none());

    let pizza = Order::express(102, "Family pizza", 30).create();
    assert!(customer.place_order(&mut system, pizza).is_none());

    let empty = customer
        .place_order(&mut system, Order::new(103, "").create())
        .expect("Rejected order should come back to the customer");
    assert_eq!(empty.id(), 103);
    assert_eq!(empty.status(), OrderStatus::Pending);

    assert_eq!(system.len(), 2);
    assert_eq!(system.order(101).map(Order::status), Some(OrderStatus::Prepared));
    assert_eq!(system.order(102).map(Order::status), Some(OrderStatus::Prepared));
    assert!(system.order(103).is_none());
}

#[test]
fn test_status_serde_shape() {
    let json = serde_json::to_string(&OrderStatus::Prepared).unwrap();
    assert_eq!(json, "\"Prepared\"");

    let status: OrderStatus = serde_json::from_str("\"Pending\"").unwrap();
    assert_eq!(status, OrderStatus::Pending);

    let kind = serde_json::to_value(OrderKind::Standard {
        shipping_type: "Pickup".to_string(),
    })
    .unwrap();
    assert_eq!(kind, serde_json::json!({ "Standard": { "shipping_type": "Pickup" } }));
}
