use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use rust_decimal::Decimal;
use storefront::cart_actor::{self, CartContext, CartError};
use storefront::checkout::Fees;
use storefront::clients::{CartClient, OrderClient, ProductClient};
use storefront::model::{
    CustomerId, Order, OrderDraft, OrderId, PriceQuote, Product, ProductId, ShippingDetails,
};
use storefront::product_actor::{ProductActionResult, ProductError};

fn shipping() -> ShippingDetails {
    ShippingDetails {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "asha@example.com".to_string(),
        mobile_no: "9000000000".to_string(),
        address: "12 Lake Road".to_string(),
        city: "Pune".to_string(),
        state: "MH".to_string(),
        pincode: "411001".to_string(),
        payment_type: "COD".to_string(),
    }
}

fn quote(id: u32, price: i64) -> ProductActionResult {
    ProductActionResult::Quote(PriceQuote {
        product_id: ProductId(id),
        title: format!("Product {id}"),
        unit_price: Decimal::new(price, 0),
    })
}

/// Real Cart actor with mocked catalog and order dependencies.
fn spawn_cart(
    catalog: &MockClient<Product>,
    orders: &MockClient<Order>,
) -> (CartClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = cart_actor::new(10);
    let handle = tokio::spawn(actor.run(CartContext {
        catalog: ProductClient::new(catalog.client()),
        orders: OrderClient::new(orders.client()),
        fees: Fees::default(),
    }));
    (CartClient::new(client), handle)
}

#[tokio::test]
async fn test_add_prices_line_from_catalog_quote() {
    let mut catalog = MockClient::<Product>::new();
    let orders = MockClient::<Order>::new();

    catalog.expect_action(ProductId(1)).return_ok(quote(1, 100));
    catalog.expect_action(ProductId(1)).return_ok(quote(1, 999));

    let (carts, handle) = spawn_cart(&catalog, &orders);

    let first = carts.add_to_cart(CustomerId(1), ProductId(1)).await.unwrap();
    let second = carts.add_to_cart(CustomerId(1), ProductId(1)).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.quantity, 2);
    assert_eq!(second.unit_price, Decimal::new(100, 0));
    catalog.verify();

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_first_add_leaves_no_cart() {
    let mut catalog = MockClient::<Product>::new();
    let orders = MockClient::<Order>::new();

    catalog
        .expect_action(ProductId(4))
        .return_err(FrameworkError::EntityError(Box::new(ProductError::Inactive(
            ProductId(4),
        ))));

    let (carts, handle) = spawn_cart(&catalog, &orders);

    let err = carts
        .add_to_cart(CustomerId(1), ProductId(4))
        .await
        .unwrap_err();
    assert_eq!(err, CartError::ProductNotFound(ProductId(4)));

    let view = carts.list_cart(CustomerId(1)).await.unwrap();
    assert!(view.lines.is_empty());
    catalog.verify();

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_checkout_sends_frozen_lines_and_clears_cart() {
    let mut catalog = MockClient::<Product>::new();
    let (order_client, mut order_requests) =
        actor_framework::mock::create_mock_client::<Order>(10);

    catalog.expect_action(ProductId(1)).return_ok(quote(1, 100));
    catalog.expect_action(ProductId(2)).return_ok(quote(2, 50));

    let (actor, client) = cart_actor::new(10);
    let handle = tokio::spawn(actor.run(CartContext {
        catalog: ProductClient::new(catalog.client()),
        orders: OrderClient::new(order_client),
        fees: Fees::default(),
    }));
    let carts = CartClient::new(client);

    carts.add_to_cart(CustomerId(1), ProductId(1)).await.unwrap();
    carts.add_to_cart(CustomerId(1), ProductId(2)).await.unwrap();

    let checkout = {
        let carts = carts.clone();
        tokio::spawn(async move { carts.checkout(CustomerId(1), shipping()).await })
    };

    let (draft, responder): (OrderDraft, _) =
        actor_framework::mock::expect_create(&mut order_requests)
            .await
            .expect("Expected Create request");
    assert_eq!(draft.customer_id, CustomerId(1));
    assert_eq!(draft.items.len(), 2);
    assert_eq!(draft.totals.subtotal, Decimal::new(150, 0));
    assert_eq!(draft.totals.total, Decimal::new(500, 0));

    responder.send(Ok(Order::place(OrderId(1), draft))).unwrap();

    let order = checkout.await.unwrap().unwrap();
    assert_eq!(order.id, OrderId(1));

    let view = carts.list_cart(CustomerId(1)).await.unwrap();
    assert!(view.lines.is_empty());

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_order_persistence_keeps_cart() {
    let mut catalog = MockClient::<Product>::new();
    let mut orders = MockClient::<Order>::new();

    catalog.expect_action(ProductId(1)).return_ok(quote(1, 100));
    orders.expect_create().return_err(FrameworkError::ActorClosed);

    let (carts, handle) = spawn_cart(&catalog, &orders);

    carts.add_to_cart(CustomerId(1), ProductId(1)).await.unwrap();
    let err = carts
        .checkout(CustomerId(1), shipping())
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::Checkout(_)));

    let view = carts.list_cart(CustomerId(1)).await.unwrap();
    assert_eq!(view.item_count, 1);
    assert_eq!(view.total, Decimal::new(100, 0));
    orders.verify();

    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_carts_are_isolated_per_customer() {
    let mut catalog = MockClient::<Product>::new();
    let orders = MockClient::<Order>::new();

    catalog.expect_action(ProductId(1)).return_ok(quote(1, 10));

    let (carts, handle) = spawn_cart(&catalog, &orders);

    let line = carts.add_to_cart(CustomerId(1), ProductId(1)).await.unwrap();

    // Another customer cannot reach the line
    let err = carts.remove_line(CustomerId(2), line.id).await.unwrap_err();
    assert_eq!(err, CartError::LineNotFound(line.id));

    let cleared = carts.clear_cart(CustomerId(2)).await.unwrap();
    assert!(cleared.lines.is_empty());
    assert_eq!(carts.list_cart(CustomerId(1)).await.unwrap().item_count, 1);

    let view = carts.remove_line(CustomerId(1), line.id).await.unwrap();
    assert!(view.lines.is_empty());

    drop(carts);
    handle.await.unwrap();
}
