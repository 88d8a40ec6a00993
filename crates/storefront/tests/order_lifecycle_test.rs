use actor_framework::ActorClient;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use storefront::clients::OrderClient;
use storefront::model::{
    CustomerId, Order, OrderDraft, OrderItem, OrderStatus, OrderTotals, ProductId,
    ShippingDetails,
};
use storefront::notify::{ChannelNotifier, Notifier, NotifyError};
use storefront::order_actor::{self, OrderContext, OrderError};
use tokio::time::timeout;

fn draft() -> OrderDraft {
    OrderDraft {
        customer_id: CustomerId(1),
        items: vec![OrderItem {
            product_id: ProductId(1),
            title: "Shirt".to_string(),
            quantity: 1,
            unit_price: Decimal::new(100, 0),
        }],
        shipping: ShippingDetails {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            payment_type: "COD".to_string(),
            ..Default::default()
        },
        totals: OrderTotals::new(
            Decimal::new(100, 0),
            Decimal::new(250, 0),
            Decimal::new(100, 0),
        ),
    }
}

fn spawn_orders(notifier: Arc<dyn Notifier>) -> OrderClient {
    let (actor, client) = order_actor::new(10);
    tokio::spawn(actor.run(OrderContext { notifier }));
    OrderClient::new(client)
}

/// Counts attempts and always fails.
#[derive(Default)]
struct FailingNotifier {
    attempts: AtomicUsize,
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _order: &Order, _status: OrderStatus) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Rejected("mailbox full".to_string()))
    }
}

#[tokio::test]
async fn test_new_order_is_placed() {
    let (notifier, _mail) = ChannelNotifier::new();
    let orders = spawn_orders(Arc::new(notifier));

    let order = orders.place(draft()).await.unwrap();
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.totals.total, Decimal::new(450, 0));
}

#[tokio::test]
async fn test_confirm_sends_exactly_one_notification() {
    let (notifier, mut mail) = ChannelNotifier::new();
    let orders = spawn_orders(Arc::new(notifier));
    let order = orders.place(draft()).await.unwrap();

    let updated = orders
        .update_status(order.id, OrderStatus::Confirmed.code())
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Confirmed);

    let sent = timeout(Duration::from_secs(1), mail.recv())
        .await
        .expect("notification not sent")
        .expect("channel closed");
    assert_eq!(sent.recipient, "asha@example.com");
    assert_eq!(sent.subject, "Product Order Status");
    assert!(sent.body.contains("Order Confirmed"));

    assert!(timeout(Duration::from_millis(100), mail.recv()).await.is_err());
}

#[tokio::test]
async fn test_rejected_transitions_send_nothing() {
    let (notifier, mut mail) = ChannelNotifier::new();
    let orders = spawn_orders(Arc::new(notifier));
    let order = orders.place(draft()).await.unwrap();

    let err = orders
        .update_status(order.id, OrderStatus::Shipped.code())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Placed,
            to: OrderStatus::Shipped,
        }
    );

    let err = orders.update_status(order.id, 42).await.unwrap_err();
    assert_eq!(err, OrderError::UnknownStatus(42));

    assert_eq!(
        orders.get_order(order.id).await.unwrap().status,
        OrderStatus::Placed
    );
    assert!(timeout(Duration::from_millis(100), mail.recv()).await.is_err());
}

#[tokio::test]
async fn test_terminal_statuses_reject_everything() {
    let (notifier, _mail) = ChannelNotifier::new();
    let orders = spawn_orders(Arc::new(notifier));

    let delivered = orders.place(draft()).await.unwrap();
    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        orders.update_status(delivered.id, status.code()).await.unwrap();
    }

    let cancelled = orders.place(draft()).await.unwrap();
    orders
        .update_status(cancelled.id, OrderStatus::Cancelled.code())
        .await
        .unwrap();

    for id in [delivered.id, cancelled.id] {
        for status in OrderStatus::ALL {
            let err = orders.update_status(id, status.code()).await.unwrap_err();
            assert!(matches!(err, OrderError::InvalidTransition { .. }));
        }
    }
}

#[tokio::test]
async fn test_failed_notification_keeps_new_status() {
    let notifier = Arc::new(FailingNotifier::default());
    let orders = spawn_orders(notifier.clone());
    let order = orders.place(draft()).await.unwrap();

    let updated = orders
        .update_status(order.id, OrderStatus::Confirmed.code())
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Confirmed);

    // The notification runs detached; wait for its attempt
    timeout(Duration::from_secs(1), async {
        while notifier.attempts.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("notification never attempted");

    assert_eq!(
        orders.get_order(order.id).await.unwrap().status,
        OrderStatus::Confirmed
    );
    assert_eq!(notifier.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_order() {
    let (notifier, _mail) = ChannelNotifier::new();
    let orders = spawn_orders(Arc::new(notifier));

    let err = orders
        .update_status(storefront::model::OrderId(9), 2)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)));
    assert!(matches!(
        orders.get_order(storefront::model::OrderId(9)).await,
        Err(OrderError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_orders_cannot_be_deleted() {
    let (notifier, _mail) = ChannelNotifier::new();
    let orders = spawn_orders(Arc::new(notifier));
    let order = orders.place(draft()).await.unwrap();

    let err = orders.delete(order.id).await.unwrap_err();
    assert_eq!(err, OrderError::Retained(order.id));
    assert!(orders.get_order(order.id).await.is_ok());
}
