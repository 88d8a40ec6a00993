//! # Customer Notifications
//!
//! The order actor tells customers about status changes through a [`Notifier`]. Mail
//! delivery itself lives outside this crate: [`LogNotifier`] only logs the rendered message
//! and [`ChannelNotifier`] hands it to whatever worker drains the channel.

use crate::model::{Order, OrderStatus};
use async_trait::async_trait;
use std::fmt::Write;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;

pub const STATUS_SUBJECT: &str = "Product Order Status";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    #[error("Notification rejected: {0}")]
    Rejected(String),

    #[error("Notification service unreachable")]
    Unreachable,
}

/// Delivers status-change notifications for an order.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, order: &Order, status: OrderStatus) -> Result<(), NotifyError>;
}

/// A rendered status mail.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotification {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl StatusNotification {
    pub fn render(order: &Order, status: OrderStatus) -> Self {
        let mut body = format!(
            "Hello {},\n\nYour order {} is now: {}.\n\n",
            order.shipping.full_name(),
            order.reference,
            status.name()
        );
        for item in &order.items {
            // Writing to a String cannot fail
            let _ = writeln!(
                body,
                "  {} x {} @ {} = {}",
                item.quantity,
                item.title,
                item.unit_price,
                item.subtotal()
            );
        }
        let _ = write!(
            body,
            "\nTotal: {}\nPayment: {}\n",
            order.totals.total, order.shipping.payment_type
        );

        Self {
            recipient: order.shipping.email.trim().to_string(),
            subject: STATUS_SUBJECT.to_string(),
            body,
        }
    }
}

/// Logs each notification instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, order: &Order, status: OrderStatus) -> Result<(), NotifyError> {
        let mail = StatusNotification::render(order, status);
        info!(
            order = %order.id,
            recipient = %mail.recipient,
            subject = %mail.subject,
            status = %status,
            "Status notification"
        );
        Ok(())
    }
}

/// Queues each rendered notification for an external mail worker.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<StatusNotification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StatusNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, order: &Order, status: OrderStatus) -> Result<(), NotifyError> {
        self.sender
            .send(StatusNotification::render(order, status))
            .map_err(|_| NotifyError::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CustomerId, OrderDraft, OrderId, OrderItem, OrderTotals, ProductId, ShippingDetails,
    };
    use rust_decimal::Decimal;

    fn order() -> Order {
        Order::place(
            OrderId(4),
            OrderDraft {
                customer_id: CustomerId(1),
                items: vec![OrderItem {
                    product_id: ProductId(1),
                    title: "Shirt".into(),
                    quantity: 2,
                    unit_price: Decimal::new(100, 0),
                }],
                shipping: ShippingDetails {
                    first_name: "Asha".into(),
                    last_name: "Rao".into(),
                    email: " asha@example.com ".into(),
                    payment_type: "COD".into(),
                    ..Default::default()
                },
                totals: OrderTotals::new(
                    Decimal::new(200, 0),
                    Decimal::new(250, 0),
                    Decimal::new(100, 0),
                ),
            },
        )
    }

    #[test]
    fn test_render_status_mail() {
        let mail = StatusNotification::render(&order(), OrderStatus::Shipped);

        assert_eq!(mail.recipient, "asha@example.com");
        assert_eq!(mail.subject, "Product Order Status");
        assert!(mail.body.starts_with("Hello Asha Rao,"));
        assert!(mail.body.contains("is now: Shipped."));
        assert!(mail.body.contains("2 x Shirt @ 100 = 200"));
        assert!(mail.body.contains("Total: 550"));
        assert!(mail.body.contains("Payment: COD"));
    }

    #[tokio::test]
    async fn test_channel_notifier_queues_mail() {
        let (notifier, mut receiver) = ChannelNotifier::new();
        notifier
            .notify(&order(), OrderStatus::Confirmed)
            .await
            .unwrap();

        let mail = receiver.recv().await.unwrap();
        assert!(mail.body.contains("Order Confirmed"));
    }

    #[tokio::test]
    async fn test_channel_notifier_without_worker_is_unreachable() {
        let (notifier, receiver) = ChannelNotifier::new();
        drop(receiver);

        let err = notifier
            .notify(&order(), OrderStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err, NotifyError::Unreachable);
    }
}
