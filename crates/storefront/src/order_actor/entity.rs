//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables [`Order`] to
//! be managed by the generic [`ResourceActor`](actor_framework::ResourceActor).

use super::actions::{OrderAction, OrderUpdate};
use super::error::OrderError;
use super::OrderContext;
use crate::model::{Order, OrderDraft, OrderId, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{info, warn};

impl Order {
    /// Applies a status change by code, checked against the transition table.
    pub fn transition(&mut self, code: u8) -> Result<OrderStatus, OrderError> {
        let next = OrderStatus::from_code(code).ok_or(OrderError::UnknownStatus(code))?;
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(next)
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = OrderContext;
    type Error = OrderError;

    /// Places the order: fresh reference, status `Placed`.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, Self::Error> {
        Ok(Order::place(id, draft))
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), Self::Error> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), Self::Error> {
        Err(OrderError::Retained(self.id))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::ChangeStatus(code) => {
                let previous = self.status;
                let status = self.transition(code)?;
                info!(order = %self.id, from = %previous, to = %status, "Status changed");

                let notifier = ctx.notifier.clone();
                let order = self.clone();
                tokio::spawn(async move {
                    if let Err(e) = notifier.notify(&order, status).await {
                        warn!(order = %order.id, %status, error = %e, "Status notification failed");
                    }
                });

                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, OrderTotals, ShippingDetails};
    use rust_decimal::Decimal;

    fn placed() -> Order {
        Order::place(
            OrderId(1),
            OrderDraft {
                customer_id: CustomerId(1),
                items: Vec::new(),
                shipping: ShippingDetails::default(),
                totals: OrderTotals::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            },
        )
    }

    #[test]
    fn test_transition_follows_table() {
        let mut order = placed();
        assert_eq!(order.transition(2), Ok(OrderStatus::Confirmed));
        assert_eq!(order.transition(3), Ok(OrderStatus::Shipped));
        assert_eq!(order.transition(4), Ok(OrderStatus::Delivered));
        assert_eq!(
            order.transition(5),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Cancelled,
            })
        );
    }

    #[test]
    fn test_rejected_transition_keeps_status() {
        let mut order = placed();
        assert!(order.transition(3).is_err());
        assert_eq!(order.status, OrderStatus::Placed);
    }

    #[test]
    fn test_unknown_code() {
        let mut order = placed();
        assert_eq!(order.transition(9), Err(OrderError::UnknownStatus(9)));
    }

    #[test]
    fn test_same_status_is_not_a_transition() {
        let mut order = placed();
        assert!(matches!(
            order.transition(1),
            Err(OrderError::InvalidTransition { .. })
        ));
    }
}
