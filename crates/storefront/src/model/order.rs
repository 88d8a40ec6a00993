//! Represents a customer order.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderDraft`])
//! - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
//!
//! Everything but `status` is frozen when the order is placed.

use crate::model::{CartLine, CustomerId, OrderStatus, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Customer-facing order reference, unique per order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(pub Uuid);

impl OrderReference {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl Display for OrderReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A frozen copy of a cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            title: line.title.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

/// Shipping and contact details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment_type: String,
}

impl ShippingDetails {
    /// Checks every field, returning the names of all offending ones.
    ///
    /// Fields must be non-blank; `email` must also have text on both sides of an `@`.
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let fields = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("mobileNo", &self.mobile_no),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
            ("paymentType", &self.payment_type),
        ];

        let mut invalid: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !self.email.trim().is_empty() && !is_plausible_email(self.email.trim()) {
            invalid.push("email");
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping_fee: Decimal,
    pub handling_fee: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    pub fn new(subtotal: Decimal, shipping_fee: Decimal, handling_fee: Decimal) -> Self {
        Self {
            subtotal,
            shipping_fee,
            handling_fee,
            total: subtotal
                .saturating_add(shipping_fee)
                .saturating_add(handling_fee),
        }
    }
}

/// Payload for creating a new order. Built by checkout, never by callers directly.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,
    pub shipping: ShippingDetails,
    pub totals: OrderTotals,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub reference: OrderReference,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,
    pub shipping: ShippingDetails,
    pub totals: OrderTotals,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a freshly placed order with a new reference.
    pub fn place(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            reference: OrderReference::generate(),
            customer_id: draft.customer_id,
            items: draft.items,
            shipping: draft.shipping,
            totals: draft.totals,
            status: OrderStatus::Placed,
        }
    }
}
