//! Represents a product in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
//! - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
//! - Custom actions ([`ProductAction`](crate::product_actor::actions::ProductAction))

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Highest accepted discount, in percent.
pub const MAX_DISCOUNT_PERCENT: u8 = 100;

/// Highest accepted list price: 1,000,000,000.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub discount_percent: u8,
    pub active: bool,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, price: Decimal, discount_percent: u8) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            discount_percent,
            active: true,
        }
    }

    /// The price a customer pays: `price × (100 − discount) / 100`, rounded to cents.
    ///
    /// Always derived from `price` and `discount_percent`, so it can never drift from them.
    /// `None` when the arithmetic overflows.
    pub fn discount_price(&self) -> Option<Decimal> {
        let keep = Decimal::from(100 - u32::from(self.discount_percent.min(MAX_DISCOUNT_PERCENT)));
        let price = self.price.checked_mul(keep)?.checked_div(Decimal::ONE_HUNDRED)?;
        Some(price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub discount_percent: u8,
}

/// DTO for Product updates. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub discount_percent: Option<u8>,
    pub active: Option<bool>,
}

/// What the cart needs to know about a product at the moment it is added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal, discount_percent: u8) -> Product {
        Product::new(ProductId(1), "Lamp", price, discount_percent)
    }

    #[test]
    fn test_discount_price_applies_percent() {
        assert_eq!(
            product(Decimal::new(200, 0), 25).discount_price(),
            Some(Decimal::new(150, 0))
        );
    }

    #[test]
    fn test_discount_price_without_discount_is_price() {
        assert_eq!(
            product(Decimal::new(4999, 2), 0).discount_price(),
            Some(Decimal::new(4999, 2))
        );
    }

    #[test]
    fn test_discount_price_rounds_midpoint_away_from_zero() {
        // 0.25 * 0.9 = 0.225
        assert_eq!(
            product(Decimal::new(25, 2), 10).discount_price(),
            Some(Decimal::new(23, 2))
        );
    }

    #[test]
    fn test_discount_price_follows_price_changes() {
        let mut p = product(Decimal::new(100, 0), 10);
        assert_eq!(p.discount_price(), Some(Decimal::new(90, 0)));

        p.price = Decimal::new(300, 0);
        assert_eq!(p.discount_price(), Some(Decimal::new(270, 0)));

        p.discount_percent = 100;
        assert_eq!(p.discount_price(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_discount_price_overflow_is_none() {
        assert_eq!(product(Decimal::MAX, 10).discount_price(), None);
    }

    #[test]
    fn test_max_price() {
        assert_eq!(MAX_PRICE, Decimal::new(1_000_000_000, 0));
        assert_eq!(
            product(MAX_PRICE, 10).discount_price(),
            Some(Decimal::new(900_000_000, 0))
        );
    }
}
