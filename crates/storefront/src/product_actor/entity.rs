//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables [`Product`] to
//! be managed by the generic [`ResourceActor`](actor_framework::ResourceActor).

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{
    PriceQuote, Product, ProductCreate, ProductId, ProductUpdate, MAX_DISCOUNT_PERCENT, MAX_PRICE,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn check_discount(percent: u8) -> Result<u8, ProductError> {
    if percent > MAX_DISCOUNT_PERCENT {
        return Err(ProductError::InvalidDiscount(percent));
    }
    Ok(percent)
}

fn check_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price < Decimal::ZERO || price > MAX_PRICE {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Creates a new, active Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let price = check_price(params.price)?;
        let discount = check_discount(params.discount_percent)?;
        Ok(Self::new(id, params.title, price, discount))
    }

    /// Handles updates to the Product entity.
    ///
    /// The update is validated before any field changes, so a rejected update leaves the
    /// product as it was. The discount price is derived, so it follows automatically.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let price = update.price.map(check_price).transpose()?;
        let discount = update.discount_percent.map(check_discount).transpose()?;

        if let Some(percent) = discount {
            self.discount_percent = percent;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::Quote => {
                if !self.active {
                    return Err(ProductError::Inactive(self.id));
                }
                let unit_price = self
                    .discount_price()
                    .ok_or(ProductError::InvalidPrice(self.price))?;
                Ok(ProductActionResult::Quote(PriceQuote {
                    product_id: self.id,
                    title: self.title.clone(),
                    unit_price,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new(ProductId(1), "Lamp", Decimal::new(100, 0), 20)
    }

    #[test]
    fn test_create_rejects_discount_over_100() {
        let result = Product::from_create_params(
            ProductId(1),
            ProductCreate {
                title: "Lamp".into(),
                price: Decimal::new(100, 0),
                discount_percent: 101,
            },
        );
        assert_eq!(result.unwrap_err(), ProductError::InvalidDiscount(101));
    }

    #[test]
    fn test_create_rejects_negative_or_oversized_price() {
        for price in [Decimal::new(-500, 0), MAX_PRICE + Decimal::ONE, Decimal::MAX] {
            let result = Product::from_create_params(
                ProductId(1),
                ProductCreate {
                    title: "Lamp".into(),
                    price,
                    discount_percent: 0,
                },
            );
            assert_eq!(result.unwrap_err(), ProductError::InvalidPrice(price));
        }
    }

    #[tokio::test]
    async fn test_update_rejects_negative_price_before_changing_anything() {
        let mut product = lamp();
        let err = product
            .on_update(
                ProductUpdate {
                    title: Some("Cheap lamp".into()),
                    price: Some(Decimal::new(-1, 0)),
                    discount_percent: Some(50),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, ProductError::InvalidPrice(Decimal::new(-1, 0)));
        assert_eq!(product.title, "Lamp");
        assert_eq!(product.price, Decimal::new(100, 0));
        assert_eq!(product.discount_percent, 20);
    }

    #[tokio::test]
    async fn test_product_at_max_price_can_be_quoted() {
        let mut product = Product::from_create_params(
            ProductId(1),
            ProductCreate {
                title: "Yacht".into(),
                price: MAX_PRICE,
                discount_percent: 10,
            },
        )
        .unwrap();
        let ProductActionResult::Quote(quote) =
            product.handle_action(ProductAction::Quote, &()).await.unwrap();
        assert_eq!(quote.unit_price, Decimal::new(900_000_000, 0));
    }

    #[tokio::test]
    async fn test_quote_overflow_is_an_error() {
        let mut product = Product::new(ProductId(1), "Lamp", Decimal::MAX, 10);
        let err = product
            .handle_action(ProductAction::Quote, &())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice(Decimal::MAX));
    }

    #[tokio::test]
    async fn test_rejected_update_changes_nothing() {
        let mut product = lamp();
        let err = product
            .on_update(
                ProductUpdate {
                    price: Some(Decimal::new(5, 0)),
                    discount_percent: Some(150),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, ProductError::InvalidDiscount(150));
        assert_eq!(product.price, Decimal::new(100, 0));
    }

    #[tokio::test]
    async fn test_quote_uses_discount_price() {
        let mut product = lamp();
        let ProductActionResult::Quote(quote) =
            product.handle_action(ProductAction::Quote, &()).await.unwrap();
        assert_eq!(quote.unit_price, Decimal::new(80, 0));
        assert_eq!(quote.title, "Lamp");
    }

    #[tokio::test]
    async fn test_inactive_product_cannot_be_quoted() {
        let mut product = lamp();
        product.active = false;
        let err = product
            .handle_action(ProductAction::Quote, &())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::Inactive(ProductId(1)));
    }
}
