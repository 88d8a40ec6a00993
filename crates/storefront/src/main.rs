//! # Storefront demo
//!
//! Runs one customer through the whole workflow against in-memory actors:
//!
//! 1. Seed the catalog.
//! 2. Fill a cart and adjust it.
//! 3. Check out.
//! 4. Walk the order through confirmation, shipping and delivery.
//!
//! Fees and mailbox sizes come from [`StorefrontConfig`]; run with `RUST_LOG=info` (or
//! `debug`) to watch the actors.

use actor_framework::tracing::setup_tracing;
use rust_decimal::Decimal;
use storefront::api::{AddToCartRequest, UpdateCartRequest, UpdateStatusRequest};
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{Customer, OrderStatus, ProductCreate, QuantityChange, ShippingDetails};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StorefrontConfig::load()?;
    let system = Storefront::new(&config);

    let span = tracing::info_span!("catalog_seeding");
    let (shirt, socks) = async {
        let shirt = system
            .catalog
            .create_product(ProductCreate {
                title: "Linen Shirt".to_string(),
                price: Decimal::new(1200, 0),
                discount_percent: 10,
            })
            .await?;
        let socks = system
            .catalog
            .create_product(ProductCreate {
                title: "Wool Socks".to_string(),
                price: Decimal::new(300, 0),
                discount_percent: 0,
            })
            .await?;
        info!(shirt = %shirt.id, socks = %socks.id, "Catalog seeded");
        Ok::<_, storefront::product_actor::ProductError>((shirt, socks))
    }
    .instrument(span)
    .await?;

    let customer = Customer::new(1);
    let api = system.api();

    let span = tracing::info_span!("shopping", customer = %customer.id);
    async {
        api.add_to_cart(&customer, AddToCartRequest { product_id: shirt.id })
            .await?;
        let socks_line = api
            .add_to_cart(&customer, AddToCartRequest { product_id: socks.id })
            .await?;
        api.update_cart(
            &customer,
            socks_line.body.id,
            UpdateCartRequest {
                operation: QuantityChange::Increment,
            },
        )
        .await?;

        let cart = api.get_cart(&customer).await?;
        info!(lines = cart.body.item_count, total = %cart.body.total, "Cart ready");
        Ok::<_, storefront::api::ApiError>(())
    }
    .instrument(span)
    .await?;

    let shipping = ShippingDetails {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "asha@example.com".to_string(),
        mobile_no: "9000000000".to_string(),
        address: "12 Lake Road".to_string(),
        city: "Pune".to_string(),
        state: "MH".to_string(),
        pincode: "411001".to_string(),
        payment_type: "COD".to_string(),
    };

    let span = tracing::info_span!("checkout", customer = %customer.id);
    let placed = api.place_order(&customer, shipping).instrument(span).await;

    match placed {
        Ok(reply) => {
            let order_id = reply.body.order_id;
            info!(order = %order_id, reference = %reply.body.reference, "Order placed");

            for status in [
                OrderStatus::Confirmed,
                OrderStatus::Shipped,
                OrderStatus::Delivered,
            ] {
                let updated = api
                    .update_order_status(
                        order_id,
                        UpdateStatusRequest {
                            status: status.code(),
                        },
                    )
                    .await?;
                info!(order = %order_id, status = %updated.body.status, "Order progressed");
            }

            let history = api.customer_orders(&customer).await?;
            info!(orders = history.body.len(), "Order history loaded");
        }
        Err(e) => error!(error = %e, kind = %e.kind, "Checkout failed"),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
