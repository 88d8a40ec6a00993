//! Storefront configuration module

use crate::checkout::Fees;
use clap::Parser;
use rust_decimal::Decimal;

/// Storefront runtime configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", about = "Storefront cart and order service", long_about = None)]
pub struct StorefrontConfig {
    /// Flat shipping fee added to every order
    #[arg(long, env = "STOREFRONT_SHIPPING_FEE", default_value = "250")]
    pub shipping_fee: Decimal,

    /// Flat handling fee added to every order
    #[arg(long, env = "STOREFRONT_HANDLING_FEE", default_value = "100")]
    pub handling_fee: Decimal,

    /// Mailbox capacity of each actor
    #[arg(long, env = "STOREFRONT_MAILBOX_CAPACITY", default_value = "32")]
    pub mailbox_capacity: usize,
}

impl StorefrontConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    #[must_use]
    pub fn fees(&self) -> Fees {
        Fees {
            shipping: self.shipping_fee,
            handling: self.handling_fee,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let fees = Fees::default();
        Self {
            shipping_fee: fees.shipping,
            handling_fee: fees.handling,
            mailbox_capacity: 32,
        }
    }
}
