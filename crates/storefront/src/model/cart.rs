//! Cart ledger state.
//!
//! A [`Cart`] holds one customer's lines in insertion order. Totals are never stored: every
//! [`CartView`] recomputes them from the lines it is built from.

use super::{CustomerId, PriceQuote, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a line within a cart. Allocated per cart and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLineId(pub u32);

impl Display for CartLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartLineId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    /// Discounted product price when the line was first added.
    pub unit_price: Decimal,
}

impl CartLine {
    /// Saturates instead of overflowing. Unit prices are capped at
    /// [`MAX_PRICE`](super::MAX_PRICE), so a real line stays far below the limit.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Direction of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityChange {
    Increment,
    Decrement,
}

/// Why a line could not be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    Missing(CartLineId),
    /// One more unit would overflow the quantity or the line subtotal.
    QuantityLimit(CartLineId),
}

/// Outcome of a quantity change on a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineChange {
    Updated(CartLine),
    Removed(CartLineId),
}

#[derive(Debug, Clone)]
pub struct Cart {
    pub customer_id: CustomerId,
    lines: Vec<CartLine>,
    next_line: u32,
}

impl Cart {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            lines: Vec::new(),
            next_line: 1,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of the quoted product.
    ///
    /// An existing line for the product gains one unit and keeps its original unit price.
    pub fn add(&mut self, quote: PriceQuote) -> Result<CartLine, LineError> {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == quote.product_id)
        {
            increment(line)?;
            return Ok(line.clone());
        }

        let line = CartLine {
            id: CartLineId(self.next_line),
            customer_id: self.customer_id,
            product_id: quote.product_id,
            title: quote.title,
            quantity: 1,
            unit_price: quote.unit_price,
        };
        self.next_line += 1;
        self.lines.push(line.clone());
        Ok(line)
    }

    /// Applies a quantity change. Decrementing a line of quantity 1 removes it.
    pub fn adjust(
        &mut self,
        line_id: CartLineId,
        change: QuantityChange,
    ) -> Result<LineChange, LineError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.id == line_id)
            .ok_or(LineError::Missing(line_id))?;
        let line = &mut self.lines[index];

        match change {
            QuantityChange::Increment => {
                increment(line)?;
                Ok(LineChange::Updated(line.clone()))
            }
            QuantityChange::Decrement if line.quantity > 1 => {
                line.quantity -= 1;
                Ok(LineChange::Updated(line.clone()))
            }
            QuantityChange::Decrement => {
                self.lines.remove(index);
                Ok(LineChange::Removed(line_id))
            }
        }
    }

    pub fn remove(&mut self, line_id: CartLineId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id == line_id)?;
        Some(self.lines.remove(index))
    }

    /// Drops every line. Line ids keep counting from where they were.
    pub fn clear(&mut self) -> usize {
        let removed = self.lines.len();
        self.lines.clear();
        removed
    }

    pub fn total(&self) -> Decimal {
        sum(self.lines.iter().map(CartLine::subtotal))
    }

    pub fn view(&self) -> CartView {
        CartView::of(self.customer_id, &self.lines)
    }
}

fn increment(line: &mut CartLine) -> Result<(), LineError> {
    let quantity = line
        .quantity
        .checked_add(1)
        .filter(|&q| line.unit_price.checked_mul(Decimal::from(q)).is_some())
        .ok_or(LineError::QuantityLimit(line.id))?;
    line.quantity = quantity;
    Ok(())
}

/// Saturating sum of money amounts.
pub fn sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// A cart line as presented to the customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartViewLine {
    #[serde(flatten)]
    pub line: CartLine,
    pub subtotal: Decimal,
}

/// Read model of a cart, with totals computed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub customer_id: CustomerId,
    pub lines: Vec<CartViewLine>,
    pub total: Decimal,
    pub item_count: usize,
}

impl CartView {
    pub fn empty(customer_id: CustomerId) -> Self {
        Self::of(customer_id, &[])
    }

    fn of(customer_id: CustomerId, lines: &[CartLine]) -> Self {
        let lines: Vec<CartViewLine> = lines
            .iter()
            .map(|line| CartViewLine {
                subtotal: line.subtotal(),
                line: line.clone(),
            })
            .collect();
        let total = sum(lines.iter().map(|l| l.subtotal));
        Self {
            customer_id,
            item_count: lines.len(),
            lines,
            total,
        }
    }
}
