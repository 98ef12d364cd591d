//! Catalog, sales and payment entities.

use crate::utils::error::{KataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Overwrites the stock count.
    pub fn update_stock(&mut self, new_stock: u32) {
        self.stock = new_stock;
    }

    pub fn has_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Takes `quantity` units out of stock, or fails leaving stock untouched.
    pub fn reserve_stock(&mut self, quantity: u32) -> Result<()> {
        if !self.has_stock(quantity) {
            return Err(self.shortage(quantity));
        }
        self.stock -= quantity;
        tracing::debug!("Product {}: reserved {}, {} left", self.id, quantity, self.stock);
        Ok(())
    }

    pub fn release_stock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
        tracing::debug!("Product {}: released {}, {} left", self.id, quantity, self.stock);
    }

    fn shortage(&self, requested: u32) -> KataError {
        KataError::InsufficientStock {
            product_id: self.id.clone(),
            requested,
            available: self.stock,
        }
    }
}

/// A line of a [`Cart`]: the product as it was when added, and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    customer_id: String,
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            items: Vec::new(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a line for `quantity` units of `product`. The quantity must be
    /// positive and covered by the product's current stock.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(KataError::InvalidQuantity {
                product_id: product.id.clone(),
                quantity,
            });
        }
        if !product.has_stock(quantity) {
            return Err(product.shortage(quantity));
        }
        tracing::debug!(
            "Cart {}: adding {} x {}",
            self.customer_id,
            quantity,
            product.name
        );
        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Turns the cart into a pending [`Order`] carrying the current total.
    pub fn place_order(&self, order_id: impl Into<String>) -> Result<Order> {
        if self.items.is_empty() {
            return Err(KataError::EmptyCart {
                customer_id: self.customer_id.clone(),
            });
        }
        Ok(Order::new(order_id, self.total()))
    }

    /// Places the order and reserves every line's stock in `catalog`.
    /// Nothing is reserved when the order cannot be placed.
    pub fn checkout(
        &self,
        order_id: impl Into<String>,
        catalog: &mut [Product],
    ) -> Result<Order> {
        let order = self.place_order(order_id)?;
        self.reserve_stock(catalog)?;
        Ok(order)
    }

    /// Reserves the cart's quantities in `catalog`, all or nothing.
    pub fn reserve_stock(&self, catalog: &mut [Product]) -> Result<()> {
        let requested = self.requested_quantities();
        for (&id, &quantity) in &requested {
            let product = catalog
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| unknown_product(id))?;
            if !product.has_stock(quantity) {
                return Err(product.shortage(quantity));
            }
        }
        for (&id, &quantity) in &requested {
            find_product(catalog, id)?.reserve_stock(quantity)?;
        }
        Ok(())
    }

    /// Gives back what [`Cart::reserve_stock`] took, e.g. after a cancellation.
    pub fn release_stock(&self, catalog: &mut [Product]) -> Result<()> {
        for (&id, &quantity) in &self.requested_quantities() {
            find_product(catalog, id)?.release_stock(quantity);
        }
        Ok(())
    }

    // Lines for the same product are summed.
    fn requested_quantities(&self) -> BTreeMap<&str, u32> {
        let mut requested = BTreeMap::new();
        for item in &self.items {
            let total: &mut u32 = requested.entry(item.product.id.as_str()).or_insert(0);
            *total = total.saturating_add(item.quantity);
        }
        requested
    }
}

fn find_product<'a>(catalog: &'a mut [Product], id: &str) -> Result<&'a mut Product> {
    catalog
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| unknown_product(id))
}

fn unknown_product(id: &str) -> KataError {
    KataError::UnknownProduct {
        product_id: id.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// An order moves from `Pending` to exactly one of `Confirmed` or
/// `Cancelled`, and then never changes again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    total: f64,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: impl Into<String>, total: f64) -> Self {
        Self {
            id: id.into(),
            total,
            status: OrderStatus::Pending,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn confirm(&mut self) -> Result<()> {
        self.transition(OrderStatus::Confirmed)
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.transition(OrderStatus::Cancelled)
    }

    fn transition(&mut self, to: OrderStatus) -> Result<()> {
        if self.status.is_terminal() {
            tracing::warn!("Order {} rejected move {} -> {}", self.id, self.status, to);
            return Err(KataError::InvalidTransition {
                order_id: self.id.clone(),
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        tracing::info!("Order {}: {} -> {}", self.id, self.status, to);
        self.status = to;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Paypal,
    BankTransfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Succeeded => "SUCCEEDED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    status: PaymentStatus,
}

impl Payment {
    pub fn new(order_id: impl Into<String>, amount: f64, method: PaymentMethod) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            method,
            status: PaymentStatus::Pending,
        }
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Settles a pending payment. No provider is wired in: any positive
    /// amount succeeds, anything else fails.
    pub fn process(&mut self) -> Result<PaymentStatus> {
        let outcome = if self.amount > 0.0 {
            PaymentStatus::Succeeded
        } else {
            PaymentStatus::Failed
        };
        self.transition(PaymentStatus::Pending, outcome)?;
        tracing::debug!(
            "Payment of {} for order {} via {}: {}",
            self.amount,
            self.order_id,
            self.method,
            self.status
        );
        Ok(self.status)
    }

    pub fn refund(&mut self) -> Result<()> {
        self.transition(PaymentStatus::Succeeded, PaymentStatus::Refunded)
    }

    fn transition(&mut self, expected: PaymentStatus, to: PaymentStatus) -> Result<()> {
        if self.status != expected {
            tracing::warn!(
                "Payment for order {} rejected move {} -> {}",
                self.order_id,
                self.status,
                to
            );
            return Err(KataError::InvalidPaymentTransition {
                order_id: self.order_id.clone(),
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
