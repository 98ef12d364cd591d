//! Refactoring exercises: each one keeps its procedural or god-object
//! starting point next to the version split into entities, single-method
//! capability traits and an orchestrator.
//!
//! - [`core::transfer`](crate::core::transfer): accounts and transfers, plus the two-balance ledger.
//! - [`core::discount`](crate::core::discount): price after a customer-tier discount.
//! - [`core::informe`](crate::core::informe): generate, notify, store through three traits.
//! - [`core::report`](crate::core::report): the employee report, formatted then sent, saved and audited.
//! - [`domain::shop`]: products, carts, orders and payments.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::KataConfig;

pub use crate::core::{
    discount::{calculate_discount, DiscountPolicy},
    informe::InformeService,
    report::EmployeeReportService,
    transfer::{LedgerSide, Transfer, TransferOutcome, TwoAccountLedger},
};
pub use utils::error::{KataError, Result};
