use crate::domain::Account;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferOutcome {
    Completed,
    InsufficientFunds,
}

impl TransferOutcome {
    pub fn is_completed(self) -> bool {
        self == TransferOutcome::Completed
    }
}

/// Moves money between two [`Account`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct Transfer;

impl Transfer {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: f64,
    ) -> TransferOutcome {
        if source.withdraw(amount) {
            destination.deposit(amount);
            tracing::info!(
                "Transferred {} from {} to {}",
                amount,
                source.holder(),
                destination.holder()
            );
            TransferOutcome::Completed
        } else {
            tracing::warn!(
                "Insufficient funds: {} holds {}, requested {}",
                source.holder(),
                source.balance(),
                amount
            );
            TransferOutcome::InsufficientFunds
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerSide {
    A,
    B,
}

/// The procedural starting point: two raw balances and a branch on which
/// side pays. Kept as an explicit value instead of process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoAccountLedger {
    pub balance_a: f64,
    pub balance_b: f64,
}

impl TwoAccountLedger {
    pub fn new(balance_a: f64, balance_b: f64) -> Self {
        Self {
            balance_a,
            balance_b,
        }
    }

    pub fn transfer(&mut self, origin: LedgerSide, amount: f64) -> TransferOutcome {
        let (from, to) = match origin {
            LedgerSide::A => (&mut self.balance_a, &mut self.balance_b),
            LedgerSide::B => (&mut self.balance_b, &mut self.balance_a),
        };

        if *from >= amount {
            *from -= amount;
            *to += amount;
            tracing::info!("Ledger transfer of {} from {:?} succeeded", amount, origin);
            TransferOutcome::Completed
        } else {
            tracing::warn!("Ledger transfer of {} from {:?}: insufficient funds", amount, origin);
            TransferOutcome::InsufficientFunds
        }
    }
}
