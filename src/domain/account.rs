use serde::{Deserialize, Serialize};

/// A bank account owned by a single holder.
///
/// The balance is private: it only moves through [`Account::withdraw`] and
/// [`Account::deposit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    holder: String,
    balance: f64,
}

impl Account {
    pub fn new(holder: impl Into<String>, initial_balance: f64) -> Self {
        Self {
            holder: holder.into(),
            balance: initial_balance,
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Takes `amount` out of the account.
    ///
    /// Returns `false` and leaves the balance untouched when `amount` exceeds
    /// the current balance.
    pub fn withdraw(&mut self, amount: f64) -> bool {
        if amount <= self.balance {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }
}
