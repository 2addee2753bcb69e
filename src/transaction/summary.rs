use std::fmt;

use crate::transaction::Total;

/// The income and expense totals over the whole ledger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The sum of all income transactions.
    pub income: Total,
    /// The sum of all expense transactions.
    pub expenses: Total,
}

impl Summary {
    /// Income minus expenses. Computed on demand, never stored.
    pub fn balance(&self) -> Total {
        self.income - self.expenses
    }
}

/// Formats the summary readout, e.g.
/// `Income: $0.00 | Expenses: $50.00 | Balance: -50.00`.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Income: ${} | Expenses: ${} | Balance: {}",
            self.income,
            self.expenses,
            self.balance()
        )
    }
}
