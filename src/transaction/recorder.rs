//! Records validated transactions and refreshes the ledger views.

use crate::{
    Error,
    store::LedgerStore,
    transaction::{Summary, Transaction, TransactionKind, TransactionRequest},
};

/// The data behind the two read views: the summary readout and the
/// transactions table.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    /// Income, expense and balance totals.
    pub summary: Summary,
    /// Every transaction, most recent date first.
    pub transactions: Vec<Transaction>,
}

/// The result of a stored [Recorder::submit].
#[derive(Debug, PartialEq)]
pub struct Submission {
    /// The stored transaction with its assigned ID.
    pub transaction: Transaction,
    /// The ledger views, refreshed after the insert.
    ///
    /// An error here does not undo the insert, `transaction` is stored
    /// either way.
    pub snapshot: Result<LedgerSnapshot, Error>,
}

/// Validates transaction requests, stores them and refreshes the ledger views.
#[derive(Debug, Clone)]
pub struct Recorder<S> {
    store: S,
}

impl<S: LedgerStore> Recorder<S> {
    /// Create a recorder that writes to `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `request`, store it as one new transaction and refresh the
    /// ledger views.
    ///
    /// Validation happens before the store is touched, so a rejected request
    /// never writes anything. The views are only refreshed after the store
    /// confirms the insert. A failed refresh is returned inside the
    /// [Submission] because the transaction has already been stored.
    ///
    /// # Errors
    /// Returns the first validation error ([Error::MissingField],
    /// [Error::InvalidAmount] or [Error::InvalidDate]), or the store's error
    /// if the insert fails.
    pub fn submit(&self, request: &TransactionRequest) -> Result<Submission, Error> {
        let new_transaction = request
            .validate()
            .inspect_err(|error| tracing::debug!("rejected transaction {request:?}: {error}"))?;

        let transaction = self.store.insert(new_transaction)?;
        tracing::info!(
            "recorded {} of {} for \"{}\" on {} (id {})",
            transaction.kind,
            transaction.amount,
            transaction.category,
            transaction.date,
            transaction.id
        );

        let snapshot = self
            .snapshot()
            .inspect_err(|error| tracing::error!("could not refresh the ledger: {error}"));

        Ok(Submission {
            transaction,
            snapshot,
        })
    }

    /// Recompute the income and expense totals and the list of transactions.
    ///
    /// # Errors
    /// Returns the store's error if any of the queries fail.
    pub fn snapshot(&self) -> Result<LedgerSnapshot, Error> {
        let summary = Summary {
            income: self.store.sum_by_kind(TransactionKind::Income)?,
            expenses: self.store.sum_by_kind(TransactionKind::Expense)?,
        };
        let transactions = self.store.list_all()?;

        Ok(LedgerSnapshot {
            summary,
            transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use time::macros::date;

    use crate::{
        Error,
        store::LedgerStore,
        test_utils::TestLedger,
        transaction::{
            Amount, Field, MAX_AMOUNT_CENTS, NewTransaction, Total, Transaction, TransactionKind,
            TransactionRequest,
        },
    };

    use super::Recorder;

    const UNAVAILABLE: &str = "unable to open database file";

    /// Records every call so tests can check which operations were attempted.
    #[derive(Default)]
    struct SpyStore {
        calls: RefCell<Vec<&'static str>>,
        failing_calls: Vec<&'static str>,
    }

    impl SpyStore {
        /// A store whose `calls` fail as if the database could not be opened.
        fn failing_on(calls: &[&'static str]) -> Self {
            Self {
                calls: RefCell::default(),
                failing_calls: calls.to_vec(),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: &'static str) -> Result<(), Error> {
            self.calls.borrow_mut().push(call);

            if self.failing_calls.contains(&call) {
                Err(Error::StorageUnavailable(UNAVAILABLE.to_owned()))
            } else {
                Ok(())
            }
        }
    }

    impl LedgerStore for SpyStore {
        fn ensure_schema(&self) -> Result<(), Error> {
            self.record("ensure_schema")
        }

        fn insert(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
            self.record("insert")?;

            Ok(Transaction {
                id: 1,
                amount: transaction.amount,
                category: transaction.category,
                date: transaction.date,
                kind: transaction.kind,
            })
        }

        fn sum_by_kind(&self, _kind: TransactionKind) -> Result<Total, Error> {
            self.record("sum_by_kind")?;
            Ok(Total::ZERO)
        }

        fn list_all(&self) -> Result<Vec<Transaction>, Error> {
            self.record("list_all")?;
            Ok(Vec::new())
        }

        fn count(&self) -> Result<u32, Error> {
            self.record("count")?;
            Ok(0)
        }
    }

    fn expense(amount: &str, category: &str, date: &str) -> TransactionRequest {
        TransactionRequest::new(amount, category, date, TransactionKind::Expense)
    }

    #[test]
    fn groceries_expense_end_to_end() {
        let ledger = TestLedger::new();
        let recorder = Recorder::new(ledger.store.clone());

        let submission = recorder
            .submit(&expense("50.00", "Groceries", "2024-03-01"))
            .expect("Could not submit transaction");

        assert_eq!(
            submission.transaction,
            Transaction {
                id: 1,
                amount: Amount::from_cents(5000).unwrap(),
                category: "Groceries".to_owned(),
                date: date!(2024 - 03 - 01),
                kind: TransactionKind::Expense,
            }
        );
        let snapshot = submission.snapshot.expect("Could not refresh the ledger");
        assert_eq!(
            snapshot.summary.to_string(),
            "Income: $0.00 | Expenses: $50.00 | Balance: -50.00"
        );
        assert_eq!(snapshot.transactions, vec![submission.transaction]);
        assert_eq!(ledger.store.count(), Ok(1));
    }

    #[test]
    fn non_numeric_amount_is_not_stored() {
        let ledger = TestLedger::new();
        let recorder = Recorder::new(ledger.store.clone());

        let result = recorder.submit(&expense("abc", "Groceries", "2024-03-01"));

        assert_eq!(result, Err(Error::InvalidAmount("abc".to_owned())));
        assert_eq!(ledger.store.count(), Ok(0));
    }

    #[test]
    fn each_submission_moves_one_total_by_its_amount() {
        let ledger = TestLedger::new();
        let recorder = Recorder::new(ledger.store.clone());
        let submissions = [
            ("2500.00", "Salary", TransactionKind::Income),
            ("12.34", "Coffee", TransactionKind::Expense),
            ("0.01", "Interest", TransactionKind::Income),
            ("800", "Rent", TransactionKind::Expense),
        ];

        let mut previous = recorder.snapshot().unwrap().summary;

        for (count, (amount, category, kind)) in submissions.into_iter().enumerate() {
            let request = TransactionRequest::new(amount, category, "2024-05-01", kind);

            let summary = recorder.submit(&request).unwrap().snapshot.unwrap().summary;

            let amount = Total::from(amount.parse::<Amount>().unwrap());
            let (changed, unchanged) = match kind {
                TransactionKind::Income => (
                    (previous.income, summary.income),
                    (previous.expenses, summary.expenses),
                ),
                TransactionKind::Expense => (
                    (previous.expenses, summary.expenses),
                    (previous.income, summary.income),
                ),
            };
            assert_eq!(changed.1 - changed.0, amount, "{category} changed its total");
            assert_eq!(unchanged.0, unchanged.1, "{category} left the other total");
            assert_eq!(ledger.store.count(), Ok(count as u32 + 1));

            previous = summary;
        }

        assert_eq!(previous.balance(), Total::from_cents(250_001 - 81_234));
    }

    #[test]
    fn rejected_requests_never_touch_the_store() {
        let requests = [
            (("", "2024-03-01"), Error::MissingField(Field::Amount)),
            (("0", "2024-03-01"), Error::InvalidAmount("0".to_owned())),
            (("-3", "2024-03-01"), Error::InvalidAmount("-3".to_owned())),
            (("3", "2024-02-30"), Error::InvalidDate("2024-02-30".to_owned())),
            (("3", "03/01/2024"), Error::InvalidDate("03/01/2024".to_owned())),
        ];

        for ((amount, date), want_error) in requests {
            let request = expense(amount, "Rent", date);
            let recorder = Recorder::new(SpyStore::default());

            let result = recorder.submit(&request);

            assert_eq!(result, Err(want_error));
            assert!(
                recorder.store().calls().is_empty(),
                "want no store calls for {request:?}, got {:?}",
                recorder.store().calls()
            );
        }
    }

    #[test]
    fn refreshes_views_after_insert() {
        let recorder = Recorder::new(SpyStore::default());

        recorder
            .submit(&expense("10", "Books", "2024-03-01"))
            .unwrap();

        assert_eq!(
            recorder.store().calls(),
            vec!["insert", "sum_by_kind", "sum_by_kind", "list_all"]
        );
    }

    #[test]
    fn failed_insert_skips_refresh() {
        let recorder = Recorder::new(SpyStore::failing_on(&["insert"]));

        let result = recorder.submit(&expense("10", "Books", "2024-03-01"));

        assert_eq!(result, Err(Error::StorageUnavailable(UNAVAILABLE.to_owned())));
        assert_eq!(recorder.store().calls(), vec!["insert"]);
    }

    #[test]
    fn failed_refresh_still_reports_stored_transaction() {
        let recorder = Recorder::new(SpyStore::failing_on(&["sum_by_kind"]));

        let submission = recorder
            .submit(&expense("10", "Books", "2024-03-01"))
            .expect("want the stored transaction despite the failed refresh");

        assert_eq!(submission.transaction.id, 1);
        assert_eq!(submission.transaction.category, "Books");
        assert_eq!(
            submission.snapshot,
            Err(Error::StorageUnavailable(UNAVAILABLE.to_owned()))
        );
        assert_eq!(recorder.store().calls(), vec!["insert", "sum_by_kind"]);
    }

    #[test]
    fn largest_amounts_can_be_summed() {
        let ledger = TestLedger::new();
        let recorder = Recorder::new(ledger.store.clone());
        let request = TransactionRequest::new(
            "99999999.99",
            "Lottery",
            "2024-03-01",
            TransactionKind::Income,
        );

        for _ in 0..3 {
            let submission = recorder.submit(&request).unwrap();
            assert!(submission.snapshot.is_ok(), "{:?}", submission.snapshot);
        }

        let summary = recorder.snapshot().unwrap().summary;
        assert_eq!(summary.income, Total::from_cents(3 * MAX_AMOUNT_CENTS));
        assert_eq!(
            summary.to_string(),
            "Income: $299999999.97 | Expenses: $0.00 | Balance: 299999999.97"
        );
    }

    #[test]
    fn amounts_beyond_largest_amount_are_not_stored() {
        let ledger = TestLedger::new();
        let recorder = Recorder::new(ledger.store.clone());
        let request = TransactionRequest::new(
            "50000000000000000.00",
            "Lottery",
            "2024-03-01",
            TransactionKind::Income,
        );

        let result = recorder.submit(&request);

        assert_eq!(
            result,
            Err(Error::InvalidAmount("50000000000000000.00".to_owned()))
        );
        assert_eq!(ledger.store.count(), Ok(0));
        assert!(recorder.snapshot().is_ok());
    }

    #[test]
    fn snapshot_of_empty_ledger() {
        let ledger = TestLedger::new();
        let recorder = Recorder::new(ledger.store.clone());

        let snapshot = recorder.snapshot().unwrap();

        assert_eq!(
            snapshot.summary.to_string(),
            "Income: $0.00 | Expenses: $0.00 | Balance: 0.00"
        );
        assert!(snapshot.transactions.is_empty());
    }
}
