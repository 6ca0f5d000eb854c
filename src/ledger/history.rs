use chrono::{DateTime, Utc};

use super::transaction::{Transaction, TransactionKind};
use super::Decimal;

/// One executed transaction as recorded in an account's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only log of the transactions executed against one account.
///
/// Entries keep insertion order and their timestamps never decrease.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `transaction`, stamped with the current time.
    pub fn append(&mut self, transaction: &Transaction) {
        self.append_at(transaction, Utc::now());
    }

    /// Record `transaction` at `timestamp`.
    /// A timestamp earlier than the last entry is raised to it (clock stepped back).
    pub(super) fn append_at(&mut self, transaction: &Transaction, timestamp: DateTime<Utc>) {
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp > timestamp => last.timestamp,
            _ => timestamp,
        };
        self.entries.push(HistoryEntry {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded entries of the given kind, over the whole history.
    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.count(TransactionKind::Withdrawal), 0);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut history = History::new();
        history.append(&Transaction::deposit(dec!(100)));
        history.append(&Transaction::withdrawal(dec!(30)));
        history.append(&Transaction::deposit(dec!(5)));

        let kinds: Vec<_> = history.entries().iter().map(HistoryEntry::kind).collect();
        let amounts: Vec<_> = history.entries().iter().map(HistoryEntry::amount).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit
            ]
        );
        assert_eq!(amounts, vec![dec!(100), dec!(30), dec!(5)]);
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut history = History::new();
        for _ in 0..10 {
            history.append(&Transaction::deposit(dec!(1)));
        }

        let entries = history.entries();
        assert!(entries
            .windows(2)
            .all(|w| w[0].timestamp() <= w[1].timestamp()));
    }

    #[test]
    fn test_clock_stepping_back_is_clamped() {
        let mut history = History::new();
        let now = Utc::now();
        history.append_at(&Transaction::deposit(dec!(1)), now);
        history.append_at(&Transaction::deposit(dec!(2)), now - TimeDelta::seconds(60));

        assert_eq!(history.entries()[1].timestamp(), now);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        let t = Transaction::withdrawal(dec!(10));
        history.append(&t);
        history.append(&t);

        assert_eq!(history.len(), 2);
        assert_eq!(history.count(TransactionKind::Withdrawal), 2);
        assert_eq!(history.count(TransactionKind::Deposit), 0);
    }
}
