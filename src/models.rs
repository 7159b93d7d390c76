use crate::date::Date;
use crate::money::Cents;

/// A single ledger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Assigned by storage; `None` until persisted.
    pub id: Option<i64>,
    /// The person or company the transaction was made with.
    pub entity: String,
    pub amount: Cents,
    pub date: Date,
    pub note: String,
}

impl Transaction {
    pub fn new(date: Date, entity: impl Into<String>, amount: Cents, note: impl Into<String>) -> Self {
        Self {
            id: None,
            entity: entity.into(),
            amount,
            date,
            note: note.into(),
        }
    }

    /// The date in `M/D/YYYY` form.
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }

    /// The row written to and read from the bare CSV format.
    pub fn to_bare_row(&self) -> [String; 4] {
        [
            self.date_string(),
            self.entity.clone(),
            self.amount.to_string(),
            self.note.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_row_layout() {
        let tx = Transaction::new(
            Date::parse("7/8/2021").unwrap(),
            "Apossumtheosis",
            Cents::parse("-4000").unwrap(),
            "it has begun.",
        );
        assert_eq!(tx.id, None);
        assert_eq!(
            tx.to_bare_row(),
            ["7/8/2021", "Apossumtheosis", "-$4000.00", "it has begun."].map(String::from)
        );
    }
}
