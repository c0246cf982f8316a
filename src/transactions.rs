use crate::models::{
    EscrowStatus, Property, Transaction, TransactionKind, TransactionStatus, User,
};
use crate::storage::{LocalStore, StoreError, TRANSACTIONS_KEY};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Outcome of looking a transaction up by id
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionLookup {
    Found {
        transaction: Transaction,
        /// Listing the transaction pays for, when it is still in the catalog
        property: Option<Property>,
    },
    NotFound {
        id: String,
    },
}

/// Transactions visible to the current user
#[derive(Debug, Clone)]
pub struct TransactionBook {
    transactions: Vec<Transaction>,
}

impl TransactionBook {
    /// Read stored transactions, falling back to the sample pair when none exist.
    ///
    /// Entries that do not have the transaction shape are skipped, so one bad
    /// record never hides the others.
    pub fn load(store: &LocalStore, user: Option<&User>) -> Result<Self, StoreError> {
        let stored: Vec<Transaction> = stored_entries(store)?
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(tx) => Some(tx),
                Err(e) => {
                    warn!(index = i, "Skipping malformed stored transaction: {}", e);
                    None
                }
            })
            .collect();

        let transactions = if stored.is_empty() {
            let as_tenant = user.is_some_and(User::is_tenant);
            debug!(as_tenant, "No stored transactions, using samples");
            mock_transactions(as_tenant)
        } else {
            stored
        };

        Ok(Self { transactions })
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn lookup(&self, id: &str, catalog: &[Property]) -> TransactionLookup {
        match self.transactions.iter().find(|tx| tx.id == id) {
            Some(transaction) => TransactionLookup::Found {
                property: catalog
                    .iter()
                    .find(|p| p.id == transaction.property_id)
                    .cloned(),
                transaction: transaction.clone(),
            },
            None => TransactionLookup::NotFound { id: id.to_string() },
        }
    }
}

/// Raw stored entries; anything other than a list under the key reads as empty
fn stored_entries(store: &LocalStore) -> Result<Vec<Value>, StoreError> {
    match store.get::<Value>(TRANSACTIONS_KEY)? {
        None => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => {
            warn!("Stored transactions are not a list, ignoring them");
            Ok(Vec::new())
        }
    }
}

/// Append a transaction to the stored list.
///
/// Existing entries are written back untouched, including ones this crate
/// cannot read.
pub async fn record(store: &mut LocalStore, transaction: Transaction) -> Result<(), StoreError> {
    let mut stored = stored_entries(store)?;
    info!(id = %transaction.id, "Recording transaction");
    stored.push(serde_json::to_value(&transaction)?);
    store.set(TRANSACTIONS_KEY, &stored).await
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn timestamp(y: i32, m: u32, d: u32, hour: u32, min: u32) -> DateTime<Utc> {
    let naive = date(y, m, d)
        .and_hms_opt(hour, min, 0)
        .unwrap_or(NaiveDateTime::MIN);
    Utc.from_utc_datetime(&naive)
}

/// Sample transactions; direction and counterparty depend on who is looking
pub fn mock_transactions(as_tenant: bool) -> Vec<Transaction> {
    let kind = if as_tenant {
        TransactionKind::Payment
    } else {
        TransactionKind::Receipt
    };
    let (first, second) = if as_tenant {
        ("Adebola Johnson", "Chinedu Okoro")
    } else {
        ("Tunde Adeyemi", "Funke Adebayo")
    };

    vec![
        Transaction {
            id: "TX001".to_string(),
            property_id: 1,
            property_title: "Modern 3-Bedroom Apartment".to_string(),
            amount: 1_890_000,
            rent_amount: 1_800_000,
            service_fee: 90_000,
            kind,
            status: TransactionStatus::Completed,
            date: timestamp(2023, 11, 15, 10, 30),
            counterparty: first.to_string(),
            payment_method: "bank_transfer".to_string(),
            escrow_status: EscrowStatus::Released,
            property_address: "123 Victoria Island, Lagos".to_string(),
            duration: "12 months".to_string(),
            start_date: date(2023, 12, 1),
            end_date: date(2024, 11, 30),
            extra: Map::new(),
        },
        Transaction {
            id: "TX002".to_string(),
            property_id: 2,
            property_title: "Cozy 2-Bedroom Flat".to_string(),
            amount: 892_500,
            rent_amount: 850_000,
            service_fee: 42_500,
            kind,
            status: TransactionStatus::Pending,
            date: timestamp(2023, 11, 20, 14, 45),
            counterparty: second.to_string(),
            payment_method: "card".to_string(),
            escrow_status: EscrowStatus::Held,
            property_address: "456 Lekki Phase 1, Lagos".to_string(),
            duration: "6 months".to_string(),
            start_date: date(2023, 12, 15),
            end_date: date(2024, 6, 15),
            extra: Map::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::mock_listings;
    use crate::models::UserRole;

    fn tenant() -> User {
        User {
            name: "Amaka Obi".into(),
            email: "amaka@example.com".into(),
            role: Some(UserRole::Tenant),
        }
    }

    #[tokio::test]
    async fn empty_store_uses_samples_for_role() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("store.json")).await.unwrap();

        let book = TransactionBook::load(&store, Some(&tenant())).unwrap();
        assert_eq!(book.all().len(), 2);
        assert!(book.all().iter().all(|tx| tx.kind == TransactionKind::Payment));
        assert_eq!(book.all()[0].counterparty, "Adebola Johnson");

        let book = TransactionBook::load(&store, None).unwrap();
        assert!(book.all().iter().all(|tx| tx.kind == TransactionKind::Receipt));
        assert_eq!(book.all()[1].counterparty, "Funke Adebayo");
    }

    #[test]
    fn lookup_resolves_linked_property() {
        let book = TransactionBook {
            transactions: mock_transactions(true),
        };

        match book.lookup("TX002", &mock_listings()) {
            TransactionLookup::Found {
                transaction,
                property,
            } => {
                assert_eq!(transaction.status, TransactionStatus::Pending);
                assert!(transaction.can_cancel());
                assert_eq!(property.map(|p| p.id), Some(2));
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn lookup_without_listing_still_finds_transaction() {
        let book = TransactionBook {
            transactions: mock_transactions(false),
        };

        assert!(matches!(
            book.lookup("TX001", &[]),
            TransactionLookup::Found { property: None, .. }
        ));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let book = TransactionBook {
            transactions: mock_transactions(false),
        };
        assert_eq!(
            book.lookup("TX999", &mock_listings()),
            TransactionLookup::NotFound {
                id: "TX999".to_string()
            }
        );
    }

    #[tokio::test]
    async fn recorded_transactions_replace_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = LocalStore::open(&path).await.unwrap();

        let mut tx = mock_transactions(true).remove(0);
        tx.id = "TX100".to_string();
        record(&mut store, tx).await.unwrap();

        let reopened = LocalStore::open(&path).await.unwrap();
        let book = TransactionBook::load(&reopened, Some(&tenant())).unwrap();
        assert_eq!(book.all().len(), 1);
        assert!(matches!(
            book.lookup("TX001", &[]),
            TransactionLookup::NotFound { .. }
        ));
        assert!(matches!(
            book.lookup("TX100", &[]),
            TransactionLookup::Found { .. }
        ));
    }

    fn stored_entry(id: &str) -> Value {
        serde_json::json!({
            "id": id,
            "propertyId": 1,
            "propertyTitle": "Modern 3-Bedroom Apartment",
            "amount": 1890000,
            "rentAmount": 1800000,
            "serviceFee": 90000,
            "type": "payment",
            "status": "completed",
            "date": "2023-11-15T10:30:00Z",
            "timestamp": "2023-11-15T10:30:00Z",
            "counterparty": "Adebola Johnson",
            "paymentMethod": "bank_transfer",
            "escrowStatus": "released",
            "propertyAddress": "123 Victoria Island, Lagos",
            "duration": "12 months",
            "startDate": "2023-12-01",
            "endDate": "2024-11-30"
        })
    }

    async fn seeded_store(dir: &tempfile::TempDir, transactions: Value) -> LocalStore {
        let path = dir.path().join("store.json");
        let seed = serde_json::json!({ "transactions": transactions });
        std::fs::write(&path, seed.to_string()).unwrap();
        LocalStore::open(&path).await.unwrap()
    }

    #[tokio::test]
    async fn malformed_entries_are_skipped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(
            &dir,
            serde_json::json!([{ "id": "TX7", "propertyId": 1 }, stored_entry("TX001")]),
        )
        .await;

        let book = TransactionBook::load(&store, None).unwrap();
        assert_eq!(book.all().len(), 1);
        assert!(matches!(
            book.lookup("TX001", &mock_listings()),
            TransactionLookup::Found { property: Some(_), .. }
        ));
        assert!(matches!(
            book.lookup("TX7", &mock_listings()),
            TransactionLookup::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn non_list_value_reads_as_no_transactions() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir, serde_json::json!("oops")).await;

        let book = TransactionBook::load(&store, None).unwrap();
        assert_eq!(book.all(), mock_transactions(false).as_slice());
    }

    #[tokio::test]
    async fn record_keeps_existing_entries_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let partial = serde_json::json!({ "id": "TX7", "propertyId": 1 });
        let mut store =
            seeded_store(&dir, serde_json::json!([stored_entry("TX001"), partial.clone()])).await;

        let mut tx = mock_transactions(true).remove(1);
        tx.id = "TX003".to_string();
        record(&mut store, tx).await.unwrap();

        let reopened = LocalStore::open(store.path()).await.unwrap();
        let raw: Vec<Value> = reopened.get(TRANSACTIONS_KEY).unwrap().unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0], stored_entry("TX001"));
        assert_eq!(raw[1], partial);
        assert_eq!(raw[2]["id"], "TX003");
    }
}
