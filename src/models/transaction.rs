use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Direction of a transaction as seen by the current user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Payment,
    Receipt,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// Mock escrow state; no funds are actually held anywhere
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EscrowStatus {
    Held,
    Released,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Payment => "payment",
            TransactionKind::Receipt => "receipt",
        })
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        })
    }
}

impl fmt::Display for EscrowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EscrowStatus::Held => "held",
            EscrowStatus::Released => "released",
        })
    }
}

/// A rent payment record as kept under the "transactions" store key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub property_id: u32,
    pub property_title: String,
    /// Rent plus service fee
    pub amount: u64,
    pub rent_amount: u64,
    pub service_fee: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    pub counterparty: String,
    pub payment_method: String,
    pub escrow_status: EscrowStatus,
    pub property_address: String,
    pub duration: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Keys this model does not know about (e.g. `timestamp`), kept so
    /// rewriting the stored list does not drop them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    /// Only pending transactions may still be cancelled
    pub fn can_cancel(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_stored_shape() {
        let json = r#"{
            "id": "TX009",
            "propertyId": 3,
            "propertyTitle": "Luxury 4-Bedroom Duplex",
            "amount": 3675000,
            "rentAmount": 3500000,
            "serviceFee": 175000,
            "type": "payment",
            "status": "pending",
            "date": "2024-01-05T09:00:00Z",
            "timestamp": "2024-01-05T09:00:00Z",
            "counterparty": "Ngozi Eze",
            "paymentMethod": "card",
            "escrowStatus": "held",
            "propertyAddress": "12 Adeola Odeku, Victoria Island",
            "duration": "12 months",
            "startDate": "2024-02-01",
            "endDate": "2025-01-31"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Payment);
        assert_eq!(tx.escrow_status, EscrowStatus::Held);
        assert_eq!(tx.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!(tx.can_cancel());
        assert_eq!(
            tx.extra.get("timestamp"),
            Some(&Value::String("2024-01-05T09:00:00Z".to_string()))
        );

        let written = serde_json::to_value(&tx).unwrap();
        assert_eq!(written["timestamp"], "2024-01-05T09:00:00Z");
        assert_eq!(written["type"], "payment");
    }
}
