//! Transaction entity - Represents all financial movements on the balance.
//!
//! Each transaction has a date, a `kind` (sale or payout), a `reference`
//! naming its origin, a signed amount, and a settlement status. Sales carry
//! positive amounts; payouts carry negative amounts.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Kind of balance movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionKind {
    /// Income from a completed order. Amount is positive.
    Sale,
    /// Withdrawal to the merchant's bank account. Amount is negative.
    Payout,
}

/// Settlement status of a transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    /// Settled.
    Success,
    /// Being processed by the payment provider.
    Processing,
    /// Not yet picked up for processing.
    Pending,
}

/// Transaction model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction (e.g., `"TRX-204"`)
    pub id: String,
    /// Date the transaction was recorded
    pub date: NaiveDate,
    /// Kind of movement
    pub kind: TransactionKind,
    /// What the transaction refers to: an order id for sales, a bank
    /// destination for payouts
    pub reference: String,
    /// Signed amount in the smallest currency unit
    pub amount: i64,
    /// Settlement status
    pub status: TransactionStatus,
}
