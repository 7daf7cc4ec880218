//! Payout business logic - withdrawing the sales balance to a bank account.
//!
//! A payout request is validated in fixed rule order, then settles in one
//! step: the available balance is debited and a payout transaction (negative
//! amount, processing status) is appended to the front of the history.
//! Validation failure leaves the balance and the history untouched.

use crate::{
    core::validate::{PayoutForm, validate_payout},
    entities::{Transaction, TransactionKind, TransactionStatus},
    errors::Result,
    store::DashboardStore,
};
use chrono::NaiveDate;

/// How long the payment provider takes to land a payout, for confirmation
/// messages.
pub const PROCESSING_WINDOW: &str = "1-2 business days";

/// Validates and settles a payout request.
///
/// On success the available balance is reduced by the requested amount and
/// the returned transaction (amount negated, status
/// [`TransactionStatus::Processing`]) is prepended to the history. The
/// transaction reference names the destination bank with the account number
/// masked to its last 4 digits.
///
/// # Errors
/// Returns the first violated rule; see
/// [`validate_payout`](crate::core::validate::validate_payout). No mutation
/// happens on failure.
pub fn submit_payout(
    store: &mut DashboardStore,
    payout_minimum: i64,
    form: &PayoutForm,
    today: NaiveDate,
) -> Result<Transaction> {
    let amount = validate_payout(form, payout_minimum, store.available_balance())?;

    let sequence = store.transactions().len() + 1;
    let transaction = Transaction {
        id: format!("TRX-{sequence:03}"),
        date: today,
        kind: TransactionKind::Payout,
        reference: format!(
            "{} {}",
            form.bank.trim(),
            mask_account_number(form.account_number.trim())
        ),
        amount: -amount,
        status: TransactionStatus::Processing,
    };

    store.debit_balance(amount);
    store.prepend_transaction(transaction.clone());

    tracing::info!(
        amount,
        remaining = store.available_balance(),
        "payout submitted"
    );

    Ok(transaction)
}

/// Masks an account number down to its last 4 characters.
fn mask_account_number(number: &str) -> String {
    format!("****{}", &number[number.len().saturating_sub(4)..])
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[test]
    fn test_submit_payout_debits_balance_and_appends_transaction() {
        let mut store = sample_store();
        let history_before = store.transactions().len();
        let form = payout_form("500000");

        let transaction = submit_payout(&mut store, 100_000, &form, date(2024, 6, 5)).unwrap();

        assert_eq!(store.available_balance(), 2_000_000);
        assert_eq!(store.transactions().len(), history_before + 1);
        assert_eq!(store.transactions()[0], transaction);

        assert_eq!(transaction.kind, TransactionKind::Payout);
        assert_eq!(transaction.amount, -500_000);
        assert_eq!(transaction.status, TransactionStatus::Processing);
        assert_eq!(transaction.date, date(2024, 6, 5));
    }

    #[test]
    fn test_submit_payout_masks_account_number() {
        let mut store = sample_store();
        let form = payout_form("150000");

        let transaction = submit_payout(&mut store, 100_000, &form, date(2024, 6, 5)).unwrap();

        assert_eq!(transaction.reference, "BCA ****7890");
        assert!(!transaction.reference.contains("1234567890"));
    }

    #[test]
    fn test_submit_payout_below_minimum_leaves_state_untouched() {
        let mut store = sample_store();
        let balance_before = store.available_balance();
        let history_before = store.transactions().to_vec();
        let form = payout_form("50000");

        let result = submit_payout(&mut store, 100_000, &form, date(2024, 6, 5));

        assert!(matches!(result.unwrap_err(), Error::BelowMinimum { .. }));
        assert_eq!(store.available_balance(), balance_before);
        assert_eq!(store.transactions(), history_before.as_slice());
    }

    #[test]
    fn test_submit_payout_over_balance_rejects() {
        let mut store = sample_store();
        let form = payout_form("9000000");

        let result = submit_payout(&mut store, 100_000, &form, date(2024, 6, 5));

        assert!(matches!(
            result.unwrap_err(),
            Error::InsufficientBalance {
                requested: 9_000_000,
                available: 2_500_000
            }
        ));
        assert_eq!(store.available_balance(), 2_500_000);
    }

    #[test]
    fn test_submit_payout_whole_balance_is_allowed() {
        let mut store = sample_store();
        let form = payout_form("2500000");

        let transaction = submit_payout(&mut store, 100_000, &form, date(2024, 6, 5)).unwrap();

        assert_eq!(transaction.amount, -2_500_000);
        assert_eq!(store.available_balance(), 0);
    }

    #[test]
    fn test_consecutive_payouts_validate_against_updated_balance() {
        let mut store = sample_store();

        submit_payout(&mut store, 100_000, &payout_form("2000000"), date(2024, 6, 5)).unwrap();

        // Only 500k remains now; a second 2M request must fail.
        let result = submit_payout(&mut store, 100_000, &payout_form("2000000"), date(2024, 6, 6));
        assert!(matches!(
            result.unwrap_err(),
            Error::InsufficientBalance { .. }
        ));
        assert_eq!(store.available_balance(), 500_000);
    }
}
