//! Form validators - pure checks run before any mutation is permitted.
//!
//! Validators run in a fixed order so the first failing rule determines the
//! reported reason: required fields first, then numeric parsing, then the
//! minimum threshold, then balance sufficiency. This matches the order a
//! merchant would want a rejection explained. Validation is all-or-nothing
//! per operation; a failure here means the caller performs no mutation.

use crate::{
    entities::Courier,
    errors::{Error, Result},
};

/// Raw values of the add-product form.
#[derive(Debug, Clone, Default)]
pub struct NewProductForm {
    /// Product display name
    pub name: String,
    /// Unit price, as typed
    pub price: String,
    /// Stock count, as typed
    pub stock: String,
}

/// Raw values of the payout-request form.
#[derive(Debug, Clone, Default)]
pub struct PayoutForm {
    /// Amount to withdraw, as typed
    pub amount: String,
    /// Destination bank name
    pub bank: String,
    /// Destination account number
    pub account_number: String,
    /// Destination account holder name
    pub account_name: String,
}

/// Inputs of the shipping-label form.
#[derive(Debug, Clone, Default)]
pub struct LabelRequest {
    /// Order the label is for
    pub order_id: String,
    /// Selected courier, if any
    pub courier: Option<Courier>,
    /// Package weight in grams, if entered
    pub weight_grams: Option<u32>,
}

/// Requires a non-blank field value, returning it trimmed.
///
/// # Errors
/// Returns [`Error::MissingField`] when the value is empty or whitespace.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(trimmed)
}

/// Parses a field as a non-negative whole number.
///
/// # Errors
/// Returns [`Error::InvalidNumber`] when the value does not parse or is
/// negative.
pub fn parse_non_negative(field: &'static str, value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(Error::InvalidNumber {
            field,
            value: value.trim().to_string(),
        }),
    }
}

/// Validates the add-product form, returning the parsed price and stock.
///
/// Rule order: name, price, and stock must be present; then price and stock
/// must parse as non-negative whole numbers.
///
/// # Errors
/// Returns the first violated rule as [`Error::MissingField`] or
/// [`Error::InvalidNumber`].
pub fn validate_new_product(form: &NewProductForm) -> Result<(i64, u32)> {
    require("name", &form.name)?;
    let price_raw = require("price", &form.price)?;
    let stock_raw = require("stock", &form.stock)?;

    let price = parse_non_negative("price", price_raw)?;
    let stock = parse_non_negative("stock", stock_raw)?;
    let stock = u32::try_from(stock).map_err(|_| Error::InvalidNumber {
        field: "stock",
        value: stock_raw.to_string(),
    })?;

    Ok((price, stock))
}

/// Validates the payout form, returning the parsed amount.
///
/// Rule order: all fields must be present; the amount must parse as a
/// non-negative whole number; the amount must meet `minimum`; the amount
/// must not exceed `available_balance`.
///
/// # Errors
/// Returns the first violated rule as [`Error::MissingField`],
/// [`Error::InvalidNumber`], [`Error::BelowMinimum`], or
/// [`Error::InsufficientBalance`].
pub fn validate_payout(form: &PayoutForm, minimum: i64, available_balance: i64) -> Result<i64> {
    let amount_raw = require("amount", &form.amount)?;
    require("bank", &form.bank)?;
    require("account number", &form.account_number)?;
    require("account name", &form.account_name)?;

    let amount = parse_non_negative("amount", amount_raw)?;

    if amount < minimum {
        return Err(Error::BelowMinimum { amount, minimum });
    }

    if amount > available_balance {
        return Err(Error::InsufficientBalance {
            requested: amount,
            available: available_balance,
        });
    }

    Ok(amount)
}

/// Validates the shipping-label form, returning the courier and weight.
///
/// Rule order: a courier must be selected; a weight must be entered and be
/// greater than zero.
///
/// # Errors
/// Returns [`Error::MissingField`] or [`Error::InvalidNumber`] for the
/// first violated rule.
pub fn validate_label_request(request: &LabelRequest) -> Result<(Courier, u32)> {
    let courier = request.courier.ok_or(Error::MissingField { field: "courier" })?;

    match request.weight_grams {
        None => Err(Error::MissingField { field: "weight" }),
        Some(0) => Err(Error::InvalidNumber {
            field: "weight",
            value: "0".to_string(),
        }),
        Some(weight) => Ok((courier, weight)),
    }
}
