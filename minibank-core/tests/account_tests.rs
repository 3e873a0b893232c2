//! Construction contract tests for `Account`
//!
//! Covers both construction paths end to end, including the exact messages
//! callers receive when a precondition fails.

use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use minibank_core::{account_number, Account, AccountRecord, Provenance};

const HOLDER_NAME: &str = "Phillip Pimenta";
const ACCOUNT_ID: i64 = 1;
const ACCOUNT_NUMBER: &str = "123";

fn initial_balance() -> Decimal {
    dec!(1000.00)
}

// ============================================================================
// Opening new accounts
// ============================================================================

#[test]
fn test_open_new_account_succeeds() {
    let account = Account::open_new(Some(HOLDER_NAME), Some(initial_balance())).unwrap();

    assert_eq!(account.holder_name(), HOLDER_NAME);
    assert_eq!(account.balance(), initial_balance());
    assert!(account.id().is_none());
    assert!(account.account_number().is_none());
    assert_eq!(account.provenance(), Provenance::NewlyOpened);
}

#[rstest]
#[case::missing(None)]
#[case::empty(Some(""))]
#[case::whitespace(Some("   "))]
fn test_open_new_requires_holder_name(#[case] holder_name: Option<&str>) {
    let err = Account::open_new(holder_name, Some(initial_balance())).unwrap_err();
    assert_eq!(err.message(), "The holder name is required.");
}

#[test]
fn test_open_new_requires_initial_balance() {
    let err = Account::open_new(Some(HOLDER_NAME), None).unwrap_err();
    assert_eq!(err.message(), "The initial balance is required.");
}

#[rstest]
#[case::zero(Decimal::ZERO)]
#[case::zero_with_scale(dec!(0.00))]
#[case::negative(dec!(-1))]
#[case::negative_cent(dec!(-0.01))]
fn test_open_new_rejects_non_positive_balance(#[case] balance: Decimal) {
    let err = Account::open_new(Some(HOLDER_NAME), Some(balance)).unwrap_err();
    assert_eq!(err.message(), "The initial balance must be greater than zero.");
}

// ============================================================================
// Reconstituting existing accounts
// ============================================================================

#[test]
fn test_reconstitute_account_succeeds() {
    let account = Account::reconstitute(
        Some(ACCOUNT_ID),
        Some(ACCOUNT_NUMBER),
        Some(HOLDER_NAME),
        Some(initial_balance()),
    )
    .unwrap();

    assert_eq!(account.id(), Some(ACCOUNT_ID));
    assert_eq!(
        account.account_number(),
        Some(account_number::format(Some(ACCOUNT_NUMBER)).unwrap().as_str())
    );
    assert_eq!(account.account_number(), Some("00000123"));
    assert_eq!(account.holder_name(), HOLDER_NAME);
    assert_eq!(account.balance(), initial_balance());
    assert_eq!(account.provenance(), Provenance::Reconstituted);
}

#[test]
fn test_reconstitute_requires_id() {
    let err = Account::reconstitute(None, Some(ACCOUNT_NUMBER), Some(HOLDER_NAME), Some(initial_balance()))
        .unwrap_err();
    assert_eq!(err.message(), "The account id cannot be null for existing records.");
}

#[rstest]
#[case::missing(None, "The account number is required.")]
#[case::empty(Some(""), "The account number is required.")]
#[case::whitespace(Some("  "), "The account number is required.")]
#[case::not_numeric(Some("123A455BC"), "The account number must be numeric.")]
#[case::too_long(Some("123456789"), "The account number must have at most 8 digits.")]
fn test_reconstitute_rejects_bad_account_number(
    #[case] number: Option<&str>,
    #[case] expected: &str,
) {
    let err = Account::reconstitute(Some(ACCOUNT_ID), number, Some(HOLDER_NAME), Some(initial_balance()))
        .unwrap_err();
    assert_eq!(err.message(), expected);
}

#[rstest]
#[case::missing(None)]
#[case::empty(Some(""))]
#[case::whitespace(Some(" \t "))]
fn test_reconstitute_requires_holder_name(#[case] holder_name: Option<&str>) {
    let err = Account::reconstitute(Some(ACCOUNT_ID), Some(ACCOUNT_NUMBER), holder_name, Some(initial_balance()))
        .unwrap_err();
    assert_eq!(err.message(), "The holder name is required for existing records.");
}

#[test]
fn test_reconstitute_requires_balance() {
    let err = Account::reconstitute(Some(ACCOUNT_ID), Some(ACCOUNT_NUMBER), Some(HOLDER_NAME), None)
        .unwrap_err();
    assert_eq!(err.message(), "The balance cannot be null for existing records.");
}

#[rstest]
#[case::zero(Decimal::ZERO)]
#[case::overdrawn(dec!(-250.75))]
fn test_reconstitute_accepts_non_positive_balance(#[case] balance: Decimal) {
    let account =
        Account::reconstitute(Some(ACCOUNT_ID), Some(ACCOUNT_NUMBER), Some(HOLDER_NAME), Some(balance))
            .unwrap();
    assert_eq!(account.balance(), balance);
}

#[test]
fn test_reconstitute_reports_first_failing_field() {
    let err = Account::reconstitute(None, Some("abc"), None, None).unwrap_err();
    assert_eq!(err.message(), "The account id cannot be null for existing records.");

    let err = Account::reconstitute(Some(ACCOUNT_ID), Some("abc"), None, None).unwrap_err();
    assert_eq!(err.message(), "The account number must be numeric.");

    let err = Account::reconstitute(Some(ACCOUNT_ID), Some("1"), None, None).unwrap_err();
    assert_eq!(err.message(), "The holder name is required for existing records.");
}

#[test]
fn test_reconstitute_from_stored_record() {
    let record = AccountRecord {
        id: Some(42),
        account_number: Some("7".to_string()),
        holder_name: Some(HOLDER_NAME.to_string()),
        balance: Some(dec!(12.34)),
    };

    let account = Account::try_from(record).unwrap();
    assert_eq!(account.id(), Some(42));
    assert_eq!(account.account_number(), Some("00000007"));
}

#[test]
fn test_empty_stored_record_is_rejected() {
    let err = Account::try_from(AccountRecord::default()).unwrap_err();
    assert_eq!(err.message(), "The account id cannot be null for existing records.");
}

#[test]
fn test_accounts_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Account>();
}

// ============================================================================
// Account number formatting properties
// ============================================================================

proptest! {
    /// Any 1-8 digit string pads to 8 digits with the input as suffix.
    #[test]
    fn prop_format_right_aligns_digits(digits in "[0-9]{1,8}") {
        let formatted = account_number::format(Some(&digits)).unwrap();

        prop_assert_eq!(formatted.len(), 8);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(formatted.ends_with(&digits));
        prop_assert!(formatted[..8 - digits.len()].chars().all(|c| c == '0'));
    }

    /// Formatting an already formatted number changes nothing.
    #[test]
    fn prop_format_is_idempotent(digits in "[0-9]{1,8}") {
        let once = account_number::format(Some(&digits)).unwrap();
        let twice = account_number::format(Some(&once)).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Anything longer than 8 digits is rejected.
    #[test]
    fn prop_format_rejects_long_numbers(digits in "[0-9]{9,20}") {
        let err = account_number::format(Some(&digits)).unwrap_err();
        prop_assert_eq!(err.message(), "The account number must have at most 8 digits.");
    }

    /// Any non-blank name with a positive balance opens an account unchanged.
    #[test]
    fn prop_open_new_preserves_inputs(
        name in "[A-Za-z][A-Za-z ]{0,30}",
        cents in 1i64..1_000_000_000,
    ) {
        let balance = Decimal::new(cents, 2);
        let account = Account::open_new(Some(&name), Some(balance)).unwrap();

        prop_assert_eq!(account.holder_name(), name.as_str());
        prop_assert_eq!(account.balance(), balance);
        prop_assert!(account.id().is_none());
    }
}
