//! Plausibility checks for bank code / account number pairs.
//!
//! Both checks work against the reference table alone. A bank may own several
//! clearing blocks with different rules, so a pair is accepted when any of
//! the bank's candidate records accepts it.

use crate::converter::clean_field;
use crate::reference_table::ReferenceTable;
use crate::types::{zerofill, BankFormat, LengthCheck, CLEARING_KEY_LENGTH};

/// Account number without separators or leading zeros.
fn stripped(account_number: &str) -> String {
    clean_field(Some(account_number))
        .unwrap_or_default()
        .trim_start_matches('0')
        .to_string()
}

/// Clearing number candidate: the first four digits of the stripped number.
fn clearing_candidate(stripped: &str) -> Option<u32> {
    let prefix: String = stripped.chars().take(CLEARING_KEY_LENGTH).collect();
    prefix.parse().ok()
}

/// Records of `bank_code` that accept the clearing candidate.
fn matching_formats<'a>(
    table: &'a ReferenceTable,
    bank_code: &'a str,
    candidate: Option<u32>,
) -> impl Iterator<Item = &'a BankFormat> + 'a {
    table.candidates(bank_code).filter(move |format| {
        !format.include_clearing_code
            || candidate.is_some_and(|key| format.clearing_range.contains(key))
    })
}

/// Whether `bank_code` plausibly owns `account_number`.
///
/// True when some record has this bank code and either does not embed the
/// clearing code or covers the account's leading four digits.
pub fn valid_bank_code(table: &ReferenceTable, bank_code: &str, account_number: &str) -> bool {
    let stripped = stripped(account_number);
    let candidate = clearing_candidate(&stripped);
    let valid = matching_formats(table, bank_code, candidate).next().is_some();
    log::debug!(
        "Bank code {} for account {}: {}",
        bank_code,
        account_number,
        if valid { "plausible" } else { "implausible" }
    );
    valid
}

/// Whether `account_number` has a plausible length for `bank_code`.
///
/// Returns [`LengthCheck::Unknown`] when the bank code itself is not
/// plausible for the account.
pub fn valid_length(table: &ReferenceTable, bank_code: &str, account_number: &str) -> LengthCheck {
    if !valid_bank_code(table, bank_code, account_number) {
        return LengthCheck::Unknown;
    }

    let stripped = stripped(account_number);
    let candidate = clearing_candidate(&stripped);

    let accepted = matching_formats(table, bank_code, candidate).any(|format| {
        let expected = if format.include_clearing_code {
            format.serial_number_length + format.clearing_code_length
        } else {
            format.serial_number_length
        };

        let actual = if format.zerofill_serial_number && !format.include_clearing_code {
            zerofill(&stripped, format.serial_number_length).chars().count()
        } else {
            stripped.chars().count()
        };

        actual == expected
    });

    if accepted {
        LengthCheck::Valid
    } else {
        LengthCheck::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_table::BankFormatRecord;

    fn record(
        bank_code: &str,
        clearing_range: [u32; 2],
        clearing_code_length: usize,
        serial_number_length: usize,
        zerofill_serial_number: bool,
        include_clearing_code: bool,
    ) -> BankFormatRecord {
        BankFormatRecord {
            bank_code: bank_code.into(),
            clearing_range,
            clearing_code_length,
            serial_number_length,
            zerofill_serial_number,
            include_clearing_code,
        }
    }

    fn table() -> ReferenceTable {
        ReferenceTable::from_records(vec![
            record("120", [3300, 3300], 4, 7, false, true),
            record("300", [3000, 3299], 4, 7, false, true),
            record("300", [3300, 3300], 4, 10, true, false),
            record("600", [6000, 6999], 4, 9, true, false),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_bank_code_with_clearing_range() {
        let table = table();
        assert!(valid_bank_code(&table, "120", "00033001234567"));
        assert!(!valid_bank_code(&table, "120", "00034001234567"));
        assert!(!valid_bank_code(&table, "999", "00033001234567"));
    }

    #[test]
    fn test_valid_bank_code_without_clearing_embedding() {
        let table = table();
        // Handelsbanken does not embed the clearing code, any prefix passes.
        assert!(valid_bank_code(&table, "600", "123456789"));
        assert!(valid_bank_code(&table, "600", "abc"));
    }

    #[test]
    fn test_valid_bank_code_any_candidate() {
        let table = table();
        assert!(valid_bank_code(&table, "300", "31001234567"));
        assert!(valid_bank_code(&table, "300", "8501011234"));
    }

    #[test]
    fn test_valid_length_unknown_for_implausible_bank() {
        let table = table();
        assert_eq!(
            valid_length(&table, "120", "00034001234567"),
            LengthCheck::Unknown
        );
        assert_eq!(valid_length(&table, "999", "1"), LengthCheck::Unknown);
    }

    #[test]
    fn test_valid_length_with_clearing_code() {
        let table = table();
        assert_eq!(
            valid_length(&table, "120", "00033001234567"),
            LengthCheck::Valid
        );
        assert_eq!(
            valid_length(&table, "120", "3300123456"),
            LengthCheck::Invalid
        );
    }

    #[test]
    fn test_valid_length_zerofilled_serial() {
        let table = table();
        assert_eq!(valid_length(&table, "600", "123456789"), LengthCheck::Valid);
        assert_eq!(valid_length(&table, "600", "12345"), LengthCheck::Valid);
        assert_eq!(valid_length(&table, "600", "1234567890"), LengthCheck::Invalid);
    }

    #[test]
    fn test_valid_length_any_candidate() {
        let table = table();
        assert_eq!(valid_length(&table, "300", "31001234567"), LengthCheck::Valid);
        assert_eq!(valid_length(&table, "300", "8501011234"), LengthCheck::Valid);
        assert_eq!(valid_length(&table, "300", "850101123456"), LengthCheck::Invalid);
    }

    #[test]
    fn test_separators_are_ignored() {
        let table = table();
        assert!(valid_bank_code(&table, "120", "3300-123 45 67"));
        assert_eq!(
            valid_length(&table, "120", "3300-123 45 67"),
            LengthCheck::Valid
        );
    }
}
