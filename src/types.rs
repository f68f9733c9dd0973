//! Common types shared by the reference table, the converter and the validators.

use std::fmt;

/// Length of the account number in the international (SWIFT) format.
pub const SWIFT_ACCOUNT_LENGTH: usize = 17;

/// Number of leading digits used to look up the owning bank.
pub const CLEARING_KEY_LENGTH: usize = 4;

/// Inclusive range of 4-digit clearing prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearingRange {
    start: u32,
    end: u32,
}

impl ClearingRange {
    pub(crate) const fn new_unchecked(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// First clearing prefix covered by the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last clearing prefix covered by the range.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Whether `key` lies within the range, bounds included.
    pub fn contains(&self, key: u32) -> bool {
        self.start <= key && key <= self.end
    }
}

impl fmt::Display for ClearingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Formatting rule for one block of clearing numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankFormat {
    /// Bank identifier used verbatim in the international output.
    pub bank_code: String,

    /// Clearing prefixes governed by this rule.
    pub clearing_range: ClearingRange,

    /// Leading digits of a combined account number that form the clearing code.
    pub clearing_code_length: usize,

    /// Expected digit length of the serial number.
    pub serial_number_length: usize,

    /// Left-pad the serial number with zeros to `serial_number_length`.
    pub zerofill_serial_number: bool,

    /// Prefix the clearing code to the serial number in the international account.
    pub include_clearing_code: bool,
}

/// Where the clearing code of an account comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearingSource<'a> {
    /// A branch code was supplied separately from the account number.
    Explicit(&'a str),
    /// The clearing code has to be cut from the front of the account number.
    Derived,
}

/// Outcome of converting one domestic account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// The clearing number belongs to a known bank.
    Resolved {
        /// Clearing code.
        branch_code: String,
        /// Serial number, zero-filled when the bank requires it.
        account_number: String,
        swift_bank_code: String,
        swift_account_number: String,
    },
    /// No bank covers the clearing number; the account is padded as-is.
    Unresolved { swift_account_number: String },
}

impl ConversionResult {
    /// International bank code, absent for unknown banks.
    pub fn swift_bank_code(&self) -> Option<&str> {
        match self {
            ConversionResult::Resolved { swift_bank_code, .. } => Some(swift_bank_code),
            ConversionResult::Unresolved { .. } => None,
        }
    }

    /// Zero-padded international account number.
    pub fn swift_account_number(&self) -> &str {
        match self {
            ConversionResult::Resolved {
                swift_account_number,
                ..
            }
            | ConversionResult::Unresolved {
                swift_account_number,
            } => swift_account_number,
        }
    }

    /// Clearing code, when the bank was resolved.
    pub fn branch_code(&self) -> Option<&str> {
        match self {
            ConversionResult::Resolved { branch_code, .. } => Some(branch_code),
            ConversionResult::Unresolved { .. } => None,
        }
    }

    /// Serial number, when the bank was resolved.
    pub fn account_number(&self) -> Option<&str> {
        match self {
            ConversionResult::Resolved { account_number, .. } => Some(account_number),
            ConversionResult::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ConversionResult::Resolved { .. })
    }
}

/// Three-valued answer of the length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCheck {
    /// Length matches at least one rule of the bank.
    Valid,
    /// Length matches none of the bank's rules.
    Invalid,
    /// The bank code itself is implausible, so no claim is made.
    Unknown,
}

impl LengthCheck {
    /// Convert to `Option<bool>`, with `Unknown` as `None`.
    pub fn as_option(&self) -> Option<bool> {
        match self {
            LengthCheck::Valid => Some(true),
            LengthCheck::Invalid => Some(false),
            LengthCheck::Unknown => None,
        }
    }
}

impl fmt::Display for LengthCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LengthCheck::Valid => "valid",
            LengthCheck::Invalid => "invalid",
            LengthCheck::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Left-pad `value` with zeros to `width` characters, never truncating.
pub(crate) fn zerofill(value: &str, width: usize) -> String {
    format!("{:0>width$}", value, width = width)
}
