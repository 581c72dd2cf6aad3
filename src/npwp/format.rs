//! NPWP parsing, validation report, and display formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of digits in a canonical NPWP.
pub const NPWP_DIGITS: usize = 15;

/// Group widths of the display format `XX.XXX.XXX.X-XXX.XXX`.
const GROUPS: [usize; 6] = [2, 3, 3, 1, 3, 3];
/// Separator placed after each group except the last.
const SEPARATORS: [char; 5] = ['.', '.', '.', '-', '.'];

/// Error returned when an NPWP fails format validation.
#[derive(Debug, Clone)]
pub struct NpwpError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for NpwpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid NPWP '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for NpwpError {}

/// The three positional segments of an NPWP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpwpComponents {
    /// Digits 1–9: taxpayer identifier (including the check digit).
    pub tax_id: String,
    /// Digits 10–12: registering tax office (KPP).
    pub office_code: String,
    /// Digits 13–15: taxpayer status (000 = head office).
    pub status_code: String,
}

impl NpwpComponents {
    /// Split 15 canonical digits into segments. `None` for any other length.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.len() != NPWP_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            tax_id: digits[..9].to_string(),
            office_code: digits[9..12].to_string(),
            status_code: digits[12..].to_string(),
        })
    }
}

/// Outcome of [`validate_npwp`]. Never an error: failures are listed in
/// `errors` so the caller can show every reason at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpwpValidation {
    pub valid: bool,
    /// Input with every non-digit removed.
    pub digits: String,
    /// `XX.XXX.XXX.X-XXX.XXX`, present only when valid.
    pub formatted: Option<String>,
    pub components: Option<NpwpComponents>,
    pub errors: Vec<String>,
}

/// Validate an NPWP by format.
///
/// Separators, spaces and any other non-digit characters are ignored; the
/// remaining digits must number exactly 15.
pub fn validate_npwp(input: &str) -> NpwpValidation {
    let digits = strip_non_digits(input);

    let mut errors = Vec::new();
    if digits.is_empty() {
        errors.push("NPWP must not be empty".to_string());
    } else if digits.len() != NPWP_DIGITS {
        errors.push(format!(
            "NPWP must be exactly {NPWP_DIGITS} digits, got {}",
            digits.len()
        ));
    }

    if !errors.is_empty() {
        log::debug!("NPWP rejected: {}", errors.join("; "));
        return NpwpValidation {
            valid: false,
            digits,
            formatted: None,
            components: None,
            errors,
        };
    }

    NpwpValidation {
        valid: true,
        formatted: Some(format_npwp(&digits)),
        components: NpwpComponents::from_digits(&digits),
        digits,
        errors,
    }
}

/// Format an NPWP as `XX.XXX.XXX.X-XXX.XXX`.
///
/// Works on partial input: it emits the longest well-formed prefix, adding a
/// separator only once a digit follows it. Digits past the 15th are dropped.
pub fn format_npwp(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(NPWP_DIGITS)
        .collect();

    let mut out = String::with_capacity(NPWP_DIGITS + SEPARATORS.len());
    let mut pos = 0;
    for (i, width) in GROUPS.iter().enumerate() {
        if pos >= digits.len() {
            break;
        }
        if i > 0 {
            out.push(SEPARATORS[i - 1]);
        }
        let end = (pos + width).min(digits.len());
        out.extend(&digits[pos..end]);
        pos = end;
    }
    out
}

fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// A format-valid NPWP, stored as its 15 canonical digits.
///
/// Displays and serializes in the dotted form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Npwp(String);

impl Npwp {
    /// Parse any separator style into a canonical NPWP.
    pub fn parse(input: &str) -> Result<Self, NpwpError> {
        let report = validate_npwp(input);
        if report.valid {
            Ok(Self(report.digits))
        } else {
            Err(NpwpError {
                value: input.into(),
                reason: report.errors.join("; "),
            })
        }
    }

    /// The 15 digits without separators.
    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn components(&self) -> NpwpComponents {
        NpwpComponents {
            tax_id: self.0[..9].to_string(),
            office_code: self.0[9..12].to_string(),
            status_code: self.0[12..].to_string(),
        }
    }
}

impl fmt::Display for Npwp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_npwp(&self.0))
    }
}

impl FromStr for Npwp {
    type Err = NpwpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Npwp {
    type Error = NpwpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Npwp> for String {
    fn from(npwp: Npwp) -> Self {
        npwp.to_string()
    }
}
