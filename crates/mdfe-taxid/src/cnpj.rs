//! CNPJ: Cadastro Nacional da Pessoa Jurídica, the 14-digit company id.

use serde::Serialize;
use std::fmt;

use crate::digits::{check_digit, is_repeated, parse_digits, to_string};
use crate::error::TaxIdError;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute both check digits for a 12-digit CNPJ body (8-digit root plus
/// 4-digit branch number).
pub fn cnpj_check_digits(body: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(body, &FIRST_WEIGHTS);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(body);
    extended[12] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

/// A CNPJ whose check digits have been verified. Stored as bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Parse a CNPJ, accepting any formatting characters around the digits.
    ///
    /// # Errors
    ///
    /// Returns the first failing step, same order as [`crate::Cpf::parse`].
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let digits = parse_digits::<14>(input)?;

        if is_repeated(&digits) {
            return Err(TaxIdError::RepeatedDigits);
        }

        if check_digit(&digits[..12], &FIRST_WEIGHTS) != digits[12] {
            return Err(TaxIdError::CheckDigitMismatch { position: 12 });
        }

        if check_digit(&digits[..13], &SECOND_WEIGHTS) != digits[13] {
            return Err(TaxIdError::CheckDigitMismatch { position: 13 });
        }

        Ok(Self(to_string(&digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 digits, shared by every branch of the company
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// Branch number; "0001" is the head office
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Masked form: XX.XXX.XXX/XXXX-XX
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Whether `input` is a valid CNPJ. Formatting characters are ignored.
pub fn validate_cnpj(input: &str) -> bool {
    Cnpj::parse(input).is_ok()
}
