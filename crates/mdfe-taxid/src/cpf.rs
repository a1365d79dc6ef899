//! CPF: Cadastro de Pessoas Físicas, the 11-digit individual taxpayer id.
//!
//! Digits 0..8 are the body; digit 9 is the first check digit (weights
//! 10..2 over the body) and digit 10 the second (weights 11..2 over the
//! body plus the first check digit).

use serde::Serialize;
use std::fmt;

use crate::digits::{check_digit, is_repeated, parse_digits, to_string};
use crate::error::TaxIdError;

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute both check digits for a 9-digit CPF body.
pub fn cpf_check_digits(body: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(body, &FIRST_WEIGHTS);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(body);
    extended[9] = first;
    [first, check_digit(&extended, &SECOND_WEIGHTS)]
}

/// A CPF whose check digits have been verified. Stored as bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Parse a CPF, accepting any formatting characters around the digits.
    ///
    /// # Errors
    ///
    /// Returns the first failing step: length, repeated digits, then the
    /// first and second check digits.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let digits = parse_digits::<11>(input)?;

        if is_repeated(&digits) {
            return Err(TaxIdError::RepeatedDigits);
        }

        if check_digit(&digits[..9], &FIRST_WEIGHTS) != digits[9] {
            return Err(TaxIdError::CheckDigitMismatch { position: 9 });
        }

        if check_digit(&digits[..10], &SECOND_WEIGHTS) != digits[10] {
            return Err(TaxIdError::CheckDigitMismatch { position: 10 });
        }

        Ok(Self(to_string(&digits)))
    }

    /// Bare 11 digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form: XXX.XXX.XXX-XX
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Whether `input` is a valid CPF. Formatting characters are ignored;
/// blank or malformed input is simply invalid.
pub fn validate_cpf(input: &str) -> bool {
    Cpf::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid() {
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("39053344705"));
    }

    #[test]
    fn test_corrupted_last_digit() {
        assert!(!validate_cpf("11144477736"));
        assert_eq!(
            Cpf::parse("11144477736"),
            Err(TaxIdError::CheckDigitMismatch { position: 10 })
        );
        assert_eq!(
            Cpf::parse("11144477745"),
            Err(TaxIdError::CheckDigitMismatch { position: 9 })
        );
    }

    #[test]
    fn test_repeated_sequences_rejected() {
        for d in 0..=9u8 {
            let seq = char::from(b'0' + d).to_string().repeat(11);
            assert!(!validate_cpf(&seq), "{} must be rejected", seq);
            assert_eq!(Cpf::parse(&seq), Err(TaxIdError::RepeatedDigits));
        }
    }

    #[test]
    fn test_formatting_is_irrelevant() {
        assert_eq!(validate_cpf("111.444.777-35"), validate_cpf("11144477735"));
        assert!(validate_cpf(" 111 444 777 35 "));
        assert_eq!(Cpf::parse("111.444.777-35").unwrap().as_str(), "11144477735");
    }

    #[test]
    fn test_blank_and_garbage() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("   "));
        assert!(!validate_cpf("abc"));
        assert!(!validate_cpf("1114447773"));
        assert!(!validate_cpf("111444777350"));
        assert_eq!(
            Cpf::parse("123"),
            Err(TaxIdError::WrongLength { expected: 11, actual: 3 })
        );
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(cpf_check_digits(&[1, 1, 1, 4, 4, 4, 7, 7, 7]), [3, 5]);
        assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
    }

    #[test]
    fn test_display_and_serde() {
        let cpf = Cpf::parse("11144477735").unwrap();
        assert_eq!(cpf.to_string(), "111.444.777-35");

        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"11144477735\"");

        let parsed: Cpf = serde_json::from_str("\"111.444.777-35\"").unwrap();
        assert_eq!(parsed, cpf);
        assert!(serde_json::from_str::<Cpf>("\"11144477736\"").is_err());
    }
}
