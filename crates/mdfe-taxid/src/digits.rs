//! Digit extraction and the modulo-11 check-digit rule shared by CPF and CNPJ.

use crate::error::TaxIdError;

/// Keep only the ASCII digits of `input`. Blank input yields an empty string.
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip formatting and convert to digit values, requiring exactly `N` digits.
pub(crate) fn parse_digits<const N: usize>(input: &str) -> Result<[u8; N], TaxIdError> {
    let stripped = strip_formatting(input);
    if stripped.len() != N {
        return Err(TaxIdError::WrongLength {
            expected: N,
            actual: stripped.len(),
        });
    }

    let mut digits = [0u8; N];
    for (slot, byte) in digits.iter_mut().zip(stripped.bytes()) {
        *slot = byte - b'0';
    }
    Ok(digits)
}

/// All digits equal ("00000000000", "11111111111", ...)
pub(crate) fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Weighted sum mod 11; remainders 0 and 1 map to 0, otherwise 11 - r.
pub(crate) fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Render digit values back into a string
pub(crate) fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
