//! OIB (personal identification number) checksum.
//!
//! An OIB is eleven decimal digits; the last one is a control digit computed
//! from the first ten with the ISO 7064 MOD 11,10 hybrid system.

/// Number of digits in an OIB.
pub const OIB_LENGTH: usize = 11;

/// Computes the control digit for the first ten digits of an OIB.
///
/// Returns `None` unless `digits` is exactly ten ASCII digits.
pub fn control_digit(digits: &str) -> Option<u32> {
    if digits.len() != OIB_LENGTH - 1 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut acc = 10;
    for digit in digits.bytes().map(|b| u32::from(b - b'0')) {
        acc = (acc + digit) % 10;
        if acc == 0 {
            acc = 10;
        }
        acc = (acc * 2) % 11;
    }

    // acc is never 0 here, so the control is in 1..=10; 10 maps to 0.
    Some((11 - acc) % 10)
}

/// Returns true if `oib` is eleven digits with a correct control digit.
pub fn is_valid_oib(oib: &str) -> bool {
    if oib.len() != OIB_LENGTH || !oib.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (body, check) = oib.split_at(OIB_LENGTH - 1);
    let expected = control_digit(body);
    let actual = check.bytes().next().map(|b| u32::from(b - b'0'));

    expected.is_some() && expected == actual
}
