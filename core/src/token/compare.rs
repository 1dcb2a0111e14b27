use subtle::ConstantTimeEq;

/// Compare two byte slices in fixed time.
///
/// Equal-length inputs are scanned in full with no early exit on the first
/// mismatch. Lengths are compared up front, so the length of a value is not
/// hidden, only its content.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
