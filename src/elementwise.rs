/// Pairwise logical operations that combine two values into a new one.
///
/// Implementors never mutate either operand; each method allocates (or copies
/// into) a fresh result. Containers lift the scalar [`Option<bool>`] rules
/// cell by cell, pairing positions up to the shorter operand's length.
pub trait Elementwise {
    #[must_use]
    fn and_with(&self, other: &Self) -> Self;
    #[must_use]
    fn or_with(&self, other: &Self) -> Self;
    #[must_use]
    fn xor_with(&self, other: &Self) -> Self;
}

/// The scalar rules for nullable booleans: an absent operand on either side
/// makes the result absent, two present operands combine as plain booleans.
impl Elementwise for Option<bool> {
    #[inline]
    fn and_with(&self, other: &Self) -> Self {
        self.zip(*other).map(|(left, right)| left & right)
    }

    #[inline]
    fn or_with(&self, other: &Self) -> Self {
        self.zip(*other).map(|(left, right)| left | right)
    }

    #[inline]
    fn xor_with(&self, other: &Self) -> Self {
        self.zip(*other).map(|(left, right)| left ^ right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_pairs_combine_as_booleans() {
        assert_eq!(Some(true).and_with(&Some(false)), Some(false));
        assert_eq!(Some(true).or_with(&Some(false)), Some(true));
        assert_eq!(Some(true).xor_with(&Some(true)), Some(false));
    }

    #[test]
    fn absence_propagates_from_either_side() {
        for present in [Some(true), Some(false)] {
            assert_eq!(None.and_with(&present), None);
            assert_eq!(present.and_with(&None), None);
            assert_eq!(None.or_with(&present), None);
            assert_eq!(present.or_with(&None), None);
            assert_eq!(None.xor_with(&present), None);
            assert_eq!(present.xor_with(&None), None);
        }
        assert_eq!(None::<bool>.and_with(&None), None);
    }
}
