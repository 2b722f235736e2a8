//! Arity rules of the trampoline family.
//!
//! Variants exist for every multiple of three words up to the ceiling:
//! `Syscall` (3), `Syscall6`, `Syscall9`, `Syscall12`, `Syscall15`,
//! `Syscall18`. There is no zero-argument variant.

/// Largest number of real parameters any variant accepts.
pub const ARITY_CEILING: usize = 18;

/// Variant sizes step by this many words.
pub const WORDS_PER_STEP: usize = 3;

/// Number of words actually passed for `arity` real parameters: the smallest
/// positive multiple of [`WORDS_PER_STEP`] not below `arity`.
pub fn padded_len(arity: usize) -> usize {
    if arity == 0 {
        return WORDS_PER_STEP;
    }
    arity.div_ceil(WORDS_PER_STEP) * WORDS_PER_STEP
}

/// Suffix naming the variant for a padded word count. The 3-word variant is
/// the unsuffixed base name.
pub fn variant_suffix(padded: usize) -> String {
    if padded == WORDS_PER_STEP {
        String::new()
    } else {
        padded.to_string()
    }
}

pub fn fits(arity: usize) -> bool {
    arity <= ARITY_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_table() {
        let expected = [
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
            (4, 6),
            (6, 6),
            (7, 9),
            (12, 12),
            (13, 15),
            (17, 18),
            (18, 18),
            (19, 21),
        ];
        for (arity, padded) in expected {
            assert_eq!(padded_len(arity), padded, "arity {arity}");
        }
    }

    #[test]
    fn suffixes() {
        assert_eq!(variant_suffix(3), "");
        assert_eq!(variant_suffix(6), "6");
        assert_eq!(variant_suffix(18), "18");
    }

    #[test]
    fn ceiling_is_inclusive() {
        assert!(fits(0));
        assert!(fits(18));
        assert!(!fits(19));
    }
}
