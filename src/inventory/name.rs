//! Item name canonicalization.
//!
//! Raw user input ("apple", " APPLE ", "2 apples") is reduced to one
//! canonical key per item so repeated additions converge on a single
//! document. The policy:
//!
//! 1. Trim surrounding whitespace and lowercase the whole string.
//! 2. Drop leading characters up to the first ASCII letter.
//! 3. Uppercase that first letter.
//!
//! Inputs left empty by steps 1-2 (empty strings, digits-only, punctuation)
//! are rejected with [`InventoryError::InvalidName`] rather than turned into
//! a garbage key.

use crate::inventory::error::InventoryError;

/// Produces the canonical document key for a raw item name.
///
/// Pure and idempotent: `normalize_name(&normalize_name(x)?) == normalize_name(x)`
/// for every accepted `x`.
pub fn normalize_name(raw: &str) -> Result<String, InventoryError> {
    let lowered = raw.trim().to_lowercase();
    let start = lowered
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| InventoryError::InvalidName(raw.to_string()))?;

    // `start` lands on an ASCII letter, so splitting one byte in is safe.
    let (head, tail) = lowered[start..].split_at(1);
    let mut key = head.to_ascii_uppercase();
    key.push_str(tail);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_variants_converge() {
        for raw in ["apple", "Apple", "APPLE", "  aPpLe  "] {
            assert_eq!(normalize_name(raw).unwrap(), "Apple");
        }
    }

    #[test]
    fn test_leading_non_letters_dropped() {
        assert_eq!(normalize_name("2 apples").unwrap(), "Apples");
        assert_eq!(normalize_name("--milk").unwrap(), "Milk");
        assert_eq!(normalize_name("1% milk").unwrap(), "Milk");
    }

    #[test]
    fn test_interior_characters_kept() {
        assert_eq!(normalize_name("olive oil").unwrap(), "Olive oil");
        assert_eq!(normalize_name("M&Ms").unwrap(), "M&ms");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["apple", "2 apples", "Olive Oil", "  BANANAS!  "] {
            let once = normalize_name(raw).unwrap();
            let twice = normalize_name(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_rejects_names_without_letters() {
        for raw in ["", "   ", "123", "!!!", "42 "] {
            assert!(matches!(
                normalize_name(raw),
                Err(InventoryError::InvalidName(_))
            ));
        }
    }
}
