// ABOUTME: Parser for typed set input such as "62,5x8@2"
// ABOUTME: Accepts comma or dot decimals; "-" stands for a blank set

use crate::errors::{AppError, AppResult};
use gymgo_core::models::Set;
use regex::Regex;
use std::sync::LazyLock;

/// `<weight>x<reps>[@<rir>]`
static SET_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:[.,]\d+)?)\s*[xX×*]\s*(\d+)(?:\s*@\s*(-?\d+))?$").ok()
});

/// Token for a set left blank
const BLANK: &str = "-";

/// Parse one set; `set_no` is assigned by the caller
///
/// # Errors
///
/// Returns `InvalidFormat` when the text is neither `-` nor `<kg>x<reps>[@<rir>]`
pub fn parse_set(set_no: u32, raw: &str) -> AppResult<Set> {
    let text = raw.trim();
    if text == BLANK || text.is_empty() {
        return Ok(Set::blank(set_no));
    }

    let captures = SET_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .ok_or_else(|| {
            AppError::invalid_format(format!(
                "Set {set_no}: expected <kg>x<reps>[@<rir>] (e.g. 62,5x8@2), got '{text}'"
            ))
        })?;

    let weight = captures
        .get(1)
        .map(|m| m.as_str().replace(',', "."))
        .and_then(|w| w.parse::<f64>().ok())
        .ok_or_else(|| AppError::invalid_format(format!("Set {set_no}: bad weight in '{text}'")))?;
    let reps = captures
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| AppError::invalid_format(format!("Set {set_no}: bad reps in '{text}'")))?;
    let rir = captures
        .get(3)
        .map(|m| m.as_str().parse::<i32>())
        .transpose()
        .map_err(|e| AppError::invalid_format(format!("Set {set_no}: bad RIR in '{text}': {e}")))?;

    Ok(Set::new(set_no, weight, reps, rir))
}

/// Parse a sequence of sets numbered from 1
///
/// # Errors
///
/// Returns the first `InvalidFormat` encountered
pub fn parse_sets<I, T>(inputs: I) -> AppResult<Vec<Set>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    inputs
        .into_iter()
        .zip(1_u32..)
        .map(|(raw, set_no)| parse_set(set_no, raw.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_variants() {
        let set = parse_set(1, "62,5x8@2").unwrap();
        assert!((set.weight - 62.5).abs() < f64::EPSILON);
        assert_eq!((set.set_no, set.reps, set.rir), (1, 8, Some(2)));

        let set = parse_set(2, " 100 × 5 ").unwrap();
        assert_eq!((set.reps, set.rir), (5, None));

        let set = parse_set(3, "60x10@0").unwrap();
        assert_eq!(set.rir, Some(0));

        assert!(!parse_set(4, "-").unwrap().is_complete());
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["abc", "60", "x8", "60x", "60x8@", "-5x8"] {
            let error = parse_set(1, bad).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidFormat, "{bad}");
        }
    }

    #[test]
    fn test_parse_sets_numbers_from_one() {
        let sets = parse_sets(["60x8", "-", "62.5x6@1"]).unwrap();
        let numbers: Vec<u32> = sets.iter().map(|set| set.set_no).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(sets.iter().filter(|set| set.is_complete()).count(), 2);
    }
}
