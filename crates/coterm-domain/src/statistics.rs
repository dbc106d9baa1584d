//! Statistic computation module
//!
//! Pure functions that score how strongly a compared term is associated with
//! a target term, given gene-product counts:
//!
//! - `together`: gene products annotated with both terms
//! - `compared`: gene products annotated with the compared term
//! - `selected`: gene products annotated with the target term
//! - `total`: gene products in the whole data set

use crate::DomainError;

/// Similarity of the two terms' annotated gene-product sets, as a percentage
///
/// `together / (compared + selected - together) * 100`, i.e. the Jaccard
/// index of the two sets scaled to `[0, 100]`.
///
/// # Errors
/// `InvalidArgument` if `selected` is zero, or if `together` exceeds either
/// `compared` or `selected` (the overlap cannot be larger than either set).
///
/// # Examples
///
/// ```
/// use coterm_domain::statistics::similarity_percent;
///
/// let score = similarity_percent(4, 8, 8).unwrap();
/// assert!((score - 33.33).abs() < 0.01);
/// ```
pub fn similarity_percent(together: u64, compared: u64, selected: u64) -> Result<f64, DomainError> {
    if selected == 0 {
        return Err(DomainError::invalid("selected count must be greater than zero"));
    }
    check_overlap(together, compared, selected)?;

    // Union of the two sets; never smaller than `selected`, so never zero.
    // `together <= compared` holds here, so the subtraction cannot wrap.
    let union = (compared - together) as f64 + selected as f64;
    Ok(together as f64 / union * 100.0)
}

/// Lift of the compared term given the target term
///
/// `(together / selected) / (compared / total)`: values above 1 mean the
/// compared term co-occurs with the target more often than chance predicts.
/// A compared term with no annotations has no observed association and
/// scores `0.0`.
///
/// # Errors
/// `InvalidArgument` if `selected` or `total` is zero, or if `together`
/// exceeds either `compared` or `selected`.
///
/// # Examples
///
/// ```
/// use coterm_domain::statistics::probability_ratio;
///
/// let ratio = probability_ratio(4, 8, 8, 24).unwrap();
/// assert!((ratio - 1.5).abs() < 0.001);
/// ```
pub fn probability_ratio(
    together: u64,
    compared: u64,
    selected: u64,
    total: u64,
) -> Result<f64, DomainError> {
    if selected == 0 {
        return Err(DomainError::invalid("selected count must be greater than zero"));
    }
    if total == 0 {
        return Err(DomainError::invalid("total count must be greater than zero"));
    }
    check_overlap(together, compared, selected)?;

    if compared == 0 {
        return Ok(0.0);
    }

    let given_target = together as f64 / selected as f64;
    let by_chance = compared as f64 / total as f64;
    Ok(given_target / by_chance)
}

/// Round a statistic to two decimal places for display
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn check_overlap(together: u64, compared: u64, selected: u64) -> Result<(), DomainError> {
    if together > compared {
        return Err(DomainError::invalid(format!(
            "together count {} exceeds compared count {}",
            together, compared
        )));
    }
    if together > selected {
        return Err(DomainError::invalid(format!(
            "together count {} exceeds selected count {}",
            together, selected
        )));
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// (together, compared, selected) with together <= min(compared, selected)
    fn counts() -> impl Strategy<Value = (u64, u64, u64)> {
        (0u64..10_000, 1u64..10_000).prop_flat_map(|(compared, selected)| {
            (0..=compared.min(selected), Just(compared), Just(selected))
        })
    }

    proptest! {
        /// Property: similarity is always a percentage
        #[test]
        fn test_similarity_in_percent_range((together, compared, selected) in counts()) {
            let score = similarity_percent(together, compared, selected).unwrap();
            prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }

        /// Property: similarity is symmetric in the two terms
        #[test]
        fn test_similarity_symmetric((together, compared, selected) in counts()) {
            prop_assume!(compared > 0);
            let forward = similarity_percent(together, compared, selected).unwrap();
            let backward = similarity_percent(together, selected, compared).unwrap();
            prop_assert!((forward - backward).abs() < 1e-9);
        }

        /// Property: probability ratio is finite and non-negative
        #[test]
        fn test_probability_ratio_finite(
            (together, compared, selected) in counts(),
            extra in 0u64..10_000,
        ) {
            let total = compared.max(selected) + extra;
            let ratio = probability_ratio(together, compared, selected, total).unwrap();
            prop_assert!(ratio.is_finite());
            prop_assert!(ratio >= 0.0);
        }

        /// Property: more overlap never lowers similarity
        #[test]
        fn test_similarity_monotonic_in_overlap((together, compared, selected) in counts()) {
            prop_assume!(together < compared.min(selected));
            let lower = similarity_percent(together, compared, selected).unwrap();
            let higher = similarity_percent(together + 1, compared, selected).unwrap();
            prop_assert!(higher >= lower);
        }
    }
}
