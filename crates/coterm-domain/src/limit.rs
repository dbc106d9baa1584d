//! Result-count limits requested by callers

use crate::DomainError;

/// Limit returned for `ALL`: no bound on the number of results
pub const UNLIMITED: usize = usize::MAX;

/// Translates user-supplied limit strings into result-count bounds
///
/// | raw | result |
/// |---|---|
/// | absent, empty or blank | the default limit |
/// | `ALL` in any case | [`UNLIMITED`] |
/// | `0` | the default limit |
/// | a positive integer `n` | `n` |
/// | a negative integer | `InvalidArgument` |
/// | anything else | `InvalidArgument` |
///
/// # Examples
///
/// ```
/// use coterm_domain::{LimitResolver, UNLIMITED};
///
/// let resolver = LimitResolver::new(50).unwrap();
/// assert_eq!(resolver.resolve(None).unwrap(), 50);
/// assert_eq!(resolver.resolve(Some("all")).unwrap(), UNLIMITED);
/// assert_eq!(resolver.resolve(Some("7")).unwrap(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitResolver {
    default_limit: usize,
}

impl LimitResolver {
    /// Create a resolver with the configured default limit
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `default_limit` is zero.
    pub fn new(default_limit: usize) -> Result<Self, DomainError> {
        if default_limit == 0 {
            return Err(DomainError::invalid("default limit must be greater than zero"));
        }
        Ok(Self { default_limit })
    }

    /// The configured default limit
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Resolve a raw limit against this resolver's default
    pub fn resolve(&self, raw: Option<&str>) -> Result<usize, DomainError> {
        workout_limit(raw, self.default_limit)
    }
}

/// Resolve a raw limit string against `default_limit`
pub fn workout_limit(raw: Option<&str>, default_limit: usize) -> Result<usize, DomainError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default_limit),
        Some(raw) => raw,
    };

    if raw.eq_ignore_ascii_case("ALL") {
        return Ok(UNLIMITED);
    }

    let parsed: i64 = raw
        .parse()
        .map_err(|_| DomainError::invalid("value is not ALL or a number"))?;

    match parsed {
        0 => Ok(default_limit),
        n if n < 0 => Err(DomainError::invalid("limit must not be negative")),
        n => Ok(usize::try_from(n).unwrap_or(UNLIMITED)),
    }
}
