//! Composite identity of a transition.

use super::endpoint::Endpoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(from, trigger)` pair that identifies a transition.
///
/// Keys compare structurally, so `(1, 23)` and `(12, 3)` are always
/// distinct. The destination state is never part of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionKey {
    /// Code of the current state.
    pub from: u32,
    /// Code of the trigger.
    pub trigger: u32,
}

impl TransitionKey {
    /// Build a key from the current state and trigger endpoints.
    pub fn new(from: &Endpoint, trigger: &Endpoint) -> Self {
        Self {
            from: from.code(),
            trigger: trigger.code(),
        }
    }

    /// Legacy single-integer form of the key.
    ///
    /// The `from` code fills the high decimal digits and the `trigger` code
    /// the low ones, sized to the trigger's width: `(1, 2)` packs to `12`
    /// and `(3, 45)` to `345`. Distinct keys can pack to the same value,
    /// so this is only for comparing against externally stored packed
    /// codes. Returns `None` if the result does not fit in a `u64`.
    ///
    /// ```rust
    /// use flowtable::core::TransitionKey;
    ///
    /// let a = TransitionKey { from: 1, trigger: 23 };
    /// let b = TransitionKey { from: 12, trigger: 3 };
    ///
    /// assert_ne!(a, b);
    /// assert_eq!(a.packed(), b.packed());
    /// ```
    pub fn packed(&self) -> Option<u64> {
        let width = self.trigger.checked_ilog10().map_or(1, |digits| digits + 1);
        let shift = 10u64.checked_pow(width)?;

        u64::from(self.from)
            .checked_mul(shift)?
            .checked_add(u64::from(self.trigger))
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(from: u32, trigger: u32) -> TransitionKey {
        TransitionKey { from, trigger }
    }

    #[test]
    fn key_uses_endpoint_codes() {
        let from = Endpoint::new(2, "Expert review");
        let trigger = Endpoint::new(1, "Approve");

        assert_eq!(TransitionKey::new(&from, &trigger), key(2, 1));
    }

    #[test]
    fn packed_concatenates_decimal_digits() {
        assert_eq!(key(1, 2).packed(), Some(12));
        assert_eq!(key(3, 45).packed(), Some(345));
        assert_eq!(key(5, 10).packed(), Some(510));
        assert_eq!(key(7, 12_345).packed(), Some(712_345));
    }

    #[test]
    fn packed_aliases_where_pair_key_does_not() {
        assert_eq!(key(1, 23).packed(), key(12, 3).packed());
        assert_ne!(key(1, 23), key(12, 3));
    }

    #[test]
    fn packed_reports_overflow() {
        assert_eq!(key(u32::MAX, u32::MAX).packed(), None);
    }

    #[test]
    fn display_shows_pair() {
        assert_eq!(key(3, 1).to_string(), "(3, 1)");
    }
}
