//! Rendering context passed to diagram info capabilities.
//!
//! A [`DiagramRequest`] tells an operation what the caller knows about where
//! it is being drawn (which qubits, how many, at which diagram positions)
//! and how the caller wants it drawn (unicode, numeric precision).
//!
//! # Examples
//!
//! ```
//! use qdiag::{DiagramRequest, NamedQubit};
//!
//! let request = DiagramRequest::new()
//!     .with_known_qubits([NamedQubit::new("a"), NamedQubit::new("b")])
//!     .with_unicode(false)
//!     .with_precision(Some(2));
//!
//! assert_eq!(request.known_qubit_count(), Some(2));
//! assert!(!request.use_unicode_characters());
//!
//! // Callers that know nothing use the shared uninformed default.
//! let default = DiagramRequest::uninformed_default();
//! assert_eq!(default.precision(), Some(3));
//! ```

use rustc_hash::FxHashMap;

use crate::qubit::Qubit;

/// Shared context for callers that supply none.
static UNINFORMED_DEFAULT: DiagramRequest = DiagramRequest::uninformed();

/// A request for information on drawing an operation in a circuit diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRequest {
    /// The qubits the operation is applied to, if known.
    known_qubits: Option<Vec<Qubit>>,
    /// The number of qubits the operation is applied to, if known.
    known_qubit_count: Option<usize>,
    /// Whether symbols may use unicode characters that render well in
    /// fixed-width fonts. If false, only ASCII is used.
    use_unicode_characters: bool,
    /// Digits after the decimal point for numbers; `None` means full precision.
    precision: Option<usize>,
    /// Diagram position of each qubit, if known.
    qubit_map: Option<FxHashMap<Qubit, usize>>,
}

impl DiagramRequest {
    /// Digits after the decimal point used by the uninformed default.
    pub const DEFAULT_PRECISION: usize = 3;

    /// Create a request carrying the uninformed values.
    pub fn new() -> Self {
        Self::uninformed()
    }

    const fn uninformed() -> Self {
        Self {
            known_qubits: None,
            known_qubit_count: None,
            use_unicode_characters: true,
            precision: Some(Self::DEFAULT_PRECISION),
            qubit_map: None,
        }
    }

    /// The process-wide request used when a caller supplies no context.
    ///
    /// Always the same instance.
    #[inline]
    pub fn uninformed_default() -> &'static DiagramRequest {
        &UNINFORMED_DEFAULT
    }

    /// Set the known qubits. Also records their count.
    #[must_use]
    pub fn with_known_qubits<I, Q>(mut self, qubits: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Qubit>,
    {
        let qubits: Vec<Qubit> = qubits.into_iter().map(Into::into).collect();
        self.known_qubit_count = Some(qubits.len());
        self.known_qubits = Some(qubits);
        self
    }

    /// Set the known qubit count.
    #[must_use]
    pub fn with_known_qubit_count(mut self, count: usize) -> Self {
        self.known_qubit_count = Some(count);
        self
    }

    /// Set whether unicode characters may be used.
    #[must_use]
    pub fn with_unicode(mut self, use_unicode_characters: bool) -> Self {
        self.use_unicode_characters = use_unicode_characters;
        self
    }

    /// Set the numeric precision; `None` means full precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Set the qubit-to-position map.
    #[must_use]
    pub fn with_qubit_map<I, Q>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = (Q, usize)>,
        Q: Into<Qubit>,
    {
        self.qubit_map = Some(
            positions
                .into_iter()
                .map(|(q, pos)| (q.into(), pos))
                .collect(),
        );
        self
    }

    /// The known qubits, if any.
    pub fn known_qubits(&self) -> Option<&[Qubit]> {
        self.known_qubits.as_deref()
    }

    /// The known qubit count, if any.
    pub fn known_qubit_count(&self) -> Option<usize> {
        self.known_qubit_count
    }

    /// Whether unicode characters may be used.
    pub fn use_unicode_characters(&self) -> bool {
        self.use_unicode_characters
    }

    /// Digits after the decimal point, or `None` for full precision.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// The qubit-to-position map, if any.
    pub fn qubit_map(&self) -> Option<&FxHashMap<Qubit, usize>> {
        self.qubit_map.as_ref()
    }

    /// Diagram position of `qubit`, if the map is known and contains it.
    pub fn position_of(&self, qubit: &Qubit) -> Option<usize> {
        self.qubit_map.as_ref()?.get(qubit).copied()
    }

    /// Check whether this request carries no caller knowledge.
    pub fn is_uninformed(&self) -> bool {
        *self == UNINFORMED_DEFAULT
    }
}

impl Default for DiagramRequest {
    fn default() -> Self {
        Self::uninformed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::{LineQubit, NamedQubit};
    use std::thread;

    #[test]
    fn test_uninformed_default_values() {
        let d = DiagramRequest::uninformed_default();
        assert!(d.known_qubits().is_none());
        assert!(d.known_qubit_count().is_none());
        assert!(d.use_unicode_characters());
        assert_eq!(d.precision(), Some(3));
        assert!(d.qubit_map().is_none());
        assert!(d.is_uninformed());
    }

    #[test]
    fn test_uninformed_default_is_shared() {
        let a = DiagramRequest::uninformed_default();
        let b = DiagramRequest::uninformed_default();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, DiagramRequest::default());

        let addresses: Vec<usize> = (0..4)
            .map(|_| {
                thread::spawn(|| DiagramRequest::uninformed_default() as *const _ as usize)
            })
            .map(|handle| handle.join().unwrap())
            .collect();
        assert!(addresses.iter().all(|&addr| addr == a as *const _ as usize));
    }

    #[test]
    fn test_builder_does_not_touch_default() {
        let custom = DiagramRequest::uninformed_default()
            .clone()
            .with_unicode(false)
            .with_precision(None);
        assert!(!custom.use_unicode_characters());
        assert!(!custom.is_uninformed());
        assert!(DiagramRequest::uninformed_default().use_unicode_characters());
        assert_eq!(DiagramRequest::uninformed_default().precision(), Some(3));
    }

    #[test]
    fn test_known_qubits_record_count() {
        let request = DiagramRequest::new().with_known_qubits(LineQubit::range(3));
        assert_eq!(request.known_qubit_count(), Some(3));
        assert_eq!(request.known_qubits().map(<[Qubit]>::len), Some(3));

        let counted = DiagramRequest::new().with_known_qubit_count(5);
        assert!(counted.known_qubits().is_none());
        assert_eq!(counted.known_qubit_count(), Some(5));
    }

    #[test]
    fn test_qubit_map_lookup() {
        let a = NamedQubit::new("a");
        let request =
            DiagramRequest::new().with_qubit_map([(a.clone(), 0), (NamedQubit::new("b"), 1)]);

        assert_eq!(request.position_of(&a.into()), Some(0));
        assert_eq!(request.position_of(&NamedQubit::new("c").into()), None);
        assert_eq!(request.position_of(&LineQubit(0).into()), None);
        assert_eq!(DiagramRequest::new().position_of(&LineQubit(0).into()), None);
    }
}
