//! Qubit identifier types.
//!
//! Each identifier kind carries its own total order. Identifiers of
//! different kinds are never equal, never hash alike by construction, and
//! have no relative order: [`Qubit`]'s `partial_cmp` returns `None` for them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::natural::natural_order_key;

/// Discriminant mixed into every identifier hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QubitKind {
    /// A [`NamedQubit`].
    Named,
    /// A [`LineQubit`].
    Line,
}

/// A qubit identified by name.
///
/// Ordering follows the natural order of the names, so `q2 < q10`.
///
/// ```
/// use qdiag::NamedQubit;
///
/// let mut qubits = vec![NamedQubit::new("q10"), NamedQubit::new("q2")];
/// qubits.sort();
/// assert_eq!(qubits[0].name(), "q2");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedQubit {
    name: String,
}

impl NamedQubit {
    /// Create a named qubit.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create `prefix0`, `prefix1`, ... up to `prefix{n-1}`.
    pub fn range(n: usize, prefix: &str) -> Vec<Self> {
        (0..n).map(|i| Self::new(format!("{prefix}{i}"))).collect()
    }

    /// The name of this qubit.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The natural-order key this qubit sorts by.
    pub fn sort_key(&self) -> String {
        natural_order_key(&self.name)
    }
}

impl Hash for NamedQubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (QubitKind::Named, &self.name).hash(state);
    }
}

impl PartialOrd for NamedQubit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NamedQubit {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.name == other.name {
            return Ordering::Equal;
        }
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for NamedQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for NamedQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedQubit({:?})", self.name)
    }
}

impl From<&str> for NamedQubit {
    fn from(name: &str) -> Self {
        NamedQubit::new(name)
    }
}

impl From<String> for NamedQubit {
    fn from(name: String) -> Self {
        NamedQubit::new(name)
    }
}

/// A qubit on a line, identified by its index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineQubit(pub u32);

impl LineQubit {
    /// Create qubits `0..n`.
    pub fn range(n: u32) -> Vec<Self> {
        (0..n).map(LineQubit).collect()
    }
}

impl Hash for LineQubit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (QubitKind::Line, self.0).hash(state);
    }
}

impl fmt::Display for LineQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl fmt::Debug for LineQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineQubit({})", self.0)
    }
}

impl From<u32> for LineQubit {
    fn from(index: u32) -> Self {
        LineQubit(index)
    }
}

/// An identifier of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qubit {
    /// A named qubit.
    Named(NamedQubit),
    /// A line qubit.
    Line(LineQubit),
}

impl Qubit {
    /// The kind of this identifier.
    pub fn kind(&self) -> QubitKind {
        match self {
            Qubit::Named(_) => QubitKind::Named,
            Qubit::Line(_) => QubitKind::Line,
        }
    }

    /// Equality that reports `None` when the kinds differ.
    pub fn try_eq(&self, other: &Qubit) -> Option<bool> {
        match (self, other) {
            (Qubit::Named(a), Qubit::Named(b)) => Some(a == b),
            (Qubit::Line(a), Qubit::Line(b)) => Some(a == b),
            _ => None,
        }
    }

    /// Get the named qubit, if this is one.
    pub fn as_named(&self) -> Option<&NamedQubit> {
        match self {
            Qubit::Named(q) => Some(q),
            Qubit::Line(_) => None,
        }
    }

    /// Get the line qubit, if this is one.
    pub fn as_line(&self) -> Option<LineQubit> {
        match self {
            Qubit::Line(q) => Some(*q),
            Qubit::Named(_) => None,
        }
    }
}

impl PartialOrd for Qubit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Qubit::Named(a), Qubit::Named(b)) => Some(a.cmp(b)),
            (Qubit::Line(a), Qubit::Line(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qubit::Named(q) => write!(f, "{q}"),
            Qubit::Line(q) => write!(f, "{q}"),
        }
    }
}

impl From<NamedQubit> for Qubit {
    fn from(q: NamedQubit) -> Self {
        Qubit::Named(q)
    }
}

impl From<LineQubit> for Qubit {
    fn from(q: LineQubit) -> Self {
        Qubit::Line(q)
    }
}
