//! Descriptions of how to draw an operation in a circuit diagram.

use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};
use crate::exponent::Exponent;
use crate::request::DiagramRequest;

/// Wire symbols as supplied by a caller that is not statically typed.
///
/// The `Bare` variant exists so that a single string can be detected and
/// rejected instead of being read as one symbol per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireSymbols {
    /// An explicit sequence of symbols, one per qubit.
    Sequence(Vec<String>),
    /// A single string. Never valid as wire symbols.
    Bare(String),
}

impl From<&str> for WireSymbols {
    fn from(symbol: &str) -> Self {
        WireSymbols::Bare(symbol.to_string())
    }
}

impl From<String> for WireSymbols {
    fn from(symbol: String) -> Self {
        WireSymbols::Bare(symbol)
    }
}

impl From<Vec<String>> for WireSymbols {
    fn from(symbols: Vec<String>) -> Self {
        WireSymbols::Sequence(symbols)
    }
}

impl From<Vec<&str>> for WireSymbols {
    fn from(symbols: Vec<&str>) -> Self {
        WireSymbols::Sequence(symbols.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for WireSymbols {
    fn from(symbols: &[&str]) -> Self {
        WireSymbols::Sequence(symbols.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for WireSymbols {
    fn from(symbols: [&str; N]) -> Self {
        WireSymbols::Sequence(symbols.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Describes how to draw an operation in a circuit diagram.
///
/// ```
/// use qdiag::{DiagramInfo, Exponent};
///
/// let info = DiagramInfo::new(["@", "X"]).with_exponent(Exponent::number(0.5));
/// assert_eq!(info.wire_symbols(), ["@", "X"]);
/// assert!(info.connected());
/// ```
///
/// A bare string is not a sequence of wire symbols:
///
/// ```compile_fail
/// use qdiag::DiagramInfo;
///
/// let info = DiagramInfo::new("X");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiagramInfo")]
pub struct DiagramInfo {
    /// One symbol per qubit the operation acts on.
    wire_symbols: Vec<String>,
    /// Appended to the final symbol with a caret unless it equals one.
    exponent: Exponent,
    /// Whether to draw a line connecting the qubits.
    connected: bool,
}

impl DiagramInfo {
    /// Create diagram info from a sequence of wire symbols.
    ///
    /// The exponent defaults to one and the qubits are connected.
    pub fn new<I, S>(wire_symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wire_symbols: wire_symbols.into_iter().map(Into::into).collect(),
            exponent: Exponent::one(),
            connected: true,
        }
    }

    /// Create diagram info from loosely typed wire symbols.
    ///
    /// Fails with [`DiagramError::BareWireSymbols`] when given a single
    /// string rather than a sequence.
    pub fn try_new(wire_symbols: impl Into<WireSymbols>) -> DiagramResult<Self> {
        match wire_symbols.into() {
            WireSymbols::Sequence(symbols) => Ok(Self::new(symbols)),
            WireSymbols::Bare(symbols) => Err(DiagramError::BareWireSymbols { symbols }),
        }
    }

    /// Create diagram info for a single-qubit operation.
    pub fn single(symbol: impl Into<String>) -> Self {
        Self::new([symbol.into()])
    }

    /// Set the exponent annotation.
    #[must_use]
    pub fn with_exponent(mut self, exponent: impl Into<Exponent>) -> Self {
        self.exponent = exponent.into();
        self
    }

    /// Set whether the qubits are connected by a line.
    #[must_use]
    pub fn with_connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    /// The symbols shown on each qubit.
    #[inline]
    pub fn wire_symbols(&self) -> &[String] {
        &self.wire_symbols
    }

    /// The exponent annotation.
    #[inline]
    pub fn exponent(&self) -> &Exponent {
        &self.exponent
    }

    /// Whether the qubits are connected by a line.
    #[inline]
    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Number of wires this info describes.
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.wire_symbols.len()
    }

    /// The wire symbols with the exponent appended to the last one.
    ///
    /// The exponent is formatted with the request's precision and omitted
    /// when it equals one.
    pub fn formatted_wire_symbols(&self, request: &DiagramRequest) -> Vec<String> {
        let mut symbols = self.wire_symbols.clone();
        if self.exponent.is_one() {
            return symbols;
        }
        if let Some(last) = symbols.last_mut() {
            last.push('^');
            last.push_str(&self.exponent.format(request.precision()));
        }
        symbols
    }
}

impl From<Vec<String>> for DiagramInfo {
    fn from(wire_symbols: Vec<String>) -> Self {
        DiagramInfo::new(wire_symbols)
    }
}

#[derive(Deserialize)]
struct RawDiagramInfo {
    wire_symbols: WireSymbols,
    #[serde(default)]
    exponent: Exponent,
    #[serde(default = "connected_by_default")]
    connected: bool,
}

fn connected_by_default() -> bool {
    true
}

impl TryFrom<RawDiagramInfo> for DiagramInfo {
    type Error = DiagramError;

    fn try_from(raw: RawDiagramInfo) -> Result<Self, Self::Error> {
        Ok(DiagramInfo::try_new(raw.wire_symbols)?
            .with_exponent(raw.exponent)
            .with_connected(raw.connected))
    }
}
