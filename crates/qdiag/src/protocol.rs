//! The diagram info protocol.
//!
//! Operations opt into diagram rendering by implementing [`Diagrammable`]
//! and exposing one or both capabilities:
//!
//! - [`SupportsDiagramInfo`], the primary capability.
//! - [`LegacyDiagramInfo`], an older capability still honoured when the
//!   primary one is missing or reports [`DiagramAnswer::NotApplicable`].
//!
//! [`circuit_diagram_info`] queries a value, normalizes the answer into a
//! [`DiagramInfo`], and falls back to a caller default when nothing answers.
//!
//! # Example
//!
//! ```
//! use qdiag::{
//!     DiagramAnswer, DiagramInfo, DiagramRequest, Diagrammable, SupportsDiagramInfo,
//!     diagram_info,
//! };
//!
//! struct Hadamard;
//!
//! impl SupportsDiagramInfo for Hadamard {
//!     fn diagram_info(&self, _request: &DiagramRequest) -> DiagramAnswer {
//!         "H".into()
//!     }
//! }
//!
//! impl Diagrammable for Hadamard {
//!     fn as_diagram_info(&self) -> Option<&dyn SupportsDiagramInfo> {
//!         Some(self)
//!     }
//! }
//!
//! let info = diagram_info(&Hadamard, None).unwrap();
//! assert_eq!(info, DiagramInfo::single("H"));
//! ```

use tracing::{debug, trace};

use crate::diagram_info::DiagramInfo;
use crate::error::{DiagramError, DiagramResult};
use crate::request::DiagramRequest;

/// What a capability reports for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramAnswer {
    /// A single symbol, for a one-qubit operation.
    Symbol(String),
    /// One symbol per qubit.
    Symbols(Vec<String>),
    /// A complete description.
    Info(DiagramInfo),
    /// The capability has nothing to say for this request.
    NotApplicable,
}

impl DiagramAnswer {
    /// Normalize into diagram info, or `None` if not applicable.
    pub fn into_info(self) -> Option<DiagramInfo> {
        match self {
            DiagramAnswer::Symbol(symbol) => Some(DiagramInfo::single(symbol)),
            DiagramAnswer::Symbols(symbols) => Some(DiagramInfo::new(symbols)),
            DiagramAnswer::Info(info) => Some(info),
            DiagramAnswer::NotApplicable => None,
        }
    }

    /// Check if this is the not-applicable answer.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, DiagramAnswer::NotApplicable)
    }
}

impl From<&str> for DiagramAnswer {
    fn from(symbol: &str) -> Self {
        DiagramAnswer::Symbol(symbol.to_string())
    }
}

impl From<String> for DiagramAnswer {
    fn from(symbol: String) -> Self {
        DiagramAnswer::Symbol(symbol)
    }
}

impl From<Vec<String>> for DiagramAnswer {
    fn from(symbols: Vec<String>) -> Self {
        DiagramAnswer::Symbols(symbols)
    }
}

impl<const N: usize> From<[&str; N]> for DiagramAnswer {
    fn from(symbols: [&str; N]) -> Self {
        DiagramAnswer::Symbols(symbols.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<DiagramInfo> for DiagramAnswer {
    fn from(info: DiagramInfo) -> Self {
        DiagramAnswer::Info(info)
    }
}

impl From<Option<DiagramInfo>> for DiagramAnswer {
    fn from(info: Option<DiagramInfo>) -> Self {
        info.map_or(DiagramAnswer::NotApplicable, DiagramAnswer::Info)
    }
}

/// The primary diagram info capability.
pub trait SupportsDiagramInfo {
    /// Describe how to draw this value for the given request.
    fn diagram_info(&self, request: &DiagramRequest) -> DiagramAnswer;
}

/// The legacy diagram info capability.
///
/// Consulted only when the primary capability is absent or declines.
pub trait LegacyDiagramInfo {
    /// Describe how to draw this value for the given request.
    fn text_diagram_info(&self, request: &DiagramRequest) -> DiagramAnswer;
}

/// A value that may be queried for diagram info.
///
/// Both capability probes default to `None`, so an empty impl declares a
/// type that can be asked but has nothing to offer.
pub trait Diagrammable {
    /// The primary capability, if this value implements it.
    fn as_diagram_info(&self) -> Option<&dyn SupportsDiagramInfo> {
        None
    }

    /// The legacy capability, if this value implements it.
    fn as_legacy_diagram_info(&self) -> Option<&dyn LegacyDiagramInfo> {
        None
    }

    /// Name used in resolution errors.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: Diagrammable + ?Sized> Diagrammable for &T {
    fn as_diagram_info(&self) -> Option<&dyn SupportsDiagramInfo> {
        (**self).as_diagram_info()
    }

    fn as_legacy_diagram_info(&self) -> Option<&dyn LegacyDiagramInfo> {
        (**self).as_legacy_diagram_info()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Diagrammable + ?Sized> Diagrammable for Box<T> {
    fn as_diagram_info(&self) -> Option<&dyn SupportsDiagramInfo> {
        (**self).as_diagram_info()
    }

    fn as_legacy_diagram_info(&self) -> Option<&dyn LegacyDiagramInfo> {
        (**self).as_legacy_diagram_info()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Outcome of querying capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A capability answered.
    Resolved(DiagramInfo),
    /// At least one capability exists, and every one present declined.
    Declined,
    /// No capability exists.
    Absent,
}

impl Resolution {
    /// The resolved info, if any.
    pub fn into_info(self) -> Option<DiagramInfo> {
        match self {
            Resolution::Resolved(info) => Some(info),
            Resolution::Declined | Resolution::Absent => None,
        }
    }

    /// Convert into a result, naming `type_name` in the error on failure.
    pub fn into_result(self, type_name: &'static str) -> DiagramResult<DiagramInfo> {
        match self {
            Resolution::Resolved(info) => Ok(info),
            Resolution::Declined => Err(DiagramError::CapabilityDeclined { type_name }),
            Resolution::Absent => Err(DiagramError::CapabilityAbsent { type_name }),
        }
    }

    fn from_answer(answer: DiagramAnswer) -> Self {
        answer
            .into_info()
            .map_or(Resolution::Declined, Resolution::Resolved)
    }
}

/// Query the primary capability.
pub fn resolve_primary(
    capability: Option<&dyn SupportsDiagramInfo>,
    request: &DiagramRequest,
) -> Resolution {
    let Some(capability) = capability else {
        return Resolution::Absent;
    };
    let resolution = Resolution::from_answer(capability.diagram_info(request));
    trace!(
        resolved = matches!(resolution, Resolution::Resolved(_)),
        "primary diagram info queried"
    );
    resolution
}

/// Query the legacy capability.
pub fn resolve_legacy(
    capability: Option<&dyn LegacyDiagramInfo>,
    request: &DiagramRequest,
) -> Resolution {
    let Some(capability) = capability else {
        return Resolution::Absent;
    };
    let resolution = Resolution::from_answer(capability.text_diagram_info(request));
    trace!(
        resolved = matches!(resolution, Resolution::Resolved(_)),
        "legacy diagram info queried"
    );
    resolution
}

/// Try the primary capability, then the legacy one.
pub fn resolve(
    primary: Option<&dyn SupportsDiagramInfo>,
    legacy: Option<&dyn LegacyDiagramInfo>,
    request: &DiagramRequest,
) -> Resolution {
    let first = match resolve_primary(primary, request) {
        Resolution::Resolved(info) => return Resolution::Resolved(info),
        failed => failed,
    };
    match (first, resolve_legacy(legacy, request)) {
        (_, Resolution::Resolved(info)) => Resolution::Resolved(info),
        (Resolution::Absent, Resolution::Absent) => Resolution::Absent,
        _ => Resolution::Declined,
    }
}

/// Request diagram info for `value`.
///
/// `request` defaults to [`DiagramRequest::uninformed_default`]. When no
/// capability answers, `default` is returned if given; otherwise the error
/// tells whether the value has no capability or its capabilities declined.
pub fn circuit_diagram_info<T: Diagrammable + ?Sized>(
    value: &T,
    request: Option<&DiagramRequest>,
    default: Option<DiagramInfo>,
) -> DiagramResult<DiagramInfo> {
    let request = request.unwrap_or(DiagramRequest::uninformed_default());
    let resolution = resolve(
        value.as_diagram_info(),
        value.as_legacy_diagram_info(),
        request,
    );

    match (resolution.into_result(value.type_name()), default) {
        (Ok(info), _) => Ok(info),
        (Err(error), Some(info)) => {
            debug!(type_name = value.type_name(), %error, "using default diagram info");
            Ok(info)
        }
        (Err(error), None) => Err(error),
    }
}

/// Request diagram info for `value`, failing if none is available.
pub fn diagram_info<T: Diagrammable + ?Sized>(
    value: &T,
    request: Option<&DiagramRequest>,
) -> DiagramResult<DiagramInfo> {
    circuit_diagram_info(value, request, None)
}

/// Request diagram info for `value`, returning `default` if none is available.
pub fn diagram_info_or<T: Diagrammable + ?Sized>(
    value: &T,
    request: Option<&DiagramRequest>,
    default: DiagramInfo,
) -> DiagramInfo {
    let request = request.unwrap_or(DiagramRequest::uninformed_default());
    resolve(
        value.as_diagram_info(),
        value.as_legacy_diagram_info(),
        request,
    )
    .into_info()
    .unwrap_or_else(|| {
        debug!(type_name = value.type_name(), "using default diagram info");
        default
    })
}
