//! Qubit naming and the circuit diagram info protocol
//!
//! This crate provides the pieces a circuit diagram renderer needs before it
//! lays anything out: identifiers that sort the way people expect, and a
//! protocol for asking an arbitrary operation how it should be drawn.
//!
//! # Core Components
//!
//! - **Natural ordering**: [`natural_order_key`] turns a name into a key whose
//!   plain comparison puts `q2` before `q10`
//! - **Qubits**: [`NamedQubit`] ordered by natural order, [`LineQubit`] ordered
//!   by index, and [`Qubit`] for an identifier of either kind
//! - **Diagram info**: [`DiagramInfo`] holding the wire symbols, [`Exponent`]
//!   annotation and connectivity of one operation
//! - **Requests**: [`DiagramRequest`] describing the rendering context
//! - **Protocol**: [`Diagrammable`], [`SupportsDiagramInfo`] and
//!   [`LegacyDiagramInfo`] capabilities resolved by [`circuit_diagram_info`]
//!
//! # Example: Sorting Qubits
//!
//! ```rust
//! use qdiag::NamedQubit;
//!
//! let mut qubits: Vec<_> = ["q10", "q2", "anc", "q1"]
//!     .into_iter()
//!     .map(NamedQubit::new)
//!     .collect();
//! qubits.sort();
//!
//! let names: Vec<_> = qubits.iter().map(NamedQubit::name).collect();
//! assert_eq!(names, ["anc", "q1", "q2", "q10"]);
//! ```
//!
//! # Example: Querying Diagram Info
//!
//! ```rust
//! use qdiag::{
//!     DiagramAnswer, DiagramError, DiagramInfo, DiagramRequest, Diagrammable,
//!     SupportsDiagramInfo, circuit_diagram_info,
//! };
//!
//! struct ControlledX;
//!
//! impl SupportsDiagramInfo for ControlledX {
//!     fn diagram_info(&self, request: &DiagramRequest) -> DiagramAnswer {
//!         if request.use_unicode_characters() {
//!             ["@", "X"].into()
//!         } else {
//!             ["*", "X"].into()
//!         }
//!     }
//! }
//!
//! impl Diagrammable for ControlledX {
//!     fn as_diagram_info(&self) -> Option<&dyn SupportsDiagramInfo> {
//!         Some(self)
//!     }
//! }
//!
//! struct Opaque;
//!
//! impl Diagrammable for Opaque {}
//!
//! let info = circuit_diagram_info(&ControlledX, None, None).unwrap();
//! assert_eq!(info, DiagramInfo::new(["@", "X"]));
//!
//! let err = circuit_diagram_info(&Opaque, None, None).unwrap_err();
//! assert!(matches!(err, DiagramError::CapabilityAbsent { .. }));
//!
//! let fallback = circuit_diagram_info(&Opaque, None, Some(DiagramInfo::single("?"))).unwrap();
//! assert_eq!(fallback.wire_symbols(), ["?"]);
//! ```

pub mod diagram_info;
pub mod error;
pub mod exponent;
pub mod natural;
pub mod protocol;
pub mod qubit;
pub mod request;

pub use diagram_info::{DiagramInfo, WireSymbols};
pub use error::{DiagramError, DiagramResult};
pub use exponent::Exponent;
pub use natural::{natural_cmp, natural_order_key};
pub use protocol::{
    DiagramAnswer, Diagrammable, LegacyDiagramInfo, Resolution, SupportsDiagramInfo,
    circuit_diagram_info, diagram_info, diagram_info_or, resolve, resolve_legacy, resolve_primary,
};
pub use qubit::{LineQubit, NamedQubit, Qubit, QubitKind};
pub use request::DiagramRequest;
