//! Exponent annotations for diagram symbols.
//!
//! A gate raised to a power is drawn as its symbol followed by `^` and the
//! exponent, e.g. `X^0.5`. The exponent may be numeric or symbolic.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A numeric or symbolic exponent expression.
///
/// Equality and hashing are total: numbers compare by canonical bit pattern,
/// so `-0.0 == 0.0` and every `NaN` equals every other `NaN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Exponent {
    /// A numeric value.
    Number(f64),
    /// A free symbol.
    Symbol(String),
    /// Negation.
    Neg(Box<Exponent>),
    /// Addition.
    Add(Box<Exponent>, Box<Exponent>),
    /// Multiplication.
    Mul(Box<Exponent>, Box<Exponent>),
    /// Division.
    Div(Box<Exponent>, Box<Exponent>),
}

impl Exponent {
    /// The neutral exponent `1`.
    pub const fn one() -> Self {
        Exponent::Number(1.0)
    }

    /// Create a numeric exponent.
    pub const fn number(value: f64) -> Self {
        Exponent::Number(value)
    }

    /// Create a symbolic exponent.
    pub fn symbol(name: impl Into<String>) -> Self {
        Exponent::Symbol(name.into())
    }

    /// Check if this expression contains any symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            Exponent::Number(_) => false,
            Exponent::Symbol(_) => true,
            Exponent::Neg(e) => e.is_symbolic(),
            Exponent::Add(a, b) | Exponent::Mul(a, b) | Exponent::Div(a, b) => {
                a.is_symbolic() || b.is_symbolic()
            }
        }
    }

    /// Whether the exponent evaluates to exactly one and needs no annotation.
    pub fn is_one(&self) -> bool {
        self.as_f64() == Some(1.0)
    }

    /// Try to evaluate as a concrete f64 value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Exponent::Number(v) => Some(*v),
            Exponent::Symbol(_) => None,
            Exponent::Neg(e) => e.as_f64().map(|v| -v),
            Exponent::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            Exponent::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
            Exponent::Div(a, b) => {
                let divisor = b.as_f64()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.as_f64()? / divisor)
            }
        }
    }

    /// Get all symbol names in this expression.
    pub fn symbols(&self) -> HashSet<String> {
        let mut set = HashSet::new();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols(&self, set: &mut HashSet<String>) {
        match self {
            Exponent::Number(_) => {}
            Exponent::Symbol(name) => {
                set.insert(name.clone());
            }
            Exponent::Neg(e) => e.collect_symbols(set),
            Exponent::Add(a, b) | Exponent::Mul(a, b) | Exponent::Div(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Bind a symbol to a value, returning a new expression.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        match self {
            Exponent::Symbol(n) if n == name => Exponent::Number(value),
            Exponent::Number(_) | Exponent::Symbol(_) => self.clone(),
            Exponent::Neg(e) => Exponent::Neg(Box::new(e.bind(name, value))),
            Exponent::Add(a, b) => {
                Exponent::Add(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
            Exponent::Mul(a, b) => {
                Exponent::Mul(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
            Exponent::Div(a, b) => {
                Exponent::Div(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
        }
    }

    /// Format the exponent for a diagram.
    ///
    /// Concrete values are rounded to `precision` digits after the decimal
    /// point with trailing zeros removed; `None` keeps full precision.
    /// Symbolic expressions are printed as-is.
    ///
    /// ```
    /// use qdiag::Exponent;
    ///
    /// assert_eq!(Exponent::number(0.123456).format(Some(3)), "0.123");
    /// assert_eq!(Exponent::number(0.5).format(Some(3)), "0.5");
    /// assert_eq!(Exponent::symbol("t").format(Some(3)), "t");
    /// ```
    pub fn format(&self, precision: Option<usize>) -> String {
        match (self.as_f64(), precision) {
            (Some(v), Some(digits)) => format_rounded(v, digits),
            (Some(v), None) => format!("{v}"),
            (None, _) => self.to_string(),
        }
    }

    fn canonical_bits(value: f64) -> u64 {
        if value == 0.0 {
            0.0f64.to_bits()
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        }
    }
}

fn format_rounded(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$}");
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Exponent::one()
    }
}

impl PartialEq for Exponent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Exponent::Number(a), Exponent::Number(b)) => {
                Exponent::canonical_bits(*a) == Exponent::canonical_bits(*b)
            }
            (Exponent::Symbol(a), Exponent::Symbol(b)) => a == b,
            (Exponent::Neg(a), Exponent::Neg(b)) => a == b,
            (Exponent::Add(a1, b1), Exponent::Add(a2, b2))
            | (Exponent::Mul(a1, b1), Exponent::Mul(a2, b2))
            | (Exponent::Div(a1, b1), Exponent::Div(a2, b2)) => a1 == a2 && b1 == b2,
            _ => false,
        }
    }
}

impl Eq for Exponent {}

impl Hash for Exponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Exponent::Number(v) => Exponent::canonical_bits(*v).hash(state),
            Exponent::Symbol(name) => name.hash(state),
            Exponent::Neg(e) => e.hash(state),
            Exponent::Add(a, b) | Exponent::Mul(a, b) | Exponent::Div(a, b) => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Number(v) => write!(f, "{v}"),
            Exponent::Symbol(name) => write!(f, "{name}"),
            Exponent::Neg(e) => write!(f, "-({e})"),
            Exponent::Add(a, b) => write!(f, "({a} + {b})"),
            Exponent::Mul(a, b) => write!(f, "({a} * {b})"),
            Exponent::Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

impl From<f64> for Exponent {
    fn from(value: f64) -> Self {
        Exponent::Number(value)
    }
}

impl From<i32> for Exponent {
    fn from(value: i32) -> Self {
        Exponent::Number(f64::from(value))
    }
}

impl std::ops::Add for Exponent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Exponent::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for Exponent {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Exponent::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for Exponent {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Exponent::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for Exponent {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Exponent::Neg(Box::new(self))
    }
}
