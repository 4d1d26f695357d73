use crate::symbolic::symbolic_engine::NodeKind;
use std::fmt;

/// Error types for pretty printing
///
/// Malformed-node variants carry the kind and the linear form of the offending node.
#[derive(Debug, Clone, PartialEq)]
pub enum PrettyError {
    EmptyMatrixRow {
        row: usize,
        node: String,
    },
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
        node: String,
    },
    MissingBounds {
        kind: NodeKind,
        node: String,
    },
    IncompleteBound {
        kind: NodeKind,
        var: String,
        node: String,
    },
    EmptyDerivative {
        node: String,
    },
    ZeroOrderDerivative {
        var: String,
        node: String,
    },
    ZeroDenominator {
        numerator: i64,
        node: String,
    },
    EmptyFunctionName {
        node: String,
    },
    InvalidSettings(String),
}

impl PrettyError {
    /// Kind of the node that could not be rendered, None for settings errors
    pub fn node_kind(&self) -> Option<NodeKind> {
        match self {
            PrettyError::EmptyMatrixRow { .. } | PrettyError::RaggedMatrix { .. } => {
                Some(NodeKind::Matrix)
            }
            PrettyError::MissingBounds { kind, .. } | PrettyError::IncompleteBound { kind, .. } => {
                Some(*kind)
            }
            PrettyError::EmptyDerivative { .. } | PrettyError::ZeroOrderDerivative { .. } => {
                Some(NodeKind::Derivative)
            }
            PrettyError::ZeroDenominator { .. } => Some(NodeKind::Atom),
            PrettyError::EmptyFunctionName { .. } => Some(NodeKind::Function),
            PrettyError::InvalidSettings(_) => None,
        }
    }
}

impl fmt::Display for PrettyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrettyError::EmptyMatrixRow { row, node } => {
                write!(f, "Matrix row {} is empty in {}", row, node)
            }
            PrettyError::RaggedMatrix {
                row,
                expected,
                found,
                node,
            } => write!(
                f,
                "Matrix row {} has {} cells, expected {} in {}",
                row, found, expected, node
            ),
            PrettyError::MissingBounds { kind, node } => {
                write!(f, "{} node without any bound: {}", kind, node)
            }
            PrettyError::IncompleteBound { kind, var, node } => write!(
                f,
                "{} bound for {} has only one limit: {}",
                kind, var, node
            ),
            PrettyError::EmptyDerivative { node } => {
                write!(f, "Derivative without variables: {}", node)
            }
            PrettyError::ZeroOrderDerivative { var, node } => {
                write!(f, "Derivative of order 0 with respect to {}: {}", var, node)
            }
            PrettyError::ZeroDenominator { numerator, node } => write!(
                f,
                "Rational {}/0 has a zero denominator: {}",
                numerator, node
            ),
            PrettyError::EmptyFunctionName { node } => {
                write!(f, "Function application without a name: {}", node)
            }
            PrettyError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for PrettyError {}
