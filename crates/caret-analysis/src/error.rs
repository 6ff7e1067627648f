use caret_syntax::{NodeIndex, NodeKind};

/// Caller errors reported by the tree queries.
///
/// Malformed or synthetic input never produces an error; queries degrade to
/// "not found" or an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The offset lies past the end of the compilation unit.
    OffsetOutOfRange { offset: u32, unit_end: u32 },
    /// The node is not part of the tree being queried.
    InvalidNode(NodeIndex),
    /// The query does not accept a node of this kind.
    UnsupportedKind { kind: NodeKind },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::OffsetOutOfRange { offset, unit_end } => {
                write!(
                    f,
                    "offset {offset} is outside the compilation unit (0..={unit_end})"
                )
            }
            AnalysisError::InvalidNode(idx) => write!(f, "node {idx} is not part of the tree"),
            AnalysisError::UnsupportedKind { kind } => write!(f, "unsupported kind: {kind:?}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
