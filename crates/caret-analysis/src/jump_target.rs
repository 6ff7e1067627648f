//! Targets of `break` and `continue` statements.

use crate::error::AnalysisError;
use caret_syntax::{NodeData, NodeIndex, NodeKind, TreePath};
use tracing::debug;

/// The statement a `break` or `continue` transfers control out of.
///
/// Targets are recorded on the jump by the front end. A labeled `continue`
/// resolves to the labeled statement wrapping its loop rather than to the
/// bare loop. Returns `Ok(None)` when the front end recorded no target.
pub fn jump_target(path: &TreePath<'_>) -> Result<Option<NodeIndex>, AnalysisError> {
    let node = path
        .node()
        .ok_or(AnalysisError::InvalidNode(path.leaf()))?;

    let target = match &node.data {
        NodeData::Break { target, .. } => *target,
        NodeData::Continue { target, label } => {
            if label.is_none() || target.is_none() {
                *target
            } else {
                enclosing_label(path, *target)
            }
        }
        _ => {
            return Err(AnalysisError::UnsupportedKind { kind: node.kind() });
        }
    };

    debug!(jump = %path.leaf(), target = %target, "jump target resolved");
    Ok(target.is_some().then_some(target))
}

/// The labeled statement wrapping `target`, or `target` itself.
fn enclosing_label(path: &TreePath<'_>, target: NodeIndex) -> NodeIndex {
    let Some(target_path) = path.ancestors().find(|p| p.leaf() == target) else {
        return target;
    };
    match target_path.parent_path() {
        Some(parent) if parent.kind() == Some(NodeKind::LabeledStatement) => parent.leaf(),
        _ => target,
    }
}
