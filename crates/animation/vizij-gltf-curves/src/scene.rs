//! Morph-target counts of animated nodes.
//!
//! Weights channels take their curve count from the target node's mesh, not
//! from the output accessor. Importers implement [`MorphTargetSource`] over
//! whatever scene representation they already have.

use hashbrown::HashMap;
use log::warn;

use crate::ids::NodeIndex;

/// Resolves how many morph targets a node's mesh exposes.
pub trait MorphTargetSource {
    /// Morph target count of the first mesh primitive of `node`, or `None`
    /// when the node has no mesh.
    fn morph_target_count(&self, node: NodeIndex) -> Option<usize>;
}

impl MorphTargetSource for HashMap<NodeIndex, usize> {
    fn morph_target_count(&self, node: NodeIndex) -> Option<usize> {
        self.get(&node).copied()
    }
}

impl<T: MorphTargetSource + ?Sized> MorphTargetSource for &T {
    fn morph_target_count(&self, node: NodeIndex) -> Option<usize> {
        (**self).morph_target_count(node)
    }
}

/// Per-node list of per-primitive morph target counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshMorphTargets {
    nodes: HashMap<NodeIndex, Vec<usize>>,
}

impl MeshMorphTargets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the morph target count of every primitive of `node`'s mesh.
    /// Only the first primitive is consulted for the stride; disagreeing
    /// primitives are logged and otherwise ignored.
    pub fn insert_node(&mut self, node: NodeIndex, primitive_targets: Vec<usize>) {
        if let Some(first) = primitive_targets.first() {
            if primitive_targets.iter().any(|c| c != first) {
                warn!(
                    "{node}: mesh primitives disagree on morph target count {primitive_targets:?}; using {first}"
                );
            }
        }
        self.nodes.insert(node, primitive_targets);
    }

    pub fn primitives(&self, node: NodeIndex) -> Option<&[usize]> {
        self.nodes.get(&node).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl MorphTargetSource for MeshMorphTargets {
    fn morph_target_count(&self, node: NodeIndex) -> Option<usize> {
        self.nodes.get(&node).and_then(|p| p.first().copied())
    }
}
