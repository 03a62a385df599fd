// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over components in a `ComponentHierarchy`.

use super::HierarchyNode;

/// A depth-first, pre-order iterator over a sequence of nodes and all their
/// descendants.
pub struct Components<'a> {
    stack: Vec<std::slice::Iter<'a, HierarchyNode>>,
}

impl<'a> Components<'a> {
    pub(crate) fn new(nodes: &'a [HierarchyNode]) -> Self {
        Components {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a HierarchyNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(node) => {
                    self.stack.push(node.children.iter());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::test_utils::hierarchy_cp;

    #[test]
    fn test_pre_order() {
        let hierarchy = hierarchy_cp();
        let ids: Vec<u64> = Components::new(hierarchy.roots()).map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 7, 2, 3, 4, 5, 6]);

        assert_eq!(Components::new(&[]).next(), None);
    }
}
