//! Family tree traversal
//!
//! Walks the parent graph depth-first in pre-order. Shared ancestors are
//! reached once per path, so a creature bred from two siblings lists the
//! grandparents twice. The walk always terminates: each offspring's
//! generation is strictly greater than both parents', so there are no cycles.

use std::collections::HashSet;

use crate::core::types::CreatureId;
use crate::entity::Creature;

/// Lazy pre-order iterator over `(creature, depth)` pairs
pub struct FamilyTree<'a> {
    stack: Vec<(&'a Creature, usize)>,
}

impl<'a> Iterator for FamilyTree<'a> {
    type Item = (&'a Creature, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (creature, depth) = self.stack.pop()?;
        if let Some((first, second)) = creature.parents() {
            // Second parent pushed first so the first parent is visited first
            self.stack.push((second.as_ref(), depth + 1));
            self.stack.push((first.as_ref(), depth + 1));
        }
        Some((creature, depth))
    }
}

/// Traverse a creature and its ancestors, starting at depth 0
pub fn family_tree(creature: &Creature) -> FamilyTree<'_> {
    FamilyTree {
        stack: vec![(creature, 0)],
    }
}

/// Render the tree as indented text, two spaces per level
pub fn render_family_tree(creature: &Creature) -> String {
    let mut out = String::new();
    for (node, depth) in family_tree(creature) {
        let prefix = "  ".repeat(depth);
        out.push_str(&format!(
            "{}{} (Gen {}, {})\n",
            prefix,
            node.name(),
            node.generation(),
            node.species()
        ));
        if !node.is_root() {
            out.push_str(&format!("{}├─ Parents:\n", prefix));
        }
    }
    out
}

/// Every distinct ancestor, excluding the creature itself, in first-seen order
pub fn unique_ancestors(creature: &Creature) -> Vec<&Creature> {
    let mut seen: HashSet<CreatureId> = HashSet::new();
    seen.insert(creature.id());

    family_tree(creature)
        .skip(1)
        .filter(|(node, _)| seen.insert(node.id()))
        .map(|(node, _)| node)
        .collect()
}
