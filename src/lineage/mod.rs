pub mod family_tree;

pub use family_tree::{family_tree, render_family_tree, unique_ancestors, FamilyTree};
