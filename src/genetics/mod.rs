//! Inheritance rules and the breeding operation
//!
//! Offspring get a spliced name, a parent's color (occasionally a blend),
//! and traits averaged from both parents with a small mutation.

pub mod breeding;
pub mod inheritance;
pub mod naming;

pub use breeding::{breed, breed_with_config, Breeder};
pub use inheritance::{blend_colors, inherit_color, inherit_trait, BLEND_TABLE};
pub use naming::offspring_name;
