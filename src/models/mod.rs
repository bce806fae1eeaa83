pub mod frontmatter;
pub mod phase;
pub mod status;
pub mod value;

pub use frontmatter::{Frontmatter, StateDocument};
pub use phase::SessionPhase;
pub use status::StatusRecord;
pub use value::{split_assignment, FieldValue};
