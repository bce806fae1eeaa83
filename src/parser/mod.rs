pub mod frontmatter;

pub use frontmatter::{has_frontmatter, parse_document, serialize_document, split_frontmatter};
