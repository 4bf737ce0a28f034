// Bulk slide text editing: a plain-text view of the batch where every two
// non-empty lines become one slide's headline and subheadline.

pub mod text;

pub use text::{distribute_text, slides_to_text};
