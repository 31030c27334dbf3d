mod draft;
mod row;

pub use draft::{EditorFocus, FormDraft, RowColumn};
pub use row::FieldRow;
