mod error;
mod field;
mod state;

pub use error::FieldParseError;
pub use field::{FieldInput, InputValue};
pub use state::{FillState, SubmitOutcome};
