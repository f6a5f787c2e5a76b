pub mod errors;

pub use errors::{QuoteError, QuoteResult, ValidationError};
