pub mod state;

pub use state::{SessionState, EXAMPLE_TEXT};
