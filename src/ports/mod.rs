mod provider;

pub use provider::{FixedTextProvider, ReadingsProvider};
