pub mod assemble;

pub use assemble::{LiturgicalInfo, MassResponse};
