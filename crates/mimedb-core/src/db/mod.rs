pub mod loader;

pub use loader::{load, Database, EMBEDDED_DB};
