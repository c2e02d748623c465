pub mod cli;
pub mod patch;
pub mod report;
pub mod schema;
pub mod seed;
pub mod store;

pub use cli::Cli;
pub use store::Store;
