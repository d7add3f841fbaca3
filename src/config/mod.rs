pub mod cli;
pub mod options;

pub use cli::{Cli, Command, ConvertArgs, ExtractArgs, LocalStorage};
pub use options::ParserOptions;
