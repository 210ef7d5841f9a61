mod arg_parse;
mod config;
mod data_types;
mod dedupe;
mod diff;
mod extractor;
mod fetcher;

pub mod prelude {
    pub use super::arg_parse::*;
    pub use super::config::*;
    pub use super::data_types::*;
    pub use super::dedupe::*;
    pub use super::diff::*;
    pub use super::extractor::*;
    pub use super::fetcher::*;
}
