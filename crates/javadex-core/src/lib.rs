//! javadex core library: a symbol indexer for Java source files.
//!
//! A file is parsed with tree-sitter, walked into an owned tree of classes
//! and members with stable symbol identifiers, and cached on disk keyed by
//! content hash and extraction options. The query layer adds cross-file
//! search, bounded range and documentation readers, and reduced output
//! projections for token-constrained consumers.

pub mod config;
pub mod errors;
pub mod indexer;
pub mod models;
pub mod query;
pub mod store;

pub use config::CacheConfig;
pub use errors::{JavadexError, JavadexResult};
pub use indexer::pipeline::Indexer;
pub use models::{
    DocOptions, FindOptions, FormatOptions, IndexOptions, IndexResult, RangeOptions,
};
pub use query::formatters::{project, Projection};
pub use query::readers::{read_doc, read_range};
pub use query::search::find_symbol;
pub use store::cache::CacheStore;
