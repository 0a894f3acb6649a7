pub mod copy;
pub mod errors;
pub mod ignore;
pub mod logger;
pub mod patterns;
pub mod reporting;
pub mod trie;
pub mod utils;
pub mod walker;

pub use copy::{copy_matching_files, CopyConfig, Delivery};
pub use errors::GlobCopyError;
pub use ignore::ExcludedDirs;
pub use patterns::PatternSet;
