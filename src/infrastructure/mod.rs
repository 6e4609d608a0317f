// Infrastructure implementations for tsguard.

pub mod extract;
pub mod sink;

pub use extract::{parse_program, InterfaceExtractor, KeywordResolver};
pub use sink::FsGuardSink;
