pub mod cli;
pub mod color;
pub mod error;
pub mod output;
pub mod scan;
pub mod tool;
pub mod walker;

pub use cli::{Cli, OutputMode};
pub use error::{Error, ExitCode, Result};
pub use scan::{AllowList, Finding, ScanState, SegmentedLine, SyntaxMode, scan_file, scan_line};
pub use tool::{ToolId, ToolSet};
pub use walker::FileWalker;
