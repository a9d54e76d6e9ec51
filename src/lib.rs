pub mod adapter;
pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod optimize;
pub mod plugins;
pub mod record;
pub mod utils;

pub use adapter::{Minifier, Options};
pub use batch::{collect_files, run_batch};
pub use error::{MinifyError, Result};
pub use optimize::optimize_bytes;
pub use plugins::{default_set, gif, jpeg, png, svg, CompressorPlugin};
pub use record::{Contents, FileRecord};
pub use utils::{format_file_size, format_percent, plural, saved_message};
