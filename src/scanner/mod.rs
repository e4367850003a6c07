mod filter;
mod walk;

pub use filter::FileFilter;
pub use walk::{discover_files, max_path_width};
