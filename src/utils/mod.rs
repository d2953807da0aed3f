pub mod file_size;
pub mod url_path;

pub use file_size::FileSizeUtils;
