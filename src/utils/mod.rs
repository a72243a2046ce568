pub mod file_size;
pub mod status;
pub mod timestamp;

pub use file_size::FileSizeUtils;
pub use status::StatusCategory;
pub use timestamp::format_timestamp;
