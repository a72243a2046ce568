mod client;
mod types;

pub use client::{FilesApi, HttpFilesApi};
pub use types::{FileRecord, UploadCandidate, UploadReceipt};
