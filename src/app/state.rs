use crate::api::{FileRecord, UploadCandidate};
use crate::app::DashboardEvent;
use crate::utils::StatusCategory;
use derivative::Derivative;
use std::sync::mpsc::Receiver;

#[derive(Clone, Debug, PartialEq)]
pub enum UploadProgress {
    Idle,
    Uploading { file_name: String },
    Succeeded { file_id: String },
    Failed { reason: String },
    Unreadable { reason: String },
}

impl Default for UploadProgress {
    fn default() -> Self {
        Self::Idle
    }
}

impl UploadProgress {
    pub fn status_text(&self) -> String {
        match self {
            UploadProgress::Idle => String::new(),
            UploadProgress::Uploading { .. } => "Uploading...".to_string(),
            UploadProgress::Succeeded { file_id } => {
                format!("✅ Upload Successful! File ID: {}", file_id)
            }
            UploadProgress::Failed { reason } => format!("❌ Upload Failed: {}", reason),
            UploadProgress::Unreadable { reason } => {
                format!("❌ Could not read file: {}", reason)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub total: usize,
    pub completed: usize,
    pub processing: usize,
}

impl FileStats {
    pub fn from_records(files: &[FileRecord]) -> Self {
        files.iter().fold(
            Self {
                total: files.len(),
                ..Self::default()
            },
            |mut stats, file| {
                match StatusCategory::from_status(file.status.as_deref()) {
                    StatusCategory::Completed => stats.completed += 1,
                    StatusCategory::Processing => stats.processing += 1,
                    _ => {}
                }
                stats
            },
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "Total Files: {} | Completed: {} | Processing: {}",
            self.total, self.completed, self.processing
        )
    }
}

#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct DashboardState {
    pub files: Vec<FileRecord>,
    #[derivative(Debug = "ignore")]
    pub candidate: Option<UploadCandidate>,
    pub progress: UploadProgress,
    pub alert: Option<String>,
    pub refresh_in_flight: bool,
    pub refresh_queued: bool,
    #[derivative(Debug = "ignore")]
    pub event_receiver: Option<Receiver<DashboardEvent>>,
}

impl DashboardState {
    pub fn is_uploading(&self) -> bool {
        matches!(self.progress, UploadProgress::Uploading { .. })
    }

    pub fn stats(&self) -> FileStats {
        FileStats::from_records(&self.files)
    }

    pub fn candidate_label(&self) -> Option<String> {
        self.candidate
            .as_ref()
            .map(|c| format!("{} ({} bytes)", c.file_name, c.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Option<&str>) -> FileRecord {
        FileRecord {
            status: status.map(str::to_string),
            ..FileRecord::default()
        }
    }

    #[test]
    fn stats_count_by_category() {
        let files = vec![
            record(Some("Completed")),
            record(Some("completed")),
            record(Some("Processing")),
            record(Some("Error")),
            record(None),
        ];
        let stats = FileStats::from_records(&files);
        assert_eq!(
            stats,
            FileStats {
                total: 5,
                completed: 2,
                processing: 1
            }
        );
        assert_eq!(
            stats.summary(),
            "Total Files: 5 | Completed: 2 | Processing: 1"
        );
    }

    #[test]
    fn status_text_per_stage() {
        assert_eq!(UploadProgress::Idle.status_text(), "");
        assert_eq!(
            UploadProgress::Succeeded {
                file_id: "abc".to_string()
            }
            .status_text(),
            "✅ Upload Successful! File ID: abc"
        );
        assert_eq!(
            UploadProgress::Failed {
                reason: "No response from server".to_string()
            }
            .status_text(),
            "❌ Upload Failed: No response from server"
        );
        assert_eq!(
            UploadProgress::Unreadable {
                reason: "permission denied".to_string()
            }
            .status_text(),
            "❌ Could not read file: permission denied"
        );
    }
}
