use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// A file picked by the user but not yet submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid filename"))?;
        let bytes = fs::read(path)?;
        Ok(Self { file_name, bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Server-side metadata for one uploaded file. Every field is optional so a
/// sparse record does not reject the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "RowKey")]
    pub row_key: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub upload_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub file_size: Option<f64>,
}

impl FileRecord {
    pub fn identifier(&self) -> Option<&str> {
        self.row_key.as_deref().or(self.id.as_deref())
    }
}

/// What the upload endpoint says about a stored file. Any 2xx is a
/// success, so a missing or oddly typed ID only degrades to "unknown".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadReceipt {
    file_id: Option<String>,
}

impl UploadReceipt {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            file_id: Some(id.into()),
        }
    }

    /// Reads `id` (or `RowKey`) as a string or number. Fails only when the
    /// body is not JSON at all.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let file_id = ["id", "RowKey"].iter().find_map(|key| match value.get(key)? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        Ok(Self { file_id })
    }

    pub fn file_id(&self) -> &str {
        self.file_id.as_deref().unwrap_or("unknown")
    }
}

/// Body of an error response. `detail` is usually a string but some
/// frameworks send a list of validation errors.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub(crate) fn detail_from_bytes(body: &[u8]) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
        match parsed.detail? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_key_takes_precedence() {
        let record: FileRecord = serde_json::from_str(
            r#"{"id":"a1","RowKey":"rk-9","filename":"report.csv","status":"Completed","file_size":2048}"#,
        )
        .unwrap();
        assert_eq!(record.identifier(), Some("rk-9"));
        assert_eq!(record.file_size, Some(2048.0));
    }

    #[test]
    fn sparse_records_still_parse() {
        let records: Vec<FileRecord> =
            serde_json::from_str(r#"[{"id":"x"},{"filename":"a.txt","extra":true}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier(), Some("x"));
        assert_eq!(records[1].identifier(), None);
        assert_eq!(records[1].status, None);
    }

    #[test]
    fn receipt_reads_either_id_field() {
        let receipt = UploadReceipt::from_body(br#"{"id":"abc","filename":"a.txt"}"#).unwrap();
        assert_eq!(receipt.file_id(), "abc");

        let receipt = UploadReceipt::from_body(br#"{"RowKey":"rk"}"#).unwrap();
        assert_eq!(receipt.file_id(), "rk");
    }

    #[test]
    fn receipt_accepts_numeric_and_missing_ids() {
        let receipt = UploadReceipt::from_body(br#"{"id":42}"#).unwrap();
        assert_eq!(receipt.file_id(), "42");

        let receipt = UploadReceipt::from_body(br#"{"id":null,"RowKey":7}"#).unwrap();
        assert_eq!(receipt.file_id(), "7");

        let receipt = UploadReceipt::from_body(br#"{"status":"ok"}"#).unwrap();
        assert_eq!(receipt.file_id(), "unknown");

        let receipt = UploadReceipt::from_body(br#"["a","b"]"#).unwrap();
        assert_eq!(receipt.file_id(), "unknown");
    }

    #[test]
    fn receipt_rejects_non_json() {
        assert!(UploadReceipt::from_body(b"OK").is_err());
        assert!(UploadReceipt::from_body(b"").is_err());
        assert_eq!(UploadReceipt::default().file_id(), "unknown");
    }

    #[test]
    fn error_detail_variants() {
        assert_eq!(
            ErrorBody::detail_from_bytes(br#"{"detail":"Too large"}"#),
            Some("Too large".to_string())
        );
        assert_eq!(
            ErrorBody::detail_from_bytes(br#"{"detail":[{"msg":"field required"}]}"#),
            Some(r#"[{"msg":"field required"}]"#.to_string())
        );
        assert_eq!(ErrorBody::detail_from_bytes(br#"{"message":"x"}"#), None);
        assert_eq!(ErrorBody::detail_from_bytes(b"<html>oops</html>"), None);
    }

    #[test]
    fn candidate_from_path_reads_bytes() {
        let dir = std::env::temp_dir().join("file_upload_monitor_candidate_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sample.txt");
        fs::write(&path, b"hello").unwrap();

        let candidate = UploadCandidate::from_path(&path).unwrap();
        assert_eq!(candidate.file_name, "sample.txt");
        assert_eq!(candidate.len(), 5);
        assert!(!candidate.is_empty());

        fs::remove_file(&path).unwrap();
    }
}
