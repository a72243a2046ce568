use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "file-upload-monitor")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the file processing API
    #[arg(long, env = "FILE_API_BASE_URL", default_value = "http://127.0.0.1:8000")]
    pub base_url: String,

    /// Path of the listing endpoint
    #[arg(long, env = "FILE_API_FILES_PATH", default_value = "/files")]
    pub files_path: String,

    /// Path of the upload endpoint (must match the server's routing, trailing slash included)
    #[arg(long, env = "FILE_API_UPLOAD_PATH", default_value = "/upload/")]
    pub upload_path: String,

    /// Seconds between automatic list refreshes
    #[arg(long, env = "FILE_API_POLL_INTERVAL_SECS", default_value = "5",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval_secs: u64,

    /// Client-side upload timeout in seconds, 0 disables it
    #[arg(long, env = "FILE_API_UPLOAD_TIMEOUT_SECS", default_value = "30")]
    pub upload_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub files_path: String,
    pub upload_path: String,
    pub poll_interval: Duration,
    pub upload_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            files_path: "/files".to_string(),
            upload_path: "/upload/".to_string(),
            poll_interval: Duration::from_secs(5),
            upload_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl From<Args> for ApiConfig {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            files_path: args.files_path,
            upload_path: args.upload_path,
            poll_interval: Duration::from_secs(args.poll_interval_secs),
            upload_timeout: match args.upload_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}

impl ApiConfig {
    pub fn files_url(&self) -> String {
        self.endpoint(&self.files_path)
    }

    pub fn upload_url(&self) -> String {
        self.endpoint(&self.upload_path)
    }

    // Paths are appended verbatim; only the join point is normalised.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
