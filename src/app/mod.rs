mod poll;
mod state;
mod ui;

use crate::api::{FileRecord, FilesApi, UploadCandidate, UploadReceipt};
use crate::config::ApiConfig;
use crate::error::{ListError, UploadError};
use eframe::{egui, App};
pub use poll::PollSchedule;
pub use state::{DashboardState, UploadProgress};
use std::sync::mpsc::{self as std_mpsc, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

/// Results coming back from background requests.
#[derive(Debug)]
pub enum DashboardEvent {
    FilesLoaded(Result<Vec<FileRecord>, ListError>),
    UploadFinished(Result<UploadReceipt, UploadError>),
}

pub struct UploadDashboard {
    config: ApiConfig,
    api: Arc<dyn FilesApi>,
    runtime: Handle,
    state: DashboardState,
    schedule: PollSchedule,
    event_sender: Sender<DashboardEvent>,
    repaint: Option<egui::Context>,
}

impl UploadDashboard {
    pub fn new(config: ApiConfig, api: Arc<dyn FilesApi>, runtime: Handle) -> Self {
        info!(
            "Initializing dashboard for {} (refresh every {:?})",
            config.base_url, config.poll_interval
        );
        let (event_sender, event_receiver) = std_mpsc::channel();
        let schedule = PollSchedule::new(config.poll_interval);
        Self {
            config,
            api,
            runtime,
            state: DashboardState {
                event_receiver: Some(event_receiver),
                ..DashboardState::default()
            },
            schedule,
            event_sender,
            repaint: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn select_file(&mut self, candidate: UploadCandidate) {
        debug!("Selected '{}' for upload", candidate.file_name);
        self.state.candidate = Some(candidate);
        self.state.progress = UploadProgress::Idle;
    }

    /// The picked file could not be read. Reported in the status line and
    /// any earlier selection is dropped.
    pub fn reject_selection(&mut self, reason: String) {
        warn!("Could not read selected file: {}", reason);
        self.state.candidate = None;
        self.state.progress = UploadProgress::Unreadable { reason };
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
    }

    pub fn submit(&mut self) {
        if self.state.is_uploading() {
            return;
        }

        let Some(candidate) = self.state.candidate.take() else {
            self.state.alert = Some("Please select a file first!".to_string());
            return;
        };

        info!("Starting upload of '{}'", candidate.file_name);
        self.state.progress = UploadProgress::Uploading {
            file_name: candidate.file_name.clone(),
        };

        let api = Arc::clone(&self.api);
        let sender = self.event_sender.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let result = api.upload(candidate).await;
            sender
                .send(DashboardEvent::UploadFinished(result))
                .unwrap_or_default();
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Refresh on demand. Queued behind an outstanding request rather than
    /// dropped.
    pub fn refresh_now(&mut self) {
        if self.state.refresh_in_flight {
            debug!("List refresh already in flight, queueing another");
            self.state.refresh_queued = true;
        } else {
            self.spawn_refresh();
        }
    }

    /// Timer tick. Skipped while a refresh is outstanding.
    pub fn poll(&mut self, now: Instant) {
        if !self.schedule.due(now) {
            return;
        }
        if self.state.refresh_in_flight {
            debug!("Skipping scheduled refresh, previous one still running");
            return;
        }
        self.spawn_refresh();
    }

    fn spawn_refresh(&mut self) {
        self.state.refresh_in_flight = true;

        let api = Arc::clone(&self.api);
        let sender = self.event_sender.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let result = api.list_files().await;
            sender
                .send(DashboardEvent::FilesLoaded(result))
                .unwrap_or_default();
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Applies every pending background result. Returns how many were handled.
    pub fn drain_events(&mut self) -> usize {
        let events: Vec<DashboardEvent> = match &self.state.event_receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => return 0,
        };

        let count = events.len();
        for event in events {
            self.handle_event(event);
        }
        count
    }

    fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::FilesLoaded(result) => {
                self.state.refresh_in_flight = false;
                match result {
                    Ok(files) => {
                        debug!("Loaded {} file records", files.len());
                        self.state.files = files;
                    }
                    Err(e) => warn!("Error fetching files: {}", e),
                }

                if self.state.refresh_queued {
                    self.state.refresh_queued = false;
                    self.spawn_refresh();
                }
            }
            DashboardEvent::UploadFinished(Ok(receipt)) => {
                let file_id = receipt.file_id().to_string();
                info!("Upload succeeded with file ID {}", file_id);
                self.state.progress = UploadProgress::Succeeded { file_id };
                self.refresh_now();
            }
            DashboardEvent::UploadFinished(Err(e)) => {
                error!("Upload failed: {}", e);
                self.state.progress = UploadProgress::Failed {
                    reason: e.to_string(),
                };
            }
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.repaint.is_none() {
            self.repaint = Some(ctx.clone());
        }

        let now = Instant::now();
        self.poll(now);
        if self.drain_events() > 0 {
            ctx.request_repaint();
        }

        ctx.request_repaint_after(
            self.schedule
                .time_until_due(now)
                .max(Duration::from_millis(100)),
        );
    }
}

impl App for UploadDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
