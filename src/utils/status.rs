use eframe::egui::Color32;

/// Presentation bucket for a server-reported status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Completed,
    Processing,
    Error,
    Uploaded,
    Default,
}

impl StatusCategory {
    pub fn from_status(status: Option<&str>) -> Self {
        match status.map(str::to_lowercase).as_deref() {
            Some("completed") => Self::Completed,
            Some("processing") => Self::Processing,
            Some("error") => Self::Error,
            Some("uploaded") => Self::Uploaded,
            _ => Self::Default,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Completed => Color32::from_rgb(0x28, 0xa7, 0x45),
            Self::Processing => Color32::from_rgb(0xe0, 0xa8, 0x00),
            Self::Error => Color32::from_rgb(0xdc, 0x35, 0x45),
            Self::Uploaded => Color32::from_rgb(0x17, 0xa2, 0xb8),
            Self::Default => Color32::from_rgb(0x6c, 0x75, 0x7d),
        }
    }
}
