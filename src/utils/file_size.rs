pub struct FileSizeUtils;

impl FileSizeUtils {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    /// Absent, zero or NaN sizes render as "N/A".
    pub fn format_size(size: Option<f64>) -> String {
        let size = match size {
            Some(size) if size != 0.0 && !size.is_nan() => size,
            _ => return "N/A".to_string(),
        };

        if size < Self::KB {
            format!("{} B", size)
        } else if size < Self::MB {
            format!("{:.1} KB", size / Self::KB)
        } else {
            format!("{:.1} MB", size / Self::MB)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileSizeUtils;

    #[test]
    fn formats_each_unit() {
        assert_eq!(FileSizeUtils::format_size(Some(0.0)), "N/A");
        assert_eq!(FileSizeUtils::format_size(None), "N/A");
        assert_eq!(FileSizeUtils::format_size(Some(500.0)), "500 B");
        assert_eq!(FileSizeUtils::format_size(Some(2048.0)), "2.0 KB");
        assert_eq!(FileSizeUtils::format_size(Some(5_242_880.0)), "5.0 MB");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(FileSizeUtils::format_size(Some(1023.0)), "1023 B");
        assert_eq!(FileSizeUtils::format_size(Some(1024.0)), "1.0 KB");
        assert_eq!(FileSizeUtils::format_size(Some(1_048_576.0)), "1.0 MB");
        assert_eq!(FileSizeUtils::format_size(Some(1536.0)), "1.5 KB");
    }
}
