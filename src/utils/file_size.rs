pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Size in kibibytes with two decimals, the way the pending list shows it.
    pub fn format_kib(size: u64) -> String {
        format!("{:.2} KB", size as f64 / 1024.0)
    }
}
