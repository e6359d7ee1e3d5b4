/// Human-readable size with two decimals, e.g. `"1.50 MB"`.
pub fn format_bytes(size: u64) -> String {
    let mut value = size as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} TB", value)
}

/// File name offered for a lecture's PDF export.
pub fn export_file_name(id: &str, title: &str) -> String {
    format!("{}_{}.pdf", id, title.replace(' ', "_"))
}
