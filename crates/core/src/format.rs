//! Formatting helpers for session displays

/// Render whole seconds as `"{m}m {s}s"`, or `"{s}s"` under one minute
pub fn format_elapsed(total_seconds: u32) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;

    if mins < 1 {
        format!("{}s", secs)
    } else {
        format!("{}m {}s", mins, secs)
    }
}
