use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str = "{spinner} [{pos}/{len}] {wide_bar} {percent}% ({eta})";

/// Progress bar sized to the number of images to download.
///
/// Drawn on stderr; indicatif keeps it invisible when stderr is not a terminal.
pub fn download_progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

    let bar = ProgressBar::new(len);
    bar.set_style(style);
    bar
}
