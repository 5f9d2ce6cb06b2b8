use crate::domain::ports::DownloadProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar for picture downloads. The bar disappears once the
/// download is done.
pub struct BarProgress {
    message: String,
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            bar: None,
        }
    }
}

impl DownloadProgress for BarProgress {
    fn start(&mut self, total: Option<u64>) {
        let bar = match total {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("{msg} [{bar:40}] {bytes}/{total_bytes}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            }
            None => ProgressBar::new_spinner(),
        };
        bar.set_message(self.message.clone());
        self.bar = Some(bar);
    }

    fn advance(&mut self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
