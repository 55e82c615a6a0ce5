use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use skuscout_cloud::SurveyEvent;

use crate::report;

/// Spinner shown while a survey walks the region list
pub struct SurveyProgress {
    bar: ProgressBar,
}

impl SurveyProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );

        Self { bar: pb }
    }

    pub fn handle(&self, event: &SurveyEvent<'_>) {
        match event {
            SurveyEvent::Checking {
                index,
                total,
                region,
            } => {
                self.bar
                    .set_message(format!("[{index}/{total}] Checking {region}..."));
            }
            SurveyEvent::Found { result, .. } => {
                self.bar.println(format!(
                    "✅ {}: {}",
                    result.region.green(),
                    report::preview(&result.available, 5)
                ));
            }
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
