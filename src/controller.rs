use crate::analysis::{AnalysisReport, analyze_file};
use crate::audio::AudioFile;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Identifies one submitted analysis. Only the latest ticket may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending {
        name: String,
    },
    Ready(Box<AnalysisReport>),
    Failed(String),
}

/// Runs analyses off the UI thread and keeps the single displayed result.
#[derive(Clone)]
pub struct AnalysisController {
    config: Arc<Mutex<AnalyzerConfig>>,
    generation: Arc<AtomicU64>,
    state: Arc<Mutex<AnalysisState>>,
    last_file: Arc<Mutex<Option<Arc<AudioFile>>>>,
}

impl AnalysisController {
    pub fn new(config: Arc<Mutex<AnalyzerConfig>>) -> Self {
        Self {
            config,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(Mutex::new(AnalysisState::Idle)),
            last_file: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.state.lock().unwrap().clone()
    }

    /// Supersede whatever is in flight and mark `name` as pending.
    pub fn begin(&self, name: &str) -> Ticket {
        let ticket = Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        *self.state.lock().unwrap() = AnalysisState::Pending {
            name: name.to_string(),
        };
        debug!("Analysis {ticket:?} started for {name}");
        ticket
    }

    /// Publish `result` if `ticket` is still the latest. Returns whether it
    /// was applied.
    pub fn commit(
        &self,
        ticket: Ticket,
        result: Result<AnalysisReport, AnalysisError>,
    ) -> bool {
        let mut state = self.state.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != ticket.0 {
            warn!("Discarding stale analysis result {ticket:?}");
            return false;
        }

        *state = match result {
            Ok(report) => AnalysisState::Ready(Box::new(report)),
            Err(e) => {
                warn!("Analysis failed: {e}");
                AnalysisState::Failed(e.user_message().to_string())
            }
        };
        true
    }

    /// Analyze `file` on a worker thread.
    pub fn submit(&self, file: AudioFile) -> anyhow::Result<Ticket> {
        let file = Arc::new(file);
        *self.last_file.lock().unwrap() = Some(file.clone());
        self.spawn(file)
    }

    /// Re-run the last submitted file, e.g. after the config changed.
    pub fn reanalyze(&self) -> anyhow::Result<Option<Ticket>> {
        let file = self.last_file.lock().unwrap().clone();
        match file {
            Some(file) => self.spawn(file).map(Some),
            None => Ok(None),
        }
    }

    fn spawn(&self, file: Arc<AudioFile>) -> anyhow::Result<Ticket> {
        let ticket = self.begin(&file.name);
        let config = self.config.lock().unwrap().clone();
        let controller = self.clone();

        thread::Builder::new()
            .name("analysis".into())
            .spawn(move || {
                let result = analyze_file(&file, &config);
                if controller.commit(ticket, result) {
                    info!("Analysis of {} published", file.name);
                }
            })?;

        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;
    use std::time::{Duration, Instant};

    fn controller() -> AnalysisController {
        AnalysisController::new(Arc::new(Mutex::new(AnalyzerConfig::default())))
    }

    fn wait_until_settled(controller: &AnalysisController) -> AnalysisState {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let state = controller.state();
            if !matches!(state, AnalysisState::Pending { .. }) || Instant::now() > deadline {
                return state;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn stale_result_is_discarded() {
        let controller = controller();
        let first = controller.begin("first.wav");
        let second = controller.begin("second.wav");

        let applied = controller.commit(
            second,
            Err(AnalysisError::DecodeFailure("second".into())),
        );
        assert!(applied);

        let stale = controller.commit(
            first,
            Err(AnalysisError::InvalidInputKind(InvalidInput::NotAudio)),
        );
        assert!(!stale);

        match controller.state() {
            AnalysisState::Failed(msg) => assert_eq!(msg, "Failed to analyze audio file."),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn begin_clears_previous_result() {
        let controller = controller();
        let ticket = controller.begin("a.wav");
        controller.commit(ticket, Err(AnalysisError::DecodeFailure("x".into())));
        controller.begin("b.wav");
        assert!(matches!(
            controller.state(),
            AnalysisState::Pending { ref name } if name == "b.wav"
        ));
    }

    #[test]
    fn submitted_non_audio_file_fails() {
        let controller = controller();
        let file = AudioFile::from_bytes("notes.txt".into(), b"plain text".to_vec(), None);
        controller.submit(file).unwrap();

        match wait_until_settled(&controller) {
            AnalysisState::Failed(msg) => assert_eq!(msg, "Please upload a valid audio file."),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn reanalyze_without_file_is_noop() {
        assert_eq!(controller().reanalyze().unwrap(), None);
    }
}
