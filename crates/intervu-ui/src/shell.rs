use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Handle as TokioHandle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use intervu_api::{CreateSessionPayload, GENERIC_SESSION_ERROR};
use intervu_core::{
    AnswerMachine, AnswerPhase, AppView, Difficulty, InterviewConfig, NavigationController, Role,
    SessionStore, SetupSelection,
};
use intervu_export::{write_history_csv, HistoryRecord, PdfExporter, RenderedRegion};

use crate::backend::SessionBackend;
use crate::screens;
use crate::tasks::{
    run_analyzing_delay_task, run_create_session_task, AnalyzingEvent, PendingTask,
    SessionTaskEvent, TASK_EVENT_CHANNEL_CAPACITY,
};

/// Nominal raster metrics used when handing report content to the PDF
/// collaborator.
const EXPORT_REGION_WIDTH_PX: u32 = 794;
const EXPORT_LINE_HEIGHT_PX: u32 = 24;

const HISTORY_CSV_FILE: &str = "interview_history.csv";
const REPORT_PDF_FILE: &str = "final_report.pdf";
const SUMMARY_PDF_FILE: &str = "interview_summary.pdf";

/// Which input row has focus on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SetupFocus {
    #[default]
    Role,
    Difficulty,
}

/// All mutable state behind the terminal shell. Screens render from it and
/// key handling mutates it; spawned tasks only report back over channels
/// drained by the `tick_*_and_report` methods.
pub struct ShellState {
    pub(crate) nav: NavigationController,
    pub(crate) store: SessionStore,
    pub(crate) setup: SetupSelection,
    pub(crate) setup_focus: SetupFocus,
    pub(crate) answer: AnswerMachine,
    pub(crate) session_error: Option<String>,
    pub(crate) creating_session: bool,
    pub(crate) status: String,
    pub(crate) scroll: u16,
    pub(crate) last_config: Option<InterviewConfig>,
    pub(crate) finished_sessions: Vec<HistoryRecord>,
    backend: Option<Arc<dyn SessionBackend>>,
    pdf_exporter: Option<Arc<dyn PdfExporter>>,
    analyzing_delay: Duration,
    runtime: Option<TokioHandle>,
    session_task: Option<PendingTask<SessionTaskEvent>>,
    analyzing_task: Option<PendingTask<AnalyzingEvent>>,
}

impl ShellState {
    pub fn new_with_integrations(
        status: String,
        analyzing_delay: Duration,
        backend: Option<Arc<dyn SessionBackend>>,
        pdf_exporter: Option<Arc<dyn PdfExporter>>,
    ) -> Self {
        Self {
            nav: NavigationController::new(),
            store: SessionStore::default(),
            setup: SetupSelection::default(),
            setup_focus: SetupFocus::default(),
            answer: AnswerMachine::default(),
            session_error: None,
            creating_session: false,
            status,
            scroll: 0,
            last_config: None,
            finished_sessions: Vec::new(),
            backend,
            pdf_exporter,
            analyzing_delay,
            runtime: TokioHandle::try_current().ok(),
            session_task: None,
            analyzing_task: None,
        }
    }

    pub fn current_view(&self) -> AppView {
        self.nav.current_view()
    }

    /// Navigation with the scroll-to-top effect and per-view task
    /// teardown applied around the history mutation.
    pub fn navigate(&mut self, target: AppView) {
        let left = self.nav.current_view();
        self.nav.change_view(target);
        self.apply_transition(left);
    }

    pub fn go_back(&mut self) -> bool {
        let left = self.nav.current_view();
        let moved = self.nav.back();
        if moved {
            self.apply_transition(left);
        }
        moved
    }

    pub fn go_forward(&mut self) -> bool {
        let left = self.nav.current_view();
        let moved = self.nav.forward();
        if moved {
            self.apply_transition(left);
        }
        moved
    }

    /// Scoped release of anything the departed screen owned, and scoped
    /// acquisition for the entered one. Runs on every transition path:
    /// direct navigation, back, and forward.
    fn apply_transition(&mut self, left: AppView) {
        self.scroll = 0;
        let entered = self.nav.current_view();
        if left == entered {
            return;
        }

        if left == AppView::Session {
            self.session_task = None;
            self.creating_session = false;
            self.answer.advance_reset();
        }
        if left == AppView::Analyzing {
            self.analyzing_task = None;
        }

        if entered == AppView::Analyzing {
            self.start_analyzing_delay();
        }
    }

    /// The setup screen's completion path: package the config, request
    /// navigation to the active-session view, and kick off the create call.
    pub(crate) fn begin_session(&mut self) {
        let config = self.setup.complete();
        self.navigate(AppView::Session);
        self.start_session_request(config);
    }

    /// Retry from the session screen re-issues the request without pushing
    /// another history entry.
    pub(crate) fn retry_session_request(&mut self) {
        let config = self
            .last_config
            .clone()
            .unwrap_or_else(|| self.setup.complete());
        self.start_session_request(config);
    }

    fn start_session_request(&mut self, config: InterviewConfig) {
        self.session_error = None;
        let payload = CreateSessionPayload::from_config(&config);
        self.last_config = Some(config);

        let Some(backend) = self.backend.clone() else {
            self.session_error = Some(GENERIC_SESSION_ERROR.to_owned());
            tracing::warn!("no session backend configured");
            return;
        };
        let Some(runtime) = self.runtime.clone() else {
            self.session_error = Some(GENERIC_SESSION_ERROR.to_owned());
            tracing::warn!("no async runtime available for session creation");
            return;
        };

        let (sender, receiver) = mpsc::channel(TASK_EVENT_CHANNEL_CAPACITY);
        let handle = runtime.spawn(run_create_session_task(backend, payload, sender));
        self.session_task = Some(PendingTask::new(receiver, handle));
        self.creating_session = true;
    }

    fn start_analyzing_delay(&mut self) {
        let Some(runtime) = self.runtime.clone() else {
            tracing::warn!("no async runtime available for the analyzing delay");
            return;
        };
        let (sender, receiver) = mpsc::channel(TASK_EVENT_CHANNEL_CAPACITY);
        let handle = runtime.spawn(run_analyzing_delay_task(self.analyzing_delay, sender));
        self.analyzing_task = Some(PendingTask::new(receiver, handle));
    }

    /// Drains the session-creation task. On success the store is replaced;
    /// on failure the prior store state is untouched and the reduced
    /// message is shown inline, leaving the screen interactive for retry.
    pub fn tick_session_task_and_report(&mut self) -> bool {
        let Some(task) = self.session_task.as_mut() else {
            return false;
        };
        match task.receiver.try_recv() {
            Ok(SessionTaskEvent::Created(response)) => {
                self.session_task = None;
                self.creating_session = false;
                match self.store.begin(response.session_id, response.questions) {
                    Ok(()) => {
                        self.session_error = None;
                        self.answer.advance_reset();
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "rejected session response");
                        self.session_error = Some(GENERIC_SESSION_ERROR.to_owned());
                    }
                }
                true
            }
            Ok(SessionTaskEvent::Failed { message }) => {
                self.session_task = None;
                self.creating_session = false;
                self.session_error = Some(message);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.session_task = None;
                self.creating_session = false;
                self.session_error = Some(GENERIC_SESSION_ERROR.to_owned());
                true
            }
        }
    }

    /// Drains the analyzing delay; completion routes to the result view.
    pub fn tick_analyzing_and_report(&mut self) -> bool {
        let Some(task) = self.analyzing_task.as_mut() else {
            return false;
        };
        match task.receiver.try_recv() {
            Ok(AnalyzingEvent::Done) => {
                self.analyzing_task = None;
                self.navigate(AppView::Result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.analyzing_task = None;
                true
            }
        }
    }

    /// One-second cadence from the runtime; counts only while recording.
    pub fn tick_recording_second(&mut self) -> bool {
        if self.answer.is_recording() {
            self.answer.tick_second();
            true
        } else {
            false
        }
    }

    pub fn has_active_animated_indicator(&self) -> bool {
        self.creating_session || self.answer.is_recording() || self.analyzing_task.is_some()
    }

    pub(crate) fn analyzing_in_flight(&self) -> bool {
        self.analyzing_task.is_some()
    }

    fn finish_interview(&mut self) {
        let role = self
            .last_config
            .as_ref()
            .map(|config| config.role.clone())
            .unwrap_or_else(|| self.setup.role.wire_id().to_owned());
        self.finished_sessions.push(HistoryRecord {
            role,
            date: "—".to_owned(),
            status: "Completed".to_owned(),
            score: None,
        });
        self.navigate(AppView::Summary);
    }

    pub(crate) fn history_records(&self) -> Vec<HistoryRecord> {
        self.finished_sessions.clone()
    }

    pub(crate) fn export_history(&mut self) {
        let records = self.history_records();
        let result = std::fs::File::create(HISTORY_CSV_FILE)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                write_history_csv(file, &records).map_err(|err| err.to_string())
            });
        match result {
            Ok(()) => {
                self.status = format!("exported {HISTORY_CSV_FILE}");
            }
            Err(error) => {
                tracing::warn!(error = %error, "history export failed");
                self.status = format!("export failed: {error}");
            }
        }
    }

    pub(crate) fn export_pdf(&mut self, lines: Vec<String>, file_name: &str) {
        let Some(exporter) = self.pdf_exporter.clone() else {
            self.status = "PDF exporter not configured".to_owned();
            return;
        };
        let region = RenderedRegion {
            width_px: EXPORT_REGION_WIDTH_PX,
            height_px: EXPORT_LINE_HEIGHT_PX * lines.len().max(1) as u32,
            lines,
        };
        match exporter.export(&region, file_name) {
            Ok(path) => {
                self.status = format!("wrote {}", path.display());
            }
            Err(error) => {
                tracing::warn!(error = %error, "pdf export failed");
                self.status = format!("export failed: {error}");
            }
        }
    }

    fn cycle_role(&mut self, step: i32) {
        let index = Role::ALL
            .iter()
            .position(|role| *role == self.setup.role)
            .unwrap_or(0);
        let next = (index as i32 + step).rem_euclid(Role::ALL.len() as i32) as usize;
        self.setup.role = Role::ALL[next];
    }

    fn cycle_difficulty(&mut self, step: i32) {
        let index = Difficulty::ALL
            .iter()
            .position(|level| *level == self.setup.difficulty)
            .unwrap_or(0);
        let next = (index as i32 + step).rem_euclid(Difficulty::ALL.len() as i32) as usize;
        self.setup.difficulty = Difficulty::ALL[next];
    }
}

/// Central key dispatch: chrome-level keys first, then the focused
/// screen's. Returns whether the application should quit.
pub fn handle_key_press(shell: &mut ShellState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    if key.code == KeyCode::Char('q') && key.modifiers.is_empty() {
        return true;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('[') => {
            shell.go_back();
            return false;
        }
        KeyCode::Char(']') => {
            shell.go_forward();
            return false;
        }
        KeyCode::PageDown => {
            shell.scroll = shell.scroll.saturating_add(4);
            return false;
        }
        KeyCode::PageUp => {
            shell.scroll = shell.scroll.saturating_sub(4);
            return false;
        }
        _ => {}
    }

    match shell.current_view() {
        AppView::Landing => match key.code {
            KeyCode::Enter | KeyCode::Char('l') => shell.navigate(AppView::Login),
            KeyCode::Char('s') => shell.navigate(AppView::Signup),
            KeyCode::Char('p') => shell.navigate(AppView::Pricing),
            KeyCode::Char('e') => shell.navigate(AppView::Enterprise),
            KeyCode::Char('a') => shell.navigate(AppView::About),
            KeyCode::Char('c') => shell.navigate(AppView::Contact),
            _ => {}
        },
        AppView::Login => match key.code {
            KeyCode::Enter => shell.navigate(AppView::Dashboard),
            KeyCode::Char('s') => shell.navigate(AppView::Signup),
            _ => {}
        },
        AppView::Signup => match key.code {
            KeyCode::Enter => shell.navigate(AppView::Dashboard),
            KeyCode::Char('l') => shell.navigate(AppView::Login),
            _ => {}
        },
        AppView::Dashboard => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => shell.navigate(AppView::Setup),
            KeyCode::Char('i') => shell.navigate(AppView::Interviews),
            KeyCode::Char('h') => shell.navigate(AppView::History),
            KeyCode::Char('o') => shell.navigate(AppView::Notifications),
            KeyCode::Char('p') => shell.navigate(AppView::Profile),
            _ => {}
        },
        AppView::Setup => match key.code {
            KeyCode::Up | KeyCode::Down => {
                shell.setup_focus = match shell.setup_focus {
                    SetupFocus::Role => SetupFocus::Difficulty,
                    SetupFocus::Difficulty => SetupFocus::Role,
                };
            }
            KeyCode::Left => match shell.setup_focus {
                SetupFocus::Role => shell.cycle_role(-1),
                SetupFocus::Difficulty => shell.cycle_difficulty(-1),
            },
            KeyCode::Right => match shell.setup_focus {
                SetupFocus::Role => shell.cycle_role(1),
                SetupFocus::Difficulty => shell.cycle_difficulty(1),
            },
            KeyCode::Enter => shell.begin_session(),
            _ => {}
        },
        AppView::Session => {
            if shell.creating_session {
                // Waiting on the create call; nothing to act on yet.
            } else if shell.session_error.is_some() {
                if key.code == KeyCode::Char('r') || key.code == KeyCode::Enter {
                    shell.retry_session_request();
                }
            } else {
                match (shell.answer.phase(), key.code) {
                    (AnswerPhase::Idle, KeyCode::Char(' ')) => shell.answer.start(),
                    (AnswerPhase::Recording, KeyCode::Char(' ')) => shell.answer.stop(),
                    (AnswerPhase::Answered, KeyCode::Char('r')) => shell.answer.re_record(),
                    (AnswerPhase::Answered, KeyCode::Enter | KeyCode::Char('n')) => {
                        if shell.store.is_last_question() {
                            shell.finish_interview();
                        } else {
                            shell.store.advance();
                            shell.answer.advance_reset();
                        }
                    }
                    _ => {}
                }
            }
        }
        AppView::Analyzing => {
            // Auto-advances when the delay task completes.
        }
        AppView::Result => match key.code {
            KeyCode::Char('f') => shell.navigate(AppView::Report),
            KeyCode::Char('s') => shell.navigate(AppView::Summary),
            _ => {}
        },
        AppView::Report => match key.code {
            KeyCode::Char('d') => {
                let lines = screens::final_report::report_lines(shell);
                shell.export_pdf(lines, REPORT_PDF_FILE);
            }
            KeyCode::Char('h') => shell.navigate(AppView::Dashboard),
            _ => {}
        },
        AppView::Summary => match key.code {
            KeyCode::Char('v') => shell.navigate(AppView::Analyzing),
            KeyCode::Char('d') => {
                let lines = screens::summary::summary_lines(shell);
                shell.export_pdf(lines, SUMMARY_PDF_FILE);
            }
            KeyCode::Char('h') => shell.navigate(AppView::Dashboard),
            _ => {}
        },
        AppView::Interviews => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => shell.navigate(AppView::Setup),
            _ => {}
        },
        AppView::History => match key.code {
            KeyCode::Char('e') => shell.export_history(),
            KeyCode::Char('n') => shell.navigate(AppView::Setup),
            _ => {}
        },
        AppView::Notifications | AppView::Profile => {}
        AppView::Pricing
        | AppView::Enterprise
        | AppView::About
        | AppView::Blog
        | AppView::Contact
        | AppView::Privacy
        | AppView::Terms => match key.code {
            KeyCode::Char('l') => shell.navigate(AppView::Login),
            KeyCode::Char('s') => shell.navigate(AppView::Signup),
            _ => {}
        },
    }

    false
}
