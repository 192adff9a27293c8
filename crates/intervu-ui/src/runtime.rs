use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use intervu_export::PdfExporter;

use crate::backend::SessionBackend;
use crate::chrome;
use crate::screens;
use crate::shell::{handle_key_press, ShellState};

const DEFAULT_ANALYZING_DELAY: Duration = Duration::from_millis(3500);
const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(200);
const RECORDING_TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct Ui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    session_backend: Option<Arc<dyn SessionBackend>>,
    pdf_exporter: Option<Arc<dyn PdfExporter>>,
    analyzing_delay: Duration,
}

impl Ui {
    pub fn init() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            session_backend: None,
            pdf_exporter: None,
            analyzing_delay: DEFAULT_ANALYZING_DELAY,
        })
    }

    pub fn with_session_backend(mut self, backend: Arc<dyn SessionBackend>) -> Self {
        self.session_backend = Some(backend);
        self
    }

    pub fn with_pdf_exporter(mut self, exporter: Arc<dyn PdfExporter>) -> Self {
        self.pdf_exporter = Some(exporter);
        self
    }

    pub fn with_analyzing_delay(mut self, delay: Duration) -> Self {
        self.analyzing_delay = delay;
        self
    }

    pub fn run(&mut self, status: &str) -> io::Result<()> {
        let mut shell = ShellState::new_with_integrations(
            status.to_owned(),
            self.analyzing_delay,
            self.session_backend.clone(),
            self.pdf_exporter.clone(),
        );
        let mut force_draw = true;
        let mut last_animation_frame = Instant::now();
        let mut last_recording_tick = Instant::now();

        loop {
            let mut changed = false;
            changed |= shell.tick_session_task_and_report();
            changed |= shell.tick_analyzing_and_report();

            let now = Instant::now();
            if shell.answer.is_recording() {
                if now.duration_since(last_recording_tick) >= RECORDING_TICK_INTERVAL {
                    changed |= shell.tick_recording_second();
                    last_recording_tick = now;
                }
            } else {
                last_recording_tick = now;
            }

            let animation_active = shell.has_active_animated_indicator();
            let animation_frame_ready =
                now.duration_since(last_animation_frame) >= ANIMATION_FRAME_INTERVAL;
            let should_draw = force_draw || changed || (animation_active && animation_frame_ready);

            if should_draw {
                if animation_active && animation_frame_ready {
                    last_animation_frame = now;
                }
                self.terminal.draw(|frame| {
                    let (header, content, footer) =
                        chrome::frame_areas(frame.area(), shell.current_view());
                    chrome::render_header(frame, header, &shell);
                    screens::render_screen(frame, content, &shell);
                    chrome::render_footer(frame, footer, &shell);
                })?;
            }

            force_draw = false;
            let poll_timeout = if shell.has_active_animated_indicator() {
                Duration::from_millis(50)
            } else {
                Duration::from_millis(250)
            };
            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && handle_key_press(&mut shell, key) {
                        break;
                    }
                    force_draw = true;
                }
            }
        }

        Ok(())
    }
}

impl Drop for Ui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}
