//! Domain model for the InterVu practice client: the view registry, the
//! history-backed navigation controller, interview session state, and the
//! answer-recording state machine. Everything here is synchronous and
//! side-effect free; the UI shell owns the event loop and the API crate owns
//! the network.

mod answer;
mod error;
mod identifiers;
mod navigation;
mod session;
mod setup;
mod transcript;
mod views;

pub use answer::{format_clock, AnswerMachine, AnswerPhase};
pub use error::CoreError;
pub use identifiers::{QuestionId, SessionId};
pub use navigation::NavigationController;
pub use session::{InterviewSession, Question, SessionStore};
pub use setup::{
    Difficulty, InterviewConfig, Role, SetupSelection, INTERVIEW_DOMAIN, STANDARD_QUESTION_COUNT,
};
pub use transcript::{annotate, HighlightKind, HighlightPhrase, TranscriptSpan};
pub use views::{AppView, Chrome};
