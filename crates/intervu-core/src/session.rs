use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::identifiers::{QuestionId, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
}

/// Server-issued session identifier plus its ordered question list and read
/// cursor. The cursor is clamped to the last valid index for the session's
/// whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSession {
    session_id: SessionId,
    questions: Vec<Question>,
    current_index: usize,
}

impl InterviewSession {
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }
}

/// Holds the one active interview session, if any. A successful creation
/// call replaces whatever was there; a failed call never touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    active: Option<InterviewSession>,
}

impl SessionStore {
    /// Installs a freshly created session with the cursor on the first
    /// question. An empty question list would leave no valid cursor
    /// position, so it is rejected and the prior session stays in place.
    pub fn begin(
        &mut self,
        session_id: SessionId,
        questions: Vec<Question>,
    ) -> Result<(), CoreError> {
        if questions.is_empty() {
            return Err(CoreError::Session(format!(
                "session {} arrived without questions",
                session_id.as_str()
            )));
        }
        self.active = Some(InterviewSession {
            session_id,
            questions,
            current_index: 0,
        });
        Ok(())
    }

    pub fn active(&self) -> Option<&InterviewSession> {
        self.active.as_ref()
    }

    /// Moves the cursor to the next question, saturating at the last valid
    /// index. Reaching the end is not an error; the calling screen decides
    /// what "finished" means. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        let Some(session) = self.active.as_mut() else {
            return false;
        };
        let last = session.questions.len() - 1;
        if session.current_index < last {
            session.current_index += 1;
            true
        } else {
            false
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        let session = self.active.as_ref()?;
        session.questions.get(session.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|session| session.current_index + 1 == session.questions.len())
    }

    /// One-based position and total, for the progress header.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.active
            .as_ref()
            .map(|session| (session.current_index + 1, session.questions.len()))
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(count: usize) -> Vec<Question> {
        (1..=count)
            .map(|n| Question {
                id: QuestionId::new(format!("q-{n}")),
                text: format!("Question {n}"),
            })
            .collect()
    }

    #[test]
    fn begin_resets_the_cursor_to_the_first_question() {
        let mut store = SessionStore::default();
        store
            .begin(SessionId::new("sess-1"), questions(3))
            .expect("begin session");
        assert!(store.advance());
        store
            .begin(SessionId::new("sess-2"), questions(2))
            .expect("begin replacement");
        assert_eq!(store.progress(), Some((1, 2)));
        assert_eq!(store.active().map(|s| s.session_id().as_str()), Some("sess-2"));
    }

    #[test]
    fn advance_saturates_at_the_last_index() {
        let mut store = SessionStore::default();
        store
            .begin(SessionId::new("sess-1"), questions(3))
            .expect("begin session");
        for _ in 0..10 {
            store.advance();
        }
        let session = store.active().expect("active session");
        assert_eq!(session.current_index(), 2);
        assert!(store.is_last_question());
        assert!(!store.advance());
        assert_eq!(store.active().expect("active session").current_index(), 2);
    }

    #[test]
    fn empty_question_list_is_rejected_and_prior_state_survives() {
        let mut store = SessionStore::default();
        store
            .begin(SessionId::new("sess-1"), questions(2))
            .expect("begin session");
        store.advance();
        let err = store
            .begin(SessionId::new("sess-2"), Vec::new())
            .expect_err("empty sessions are invalid");
        assert!(matches!(err, CoreError::Session(_)));
        let session = store.active().expect("prior session kept");
        assert_eq!(session.session_id().as_str(), "sess-1");
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn advance_without_a_session_is_a_no_op() {
        let mut store = SessionStore::default();
        assert!(!store.advance());
        assert_eq!(store.current_question(), None);
        assert_eq!(store.progress(), None);
    }
}
