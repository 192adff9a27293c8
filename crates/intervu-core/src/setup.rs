use serde::{Deserialize, Serialize};

/// Every practice session runs against the same backend domain.
pub const INTERVIEW_DOMAIN: &str = "IT";

/// The setup screen offers a fixed-length standard session; the count is
/// shown but not editable.
pub const STANDARD_QUESTION_COUNT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Backend,
    Frontend,
    Fullstack,
    DevOps,
    Qa,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Backend,
        Role::Frontend,
        Role::Fullstack,
        Role::DevOps,
        Role::Qa,
    ];

    /// Identifier sent on the wire.
    pub fn wire_id(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Fullstack => "fullstack",
            Self::DevOps => "devops",
            Self::Qa => "qa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::Fullstack => "Fullstack",
            Self::DevOps => "DevOps",
            Self::Qa => "QA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// User-chosen parameters for a practice session. Produced once by the
/// setup screen and consumed once by the session screen; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewConfig {
    pub role: String,
    pub difficulty: Difficulty,
    pub question_count: u32,
}

/// In-progress selections on the setup screen. Both inputs are closed sets,
/// so any combination is by construction valid and `complete` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupSelection {
    pub role: Role,
    pub difficulty: Difficulty,
}

impl Default for SetupSelection {
    fn default() -> Self {
        Self {
            role: Role::Fullstack,
            difficulty: Difficulty::Medium,
        }
    }
}

impl SetupSelection {
    pub fn complete(self) -> InterviewConfig {
        InterviewConfig {
            role: self.role.wire_id().to_owned(),
            difficulty: self.difficulty,
            question_count: STANDARD_QUESTION_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_setup_screen() {
        let selection = SetupSelection::default();
        assert_eq!(selection.role, Role::Fullstack);
        assert_eq!(selection.difficulty, Difficulty::Medium);
    }

    #[test]
    fn completing_backend_hard_produces_the_expected_config() {
        let config = SetupSelection {
            role: Role::Backend,
            difficulty: Difficulty::Hard,
        }
        .complete();
        assert_eq!(
            config,
            InterviewConfig {
                role: "backend".to_owned(),
                difficulty: Difficulty::Hard,
                question_count: 10,
            }
        );
    }

    #[test]
    fn wire_ids_are_lowercase_and_unique() {
        let mut ids: Vec<&str> = Role::ALL.iter().map(|role| role.wire_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Role::ALL.len());
        for id in ids {
            assert_eq!(id, id.to_lowercase());
        }
    }
}
