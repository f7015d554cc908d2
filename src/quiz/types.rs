use anyhow::{ensure, Result};
use serde::Deserialize;

/// One binary-choice question. `correct` indexes into `choices` and refers to
/// the original ordering, not the randomized on-screen layout.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub title: String,
    pub detail: String,
    pub choices: [String; 2],
    pub correct: u8,
    pub explanation: String,
}

/// An ordered set of questions, one per door at level start.
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    pub title: String,
    pub questions: Vec<Question>,
}

/// The full ordered run. Every level must carry the same number of questions,
/// which fixes the door count for the whole campaign.
#[derive(Debug, Clone)]
pub struct Campaign {
    levels: Vec<Level>,
}

impl Campaign {
    pub fn new(levels: Vec<Level>) -> Result<Self> {
        ensure!(!levels.is_empty(), "campaign has no levels");
        let doors = levels[0].questions.len();
        ensure!(doors > 0, "level \"{}\" has no questions", levels[0].title);
        for level in &levels {
            ensure!(
                level.questions.len() == doors,
                "level \"{}\" has {} questions, expected {}",
                level.title,
                level.questions.len(),
                doors
            );
            for q in &level.questions {
                ensure!(
                    q.correct <= 1,
                    "question \"{}\" has correct index {}, expected 0 or 1",
                    q.title,
                    q.correct
                );
            }
        }
        Ok(Campaign { levels })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> &Level {
        &self.levels[index]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn doors_per_level(&self) -> usize {
        self.levels[0].questions.len()
    }

    pub fn total_questions(&self) -> u32 {
        (self.level_count() * self.doors_per_level()) as u32
    }
}
