use bevy_ecs::{
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    constants::scoring,
    systems::components::{RunOutcome, RunState},
};

/// Best score seen across every run since the game started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreManager {
    high_score: u32,
}

impl HighScoreManager {
    /// Raises the high score if `score` beats it.
    pub fn update(&mut self, score: u32) {
        if score > self.high_score {
            debug!(previous = self.high_score, score, "New high score");
            self.high_score = score;
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}

/// The score of the current run: one point per frame survived.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreKeeper {
    pub score: u32,
}

impl ScoreKeeper {
    /// Feeds the final score into the high score.
    pub fn record(&self, high_scores: &mut HighScoreManager) {
        high_scores.update(self.score);
    }
}

pub fn score_system(mut score: ResMut<ScoreKeeper>) {
    score.score += 1;
}

/// Ends the run with a level-up once the score reaches the threshold.
///
/// A level-up overrides a collision from the same frame.
pub fn level_up_system(score: Res<ScoreKeeper>, mut state: ResMut<RunState>) {
    if score.score >= scoring::LEVEL_UP_SCORE && state.outcome != Some(RunOutcome::LevelUp) {
        info!(score = score.score, "Level up");
        state.outcome = Some(RunOutcome::LevelUp);
    }
}
