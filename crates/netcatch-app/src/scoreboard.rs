//! Leaderboard sink used by the app: keeps the shared record list and logs
//! every completed run.

use log::info;

use netcatch_core::state::GameRecord;
use netcatch_sim::leaderboard::{LeaderboardSink, SharedLeaderboard};

#[derive(Debug, Clone, Default)]
pub struct LoggedLeaderboard {
    board: SharedLeaderboard,
}

impl LoggedLeaderboard {
    pub fn new(board: SharedLeaderboard) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &SharedLeaderboard {
        &self.board
    }
}

impl LeaderboardSink for LoggedLeaderboard {
    fn submit(&mut self, record: &GameRecord) {
        self.board.submit(record);
        info!(
            "run recorded: score {}, {} caught, per level {:?} ({} runs on board)",
            record.score,
            record.total_caught,
            record.catch_counts.as_slice(),
            self.board.len()
        );
    }
}
