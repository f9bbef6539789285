use std::{collections::HashMap, fmt};

use chess::Color;

use crate::outcome::{GameOutcome, GameResult};

#[derive(Default, Debug, Clone, PartialEq)]
struct EngineSummary {
    wins_as_white: u32,
    wins_as_black: u32,
    draws: u32,
    losses: u32,
    num_games: u32,
}

impl EngineSummary {
    fn record_game(&mut self, result: GameResult, playing_as: Color) {
        self.num_games += 1;

        match result.winner() {
            None => self.draws += 1,
            Some(winner) if winner == playing_as => match playing_as {
                Color::White => self.wins_as_white += 1,
                Color::Black => self.wins_as_black += 1,
            },
            Some(_) => self.losses += 1,
        }
    }

    #[inline]
    fn score(&self) -> f64 {
        self.total_wins() as f64 + self.draws as f64 * 0.5
    }

    #[inline]
    fn total_wins(&self) -> u32 {
        self.wins_as_white + self.wins_as_black
    }

    #[inline]
    fn win_rate(&self) -> f64 {
        if self.num_games == 0 {
            0.0
        } else {
            (self.total_wins() as f64 / self.num_games as f64) * 100.0
        }
    }
}

/// How the games ended, independent of who won them.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endings {
    pub checkmates: u32,
    pub resignations: u32,
    pub stalemates: u32,
    pub draws: u32,
    pub move_limits: u32,
}

impl Endings {
    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Checkmate { .. } => self.checkmates += 1,
            GameResult::Resignation { .. } => self.resignations += 1,
            GameResult::Stalemate => self.stalemates += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::MoveLimit => self.move_limits += 1,
        }
    }
}

pub struct Summary {
    engines: HashMap<String, EngineSummary>,
    endings: Endings,
    total_games: u32,
    total_moves: usize,
}

impl Summary {
    pub fn new(outcomes: &[GameOutcome]) -> Self {
        let mut engines = HashMap::new();
        let mut endings = Endings::default();

        for outcome in outcomes {
            engines
                .entry(outcome.white_name.clone())
                .or_insert_with(EngineSummary::default)
                .record_game(outcome.result, Color::White);

            engines
                .entry(outcome.black_name.clone())
                .or_insert_with(EngineSummary::default)
                .record_game(outcome.result, Color::Black);

            endings.record(outcome.result);
        }

        Summary {
            engines,
            endings,
            total_games: outcomes.len() as u32,
            total_moves: outcomes.iter().map(GameOutcome::move_count).sum(),
        }
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn endings(&self) -> Endings {
        self.endings
    }

    pub fn average_length(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.total_games as f64
        }
    }

    #[inline]
    fn get_sorted_engines(&self) -> Vec<(&String, &EngineSummary)> {
        let mut engines: Vec<_> = self.engines.iter().collect();
        engines.sort_by(|a, b| {
            b.1.score()
                .partial_cmp(&a.1.score())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        engines
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Summary")?;
        writeln!(f, "==================")?;
        writeln!(f, "Total Games: {}", self.total_games())?;
        writeln!(f, "Average Length: {:.1} moves", self.average_length())?;
        let endings = self.endings();
        writeln!(
            f,
            "Endings: {} checkmate, {} resignation, {} stalemate, {} draw, {} move limit",
            endings.checkmates,
            endings.resignations,
            endings.stalemates,
            endings.draws,
            endings.move_limits
        )?;
        writeln!(f)?;

        for (rank, (engine_name, summary)) in self.get_sorted_engines().iter().enumerate() {
            writeln!(f, "{}. Engine: {}", rank + 1, engine_name)?;
            writeln!(f, "   Wins as White: {}", summary.wins_as_white)?;
            writeln!(f, "   Wins as Black: {}", summary.wins_as_black)?;
            writeln!(f, "   Draws: {}", summary.draws)?;
            writeln!(f, "   Losses: {}", summary.losses)?;
            writeln!(f, "   Score: {:.1}/{}", summary.score(), summary.num_games)?;
            writeln!(f, "   Win Rate: {:.1}%", summary.win_rate())?;
            writeln!(f)?;
        }

        Ok(())
    }
}
