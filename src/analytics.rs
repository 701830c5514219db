//! Win and round aggregation over a batch of game records

use crate::player::PlayStyle;
use crate::result::GameRecord;

/// Aggregate statistics over a results file.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub games: usize,
    pub draws: usize,
    /// Wins per strategy, indexed in `PlayStyle::ALL` order.
    wins: [usize; 4],
    min_rounds: Option<u32>,
    max_rounds: u32,
    total_rounds: u64,
}

impl BatchStats {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut stats = BatchStats {
            games: records.len(),
            ..BatchStats::default()
        };

        for record in records {
            stats.total_rounds += u64::from(record.number_of_rounds);
            stats.max_rounds = stats.max_rounds.max(record.number_of_rounds);
            stats.min_rounds = Some(match stats.min_rounds {
                Some(min) => min.min(record.number_of_rounds),
                None => record.number_of_rounds,
            });

            if record.draw {
                stats.draws += 1;
            } else if let Some(strategy) = record.winner_strategy {
                stats.wins[style_index(strategy)] += 1;
            }
        }

        stats
    }

    pub fn wins(&self, strategy: PlayStyle) -> usize {
        self.wins[style_index(strategy)]
    }

    /// Fraction of games won by `strategy`, in 0..=1.
    pub fn win_share(&self, strategy: PlayStyle) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins(strategy) as f64 / self.games as f64
        }
    }

    pub fn mean_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.games as f64
        }
    }

    /// Multi-line summary for console output.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Games analyzed: {}\n", self.games));

        for strategy in PlayStyle::ALL {
            let wins = self.wins(strategy);
            out.push_str(&format!(
                "  {:<28} {:>6} wins ({:.1}%)\n",
                strategy.label(),
                wins,
                self.win_share(strategy) * 100.0
            ));
        }
        if self.draws > 0 {
            out.push_str(&format!("  {:<28} {:>6}\n", "Draws", self.draws));
        }

        out.push_str(&format!(
            "Rounds: min {} / mean {:.1} / max {}\n",
            self.min_rounds.unwrap_or(0),
            self.mean_rounds(),
            self.max_rounds
        ));
        out
    }
}

fn style_index(strategy: PlayStyle) -> usize {
    PlayStyle::ALL
        .iter()
        .position(|s| *s == strategy)
        .expect("strategy is in PlayStyle::ALL")
}
