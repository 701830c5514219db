//! The LCR game loop

use rand::Rng;

use crate::dice::DiceFace;
use crate::player::{Player, choose_steal_target};

/// Hard cap on rounds. A game that hits it is recorded as a draw; with
/// sane player counts this should be rare.
pub const MAX_ROUNDS: u32 = 10_000;

/// Most dice a player may roll in one turn.
const MAX_DICE_PER_TURN: u32 = 3;

/// Direction around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Index of the neighbor in `direction`, wrapping around the table
/// (seat 0's left neighbor is seat n-1).
pub fn neighbor_index(num_players: usize, seat: usize, direction: Direction) -> usize {
    match direction {
        Direction::Right => (seat + 1) % num_players,
        Direction::Left => (seat + num_players - 1) % num_players,
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    /// The last player holding chips, or `None` on a draw.
    pub winner: Option<Player>,
    pub rounds: u32,
    /// Chips paid into the center pot.
    pub pot: u32,
    /// Chip counts per round, one row per recorded round (row 0 is the
    /// starting state), one column per seat. Empty when not recorded.
    pub chip_history: Vec<Vec<u32>>,
}

/// One LCR game over a fixed ring of players.
pub struct Game {
    players: Vec<Player>,
    pot: u32,
    record_history: bool,
}

impl Game {
    pub fn new(players: Vec<Player>, record_history: bool) -> Self {
        Self {
            players,
            pot: 0,
            record_history,
        }
    }

    fn keep_playing(&self) -> bool {
        self.players.iter().filter(|p| p.in_play()).count() > 1
    }

    fn snapshot(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.chips).collect()
    }

    /// Play the game to completion and consume it.
    pub fn play(mut self, rng: &mut impl Rng) -> GameOutcome {
        let n = self.players.len();
        let mut rounds = 0u32;
        let mut history = Vec::new();
        if self.record_history {
            history.push(self.snapshot());
        }

        while self.keep_playing() && rounds < MAX_ROUNDS {
            for seat in 0..n {
                if self.players[seat].chips == 0 {
                    continue;
                }

                // Dice count is fixed at the start of the turn; chips can
                // only drop by one per roll, so this never underflows.
                let rolls = self.players[seat].chips.min(MAX_DICE_PER_TURN);
                for _ in 0..rolls {
                    match DiceFace::roll(rng) {
                        DiceFace::Left => {
                            self.players[seat].chips -= 1;
                            let left = neighbor_index(n, seat, Direction::Left);
                            self.players[left].chips += 1;
                        }
                        DiceFace::Right => {
                            self.players[seat].chips -= 1;
                            let right = neighbor_index(n, seat, Direction::Right);
                            self.players[right].chips += 1;
                        }
                        DiceFace::Center => {
                            self.players[seat].chips -= 1;
                            self.pot += 1;
                        }
                        DiceFace::Dot => {}
                        DiceFace::Wild => {
                            let chips = self.snapshot();
                            let strategy = self.players[seat].strategy;
                            if let Some(target) = choose_steal_target(&chips, seat, strategy) {
                                self.players[target].chips -= 1;
                                self.players[seat].chips += 1;
                            }
                        }
                    }
                }
            }

            rounds += 1;
            if self.record_history {
                history.push(self.snapshot());
            }
        }

        let mut survivors = self.players.iter().filter(|p| p.in_play());
        let winner = match (survivors.next(), survivors.next()) {
            (Some(player), None) => Some(player.clone()),
            // Zero survivors (last chip went to the pot) or a round-capped
            // game both count as draws.
            _ => None,
        };

        GameOutcome {
            winner,
            rounds,
            pot: self.pot,
            chip_history: history,
        }
    }
}
