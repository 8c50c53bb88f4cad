use std::time::Duration;

use crate::app::control::TickTimer;

pub struct Prefs {
    pub board_width: isize,
    pub board_height: isize,
    pub snake_len: usize,
    /// Growth per food eaten, consumed one cell per tick
    pub food_growth: usize,
    /// How many food cells are on the board at once
    pub food_count: usize,
    pub obstacle_count: usize,

    pub ticks_per_second: f64,
    pub stall_threshold: Duration,

    /// Headless games played in parallel
    pub games: usize,
    /// A game that reaches this many ticks is stopped
    pub max_ticks: usize,
    /// Ticks of the wall-clock demo after the headless batch
    pub realtime_ticks: usize,
    pub seed: u64,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_width: 16,
            board_height: 12,
            snake_len: 3,
            food_growth: 1,
            food_count: 1,
            obstacle_count: 6,

            ticks_per_second: 30.,
            stall_threshold: TickTimer::DEFAULT_STALL_THRESHOLD,

            games: 32,
            max_ticks: 5_000,
            realtime_ticks: 60,
            seed: 0,
        }
    }
}

// builder
impl Prefs {
    pub fn board(mut self, width: isize, height: isize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn snake_len(mut self, len: usize) -> Self {
        self.snake_len = len;
        self
    }

    pub fn food_count(mut self, food_count: usize) -> Self {
        self.food_count = food_count;
        self
    }

    pub fn obstacle_count(mut self, obstacle_count: usize) -> Self {
        self.obstacle_count = obstacle_count;
        self
    }

    pub fn ticks_per_second(mut self, ticks_per_second: f64) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    pub fn stall_threshold(mut self, stall_threshold: Duration) -> Self {
        self.stall_threshold = stall_threshold;
        self
    }

    pub fn games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Prefs {
    /// Timer for the realtime run
    pub fn tick_timer(&self) -> TickTimer {
        TickTimer::new(self.ticks_per_second).with_stall_threshold(self.stall_threshold)
    }
}
