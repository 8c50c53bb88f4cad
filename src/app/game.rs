use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::control::TickTimer;
use crate::app::prefs::Prefs;
use crate::basic::{Board, Dir, GridPoint};
use crate::error::{Error, ErrorConversion, Result};
use crate::snake::{self, Body};
use crate::snake_control::autopilot::{Autopilot, Decision};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Crash {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Playing,
    Crashed(Crash),
    /// No free cell left to put food on
    BoardFull,
}

#[derive(Clone, Debug)]
pub struct Report {
    pub seed: u64,
    pub state: State,
    pub ticks: usize,
    pub len: usize,
    pub food_eaten: usize,
}

/// Closest food by manhattan distance, ties go to the
/// first cell in row-major order
pub fn nearest_food(head: GridPoint, food: &[GridPoint]) -> Option<GridPoint> {
    food.iter().copied().min_by_key(|pos| (head.manhattan_distance(*pos), *pos))
}

/// One headless snake game, owns the authoritative state
/// and asks the autopilot for a direction every tick
pub struct Game {
    seed: u64,
    board: Board,
    body: Body,
    food: Vec<GridPoint>,
    food_growth: usize,
    autopilot: Autopilot,
    rng: StdRng,

    state: State,
    ticks: usize,
    food_eaten: usize,
    last_decision: Option<Decision>,
}

impl Game {
    pub fn new(prefs: &Prefs, seed: u64) -> Result<Self> {
        let board = Board::new(prefs.board_width, prefs.board_height)
            .map_err(Error::from)
            .with_trace_step("creating board")?;

        let body = snake::Builder::default()
            .pos(GridPoint::new(prefs.board_width / 2, prefs.board_height / 2))
            .dir(Dir::R)
            .len(prefs.snake_len)
            .build(&board)
            .map_err(Error::from)
            .with_trace_step("spawning snake")?;

        let mut game = Self {
            seed,
            board,
            body,
            food: Vec::with_capacity(prefs.food_count),
            food_growth: prefs.food_growth,
            autopilot: Autopilot::default(),
            rng: StdRng::seed_from_u64(seed),

            state: State::Playing,
            ticks: 0,
            food_eaten: 0,
            last_decision: None,
        };

        for _ in 0..prefs.obstacle_count {
            // keep the cell in front of the snake clear
            let ahead = game.body.head().translate(game.body.dir(), 1);
            let occupied: Vec<_> = game.occupied_cells().chain(std::iter::once(ahead)).collect();
            match game.board.random_free_spot(occupied, &mut game.rng) {
                Some(pos) => {
                    game.board.add_obstacle(pos);
                }
                None => break,
            }
        }
        for _ in 0..prefs.food_count {
            game.spawn_food();
        }

        tracing::debug!(seed, obstacles = game.board.obstacles().len(), "new game");
        Ok(game)
    }

    fn occupied_cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.body.cells().iter().chain(self.food.iter()).copied()
    }

    fn spawn_food(&mut self) -> bool {
        let occupied: Vec<_> = self.occupied_cells().collect();
        match self.board.random_free_spot(occupied, &mut self.rng) {
            Some(pos) => {
                self.food.push(pos);
                true
            }
            None => false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn food(&self) -> &[GridPoint] {
        &self.food
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    /// Only free cells can become obstacles, returns whether
    /// the obstacle was placed
    pub fn place_obstacle(&mut self, pos: GridPoint) -> bool {
        if self.board.is_blocked(pos) || self.occupied_cells().any(|cell| cell == pos) {
            return false;
        }
        self.board.add_obstacle(pos)
    }

    pub fn clear_obstacle(&mut self, pos: GridPoint) -> bool {
        self.board.remove_obstacle(pos)
    }

    pub fn put_food(&mut self, pos: GridPoint) -> bool {
        if self.board.is_blocked(pos) || self.occupied_cells().any(|cell| cell == pos) {
            return false;
        }
        self.food.push(pos);
        true
    }

    pub fn tick(&mut self) -> State {
        if self.state != State::Playing {
            return self.state;
        }

        let target = nearest_food(self.body.head(), &self.food);
        let decision = self.autopilot.plan(&self.body, &self.board, target);
        self.body.buffer_dir(decision.dir);
        self.body.advance();
        self.last_decision = Some(decision);
        self.ticks += 1;

        if self.body.is_wall_colliding(&self.board) || self.board.is_obstacle(self.body.head()) {
            self.state = State::Crashed(Crash::Wall);
        } else if self.body.is_self_colliding() {
            self.state = State::Crashed(Crash::Body);
        } else if let Some(idx) = self.food.iter().position(|pos| *pos == self.body.head()) {
            self.food.swap_remove(idx);
            self.body.grow(self.food_growth);
            self.food_eaten += 1;
            if !self.spawn_food() && self.food.is_empty() {
                self.state = State::BoardFull;
            }
        }

        if let State::Crashed(crash) = self.state {
            tracing::debug!(seed = self.seed, ?crash, ticks = self.ticks, "crashed");
        }
        self.state
    }

    pub fn report(&self) -> Report {
        Report {
            seed: self.seed,
            state: self.state,
            ticks: self.ticks,
            len: self.body.len(),
            food_eaten: self.food_eaten,
        }
    }

    /// Plays as fast as possible until the game ends or
    /// `max_ticks` is reached
    pub fn play(mut self, max_ticks: usize) -> Report {
        while self.ticks < max_ticks && self.tick() == State::Playing {}
        let report = self.report();
        tracing::info!(
            seed = report.seed,
            state = ?report.state,
            ticks = report.ticks,
            len = report.len,
            food = report.food_eaten,
            "game finished"
        );
        report
    }

    /// Plays `ticks` ticks paced by `timer`, the way a
    /// rendering frontend would drive the game
    pub fn run_realtime(&mut self, timer: &mut TickTimer, ticks: usize) -> Report {
        let frame = Duration::from_secs_f64(1. / 120.);
        let start = Instant::now();
        let mut done = 0;
        while done < ticks && self.state == State::Playing {
            timer.update();
            while done < ticks && timer.should_tick() {
                self.tick();
                done += 1;
            }
            // what a renderer would draw this frame
            let segments = self.body.interpolated_cells(timer.interpolation());
            tracing::trace!(head = ?segments.first(), "frame");
            thread::sleep(frame);
        }
        let elapsed = start.elapsed();
        tracing::info!(
            ticks = done,
            ?elapsed,
            tps = done as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
            "realtime run finished"
        );
        self.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::snake_control::autopilot::Strategy;

    fn p(x: isize, y: isize) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn empty_game() -> Game {
        let prefs = Prefs::default().board(10, 10).food_count(0).obstacle_count(0);
        Game::new(&prefs, 1).unwrap()
    }

    #[test]
    fn test_nearest_food() {
        assert_eq!(nearest_food(p(0, 0), &[]), None);
        assert_eq!(nearest_food(p(5, 5), &[p(0, 0), p(7, 5), p(5, 9)]), Some(p(7, 5)));
        // equal distance, row-major order decides
        assert_eq!(nearest_food(p(5, 5), &[p(6, 5), p(5, 4)]), Some(p(5, 4)));
    }

    #[test]
    fn test_bad_prefs_fail_fast() {
        let err = Game::new(&Prefs::default().board(0, 10), 0).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::Board(_)));

        let err = Game::new(&Prefs::default().snake_len(1), 0).err().unwrap();
        assert!(matches!(err.kind(), ErrorKind::Snake(_)));
    }

    #[test]
    fn test_eating_grows_snake() {
        let mut game = empty_game();
        assert_eq!(game.body().head(), p(5, 5));
        assert!(game.put_food(p(7, 5)));

        game.tick();
        assert_eq!(game.last_decision().map(|d| d.strategy), Some(Strategy::Target));
        game.tick();
        assert_eq!(game.body().head(), p(7, 5));
        assert_eq!(game.report().food_eaten, 1);
        // a replacement was spawned
        assert_eq!(game.food().len(), 1);
        assert_ne!(game.food()[0], p(7, 5));

        let len = game.body().len();
        game.tick();
        assert_eq!(game.body().len(), len + 1);
    }

    #[test]
    fn test_obstacles_only_on_free_cells() {
        let mut game = empty_game();
        assert!(!game.place_obstacle(game.body().head()));
        assert!(!game.place_obstacle(p(-1, 0)));
        assert!(game.place_obstacle(p(0, 0)));
        assert!(!game.place_obstacle(p(0, 0)));
        assert!(game.clear_obstacle(p(0, 0)));
    }

    #[test]
    fn test_survives_without_food() {
        let game = empty_game();
        let report = game.play(500);
        assert_eq!(report.state, State::Playing);
        assert_eq!(report.ticks, 500);
        assert_eq!(report.len, 3);
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let prefs = Prefs::default().board(8, 8).obstacle_count(3);
        let a = Game::new(&prefs, 17).unwrap().play(300);
        let b = Game::new(&prefs, 17).unwrap().play(300);
        assert_eq!((a.state, a.ticks, a.len, a.food_eaten), (b.state, b.ticks, b.len, b.food_eaten));
    }

    #[test]
    fn test_autopilot_eats() {
        let prefs = Prefs::default().board(10, 10).obstacle_count(0);
        let report = Game::new(&prefs, 5).unwrap().play(2_000);
        assert!(report.food_eaten >= 5, "{:?}", report);
    }

    #[test]
    fn test_run_realtime() {
        let mut game = empty_game();
        let mut timer = TickTimer::new(200.);
        let report = game.run_realtime(&mut timer, 10);
        assert_eq!(report.ticks, 10);
    }
}
