//! Game module - one round of snake from countdown to game over
//!
//! A [`Game`] owns every entity, the held-input set, the score and the frame
//! buffer. The host calls [`Game::update`] once per frame with the elapsed
//! milliseconds and then [`Game::render`] to fetch the frame text if it
//! changed. A round is never rewound: starting over means building a new
//! `Game`.

use log::info;

use crate::board::Border;
use crate::entity::Entity;
use crate::fps::FpsCounter;
use crate::grid::GridBuffer;
use crate::pressed::PressedSet;
use crate::rng::{Randomness, SimpleRng};
use crate::settings::Settings;
use crate::snake::{Collision, Field, MoveOutcome, Snake};
use crate::types::{
    Action, Position, COUNTDOWN_FROM, COUNTDOWN_TICK_MS, GRID_HEIGHT, GRID_WIDTH, GROW_BY,
    MINE_CHANCE, SNAKE_START_LEN,
};

/// Rules for one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub snake_len: usize,
    pub grow_by: u32,
    pub mine_chance: f64,
    pub move_interval_ms: u32,
    pub show_fps: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            snake_len: SNAKE_START_LEN,
            grow_by: GROW_BY,
            mine_chance: MINE_CHANCE,
            move_interval_ms: Settings::default().move_interval_ms(),
            show_fps: false,
        }
    }
}

impl GameConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_interval_ms: settings.move_interval_ms(),
            show_fps: settings.show_fps,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counting down; `remaining` is the next number to show
    Countdown { remaining: u32 },
    Running,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Game<R: Randomness = SimpleRng> {
    config: GameConfig,
    grid: GridBuffer,
    border: Border,
    snake: Snake,
    fruit: Entity,
    mines: Vec<Entity>,
    flavor: Option<&'static str>,
    score: u32,
    phase: Phase,
    countdown_ms: u32,
    pressed: PressedSet,
    fps: FpsCounter,
    /// Milliseconds of running time, the clock the FPS counter samples
    clock_ms: u64,
    collision: Option<Collision>,
    rng: R,
}

impl<R: Randomness> Game<R> {
    /// Set up a round in the countdown phase and draw its first frame.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mid_y = (config.height / 2) as i16;
        let snake = Snake::new(
            Position::new(10, mid_y),
            config.snake_len,
            config.move_interval_ms,
            config.grow_by,
        );
        let fruit = Entity::fruit(Position::new(config.width as i16 - 10, mid_y));

        let mut game = Self {
            config,
            grid: GridBuffer::new(config.width, config.height),
            border: Border::default(),
            snake,
            fruit,
            mines: Vec::new(),
            flavor: None,
            score: 0,
            phase: Phase::Countdown {
                remaining: COUNTDOWN_FROM,
            },
            countdown_ms: 0,
            pressed: PressedSet::new(),
            fps: FpsCounter::new(),
            clock_ms: 0,
            collision: None,
            rng,
        };
        game.draw();
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> &Entity {
        &self.fruit
    }

    pub fn mines(&self) -> &[Entity] {
        &self.mines
    }

    /// Flavor of the last fruit eaten
    pub fn flavor(&self) -> Option<&'static str> {
        self.flavor
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// What ended the round, once stopped
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn pressed(&self) -> &PressedSet {
        &self.pressed
    }

    pub fn buffer(&self) -> &GridBuffer {
        &self.grid
    }

    pub fn press(&mut self, action: Action) {
        self.pressed.press(action);
    }

    pub fn release(&mut self, action: Action) {
        self.pressed.release(action);
    }

    /// Push new difficulty and FPS preferences into a live round.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.config.move_interval_ms = settings.move_interval_ms();
        self.config.show_fps = settings.show_fps;
        self.snake.set_move_interval_ms(self.config.move_interval_ms);
    }

    /// Advance the round by `delta_ms`.
    pub fn update(&mut self, delta_ms: u32) {
        match self.phase {
            Phase::Countdown { remaining } => self.count_down(remaining, delta_ms),
            Phase::Running => self.step(delta_ms),
            Phase::Stopped => {}
        }
    }

    /// The frame text, only when it differs from the last one returned.
    pub fn render(&mut self) -> Option<&str> {
        self.grid.render()
    }

    /// Force the next [`Game::render`] to return the frame.
    pub fn invalidate(&mut self) {
        self.grid.invalidate();
    }

    fn count_down(&mut self, mut remaining: u32, delta_ms: u32) {
        self.countdown_ms = self.countdown_ms.saturating_add(delta_ms);
        while self.countdown_ms >= COUNTDOWN_TICK_MS {
            self.countdown_ms -= COUNTDOWN_TICK_MS;
            if remaining == 0 {
                self.start();
                return;
            }
            self.grid.write_text(&remaining.to_string(), None, None);
            remaining -= 1;
            self.phase = Phase::Countdown { remaining };
        }
    }

    fn start(&mut self) {
        info!("round started");
        self.phase = Phase::Running;
        self.countdown_ms = 0;
        self.step(0);
    }

    fn step(&mut self, delta_ms: u32) {
        self.clock_ms += delta_ms as u64;
        self.fps.frame(self.clock_ms);

        let mut field = Field {
            width: self.config.width,
            height: self.config.height,
            fruit: &mut self.fruit,
            mines: &mut self.mines,
            score: &mut self.score,
            rng: &mut self.rng,
            mine_chance: self.config.mine_chance,
        };
        match self.snake.update(delta_ms, &self.pressed, &mut field) {
            MoveOutcome::Ate { flavor } => self.flavor = Some(flavor),
            MoveOutcome::Crashed(collision) => {
                info!("game over: {collision:?}, score {}", self.score);
                self.collision = Some(collision);
                self.phase = Phase::Stopped;
            }
            MoveOutcome::Waiting | MoveOutcome::Moved => {}
        }

        self.draw();
        if self.phase == Phase::Stopped {
            self.draw_game_over();
        }
    }

    /// Redraw the whole frame from the current state.
    fn draw(&mut self) {
        let (w, h) = (self.config.width, self.config.height);
        self.grid.clear();

        for &part in self.snake.body() {
            self.grid.put(part, self.snake.glyph());
        }
        for mine in &self.mines {
            self.grid.put(mine.pos, mine.glyph);
        }
        self.grid.put(self.fruit.pos, self.fruit.glyph);
        self.border.draw(&mut self.grid);

        self.grid
            .write_text(&format!("SCORE: {} ", self.score), Some(0), Some(0));
        self.grid.write_text(" ", Some(0), Some(1));
        if let Some(flavor) = self.flavor {
            self.grid
                .write_text(&format!(" Mmmm, {flavor} "), None, Some(h.saturating_sub(1)));
        }
        if self.config.show_fps {
            let text = format!(" FPS: {}", self.fps.fps());
            let x = w.saturating_sub(text.chars().count() as u16);
            self.grid.write_text(&text, Some(x), Some(0));
            self.grid.write_text(" ", Some(w.saturating_sub(1)), Some(1));
        }
    }

    fn draw_game_over(&mut self) {
        let mid = self.config.height.saturating_sub(1) / 2;
        self.grid
            .write_text("GAME OVER", None, Some(mid.saturating_sub(1)));
        self.grid.write_text("(PRESS SPACE)", None, Some(mid + 1));
    }
}

impl Game<SimpleRng> {
    /// A default 41×41 round seeded with `seed`.
    pub fn seeded(config: GameConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed))
    }
}
