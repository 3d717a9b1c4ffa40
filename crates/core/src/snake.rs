//! Snake module - body, steering, movement and collision resolution
//!
//! The snake advances one cell each time its accumulated time reaches the
//! movement interval. Steering is edge-triggered (a key must be newly pressed)
//! and checked against the direction of the previous completed move, so a
//! 180° turn can never happen within one tick.

use std::collections::VecDeque;

use log::debug;

use crate::board::Border;
use crate::entity::Entity;
use crate::pressed::PressedSet;
use crate::rng::Randomness;
use crate::types::{Action, Direction, Position, FRUIT_FLAVORS, SNAKE_GLYPH};

/// What killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
    Mine,
}

/// Result of one [`Snake::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Interval not reached yet; nothing moved
    Waiting,
    Moved,
    /// Moved onto the fruit
    Ate { flavor: &'static str },
    Crashed(Collision),
}

/// Everything a move can touch besides the snake itself.
pub struct Field<'a, R: Randomness> {
    pub width: u16,
    pub height: u16,
    pub fruit: &'a mut Entity,
    pub mines: &'a mut Vec<Entity>,
    pub score: &'a mut u32,
    pub rng: &'a mut R,
    pub mine_chance: f64,
}

#[derive(Debug, Clone)]
pub struct Snake {
    /// Head first
    body: VecDeque<Position>,
    /// Direction the next move will use
    direction: Direction,
    /// Direction of the last completed move
    prev_direction: Direction,
    move_interval_ms: u32,
    since_move_ms: u32,
    grow_by: u32,
    grow_counter: u32,
    prev_pressed: PressedSet,
    glyph: char,
}

impl Snake {
    /// A snake of `len` segments with its head at `head`, trailing left and
    /// heading right.
    pub fn new(head: Position, len: usize, move_interval_ms: u32, grow_by: u32) -> Self {
        let body = (0..len.max(1) as i16)
            .map(|i| Position::new(head.x - i, head.y))
            .collect();
        Self {
            body,
            direction: Direction::Right,
            prev_direction: Direction::Right,
            move_interval_ms,
            since_move_ms: 0,
            grow_by,
            grow_counter: 0,
            prev_pressed: PressedSet::new(),
            glyph: SNAKE_GLYPH,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn prev_direction(&self) -> Direction {
        self.prev_direction
    }

    pub fn grow_counter(&self) -> u32 {
        self.grow_counter
    }

    pub fn move_interval_ms(&self) -> u32 {
        self.move_interval_ms
    }

    pub fn set_move_interval_ms(&mut self, ms: u32) {
        self.move_interval_ms = ms;
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Queue a turn from the keys held this frame.
    ///
    /// Only keys that were not held on the previous call count. Up/Down are
    /// accepted while the last move was horizontal, Left/Right while it was
    /// vertical; the first match in Up, Down, Left, Right order wins.
    pub fn set_direction(&mut self, pressed: &PressedSet) {
        let prev = self.prev_direction;
        let edge = |a: Action| pressed.newly_pressed(&self.prev_pressed, a);

        let turn = if edge(Action::Up) && prev.is_horizontal() {
            Some(Direction::Up)
        } else if edge(Action::Down) && prev.is_horizontal() {
            Some(Direction::Down)
        } else if edge(Action::Left) && prev.is_vertical() {
            Some(Direction::Left)
        } else if edge(Action::Right) && prev.is_vertical() {
            Some(Direction::Right)
        } else {
            None
        };
        if let Some(dir) = turn {
            self.direction = dir;
        }

        for action in [Action::Up, Action::Down, Action::Left, Action::Right] {
            if pressed.is_pressed(action) {
                self.prev_pressed.press(action);
            } else {
                self.prev_pressed.release(action);
            }
        }
    }

    /// Accumulate `delta_ms`; move one cell once the interval is reached.
    ///
    /// Returns `true` if a move happened. Leftover time past the interval is
    /// discarded, so at most one cell is covered per call.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.since_move_ms = self.since_move_ms.saturating_add(delta_ms);
        if self.since_move_ms < self.move_interval_ms {
            return false;
        }
        self.since_move_ms = 0;
        self.prev_direction = self.direction;

        let head = self.head().step(self.direction);
        self.body.push_front(head);
        if self.grow_counter == 0 {
            self.body.pop_back();
        } else {
            self.grow_counter -= 1;
        }
        true
    }

    /// True if the head sits on any other segment.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }

    /// One frame of snake simulation: steer, move, then resolve what the head
    /// ran into.
    ///
    /// Checks run wall, self, mine, fruit; the first lethal hit is reported.
    /// Eating grows the snake, relocates the fruit (scoring its value) and,
    /// with probability `field.mine_chance`, places a new mine.
    pub fn update<R: Randomness>(
        &mut self,
        delta_ms: u32,
        pressed: &PressedSet,
        field: &mut Field<'_, R>,
    ) -> MoveOutcome {
        self.set_direction(pressed);
        if !self.advance(delta_ms) {
            return MoveOutcome::Waiting;
        }

        let head = self.head();
        if Border::contains(field.width, field.height, head) {
            return MoveOutcome::Crashed(Collision::Wall);
        }
        if self.bites_itself() {
            return MoveOutcome::Crashed(Collision::SelfBite);
        }
        if field.mines.iter().any(|m| m.pos == head) {
            return MoveOutcome::Crashed(Collision::Mine);
        }
        if head != field.fruit.pos {
            return MoveOutcome::Moved;
        }

        self.grow_counter += self.grow_by;
        let flavor = FRUIT_FLAVORS[field.rng.next_range(FRUIT_FLAVORS.len() as u32) as usize];

        let eaten_at = field.fruit.pos;
        field.fruit.relocate(
            &mut *field.rng,
            field.width,
            field.height,
            eaten_at,
            &field.mines[..],
        );
        *field.score += field.fruit.value;
        debug!("ate {flavor} at {eaten_at:?}, fruit moved to {:?}", field.fruit.pos);

        if field.rng.chance(field.mine_chance) {
            let mut mine = Entity::mine();
            if mine.relocate(
                &mut *field.rng,
                field.width,
                field.height,
                field.fruit.pos,
                &field.mines[..],
            ) {
                *field.score += mine.value;
                debug!("mine placed at {:?}", mine.pos);
                field.mines.push(mine);
            }
        }

        MoveOutcome::Ate { flavor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SimpleRng};

    fn pressed(actions: &[Action]) -> PressedSet {
        actions.iter().copied().collect()
    }

    #[test]
    fn new_snake_trails_left_of_head() {
        let snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        let body: Vec<_> = snake.body().iter().copied().collect();
        assert_eq!(
            body,
            vec![
                Position::new(10, 20),
                Position::new(9, 20),
                Position::new(8, 20)
            ]
        );
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn advance_waits_for_interval() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        assert!(!snake.advance(39));
        assert_eq!(snake.head(), Position::new(10, 20));
        assert!(snake.advance(1));
        assert_eq!(snake.head(), Position::new(11, 20));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_moves_one_cell_even_after_long_delta() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        assert!(snake.advance(500));
        assert_eq!(snake.head(), Position::new(11, 20));
        // Accumulator was reset, not carried over.
        assert!(!snake.advance(39));
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        snake.set_direction(&pressed(&[Action::Left]));
        assert_eq!(snake.direction(), Direction::Right);
        snake.advance(40);
        assert_eq!(snake.head(), Position::new(11, 20));
    }

    #[test]
    fn turn_is_edge_triggered() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        snake.set_direction(&pressed(&[Action::Up]));
        assert_eq!(snake.direction(), Direction::Up);
        snake.advance(40);
        assert_eq!(snake.head(), Position::new(10, 19));

        // Still holding Up: Right is a new press and turns.
        snake.set_direction(&pressed(&[Action::Up, Action::Right]));
        assert_eq!(snake.direction(), Direction::Right);
        snake.advance(40);

        // Up held since before: no new edge, no turn.
        snake.set_direction(&pressed(&[Action::Up, Action::Right]));
        assert_eq!(snake.direction(), Direction::Right);

        // Release and press again.
        snake.set_direction(&pressed(&[]));
        snake.set_direction(&pressed(&[Action::Up]));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn quick_double_turn_cannot_reverse() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        // Up then Left inside one tick: Left is checked against the last
        // move (Right) and refused.
        snake.set_direction(&pressed(&[Action::Up]));
        snake.set_direction(&pressed(&[Action::Left]));
        assert_eq!(snake.direction(), Direction::Up);
        snake.advance(40);
        assert_eq!(snake.head(), Position::new(10, 19));
    }

    #[test]
    fn last_accepted_turn_before_tick_wins() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        snake.set_direction(&pressed(&[Action::Up]));
        snake.set_direction(&pressed(&[]));
        snake.set_direction(&pressed(&[Action::Down]));
        assert_eq!(snake.direction(), Direction::Down);
        assert!(snake.advance(40));
        assert_eq!(snake.head(), Position::new(10, 21));
    }

    #[test]
    fn growth_keeps_tail_for_grow_by_ticks() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        snake.grow_counter = 2;
        snake.advance(40);
        assert_eq!(snake.len(), 4);
        snake.advance(40);
        assert_eq!(snake.len(), 5);
        snake.advance(40);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.grow_counter(), 0);
    }

    #[test]
    fn wall_collision() {
        let mut snake = Snake::new(Position::new(39, 20), 3, 40, 2);
        let mut fruit = Entity::fruit(Position::new(5, 5));
        let mut mines = Vec::new();
        let mut score = 0;
        let mut rng = SimpleRng::new(1);
        let mut field = Field {
            width: 41,
            height: 41,
            fruit: &mut fruit,
            mines: &mut mines,
            score: &mut score,
            rng: &mut rng,
            mine_chance: 0.45,
        };
        let outcome = snake.update(40, &PressedSet::new(), &mut field);
        assert_eq!(outcome, MoveOutcome::Crashed(Collision::Wall));
        assert_eq!(snake.head(), Position::new(40, 20));
    }

    #[test]
    fn self_collision() {
        let mut snake = Snake::new(Position::new(10, 20), 5, 40, 2);
        let mut fruit = Entity::fruit(Position::new(30, 30));
        let mut mines = Vec::new();
        let mut score = 0;
        let mut rng = SimpleRng::new(1);
        let mut field = Field {
            width: 41,
            height: 41,
            fruit: &mut fruit,
            mines: &mut mines,
            score: &mut score,
            rng: &mut rng,
            mine_chance: 0.45,
        };

        // Down, Left, Up: the head walks into the segment behind it.
        let none = PressedSet::new();
        assert_eq!(
            snake.update(40, &pressed(&[Action::Down]), &mut field),
            MoveOutcome::Moved
        );
        snake.update(0, &none, &mut field);
        assert_eq!(
            snake.update(40, &pressed(&[Action::Left]), &mut field),
            MoveOutcome::Moved
        );
        snake.update(0, &none, &mut field);
        assert_eq!(
            snake.update(40, &pressed(&[Action::Up]), &mut field),
            MoveOutcome::Crashed(Collision::SelfBite)
        );
    }

    #[test]
    fn mine_collision() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        let mut fruit = Entity::fruit(Position::new(30, 30));
        let mut mines = vec![Entity::new(Position::new(11, 20), 0, 'o')];
        let mut score = 0;
        let mut rng = SimpleRng::new(1);
        let mut field = Field {
            width: 41,
            height: 41,
            fruit: &mut fruit,
            mines: &mut mines,
            score: &mut score,
            rng: &mut rng,
            mine_chance: 0.45,
        };
        assert_eq!(
            snake.update(40, &PressedSet::new(), &mut field),
            MoveOutcome::Crashed(Collision::Mine)
        );
    }

    #[test]
    fn eating_scores_grows_and_may_spawn_mine() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        let mut fruit = Entity::fruit(Position::new(11, 20));
        let mut mines = Vec::new();
        let mut score = 0;
        // Flavor index 1 (Apple), fruit to (20, 5), roll 0.2, mine at (7, 7).
        let mut rng = ScriptedRng::new()
            .ranges([1])
            .cell(20, 5)
            .units([0.2])
            .cell(7, 7);
        let mut field = Field {
            width: 41,
            height: 41,
            fruit: &mut fruit,
            mines: &mut mines,
            score: &mut score,
            rng: &mut rng,
            mine_chance: 0.45,
        };

        let outcome = snake.update(40, &PressedSet::new(), &mut field);
        assert_eq!(outcome, MoveOutcome::Ate { flavor: "Apple" });
        assert_eq!(snake.grow_counter(), 2);
        assert_eq!(fruit.pos, Position::new(20, 5));
        assert_eq!(score, 5);
        assert_eq!(mines.len(), 1);
        assert_eq!(mines[0].pos, Position::new(7, 7));
    }

    #[test]
    fn failed_roll_spawns_no_mine() {
        let mut snake = Snake::new(Position::new(10, 20), 3, 40, 2);
        let mut fruit = Entity::fruit(Position::new(11, 20));
        let mut mines = Vec::new();
        let mut score = 0;
        let mut rng = ScriptedRng::new().ranges([0]).cell(20, 5).units([0.45]);
        let mut field = Field {
            width: 41,
            height: 41,
            fruit: &mut fruit,
            mines: &mut mines,
            score: &mut score,
            rng: &mut rng,
            mine_chance: 0.45,
        };

        let outcome = snake.update(40, &PressedSet::new(), &mut field);
        assert_eq!(outcome, MoveOutcome::Ate { flavor: "Blueberry" });
        assert!(mines.is_empty());
        assert_eq!(score, 5);
    }
}
