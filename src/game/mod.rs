mod direction;
mod food;
mod grid;
mod obstacles;
mod snake;
mod speed;
pub(crate) use self::direction::Direction;
use self::food::Food;
pub(crate) use self::grid::{Grid, Position};
use self::obstacles::ObstacleSet;
use self::snake::{Snake, Step};
pub(crate) use self::speed::TickRate;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use log::{debug, info, warn};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use std::time::Duration;

/// The complete state of a running game: the snake, the food, the rocks, and
/// the counters that drive rock spawning and game speed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    obstacles: ObstacleSet,
    /// Pieces of food eaten since the snake last (re)started
    eaten: u32,
    speed: TickRate,
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    Alive,
    /// The snake ran into itself and was restarted
    SelfCollision,
    /// The snake ran into a rock and was restarted
    ObstacleCollision,
}

/// What a cell on the field should be drawn as
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CellRole {
    Background,
    SnakeBody,
    SnakeHead,
    Food,
    Obstacle,
}

impl CellRole {
    pub(crate) fn style(self) -> Style {
        match self {
            CellRole::Background => consts::BACKGROUND_STYLE,
            CellRole::SnakeBody => consts::SNAKE_BODY_STYLE,
            CellRole::SnakeHead => consts::SNAKE_HEAD_STYLE,
            CellRole::Food => consts::FOOD_STYLE,
            CellRole::Obstacle => consts::OBSTACLE_STYLE,
        }
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(mut rng: R) -> Game<R> {
        let grid = consts::GRID;
        let snake = Snake::new(grid.center(), Direction::Right);
        let mut food = Food::new(grid.center());
        food.randomize_position(grid, &mut rng, |p| snake.occupies(p));
        Game {
            rng,
            grid,
            snake,
            food,
            obstacles: ObstacleSet::new(),
            eaten: 0,
            speed: TickRate::default(),
        }
    }

    /// Advance the game by one step: move the snake, then deal with whatever
    /// it ran into
    pub(crate) fn tick(&mut self) -> Tick {
        let length = self.snake.len();
        if self.snake.advance(self.grid, &mut self.rng) == Step::Collided {
            info!(
                "Snake of length {length} ran into itself; restarting facing {:?}",
                self.snake.direction()
            );
            self.clear_progress();
            return Tick::SelfCollision;
        }
        let head = self.snake.head();
        if head == self.food.position() {
            self.snake.grow(head);
            self.eaten += 1;
            debug!(
                "Ate food at ({}, {}); length is now {}",
                head.x,
                head.y,
                self.snake.len()
            );
            self.place_food();
            if self.eaten.is_multiple_of(consts::OBSTACLE_CADENCE) {
                self.spawn_obstacle();
            }
        }
        if self.snake.occupies(self.food.position()) {
            self.place_food();
        }
        if self.obstacles.contains(head) {
            info!(
                "Snake of length {} hit a rock at ({}, {}); restarting",
                self.snake.len(),
                head.x,
                head.y
            );
            self.restart_snake();
            return Tick::ObstacleCollision;
        }
        Tick::Alive
    }

    /// Move the food to a random cell not occupied by the snake or a rock
    fn place_food(&mut self) {
        let Game {
            grid,
            rng,
            snake,
            food,
            obstacles,
            ..
        } = self;
        if !food.randomize_position(*grid, rng, |p| {
            snake.occupies(p) || obstacles.contains(p)
        }) {
            warn!("No free cell left for the food");
        }
    }

    /// Drop a rock on a random cell not occupied by the snake, the food, or
    /// another rock
    fn spawn_obstacle(&mut self) {
        let Game {
            grid,
            rng,
            snake,
            food,
            obstacles,
            eaten,
            ..
        } = self;
        let food_pos = food.position();
        let spot = grid.find_free_cell(rng, |p| {
            snake.occupies(p) || p == food_pos || obstacles.contains(p)
        });
        if let Some(pos) = spot {
            obstacles.spawn_at(pos);
            info!(
                "Rock #{} placed at ({}, {}) after {} pieces of food",
                obstacles.len(),
                pos.x,
                pos.y,
                eaten
            );
        } else {
            warn!("No free cell left for a rock");
        }
    }

    /// Put the snake back at the start and forget all progress
    fn restart_snake(&mut self) {
        self.snake.reset(&mut self.rng);
        self.clear_progress();
    }
}

impl<R> Game<R> {
    /// Clear the rocks & the eaten-food counter.  Done on every restart of
    /// the snake, whatever it ran into.
    fn clear_progress(&mut self) {
        if !self.obstacles.is_empty() {
            debug!("Clearing {} rocks", self.obstacles.len());
        }
        self.obstacles.clear();
        self.eaten = 0;
    }

    /// Ask the snake to turn at the start of the next tick
    pub(crate) fn turn(&mut self, direction: Direction) {
        self.snake.set_pending_direction(direction);
    }

    pub(crate) fn faster(&mut self) {
        if self.speed.increase() {
            info!("Speed raised to {}", self.speed);
        }
    }

    pub(crate) fn slower(&mut self) {
        if self.speed.decrease() {
            info!("Speed lowered to {}", self.speed);
        }
    }

    pub(crate) fn tick_period(&self) -> Duration {
        self.speed.period()
    }

    pub(crate) fn speed(&self) -> TickRate {
        self.speed
    }

    pub(crate) fn eaten(&self) -> u32 {
        self.eaten
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Food {
        self.food
    }

    pub(crate) fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Everything that needs drawing this frame.  The cell most recently
    /// vacated by the snake's tail comes first so that anything now occupying
    /// it is drawn over it, and the snake's head comes last.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, CellRole)> + '_ {
        self.snake
            .last_vacated()
            .map(|p| (p, CellRole::Background))
            .into_iter()
            .chain(self.obstacles.iter().map(|p| (p, CellRole::Obstacle)))
            .chain(std::iter::once((self.food().position(), CellRole::Food)))
            .chain(self.snake.body().map(|p| (p, CellRole::SnakeBody)))
            .chain(std::iter::once((self.snake.head(), CellRole::SnakeHead)))
    }

    fn symbol(&self, role: CellRole) -> char {
        match role {
            CellRole::Background => consts::BACKGROUND_SYMBOL,
            CellRole::SnakeBody => consts::SNAKE_BODY_SYMBOL,
            CellRole::SnakeHead => self.snake.head_symbol(),
            CellRole::Food => consts::FOOD_SYMBOL,
            CellRole::Obstacle => consts::OBSTACLE_SYMBOL,
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, field_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Length: {}  Eaten: {}  Rocks: {}  Speed: {}",
                self.snake().len(),
                self.eaten(),
                self.obstacles().len(),
                self.speed()
            ),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let block_size = Size {
            width: self.grid.columns().saturating_add(2),
            height: self.grid.rows().saturating_add(2),
        };
        let block_area = center_rect(field_area, block_size);
        Block::bordered()
            .border_style(consts::BORDER_STYLE)
            .render(block_area, buf);

        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for (pos, role) in self.cells() {
            if let Some((col, row)) = self.grid.cell_of(pos) {
                field.draw_cell(col, row, self.symbol(role), role.style());
            }
        }

        Line::from_iter([
            Span::raw(" Move ("),
            Span::styled("←↓↑→", consts::KEY_STYLE),
            Span::raw(")  Speed ("),
            Span::styled("+", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("-", consts::KEY_STYLE),
            Span::raw(")  Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(help_area, buf);
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, col: u16, row: u16, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if x >= self.area.right() || y >= self.area.bottom() {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
