//! Shared vocabulary for the brickfall engine.
//!
//! Everything here is plain data with no dependencies, so the same types can be
//! used by the deterministic core, the runtime collaborators and the terminal
//! front end.
//!
//! # Geometry
//!
//! - **Grid**: 25 rows x 10 columns, indexed `[row][col]`, row 0 at the top
//! - **Hidden rows**: the top 2 rows are an off-screen spawn buffer; they are part
//!   of collision space but never rendered
//! - **Spawn origin**: row 0, column 4
//! - **Shapes**: every rotation state is a 4x4 matrix of color ids
//!
//! # Speed curve
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 400ms |
//! | 2 | 370ms |
//! | 5 | 280ms |
//! | 11+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use brickfall_types::{BrickKind, Intent, Status, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(BrickKind::from_str("t"), Some(BrickKind::T));
//! assert_eq!(BrickKind::T.color_id(), 6);
//!
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//! assert!(Status::Playing.can_accept_input());
//!
//! assert_eq!(BOARD_ROWS, 25);
//! assert_eq!(BOARD_COLS, 10);
//! ```

/// Grid height in rows, including the hidden spawn buffer.
pub const BOARD_ROWS: usize = 25;

/// Grid width in columns.
pub const BOARD_COLS: usize = 10;

/// Rows at the top of the grid that are never rendered.
pub const HIDDEN_ROWS: usize = 2;

/// Row of the origin of a freshly spawned piece.
pub const SPAWN_ROW: i8 = 0;

/// Column of the origin of a freshly spawned piece.
pub const SPAWN_COL: i8 = 4;

/// Side length of a shape matrix.
pub const SHAPE_SIZE: usize = 4;

/// Number of upcoming kinds the brick queue keeps buffered.
pub const QUEUE_LEN: usize = 3;

/// Number of upcoming kinds exposed as a preview.
pub const PREVIEW_LEN: usize = 2;

/// Cumulative lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Automatic descent interval at level 1.
pub const BASE_SPEED_MS: u32 = 400;

/// Interval reduction per level.
pub const SPEED_STEP_MS: u32 = 30;

/// Fastest automatic descent interval.
pub const MIN_SPEED_MS: u32 = 100;

/// Line clear bonus is `LINE_CLEAR_BASE * lines^2`.
pub const LINE_CLEAR_BASE: u32 = 50;

/// Points for a user-sourced downward step.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Line target used when sprint mode is selected without an explicit target.
pub const DEFAULT_SPRINT_LINES: u32 = 40;

/// Locked cells. `0` is empty, `1..=7` is the color id of the kind that locked there.
pub type Grid = [[u8; BOARD_COLS]; BOARD_ROWS];

/// One rotation state of a piece, indexed `[row][col]`.
pub type ShapeMatrix = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

/// An all-zero shape, used to pad previews.
pub const EMPTY_SHAPE: ShapeMatrix = [[0; SHAPE_SIZE]; SHAPE_SIZE];

/// The seven piece kinds, in color-id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl BrickKind {
    /// All kinds, ordered by color id.
    pub const ALL: [BrickKind; 7] = [
        BrickKind::I,
        BrickKind::J,
        BrickKind::L,
        BrickKind::O,
        BrickKind::S,
        BrickKind::T,
        BrickKind::Z,
    ];

    /// Cell value written into the grid when this kind locks.
    ///
    /// ```
    /// use brickfall_types::BrickKind;
    ///
    /// assert_eq!(BrickKind::I.color_id(), 1);
    /// assert_eq!(BrickKind::Z.color_id(), 7);
    /// ```
    pub fn color_id(&self) -> u8 {
        match self {
            BrickKind::I => 1,
            BrickKind::J => 2,
            BrickKind::L => 3,
            BrickKind::O => 4,
            BrickKind::S => 5,
            BrickKind::T => 6,
            BrickKind::Z => 7,
        }
    }

    /// Inverse of [`BrickKind::color_id`]. Returns `None` for `0` and unknown ids.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a kind from its letter (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(BrickKind::I),
            "j" => Some(BrickKind::J),
            "l" => Some(BrickKind::L),
            "o" => Some(BrickKind::O),
            "s" => Some(BrickKind::S),
            "t" => Some(BrickKind::T),
            "z" => Some(BrickKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::I => "i",
            BrickKind::J => "j",
            BrickKind::L => "l",
            BrickKind::O => "o",
            BrickKind::S => "s",
            BrickKind::T => "t",
            BrickKind::Z => "z",
        }
    }
}

/// A request to change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    NewGame,
    /// Toggle between playing and paused.
    Pause,
}

impl Intent {
    /// Parse an intent from its camelCase name.
    ///
    /// ```
    /// use brickfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("nope"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveLeft" => Some(Intent::MoveLeft),
            "moveRight" => Some(Intent::MoveRight),
            "moveDown" => Some(Intent::MoveDown),
            "rotate" => Some(Intent::Rotate),
            "hardDrop" => Some(Intent::HardDrop),
            "newGame" => Some(Intent::NewGame),
            "pause" => Some(Intent::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::MoveDown => "moveDown",
            Intent::Rotate => "rotate",
            Intent::HardDrop => "hardDrop",
            Intent::NewGame => "newGame",
            Intent::Pause => "pause",
        }
    }
}

/// Who issued an intent. Only a user-sourced `MoveDown` earns points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    User,
    Timer,
}

/// Win/loss rules, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Play until the spawn area is blocked.
    #[default]
    Endless,
    /// Win once cumulative cleared lines reach `target_lines`.
    Sprint { target_lines: u32 },
}

impl GameMode {
    pub fn sprint_target(&self) -> Option<u32> {
        match self {
            GameMode::Endless => None,
            GameMode::Sprint { target_lines } => Some(*target_lines),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Endless => "endless",
            GameMode::Sprint { .. } => "sprint",
        }
    }
}

/// Session lifecycle state.
///
/// `GameOver` and `Won` are absorbing: only a new game leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Paused,
    GameOver,
    Won,
}

impl Status {
    /// Whether timer-sourced descent should be applied.
    pub fn can_process_tick(&self) -> bool {
        matches!(self, Status::Playing)
    }

    /// Whether user movement intents should be applied.
    pub fn can_accept_input(&self) -> bool {
        matches!(self, Status::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::GameOver | Status::Won)
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Status::Playing => "Playing",
            Status::Paused => "Paused",
            Status::GameOver => "Game Over",
            Status::Won => "Won",
        }
    }
}
