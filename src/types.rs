//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board pixel bounds (square play area, in layout pixels)
pub const BOARD_SIZE_PX: i32 = 450;

/// Piece footprint in layout pixels
pub const PIECE_SIZE_PX: i32 = 50;

/// Inset from the board edge when sampling stack placements
pub const BOARD_MARGIN_PX: i32 = 20;

/// Cascade offset applied to each exposed piece of a stack
pub const REVEAL_OFFSET_PX: i32 = 12;

/// Default board shape
pub const STACK_COUNT: usize = 9;
pub const MAX_STACK_HEIGHT: usize = 6;

/// Holding bar capacity; filling it past this is a loss
pub const BAR_MAX_LENGTH: usize = 7;

/// Backing storage ceiling for the bar (configs may use any capacity up to this)
pub const BAR_CAPACITY_LIMIT: usize = 16;

/// Weighted deck generation: the first `FAVORED_TYPE_COUNT` types supply
/// `FAVORED_SHARE` of the deck
pub const FAVORED_TYPE_COUNT: usize = 6;
pub const FAVORED_SHARE: f64 = 0.75;

/// Placement retries per stack before layout is declared unsatisfiable
pub const PLACEMENT_ATTEMPT_LIMIT: u32 = 200;

/// Render z-order stride; a stack's top piece draws above everything below it
pub const Z_ORDER_BASE: i32 = 1000;

/// Tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl PieceType {
    pub const COUNT: usize = 8;

    pub const ALL: [PieceType; Self::COUNT] = [
        PieceType::A,
        PieceType::B,
        PieceType::C,
        PieceType::D,
        PieceType::E,
        PieceType::F,
        PieceType::G,
        PieceType::H,
    ];

    /// Ordinal used for grouping and match scans (ascending type order)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse piece type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(PieceType::A),
            "b" => Some(PieceType::B),
            "c" => Some(PieceType::C),
            "d" => Some(PieceType::D),
            "e" => Some(PieceType::E),
            "f" => Some(PieceType::F),
            "g" => Some(PieceType::G),
            "h" => Some(PieceType::H),
            _ => None,
        }
    }

    /// Convert to display string
    pub fn as_str(self) -> &'static str {
        match self {
            PieceType::A => "A",
            PieceType::B => "B",
            PieceType::C => "C",
            PieceType::D => "D",
            PieceType::E => "E",
            PieceType::F => "F",
            PieceType::G => "G",
            PieceType::H => "H",
        }
    }
}

/// Player actions surfaced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SelectStack(usize),
    Reset,
    Quit,
}

/// Result of processing one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Continue,
    Won,
    Lost,
}

impl SelectOutcome {
    /// Terminal outcomes freeze the session until reset
    pub fn is_terminal(self) -> bool {
        !matches!(self, SelectOutcome::Continue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectOutcome::Continue => "continue",
            SelectOutcome::Won => "won",
            SelectOutcome::Lost => "lost",
        }
    }
}

/// Tunable parameters for one game session.
///
/// Defaults reproduce the standard board: 9 stacks of up to 6 pieces, 8 piece
/// types with the first 6 favored, and a 7-slot bar.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub stack_count: usize,
    pub max_stack_height: usize,
    pub piece_type_count: usize,
    pub favored_type_count: usize,
    pub favored_share: f64,
    pub bar_capacity: usize,
    pub board_size_px: i32,
    pub piece_size_px: i32,
    pub margin_px: i32,
    pub placement_attempt_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stack_count: STACK_COUNT,
            max_stack_height: MAX_STACK_HEIGHT,
            piece_type_count: PieceType::COUNT,
            favored_type_count: FAVORED_TYPE_COUNT,
            favored_share: FAVORED_SHARE,
            bar_capacity: BAR_MAX_LENGTH,
            board_size_px: BOARD_SIZE_PX,
            piece_size_px: PIECE_SIZE_PX,
            margin_px: BOARD_MARGIN_PX,
            placement_attempt_limit: PLACEMENT_ATTEMPT_LIMIT,
        }
    }
}

impl GameConfig {
    /// Number of pieces the board holds when full
    pub fn total_count(&self) -> usize {
        self.stack_count * self.max_stack_height
    }

    /// The piece types in play (first `piece_type_count` of the enumeration)
    pub fn piece_types(&self) -> &'static [PieceType] {
        &PieceType::ALL[..self.piece_type_count.min(PieceType::COUNT)]
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.stack_count == 0 {
            return Err("stack_count must be at least 1");
        }
        if self.max_stack_height == 0 {
            return Err("max_stack_height must be at least 1");
        }
        if self.piece_type_count == 0 || self.piece_type_count > PieceType::COUNT {
            return Err("piece_type_count must be in 1..=8");
        }
        if self.favored_type_count > self.piece_type_count {
            return Err("favored_type_count exceeds piece_type_count");
        }
        if !(0.0..=1.0).contains(&self.favored_share) {
            return Err("favored_share must be in [0, 1]");
        }
        if self.bar_capacity == 0 || self.bar_capacity > BAR_CAPACITY_LIMIT {
            return Err("bar_capacity must be in 1..=16");
        }
        if self.placement_attempt_limit == 0 {
            return Err("placement_attempt_limit must be at least 1");
        }
        if self.board_size_px - self.piece_size_px - self.margin_px <= self.margin_px {
            return Err("board bounds leave no room for placement");
        }
        Ok(())
    }
}
