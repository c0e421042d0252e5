//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Fruits ---

/// Width and height of a fruit at round start (pixels).
pub const START_FRUIT_SIZE: f64 = 50.0;

/// Floor for fruit width and height under shrink (pixels).
pub const MIN_FRUIT_SIZE: f64 = 10.0;

/// Width and height gained per consumed target (pixels).
pub const GROWTH_INCREMENT: f64 = 10.0;

/// Movement speed per axis (pixels per tick).
pub const MOVE_SPEED: f64 = 5.0;

/// Shots each fruit may fire per round.
pub const MAX_SHOTS: u32 = 5;

// --- Targets ---

/// Width and height of a target pickup (pixels).
pub const TARGET_SIZE: f64 = 50.0;

// --- Projectiles ---

/// Projectile speed along its aim vector (pixels per tick).
pub const PROJECTILE_SPEED: f64 = 8.0;

/// Width and height of a projectile (pixels).
pub const PROJECTILE_SIZE: f64 = 10.0;

// --- Shrink ---

/// Width and height lost per projectile hit in PvP and PvAI rounds (pixels).
pub const SHRINK_AMOUNT_VERSUS: f64 = 5.0;

/// Width and height lost per projectile hit in AI exhibition rounds (pixels).
pub const SHRINK_AMOUNT_EXHIBITION: f64 = 2.0;

// --- Modes ---

/// Minimum AI opponents in a PvAI round.
pub const MIN_AI_OPPONENTS: u32 = 1;

/// Maximum AI opponents in a PvAI round.
pub const MAX_AI_OPPONENTS: u32 = 4;

/// Minimum fruits in an AI exhibition round.
pub const MIN_EXHIBITION_FRUITS: u32 = 2;

/// Maximum fruits in an AI exhibition round.
pub const MAX_EXHIBITION_FRUITS: u32 = 5;

// --- Wagering ---

/// Fraction of the pot withheld before payouts.
pub const TAX_RATE: f64 = 0.10;

// --- Display hints ---

/// Fruit tints by index (RGB). Sized for the largest round.
pub const PALETTE: [(u8, u8, u8); MAX_EXHIBITION_FRUITS as usize] = [
    (255, 0, 0),
    (0, 255, 0),
    (0, 128, 255),
    (255, 255, 0),
    (255, 0, 255),
];

/// Transparency hint for a fruit overlapping another fruit or its own target.
pub const OVERLAP_ALPHA: f64 = 0.5;

/// Transparency hint for an unobstructed fruit.
pub const FULL_ALPHA: f64 = 1.0;
