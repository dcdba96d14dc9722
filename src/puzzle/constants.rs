// Board geometry and timing constants, in terminal cells and milliseconds

use ratatui::style::Color;

/// Number of disks in a fresh game
pub const DISK_COUNT: usize = 6;

/// Number of pegs; fixed
pub const PEG_COUNT: usize = 3;

/// Peg indices for the three roles in a solve
pub const SOURCE_PEG: usize = 0;
pub const AUXILIARY_PEG: usize = 1;
pub const DESTINATION_PEG: usize = 2;

/// Logical board size. The UI centres this grid in whatever space it has.
pub const BOARD_WIDTH: u16 = 64;
pub const BOARD_HEIGHT: u16 = 10;

/// Horizontal centre of each peg
pub const PEG_ANCHORS: [i32; PEG_COUNT] = [12, 32, 52];

/// Row holding the peg bases; the bottom disk sits directly above it
pub const BASE_ROW: i32 = 9;

/// Top row of each pole
pub const POLE_TOP_ROW: i32 = 1;

/// Half-width of a peg base, in cells
pub const BASE_HALF_WIDTH: i32 = 9;

/// Rows between successive disks in a stack
pub const DISK_PITCH: i32 = 1;

/// Height of every disk, in rows
pub const DISK_HEIGHT: i32 = 1;

/// A drop lands on a peg when the pointer is strictly closer than this
pub const DROP_THRESHOLD: i32 = 10;

/// Automatic playback interval bounds and step
pub const MIN_AUTO_INTERVAL_MS: u64 = 100;
pub const MAX_AUTO_INTERVAL_MS: u64 = 2000;
pub const AUTO_INTERVAL_STEP_MS: u64 = 100;
pub const DEFAULT_AUTO_INTERVAL_MS: u64 = 500;

/// Disk colors, handed out largest disk first
pub const DISK_PALETTE: [Color; 6] = [
    Color::Rgb(243, 139, 168), // Red
    Color::Rgb(137, 180, 250), // Blue
    Color::Rgb(166, 227, 161), // Green
    Color::Rgb(249, 226, 175), // Yellow
    Color::Rgb(203, 166, 247), // Purple
    Color::Rgb(250, 179, 135), // Orange
];
