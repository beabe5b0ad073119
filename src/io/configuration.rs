//! Assembly constants and runtime configuration defaults

// Demonstration scenario defaults
/// First CRT tile set parameter
pub const DEFAULT_CRT_P: u64 = 2;
/// Second CRT tile set parameter, coprime with the first
pub const DEFAULT_CRT_Q: u64 = 11;
/// Edge length of the L-shaped boundary seed
pub const DEFAULT_SEED_SIZE: usize = 20;
/// Bonds required before a position can grow
pub const DEFAULT_THRESHOLD: usize = 2;

// Boundary seed glues
/// East glue of the tiles along the west edge
pub const WEST_EDGE_GLUE: &str = "0";
/// North glue of the corner tile below the origin
pub const CORNER_GLUE: &str = "1";
/// North glue of the remaining tiles along the south edge
pub const SOUTH_EDGE_GLUE: &str = "0";

// Image export settings
/// Side of one tile in exported pixels
pub const DEFAULT_TILE_PIXELS: u32 = 4;
/// Upper bound on the tile pixel size
pub const MAX_TILE_PIXELS: u32 = 64;
/// Largest exported image, in pixels
pub const MAX_EXPORT_PIXELS: u64 = 1 << 26;
/// Color of tiles whose pattern is not a tile type (seed boundary)
pub const SEED_COLOR: [u8; 4] = [40, 40, 40, 255];
/// Color of empty cells in animation frames
pub const EMPTY_COLOR: [u8; 4] = [250, 250, 250, 255];
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Hold time of the last GIF frame, as a multiple of the frame delay
pub const GIF_FINAL_FRAME_FACTOR: u32 = 25;

// Progress display
/// Spinner refresh interval
pub const SPINNER_TICK_MS: u64 = 100;
