// Session constants
pub const STARTING_BALANCE: u64 = 100;

// Save system constants
pub const SAVE_VERSION_MAGIC: u64 = 0x5245454C53563100; // "REELSV1\0" in hex

// Event polling interval for the main loop
pub const POLL_INTERVAL_MS: u64 = 50;

// Reel animation timing
pub const REEL_CYCLE_MS: u128 = 80; // how fast a spinning reel flips faces
pub const REEL_SETTLE_MS: u128 = 700; // when the first reel locks in
pub const REEL_STAGGER_MS: u128 = 450; // extra delay per subsequent reel
