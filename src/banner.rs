//! Fixed text of the ZUR example package

/// Decorative frame printed at the top of every run
pub const BANNER: [&str; 4] = [
    "╔════════════════════════════════════════╗",
    "║     Welcome to ZynqOS!                 ║",
    "║     Hello from ZynqOS User Repository  ║",
    "╚════════════════════════════════════════╝",
];

/// Lines describing this package
pub const DESCRIPTION: [&str; 2] = [
    "This is an example package from ZUR (ZynqOS User Repository)",
    "Similar to AUR (Arch User Repository)",
];
