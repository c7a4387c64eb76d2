//! Pure data structures mirroring the restaurant and order service wire formats.

pub mod order;
pub mod restaurant;

pub use order::*;
pub use restaurant::*;
