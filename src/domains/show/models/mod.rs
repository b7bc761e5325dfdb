// Show domain models
pub mod schedule;
pub mod show;
pub mod venue;

pub use schedule::*;
pub use show::*;
pub use venue::*;
