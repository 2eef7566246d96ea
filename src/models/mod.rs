pub mod tags;
pub mod leaderboard;
pub mod wallet;

#[cfg(test)]
mod tests;

pub use tags::*;
pub use leaderboard::*;
pub use wallet::*;
