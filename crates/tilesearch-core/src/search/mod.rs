pub mod astar;
pub mod closed;
pub mod domain;
pub mod error;
pub mod heap;
pub mod ids;

#[cfg(test)]
mod tests;
