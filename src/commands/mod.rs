//! Command implementations for revisor

pub mod dispatch;
pub mod evaluate;
pub mod export;
pub mod rubric;
pub mod seed;
