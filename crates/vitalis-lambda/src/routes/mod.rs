pub mod assess;
pub mod calculators;
pub mod health;
pub mod predict;
