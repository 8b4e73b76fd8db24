pub mod assessment;
pub mod attributes;
pub mod factors;
pub mod lenient;
pub mod life_expectancy;
pub mod risk;
