pub mod input;
pub mod portfolio;

pub use input::UserInput;
pub use portfolio::{ExperienceEntry, GeneratedPortfolio};
