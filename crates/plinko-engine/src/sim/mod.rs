pub mod assign;
pub mod driver;
pub mod particle;
pub mod roster;
