pub mod generator;
pub mod view;
