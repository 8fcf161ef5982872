pub mod cv;
pub mod edit;
pub mod seed;
