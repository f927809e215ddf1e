pub mod rng;
pub mod selection;
pub mod timer;
