pub mod compass;

pub use compass::CompassHelper;
