pub mod approach;
pub mod doppler;
pub mod paths;

pub use approach::{closest_point_of_approach, ApproachSummary};
pub use doppler::{compute_spectrogram, SPEED_OF_SOUND_IN_WATER};
pub use paths::compute_paths;
