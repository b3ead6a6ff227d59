/// Compass-angle conversions shared by the path and Doppler computations.
///
/// Both ships describe their motion in compass terms (degrees clockwise from
/// North); all kinematics run in a Cartesian frame (radians counter-clockwise
/// from +X). Inputs outside [0, 360) wrap through sine/cosine periodicity.
pub struct CompassHelper;

impl CompassHelper {
    pub fn to_radians(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Convert a compass bearing to the equivalent Cartesian angle.
    pub fn bearing_to_cartesian(bearing_deg: f64) -> f64 {
        Self::to_radians(90.0 - bearing_deg)
    }

    /// Decompose a course/speed pair into Cartesian velocity components.
    pub fn velocity_components(course_deg: f64, speed: f64) -> (f64, f64) {
        let angle = Self::bearing_to_cartesian(course_deg);
        (speed * angle.cos(), speed * angle.sin())
    }
}
