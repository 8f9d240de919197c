//! Vehicle state shared by the player and opponents.

/// A vehicle occupying a discrete lane and a longitudinal segment of track.
///
/// The same record describes the player and every opponent. `position` is a
/// scalar along the track's longitudinal axis; larger means further ahead.
/// The vehicle extends `length / 2` to either side of its center.
///
/// # Examples
///
/// ```
/// use chicane_core::Car;
///
/// let car = Car::new(1, 12.0);
/// assert_eq!(car.lane_index, 1);
/// assert_eq!(car.length, Car::DEFAULT_LENGTH);
/// assert_eq!(car.half_length(), Car::DEFAULT_LENGTH / 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Car {
    /// Which lane the vehicle occupies. Always within the owning world's
    /// configured lane range.
    pub lane_index: usize,
    /// Center position along the track's longitudinal axis.
    pub position: f64,
    /// Longitudinal extent of the vehicle. Finite and strictly positive.
    pub length: f64,
}

impl Car {
    /// Default vehicle length.
    pub const DEFAULT_LENGTH: f64 = 4.2;

    /// Create a vehicle of default length.
    pub fn new(lane_index: usize, position: f64) -> Self {
        Self::with_length(lane_index, position, Self::DEFAULT_LENGTH)
    }

    /// Create a vehicle with an explicit length.
    pub fn with_length(lane_index: usize, position: f64, length: f64) -> Self {
        Self {
            lane_index,
            position,
            length,
        }
    }

    /// Half the vehicle's longitudinal extent.
    pub fn half_length(&self) -> f64 {
        self.length * 0.5
    }

    /// Check structural invariants: finite position, finite positive length.
    ///
    /// Lane range is not checked here; only the owning world knows its
    /// lane count.
    pub fn validate(&self) -> Result<(), String> {
        if !self.position.is_finite() {
            return Err(format!("position must be finite, got {}", self.position));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(format!(
                "length must be finite and positive, got {}",
                self.length
            ));
        }
        Ok(())
    }
}
