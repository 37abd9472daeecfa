/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // seconds

impl Time {
    pub const ZERO: Time = Time(0.0);

    pub fn seconds(self) -> f64 {
        self.0
    }

    pub fn advanced_by(self, dt_s: f64) -> Self {
        Time(self.0 + dt_s.max(0.0))
    }
}
