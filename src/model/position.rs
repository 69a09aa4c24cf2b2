use std::fmt;

/// A configuration value that remembers whether it was supplied explicitly
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting<T> {
    Default(T),
    Overridden(T),
}

impl<T: Copy> Setting<T> {
    pub fn value(&self) -> T {
        match *self {
            Setting::Default(v) | Setting::Overridden(v) => v,
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, Setting::Overridden(_))
    }

    /// Apply `f` to a default value; overridden values are kept verbatim
    pub fn map_default(self, f: impl FnOnce(T) -> T) -> Self {
        match self {
            Setting::Default(v) => Setting::Default(f(v)),
            overridden => overridden,
        }
    }
}

/// Height and centre of an element, as percentages of the card size
///
/// Height and Y are relative to the card height, X to the card width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentagePosition {
    height: Setting<f32>,
    centre_x: Setting<f32>,
    centre_y: Setting<f32>,
}

impl PercentagePosition {
    pub const fn new(height: f32, centre_x: f32, centre_y: f32) -> Self {
        Self {
            height: Setting::Default(height),
            centre_x: Setting::Default(centre_x),
            centre_y: Setting::Default(centre_y),
        }
    }

    pub fn height(&self) -> f32 {
        self.height.value()
    }

    pub fn centre_x(&self) -> f32 {
        self.centre_x.value()
    }

    pub fn centre_y(&self) -> f32 {
        self.centre_y.value()
    }

    pub fn height_setting(&self) -> Setting<f32> {
        self.height
    }

    pub fn centre_x_setting(&self) -> Setting<f32> {
        self.centre_x
    }

    pub fn centre_y_setting(&self) -> Setting<f32> {
        self.centre_y
    }

    pub fn set_height(&mut self, v: f32) {
        self.height = Setting::Overridden(v);
    }

    pub fn set_centre_x(&mut self, v: f32) {
        self.centre_x = Setting::Overridden(v);
    }

    pub fn set_centre_y(&mut self, v: f32) {
        self.centre_y = Setting::Overridden(v);
    }

    /// Scale every field still at its default; overridden fields are left alone
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            height: self.height.map_default(|v| v * factor),
            centre_x: self.centre_x.map_default(|v| v * factor),
            centre_y: self.centre_y.map_default(|v| v * factor),
        }
    }

    /// Iterate over (name, value) pairs, used for validation messages
    pub fn fields(&self) -> [(&'static str, f32); 3] {
        [
            ("height", self.height()),
            ("centre x", self.centre_x()),
            ("centre y", self.centre_y()),
        ]
    }
}

impl fmt::Display for PercentagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t({}, {})",
            self.height(),
            self.centre_x(),
            self.centre_y()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_not_overridden() {
        let pos = PercentagePosition::new(10.5, 8.07, 9.84);
        assert_eq!(pos.height(), 10.5);
        assert!(!pos.height_setting().is_overridden());
        assert!(!pos.centre_x_setting().is_overridden());
        assert!(!pos.centre_y_setting().is_overridden());
    }

    #[test]
    fn test_override_is_tracked_per_field() {
        let mut pos = PercentagePosition::new(10.5, 8.07, 9.84);
        pos.set_centre_y(20.0);
        assert_eq!(pos.centre_y(), 20.0);
        assert!(pos.centre_y_setting().is_overridden());
        assert!(!pos.height_setting().is_overridden());
    }

    #[test]
    fn test_override_with_same_value_still_counts() {
        let mut pos = PercentagePosition::new(10.0, 5.0, 5.0);
        pos.set_height(10.0);
        assert_eq!(pos.height_setting(), Setting::Overridden(10.0));
    }

    #[test]
    fn test_scaled_only_touches_defaults() {
        let mut pos = PercentagePosition::new(10.0, 20.0, 30.0);
        pos.set_centre_x(4.0);
        let scaled = pos.scaled(0.5);
        assert_eq!(scaled.height(), 5.0);
        assert_eq!(scaled.centre_x(), 4.0);
        assert_eq!(scaled.centre_y(), 15.0);
    }

    #[test]
    fn test_display() {
        let pos = PercentagePosition::new(7.5, 8.25, 20.5);
        assert_eq!(pos.to_string(), "7.5\t(8.25, 20.5)");
    }
}
