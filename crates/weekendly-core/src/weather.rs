//! Weather input for the advisor and recommendation scoring.
//!
//! Codes follow the WMO weather interpretation table used by the
//! Open-Meteo daily forecast: 0-1 is clear sky, 51 and above covers
//! drizzle, rain, snow, and thunderstorms. Codes in between (fog,
//! overcast) are neither clear nor adverse.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Day;

/// A WMO daily weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeatherCode(pub u8);

impl WeatherCode {
    /// Lowest code treated as adverse (drizzle and worse).
    pub const ADVERSE_MIN: u8 = 51;
    /// Highest code treated as clear sky.
    pub const CLEAR_MAX: u8 = 1;

    /// Rain, snow, or storms: indoor plans are the safer bet.
    pub fn is_adverse(self) -> bool {
        self.0 >= Self::ADVERSE_MIN
    }

    /// Clear sky: a good day to be outside.
    pub fn is_clear(self) -> bool {
        self.0 <= Self::CLEAR_MAX
    }
}

/// Per-day weather lookup. Absence means "unknown", which counts as
/// neither adverse nor clear.
pub trait WeatherSource {
    fn weather_for(&self, day: Day) -> Option<WeatherCode>;
}

/// Simple map-backed weather source for hosts that poll a forecast API
/// and push the result in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherByDay(BTreeMap<Day, WeatherCode>);

impl WeatherByDay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, day: Day, code: WeatherCode) {
        self.0.insert(day, code);
    }

    pub fn clear(&mut self, day: Day) {
        self.0.remove(&day);
    }
}

impl FromIterator<(Day, WeatherCode)> for WeatherByDay {
    fn from_iter<I: IntoIterator<Item = (Day, WeatherCode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl WeatherSource for WeatherByDay {
    fn weather_for(&self, day: Day) -> Option<WeatherCode> {
        self.0.get(&day).copied()
    }
}

/// A source with no data at all; every day reads as unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWeather;

impl WeatherSource for NoWeather {
    fn weather_for(&self, _day: Day) -> Option<WeatherCode> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_classification_boundaries() {
        assert!(WeatherCode(0).is_clear());
        assert!(WeatherCode(1).is_clear());
        assert!(!WeatherCode(2).is_clear());
        assert!(!WeatherCode(45).is_adverse());
        assert!(WeatherCode(51).is_adverse());
        assert!(WeatherCode(95).is_adverse());
    }

    #[test]
    fn missing_days_read_as_unknown() {
        let mut weather = WeatherByDay::new();
        weather.set(Day::Saturday, WeatherCode(61));
        assert_eq!(weather.weather_for(Day::Saturday), Some(WeatherCode(61)));
        assert_eq!(weather.weather_for(Day::Sunday), None);
    }
}
