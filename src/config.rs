use crate::error::FareError;
use crate::fare_class::FareClass;
use crate::time::ClockTime;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Hours `from_hour..=to_hour` during which departures cost `surcharge` more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PeakWindow {
    pub from_hour: u32,
    pub to_hour: u32,
    pub surcharge: u32,
}

impl PeakWindow {
    pub fn contains(&self, time: ClockTime) -> bool {
        (self.from_hour..=self.to_hour).contains(&time.hour())
    }
}

/// Parameters of the fare generator. Ranges are half-open `[low, high)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub departure_slots: Vec<ClockTime>,
    pub base_price: (u32, u32),
    pub duration_minutes: (u32, u32),
    pub jitter: (i32, i32),
    pub morning_peak: PeakWindow,
    pub evening_peak: PeakWindow,
    pub availability: f64,
    pub search_delay_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let slot = |h: u32, m: u32| ClockTime::from_minutes(h * 60 + m);
        GeneratorConfig {
            departure_slots: vec![
                slot(6, 15),
                slot(7, 30),
                slot(9, 45),
                slot(11, 20),
                slot(13, 0),
                slot(14, 30),
                slot(16, 15),
                slot(17, 45),
                slot(19, 30),
                slot(21, 0),
            ],
            base_price: (30, 70),
            duration_minutes: (90, 180),
            jitter: (-10, 10),
            morning_peak: PeakWindow {
                from_hour: 7,
                to_hour: 9,
                surcharge: 15,
            },
            evening_peak: PeakWindow {
                from_hour: 16,
                to_hour: 19,
                surcharge: 12,
            },
            availability: 0.9,
            search_delay_ms: 1000,
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, FareError> {
        let data = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FareError> {
        let invalid = |msg: &str| Err(FareError::InvalidConfig(msg.to_string()));
        if self.departure_slots.is_empty() {
            return invalid("departure_slots must not be empty");
        }
        let distinct: HashSet<ClockTime> = self.departure_slots.iter().copied().collect();
        if distinct.len() != self.departure_slots.len() {
            return invalid("departure_slots must not repeat");
        }
        if self.base_price.0 >= self.base_price.1 {
            return invalid("base_price range is empty");
        }
        if self.duration_minutes.0 >= self.duration_minutes.1 {
            return invalid("duration_minutes range is empty");
        }
        if self.jitter.0 >= self.jitter.1 {
            return invalid("jitter range is empty");
        }
        if !(0.0..=1.0).contains(&self.availability) {
            return invalid("availability must be within 0..=1");
        }
        Ok(())
    }

    pub fn batch_size(&self) -> usize {
        self.departure_slots.len() * FareClass::ALL.len()
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}
