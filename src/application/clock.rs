use chrono::{Local, NaiveDate};

/// Source of "today" for booking validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The local calendar date at call time
    #[default]
    System,
    /// A pinned date, for tests and reproducible sessions
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(Clock::Fixed(date).today(), date);
    }

    #[test]
    fn test_system_clock_follows_local_date() {
        let before = Local::now().date_naive();
        let today = Clock::System.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
