use chrono::Duration;

/// Work rules the day model is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRules {
    /// Time that must actually be worked.
    pub required_work: Duration,
    /// Lunch length the schedule plans for.
    pub scheduled_lunch: Duration,
}

impl WorkRules {
    pub fn new(required_work: Duration, scheduled_lunch: Duration) -> Self {
        Self {
            required_work,
            scheduled_lunch,
        }
    }

    /// Length of a day whose lunch took exactly the scheduled time.
    /// Saturates instead of overflowing.
    pub fn day_span(&self) -> Duration {
        self.required_work
            .checked_add(&self.scheduled_lunch)
            .unwrap_or(if self.scheduled_lunch < Duration::zero() {
                Duration::MIN
            } else {
                Duration::MAX
            })
    }
}

impl Default for WorkRules {
    fn default() -> Self {
        Self::new(Duration::hours(8), Duration::hours(1))
    }
}

/// Thresholds used by the schedule validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub min_lead_before_lunch: Duration,
    pub min_lunch: Duration,
    pub max_lunch: Duration,
    pub max_day_span: Duration,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_lead_before_lunch: Duration::hours(1),
            min_lunch: Duration::minutes(15),
            max_lunch: Duration::hours(2),
            max_day_span: Duration::hours(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_span_adds_lunch_to_work() {
        assert_eq!(WorkRules::default().day_span(), Duration::hours(9));
    }

    #[test]
    fn day_span_saturates() {
        let rules = WorkRules::new(Duration::MAX, Duration::hours(1));
        assert_eq!(rules.day_span(), Duration::MAX);
    }
}
