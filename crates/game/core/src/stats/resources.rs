//! Resource pools (HP, MP).
//!
//! A [`ResourceMeter`] pairs a current value with its maximum and only
//! exposes clamped mutations, so `0 <= current <= maximum` holds after every
//! operation.

/// Enum representing individual resource types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// Health points.
    #[strum(serialize = "HP")]
    Hp,
    /// Magic points (mana).
    #[strum(serialize = "MP")]
    Mp,
}

/// Current and maximum value of a resource pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub const fn new(current: u32, maximum: u32) -> Self {
        let current = if current > maximum { maximum } else { current };
        Self { current, maximum }
    }

    /// Creates a full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, returning how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let drained = amount.min(self.current);
        self.current -= drained;
        drained
    }

    /// Adds up to `amount` without exceeding the maximum, returning the gain.
    pub fn fill(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.maximum - self.current);
        self.current += gained;
        gained
    }

    /// Removes exactly `amount` or nothing at all.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Raises the maximum by `amount`, leaving the current value untouched.
    pub fn grow(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
    }

    /// Sets the current value to the maximum.
    pub fn refill(&mut self) {
        self.current = self.maximum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_current_to_maximum() {
        let meter = ResourceMeter::new(150, 100);
        assert_eq!(meter.current(), 100);
        assert_eq!(meter.maximum(), 100);
    }

    #[test]
    fn drain_and_fill_report_clamped_deltas() {
        let mut meter = ResourceMeter::new(30, 100);
        assert_eq!(meter.drain(50), 30);
        assert!(meter.is_empty());
        assert_eq!(meter.fill(250), 100);
        assert_eq!(meter.current(), meter.maximum());
    }

    #[test]
    fn try_spend_is_all_or_nothing() {
        let mut meter = ResourceMeter::new(10, 30);
        assert!(!meter.try_spend(11));
        assert_eq!(meter.current(), 10);
        assert!(meter.try_spend(10));
        assert_eq!(meter.current(), 0);
    }
}
