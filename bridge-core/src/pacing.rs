//! Zyklus-Taktung
//!
//! Die Periode zählt von Zyklus-Start zu Zyklus-Start. Die Wartezeit ist
//! `period - elapsed`. Dauert ein Zyklus länger als die Periode, startet der
//! nächste sofort; verpasste Takte werden nicht nachgeholt.

/// Entscheidung nach einem Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pace {
    /// Restliche Zeit bis zum nächsten Zyklus-Start
    Sleep { ms: u64 },
    /// Zyklus hat die Periode überschritten
    Overrun { late_by_ms: u64 },
}

impl Pace {
    /// Wartezeit in ms (0 bei Überlauf)
    pub fn wait_ms(self) -> u64 {
        match self {
            Pace::Sleep { ms } => ms,
            Pace::Overrun { .. } => 0,
        }
    }
}

/// Feste Zyklus-Periode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePacer {
    period_ms: u64,
}

impl CyclePacer {
    pub const fn new(period_ms: u64) -> Self {
        Self { period_ms }
    }

    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Berechnet die Wartezeit nach einem Zyklus der `elapsed_ms` gedauert hat
    pub fn pace(&self, elapsed_ms: u64) -> Pace {
        match self.period_ms.checked_sub(elapsed_ms) {
            Some(ms) => Pace::Sleep { ms },
            None => Pace::Overrun {
                late_by_ms: elapsed_ms - self.period_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_subtracts_processing_time() {
        let pacer = CyclePacer::new(500);
        assert_eq!(pacer.pace(0), Pace::Sleep { ms: 500 });
        assert_eq!(pacer.pace(12), Pace::Sleep { ms: 488 });
    }

    #[test]
    fn test_pace_exact_period() {
        let pacer = CyclePacer::new(500);
        assert_eq!(pacer.pace(500), Pace::Sleep { ms: 0 });
    }

    #[test]
    fn test_pace_overrun_clamps_to_zero() {
        let pacer = CyclePacer::new(500);
        let pace = pacer.pace(730);
        assert_eq!(pace, Pace::Overrun { late_by_ms: 230 });
        assert_eq!(pace.wait_ms(), 0);
    }
}
