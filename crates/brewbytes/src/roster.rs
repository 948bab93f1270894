//! The fixed set of waiters and their workload.

use crate::error::CafeError;
use crate::model::Waiter;
use std::collections::HashSet;

/// Fixed, non-empty, ordered set of waiters.
///
/// Roster order is significant: it breaks ties in least-loaded selection.
/// Waiters are never added or removed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffRoster {
    waiters: Vec<Waiter>,
}

impl StaffRoster {
    /// Builds a roster of idle waiters from their names, in the given order.
    pub fn new<I, S>(names: I) -> Result<Self, CafeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_waiters(names.into_iter().map(Waiter::new).collect())
    }

    /// Builds a roster from pre-loaded waiter records.
    pub fn from_waiters(waiters: Vec<Waiter>) -> Result<Self, CafeError> {
        if waiters.is_empty() {
            return Err(CafeError::EmptyRoster);
        }
        let mut seen = HashSet::with_capacity(waiters.len());
        for waiter in &waiters {
            if waiter.name.trim().is_empty() {
                return Err(CafeError::InvalidWaiterName(waiter.name.clone()));
            }
            if !seen.insert(waiter.name.as_str()) {
                return Err(CafeError::DuplicateWaiter(waiter.name.clone()));
            }
            if !waiter.occupied_time.is_finite() || waiter.occupied_time < 0.0 {
                return Err(CafeError::InvalidWorkload {
                    name: waiter.name.clone(),
                    occupied_time: waiter.occupied_time,
                });
            }
        }
        Ok(Self { waiters })
    }

    /// Waiters in roster order.
    pub fn waiters(&self) -> &[Waiter] {
        &self.waiters
    }

    pub fn get(&self, name: &str) -> Option<&Waiter> {
        self.waiters.iter().find(|w| w.name == name)
    }

    pub fn len(&self) -> usize {
        self.waiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiters.is_empty()
    }

    /// Index of the waiter with the least outstanding work.
    ///
    /// Ties go to the earliest waiter in roster order.
    pub fn least_loaded(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, waiter) in self.waiters.iter().enumerate() {
            match best {
                Some((_, load)) if waiter.occupied_time >= load => {}
                _ => best = Some((index, waiter.occupied_time)),
            }
        }
        best.map(|(index, _)| index)
    }

    pub(crate) fn waiter_mut(&mut self, index: usize) -> Option<&mut Waiter> {
        self.waiters.get_mut(index)
    }

    /// Decay sweep: removes `step` minutes from every waiter.
    ///
    /// Returns the names of waiters that went from busy to idle in this sweep.
    pub fn decay(&mut self, step: f64) -> Vec<String> {
        self.waiters
            .iter_mut()
            .filter_map(|waiter| waiter.decay(step).then(|| waiter.name.clone()))
            .collect()
    }

    /// Sum of outstanding minutes across the roster.
    pub fn total_occupied_time(&self) -> f64 {
        self.waiters.iter().map(|w| w.occupied_time).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_is_a_configuration_error() {
        let names: Vec<String> = vec![];
        assert_eq!(StaffRoster::new(names), Err(CafeError::EmptyRoster));
    }

    #[test]
    fn rejects_duplicate_and_blank_names() {
        assert_eq!(
            StaffRoster::new(["Amit", "Riya", "Amit"]),
            Err(CafeError::DuplicateWaiter("Amit".into()))
        );
        assert_eq!(
            StaffRoster::new(["Amit", "  "]),
            Err(CafeError::InvalidWaiterName("  ".into()))
        );
    }

    #[test]
    fn rejects_negative_workload() {
        let result = StaffRoster::from_waiters(vec![Waiter::with_workload("A", -1.0, 0)]);
        assert!(matches!(result, Err(CafeError::InvalidWorkload { .. })));
    }

    #[test]
    fn least_loaded_prefers_first_on_ties() {
        let roster = StaffRoster::from_waiters(vec![
            Waiter::with_workload("A", 3.0, 1),
            Waiter::with_workload("B", 1.0, 1),
            Waiter::with_workload("C", 1.0, 1),
        ])
        .unwrap();
        assert_eq!(roster.least_loaded(), Some(1));

        let idle = StaffRoster::new(["A", "B", "C"]).unwrap();
        assert_eq!(idle.least_loaded(), Some(0));
    }

    #[test]
    fn decay_reports_drained_waiters_and_floors_at_zero() {
        let mut roster = StaffRoster::from_waiters(vec![
            Waiter::with_workload("A", 0.3, 1),
            Waiter::with_workload("B", 4.0, 2),
            Waiter::new("C"),
        ])
        .unwrap();

        let drained = roster.decay(0.5);
        assert_eq!(drained, vec!["A".to_string()]);
        assert_eq!(roster.get("A").unwrap().occupied_time, 0.0);
        assert_eq!(roster.get("A").unwrap().current_orders, 0);
        assert_eq!(roster.get("B").unwrap().occupied_time, 3.5);
        assert_eq!(roster.get("B").unwrap().current_orders, 2);
        assert_eq!(roster.get("C").unwrap().occupied_time, 0.0);

        for _ in 0..20 {
            roster.decay(0.5);
        }
        assert!(roster.waiters().iter().all(|w| w.occupied_time == 0.0));
        assert_eq!(roster.total_occupied_time(), 0.0);
    }
}
