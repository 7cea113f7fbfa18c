//! The touch debouncer.
//!
//! The panel delivers a noisy sample stream: contact bounce, coordinate
//! jitter while a finger rests in place, a bogus all-zero reading on the
//! first conversion after power-on, and (on spin 9 under USB power) ghost
//! contacts with pressure in a low band. This filter turns that stream into
//! occasional trustworthy samples. One decision per poll; the first matching
//! rule wins:
//!
//! 1. no contact reported → reject;
//! 2. very first touched poll reads the origin artifact → reject;
//! 3. too soon after the last accepted touch → reject, regardless of where
//!    the contact moved;
//! 4. close to the last accepted touch and not yet old enough to count as a
//!    fresh gesture → reject;
//! 5. pressure below the revision's ghost floor → reject;
//! 6. otherwise accept and remember the sample and its timestamp.

use crate::board;
use crate::config::{
    DEFAULT_DIST_SENSITIVITY, DEFAULT_TIME_SENSITIVITY_MS, DEFAULT_TREAT_AS_NEW_MS,
};

use super::{squared_distance, TouchSample};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterThresholds {
    /// Minimum milliseconds between accepted touches.
    pub time_sensitivity_ms: u64,
    /// Minimum travel (raw panel units) for a quick follow-up contact to
    /// count as a new touch rather than the same finger jittering.
    pub dist_sensitivity: u16,
    /// Age at which a lingering contact counts as a fresh gesture even
    /// without travel.
    pub treat_as_new_ms: u64,
    /// Ghost-touch pressure floor; `None` on revisions that do not need it.
    pub pressure_floor: Option<u16>,
}

impl FilterThresholds {
    /// Defaults for the compiled-in board revision.
    pub const fn for_board() -> Self {
        Self {
            time_sensitivity_ms: DEFAULT_TIME_SENSITIVITY_MS,
            dist_sensitivity: DEFAULT_DIST_SENSITIVITY,
            treat_as_new_ms: DEFAULT_TREAT_AS_NEW_MS,
            pressure_floor: board::TOUCH_PRESSURE_FLOOR,
        }
    }
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self::for_board()
    }
}

#[derive(Clone, Copy, Debug)]
struct Accepted {
    sample: TouchSample,
    at_ms: u64,
}

/// Accept/reject history. Owned by the filter value; nothing else reads or
/// writes it.
#[derive(Clone, Copy, Debug)]
struct FilterHistory {
    first_poll: bool,
    last_accepted: Option<Accepted>,
}

impl FilterHistory {
    const fn new() -> Self {
        Self {
            first_poll: true,
            last_accepted: None,
        }
    }
}

pub struct TouchFilter {
    thresholds: FilterThresholds,
    history: FilterHistory,
}

impl TouchFilter {
    pub const fn new(thresholds: FilterThresholds) -> Self {
        Self {
            thresholds,
            history: FilterHistory::new(),
        }
    }

    pub fn thresholds(&self) -> FilterThresholds {
        self.thresholds
    }

    pub fn set_time_sensitivity_ms(&mut self, ms: u64) {
        self.thresholds.time_sensitivity_ms = ms;
    }

    pub fn set_dist_sensitivity(&mut self, units: u16) {
        self.thresholds.dist_sensitivity = units;
    }

    pub fn set_treat_as_new_ms(&mut self, ms: u64) {
        self.thresholds.treat_as_new_ms = ms;
    }

    /// Decide whether this poll's reading is a new, intentional touch.
    /// `None` means the sensor reported no contact.
    pub fn poll(&mut self, now_ms: u64, reading: Option<TouchSample>) -> Option<TouchSample> {
        let Some(sample) = reading else {
            return None;
        };

        if self.history.first_poll {
            self.history.first_poll = false;
            // The controller's first conversion after power-on can report
            // a spurious all-zero contact.
            if sample.is_origin() {
                return None;
            }
        }

        // With no accepted touch on record both time gates pass vacuously.
        if let Some(prev) = self.history.last_accepted {
            let elapsed = now_ms.saturating_sub(prev.at_ms);

            if elapsed < self.thresholds.time_sensitivity_ms {
                return None;
            }

            let dist_sq = squared_distance(sample, prev.sample);
            let min_dist = self.thresholds.dist_sensitivity as i64;
            if dist_sq < min_dist * min_dist && elapsed < self.thresholds.treat_as_new_ms {
                return None;
            }
        }

        if let Some(floor) = self.thresholds.pressure_floor {
            if sample.z < floor {
                return None;
            }
        }

        self.history.last_accepted = Some(Accepted {
            sample,
            at_ms: now_ms,
        });
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESS: u16 = 1_000;

    fn thresholds() -> FilterThresholds {
        FilterThresholds {
            time_sensitivity_ms: 150,
            dist_sensitivity: 200,
            treat_as_new_ms: 600,
            pressure_floor: None,
        }
    }

    fn sample(x: u16, y: u16) -> Option<TouchSample> {
        Some(TouchSample::new(x, y, PRESS))
    }

    #[test]
    fn first_touch_is_accepted_without_history() {
        let mut filter = TouchFilter::new(thresholds());
        assert_eq!(
            filter.poll(0, sample(100, 100)),
            Some(TouchSample::new(100, 100, PRESS))
        );
    }

    #[test]
    fn no_contact_polls_never_accept_and_keep_history_intact() {
        let mut filter = TouchFilter::new(thresholds());
        assert_eq!(filter.poll(0, None), None);
        // The startup-artifact rejection still applies on the first poll
        // that actually reports contact.
        assert_eq!(filter.poll(10, Some(TouchSample::new(0, 0, 0))), None);
    }

    #[test]
    fn first_poll_origin_artifact_is_rejected_once() {
        let mut filter = TouchFilter::new(thresholds());
        assert_eq!(filter.poll(0, Some(TouchSample::new(0, 0, 0))), None);
        // Same coordinates later are judged on their own merits.
        assert_eq!(
            filter.poll(50, Some(TouchSample::new(0, 0, 0))),
            Some(TouchSample::new(0, 0, 0))
        );
    }

    #[test]
    fn time_gate_rejects_regardless_of_distance() {
        let mut filter = TouchFilter::new(thresholds());
        assert!(filter.poll(0, sample(100, 100)).is_some());
        // Far away but only 50 ms later: still rejected.
        assert_eq!(filter.poll(50, sample(3_000, 3_000)), None);
    }

    #[test]
    fn near_touch_is_rejected_until_treat_as_new_elapses() {
        let mut filter = TouchFilter::new(thresholds());
        assert!(filter.poll(0, sample(1_000, 1_000)).is_some());
        // Past the time gate but close by and still recent: same touch.
        assert_eq!(filter.poll(200, sample(1_010, 1_005)), None);
        // Identical coordinates become a fresh gesture once old enough.
        assert!(filter.poll(601, sample(1_010, 1_005)).is_some());
    }

    #[test]
    fn rejected_touches_do_not_advance_history() {
        let mut filter = TouchFilter::new(thresholds());
        assert!(filter.poll(0, sample(1_000, 1_000)).is_some());
        assert_eq!(filter.poll(200, sample(1_010, 1_005)), None);
        // Age is measured from the accepted touch at t=0, not the rejected
        // one at t=200, so t=601 is already past treat-as-new.
        assert!(filter.poll(601, sample(1_012, 1_004)).is_some());
    }

    #[test]
    fn far_touch_past_time_gate_is_accepted() {
        let mut filter = TouchFilter::new(thresholds());
        assert!(filter.poll(0, sample(100, 100)).is_some());
        assert!(filter.poll(400, sample(500, 500)).is_some());
    }

    #[test]
    fn default_thresholds_scenario() {
        // A at t=0 accepted; B nearby at t=50 rejected by the time gate;
        // C far away at t=400 accepted.
        let mut filter = TouchFilter::new(thresholds());
        assert!(filter.poll(0, sample(100, 100)).is_some());
        assert_eq!(filter.poll(50, sample(105, 102)), None);
        assert!(filter.poll(400, sample(500, 500)).is_some());
    }

    #[test]
    fn pressure_floor_rejects_ghost_band_when_configured() {
        let mut with_floor = TouchFilter::new(FilterThresholds {
            pressure_floor: Some(400),
            ..thresholds()
        });
        assert_eq!(with_floor.poll(0, Some(TouchSample::new(1_700, 2_400, 320))), None);
        assert!(with_floor
            .poll(10, Some(TouchSample::new(1_700, 2_400, 450)))
            .is_some());

        // Without a floor the same light contact is fine.
        let mut without_floor = TouchFilter::new(thresholds());
        assert!(without_floor
            .poll(0, Some(TouchSample::new(1_700, 2_400, 320)))
            .is_some());
    }

    #[test]
    fn runtime_threshold_changes_apply_to_the_next_poll() {
        let mut filter = TouchFilter::new(thresholds());
        assert!(filter.poll(0, sample(1_000, 1_000)).is_some());
        assert_eq!(filter.poll(60, sample(1_000, 1_000)), None);

        filter.set_time_sensitivity_ms(25);
        filter.set_treat_as_new_ms(40);
        assert!(filter.poll(120, sample(1_000, 1_000)).is_some());
    }
}
