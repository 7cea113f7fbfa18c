//! Process-wide diagnostic counters.
//!
//! Cheap relaxed atomics, bumped from the UI path and read back over the
//! serial console. Nothing here feeds back into behavior.

use core::sync::atomic::{AtomicU32, Ordering};

static TOUCHES_ACCEPTED: AtomicU32 = AtomicU32::new(0);
static TOUCHES_REJECTED: AtomicU32 = AtomicU32::new(0);
static MODE_TRANSITIONS: AtomicU32 = AtomicU32::new(0);
static INVALID_MODE_COERCIONS: AtomicU32 = AtomicU32::new(0);

pub fn record_touch_accepted() {
    TOUCHES_ACCEPTED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_touch_rejected() {
    TOUCHES_REJECTED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_mode_transition() {
    MODE_TRANSITIONS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_invalid_mode() {
    INVALID_MODE_COERCIONS.fetch_add(1, Ordering::Relaxed);
}

pub fn touches_accepted() -> u32 {
    TOUCHES_ACCEPTED.load(Ordering::Relaxed)
}

pub fn touches_rejected() -> u32 {
    TOUCHES_REJECTED.load(Ordering::Relaxed)
}

pub fn mode_transitions() -> u32 {
    MODE_TRANSITIONS.load(Ordering::Relaxed)
}

pub fn invalid_mode_coercions() -> u32 {
    INVALID_MODE_COERCIONS.load(Ordering::Relaxed)
}

pub fn log_summary() {
    log::info!(
        "touch accepted={} rejected={} transitions={} invalid_mode={}",
        touches_accepted(),
        touches_rejected(),
        mode_transitions(),
        invalid_mode_coercions(),
    );
}
