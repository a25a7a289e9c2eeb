//! Lock-free snapshot cells for meter handoff between threads.
//!
//! A meter instance itself is single-threaded (one owner, one tick source).
//! When an audio thread produces levels and a UI thread renders them, the
//! producer publishes into one of these cells and the renderer reads a
//! coherent-enough snapshot without locking.

use core::sync::atomic::Ordering;

use atomic_float::AtomicF32;

use crate::range::MIN_DB;

/// Cache-line aligned atomic dB cell.
#[derive(Debug)]
#[repr(align(64))]
pub struct AtomicDb {
    value: AtomicF32,
}

impl AtomicDb {
    pub fn new(db: f32) -> Self {
        Self {
            value: AtomicF32::new(db),
        }
    }

    #[inline]
    pub fn get(&self) -> f32 {
        self.value.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, db: f32) {
        self.value.store(db, Ordering::Release);
    }

    #[inline]
    pub fn swap(&self, db: f32) -> f32 {
        self.value.swap(db, Ordering::AcqRel)
    }
}

impl Clone for AtomicDb {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl Default for AtomicDb {
    fn default() -> Self {
        Self::new(MIN_DB)
    }
}

/// Plain-value snapshot of one strip's meter state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StripLevels {
    pub level_left_db: f32,
    pub level_right_db: f32,
    pub gain_reduction_db: f32,
}

impl Default for StripLevels {
    fn default() -> Self {
        Self {
            level_left_db: MIN_DB,
            level_right_db: MIN_DB,
            gain_reduction_db: 0.0,
        }
    }
}

/// Lock-free storage for one mixer strip (level L/R, gain reduction).
pub struct AtomicStripLevels {
    level_left: AtomicDb,
    level_right: AtomicDb,
    gain_reduction: AtomicDb,
}

impl AtomicStripLevels {
    pub fn new() -> Self {
        Self {
            level_left: AtomicDb::default(),
            level_right: AtomicDb::default(),
            gain_reduction: AtomicDb::new(0.0),
        }
    }

    #[inline]
    pub fn get(&self) -> StripLevels {
        StripLevels {
            level_left_db: self.level_left.get(),
            level_right_db: self.level_right.get(),
            gain_reduction_db: self.gain_reduction.get(),
        }
    }

    #[inline]
    pub fn set(&self, level_left_db: f32, level_right_db: f32, gain_reduction_db: f32) {
        self.level_left.set(level_left_db);
        self.level_right.set(level_right_db);
        self.gain_reduction.set(gain_reduction_db);
    }
}

impl Default for AtomicStripLevels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_db_roundtrip() {
        let cell = AtomicDb::new(-12.0);
        assert_eq!(cell.get(), -12.0);
        cell.set(-3.5);
        assert_eq!(cell.get(), -3.5);
        assert_eq!(cell.swap(0.0), -3.5);
        assert_eq!(cell.get(), 0.0);
    }

    #[test]
    fn test_default_is_silence() {
        let levels = AtomicStripLevels::new().get();
        assert_eq!(levels.level_left_db, MIN_DB);
        assert_eq!(levels.level_right_db, MIN_DB);
        assert_eq!(levels.gain_reduction_db, 0.0);
    }

    #[test]
    fn test_strip_levels_roundtrip() {
        let cell = AtomicStripLevels::new();
        cell.set(-6.0, -7.5, 2.25);
        let levels = cell.get();
        assert_eq!(levels.level_left_db, -6.0);
        assert_eq!(levels.level_right_db, -7.5);
        assert_eq!(levels.gain_reduction_db, 2.25);
    }
}
