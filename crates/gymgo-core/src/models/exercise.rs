// ABOUTME: Exercise model with rep range, rest prescription, and composite parts
// ABOUTME: Virtual sub-movement identities for composite (giant set) exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::storage::VIRTUAL_ID_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive target repetition range, serialized as `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct RepRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound (the progression ceiling)
    pub max: u32,
}

impl RepRange {
    /// Create a range, swapping bounds given in the wrong order
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

impl From<[u32; 2]> for RepRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<RepRange> for [u32; 2] {
    fn from(range: RepRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// Rest between sets: a fixed number of seconds or a `[min, max]` window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RestSpec {
    /// Fixed rest in seconds
    Fixed(u32),
    /// Rest window in seconds
    Range([u32; 2]),
}

impl Default for RestSpec {
    fn default() -> Self {
        Self::Fixed(0)
    }
}

impl fmt::Display for RestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fixed(secs) => write!(f, "{secs}s"),
            Self::Range([low, high]) if low == high => write!(f, "{low}s"),
            Self::Range([low, high]) => write!(f, "{low}–{high}s"),
        }
    }
}

/// Read-only routine item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable identifier referenced by log entries
    pub id: String,
    /// Display name
    pub name: String,
    /// Target number of sets
    pub sets: u32,
    /// Target repetitions per set
    pub rep_range: RepRange,
    /// Tempo prescription (e.g. `3-1-1-0`)
    #[serde(default)]
    pub tempo: String,
    /// Rest between sets
    #[serde(default)]
    pub rest_sec: RestSpec,
    /// Linked technique from the technique library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique_id: Option<String>,
    /// Authored composite flag; when absent the name is inspected instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<bool>,
    /// Authored names of the two movements of a composite exercise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<[String; 2]>,
}

impl Exercise {
    /// Prescription line, e.g. `3×8–12`
    #[must_use]
    pub fn prescription(&self) -> String {
        format!("{}×{}", self.sets, self.rep_range)
    }
}

/// Which half of a composite exercise a movement is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementLabel {
    /// First movement
    A,
    /// Second movement
    B,
}

impl MovementLabel {
    /// Both labels in performance order
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Single-letter label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for MovementLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A virtual sub-exercise of a composite exercise, tracked independently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Synthesized id `<parent>__A` / `<parent>__B`
    pub id: String,
    /// Movement name
    pub name: String,
    /// Position within the composite
    pub label: MovementLabel,
}

impl Movement {
    /// Derive the virtual movement for `parent_id`
    #[must_use]
    pub fn new(parent_id: &str, name: impl Into<String>, label: MovementLabel) -> Self {
        Self {
            id: format!("{parent_id}{VIRTUAL_ID_SEPARATOR}{label}"),
            name: name.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_display() {
        assert_eq!(RestSpec::Fixed(90).to_string(), "90s");
        assert_eq!(RestSpec::Range([60, 60]).to_string(), "60s");
        assert_eq!(RestSpec::Range([60, 90]).to_string(), "60–90s");
    }

    #[test]
    fn test_exercise_wire_format() {
        let exercise: Exercise = serde_json::from_str(
            r#"{"id":"bench","name":"Press banca","sets":3,"repRange":[8,12],
                "tempo":"3-1-1-0","restSec":[90,120],"techniqueId":"rest_pause"}"#,
        )
        .unwrap();
        assert_eq!(exercise.rep_range, RepRange::new(8, 12));
        assert_eq!(exercise.rest_sec, RestSpec::Range([90, 120]));
        assert_eq!(exercise.technique_id.as_deref(), Some("rest_pause"));
        assert_eq!(exercise.composite, None);
        assert_eq!(exercise.prescription(), "3×8–12");
    }

    #[test]
    fn test_movement_ids_never_equal_parent() {
        let movement = Movement::new("arms", "Curl", MovementLabel::B);
        assert_eq!(movement.id, "arms__B");
        assert_ne!(movement.id, "arms");
    }
}
