// ABOUTME: Decomposition of composite (giant set / superset) exercises into two movements
// ABOUTME: Authored composite fields win; a parenthesized "A + B" name label is the fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use gymgo_core::models::{Exercise, Movement, MovementLabel};
use regex::Regex;
use std::sync::LazyLock;

/// First parenthesized group of an exercise name
static LABEL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").ok());

/// Separator between the two movements inside the label: `+` or `/`
static PART_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*[+/]\s*").ok());

/// Extract exactly two movement names from `"Giant set (Curl + Tríceps)"`
///
/// Returns `None` unless the first parenthesized label splits into exactly
/// two non-empty parts.
#[must_use]
pub fn parse_label_parts(name: &str) -> Option<[String; 2]> {
    let label = LABEL_PATTERN
        .as_ref()?
        .captures(name.trim())?
        .get(1)?
        .as_str()
        .trim();
    let parts: Vec<&str> = PART_SEPARATOR
        .as_ref()?
        .split(label)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [first, second] => Some([(*first).to_owned(), (*second).to_owned()]),
        _ => None,
    }
}

/// The two virtual sub-movements of a composite exercise, or `None`
///
/// `composite: false` disables decomposition outright. Authored `parts`
/// are used as given; otherwise the name label is parsed.
#[must_use]
pub fn movements(exercise: &Exercise) -> Option<[Movement; 2]> {
    if exercise.composite == Some(false) {
        return None;
    }
    let names = match &exercise.parts {
        Some(parts) if parts.iter().all(|part| !part.trim().is_empty()) => parts.clone(),
        _ => parse_label_parts(&exercise.name)?,
    };
    let [first, second] = names;
    let [label_a, label_b] = MovementLabel::ALL;
    Some([
        Movement::new(&exercise.id, first, label_a),
        Movement::new(&exercise.id, second, label_b),
    ])
}

/// Composite helpers on routine exercises
pub trait CompositeExt {
    /// See [`movements`]
    fn movements(&self) -> Option<[Movement; 2]>;

    /// Whether this exercise decomposes into two movements
    fn is_composite(&self) -> bool {
        self.movements().is_some()
    }
}

impl CompositeExt for Exercise {
    fn movements(&self) -> Option<[Movement; 2]> {
        movements(self)
    }
}
