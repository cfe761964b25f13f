//! Viewport classification: window width → number of visible watch faces.

use serde::Deserialize;

use crate::infra::constants::carousel::breakpoints;

/// Number of items visible at the compiled breakpoints.
///
/// Total over every width: `≤620 → 1`, `≤768 → 2`, `≤1024 → 3`, else `4`.
pub fn classify(width: u32) -> usize {
    breakpoints::TABLE
        .iter()
        .find(|(max_width, _)| width <= *max_width)
        .map(|&(_, visible)| visible)
        .unwrap_or(breakpoints::WIDE_VISIBLE)
}

/// One row of a breakpoint table: widths up to and including `max_width`
/// show `visible` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Breakpoint {
    pub max_width: u32,
    pub visible: usize,
}

/// Validated breakpoint table, ascending in both width and visible count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    rows: Vec<Breakpoint>,
    wide_visible: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            rows: breakpoints::TABLE
                .iter()
                .map(|&(max_width, visible)| Breakpoint { max_width, visible })
                .collect(),
            wide_visible: breakpoints::WIDE_VISIBLE,
        }
    }
}

impl Breakpoints {
    pub fn new(
        rows: Vec<Breakpoint>,
        wide_visible: usize,
    ) -> Result<Self, String> {
        if wide_visible == 0 {
            return Err("wide visible count must be at least 1".into());
        }
        for row in &rows {
            if row.visible == 0 {
                return Err(format!(
                    "breakpoint at {}px must show at least one item",
                    row.max_width
                ));
            }
        }
        for pair in rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.max_width <= a.max_width || b.visible <= a.visible {
                return Err(format!(
                    "breakpoints must ascend: {}px→{} then {}px→{}",
                    a.max_width, a.visible, b.max_width, b.visible
                ));
            }
        }
        if let Some(last) = rows.last()
            && wide_visible <= last.visible
        {
            return Err(format!(
                "wide visible count {wide_visible} must exceed {} (last breakpoint)",
                last.visible
            ));
        }
        Ok(Self { rows, wide_visible })
    }

    pub fn classify(&self, width: u32) -> usize {
        self.rows
            .iter()
            .find(|row| width <= row.max_width)
            .map(|row| row.visible)
            .unwrap_or(self.wide_visible)
    }
}
