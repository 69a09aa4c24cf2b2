//! Standard pip patterns
//!
//! Every pip position is one of a handful of fractions of the viewport
//! window, the card area left once the standard pip margins are removed.
//! A location is drawn either before the canvas is rotated by 180 degrees
//! (southern, ends up inverted in the lower half) or after it (northern,
//! ends up upright in the upper half), so each table entry describes two
//! mirrored positions on the finished card.

use crate::error::LayoutError;
use crate::model::Rank;

/// Fractions of the viewport window a pip can be offset by
pub const OFFSETS: [f32; 6] = [0.0, 1.0 / 6.0, 1.0 / 4.0, 1.0 / 3.0, 1.0 / 2.0, 1.0];

/// Raw location: indices into [`OFFSETS`] plus the rotation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSpec {
    pub x: usize,
    pub y: usize,
    pub rotate: bool,
}

const fn loc(x: usize, y: usize, rotate: bool) -> LocationSpec {
    LocationSpec { x, y, rotate }
}

pub const LOCATIONS: [LocationSpec; 17] = [
    loc(0, 0, false),
    loc(0, 0, true),
    loc(0, 3, false),
    loc(0, 3, true),
    loc(0, 4, false),
    loc(4, 0, false),
    loc(4, 0, true),
    loc(4, 1, false),
    loc(4, 1, true),
    loc(4, 2, false),
    loc(4, 2, true),
    loc(4, 4, false),
    loc(5, 0, false),
    loc(5, 0, true),
    loc(5, 3, false),
    loc(5, 3, true),
    loc(5, 4, false),
];

/// Location indices per pattern: 0 is corners only, 1 to 13 are ace to king
pub const PATTERNS: [&[usize]; 14] = [
    &[1, 0],
    &[11],
    &[6, 5],
    &[6, 11, 5],
    &[1, 13, 0, 12],
    &[1, 13, 11, 0, 12],
    &[1, 13, 0, 12, 4, 16],
    &[1, 13, 0, 12, 4, 16, 9],
    &[1, 13, 10, 0, 12, 4, 16, 9],
    &[1, 13, 3, 15, 11, 0, 12, 2, 14],
    &[1, 13, 3, 15, 8, 0, 12, 2, 14, 7],
    &[1, 13, 10, 3, 15, 11, 0, 12, 9, 2, 14],
    &[6, 1, 13, 10, 3, 15, 5, 0, 12, 9, 2, 14],
    &[6, 1, 13, 10, 3, 15, 11, 5, 0, 12, 9, 2, 14],
];

/// Index of the corners-only pattern
pub const CORNERS: usize = 0;

/// Offset from the standard pip anchor, in card percentages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// A calibrated location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub offset: Offset,
    pub rotate: bool,
}

/// Pip offsets of one rank, split by drawing pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern {
    northern: Vec<Offset>,
    southern: Vec<Offset>,
}

impl Pattern {
    fn build(
        pattern: usize,
        indices: &[usize],
        locations: &[Location],
    ) -> Result<Self, LayoutError> {
        let mut northern = Vec::new();
        let mut southern = Vec::new();

        for &index in indices {
            let location = locations.get(index).ok_or(LayoutError::LocationIndex {
                pattern,
                index,
                available: locations.len(),
            })?;

            if location.rotate {
                southern.push(location.offset);
            } else {
                northern.push(location.offset);
            }
        }

        Ok(Self { northern, southern })
    }

    /// Pips for one drawing pass: southern when `rotated`, northern otherwise
    pub fn pips(&self, rotated: bool) -> &[Offset] {
        if rotated {
            &self.southern
        } else {
            &self.northern
        }
    }

    pub fn northern(&self) -> &[Offset] {
        &self.northern
    }

    pub fn southern(&self) -> &[Offset] {
        &self.southern
    }

    pub fn len(&self) -> usize {
        self.northern.len() + self.southern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check the raw tables reference only existing offsets and locations
pub fn validate_tables() -> Result<(), LayoutError> {
    for (location, spec) in LOCATIONS.iter().enumerate() {
        for index in [spec.x, spec.y] {
            if index >= OFFSETS.len() {
                return Err(LayoutError::OffsetIndex {
                    location,
                    index,
                    available: OFFSETS.len(),
                });
            }
        }
    }

    for (pattern, indices) in PATTERNS.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&i| i >= LOCATIONS.len()) {
            return Err(LayoutError::LocationIndex {
                pattern,
                index,
                available: LOCATIONS.len(),
            });
        }
    }

    Ok(())
}

/// All pip patterns, scaled to one viewport window size
#[derive(Debug, Clone, PartialEq)]
pub struct PatternCollection {
    viewport: (f32, f32),
    locations: Vec<Location>,
    patterns: Vec<Pattern>,
}

impl PatternCollection {
    /// Build the locations and patterns for a viewport window given as
    /// card percentages. Each call starts from the raw tables, so the
    /// result depends only on the arguments.
    pub fn calibrate(viewport_x: f32, viewport_y: f32) -> Result<Self, LayoutError> {
        if !viewport_x.is_finite() || !viewport_y.is_finite() {
            return Err(LayoutError::InvalidViewport {
                x: viewport_x,
                y: viewport_y,
            });
        }
        validate_tables()?;

        let locations: Vec<Location> = LOCATIONS
            .iter()
            .map(|spec| Location {
                offset: Offset {
                    x: OFFSETS[spec.x] * viewport_x,
                    y: OFFSETS[spec.y] * viewport_y,
                },
                rotate: spec.rotate,
            })
            .collect();

        let patterns = PATTERNS
            .iter()
            .enumerate()
            .map(|(i, indices)| Pattern::build(i, indices, &locations))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Calibrated {} pip patterns for a {}% x {}% viewport",
            patterns.len(),
            viewport_x,
            viewport_y
        );

        Ok(Self {
            viewport: (viewport_x, viewport_y),
            locations,
            patterns,
        })
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a pattern by table index; `None` when out of range
    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn for_rank(&self, rank: Rank) -> &Pattern {
        &self.patterns[rank.number()]
    }

    pub fn corners(&self) -> &Pattern {
        &self.patterns[CORNERS]
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
