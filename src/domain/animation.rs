//! Bookkeeping for in-flight visual transitions.
//!
//! The engine records an event for every spawn, single-step slide and merge.
//! The frame loop ticks the tracker once per rendered frame and the renderer
//! reads the live events to interpolate positions and scales.

use super::Position;

pub const SPAWN_TICKS: u32 = 10;
pub const SLIDE_TICKS: u32 = 8;
pub const MERGE_TICKS: u32 = 8;

/// What a tracked transition shows
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationKind {
    /// A new tile grows into `cell`
    Spawn { cell: Position },
    /// A tile moved one cell, from `from` to `to`
    Slide { from: Position, to: Position },
    /// Two tiles combined into `value` at `cell`
    Merge { cell: Position, value: u32 },
}

impl AnimationKind {
    /// Fixed length of this kind of transition, in ticks
    pub const fn duration(&self) -> u32 {
        match self {
            AnimationKind::Spawn { .. } => SPAWN_TICKS,
            AnimationKind::Slide { .. } => SLIDE_TICKS,
            AnimationKind::Merge { .. } => MERGE_TICKS,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Animation {
    pub kind: AnimationKind,
    pub progress: u32,
    pub duration: u32,
}

impl Animation {
    fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            progress: 0,
            duration: kind.duration(),
        }
    }

    /// Completed fraction in `0.0..=1.0`
    pub fn ratio(&self) -> f32 {
        (self.progress as f32 / self.duration as f32).min(1.0)
    }

    pub const fn is_finished(&self) -> bool {
        self.progress >= self.duration
    }

    /// True for spawn/merge events drawn at `cell`
    fn targets(&self, cell: Position) -> bool {
        match self.kind {
            AnimationKind::Spawn { cell: c } | AnimationKind::Merge { cell: c, .. } => c == cell,
            AnimationKind::Slide { .. } => false,
        }
    }
}

/// Ordered collection of live animations. Insertion order is draw order.
#[derive(Clone, Debug, Default)]
pub struct AnimationTracker {
    events: Vec<Animation>,
}

impl AnimationTracker {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Start tracking a transition at progress 0
    pub fn record(&mut self, kind: AnimationKind) {
        self.events.push(Animation::new(kind));
    }

    /// Advance every event by one frame and retire the finished ones
    pub fn tick(&mut self) {
        self.events.iter_mut().for_each(|event| event.progress += 1);
        self.events.retain(|event| !event.is_finished());
    }

    /// Spawn and merge events drawn at `cell`, plus every slide.
    /// Slides are returned regardless of cell; callers filter on from/to.
    pub fn events_for(&self, cell: Position) -> Vec<Animation> {
        self.events
            .iter()
            .filter(|event| event.targets(cell) || matches!(event.kind, AnimationKind::Slide { .. }))
            .copied()
            .collect()
    }

    /// Live slide events in insertion order
    pub fn slides(&self) -> impl Iterator<Item = &Animation> + '_ {
        self.events
            .iter()
            .filter(|event| matches!(event.kind, AnimationKind::Slide { .. }))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animation> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every pending event
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
