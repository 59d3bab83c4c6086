//! Idle/walk/run clip selection

use orbit_core::{ClipId, ClipPlayer};

/// Locomotion animation the avatar is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTag {
    Idle,
    Walking,
    Running,
}

impl AnimTag {
    /// Conventional clip name in the character asset
    pub fn clip_name(&self) -> &'static str {
        match self {
            AnimTag::Idle => "IDLE",
            AnimTag::Walking => "WALKING",
            AnimTag::Running => "RUNNING",
        }
    }
}

/// Clips available for each locomotion state; any may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipSlots {
    pub idle: Option<ClipId>,
    pub walking: Option<ClipId>,
    pub running: Option<ClipId>,
}

impl ClipSlots {
    pub fn get(&self, tag: AnimTag) -> Option<ClipId> {
        match tag {
            AnimTag::Idle => self.idle,
            AnimTag::Walking => self.walking,
            AnimTag::Running => self.running,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.idle.is_none() && self.walking.is_none() && self.running.is_none()
    }

    /// Tags with no clip bound
    pub fn missing(&self) -> Vec<AnimTag> {
        [AnimTag::Idle, AnimTag::Walking, AnimTag::Running]
            .into_iter()
            .filter(|tag| self.get(*tag).is_none())
            .collect()
    }
}

/// A switch from one locomotion clip to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Option<AnimTag>,
    pub to: AnimTag,
}

/// Remembers the active tag and switches clips when locomotion changes
#[derive(Debug, Clone, Default)]
pub struct AnimationSelector {
    slots: ClipSlots,
    current: Option<AnimTag>,
}

impl AnimationSelector {
    pub fn new(slots: ClipSlots) -> Self {
        Self {
            slots,
            current: None,
        }
    }

    pub fn current(&self) -> Option<AnimTag> {
        self.current
    }

    /// Pick the clip for this frame. At most one transition happens.
    ///
    /// Running wins even when standing still. A transition stops the clip of
    /// the previous tag before looping the new one; a missing clip still
    /// records the tag.
    pub fn select(
        &mut self,
        running: bool,
        moving: bool,
        player: &mut impl ClipPlayer,
    ) -> Option<Transition> {
        if self.slots.is_empty() {
            return None;
        }

        let next = if running && self.current != Some(AnimTag::Running) {
            AnimTag::Running
        } else if !running && moving && self.current != Some(AnimTag::Walking) {
            AnimTag::Walking
        } else if !moving && self.current != Some(AnimTag::Idle) {
            AnimTag::Idle
        } else {
            return None;
        };

        let from = self.current;
        if let Some(previous) = from.and_then(|tag| self.slots.get(tag)) {
            player.stop(previous);
        }
        if let Some(clip) = self.slots.get(next) {
            player.play(clip, true);
        }
        self.current = Some(next);
        log::debug!("start {} animation", next.clip_name().to_lowercase());

        Some(Transition { from, to: next })
    }
}
