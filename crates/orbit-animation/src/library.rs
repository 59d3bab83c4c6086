//! Clip registry - holds every loaded group by name

use crate::clip::ClipDef;
use crate::group::AnimationGroup;
use orbit_core::{ClipId, ClipPlayer, Result};
use std::collections::HashMap;

/// Named animation groups addressed by `ClipId`
#[derive(Debug, Default)]
pub struct AnimationLibrary {
    groups: Vec<AnimationGroup>,
    by_name: HashMap<String, ClipId>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from clip definitions, rejecting invalid ones
    pub fn from_defs(defs: &[ClipDef]) -> Result<Self> {
        let mut library = Self::new();
        for def in defs {
            def.validate()?;
            library.add(def);
        }
        Ok(library)
    }

    /// Register a clip. A clip with the same name is replaced and keeps its id.
    pub fn add(&mut self, def: &ClipDef) -> ClipId {
        let group = AnimationGroup::new(def);
        if let Some(&id) = self.by_name.get(&def.name) {
            self.groups[id.0 as usize] = group;
            return id;
        }
        let id = ClipId(self.groups.len() as u32);
        self.groups.push(group);
        self.by_name.insert(def.name.clone(), id);
        id
    }

    /// Look up a clip by name
    pub fn id_of(&self, name: &str) -> Option<ClipId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: ClipId) -> Option<&AnimationGroup> {
        self.groups.get(id.0 as usize)
    }

    /// Number of registered clips
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Stop every clip
    pub fn stop_all(&mut self) {
        for group in &mut self.groups {
            group.stop();
        }
    }

    /// Advance every playing clip by `dt` seconds
    pub fn advance_all(&mut self, dt: f64) {
        for group in &mut self.groups {
            if group.advance(dt) {
                log::debug!("Animation '{}' finished", group.name());
            }
        }
    }

    /// Names of the clips currently playing
    pub fn playing(&self) -> Vec<&str> {
        self.groups
            .iter()
            .filter(|g| g.is_playing())
            .map(|g| g.name())
            .collect()
    }
}

impl ClipPlayer for AnimationLibrary {
    fn play(&mut self, clip: ClipId, looping: bool) {
        if let Some(group) = self.groups.get_mut(clip.0 as usize) {
            group.play(looping);
        }
    }

    fn stop(&mut self, clip: ClipId) {
        if let Some(group) = self.groups.get_mut(clip.0 as usize) {
            group.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> AnimationLibrary {
        AnimationLibrary::from_defs(&[
            ClipDef::new("IDLE", 3.0),
            ClipDef::new("WALKING", 1.0),
            ClipDef::new("RUNNING", 0.8),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_name() {
        let lib = library();
        assert_eq!(lib.len(), 3);
        assert_eq!(lib.id_of("WALKING"), Some(ClipId(1)));
        assert!(lib.id_of("DANCE").is_none());
        assert_eq!(lib.get(lib.id_of("RUNNING").unwrap()).unwrap().duration(), 0.8);
    }

    #[test]
    fn play_and_stop_through_player_trait() {
        let mut lib = library();
        let walk = lib.id_of("WALKING").unwrap();
        lib.play(walk, true);
        assert_eq!(lib.playing(), vec!["WALKING"]);
        lib.stop(walk);
        assert!(lib.playing().is_empty());
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut lib = library();
        lib.play(ClipId(99), true);
        lib.stop(ClipId(99));
        assert!(lib.playing().is_empty());
    }

    #[test]
    fn replacing_keeps_id() {
        let mut lib = library();
        let id = lib.add(&ClipDef::new("IDLE", 5.0));
        assert_eq!(id, ClipId(0));
        assert_eq!(lib.len(), 3);
        assert_eq!(lib.get(id).unwrap().duration(), 5.0);
    }

    #[test]
    fn stop_all_and_advance() {
        let mut lib = library();
        let idle = lib.id_of("IDLE").unwrap();
        let run = lib.id_of("RUNNING").unwrap();
        lib.play(idle, true);
        lib.play(run, false);
        lib.advance_all(1.0);
        // one-shot run finished, idle still looping
        assert_eq!(lib.playing(), vec!["IDLE"]);
        lib.stop_all();
        assert!(lib.playing().is_empty());
    }

    #[test]
    fn invalid_defs_fail() {
        assert!(AnimationLibrary::from_defs(&[ClipDef::new("IDLE", -1.0)]).is_err());
    }
}
