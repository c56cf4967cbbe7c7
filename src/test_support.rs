//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;

use crate::core::{
    Effect, EngineSettings, InputEvent, InputSource, NavigationEngine, Polled, RenderPlan,
    RenderSink,
};

/// Creates an engine with the default scenes and file list.
pub fn test_engine() -> NavigationEngine {
    NavigationEngine::new(EngineSettings::default()).unwrap()
}

/// Text lines of a `Render` effect. Panics on any other effect.
pub fn render_texts(effect: &Effect) -> Vec<&str> {
    match effect {
        Effect::Render(plan) => plan.texts(),
        other => panic!("Expected Render, got {other:?}"),
    }
}

/// Input source that replays a fixed list of poll results, then runs dry.
pub struct ScriptedInput {
    queue: VecDeque<Polled>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self::from_polled(events.into_iter().map(Polled::Event))
    }

    pub fn from_polled(polled: impl IntoIterator<Item = Polled>) -> Self {
        Self {
            queue: polled.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<Option<Polled>> {
        Ok(self.queue.pop_front())
    }
}

/// Sink that keeps every plan it is given.
#[derive(Default)]
pub struct RecordingSink {
    pub plans: Vec<RenderPlan>,
    pub repaints: usize,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, plan: &RenderPlan) -> io::Result<()> {
        self.plans.push(plan.clone());
        Ok(())
    }

    fn repaint(&mut self) -> io::Result<()> {
        self.repaints += 1;
        Ok(())
    }
}
