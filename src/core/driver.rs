//! # Driver Loop
//!
//! The boundary between the engine and the outside world. Adapters supply
//! an [`InputSource`] and a [`RenderSink`]; [`drive`] polls one event at a
//! time, runs the engine to completion and hands the plan to the sink.
//!
//! Polling cadence and delay scheduling belong to the adapters.

use log::info;
use std::io;

use super::engine::{Effect, NavigationEngine};
use super::error::DriveError;
use super::event::InputEvent;
use super::render::RenderPlan;
use super::state::NavigationState;

/// One poll result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    Event(InputEvent),
    /// The screen changed size; the last frame should be drawn again.
    Resized,
}

pub trait InputSource {
    /// Next poll result. `Ok(None)` means the source is exhausted.
    fn next_event(&mut self) -> io::Result<Option<Polled>>;
}

pub trait RenderSink {
    fn present(&mut self, plan: &RenderPlan) -> io::Result<()>;

    /// Draw the last presented frame again.
    fn repaint(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run until `Quit` or until the input runs dry.
pub fn drive(
    engine: &NavigationEngine,
    state: &mut NavigationState,
    input: &mut impl InputSource,
    sink: &mut impl RenderSink,
) -> Result<(), DriveError> {
    sink.present(&engine.initial_plan(state)?)?;

    let mut handled = 0usize;
    while let Some(polled) = input.next_event()? {
        match polled {
            Polled::Resized => sink.repaint()?,
            Polled::Event(event) => match engine.handle_event(state, event)? {
                Effect::None => {}
                Effect::Render(plan) => {
                    handled += 1;
                    sink.present(&plan)?;
                }
                Effect::Quit => break,
            },
        }
    }

    info!("Driver stopped after {} rendered events in {}", handled, state.scene());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneId;
    use crate::test_support::{RecordingSink, ScriptedInput, test_engine};

    #[test]
    fn test_drive_renders_initial_frame_and_each_event() {
        let engine = test_engine();
        let mut state = engine.new_state().unwrap();
        let mut input = ScriptedInput::new([
            InputEvent::Down,
            InputEvent::None,
            InputEvent::Enter,
            InputEvent::Character('a'),
        ]);
        let mut sink = RecordingSink::default();

        drive(&engine, &mut state, &mut input, &mut sink).unwrap();

        // initial + Down + Enter + 'a'; None draws nothing
        assert_eq!(sink.plans.len(), 4);
        assert_eq!(state.scene(), SceneId::FileManager);
        assert_eq!(state.text_input().as_str(), "a");
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_drive_stops_at_quit() {
        let engine = test_engine();
        let mut state = engine.new_state().unwrap();
        let mut input = ScriptedInput::new([InputEvent::Quit, InputEvent::Down]);
        let mut sink = RecordingSink::default();

        drive(&engine, &mut state, &mut input, &mut sink).unwrap();

        assert_eq!(sink.plans.len(), 1);
        assert!(state.is_terminated());
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_resize_repaints() {
        let engine = test_engine();
        let mut state = engine.new_state().unwrap();
        let mut input = ScriptedInput::from_polled([Polled::Resized, Polled::Resized]);
        let mut sink = RecordingSink::default();

        drive(&engine, &mut state, &mut input, &mut sink).unwrap();

        assert_eq!(sink.repaints, 2);
        assert_eq!(sink.plans.len(), 1);
    }
}
