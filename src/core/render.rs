//! # Render Plans
//!
//! A `RenderPlan` is what one engine step asks the screen to do: an ordered
//! list of clears, positioned text and delay requests. The core never draws.
//! Sinks consume plans stage by stage, where a stage is everything up to and
//! including the next delay.
//!
//! ```text
//! Clear, TextAt, TextAt, DelayRequest(2s), Clear, TextAt
//! └──────── stage 0 (wait 2s) ──────────┘  └─ stage 1 ─┘
//! ```

use std::time::Duration;

/// How a piece of text should look. Sinks decide the concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Title,
    /// The selected list entry.
    Highlight,
    /// The command prompt line.
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    Clear,
    /// Text at cell column `x`, row `y`.
    TextAt {
        x: u16,
        y: u16,
        text: String,
        style: TextStyle,
    },
    /// Ask the sink to hold the current frame for `Duration` before continuing.
    DelayRequest(Duration),
}

/// A group of commands followed by an optional wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage<'a> {
    pub commands: &'a [RenderCommand],
    pub then_wait: Option<Duration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    commands: Vec<RenderCommand>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.commands.push(RenderCommand::Clear);
        self
    }

    pub fn text(&mut self, x: u16, y: u16, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.commands.push(RenderCommand::TextAt {
            x,
            y,
            text: text.into(),
            style,
        });
        self
    }

    pub fn delay(&mut self, duration: Duration) -> &mut Self {
        self.commands.push(RenderCommand::DelayRequest(duration));
        self
    }

    /// Append all commands of `other` after this plan's.
    pub fn extend(&mut self, other: RenderPlan) -> &mut Self {
        self.commands.extend(other.commands);
        self
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total time the plan asks the sink to wait.
    pub fn total_delay(&self) -> Duration {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DelayRequest(d) => Some(*d),
                _ => None,
            })
            .sum()
    }

    /// Split the plan at each delay request.
    pub fn stages(&self) -> Vec<Stage<'_>> {
        let mut stages = Vec::new();
        let mut start = 0;
        for (i, command) in self.commands.iter().enumerate() {
            if let RenderCommand::DelayRequest(d) = command {
                stages.push(Stage {
                    commands: &self.commands[start..i],
                    then_wait: Some(*d),
                });
                start = i + 1;
            }
        }
        if start < self.commands.len() {
            stages.push(Stage {
                commands: &self.commands[start..],
                then_wait: None,
            });
        }
        stages
    }

    /// Text of every `TextAt`, in order. Handy for assertions and logs.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::TextAt { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_split_on_delay() {
        let mut plan = RenderPlan::new();
        plan.clear()
            .text(1, 2, "Opening a...", TextStyle::Normal)
            .delay(Duration::from_secs(2))
            .clear()
            .text(1, 0, "File Manager", TextStyle::Title);

        let stages = plan.stages();
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].commands.len(), 2);
        assert_eq!(stages[0].then_wait, Some(Duration::from_secs(2)));
        assert_eq!(stages[1].commands.len(), 2);
        assert_eq!(stages[1].then_wait, None);
    }

    #[test]
    fn test_trailing_delay_has_no_empty_stage() {
        let mut plan = RenderPlan::new();
        plan.clear().delay(Duration::from_millis(10));
        assert_eq!(plan.stages().len(), 1);
        assert_eq!(plan.total_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_empty_plan_has_no_stages() {
        assert!(RenderPlan::new().stages().is_empty());
    }

    #[test]
    fn test_texts_in_order() {
        let mut plan = RenderPlan::new();
        plan.clear()
            .text(0, 0, "a", TextStyle::Title)
            .text(0, 1, "b", TextStyle::Highlight);
        assert_eq!(plan.texts(), vec!["a", "b"]);
    }
}
