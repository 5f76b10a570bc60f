use tracing::trace;

use crate::core::BinaryOperator;
use crate::display::{DisplaySink, RenderSnapshot};
use crate::error::CalcResult;
use crate::state::{CalculatorState, Phase};

use super::{CalcEngineConfig, EngineSnapshot, InputEvent};

/// Main orchestration facade consumed by host applications.
///
/// `CalcEngine` owns exactly one calculator state and one display sink. Every
/// handled event fully mutates the state and then pushes a fresh render
/// snapshot to the sink before the next event is accepted.
pub struct CalcEngine<D: DisplaySink> {
    display: D,
    config: CalcEngineConfig,
    state: CalculatorState,
}

impl<D: DisplaySink> CalcEngine<D> {
    pub fn new(display: D, config: CalcEngineConfig) -> CalcResult<Self> {
        config.entry_policy.validate()?;
        let mut engine = Self {
            display,
            state: CalculatorState::new(config.entry_policy),
            config,
        };
        if engine.config.present_initial_snapshot {
            engine.present()?;
        }
        Ok(engine)
    }

    /// Dispatches one input event and refreshes the display.
    pub fn handle_event(&mut self, event: InputEvent) -> CalcResult<()> {
        trace!(?event, "handle input event");
        match event {
            InputEvent::Digit(digit) => self.state.press_digit(digit),
            InputEvent::Decimal => self.state.press_decimal(),
            InputEvent::Operator(op) => self.state.press_operator(op),
            InputEvent::Equals => self.state.press_equals(),
            InputEvent::Clear => self.state.clear(),
            InputEvent::ToggleSign => self.state.toggle_sign(),
            InputEvent::Percent => self.state.percent(),
            InputEvent::Backspace => self.state.backspace(),
        }
        self.present()
    }

    pub fn press_digit(&mut self, digit: char) -> CalcResult<()> {
        self.handle_event(InputEvent::Digit(digit))
    }

    pub fn press_decimal(&mut self) -> CalcResult<()> {
        self.handle_event(InputEvent::Decimal)
    }

    pub fn press_operator(&mut self, op: BinaryOperator) -> CalcResult<()> {
        self.handle_event(InputEvent::Operator(op))
    }

    pub fn press_equals(&mut self) -> CalcResult<()> {
        self.handle_event(InputEvent::Equals)
    }

    pub fn clear(&mut self) -> CalcResult<()> {
        self.handle_event(InputEvent::Clear)
    }

    pub fn toggle_sign(&mut self) -> CalcResult<()> {
        self.handle_event(InputEvent::ToggleSign)
    }

    pub fn percent(&mut self) -> CalcResult<()> {
        self.handle_event(InputEvent::Percent)
    }

    pub fn backspace(&mut self) -> CalcResult<()> {
        self.handle_event(InputEvent::Backspace)
    }

    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(&self.state)
    }

    #[must_use]
    pub fn config(&self) -> CalcEngineConfig {
        self.config
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn present(&mut self) -> CalcResult<()> {
        let snapshot = RenderSnapshot::capture(&self.state);
        self.display.present(&snapshot)
    }
}
