use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bench::MonotonicClock;
use engines::SortRequest;
use rand::rngs::StdRng;
use sequence_source::{parse_numbers, random_below, random_sequence, rng_from_seed};
use shared::{
    domain::{Direction, EngineKind},
    error::SourceError,
};
use tracing::info;

use crate::{
    actions::{compare_and_print, run_demo, sort_and_print},
    config::Settings,
    render::{format_sequence, LEARN_TEXT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CustomSort,
    OddNumbersDemo,
    Compare,
    ToggleTrace,
    Learn,
    Exit,
}

impl MenuAction {
    pub fn from_choice(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::CustomSort),
            "2" => Some(Self::OddNumbersDemo),
            "3" => Some(Self::Compare),
            "4" => Some(Self::ToggleTrace),
            "5" => Some(Self::Learn),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive run. The step-by-step flag belongs to the session and is
/// handed to each sort as part of its request.
pub struct Session<R, W> {
    input: R,
    out: W,
    settings: Settings,
    trace: bool,
    rng: StdRng,
    clock: MonotonicClock,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, settings: Settings) -> Self {
        Self {
            input,
            out,
            trace: settings.trace_default,
            rng: rng_from_seed(settings.seed),
            clock: MonotonicClock::new(),
            settings,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "===========================================")?;
        writeln!(self.out, "   Number Sorter & Algorithm Visualizer")?;
        writeln!(self.out, "===========================================")?;

        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            let Some(action) = MenuAction::from_choice(&choice) else {
                writeln!(self.out, "\nInvalid option. Try again.")?;
                continue;
            };
            if self.dispatch(action)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        info!(?action, "menu action");
        match action {
            MenuAction::CustomSort => self.custom_sort(),
            MenuAction::OddNumbersDemo => {
                run_demo(&mut self.out)?;
                Ok(Flow::Continue)
            }
            MenuAction::Compare => self.compare(),
            MenuAction::ToggleTrace => {
                self.trace = !self.trace;
                writeln!(self.out, "\nStep by step mode: {}", on_off(self.trace))?;
                Ok(Flow::Continue)
            }
            MenuAction::Learn => {
                writeln!(self.out, "\n{LEARN_TEXT}")?;
                writeln!(self.out, "\nPress Enter to continue...")?;
                Ok(match self.read_line()? {
                    Some(_) => Flow::Continue,
                    None => Flow::Exit,
                })
            }
            MenuAction::Exit => {
                writeln!(self.out, "\nHappy sorting!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Main Menu ---")?;
        writeln!(self.out, "1. Sort your own numbers")?;
        writeln!(self.out, "2. Demo: Sort odd numbers (original exercise)")?;
        writeln!(self.out, "3. Compare sorting algorithms")?;
        writeln!(
            self.out,
            "4. Toggle step by step mode ({})",
            on_off(self.trace)
        )?;
        writeln!(self.out, "5. Learn about the algorithms")?;
        writeln!(self.out, "6. Exit\n")?;
        Ok(())
    }

    fn custom_sort(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Custom Number Sorting ---")?;
        writeln!(self.out, "1. Enter numbers manually")?;
        writeln!(self.out, "2. Generate random numbers")?;
        let Some(source) = self.prompt("Choice: ")? else {
            return Ok(Flow::Exit);
        };

        let numbers = if source == "1" {
            let Some(text) = self.prompt("Enter numbers separated by spaces: ")? else {
                return Ok(Flow::Exit);
            };
            parse_numbers(&text)
        } else {
            let Some(count) = self.prompt_or_default(
                "How many numbers? ",
                self.settings.random_count,
                "numbers",
            )?
            else {
                return Ok(Flow::Exit);
            };
            let Some(max) = self.prompt_or_default("Maximum value? ", self.settings.random_max, "")?
            else {
                return Ok(Flow::Exit);
            };
            random_sequence(&mut self.rng, count, max)
        };

        let numbers = match numbers {
            Ok(numbers) if !numbers.is_empty() => numbers,
            Ok(_) | Err(SourceError::Empty) => {
                writeln!(self.out, "No numbers to sort.")?;
                return Ok(Flow::Continue);
            }
            Err(error) => {
                writeln!(self.out, "Invalid input: {error}")?;
                writeln!(self.out, "No numbers to sort.")?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.out, "\nYour numbers: {}", format_sequence(&numbers))?;

        writeln!(self.out)?;
        let Some(order) = self.prompt("Sort ascending or descending? (a/d): ")? else {
            return Ok(Flow::Exit);
        };
        let direction = Direction::from_selector(&order);

        writeln!(self.out, "\nChoose sorting algorithm:")?;
        for (index, kind) in EngineKind::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {kind}", index + 1)?;
        }
        let Some(choice) = self.prompt("Choice: ")? else {
            return Ok(Flow::Exit);
        };
        let (engine, fell_back) = EngineKind::from_selector_or_default(&choice);
        if fell_back {
            writeln!(self.out, "Invalid choice. Using bubble sort.")?;
        }

        let request = SortRequest {
            engine,
            direction,
            trace: self.trace,
        };
        writeln!(self.out)?;
        sort_and_print(&mut self.out, request, numbers)?;
        Ok(Flow::Continue)
    }

    fn compare(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- Algorithm Comparison ---")?;
        let Some(count) = self.prompt_or_default(
            "How many random numbers to sort? ",
            self.settings.compare_count,
            "numbers",
        )?
        else {
            return Ok(Flow::Exit);
        };

        let input = match random_below(&mut self.rng, count, self.settings.compare_bound) {
            Ok(input) => input,
            Err(error) => {
                writeln!(self.out, "Invalid input: {error}")?;
                return Ok(Flow::Continue);
            }
        };
        compare_and_print(&mut self.out, &self.clock, &input, Direction::Ascending)?;
        Ok(Flow::Continue)
    }

    /// Prompts for a number; unparsable answers fall back to `default` with a note.
    fn prompt_or_default<T>(&mut self, label: &str, default: T, unit: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr + std::fmt::Display + Copy,
    {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        match answer.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                if unit.is_empty() {
                    writeln!(self.out, "Using default: {default}")?;
                } else {
                    writeln!(self.out, "Using default: {default} {unit}")?;
                }
                Ok(Some(default))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "ON"
    } else {
        "OFF"
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
