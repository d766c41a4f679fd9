//! Console session - the interactive read-eval-print loop
//!
//! Generic over its input and output so scripted sessions can drive it.

use super::{AppealOutcome, Court, Hearing};
use crate::achievement::Achievement;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompt shown before every plea
pub const PROMPT: &str = "> ";

/// Prompt shown for the post-ruling menu
pub const MENU_PROMPT: &str = "Choose (1-4): ";

/// Top-level command read at the plea prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    History,
    Achievements,
    Empty,
    Problem(String),
}

impl Command {
    /// Parse a raw input line; keywords are case-insensitive
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "q" => Command::Quit,
            "history" => Command::History,
            "achievements" => Command::Achievements,
            "" => Command::Empty,
            _ => Command::Problem(input.to_string()),
        }
    }
}

/// Choice offered after a ruling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Appeal,
    NewProblem,
    History,
    Quit,
    /// Anything unrecognized moves on to the next plea
    Other,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Appeal,
            "2" => MenuChoice::NewProblem,
            "3" => MenuChoice::History,
            "4" => MenuChoice::Quit,
            _ => MenuChoice::Other,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjournment {
    /// `q` at the plea prompt
    Quit,
    /// `4` at the post-ruling menu
    MenuQuit,
    /// Input stream closed
    EndOfInput,
}

/// Interactive console bound to an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the session until the player leaves
    pub fn run(&mut self, court: &mut Court) -> Result<Adjournment> {
        self.greet()?;

        loop {
            writeln!(
                self.output,
                "\nJudge AstraLex ({} demeanor) awaits your plea:",
                court.judge().persona().name
            )?;
            let Some(line) = self.prompt(PROMPT)? else {
                return self.leave(Adjournment::EndOfInput);
            };

            let problem = match Command::parse(&line) {
                Command::Quit => return self.leave(Adjournment::Quit),
                Command::History => {
                    self.show_history(court)?;
                    continue;
                }
                Command::Achievements => {
                    self.show_achievements(court)?;
                    continue;
                }
                Command::Empty => {
                    writeln!(self.output, "The Court requires a problem, not silence! Try again.")?;
                    continue;
                }
                Command::Problem(problem) => problem,
            };

            let hearing = court.hear(&problem)?;
            self.show_ruling(&problem, &hearing)?;

            writeln!(
                self.output,
                "Options: (1) Appeal this ruling, (2) Present new problem, (3) View history, (4) Quit"
            )?;
            let Some(choice) = self.prompt(MENU_PROMPT)? else {
                return self.leave(Adjournment::EndOfInput);
            };

            let choice = MenuChoice::parse(&choice);
            debug!(?choice, "menu choice");
            match choice {
                MenuChoice::Appeal => {
                    writeln!(self.output, "\nAppeal granted! The Court reconsiders...")?;
                    self.output.flush()?;
                    let pause = court.appeal_pause();
                    if !pause.is_zero() {
                        std::thread::sleep(pause);
                    }
                    let outcome = court.appeal(hearing.case_index)?;
                    self.show_revision(&outcome)?;
                }
                MenuChoice::History => self.show_history(court)?,
                MenuChoice::Quit => return self.leave(Adjournment::MenuQuit),
                MenuChoice::NewProblem | MenuChoice::Other => {}
            }
        }
    }

    fn greet(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Court of Cosmic Justice!")?;
        writeln!(
            self.output,
            "Present your problem to Judge AstraLex, and receive a lawful ruling."
        )?;
        writeln!(
            self.output,
            "Type 'q' to quit, 'history' to view cases, 'achievements' for progress, or your problem."
        )?;
        Ok(())
    }

    fn leave(&mut self, adjournment: Adjournment) -> Result<Adjournment> {
        match adjournment {
            Adjournment::MenuQuit => {
                writeln!(self.output, "\nThe Court adjourns. Return when justice calls!")?
            }
            Adjournment::Quit | Adjournment::EndOfInput => writeln!(
                self.output,
                "\nThe Court of Cosmic Justice adjourns. Farewell, citizen!"
            )?,
        }
        self.output.flush()?;
        info!(?adjournment, "session adjourned");
        Ok(adjournment)
    }

    /// Print a prompt and read one line; `None` once the input is exhausted
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show_ruling(&mut self, problem: &str, hearing: &Hearing) -> Result<()> {
        let classification = &hearing.classification;
        writeln!(self.output, "\n*** Ruling from Judge AstraLex ***")?;
        writeln!(self.output, "Problem: {}", problem)?;
        writeln!(self.output, "Category: {}", classification.category.title())?;
        writeln!(self.output, "Severity: {}/10", classification.severity)?;
        writeln!(self.output, "Ruling: {}\n", hearing.ruling)?;
        self.announce(&hearing.new_achievements)
    }

    fn show_revision(&mut self, outcome: &AppealOutcome) -> Result<()> {
        writeln!(self.output, "\n*** Revised Ruling ***")?;
        writeln!(self.output, "Ruling: {}\n", outcome.ruling)?;
        self.announce(&outcome.new_achievements)
    }

    fn announce(&mut self, achievements: &[Achievement]) -> Result<()> {
        for achievement in achievements {
            writeln!(self.output, "Achievement unlocked: {}!", achievement)?;
        }
        Ok(())
    }

    fn show_history(&mut self, court: &Court) -> Result<()> {
        let cases = court.player().cases();
        if cases.is_empty() {
            writeln!(
                self.output,
                "\nNo cases filed yet. Present a problem to the Court!"
            )?;
            return Ok(());
        }

        writeln!(self.output, "\nCase History:")?;
        for (i, case) in cases.iter().enumerate() {
            writeln!(self.output, "Case {} ({}):", i + 1, case.timestamp_label())?;
            writeln!(self.output, "  Problem: {}", case.problem)?;
            writeln!(self.output, "  Category: {}", case.category.title())?;
            writeln!(self.output, "  Severity: {}/10", case.severity)?;
            writeln!(self.output, "  Ruling: {}\n", case.ruling)?;
        }
        Ok(())
    }

    fn show_achievements(&mut self, court: &Court) -> Result<()> {
        let unlocked = court.player().unlocked();
        if unlocked.is_empty() {
            writeln!(
                self.output,
                "\nNo achievements unlocked yet. Keep litigating!"
            )?;
            return Ok(());
        }

        writeln!(self.output, "\nAchievements Unlocked:")?;
        for achievement in unlocked {
            writeln!(self.output, "- {}", achievement)?;
        }
        Ok(())
    }
}
