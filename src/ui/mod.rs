//! Console presentation
//!
//! Turns language-neutral round events into localized, optionally colored
//! lines. Nothing in here feeds back into gameplay.

pub mod strings;

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};

use crate::error::SessionEnd;
use crate::session::{EventSink, RoundEvent};
pub use strings::{Lang, Strings};

/// Writes round events to a console stream
pub struct ConsoleRenderer<W: Write> {
    out: W,
    strings: Strings,
    color: bool,
    quiet: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, lang: Lang, color: bool, quiet: bool) -> Self {
        Self {
            out,
            strings: lang.strings(),
            color,
            quiet,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: impl Display, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: impl Display) -> String {
        if self.color {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> EventSink for ConsoleRenderer<W> {
    fn emit(&mut self, event: &RoundEvent) -> io::Result<()> {
        let s = self.strings;
        match *event {
            RoundEvent::Started {
                min,
                max,
                attempts_total,
                proximity,
            } => {
                if self.quiet {
                    return Ok(());
                }
                let title = self.bold(s.title());
                writeln!(self.out, "{title}")?;
                writeln!(self.out, "{}", s.intro(min, max, attempts_total))?;
                if proximity {
                    let help = self.paint(s.help_proximity(), Color::Blue);
                    writeln!(self.out, "{help}")?;
                }
            }
            RoundEvent::Miss {
                direction,
                proximity,
                remaining,
            } => {
                let line = self.paint(s.direction(direction), Color::Yellow);
                writeln!(self.out, "{line}")?;
                if let Some(tier) = proximity {
                    writeln!(self.out, "({})", s.proximity(tier))?;
                }
                writeln!(self.out, "{}", s.remaining(remaining))?;
            }
            RoundEvent::Won { used_count } => {
                let line = self.paint(s.win(used_count), Color::Green);
                writeln!(self.out, "{line}")?;
            }
            RoundEvent::Lost { secret } => {
                let line = self.paint(s.lose(secret), Color::Red);
                writeln!(self.out, "{line}")?;
            }
            RoundEvent::Score { score } => {
                writeln!(self.out, "{}", s.score(score))?;
            }
            RoundEvent::Record(update) => {
                let line = self.paint(
                    s.new_record(update.previous_best, update.current_best),
                    Color::Blue,
                );
                writeln!(self.out, "{line}")?;
            }
            RoundEvent::Ended(end) => {
                let text = match end {
                    SessionEnd::Interrupted => s.aborted(),
                    SessionEnd::EndOfInput => s.end_of_input(),
                };
                // Starts on a fresh line since the prompt is still pending
                let line = self.paint(text, Color::Red);
                writeln!(self.out)?;
                writeln!(self.out, "{line}")?;
            }
            RoundEvent::Goodbye => {
                if !self.quiet {
                    writeln!(self.out, "{}", s.goodbye())?;
                }
            }
        }
        self.out.flush()
    }
}
