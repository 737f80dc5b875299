use crate::{
    banner::{BANNER, DESCRIPTION},
    error::*,
    Timestamp,
};
use std::{fmt, io};

/// Renders the banner, the current time, and an optional personal greeting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Greeter {
    target: Option<String>,
}

impl Greeter {
    /// `target` is greeted verbatim, without trimming or escaping.
    pub fn new(target: Option<String>) -> Self {
        Greeter { target }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whole output of a run for the given time
    pub fn render(&self, now: &Timestamp) -> String {
        self.at(now).to_string()
    }

    /// Greeting bound to a point in time, rendered through [fmt::Display]
    pub fn at<'a>(&'a self, now: &'a Timestamp) -> Greeting<'a> {
        Greeting {
            target: self.target(),
            now,
        }
    }

    /// Write [Greeter::render] output at once and flush
    pub fn write_to<W: io::Write>(&self, out: &mut W, now: &Timestamp) -> Result<()> {
        let text = self.render(now);
        log::debug!("Greeting {} at {}", self.target().unwrap_or("nobody"), now);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Output of [Greeter] for one run
///
/// ```text
/// <banner>
///
/// Current time: Www Mmm dd hh:mm:ss yyyy
///
/// <description>
///
/// Hello, <target>!      (only if a target is given)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting<'a> {
    target: Option<&'a str>,
    now: &'a Timestamp,
}

impl fmt::Display for Greeting<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in BANNER {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Current time: {}", self.now)?;
        writeln!(f)?;
        for line in DESCRIPTION {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        if let Some(target) = self.target {
            writeln!(f, "Hello, {}!", target)?;
        }
        Ok(())
    }
}
