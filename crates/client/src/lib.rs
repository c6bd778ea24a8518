//! Line-oriented driver for a single combat encounter.
//!
//! Reads commands from any [`BufRead`], submits them to a [`CombatSession`],
//! and writes the narrated log to any [`Write`]. The `dungeon` binary wires
//! this to stdin and stdout.
pub mod command;
pub mod config;
pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{Catalog, CombatSession, Combatant, RngOracle, SessionError, SessionState};
use tracing::{debug, info};

pub use command::{Command, HELP, ParseError};
pub use config::ClientConfig;

/// Plays `session` until it ends, the player quits, or input runs out.
///
/// Returns the session state at that point. Rejected actions are reported and
/// the player is prompted again.
pub fn run<R, I, O>(
    session: &mut CombatSession<'_, R>,
    catalog: &Catalog,
    input: I,
    mut output: O,
) -> Result<SessionState>
where
    R: RngOracle,
    I: BufRead,
    O: Write,
{
    writeln!(
        output,
        "{} encounters {}!",
        session.player().name(),
        session.enemy().name()
    )?;
    print_status(session, &mut output)?;
    writeln!(output, "type 'help' for commands")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("input closed");
            writeln!(output)?;
            return Ok(session.state());
        };
        let line = line?;

        let command = match Command::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(error)) => {
                writeln!(output, "{error}")?;
                continue;
            }
        };

        let action = match command {
            Command::Act(action) => action,
            Command::Status => {
                print_status(session, &mut output)?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => {
                info!(round = session.round(), "player quit");
                return Ok(session.state());
            }
        };

        let result = match session.submit_action(action) {
            Ok(result) => result,
            Err(SessionError::InvalidAction(error)) => {
                writeln!(output, "Cannot do that: {error}")?;
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        writeln!(output, "-- round {} --", result.round)?;
        for entry in &result.entries {
            writeln!(output, "{}", render::describe(entry, &result, catalog))?;
        }

        if let Some(line) = render::outcome_line(result.state) {
            writeln!(output, "{line}")?;
            writeln!(output, "{}", render::status_line(&result.player))?;
            return Ok(result.state);
        }
        writeln!(output, "{}", render::status_line(&result.player))?;
        writeln!(output, "{}", render::status_line(&result.enemy))?;
    }
}

fn print_status<R: RngOracle, O: Write>(
    session: &CombatSession<'_, R>,
    output: &mut O,
) -> Result<()> {
    writeln!(output, "{}", render::status_line(&session.player().snapshot()))?;
    writeln!(output, "{}", render::status_line(&session.enemy().snapshot()))?;
    Ok(())
}
