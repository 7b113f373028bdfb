//! Go Text Protocol (GTP) front end.
//!
//! Drives a [`Session`] from a line-based command stream so the engine can
//! be scripted or attached to a board GUI. Only the commands that make sense
//! for a rules-only engine are provided; there is no move generation.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - only 9 is accepted
//! - `clear_board` - reset the session
//! - `play <color> <vertex>` - play for the side to move
//! - `showboard` - ASCII diagram
//! - `captures <color>` - stones of that color captured so far
//! - `territory` - current territory estimate
//! - `final_status_list dead|alive` - stones marked dead or alive
//! - `history` - moves played so far
//!
//! ## Example
//!
//! ```
//! use igo::gtp::GtpEngine;
//!
//! let mut engine = GtpEngine::new();
//! let mut out = Vec::new();
//! engine.run("play black E5\nshowboard\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("= \n"));
//! ```

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::board::{Color, parse_vertex, vertex};
use crate::constants::N;
use crate::error::GoError;
use crate::session::Session;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "final_status_list",
    "history",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "territory",
    "version",
];

/// GTP engine state.
#[derive(Default)]
pub struct GtpEngine {
    session: Session,
}

impl GtpEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and answered like
    /// any other line, so one bad line never ends the session.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw).context("reading command")? == 0 {
                break;
            }
            let line = preprocess(&String::from_utf8_lossy(&raw));
            if line.is_empty() {
                continue;
            }

            let (id, command_line) = parse_id(&line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            debug!(%command, ?args, "gtp command");
            let (prefix, message) = match self.execute(&command, args) {
                Ok(message) => ('=', message),
                Err(message) => ('?', message),
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n").context("writing response")?;
            output.flush().context("flushing response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command; `Err` carries the failure message.
    fn execute(&mut self, command: &str, args: &[&str]) -> Response {
        if !is_known(command) {
            return Err(format!("unknown command: {command}"));
        }
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),
            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),
            "protocol_version" => Ok("2".to_string()),
            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),
            "known_command" => Ok(is_known(first_arg(args)?).to_string()),
            "boardsize" => match first_arg(args)?.parse::<usize>() {
                Ok(size) if size == N => Ok(String::new()),
                Ok(size) => Err(format!("unacceptable size, only {N} is supported (got {size})")),
                Err(_) => Err("invalid size".to_string()),
            },
            "clear_board" => {
                self.session.reset();
                Ok(String::new())
            }
            "play" => self.play(args),
            "showboard" => {
                let diagram = self.session.board().to_string();
                Ok(format!("\n{}", diagram.trim_end()))
            }
            "captures" => {
                let color = Color::parse(first_arg(args)?).ok_or("invalid color")?;
                Ok(self.session.captured(color).to_string())
            }
            "territory" => {
                let t = self.session.territory();
                Ok(format!("black {} white {}", t.black, t.white))
            }
            "final_status_list" => self.final_status_list(first_arg(args)?),
            "history" => Ok(self.session.history_record()),
            // quit
            _ => Ok(String::new()),
        }
    }

    fn final_status_list(&self, status: &str) -> Response {
        let stones = match status.to_lowercase().as_str() {
            "dead" => self.session.dead_stones(),
            "alive" => self.session.alive_stones(),
            "seki" => return Err("status seki is not tracked".to_string()),
            _ => return Err("invalid status".to_string()),
        };
        Ok(stones.into_iter().map(vertex).collect::<Vec<_>>().join(" "))
    }

    fn play(&mut self, args: &[&str]) -> Response {
        let [color, vtx, ..] = args else {
            return Err("missing arguments".to_string());
        };
        let color = Color::parse(color).ok_or("invalid color")?;
        let to_move = self.session.to_move();
        if color != to_move {
            return Err(format!("illegal move: {to_move} to play"));
        }
        if vtx.eq_ignore_ascii_case("pass") {
            return Err("pass is not supported".to_string());
        }
        let (row, col) = parse_vertex(vtx).ok_or("invalid vertex")?;

        match self.session.play(row, col) {
            Ok(_) => Ok(String::new()),
            Err(GoError::Occupied { .. }) => Err("illegal move: occupied".to_string()),
            Err(GoError::Forbidden { .. }) => Err("illegal move: forbidden".to_string()),
            Err(err) => Err(err.to_string()),
        }
    }
}

/// Success or failure text of one command.
type Response = std::result::Result<String, String>;

fn is_known(command: &str) -> bool {
    KNOWN_COMMANDS.contains(&command.to_lowercase().as_str())
}

fn first_arg<'a>(args: &[&'a str]) -> std::result::Result<&'a str, String> {
    args.first().copied().ok_or_else(|| "missing argument".to_string())
}

/// Input preprocessing from the GTP spec: cut comments at `#`, drop
/// control characters, and turn tabs into spaces.
fn preprocess(line: &str) -> String {
    let line = line.split_once('#').map_or(line, |(head, _)| head);
    let cleaned: String = line
        .chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    cleaned.trim().to_string()
}

/// Split an optional numeric command ID from the front of the line.
fn parse_id(line: &str) -> (Option<u32>, &str) {
    let end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    match line[..end].parse::<u32>() {
        Ok(id) => (Some(id), line[end..].trim()),
        Err(_) => (None, line),
    }
}
