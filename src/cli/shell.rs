use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::application::{HotelService, parse_category, parse_date, parse_room_id, parse_room_rate};
use crate::domain::{Room, format_rate};
use crate::io::{ImportOptions, Importer};

use super::{ExportKind, export, write_bookings, write_rooms};

/// One line of shell input.
#[derive(Parser)]
#[command(name = "shell", no_binary_name = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// List rooms
    Rooms,

    /// Describe a room
    Describe {
        /// Room number
        room: String,
    },

    /// Add a room, replacing any room with the same number
    AddRoom {
        /// Room number
        room: String,
        /// Category: single, double
        category: String,
        /// Price per night
        rate: String,
    },

    /// Book a room for a date
    Book {
        /// Room number
        room: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Check whether a room can be booked for a date
    Check {
        /// Room number
        room: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Cancel a booking
    Cancel {
        /// Room number
        room: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// List all bookings
    List,

    /// Book every row of a `room_id,date` CSV file
    Import {
        file: PathBuf,

        /// Validate without booking
        #[arg(long)]
        dry_run: bool,
    },

    /// Export to a file
    Export { kind: ExportKind, file: PathBuf },

    /// Show available commands
    Help,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Interactive session over a hotel. Errors are printed and the session
/// goes on; only I/O failures on the session streams end it.
pub struct Shell<'a> {
    service: &'a mut HotelService,
}

impl<'a> Shell<'a> {
    pub fn new(service: &'a mut HotelService) -> Self {
        Self { service }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(
            out,
            "{} booking shell. Type 'help' for commands.",
            self.service.name()
        )?;

        let mut buf = Vec::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    writeln!(out, "error: input is not valid UTF-8: {}", e)?;
                    continue;
                }
            };

            // Quotes and backslashes work as in a POSIX shell
            let words = match shell_words::split(line) {
                Ok(words) => words,
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            };
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(out, "{}", e.render())?;
                    continue;
                }
            };

            if matches!(command, ShellCommand::Quit) {
                break;
            }
            if let Err(e) = self.execute(command, &mut out) {
                writeln!(out, "error: {:#}", e)?;
            }
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        match command {
            ShellCommand::Rooms => write_rooms(out, self.service)?,

            ShellCommand::Describe { room } => {
                let description = self.service.describe(parse_room_id(&room)?)?;
                writeln!(out, "{}", description)?;
            }

            ShellCommand::AddRoom { room, category, rate } => {
                let room = Room::new(
                    parse_room_id(&room)?,
                    parse_category(&category)?,
                    parse_room_rate(&rate)?,
                );
                let description = room.describe(self.service.currency());
                self.service.add_room(room);
                writeln!(out, "Added room: {}", description)?;
            }

            ShellCommand::Book { room, date } => {
                let room_id = parse_room_id(&room)?;
                let date = parse_date(&date)?;
                let rate = self.service.book(room_id, date)?;
                writeln!(
                    out,
                    "Booked room {} for {}. Price: {}",
                    room_id,
                    date,
                    format_rate(rate, self.service.currency())
                )?;
            }

            ShellCommand::Check { room, date } => {
                let room_id = parse_room_id(&room)?;
                let date = parse_date(&date)?;
                let rate = self.service.check(room_id, date)?;
                writeln!(
                    out,
                    "Room {} is available on {}. Price: {}",
                    room_id,
                    date,
                    format_rate(rate, self.service.currency())
                )?;
            }

            ShellCommand::Cancel { room, date } => {
                let room_id = parse_room_id(&room)?;
                let date = parse_date(&date)?;
                self.service.cancel(room_id, date)?;
                writeln!(out, "Cancelled booking of room {} for {}", room_id, date)?;
            }

            ShellCommand::List => write_bookings(out, &self.service.list_all())?,

            ShellCommand::Import { file, dry_run } => {
                let reader = File::open(&file)
                    .with_context(|| format!("Failed to open input file: {}", file.display()))?;
                let result = Importer::new(self.service)
                    .import_bookings_csv(BufReader::new(reader), ImportOptions { dry_run })?;

                if dry_run {
                    writeln!(out, "Validated {} booking(s) (dry run)", result.imported)?;
                } else {
                    writeln!(out, "Imported {} booking(s)", result.imported)?;
                }
                for error in &result.errors {
                    writeln!(out, "  line {}: {}", error.line, error.error)?;
                }
            }

            ShellCommand::Export { kind, file } => {
                let writer = File::create(&file)
                    .with_context(|| format!("Failed to create output file: {}", file.display()))?;
                let summary = export(self.service, kind, writer)?;
                writeln!(out, "{} to {}", summary, file.display())?;
            }

            ShellCommand::Help => {
                writeln!(out, "{}", ShellLine::command().render_help())?;
            }

            ShellCommand::Quit => {}
        }
        Ok(())
    }
}
