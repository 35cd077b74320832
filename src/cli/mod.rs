mod logging;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{Write, stdout};
use std::path::PathBuf;

use crate::application::{Clock, HotelService, parse_date, parse_room_id};
use crate::domain::{Reservation, format_rate};
use crate::io::{Exporter, SeedConfig, SeedReport};

pub use logging::init_logging;
pub use shell::Shell;

/// Innkeep - room bookings for a single hotel
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(about = "Book, cancel and list hotel room reservations, kept in memory")]
#[command(version)]
pub struct Cli {
    /// Seed file (JSON) with the hotel's rooms and initial bookings
    #[arg(short, long, global = true)]
    pub seed: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD, defaults to the local date)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the hotel's rooms
    Rooms,

    /// List bookings from the seed
    Bookings {
        /// Only show bookings of this room
        #[arg(long)]
        room: Option<String>,
    },

    /// Export the seeded state to CSV or JSON
    Export {
        /// What to export
        kind: ExportKind,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start an interactive booking session
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Bookings as CSV
    Bookings,
    /// Rooms as CSV
    Rooms,
    /// Rooms and bookings as JSON
    Full,
}

impl Cli {
    /// Build the hotel from the seed file (or the built-in one) and the clock
    /// selected on the command line.
    fn build_service(&self) -> Result<(HotelService, SeedReport)> {
        let clock = match &self.today {
            Some(date_str) => Clock::Fixed(parse_date(date_str).with_context(|| {
                format!("Invalid --today value '{}'. Use YYYY-MM-DD", date_str)
            })?),
            None => Clock::System,
        };

        let seed = match &self.seed {
            Some(path) => SeedConfig::load(path)
                .with_context(|| format!("Failed to load seed file: {}", path.display()))?,
            None => SeedConfig::default(),
        };

        Ok(seed.build(clock)?)
    }

    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        let (mut service, report) = self.build_service()?;
        if !report.skipped.is_empty() {
            eprintln!("Skipped {} seed booking(s):", report.skipped.len());
            for skipped in &report.skipped {
                eprintln!("  room {} on {}: {}", skipped.room_id, skipped.date, skipped.error);
            }
        }

        let mut out = stdout().lock();
        match self.command {
            Commands::Rooms => {
                write_rooms(&mut out, &service)?;
            }

            Commands::Bookings { room } => match room {
                Some(room_str) => {
                    let room_id = parse_room_id(&room_str)?;
                    let reservations: Vec<Reservation> = service
                        .bookings_for(room_id)?
                        .into_iter()
                        .map(|date| Reservation::new(room_id, date))
                        .collect();
                    write_bookings(&mut out, &reservations)?;
                }
                None => write_bookings(&mut out, &service.list_all())?,
            },

            Commands::Export { kind, output } => match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| {
                        format!("Failed to create output file: {}", path.display())
                    })?;
                    let summary = export(&service, kind, file)?;
                    eprintln!("{}", summary);
                }
                None => {
                    export(&service, kind, &mut out)?;
                }
            },

            Commands::Shell => {
                let stdin = std::io::stdin();
                Shell::new(&mut service).run(stdin.lock(), out)?;
            }
        }

        Ok(())
    }
}

/// Write the room table.
pub fn write_rooms<W: Write>(out: &mut W, service: &HotelService) -> Result<()> {
    let rooms = service.rooms();
    if rooms.is_empty() {
        writeln!(out, "No rooms found.")?;
        return Ok(());
    }

    writeln!(out, "{}", service.name())?;
    writeln!(out, "{:<8} {:<10} {:>12}", "NUMBER", "CATEGORY", "RATE")?;
    writeln!(out, "{}", "-".repeat(32))?;
    for room in rooms {
        writeln!(
            out,
            "{:<8} {:<10} {:>12}",
            room.id,
            room.category.as_str(),
            format_rate(room.rate, service.currency())
        )?;
    }
    Ok(())
}

/// Write one line per booking, or a placeholder when there are none.
pub fn write_bookings<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<()> {
    if reservations.is_empty() {
        writeln!(out, "No bookings.")?;
        return Ok(());
    }
    for reservation in reservations {
        writeln!(out, "{} date: {}", reservation.room_id, reservation.date)?;
    }
    Ok(())
}

/// Export `kind` to `writer` and return a one-line summary.
pub fn export<W: Write>(service: &HotelService, kind: ExportKind, writer: W) -> Result<String> {
    let exporter = Exporter::new(service);
    let summary = match kind {
        ExportKind::Bookings => {
            let count = exporter.export_bookings_csv(writer)?;
            format!("Exported {} booking(s)", count)
        }
        ExportKind::Rooms => {
            let count = exporter.export_rooms_csv(writer)?;
            format!("Exported {} room(s)", count)
        }
        ExportKind::Full => {
            let snapshot = exporter.export_full_json(writer)?;
            format!(
                "Exported {}: {} room(s), {} booking(s)",
                snapshot.name,
                snapshot.rooms.len(),
                snapshot.reservations.len()
            )
        }
    };
    Ok(summary)
}
