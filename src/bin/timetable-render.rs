//! Prints a weekly timetable with one display color per booking.
//!
//! Usage: `timetable-render <bookings.json> [config]`
//!
//! The JSON file holds `{"instructors": [...], "bookings": [...]}` in the
//! serde shape of the model types.

use serde::Deserialize;
use std::error::Error;
use std::{env, fs, process};
use tracing::{error, info};

use u_timetable::config::TimetableConfig;
use u_timetable::models::{Booking, Day, Grade, Instructor, TimeSlot};
use u_timetable::timetable::Timetable;

#[derive(Debug, Deserialize)]
struct Records {
    #[serde(default)]
    instructors: Vec<Instructor>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

fn main() {
    let mut args = env::args().skip(1);
    let Some(records_path) = args.next() else {
        eprintln!("usage: timetable-render <bookings.json> [config]");
        process::exit(2);
    };
    let config_path = args.next().unwrap_or_else(|| "timetable".to_string());

    let config = match TimetableConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            tracing_subscriber::fmt::init();
            error!("failed to load configuration: {}", err);
            process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(config.logger.level))
        .init();

    if let Err(err) = run(&records_path, config) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(records_path: &str, config: TimetableConfig) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(records_path)?;
    let records: Records = serde_json::from_str(&text)?;

    let timetable = Timetable::from_records(config, records.instructors, records.bookings)
        .map_err(|errors| {
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })?;
    info!(
        bookings = timetable.bookings().len(),
        instructors = timetable.instructors().len(),
        "timetable loaded"
    );

    let header: Vec<String> = Grade::ALL
        .iter()
        .map(|g| format!("{} Grade", g.ordinal()))
        .collect();
    println!("{:<10} {:<12} {}", "Day", "Hour", header.join(" | "));

    for day in Day::ALL {
        let colors = timetable.render_day(day)?;
        for slot in TimeSlot::ALL {
            let cells: Vec<String> = Grade::ALL
                .iter()
                .map(|&grade| {
                    timetable
                        .cell(day, slot, grade)
                        .iter()
                        .map(|b| match colors.get(&b.id) {
                            Some(color) => format!("{} [{}]", b.name, color),
                            None => b.name.clone(),
                        })
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect();
            println!("{:<10} {:<12} {}", day, slot.to_string(), cells.join(" | "));
        }
    }

    Ok(())
}
