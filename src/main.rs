use clap::Parser;

use hotel_infection_sim::domain::hotel::Hotel;
use hotel_infection_sim::domain::virus_map::VirusMap;
use hotel_infection_sim::error::Result;
use hotel_infection_sim::{load_hotel, load_virus_map, logger};

/// Demo driver: walks a hotel through assignments and one full room
/// lifecycle, then runs the infection-spread solver on a sample grid.
#[derive(Parser, Debug)]
#[command(name = "hotel_infection_sim")]
struct Args {
    /// Path to a hotel JSON file (defaults to a built-in 4-floor hotel)
    #[arg(long)]
    hotel: Option<String>,

    /// Path to an infection grid JSON file (defaults to a built-in 3x5 sample)
    #[arg(long)]
    grid: Option<String>,
}

fn run(args: Args) -> Result<()> {
    let mut hotel = match &args.hotel {
        Some(path) => {
            log::info!("Loading hotel from '{}'...", path);
            load_hotel(path)?
        }
        None => Hotel::new(4)?,
    };

    log::info!("Available rooms: {:?}", hotel.list_available_rooms());

    // Assign six guests, as many as fit.
    let first = hotel.assign_room();
    for _ in 0..5 {
        let _ = hotel.assign_room();
    }
    log::info!("Available rooms after assignment: {:?}", hotel.list_available_rooms());

    if let Some(number) = first {
        if let Some(room) = hotel.get_room_mut(&number) {
            room.check_out()?;
            room.repair()?;
            room.repaired()?;
            room.clean()?;
            log::info!("Room {} cycled back to {}.", room.number(), room.status());
        }
        log::info!("Available rooms after cleaning: {:?}", hotel.list_available_rooms());
    }

    let mut map = match &args.grid {
        Some(path) => {
            log::info!("Loading grid from '{}'...", path);
            load_virus_map(path)?
        }
        None => VirusMap::new(3, 5, vec![vec![2, 1, 0, 2, 1], vec![1, 1, 1, 1, 1], vec![1, 0, 0, 2, 1]])?,
    };

    let outcome = map.solve();
    println!("{}", outcome);

    Ok(())
}

fn main() {
    logger::init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
