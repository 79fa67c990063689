use anyhow::{bail, Context as AnyhowContext, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use alke_parking::{
    calculate_fee, fleet, simulation, ParkingConfig, VehicleType, VERSION,
};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo") => run_demo()?,
        Some("simulate") => run_simulate(&args[2..])?,
        Some("fee") => run_fee(&args[2..])?,
        Some("help") | Some("--help") | Some("-h") => print_usage(),
        Some(other) => {
            eprintln!("❌ Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for reports
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("alke-parking {}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    alke-parking [demo]");
    eprintln!("    alke-parking simulate <fleet.json> [config.json]");
    eprintln!("    alke-parking fee <car|motorcycle|minibus|bus> <minutes> [--discount]");
}

fn run_demo() -> Result<()> {
    let config = ParkingConfig::default();
    let mut parking = config.build_parking();
    let vehicles = fleet::sample_fleet(config.default_parked_time);

    // The demo sends off the 1st and 9th arrivals
    let departures = vec![vehicles[0].plate.clone(), vehicles[8].plate.clone()];

    let report = simulation::run(&mut parking, vehicles, &departures);

    for record in &report.check_ins {
        println!("{}, plate: {}", record.status, record.plate);
    }

    for record in &report.check_outs {
        match (record.fee, record.parked_time) {
            (Some(fee), Some(minutes)) => println!(
                "Your fee is ${}, parking time: {}. Come back soon",
                fee, minutes
            ),
            _ => println!("Sorry, the check-out failed"),
        }
    }

    println!("{}", report.profits);
    for plate in &report.parked_plates {
        println!("{}", plate);
    }

    Ok(())
}

fn run_simulate(args: &[String]) -> Result<()> {
    let Some(fleet_path) = args.first() else {
        bail!("simulate needs a fleet file: alke-parking simulate <fleet.json> [config.json]");
    };

    let config = match args.get(1) {
        Some(path) => ParkingConfig::from_file(path)?,
        None => ParkingConfig::default(),
    };

    let vehicles = fleet::load_fleet(fleet_path, config.default_parked_time)?;
    let mut parking = config.build_parking();
    let report = simulation::run_full_cycle(&mut parking, vehicles);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_fee(args: &[String]) -> Result<()> {
    let (vehicle_type, minutes, has_discount) = parse_fee_args(args)?;
    println!("${}", calculate_fee(vehicle_type, minutes, has_discount));
    Ok(())
}

/// `<type> <minutes>` with `--discount` allowed anywhere
fn parse_fee_args(args: &[String]) -> Result<(VehicleType, u32, bool)> {
    let has_discount = args.iter().any(|a| a == "--discount");
    let positional: Vec<&String> = args.iter().filter(|a| *a != "--discount").collect();

    let (Some(vehicle_type), Some(minutes)) = (positional.first(), positional.get(1)) else {
        bail!("fee needs a vehicle type and minutes: alke-parking fee <type> <minutes> [--discount]");
    };

    let vehicle_type: VehicleType = vehicle_type.parse()?;
    let minutes: u32 = minutes
        .parse()
        .with_context(|| format!("Invalid minutes: {}", minutes))?;

    Ok((vehicle_type, minutes, has_discount))
}
