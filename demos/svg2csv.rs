use std::env;
use std::fs;
use std::process::exit;

use csv::Writer;

fn main() {
    // Logging
    env_logger::init();

    // Argument parsing
    let args: Vec<_> = env::args().collect();
    match args.len() {
        3 => {}
        _ => {
            println!("Usage: {} <path/to/file.svg> <path/to/output.csv>", args[0]);
            exit(1);
        }
    };

    // Load file
    let s = fs::read_to_string(&args[1]).unwrap();

    // Parse data
    let points = svg2points::parse(&s).unwrap_or_else(|e| {
        println!("Error: {}", e);
        exit(2);
    });

    // Write data
    let mut wtr = Writer::from_path(&args[2]).unwrap();
    for point in &points {
        wtr.serialize(point).unwrap();
    }
    wtr.flush().unwrap();
    println!("Wrote {} points to {}.", points.len(), args[2]);
}
