use std::env;
use std::fs;
use std::process::exit;

fn main() {
    // Logging
    env_logger::init();

    // Argument parsing
    let args: Vec<_> = env::args().collect();
    match args.len() {
        2 => {}
        _ => {
            println!("Usage: {} <path/to/file.svg>", args[0]);
            exit(1);
        }
    };

    // Load file
    let s = fs::read_to_string(&args[1]).unwrap_or_else(|e| {
        println!("Error: {}", e);
        exit(1);
    });

    // Parse data
    let points = svg2points::parse(&s).unwrap_or_else(|e| {
        println!("Error: {}", e);
        exit(2);
    });

    // Print data
    println!("Found {} points.", points.len());
    for point in &points {
        println!("{:>12.6} {:>12.6}", point.x, point.y);
    }
}
