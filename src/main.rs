//! Tornado CLI - Render the tornado animation from JSON configuration.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use tornado_anim::{AnimationConfig, render_to_gif};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    if args.get(1).is_some_and(|a| a == "--help" || a == "-h") || args.len() > 2 {
        eprintln!("Usage: {} [config.json]", args[0]);
        eprintln!();
        eprintln!("Render the tornado animation to a looping GIF.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to animation configuration file (default: built-in 8x8 demo)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    // Load configuration
    let config: AnimationConfig = match args.get(1) {
        Some(path) => {
            let config_path = PathBuf::from(path);
            let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => AnimationConfig::default(),
    };

    println!("Tornado Animation");
    println!("=================");
    println!("Canvas: {}x{}", config.width, config.height);
    println!("Rows: {}", config.rows.len());
    println!("Frames: {}", config.frame_budget);
    println!("Delay: {} cs/frame", config.frame_delay);
    match config.random_seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: random"),
    }
    println!("Output: {}", config.output_path.display());
    println!();

    let start = Instant::now();
    let stats = render_to_gif(&config).unwrap_or_else(|e| {
        eprintln!("Error rendering animation: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    });

    println!("Wrote {}", stats);
    println!("Time: {:.3}s", start.elapsed().as_secs_f32());
}

fn print_example_config() {
    let config = AnimationConfig {
        random_seed: Some(42),
        ..Default::default()
    };

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            std::process::exit(1);
        }
    }
}
