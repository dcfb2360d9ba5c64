use castles::driver::{DriverConfig, Table};
use std::process;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    enable_tracing();

    let config = match DriverConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("usage: castles <max-width> <max-height> [--plain] [--histogram]");
            process::exit(2);
        }
    };

    println!(
        "Castle counts {{even, odd}} for widths 1..={} (lines) and heights 1..={}:",
        config.max_width, config.max_height
    );
    let max_height = config.max_height;
    for entry in Table::new(config) {
        print!("{}", entry.count);
        if entry.dims.height() < max_height {
            print!("; ");
        } else {
            println!();
        }
        if let Some(histogram) = &entry.histogram {
            let tally: Vec<_> = histogram
                .iter()
                .map(|(blocks, castles)| format!("{}:{}", blocks, castles))
                .collect();
            eprintln!("  {} by blocks: {}", entry.dims, tally.join(" "));
        }
    }
}
