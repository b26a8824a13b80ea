use std::{fs, path::Path, process, time::Instant};

use clap::Parser;
use huffman_rust::{compress_detailed, properties::Properties};

#[derive(Parser, Debug)]
#[command(about = "Compress a file with a byte-level Huffman code")]
struct Args {
    /// The file to compress
    source_name: String,
    /// The destination of the compressed file
    dest_name: String,
    /// Print the compression statistics as JSON
    #[arg(long = "json", default_value_t = false)]
    json: bool,
    /// Do not write the <dest>.properties sidecar
    #[arg(long = "no-properties", default_value_t = false)]
    no_properties: bool,
}

fn main() {
    let args = Args::parse();

    let data = fs::read(&args.source_name).unwrap_or_else(|e| {
        eprintln!("Could not read {}: {}", args.source_name, e);
        process::exit(1);
    });

    let comp_time = Instant::now();
    let result = compress_detailed(&data).unwrap_or_else(|e| {
        eprintln!("Compression of {} failed: {}", args.source_name, e);
        process::exit(1);
    });
    let comp_time = comp_time.elapsed().as_nanos();

    if let Err(e) = fs::write(&args.dest_name, &result.blob) {
        eprintln!("Could not write {}: {}", args.dest_name, e);
        process::exit(1);
    }

    if !args.no_properties {
        let props_name = format!("{}.properties", args.dest_name);
        if let Err(e) = Properties::from(&result.stats).store(Path::new(&props_name)) {
            eprintln!("Could not write {}: {}", props_name, e);
            process::exit(1);
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&result.stats) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Could not serialize the statistics: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!(
            "compressed {} bytes -> {} bytes ({:.1}%, {} symbols) in {}ns",
            result.stats.original_size,
            result.stats.compressed_size,
            result.stats.ratio,
            result.stats.distinct_symbols,
            comp_time
        );
    }
}
