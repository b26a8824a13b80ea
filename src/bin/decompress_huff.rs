use std::{fs, path::Path, process, time::Instant};

use clap::Parser;
use huffman_rust::{decompress, properties::Properties};

#[derive(Parser, Debug)]
#[command(about = "Restore a file compressed by compress_huff")]
struct Args {
    /// The compressed file
    source_name: String,
    /// The destination of the restored file
    dest_name: String,
}

fn main() {
    let args = Args::parse();

    let blob = fs::read(&args.source_name).unwrap_or_else(|e| {
        eprintln!("Could not read {}: {}", args.source_name, e);
        process::exit(1);
    });

    let decomp_time = Instant::now();
    let data = decompress(&blob).unwrap_or_else(|e| {
        eprintln!("Decompression of {} failed: {}", args.source_name, e);
        process::exit(1);
    });
    let decomp_time = decomp_time.elapsed().as_nanos();

    let props_name = format!("{}.properties", args.source_name);
    let props_path = Path::new(&props_name);
    if props_path.exists() {
        match Properties::load(props_path) {
            Ok(props) if props.original_size != data.len() as u64 => {
                eprintln!(
                    "{} records {} bytes but {} were restored",
                    props_name,
                    props.original_size,
                    data.len()
                );
                process::exit(1);
            }
            Ok(_) => {}
            Err(e) => eprintln!("Ignoring {}: {}", props_name, e),
        }
    }

    if let Err(e) = fs::write(&args.dest_name, &data) {
        eprintln!("Could not write {}: {}", args.dest_name, e);
        process::exit(1);
    }

    println!("decompressed {} bytes into {} ({} bytes) in {}ns", blob.len(), args.dest_name, data.len(), decomp_time);
}
