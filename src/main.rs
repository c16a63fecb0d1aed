use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};

use log::info;

use tour_ring::{Result, RunOptions, TourMetrics, TourRing, logging, read_points};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = RunOptions::from_args()?;
    logging::init_logger(&options)?;
    let points = read_points(options.input_path())?;

    info!("input: n={}", points.len());
    info!("options: {options}");

    let mut ring = TourRing::new();
    for point in points {
        ring.insert(options.heuristic, point);
    }

    let mut out: Box<dyn Write> = match options.output_path() {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    for point in &ring {
        writeln!(out, "{point}")?;
    }
    out.flush()?;

    info!(
        "output: n={} time={:.2}s",
        ring.len(),
        now.elapsed().as_secs_f32()
    );

    TourMetrics::from_ring(&ring);

    Ok(())
}
