use seqmatrix::bench::MatrixRunner;
use seqmatrix::config::persistence::ResultsStorage;
use seqmatrix::config::MatrixConfig;
use seqmatrix::report;
use seqmatrix::util::units::format_duration;
use std::time::Instant;

// Individual I/O failures never propagate to the exit status; the process
// always exits 0.
fn main() {
    let config = MatrixConfig::default();

    let runner = match MatrixRunner::new(config.clone()) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("Invalid benchmark configuration: {}", err);
            return;
        }
    };

    println!(
        "Benchmarking {} configurations in {}",
        config.pair_count(),
        config.target_dir.display()
    );

    let start = Instant::now();
    let results = runner.run();
    println!(
        "Completed {} of {} configurations in {}",
        results.len(),
        config.pair_count(),
        format_duration(start.elapsed())
    );

    match report::write_csv(&results, &config.report_path) {
        Ok(()) => println!("Report written to {}", config.report_path.display()),
        Err(err) => eprintln!("{}", err),
    }

    match ResultsStorage::new() {
        Ok(storage) => {
            if let Err(err) = storage.append_results(results.as_slice()) {
                eprintln!("{}", err);
            }
        }
        Err(err) => eprintln!("{}", err),
    }
}
