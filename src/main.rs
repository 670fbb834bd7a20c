// tval: NaN-boxed value codec checks, benchmarks and inspector

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tval::diag::bench::{self, BenchReport};
use tval::diag::catalog::Catalog;
use tval::diag::constants::DEFAULT_PERF_ITERATIONS;
use tval::diag::report;
use tval::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [check | perf [iterations] | inspect]", program_name);
    eprintln!();
    eprintln!("  check               Print every sample value with its decoded payload");
    eprintln!(
        "  perf [iterations]   Time conversion and search loops (default {})",
        DEFAULT_PERF_ITERATIONS
    );
    eprintln!("  inspect             Browse the sample values interactively (default)");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tval");

    match args.get(1).map(|s| s.as_str()) {
        None | Some("inspect") => inspect(),
        Some("check") => {
            check();
            Ok(())
        }
        Some("perf") => {
            let iterations = match args.get(2) {
                Some(n) => match n.replace('_', "").parse::<u64>() {
                    Ok(n) => n,
                    Err(e) => {
                        eprintln!("Error: invalid iteration count '{}': {}", n, e);
                        std::process::exit(1);
                    }
                },
                None => DEFAULT_PERF_ITERATIONS,
            };
            perf(iterations)
        }
        Some("-h") | Some("--help") => {
            print_usage(program_name);
            Ok(())
        }
        Some(other) => {
            eprintln!("Error: unknown command '{}'", other);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    }
}

fn check() {
    let catalog = Catalog::new();
    for line in report::check_listing(&catalog) {
        println!("{}", line);
    }
}

fn print_reports(reports: &[BenchReport]) -> usize {
    let mut failed = 0;
    for r in reports {
        let rate = match r.rate() {
            Some(rate) => format!("{:>14.0}", rate),
            None => format!("{:>14}", "inf"),
        };
        println!(
            "{:<24} {} iter/sec ({:.2} sec)",
            format!("{}:", r.label),
            rate,
            r.elapsed.as_secs_f64()
        );
        if !r.passed() {
            eprintln!("  {} of {} iterations failed", r.failures, r.iterations);
            failed += 1;
        }
    }
    failed
}

fn perf(iterations: u64) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Running {} iterations per loop...", iterations);

    println!("\n** performance (conversions) **\n");
    let mut failed = print_reports(&bench::run_conversions(iterations));

    println!("\n** performance (bfind) **\n");
    failed += print_reports(&bench::run_searches(iterations));

    if failed > 0 {
        return Err(format!("{} benchmark loop(s) computed wrong results", failed).into());
    }
    Ok(())
}

fn inspect() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::new();
    eprintln!("Loaded {} sample values.", catalog.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(catalog);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
