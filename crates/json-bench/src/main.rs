//! Benchmark harness CLI

use clap::Parser;
use json_bench::{
    AdapterRegistry, BenchRunner, Protocol, Reporter, Result, default_adapters, load_corpus,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "json-bench")]
#[command(about = "Compare JSON parse/serialize throughput across libraries", long_about = None)]
struct Cli {
    /// Input JSON files; each becomes one benchmark document
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The whole corpus is in memory before any timing begins; a single
    // unreadable file aborts the run before the first report line.
    let corpus = load_corpus(&cli.files)?;

    let mut registry = AdapterRegistry::new();
    for adapter in default_adapters() {
        registry.register(adapter)?;
    }

    let runner = BenchRunner::new(Protocol::default(), registry, corpus)?;

    // The report goes to the diagnostic stream, line by line.
    let stderr = std::io::stderr();
    let mut reporter = Reporter::new(stderr.lock());
    runner.run(&mut reporter)
}
