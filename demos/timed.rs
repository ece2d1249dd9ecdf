use std::time::Duration;

use clap::Parser;
use linebar::{Alignment, LogWrapper, ProgressBar, TimedRun};
use log::{Log, Metadata, Record};

#[derive(Debug, Parser)]
struct Config {
    /// How long the bar takes to fill, in seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,
    /// Number of updates over that time
    #[arg(long, default_value_t = 100)]
    ticks: u64,
    /// Length of the bar body
    #[arg(long, default_value_t = 40)]
    length: usize,
    /// One of default, black, red, green, yellow, blue, magenta, cyan, white
    #[arg(long, default_value = "default")]
    color: String,
    /// Put the bar on the left and the elapsed time on the right
    #[arg(long)]
    left: bool,
    /// Print debug logs above the bar
    #[arg(short, long)]
    verbose: bool,
}

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

fn main() {
    let conf = Config::parse();
    if conf.verbose {
        LogWrapper::new(StdoutLogger).try_init().unwrap();
    }

    let alignment = if conf.left {
        Alignment::Left
    } else {
        Alignment::Right
    };
    let mut pb = ProgressBar::new(conf.length).with_alignment(alignment);
    pb.set_color_name(&conf.color);

    let result = TimedRun::new(&mut pb)
        .with_duration(Duration::from_secs_f64(conf.seconds))
        .with_ticks(conf.ticks)
        .start();
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
