use chrono::Datelike;
use clap::{ArgAction, Args, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{io::Write, path::PathBuf};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="methfinder",
          version=&**FULL_VERSION,
          about="Find methylase (methyltransferase) recognition sites and their flanking bases in FASTA records",
          long_about = None,
          arg_required_else_help = true,
          after_help = format!("Copyright (C) 2023-{}     methfinder developers
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(flatten)]
    pub find: FindArgs,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "The full path to your FASTA file to search (optionally gzipped)")]
    #[clap(value_name = "FASTA")]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "find")]
    #[clap(help = "The search string or the methylase recognition sequence")]
    #[clap(value_name = "MOTIF")]
    #[arg(value_parser = check_motif_nonempty)]
    pub motif: String,

    #[clap(short = 'n')]
    #[clap(long = "numbases")]
    #[clap(help = "Number of bases before or after the search string to report")]
    #[clap(value_name = "NUMBASES")]
    #[clap(default_value = "2")]
    pub num_bases: usize,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Path to the output file (standard output if omitted)")]
    #[clap(value_name = "OUTPUT")]
    pub output_path: Option<PathBuf>,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_motif_nonempty(s: &str) -> std::result::Result<String, String> {
    if s.trim().is_empty() {
        Err("Search string cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}
