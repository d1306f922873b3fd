use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application that turns clock-in/clock-out exports into attendance reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn raw clock-in/clock-out exports into one filled attendance report per employee",
    long_about = None
)]
pub struct Cli {
    /// Use a specific configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug output on the log stream
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one report per employee from the input export
    Run {
        #[arg(long, value_name = "FILE", help = "Clock-event export (xlsx, xls, ods or csv)")]
        input: Option<String>,

        #[arg(long, value_name = "FILE", help = "Report template to copy and fill")]
        template: Option<String>,

        #[arg(long, value_name = "DIR", help = "Directory receiving the reports")]
        output: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Also write the run summary as JSON to this file"
        )]
        summary: Option<String>,

        #[arg(long = "dry-run", help = "Process everything but do not write reports")]
        dry_run: bool,
    },

    /// Show the aggregated daily records without touching any template
    Inspect {
        #[arg(long, value_name = "FILE", help = "Clock-event export (xlsx, xls, ods or csv)")]
        input: Option<String>,

        #[arg(long, short, help = "Only show this employee (raw or normalized name)")]
        employee: Option<String>,

        #[arg(long, value_name = "FILE", help = "Also write the daily records to an xlsx file")]
        xlsx: Option<String>,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file with --init")]
        force: bool,
    },
}
