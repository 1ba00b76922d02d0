use clap::{Parser, Subcommand};

/// Command-line interface definition for qctracker
#[derive(Parser)]
#[command(
    name = "qctracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Quality-control checklist completion and time tracking per job, sheet and employee",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no update of the standard config file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or validate the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Validate jobs, employees and checklist definitions"
        )]
        check: bool,
    },

    /// Print checklist definitions
    Checklist {
        /// Sheet to print (housewire, integration, ee); all when omitted
        sheet: Option<String>,
    },

    /// Run an interactive QC session reading commands from stdin
    Session {
        #[arg(long = "job", help = "Job to start with (default from config)")]
        job: Option<String>,

        #[arg(
            long = "employee",
            short = 'e',
            help = "Employee to start with (default from config)"
        )]
        employee: Option<String>,

        #[arg(long = "no-persist", help = "Do not write time snapshots to the database")]
        no_persist: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
