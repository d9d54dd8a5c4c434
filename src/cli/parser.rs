use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for trackese
/// CLI application to record student attendance in per-section CSV files
#[derive(Parser)]
#[command(
    name = "trackese",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: mark students present or absent per batch and section, stored as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the home directory (config, registry, audit log, data)
    #[arg(global = true, long = "home", value_name = "DIR")]
    pub home: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, configuration and section registry
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the registered batch/section pairs
    Section {
        #[command(subcommand)]
        action: SectionAction,
    },

    /// Add students to a section and list them
    Students {
        /// Batch name (e.g. 58)
        batch: String,
        /// Section label (e.g. C)
        section: String,

        /// Add every numeric id from START to END (inclusive)
        #[arg(long = "range", num_args = 2, value_names = ["START", "END"])]
        range: Option<Vec<String>>,

        /// Add ids from a list such as "1-5, 8, 10-12"
        #[arg(long = "add", value_name = "LIST")]
        add: Option<String>,
    },

    /// Mark attendance for one or more students
    #[command(group(
        ArgGroup::new("mark_value").required(true).args(["present", "absent"])
    ))]
    Mark {
        batch: String,
        section: String,

        /// Student ids to mark
        #[arg(required_unless_present = "remaining")]
        students: Vec<String>,

        #[arg(long = "present", short = 'p', help = "Mark as present")]
        present: bool,

        #[arg(long = "absent", short = 'a', help = "Mark as absent")]
        absent: bool,

        /// Date of the attendance (YYYY-MM-DD, default today)
        #[arg(long = "date", short = 'd')]
        date: Option<String>,

        /// Also mark every student still unmarked on the date
        #[arg(long = "remaining", help = "Mark every student still unmarked on the date")]
        remaining: bool,
    },

    /// List students still unmarked on a date, with their recent history
    Pending {
        batch: String,
        section: String,

        /// Date to check (YYYY-MM-DD, default today)
        #[arg(long = "date", short = 'd')]
        date: Option<String>,
    },

    /// Show the attendance history of a section
    Show {
        batch: String,
        section: String,

        /// Only show this date (YYYY-MM-DD)
        #[arg(long = "date", short = 'd')]
        date: Option<String>,
    },

    /// List the dates of the current month, or the days before a date
    Dates {
        /// Show the N days before --from instead of the current month
        #[arg(long = "last", value_name = "N")]
        last: Option<usize>,

        /// Reference date for --last (YYYY-MM-DD, default today)
        #[arg(long = "from", requires = "last")]
        from: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Archive the section files and registry into a zip file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum SectionAction {
    /// List registered sections
    List,

    /// Register a batch/section pair
    Add { batch: String, section: String },

    /// Unregister a batch/section pair (its CSV file is kept)
    Remove { batch: String, section: String },
}
