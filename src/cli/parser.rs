use clap::{Parser, Subcommand};

/// Command-line interface definition for zkindicator
#[derive(Parser)]
#[command(
    name = "zkindicator",
    version = env!("CARGO_PKG_VERSION"),
    about = "List attendance devices and ZK punch logs with their status indicators",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Manage attendance devices
    Device {
        #[command(subcommand)]
        action: DeviceAction,
    },

    /// Manage ZK punch log entries
    Punch {
        #[command(subcommand)]
        action: PunchAction,
    },

    /// List a document type with its status indicators
    List {
        /// Document type: "Attendance Device" (device) or "ZK Log" (log)
        doctype: String,

        /// Filter expression `field,op,value` (e.g. "status,=,Online")
        #[arg(long, short)]
        filter: Option<String>,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve the indicator for a single inline record
    Indicator {
        /// Document type: "Attendance Device" (device) or "ZK Log" (log)
        doctype: String,

        /// Record as a JSON object, e.g. '{"status":"Online"}'
        #[arg(long, value_name = "JSON")]
        record: String,

        /// Print the indicator as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum DeviceAction {
    /// Add or update a device
    Add {
        /// Device serial number
        serial: String,

        /// Display name (default: "ZKTeco Device <serial>")
        #[arg(long)]
        name: Option<String>,

        /// Device IP address
        #[arg(long)]
        ip: Option<String>,

        /// Initial status (default: Offline)
        #[arg(long)]
        status: Option<String>,
    },

    /// Set a device's status
    Status {
        /// Device serial number
        serial: String,

        /// New status, normally Online or Offline
        status: String,
    },
}

#[derive(Subcommand)]
pub enum PunchAction {
    /// Record a pending punch
    Add {
        /// Serial number of the device that recorded the punch
        device_sn: String,

        /// User id on the device
        user_id: String,

        /// Punch time (YYYY-MM-DD HH:MM:SS)
        timestamp: String,

        /// Punch type: IN, OUT, 0 (in) or 1 (out); default IN
        #[arg(long = "type")]
        punch_type: Option<String>,
    },

    /// Mark a punch as processed (or pending again)
    Mark {
        /// Punch id
        id: i64,

        /// Mark as pending instead of processed
        #[arg(long)]
        pending: bool,
    },
}
