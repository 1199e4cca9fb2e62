//! Clap derive structures for the `frontdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// frontdesk -- hotel back office from the command line
#[derive(Debug, Parser)]
#[command(
    name = "frontdesk",
    version,
    about = "Manage hotel rooms, guests, and bookings from the command line",
    long_about = "Administer a hotel back-office REST backend.\n\n\
        Lists, creates, edits, and deletes rooms, guests, and bookings,\n\
        checks guests in and out, and shows the daily dashboard.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "FRONTDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend root URL (overrides profile)
    #[arg(long, short = 'u', env = "FRONTDESK_URL", global = true)]
    pub url: Option<String>,

    /// REST path prefix (overrides profile, default /api)
    #[arg(long, env = "FRONTDESK_API_PATH", global = true)]
    pub api_path: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FRONTDESK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, env = "FRONTDESK_COLOR", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "FRONTDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "FRONTDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the backend is reachable
    Status,

    /// Show today's summary figures
    #[command(alias = "dash")]
    Dashboard,

    /// Manage rooms
    #[command(alias = "r")]
    Rooms(RoomsArgs),

    /// Manage guests
    #[command(alias = "g")]
    Guests(GuestsArgs),

    /// Manage bookings, check-ins, and check-outs
    #[command(alias = "b")]
    Bookings(BookingsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Rooms ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms
    #[command(alias = "ls")]
    List {
        /// Only rooms that are available
        #[arg(long, conflicts_with = "search")]
        available: bool,

        /// Case-insensitive text search over the rendered rows
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Add a room
    Add {
        /// Room number (positive integer)
        #[arg(long, short = 'n')]
        number: String,

        /// Room type
        #[arg(long = "type", short = 't', value_parser = ROOM_TYPES)]
        room_type: String,

        /// Price per night
        #[arg(long)]
        price: String,

        /// Initial status (default: available)
        #[arg(long, value_parser = ROOM_STATUSES)]
        status: Option<String>,
    },

    /// Edit a room; omitted fields keep their current value
    Edit {
        /// Room ID
        id: String,

        #[arg(long, short = 'n')]
        number: Option<String>,

        #[arg(long = "type", short = 't', value_parser = ROOM_TYPES)]
        room_type: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long, value_parser = ROOM_STATUSES)]
        status: Option<String>,
    },

    /// Delete a room
    #[command(alias = "rm")]
    Delete {
        /// Room ID
        id: String,
    },
}

pub const ROOM_TYPES: [&str; 4] = ["single", "double", "deluxe", "suite"];
pub const ROOM_STATUSES: [&str; 3] = ["available", "occupied", "maintenance"];
pub const BOOKING_STATUSES: [&str; 3] = ["booked", "checked-in", "checked-out"];

// ── Guests ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GuestsArgs {
    #[command(subcommand)]
    pub command: GuestsCommand,
}

#[derive(Debug, Subcommand)]
pub enum GuestsCommand {
    /// List guests
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text search over the rendered rows
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Add a guest
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: String,
    },

    /// Edit a guest; omitted fields keep their current value
    Edit {
        /// Guest ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a guest and all of their bookings
    #[command(alias = "rm")]
    Delete {
        /// Guest ID
        id: String,
    },
}

// ── Bookings ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List bookings
    #[command(alias = "ls")]
    List {
        /// Only bookings checking in today
        #[arg(long, conflicts_with_all = ["upcoming", "search"])]
        today: bool,

        /// Only bookings checking in after today
        #[arg(long, conflicts_with = "search")]
        upcoming: bool,

        /// Case-insensitive text search over the rendered rows
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Create a booking
    Add {
        /// Guest ID
        #[arg(long)]
        guest: String,

        /// Room ID
        #[arg(long)]
        room: String,

        /// Check-in date, YYYY-MM-DD (default: today)
        #[arg(long)]
        check_in: Option<String>,

        /// Check-out date, YYYY-MM-DD (default: tomorrow)
        #[arg(long)]
        check_out: Option<String>,

        /// Initial status (default: booked)
        #[arg(long, value_parser = BOOKING_STATUSES)]
        status: Option<String>,
    },

    /// Edit a booking; omitted fields keep their current value
    Edit {
        /// Booking ID
        id: String,

        #[arg(long)]
        guest: Option<String>,

        #[arg(long)]
        room: Option<String>,

        #[arg(long)]
        check_in: Option<String>,

        #[arg(long)]
        check_out: Option<String>,

        #[arg(long, value_parser = BOOKING_STATUSES)]
        status: Option<String>,
    },

    /// Delete a booking
    #[command(alias = "rm")]
    Delete {
        /// Booking ID
        id: String,
    },

    /// Mark a booked stay as checked in
    CheckIn {
        /// Booking ID
        id: String,
    },

    /// Mark a checked-in stay as checked out
    CheckOut {
        /// Booking ID
        id: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a value on the active profile
    Set {
        /// Profile key: url, api_path, insecure, timeout, ca_cert, toast_duration
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
