//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use gshop::domain::GameCode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gshop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Buy and sell game accounts, and keep the donation ledger")]
pub(crate) struct Cli {
    /// TOML configuration file (default: `gameshop.toml` if present)
    #[arg(long, global = true, env = "GSHOP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Store data in this directory instead of the configured storage URL
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Create a user account
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "GSHOP_PASSWORD")]
        password: String,
        /// Repeat the password
        #[arg(long)]
        confirm: String,
    },
    /// Start a session
    Login {
        username: String,
        #[arg(short, long, env = "GSHOP_PASSWORD")]
        password: String,
    },
    /// End the session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Browse and manage listed accounts
    Accounts {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Donate to the shop
    Donate {
        #[command(subcommand)]
        action: DonateAction,
    },
    /// Donor board and donation review
    Donations {
        #[command(subcommand)]
        action: DonationAction,
    },
    /// Apply first-run data (admin user and samples) to empty collections
    Seed,
}

#[derive(Debug, Subcommand)]
pub(crate) enum AccountAction {
    /// Accounts for sale
    List {
        /// Game code: lol, valorant, pubg, fifa
        #[arg(short, long)]
        game: Option<String>,
        /// Price range, `min-max` or `min+`
        #[arg(short, long)]
        price: Option<String>,
        /// Every account regardless of status (admin view)
        #[arg(long, conflicts_with_all = ["game", "price"])]
        all: bool,
    },
    /// Account details
    Show { id: u64 },
    /// List an account for sale (admin)
    Add(AccountFields),
    /// Submit an account for admin review
    Propose(AccountFields),
    /// Approve a proposed account (admin)
    Approve { id: u64 },
    /// Reject a proposed account (admin)
    Reject { id: u64 },
    /// Remove an account (admin)
    Delete { id: u64 },
    /// Change display fields of an account (admin)
    Edit {
        id: u64,
        #[arg(long)]
        game: Option<GameCode>,
        #[arg(long)]
        rank: Option<String>,
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "clear_image")]
        image: Option<String>,
        /// Remove the image
        #[arg(long)]
        clear_image: bool,
    },
    /// Buy an account now
    Buy { id: u64 },
    /// The review queue (admin)
    Pending,
}

#[derive(Debug, Args)]
pub(crate) struct AccountFields {
    #[arg(short, long)]
    pub game: GameCode,
    #[arg(short, long)]
    pub rank: String,
    #[arg(short, long)]
    pub server: String,
    #[arg(short, long)]
    pub price: u64,
    #[arg(short, long, default_value = "")]
    pub description: String,
    #[arg(short, long)]
    pub image: Option<String>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CartAction {
    Add { id: u64 },
    Remove { id: u64 },
    Clear,
    Show,
    Checkout,
}

#[derive(Debug, Subcommand)]
pub(crate) enum DonateAction {
    /// Prepaid scratch card
    Card {
        /// Carrier, e.g. viettel
        #[arg(short = 't', long = "type")]
        card_type: String,
        #[arg(short, long)]
        amount: u64,
        #[arg(short, long)]
        serial: String,
        #[arg(short, long)]
        code: String,
    },
    /// Bank or e-wallet transfer
    Bank {
        /// Bank or wallet, e.g. momo
        #[arg(short, long)]
        method: String,
        #[arg(short, long)]
        amount: u64,
        #[arg(short, long)]
        transfer_note: String,
        #[arg(short, long, default_value = "")]
        note: String,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum DonationAction {
    /// Approved donations, largest first
    Donors,
    /// Donations awaiting review (admin)
    Pending,
    Approve { id: u64 },
    Reject { id: u64 },
}
