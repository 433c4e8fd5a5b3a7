mod args;
mod handlers;
mod output;

use crate::args::{Cli, Command};
use crate::handlers::{accounts, cart, donations, session};
use anyhow::{Context, Result};
use clap::Parser;
use gshop::activity::Journal;
use gshop::domain::config::ShopConfig;
use gshop::features::auth::Registration;
use gshop::kernel::config::load_config;
use gshop::{Shop, ShopError};
use gshop_logger::{LevelFilter, Logger};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut cfg: ShopConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(dir) = &cli.data {
        cfg.storage.url = format!("file://{}", dir.display());
    }

    let mut logger = Logger::builder().name(env!("CARGO_PKG_NAME")).settings(&cfg.logging);
    if let Some(level) = &cli.log_level {
        logger = logger.level(level.parse::<LevelFilter>().context("Invalid --log-level")?);
    }
    let _log = logger.init()?;

    let mut shop = Shop::open(&cfg).await?;
    let journal = cfg.activity.enabled.then(|| Journal::spawn(shop.activity()));

    let mut out = io::stdout().lock();
    let outcome = run(&mut shop, cli.command, &mut out).await;
    out.flush()?;

    drop(shop);
    if let Some(journal) = journal {
        let written = journal.finish().await;
        debug!(written, "Activity journal drained");
    }

    report(outcome)
}

async fn run(shop: &mut Shop, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Register { username, email, password, confirm } => {
            let form = Registration {
                username: &username,
                email: &email,
                password: &password,
                confirm_password: &confirm,
            };
            session::register(shop, &form, out).await
        },
        Command::Login { username, password } => session::login(shop, &username, &password, out).await,
        Command::Logout => session::logout(shop, out).await,
        Command::Whoami => session::whoami(shop, out),
        Command::Accounts { action } => accounts::handle(shop, action, out).await,
        Command::Cart { action } => cart::handle(shop, action, out).await,
        Command::Donate { action } => donations::donate(shop, action, out).await,
        Command::Donations { action } => donations::handle(shop, action, out).await,
        Command::Seed => session::seed(shop, out).await,
    }
}

/// Shop rule violations are messages for the user; anything else aborts through `anyhow`.
fn report(outcome: Result<()>) -> Result<ExitCode> {
    let Err(err) = outcome else {
        return Ok(ExitCode::SUCCESS);
    };
    let Some(shop_err) = err.downcast_ref::<ShopError>() else {
        return Err(err);
    };
    if shop_err.is_fatal() {
        return Err(err);
    }

    let mut stderr = io::stderr().lock();
    if shop_err.is_warning() {
        writeln!(stderr, "warning: {shop_err}")?;
        return Ok(ExitCode::SUCCESS);
    }
    writeln!(stderr, "error [{}]: {shop_err}", shop_err.kind())?;
    Ok(ExitCode::FAILURE)
}
