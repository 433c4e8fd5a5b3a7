use anyhow::Result;
use gshop::Shop;
use gshop::features::auth::Registration;
use std::io::Write;

pub(crate) async fn register(shop: &mut Shop, form: &Registration<'_>, out: &mut impl Write) -> Result<()> {
    let user = shop.register(form).await?;
    writeln!(out, "Registered {} <{}>. Log in with `gshop login {}`.", user.username, user.email, user.username)?;
    Ok(())
}

pub(crate) async fn login(shop: &mut Shop, username: &str, password: &str, out: &mut impl Write) -> Result<()> {
    let actor = shop.login(username, password).await?;
    let role = if actor.is_admin { " (admin)" } else { "" };
    writeln!(out, "Logged in as {}{role}", actor.username)?;
    Ok(())
}

pub(crate) async fn logout(shop: &mut Shop, out: &mut impl Write) -> Result<()> {
    if shop.logout().await? {
        writeln!(out, "Logged out")?;
    } else {
        writeln!(out, "Nobody is logged in")?;
    }
    Ok(())
}

pub(crate) fn whoami(shop: &Shop, out: &mut impl Write) -> Result<()> {
    match shop.current_user() {
        Some(user) if user.is_admin => writeln!(out, "{} <{}> (admin)", user.username, user.email)?,
        Some(user) => writeln!(out, "{} <{}>", user.username, user.email)?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}

pub(crate) async fn seed(shop: &mut Shop, out: &mut impl Write) -> Result<()> {
    let report = shop.seed().await?;
    if report.is_noop() {
        writeln!(out, "Nothing to seed")?;
    }
    for step in &report.applied {
        writeln!(out, "Seeded {step}")?;
    }
    Ok(())
}
