//! Session CLI commands

use crate::error::TrackerResult;
use crate::session::{FileSession, Session};

/// Sign in with any name and email
pub fn handle_login_command(session: &mut FileSession, name: &str, email: &str) -> TrackerResult<()> {
    let user = session.login(name, email)?;
    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

/// Sign out
pub fn handle_logout_command(session: &mut FileSession) -> TrackerResult<()> {
    session.logout()?;
    println!("Signed out");
    Ok(())
}

/// Show who is signed in
pub fn handle_whoami_command(session: &FileSession) -> TrackerResult<()> {
    match session.user() {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("Not signed in"),
    }
    Ok(())
}
