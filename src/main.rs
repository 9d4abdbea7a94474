use std::error::Error;

mod app;
mod config;
mod dice;
mod error;
mod layout;
mod logging;
mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    app::run()?;
    Ok(())
}
