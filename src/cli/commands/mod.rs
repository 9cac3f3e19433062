pub mod certificates;
pub mod doctor;
pub mod gallery;
pub mod init;
pub mod portfolio;
pub mod resume;
pub mod skills;

use anyhow::Result;
use console::{Emoji, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn banner(title: &str) {
    println!();
    println!("{}", style(format!(" Folio - {} ", title)).bold().reverse());
    println!();
}

fn spinner(icon: Emoji<'_, '_>, message: String) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template(&format!("{}{{spinner:.green}} {{msg}}", icon))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message);
    Ok(spinner)
}
