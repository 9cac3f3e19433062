use anyhow::Result;
use console::{Emoji, style};
use std::path::PathBuf;

use crate::assets::gallery::{group_gallery, scan_images};
use crate::config::Config;

static CAMERA: Emoji<'_, '_> = Emoji("📷 ", "");

pub fn run(config: &Config, dir: Option<PathBuf>, json: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| config.gallery.dir.clone());
    let images = scan_images(&dir);
    let gallery = group_gallery(&images);

    if json {
        println!("{}", serde_json::to_string_pretty(&gallery)?);
        return Ok(());
    }

    super::banner("Product Gallery");
    println!(
        "{}Found {} images in {}",
        CAMERA,
        style(images.len()).green().bold(),
        style(dir.display()).cyan()
    );

    for (topic, items) in gallery.topics() {
        println!();
        println!(
            "  {} {}",
            style(topic).bold().underlined(),
            style(format!("({})", items.len())).dim()
        );
        for item in items {
            println!("    {} {}", style("•").cyan(), item.name);
        }
    }
    println!();

    Ok(())
}
