//! `bookgrab inspect` – show what a catalog page would download.

use anyhow::Result;
use bookgrab_core::config::GrabConfig;
use bookgrab_core::entry::EntryContext;
use bookgrab_core::events::EventSink;
use bookgrab_core::naming;

pub async fn run_inspect(cfg: &GrabConfig, url: &str) -> Result<()> {
    cfg.validate()?;
    let ctx = EntryContext::new(cfg, EventSink::none())?;
    let book = ctx.book_info(url).await?;

    if book.name.is_empty() {
        println!("(no title found)");
    } else {
        println!("{}", book.name);
    }
    if book.files.is_empty() {
        println!("  no file links");
        return Ok(());
    }
    for href in &book.files {
        match ctx.resolve_file_url(href) {
            Ok(file_url) => {
                let target = naming::output_path(ctx.output_dir(), &book.name, file_url.as_str());
                println!("  {} -> {}", file_url, target.display());
            }
            Err(e) => println!("  {} (unusable link: {})", href, e),
        }
    }
    Ok(())
}
