use std::path::PathBuf;
use std::rc::Rc;

use milaknight_context::{AppContext, FilePreferences};
use milaknight_site::export_site;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let out_dir: PathBuf = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("MILAKNIGHT_OUT"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));
    let prefs_path = std::env::var_os("MILAKNIGHT_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|| out_dir.join("prefs.json"));

    let prefs = FilePreferences::open(prefs_path);
    log::info!("preferences: {}", prefs.path().display());
    let ctx = AppContext::new(Rc::new(prefs));

    let written = export_site(&ctx, &out_dir)?;
    log::info!("wrote {} pages to {}", written.len(), out_dir.display());
    Ok(())
}
