use anyhow::Result;
use clap::Parser;
use staffdesk::app::App;
use staffdesk::audit::{Audit, DEFAULT_AUDIT_DIR};
use staffdesk::input::{Console, InputClosed};
use staffdesk::screens;
use staffdesk::store::DEFAULT_DATA_DIR;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "staffdesk", about = "Terminal employee-record manager", version)]
struct Args {
    /// Directory holding one record file per employee
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory for per-session audit logs
    #[arg(long, default_value = DEFAULT_AUDIT_DIR)]
    audit_dir: PathBuf,

    /// Disable the audit log
    #[arg(long)]
    no_audit: bool,

    /// Do not clear the terminal between screens
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut audit = if args.no_audit {
        Audit::disabled()
    } else {
        Audit::open(&args.audit_dir)?
    };
    let _ = audit.session_start(&args.data_dir);

    let mut app = App::bootstrap(&args.data_dir, audit)?;
    app.set_clear_screens(!args.no_clear);

    let mut input = Console::new()?;
    match screens::navigate(&mut app, &mut input, "login") {
        // Ctrl-D / Ctrl-C anywhere unwinds the screen stack; that is a
        // normal exit, not a failure.
        Err(e) if e.is::<InputClosed>() => Ok(()),
        result => result,
    }
}
