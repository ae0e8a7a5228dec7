use clap::Args;
use std::path::PathBuf;

use forui_migrate::defaults::MigrationTarget;
use forui_migrate::migrate::{self, MigrateOptions, MigrationReport};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Flutter project root (the directory containing lib/features)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Always exits 0 once the walk completes, per-file failures included.
pub fn run(args: MigrateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MigrationReport> {
    let target = MigrationTarget::for_root(&args.root);
    let options = MigrateOptions {
        dry_run: args.dry_run,
    };

    let report = migrate::run(&target, options)?;
    Ok((report, 0))
}
