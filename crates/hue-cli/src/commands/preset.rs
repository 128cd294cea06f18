//! Preset command: writes a starting preset with reset defaults.

use anyhow::{Result, bail};
use hue_core::GradeParams;
use tracing::info;

use crate::PresetArgs;
use crate::config::save_preset;

pub fn run(args: PresetArgs, verbose: u8) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", args.output.display());
    }
    save_preset(&args.output, &GradeParams::default())?;
    info!(output = %args.output.display(), "Preset written");

    if verbose > 0 {
        println!("Wrote {}", args.output.display());
    }
    Ok(())
}
