//! Info command: dimensions and transparency of each input.

use anyhow::Result;
use hue_core::pixel::is_transparent;
use hue_io::Format;
use tracing::trace;

use super::load_image;
use crate::InfoArgs;

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        trace!(input = %path.display(), "info::run");
        let format = Format::detect(path).unwrap_or(Format::Unknown);
        let image = load_image(path)?;
        let transparent = image
            .pixels()
            .filter(|&(_, _, px)| is_transparent(px))
            .count();

        println!("{}", path.display());
        println!("  Format:      {}", format.name());
        println!("  Size:        {}x{}", image.width(), image.height());
        println!(
            "  Transparent: {} of {} pixels",
            transparent,
            image.pixel_count()
        );
        if verbose > 0 {
            println!("  Bytes:       {}", image.data().len());
        }
    }
    Ok(())
}
