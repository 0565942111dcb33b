//! Info command

use crate::InfoArgs;
use anyhow::Result;
#[allow(unused_imports)]
use tracing::trace;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let image = super::load_image(path)?;
        let (w, h) = image.dimensions();

        println!("{}: {}x{}, 8-bit RGB", path.display(), w, h);

        if verbose {
            let file_size = std::fs::metadata(path)?.len();
            println!("  pixels:    {}", image.pixel_count());
            println!("  file size: {}", super::format_size(file_size));
        }
    }

    Ok(())
}
