use crate::manifest_json::{write_icons_stanza, IconsStanza};
use crate::Args;
use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Icon edge lengths generated when no custom sizes are requested.
/// These are the sizes a WebExtension manifest expects for toolbar,
/// management page, and store listing icons.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Background fill for every generated icon (#667eea).
const BACKGROUND_COLOR: Rgb<u8> = Rgb([0x66, 0x7e, 0xea]);

pub fn generate_icons(args: Args) -> Result<()> {
    let sizes: &[u32] = args.sizes.as_deref().unwrap_or(&DEFAULT_SIZES);

    let mut written: Vec<(u32, PathBuf)> = Vec::new();
    for &size in sizes {
        let path = args.output.join(icon_filename(size));
        create_icon(size, &path)?;
        written.push((size, path));
    }

    if args.manifest {
        let mut stanza = IconsStanza::new();
        for (size, path) in &written {
            stanza.add_icon(*size, path.display().to_string());
        }
        let path = write_icons_stanza(&args.output, &stanza)?;
        println!("Created {}", path.display());
    }

    Ok(())
}

/// Filename an icon of the given edge length is written under.
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Create one solid-color square icon and write it to `filename` as a PNG.
///
/// The parent directory must already exist; nothing is created on the
/// caller's behalf, and a failure here leaves any previously written
/// icons in place.
pub fn create_icon(size: u32, filename: &Path) -> Result<()> {
    let img: RgbImage = ImageBuffer::from_pixel(size, size, BACKGROUND_COLOR);

    img.save(filename)
        .with_context(|| format!("Failed to write {}", filename.display()))?;

    println!("Created {}", filename.display());
    Ok(())
}
