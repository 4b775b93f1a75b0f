use anyhow::Context;
use image::DynamicImage;
use log::info;
use std::path::Path;

/// Write a generated texture to disk, format picked from the extension
pub fn write_image(image: impl Into<DynamicImage>, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let image = image.into();

    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(
        "wrote {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(())
}
