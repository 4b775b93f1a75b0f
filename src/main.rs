use anyhow::Context;
use log::{debug, info};
use noise::Perlin;
use texture_assets::config::{PinstripeConfig, SkinConfig};
use texture_assets::pattern::{generate_pinstripe, generate_skin};
use texture_assets::sink::write_image;

const PINSTRIPE_PATH: &str = "pinstripe.png";
const SKIN_PATH: &str = "skin.png";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    // Square is easier to debug; PinstripeConfig::row() writes the 1px tall variant
    let pinstripe = PinstripeConfig::square();
    debug!("{:?}", pinstripe);
    info!(
        "Generating pinstripe pattern ({}x{})...",
        pinstripe.width,
        pinstripe.height()
    );
    let img = generate_pinstripe(&pinstripe).context("pinstripe generation failed")?;
    write_image(img, PINSTRIPE_PATH)?;

    let skin = SkinConfig::default();
    debug!("{:?}", skin);
    info!(
        "Generating skin texture ({}x{})...",
        skin.side_length, skin.side_length
    );
    let noise = Perlin::new(skin.seed);
    let img = generate_skin(&skin, &noise).context("skin generation failed")?;
    write_image(img, SKIN_PATH)?;

    info!("Done");
    Ok(())
}
