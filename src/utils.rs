use crate::config::{PinstripeConfig, SkinConfig};
use noise::NoiseFn;

/// Triangle wave over one period.
/// 0 at the edge of the period, 1 in the middle.
#[inline(always)]
pub fn triangle_wave(n: i64, period: u32) -> f64 {
    let period = period as f64;
    let phase = (n as f64).rem_euclid(period);
    1.0 - 2.0 * (phase / period - 0.5).abs()
}

/// Linear interpolation, `t = 0` gives `from`, `t = 1` gives `to`
#[inline(always)]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    t * to + (1.0 - t) * from
}

/// Final channel mapping: truncate toward zero, then clamp into (0,255)
pub fn to_channel(x: f64) -> u8 {
    x.trunc().clamp(0.0, 255.0) as u8
}

pub fn in_channel_range(x: f64) -> bool {
    (0.0..256.0).contains(&x)
}

/// Greyscale intensity of the pinstripe at column `n`
pub fn pinstripe_pixel(n: i64, config: &PinstripeConfig) -> u8 {
    let norm = triangle_wave(n, config.period);
    let sharpened = norm.powf(config.stripe_power);
    to_channel(lerp(config.bg_value, config.stripe_value, sharpened))
}

/// Unclamped skin colour at `(x, y)`.
///
/// The small noise layer picks between base and small texture colour, the
/// big layer then pulls that towards the big texture colour.
pub fn skin_blend<N>(x: f64, y: f64, noise: &N, config: &SkinConfig) -> [f64; 3]
where
    N: NoiseFn<f64, 2> + ?Sized,
{
    let small_noise = noise
        .get([config.small_scale * x, config.small_scale * y])
        .abs();
    let big_noise = (config.big_influence
        * noise.get([config.big_scale * x, config.big_scale * y]).abs())
    .powf(config.big_power);

    let mut out = [0.0; 3];
    for (c, value) in out.iter_mut().enumerate() {
        let small = lerp(
            config.small_base_color[c],
            config.small_texture_color[c],
            small_noise,
        );
        *value = lerp(small, config.big_texture_color[c], big_noise);
    }
    out
}

pub fn skin_pixel<N>(x: f64, y: f64, noise: &N, config: &SkinConfig) -> [u8; 3]
where
    N: NoiseFn<f64, 2> + ?Sized,
{
    skin_blend(x, y, noise, config).map(to_channel)
}
