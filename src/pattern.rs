// src/pattern.rs
use crate::config::{PinstripeConfig, SkinConfig};
use crate::utils::*;
use anyhow::Context;
use image::{GrayImage, Luma, Rgb, RgbImage};
use log::{debug, warn};
use ndarray::{Array1, Array2, Zip};
use noise::NoiseFn;
use std::time::Instant;

/// Pixel x and y coordinates of a `width x height` image as two grids,
/// indexed `[row, column]` like numpy's meshgrid
pub fn coordinate_grid(width: usize, height: usize) -> (Array2<f64>, Array2<f64>) {
    let x_grid = Array2::from_shape_fn((height, width), |(_, x)| x as f64);
    let y_grid = Array2::from_shape_fn((height, width), |(y, _)| y as f64);
    (x_grid, y_grid)
}

/// Greyscale pinstripe grid of shape `(height, width)`.
///
/// Stripes are vertical, so the intensity is computed once per column and
/// that row is repeated for every image row.
pub fn pinstripe_grid(config: &PinstripeConfig) -> anyhow::Result<Array2<u8>> {
    config.validate().context("invalid pinstripe configuration")?;

    let width = config.width as usize;
    let height = config.height() as usize;

    let row: Array1<u8> = Array1::from_shape_fn(width, |n| pinstripe_pixel(n as i64, config));

    let mut grid = Array2::zeros((height, width));
    for mut r in grid.rows_mut() {
        r.assign(&row);
    }
    Ok(grid)
}

pub fn generate_pinstripe(config: &PinstripeConfig) -> anyhow::Result<GrayImage> {
    let grid = pinstripe_grid(config)?;

    let mut img = GrayImage::new(config.width, config.height());
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Luma([grid[[y as usize, x as usize]]]);
    }
    Ok(img)
}

/// Unclamped RGB skin grid of shape `(side, side)`.
/// Pixels are independent, so the grid is evaluated in parallel.
pub fn skin_grid<N>(config: &SkinConfig, noise: &N) -> anyhow::Result<Array2<[f64; 3]>>
where
    N: NoiseFn<f64, 2> + Sync,
{
    config.validate().context("invalid skin configuration")?;

    let side = config.side_length as usize;
    let (x_grid, y_grid) = coordinate_grid(side, side);

    let start = Instant::now();
    let grid = Zip::from(&x_grid)
        .and(&y_grid)
        .par_map_collect(|&x, &y| skin_blend(x, y, noise, config));
    debug!("skin grid {}x{} evaluated in {:?}", side, side, start.elapsed());

    Ok(grid)
}

pub fn generate_skin<N>(config: &SkinConfig, noise: &N) -> anyhow::Result<RgbImage>
where
    N: NoiseFn<f64, 2> + Sync,
{
    let grid = skin_grid(config, noise)?;

    let clamped = grid
        .iter()
        .filter(|rgb| !rgb.iter().all(|&c| in_channel_range(c)))
        .count();
    if clamped > 0 {
        warn!(
            "{} skin pixels fell outside 0..=255 and were clamped",
            clamped
        );
    }

    let mut img = RgbImage::new(config.side_length, config.side_length);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb(grid[[y as usize, x as usize]].map(to_channel));
    }
    Ok(img)
}
