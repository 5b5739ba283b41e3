//! Ball texture generation
//!
//! Rasterizes the ball as an outline disc with a fill disc inset on top of
//! it, then wraps the pixels in a Bevy [`Image`] for the ball sprite.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::{Rgba, RgbaImage};

use crate::ball::Ball;
use crate::constants::BALL_OUTLINE_WIDTH;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draw the ball into a square image of side `2 * radius` pixels.
///
/// The outline color covers the full disc, the fill color covers the disc
/// inset by `outline_width`, and everything outside stays transparent.
pub fn rasterize_ball(radius: f32, outline_width: f32, outline: [u8; 4], fill: [u8; 4]) -> RgbaImage {
    let size = (radius * 2.0).ceil().max(1.0) as u32;
    let center = size as f32 / 2.0;
    let inner_radius = (radius - outline_width).max(0.0);

    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);

    for y in 0..size {
        for x in 0..size {
            // Sample at the pixel center
            let fx = x as f32 + 0.5 - center;
            let fy = y as f32 + 0.5 - center;
            let dist = (fx * fx + fy * fy).sqrt();

            if dist <= inner_radius {
                img.put_pixel(x, y, Rgba(fill));
            } else if dist <= radius {
                img.put_pixel(x, y, Rgba(outline));
            }
        }
    }

    img
}

/// Build the sprite image for a ball
pub fn ball_image(ball: &Ball) -> Image {
    let img = rasterize_ball(ball.radius, BALL_OUTLINE_WIDTH, ball.outline, ball.fill);
    let (width, height) = img.dimensions();

    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        img.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
