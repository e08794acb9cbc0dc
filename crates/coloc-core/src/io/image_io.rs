use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::{ColorType, ImageFormat};
use ndarray::Array2;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::{colortype, TiffEncoder};

use crate::channel::{Channel, Plane};
use crate::colormap::ColormapStack;
use crate::error::{ColocError, Result};

fn is_tiff(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("tif" | "tiff")
    )
}

/// File stem used as the channel title.
pub fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn plane_from_raw<T: Copy + Into<u16>>(raw: &[T], width: u32, height: u32) -> Result<Plane> {
    let data: Vec<u16> = raw.iter().map(|&v| v.into()).collect();
    Array2::from_shape_vec((height as usize, width as usize), data).map_err(|_| {
        ColocError::UnsupportedPixelFormat(format!(
            "{} samples for a {width}x{height} grayscale plane",
            raw.len()
        ))
    })
}

/// Load every page of an 8- or 16-bit grayscale TIFF as one channel.
pub fn load_tiff_stack(path: &Path) -> Result<Channel> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file))?;

    let mut planes = Vec::new();
    let mut bit_depth = None;
    loop {
        let (width, height) = decoder.dimensions()?;
        let depth = match decoder.colortype()? {
            tiff::ColorType::Gray(d @ (8 | 16)) => d,
            other => {
                return Err(ColocError::UnsupportedPixelFormat(format!("TIFF {other:?}")));
            }
        };
        if *bit_depth.get_or_insert(depth) != depth {
            return Err(ColocError::UnsupportedPixelFormat(
                "TIFF pages with mixed bit depths".to_string(),
            ));
        }

        let plane = match decoder.read_image()? {
            DecodingResult::U8(buf) => plane_from_raw(buf.as_slice(), width, height)?,
            DecodingResult::U16(buf) => plane_from_raw(buf.as_slice(), width, height)?,
            _ => {
                return Err(ColocError::UnsupportedPixelFormat(
                    "non-integer TIFF samples".to_string(),
                ));
            }
        };
        planes.push(plane);

        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }

    Channel::new(file_title(path), planes, bit_depth.unwrap_or(8))
}

/// Load a single-plane grayscale image in any format the `image` crate reads.
pub fn load_plane_image(path: &Path) -> Result<Channel> {
    let img = image::open(path)?;
    let (plane, bit_depth) = match img.color() {
        ColorType::L8 => {
            let gray = img.to_luma8();
            let (w, h) = gray.dimensions();
            (plane_from_raw(gray.as_raw().as_slice(), w, h)?, 8)
        }
        ColorType::L16 => {
            let gray = img.to_luma16();
            let (w, h) = gray.dimensions();
            (plane_from_raw(gray.as_raw().as_slice(), w, h)?, 16)
        }
        other => return Err(ColocError::UnsupportedPixelFormat(format!("{other:?}"))),
    };
    Channel::from_plane(file_title(path), plane, bit_depth)
}

/// Load a channel, choosing the decoder from the file extension.
pub fn load_channel(path: &Path) -> Result<Channel> {
    if is_tiff(path) {
        load_tiff_stack(path)
    } else {
        load_plane_image(path)
    }
}

/// Save a channel as a grayscale TIFF, one page per plane.
pub fn save_channel(channel: &Channel, path: &Path) -> Result<()> {
    let mut encoder = TiffEncoder::new(BufWriter::new(File::create(path)?))?;
    let (w, h) = (channel.width() as u32, channel.height() as u32);
    for plane in &channel.planes {
        let pixels: Vec<u16> = plane.iter().copied().collect();
        if channel.bit_depth == 8 {
            let bytes: Vec<u8> = pixels.iter().map(|&v| v.min(255) as u8).collect();
            encoder.write_image::<colortype::Gray8>(w, h, &bytes)?;
        } else {
            encoder.write_image::<colortype::Gray16>(w, h, &pixels)?;
        }
    }
    Ok(())
}

/// Save a colormap as an 8-bit RGB TIFF, one page per plane.
pub fn save_colormap_tiff(stack: &ColormapStack, path: &Path) -> Result<()> {
    let mut encoder = TiffEncoder::new(BufWriter::new(File::create(path)?))?;
    for plane in &stack.planes {
        encoder.write_image::<colortype::RGB8>(plane.width(), plane.height(), plane.as_raw())?;
    }
    Ok(())
}

/// Save a single-plane colormap as 8-bit RGB PNG.
pub fn save_colormap_png(stack: &ColormapStack, path: &Path) -> Result<()> {
    match stack.planes.as_slice() {
        [plane] => {
            plane.save_with_format(path, ImageFormat::Png)?;
            Ok(())
        }
        _ => Err(ColocError::InvalidParameter(format!(
            "PNG holds one plane, colormap has {}",
            stack.plane_count()
        ))),
    }
}

/// Save a colormap, choosing format from file extension.
pub fn save_colormap(stack: &ColormapStack, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => save_colormap_png(stack, path),
        _ => save_colormap_tiff(stack, path),
    }
}

/// Load an RGB colormap TIFF written by [`save_colormap_tiff`].
pub fn load_colormap_tiff(path: &Path) -> Result<ColormapStack> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file))?;
    let mut planes = Vec::new();
    loop {
        let (width, height) = decoder.dimensions()?;
        let plane = match decoder.read_image()? {
            DecodingResult::U8(buf) => image::RgbImage::from_raw(width, height, buf)
                .ok_or_else(|| {
                    ColocError::UnsupportedPixelFormat("TIFF page is not 8-bit RGB".to_string())
                })?,
            _ => {
                return Err(ColocError::UnsupportedPixelFormat(
                    "TIFF page is not 8-bit RGB".to_string(),
                ));
            }
        };
        planes.push(plane);
        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }
    Ok(ColormapStack {
        title: file_title(path),
        planes,
    })
}
