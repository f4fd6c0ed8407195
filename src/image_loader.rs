//! Image loading for the census pipeline
//!
//! Single entry point for turning an image file into the flat RGB pixel
//! sequence the census consumes. All formats are decoded through the
//! `image` crate; alpha channels are dropped during the RGB8 conversion.
//!
//! ## Supported Formats
//!
//! JPEG, PNG, GIF, WebP, TIFF, BMP, ICO, TGA, EXR, PNM, QOI, DDS, HDR

use std::path::Path;

use image::{ImageReader, Rgb};
use log::debug;

use crate::error::{CensusError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// OpenEXR image
    Exr,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
    /// DDS image
    Dds,
    /// HDR image
    Hdr,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "exr" => Some(ImageFormat::Exr),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            "dds" => Some(ImageFormat::Dds),
            "hdr" => Some(ImageFormat::Hdr),
            _ => None,
        }
    }
}

/// Load an image from disk as a flat sequence of RGB pixels
///
/// The pixel order is row-major, matching the decoded image buffer.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Errors
///
/// Returns `CensusError::ImageLoadError` if:
/// - The file extension is not a supported format
/// - The file cannot be opened
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use color_census::image_loader::load_pixels;
/// use std::path::Path;
///
/// let pixels = load_pixels(Path::new("photo.jpg"))?;
/// println!("Loaded {} pixels", pixels.len());
/// # Ok::<(), color_census::CensusError>(())
/// ```
pub fn load_pixels(path: &Path) -> Result<Vec<Rgb<u8>>> {
    let format = ImageFormat::from_extension(path).ok_or_else(|| CensusError::ImageLoadError {
        message: format!("Unknown image format for file: {}", path.display()),
        source: None,
    })?;
    debug!("detected {:?} format for {}", format, path.display());

    let reader = ImageReader::open(path).map_err(|e| {
        CensusError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        CensusError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let rgb_img = img.to_rgb8();
    debug!(
        "decoded {}x{} image from {}",
        rgb_img.width(),
        rgb_img.height(),
        path.display()
    );

    Ok(rgb_img.pixels().copied().collect())
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "exr", "pbm",
        "pgm", "ppm", "pnm", "qoi", "dds", "hdr",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
