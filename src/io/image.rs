//! Byte-stream image decoding and PNG encoding

use crate::io::error::{FilterError, Result, WithPath};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Decode a complete encoded image byte stream
///
/// The stream must hold an entire image; the container format is sniffed
/// from the bytes, so anything the `image` crate recognizes decodes.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| FilterError::ImageDecode { source })
}

/// Encode a canvas as a complete PNG byte stream
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| FilterError::ImageEncode { source })?;
    Ok(bytes)
}

/// Read an image file into memory and decode it
///
/// The file is read as one complete byte stream before decoding begins.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents cannot be
/// decoded as an image.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|source| FilterError::FileSystem {
        path: path.to_path_buf(),
        operation: "read file",
        source,
    })?;
    decode_bytes(&bytes).with_path(path)
}

/// Encode a canvas and write it to disk as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - PNG encoding fails
/// - The encoded bytes cannot be written to the path
pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| FilterError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    let bytes = encode_png(canvas).with_path(path)?;
    std::fs::write(path, bytes).map_err(|source| FilterError::FileSystem {
        path: path.to_path_buf(),
        operation: "write file",
        source,
    })
}
