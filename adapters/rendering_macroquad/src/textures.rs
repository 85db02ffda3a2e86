//! Texture cache populated by the asset loading phase.

use std::{collections::HashMap, fs, path::Path};

use image::ImageFormat;
use macroquad::texture::{FilterMode, Texture2D};
use orbital_defence_rendering::{AssetError, ImageHandle, ImageSize};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Decoded RGBA8 pixels ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DecodedImage {
    width: u16,
    height: u16,
    rgba: Vec<u8>,
}

/// GPU textures keyed by asset path.
#[derive(Debug, Default)]
pub(crate) struct TextureCache {
    textures: HashMap<String, Texture2D>,
}

impl TextureCache {
    /// Reads, validates and uploads the image at `path`.
    pub(crate) fn load(&mut self, path: &str) -> Result<ImageSize, AssetError> {
        let bytes = fs::read(path).map_err(|source| AssetError::Io {
            path: path.into(),
            source,
        })?;
        let decoded = decode_png(Path::new(path), &bytes)?;

        let texture = Texture2D::from_rgba8(decoded.width, decoded.height, &decoded.rgba);
        texture.set_filter(FilterMode::Nearest);
        let size = ImageSize::new(texture.width(), texture.height());
        let _ = self.textures.insert(path.to_owned(), texture);
        Ok(size)
    }

    /// Texture backing `image`, if it was loaded.
    pub(crate) fn get(&self, image: &ImageHandle) -> Option<Texture2D> {
        if !image.is_loaded() {
            return None;
        }
        self.textures.get(image.path()).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.textures.len()
    }
}

/// Rejects anything but PNG data before it reaches the decoder.
fn ensure_png(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        Ok(())
    } else {
        Err(AssetError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Decodes PNG bytes into RGBA8 pixels without touching the GPU.
pub(crate) fn decode_png(path: &Path, bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    ensure_png(path, bytes)?;
    let decode_error = |source: Box<dyn std::error::Error + Send + Sync>| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|error| decode_error(Box::new(error)))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let width = u16::try_from(width).map_err(|error| decode_error(Box::new(error)))?;
    let height = u16::try_from(height).map_err(|error| decode_error(Box::new(error)))?;

    Ok(DecodedImage {
        width,
        height,
        rgba: image.into_raw(),
    })
}
