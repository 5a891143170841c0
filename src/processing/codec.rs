//! Image decode/encode capability and its `image`-crate implementation.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ImageReader, RgbaImage};

use crate::error::{AtlasError, AtlasResult};

/// Abstract decode/encode interface.
/// Implement this trait to plug in a different imaging library.
pub trait ImageCodec {
    /// Read only the pixel dimensions of the image at `path`.
    fn dimensions(&self, path: &Path) -> AtlasResult<(u32, u32)>;

    /// Fully decode the image at `path` into RGBA8.
    fn decode(&self, path: &Path) -> AtlasResult<RgbaImage>;

    /// Encode `canvas` as PNG at `path`, creating parent directories.
    fn encode(&self, canvas: &RgbaImage, path: &Path) -> AtlasResult<()>;
}

/// Codec backed by the `image` crate.
///
/// Input format is sniffed from the file contents. Output is always PNG and is
/// written through a temporary file in the destination directory, so the
/// output path either holds a complete atlas or is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl PngCodec {
    fn reader(path: &Path) -> AtlasResult<ImageReader<std::io::BufReader<fs::File>>> {
        ImageReader::open(path)
            .map_err(|e| {
                AtlasError::io("open", path, e)
                    .with_recovery_suggestion("Check that the input path exists and is readable")
            })?
            .with_guessed_format()
            .map_err(|e| AtlasError::io("read", path, e))
    }
}

impl ImageCodec for PngCodec {
    fn dimensions(&self, path: &Path) -> AtlasResult<(u32, u32)> {
        Self::reader(path)?
            .into_dimensions()
            .map_err(|e| AtlasError::io("read header of", path, e))
    }

    fn decode(&self, path: &Path) -> AtlasResult<RgbaImage> {
        let image = Self::reader(path)?
            .decode()
            .map_err(|e| AtlasError::io("decode", path, e))?;
        Ok(image.into_rgba8())
    }

    fn encode(&self, canvas: &RgbaImage, path: &Path) -> AtlasResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| {
            AtlasError::io("create directory", dir, e)
                .with_recovery_suggestion("Check that the output location is writable")
        })?;

        let mut builder = tempfile::Builder::new();
        builder.prefix(".mip-atlas-").suffix(".png.tmp");
        // tempfile defaults to 0600; ask for 0666 so the umask applies as for a plain create.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder
            .tempfile_in(dir)
            .map_err(|e| AtlasError::io("create temporary file in", dir, e))?;

        // Rebuilding over an existing atlas keeps its permissions.
        if let Ok(existing) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), existing.permissions())
                .map_err(|e| AtlasError::io("copy permissions to", tmp.path(), e))?;
        }

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            canvas
                .write_with_encoder(PngEncoder::new(&mut writer))
                .map_err(|e| AtlasError::io("encode", path, e))?;
            writer.flush().map_err(|e| AtlasError::io("write", path, e))?;
        }

        tmp.persist(path)
            .map_err(|e| AtlasError::io("write", path, e.error))?;
        log::debug!("wrote {}x{} PNG to {}", canvas.width(), canvas.height(), path.display());
        Ok(())
    }
}
