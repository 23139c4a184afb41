use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use eframe::egui;
use image::ImageReader;
use thiserror::Error;

/// Longest side of any texture handed to egui. Larger sources are downscaled.
pub const MAX_TEXTURE_SIDE: u32 = 1024;

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("failed to read image {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch image {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("http status {status} for image {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("failed to decode image {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },
}

/// Where a card image reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    File(PathBuf),
}

impl ImageSource {
    fn origin(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// `http(s)://` stays a URL, `file://` becomes its path, anything else is a path
/// relative to the image root unless already absolute.
pub fn resolve_reference(image_root: &Path, reference: &str) -> ImageSource {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return ImageSource::Remote(reference.to_string());
    }
    if let Some(path) = reference.strip_prefix("file://") {
        return ImageSource::File(PathBuf::from(path));
    }

    let path = Path::new(reference);
    if path.is_absolute() {
        ImageSource::File(path.to_path_buf())
    } else {
        ImageSource::File(image_root.join(path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRgba {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

pub fn load_rgba(source: &ImageSource, max_side: u32) -> Result<DecodedRgba, ImageLoadError> {
    let bytes = match source {
        ImageSource::File(path) => std::fs::read(path).map_err(|source| ImageLoadError::Io {
            path: path.clone(),
            source,
        })?,
        ImageSource::Remote(url) => fetch_bytes(url)?,
    };
    decode_rgba(&bytes, &source.origin(), max_side)
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>, ImageLoadError> {
    let fetch_error = |source| ImageLoadError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url).map_err(fetch_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ImageLoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().map_err(fetch_error)?.to_vec())
}

/// Decodes to RGBA8, shrinking so neither side exceeds `max_side`.
pub fn decode_rgba(bytes: &[u8], origin: &str, max_side: u32) -> Result<DecodedRgba, ImageLoadError> {
    let decode_error = |source| ImageLoadError::Decode {
        origin: origin.to_string(),
        source,
    };
    let mut image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|source| decode_error(image::ImageError::IoError(source)))?
        .decode()
        .map_err(decode_error)?;

    if image.width() > max_side || image.height() > max_side {
        image = image.thumbnail(max_side, max_side);
    }

    let rgba = image.to_rgba8();
    Ok(DecodedRgba {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

struct LoadedImage {
    reference: String,
    result: Result<DecodedRgba, ImageLoadError>,
}

enum Slot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Card textures keyed by image reference. Loads run on background threads and
/// report back over a channel; a failed load is remembered and not retried.
pub struct ImageCache {
    root: PathBuf,
    slots: HashMap<String, Slot>,
    tx: mpsc::Sender<LoadedImage>,
    rx: mpsc::Receiver<LoadedImage>,
}

impl ImageCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            root: root.into(),
            slots: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Returns the texture if it is ready, starting a load on first request.
    pub fn texture(&mut self, ctx: &egui::Context, reference: &str) -> Option<egui::TextureHandle> {
        match self.slots.get(reference) {
            Some(Slot::Ready(texture)) => Some(texture.clone()),
            Some(Slot::Loading | Slot::Failed) => None,
            None => {
                self.spawn_load(ctx, reference);
                None
            }
        }
    }

    /// Uploads finished loads. Results for references evicted meanwhile are dropped.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(loaded) = self.rx.try_recv() {
            let Some(slot) = self.slots.get_mut(&loaded.reference) else {
                continue;
            };
            *slot = match loaded.result {
                Ok(decoded) => {
                    let size = [decoded.width as usize, decoded.height as usize];
                    let color = egui::ColorImage::from_rgba_unmultiplied(size, &decoded.pixels);
                    log::debug!(
                        "loaded image {} ({}x{})",
                        loaded.reference,
                        decoded.width,
                        decoded.height
                    );
                    Slot::Ready(ctx.load_texture(&loaded.reference, color, egui::TextureOptions::LINEAR))
                }
                Err(error) => {
                    log::warn!("{error}");
                    Slot::Failed
                }
            };
        }
    }

    /// Drops textures and failure markers for references no longer in `live`.
    pub fn retain_live<'a>(&mut self, live: impl IntoIterator<Item = &'a str>) {
        let live: HashSet<&str> = live.into_iter().collect();
        let before = self.slots.len();
        self.slots.retain(|reference, _| live.contains(reference.as_str()));
        let evicted = before - self.slots.len();
        if evicted > 0 {
            log::debug!("evicted {evicted} unused images");
        }
    }

    fn spawn_load(&mut self, ctx: &egui::Context, reference: &str) {
        self.slots.insert(reference.to_string(), Slot::Loading);

        let source = resolve_reference(&self.root, reference);
        let reference = reference.to_string();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = load_rgba(&source, MAX_TEXTURE_SIDE);
            let _ = tx.send(LoadedImage { reference, result });
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    fn write_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(path).expect("jpeg should be saved");
    }

    #[test]
    fn load_rgba_returns_dimensions_and_pixels() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("map.jpg");
        write_test_jpeg(&path, 64, 32);

        let decoded = load_rgba(&ImageSource::File(path), MAX_TEXTURE_SIDE)
            .expect("jpeg should decode");

        assert_eq!(decoded.width, 64);
        assert_eq!(decoded.height, 32);
        assert_eq!(decoded.pixels.len(), 64 * 32 * 4);
    }

    #[test]
    fn oversized_images_are_downscaled_keeping_aspect() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("poster.jpg");
        write_test_jpeg(&path, 2400, 600);

        let decoded = load_rgba(&ImageSource::File(path), MAX_TEXTURE_SIDE)
            .expect("jpeg should decode");

        assert_eq!(decoded.width, MAX_TEXTURE_SIDE);
        assert!(decoded.height <= MAX_TEXTURE_SIDE);
        assert_eq!(decoded.height, 256);
        assert_eq!(
            decoded.pixels.len(),
            (decoded.width * decoded.height * 4) as usize
        );
    }

    #[test]
    fn load_rgba_reports_missing_files() {
        let dir = TempDir::new().expect("tempdir should be created");
        assert!(matches!(
            load_rgba(&ImageSource::File(dir.path().join("absent.webp")), MAX_TEXTURE_SIDE),
            Err(ImageLoadError::Io { .. })
        ));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        assert!(matches!(
            decode_rgba(b"not an image", "broken.jpg", MAX_TEXTURE_SIDE),
            Err(ImageLoadError::Decode { .. })
        ));
    }

    #[test]
    fn relative_and_absolute_paths_resolve_to_files() {
        let root = Path::new("/srv/gallery");
        assert_eq!(
            resolve_reference(root, "images/map.webp"),
            ImageSource::File(PathBuf::from("/srv/gallery/images/map.webp"))
        );
        assert_eq!(
            resolve_reference(root, "/tmp/space.webp"),
            ImageSource::File(PathBuf::from("/tmp/space.webp"))
        );
    }

    #[test]
    fn url_references_are_not_rooted_under_image_root() {
        let root = Path::new(".");
        assert_eq!(
            resolve_reference(root, "https://example.com/map.webp"),
            ImageSource::Remote("https://example.com/map.webp".to_string())
        );
        assert_eq!(
            resolve_reference(root, "http://example.com/a.jpg"),
            ImageSource::Remote("http://example.com/a.jpg".to_string())
        );
        assert_eq!(
            resolve_reference(root, "file:///tmp/map.webp"),
            ImageSource::File(PathBuf::from("/tmp/map.webp"))
        );
    }

    #[test]
    fn file_url_reference_loads_from_disk() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("arch.jpg");
        write_test_jpeg(&path, 40, 20);
        let reference = format!("file://{}", path.display());

        let source = resolve_reference(Path::new("unused-root"), &reference);
        let decoded = load_rgba(&source, MAX_TEXTURE_SIDE).expect("file url should load");

        assert_eq!((decoded.width, decoded.height), (40, 20));
    }

    #[test]
    fn retain_live_evicts_unused_references() {
        let mut cache = ImageCache::new(".");
        cache.slots.insert("images/map.webp".to_string(), Slot::Failed);
        cache.slots.insert("images/space.webp".to_string(), Slot::Loading);

        cache.retain_live(["images/map.webp"]);

        assert!(cache.slots.contains_key("images/map.webp"));
        assert!(!cache.slots.contains_key("images/space.webp"));
    }
}
