//! Image loader serving desaturated copies of other images
//!
//! `grayscale://<uri>` fetches the bytes of `<uri>` through the regular
//! bytes loaders, decodes them with `image` and replaces every pixel with its
//! luma. Alpha is kept.

use eframe::egui;
use egui::load::{BytesPoll, ImageLoadResult, ImageLoader, ImagePoll, LoadError, SizeHint};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

pub const SCHEME: &str = "grayscale://";

/// URI under which the grayscale copy of `uri` is served
pub fn grayscale_uri(uri: &str) -> String {
    format!("{SCHEME}{uri}")
}

/// Decode `bytes` and convert to a grayscale egui image
pub fn decode_grayscale(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let gray = image::load_from_memory(bytes)?.grayscale().to_rgba8();
    let size = [gray.width() as usize, gray.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, gray.as_raw()))
}

type Entry = Result<Arc<egui::ColorImage>, String>;

#[derive(Default)]
pub struct GrayscaleLoader {
    cache: Mutex<HashMap<String, Entry>>,
}

impl GrayscaleLoader {
    pub const ID: &'static str = egui::generate_loader_id!(GrayscaleLoader);
}

impl ImageLoader for GrayscaleLoader {
    fn id(&self) -> &str {
        Self::ID
    }

    fn load(&self, ctx: &egui::Context, uri: &str, _: SizeHint) -> ImageLoadResult {
        let Some(inner) = uri.strip_prefix(SCHEME) else {
            return Err(LoadError::NotSupported);
        };

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = cache.get(uri) {
            return match entry {
                Ok(image) => Ok(ImagePoll::Ready { image: image.clone() }),
                Err(e) => Err(LoadError::Loading(e.clone())),
            };
        }

        match ctx.try_load_bytes(inner)? {
            BytesPoll::Pending { size } => Ok(ImagePoll::Pending { size }),
            BytesPoll::Ready { bytes, .. } => {
                let entry = match decode_grayscale(&bytes) {
                    Ok(image) => {
                        debug!(uri = inner, "Grayscale thumbnail decoded");
                        Ok(Arc::new(image))
                    }
                    Err(e) => {
                        warn!(error = %e, uri = inner, "Failed to decode thumbnail");
                        Err(e.to_string())
                    }
                };
                cache.insert(uri.to_owned(), entry.clone());
                entry
                    .map(|image| ImagePoll::Ready { image })
                    .map_err(LoadError::Loading)
            }
        }
    }

    fn forget(&self, uri: &str) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).remove(uri);
    }

    fn forget_all(&self) {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn byte_size(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .map(|entry| match entry {
                Ok(image) => image.pixels.len() * std::mem::size_of::<egui::Color32>(),
                Err(e) => e.len(),
            })
            .sum()
    }
}
