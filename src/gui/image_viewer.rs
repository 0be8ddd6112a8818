//! Image Viewer Window
//! Shows a static image file (the circuit diagram) as an egui texture.

use egui::load::SizedTexture;
use egui::{ColorImage, ScrollArea, TextureHandle, TextureOptions};
use std::path::{Path, PathBuf};

/// Decode an image file into RGBA pixels egui can upload.
pub fn load_color_image(path: &Path) -> Result<ColorImage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[derive(Default)]
pub struct ImageViewer {
    open: bool,
    texture: Option<TextureHandle>,
    loaded_path: Option<PathBuf>,
}

impl ImageViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` (if not already loaded) and open the window.
    ///
    /// On failure the window stays closed and the previous texture is kept.
    pub fn open(&mut self, ctx: &egui::Context, path: &Path) -> Result<(), image::ImageError> {
        if self.loaded_path.as_deref() != Some(path) || self.texture.is_none() {
            let image = load_color_image(path)?;
            let texture = ctx.load_texture("circuit_diagram", image, TextureOptions::default());
            self.texture = Some(texture);
            self.loaded_path = Some(path.to_path_buf());
        }
        self.open = true;
        Ok(())
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(texture) = &self.texture else {
            return;
        };
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new("Circuit Diagram")
            .open(&mut open)
            .default_size([600.0, 400.0])
            .show(ctx, |ui| {
                ScrollArea::both().show(ui, |ui| {
                    ui.add(
                        egui::Image::from_texture(SizedTexture::from_handle(texture))
                            .shrink_to_fit(),
                    );
                });
            });
        self.open = open;
    }
}
