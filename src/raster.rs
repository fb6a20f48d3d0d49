// Canvas-2D implementation of the text rasterization capability. The canvas
// stays detached from the DOM; it only exists to pull luminance data back
// out of `getImageData`.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::constants::TEXT_FONT;
use crate::core::shapes::{ShapeError, TextRaster};

pub struct CanvasRaster {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRaster {
    pub fn new() -> Result<Self, ShapeError> {
        let document = web::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ShapeError::SurfaceUnavailable("no document".into()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| ShapeError::SurfaceUnavailable(format!("{e:?}")))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| ShapeError::SurfaceUnavailable("not a canvas element".into()))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ShapeError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| ShapeError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| ShapeError::SurfaceUnavailable("unexpected context type".into()))?;
        Ok(Self { canvas, ctx })
    }
}

impl TextRaster for CanvasRaster {
    fn rasterize(&mut self, text: &str, size: u32) -> Result<Vec<u8>, ShapeError> {
        self.canvas.set_width(size);
        self.canvas.set_height(size);
        let extent = size as f64;

        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, extent, extent);
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(text, extent / 2.0, extent / 2.0)
            .map_err(|e| ShapeError::SurfaceUnavailable(format!("{e:?}")))?;

        let image = self
            .ctx
            .get_image_data(0.0, 0.0, extent, extent)
            .map_err(|e| ShapeError::SurfaceUnavailable(format!("{e:?}")))?;
        let rgba = image.data();
        let mut luma = Vec::with_capacity((size * size) as usize);
        for px in rgba.chunks_exact(4) {
            let l = 0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
            luma.push(l as u8);
        }
        Ok(luma)
    }
}
