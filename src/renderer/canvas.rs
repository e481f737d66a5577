//! Canvas 2D surface for the browser
//!
//! Owns the three `HtmlImageElement`s and flips their `AssetState` to
//! `Ready` from the `onload` callback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{AssetId, AssetState, Assets, Surface, TextAlign, TextStyle};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    player: HtmlImageElement,
    obstacle: HtmlImageElement,
    background: HtmlImageElement,
    assets: Rc<RefCell<Assets>>,
}

impl CanvasSurface {
    /// Grab the 2D context and start loading every image
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        let assets = Rc::new(RefCell::new(Assets::default()));

        Ok(Self {
            ctx,
            player: load_image(AssetId::Player, &assets)?,
            obstacle: load_image(AssetId::Obstacle, &assets)?,
            background: load_image(AssetId::Background, &assets)?,
            assets,
        })
    }

    /// Snapshot of which images are ready
    pub fn assets(&self) -> Assets {
        self.assets.borrow().clone()
    }

    fn image(&self, id: AssetId) -> &HtmlImageElement {
        match id {
            AssetId::Player => &self.player,
            AssetId::Obstacle => &self.obstacle,
            AssetId::Background => &self.background,
        }
    }
}

fn load_image(id: AssetId, assets: &Rc<RefCell<Assets>>) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;

    {
        let assets = assets.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            assets.borrow_mut().set(id, AssetState::Ready);
            log::info!("Loaded {}", id.path());
        });
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
    }

    {
        let onerror = Closure::<dyn FnMut()>::new(move || {
            log::warn!("Failed to load {}, drawing a flat fill instead", id.path());
        });
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    }

    image.set_src(id.path());
    Ok(image)
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_image(&mut self, asset: AssetId, rect: Rect) {
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                self.image(asset),
                rect.pos.x as f64,
                rect.pos.y as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
        if let Err(e) = result {
            log::warn!("drawImage failed for {}: {:?}", asset.path(), e);
            self.fill_rect(rect, asset.fallback_color());
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
