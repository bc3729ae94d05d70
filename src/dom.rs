use crate::constants::{
    ACTIVE_CLASS, CELL_CLASS, CELL_GLYPH, LAYER_CLASS, LAYER_ID_PREFIX, STAGE_ID,
};
use crate::core::constants::{COLS, ROWS};
use crate::core::{CellIndex, CellView};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn cell_id(cell: CellIndex) -> String {
    format!("l{}r{}c{}", cell.layer, cell.row, cell.col)
}

/// Viewport size in CSS px.
pub fn viewport_size() -> Vec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            Vec2::new(width as f32, height as f32)
        })
        .unwrap_or(Vec2::ONE)
}

// Layers the page did not declare go behind the existing ones
fn create_layer_container(
    document: &web::Document,
    stage: Option<&web::HtmlElement>,
    layer: usize,
) -> anyhow::Result<web::Element> {
    let stage = stage.ok_or_else(|| anyhow::anyhow!("missing #{} for layer {}", STAGE_ID, layer))?;
    let div = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    div.set_id(&format!("{LAYER_ID_PREFIX}{layer}"));
    div.set_class_name(&format!("{LAYER_CLASS} {LAYER_CLASS}{layer}"));
    stage
        .insert_before(&div, stage.first_child().as_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[grid] created #{}{}", LAYER_ID_PREFIX, layer);
    Ok(div)
}

/// On-screen cells for every layer, built once at startup.
pub struct DomGrid {
    layers: Vec<web::HtmlElement>,
    cells: Vec<web::Element>,
    stage: Option<web::HtmlElement>,
}

impl DomGrid {
    /// Fill each `#grid{layer}` container with `ROWS * COLS` cells.
    pub fn build(document: &web::Document, layer_count: usize) -> anyhow::Result<Self> {
        let stage = document
            .get_element_by_id(STAGE_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let mut layers = Vec::with_capacity(layer_count);
        let mut cells = Vec::with_capacity(layer_count * ROWS * COLS);
        for layer in 0..layer_count {
            let container_id = format!("{LAYER_ID_PREFIX}{layer}");
            let container = match document.get_element_by_id(&container_id) {
                Some(el) => el,
                None => create_layer_container(document, stage.as_ref(), layer)?,
            }
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            for row in 0..ROWS {
                for col in 0..COLS {
                    let div = document
                        .create_element("div")
                        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                    let cl = div.class_list();
                    _ = cl.add_2(CELL_CLASS, &format!("{CELL_CLASS}{layer}"));
                    div.set_id(&cell_id(CellIndex::new(layer, row, col)));
                    div.set_text_content(Some(CELL_GLYPH));
                    container
                        .append_child(&div)
                        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                    cells.push(div);
                }
            }
            layers.push(container);
        }
        log::info!("[grid] built {} layers of {}x{}", layer_count, ROWS, COLS);
        Ok(Self {
            layers,
            cells,
            stage,
        })
    }

    /// Move each layer container by its parallax offset.
    pub fn apply_parallax(&self, offsets: impl Iterator<Item = Vec2>) {
        for (el, offset) in self.layers.iter().zip(offsets) {
            let style = el.style();
            _ = style.set_property("left", &format!("{:.2}px", offset.x));
            _ = style.set_property("top", &format!("{:.2}px", offset.y));
        }
    }

    /// Scale the stage; `1.0` resets it.
    pub fn apply_zoom(&self, scale: f32) {
        if let Some(stage) = &self.stage {
            _ = stage
                .style()
                .set_property("transform", &format!("scale({scale:.3})"));
        }
    }

    #[inline]
    fn element(&self, cell: CellIndex) -> Option<&web::Element> {
        self.cells
            .get((cell.layer * ROWS + cell.row) * COLS + cell.col)
    }
}

impl CellView for DomGrid {
    fn set_active(&mut self, cell: CellIndex, active: bool) {
        if let Some(el) = self.element(cell) {
            let cl = el.class_list();
            if active {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
    }
}
