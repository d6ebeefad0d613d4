//! Drawing canvas component.
//!
//! Scene state lives in a [`store::Canvas`]; this component feeds it pointer
//! events and, in the browser, copies its bitmap onto a `<canvas>`.

use dioxus::prelude::*;
use store::drawing::{Bitmap, Canvas, Drawing, Tool};

use crate::icons::{FaArrowPointer, FaCircle, FaDownload, FaEraser, FaPencil, FaSquare, FaTrashCan};
use crate::Icon;

const CANVAS_ID: &str = "drawing-canvas";

#[component]
pub fn DrawingCanvas(
    /// Saved scene JSON, if the note already has a drawing.
    initial: Option<String>,
    width: u32,
    height: u32,
    on_save: EventHandler<Drawing>,
) -> Element {
    let mut canvas = use_signal(move || {
        initial
            .as_deref()
            .map(Drawing::from_json)
            .and_then(|parsed| {
                parsed
                    .inspect_err(|e| tracing::warn!("ignoring saved drawing: {e}"))
                    .ok()
            })
            .map(Canvas::from_drawing)
            .unwrap_or_else(|| Canvas::new(width, height))
    });
    let mut png_url = use_signal(|| Option::<String>::None);

    // Repaint after every change
    use_effect(move || paint(canvas.read().bitmap()));

    let (active_tool, color_hex, w, h) = {
        let current = canvas.read();
        let bitmap = current.bitmap();
        (current.tool(), current.color().to_string(), bitmap.width(), bitmap.height())
    };

    rsx! {
        div {
            class: "drawing",
            div {
                class: "drawing-toolbar",
                for tool in Tool::ALL {
                    button {
                        r#type: "button",
                        class: if active_tool == tool { "btn btn-icon btn-active" } else { "btn btn-icon" },
                        title: tool.label(),
                        onclick: move |_| canvas.write().select_tool(tool),
                        ToolIcon { tool }
                    }
                }
                input {
                    r#type: "color",
                    class: "drawing-color",
                    value: "{color_hex}",
                    oninput: move |evt: FormEvent| {
                        if let Err(e) = canvas.write().set_color(&evt.value()) {
                            tracing::warn!("{e}");
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "btn btn-icon",
                    title: "Clear",
                    onclick: move |_| canvas.write().clear(),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
                button {
                    r#type: "button",
                    class: "btn btn-icon",
                    title: "Export PNG",
                    onclick: move |_| png_url.set(export_png()),
                    Icon { icon: FaDownload, width: 14, height: 14 }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary drawing-save",
                    onclick: move |_| {
                        let scene = canvas.write().finish();
                        on_save.call(scene);
                    },
                    "Save Drawing"
                }
            }
            if let Some(url) = png_url() {
                a {
                    class: "drawing-download",
                    href: "{url}",
                    download: "drawing.png",
                    "Download drawing.png"
                }
            }
            div {
                class: "drawing-frame",
                canvas {
                    id: CANVAS_ID,
                    width: "{w}",
                    height: "{h}",
                    onpointerdown: move |evt: Event<PointerData>| {
                        let (x, y) = canvas_point(&evt);
                        canvas.write().pointer_down(x, y);
                    },
                    onpointermove: move |evt: Event<PointerData>| {
                        if !canvas.peek().is_stroking() {
                            return;
                        }
                        let (x, y) = canvas_point(&evt);
                        canvas.write().pointer_move(x, y);
                    },
                    onpointerup: move |_| {
                        canvas.write().pointer_up();
                    },
                    onpointerleave: move |_| {
                        if canvas.peek().is_stroking() {
                            canvas.write().pointer_up();
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ToolIcon(tool: Tool) -> Element {
    match tool {
        Tool::Select => rsx! { Icon { icon: FaArrowPointer, width: 14, height: 14 } },
        Tool::Draw => rsx! { Icon { icon: FaPencil, width: 14, height: 14 } },
        Tool::Rectangle => rsx! { Icon { icon: FaSquare, width: 14, height: 14 } },
        Tool::Circle => rsx! { Icon { icon: FaCircle, width: 14, height: 14 } },
        Tool::Eraser => rsx! { Icon { icon: FaEraser, width: 14, height: 14 } },
    }
}

/// Pointer position in canvas pixels. The element may be scaled down by CSS.
fn canvas_point(evt: &Event<PointerData>) -> (f32, f32) {
    let point = evt.element_coordinates();
    let scale = display_scale();
    ((point.x * scale) as f32, (point.y * scale) as f32)
}

#[cfg(target_arch = "wasm32")]
fn canvas_element() -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn display_scale() -> f64 {
    match canvas_element() {
        Some(el) if el.client_width() > 0 => el.width() as f64 / el.client_width() as f64,
        _ => 1.0,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn display_scale() -> f64 {
    1.0
}

#[cfg(target_arch = "wasm32")]
fn paint(bitmap: &Bitmap) {
    use wasm_bindgen::{Clamped, JsCast};

    let Some(el) = canvas_element() else {
        return;
    };
    let context = el
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok());
    let Some(context) = context else {
        tracing::warn!("2d context unavailable");
        return;
    };
    let (width, height) = (bitmap.width(), bitmap.height());
    match web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(bitmap.pixels()), width, height) {
        Ok(image) => {
            if let Err(e) = context.put_image_data(&image, 0.0, 0.0) {
                tracing::warn!("put_image_data: {e:?}");
            }
        }
        Err(e) => tracing::warn!("ImageData: {e:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn paint(bitmap: &Bitmap) {
    tracing::trace!(width = bitmap.width(), height = bitmap.height(), "canvas repaint");
}

/// PNG data URL of what the canvas currently shows.
#[cfg(target_arch = "wasm32")]
fn export_png() -> Option<String> {
    canvas_element()?
        .to_data_url()
        .inspect_err(|e| tracing::warn!("to_data_url: {e:?}"))
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn export_png() -> Option<String> {
    None
}
