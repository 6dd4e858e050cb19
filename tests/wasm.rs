#![cfg(target_arch = "wasm32")]

use glam::vec2;
use kakitori::config::PracticeConfig;
use kakitori::engine::{InputController, Renderer, Repaint};
use kakitori::geom::{ClientRect, SurfaceGeometry};
use kakitori::painter::CanvasPainter;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn create_canvas() -> web_sys::HtmlCanvasElement {
	web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap()
}

fn pixels(canvas: &web_sys::HtmlCanvasElement, painter: &CanvasPainter) -> Vec<u8> {
	painter
		.context()
		.get_image_data(0.0, 0.0, canvas.width() as f64, canvas.height() as f64)
		.unwrap()
		.data()
		.to_vec()
}

fn setup() -> (web_sys::HtmlCanvasElement, CanvasPainter, Renderer) {
	let config = PracticeConfig::builder().canvas_size(vec2(70.0, 50.0)).build();
	let canvas = create_canvas();
	let mut painter = CanvasPainter::new(&canvas, config.canvas_size).unwrap();
	let rect = ClientRect::new(0.0, 0.0, 70.0, 50.0);
	let geometry = SurfaceGeometry::new(config.canvas_size, rect, 2.0);
	painter.configure(&canvas, &geometry);
	(canvas, painter, Renderer::from_config(&config))
}

#[wasm_bindgen_test]
fn test_configure_sizes_backing_store() {
	let (canvas, _painter, _renderer) = setup();
	assert_eq!((canvas.width(), canvas.height()), (140, 100));
}

#[wasm_bindgen_test]
fn test_full_redraw_is_idempotent() {
	let (canvas, mut painter, renderer) = setup();
	let mut controller = InputController::new("あ");
	controller.pointer_down(1, vec2(10.0, 10.0));
	controller.pointer_move(1, vec2(60.0, 40.0));
	controller.pointer_up(1);

	renderer.apply(&mut painter, Repaint::Full, controller.visible_strokes());
	let first = pixels(&canvas, &painter);
	assert!(first.chunks(4).any(|rgba| rgba[3] != 0));

	renderer.apply(&mut painter, Repaint::Full, controller.visible_strokes());
	assert_eq!(first, pixels(&canvas, &painter));
}

#[wasm_bindgen_test]
fn test_undo_clears_canvas() {
	let (canvas, mut painter, renderer) = setup();
	let mut controller = InputController::new("あ");
	controller.pointer_down(1, vec2(10.0, 10.0));
	let repaint = controller.pointer_move(1, vec2(60.0, 40.0));
	renderer.apply(&mut painter, repaint, controller.visible_strokes());
	controller.pointer_up(1);
	assert!(pixels(&canvas, &painter).chunks(4).any(|rgba| rgba[3] != 0));

	let repaint = controller.undo();
	assert_eq!(repaint, Repaint::Full);
	renderer.apply(&mut painter, repaint, controller.visible_strokes());
	assert!(pixels(&canvas, &painter).iter().all(|&byte| byte == 0));
}
