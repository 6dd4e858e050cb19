use crate::components::{use_shortcuts, StrokeOrderGuide};
use crate::config::PracticeConfig;
use crate::engine::{Command, InputController, Point, PointerInput, Renderer, Repaint};
use crate::geom::{ClientRect, SurfaceGeometry};
use crate::painter::CanvasPainter;
use crate::util::{PointerSource, ResultExt};
use glam::Vec2;
use leptos::ev::PointerEvent;
use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_device_pixel_ratio, use_element_size, UseElementSizeReturn};
use send_wrapper::SendWrapper;
use thaw::{Button, ButtonAppearance};

/// Maps a pointer event into canvas space using the bounds of the element it was dispatched to.
fn canvas_point(e: &PointerEvent, extent: Vec2) -> Option<Point> {
	let rect = e.target_rect()?;
	SurfaceGeometry::new(extent, rect, 1.0).to_canvas(e.client_position())
}

/// A canvas for tracing `character` over its stroke-order diagram, with undo, redo and clear.
///
/// Committed strokes live in an `InputController`; the canvas itself is only ever a cache of what
/// the controller says is visible.
#[component]
pub fn WritingPractice(#[prop(into)] character: Signal<String>) -> impl IntoView {
	let config: PracticeConfig = expect_context();
	let extent = config.canvas_size;
	let renderer = Renderer::from_config(&config);

	let controller = RwSignal::new(InputController::new(character.get_untracked()));
	let painter = StoredValue::new(None::<SendWrapper<CanvasPainter>>);
	let canvas_ref = NodeRef::<html::Canvas>::new();
	let show_guide = RwSignal::new(config.show_guide);

	let paint = move |repaint: Repaint| {
		if repaint == Repaint::None {
			return;
		}
		painter.update_value(|painter| {
			let Some(painter) = painter else {
				return;
			};
			controller.with_untracked(|c| {
				renderer.apply(&mut **painter, repaint, c.visible_strokes())
			});
		});
	};

	// (Re)size the backing store whenever the element or the display density changes. Resizing
	// wipes the canvas, so this always ends in a full redraw.
	let UseElementSizeReturn { width, height } = use_element_size(canvas_ref);
	let device_pixel_ratio = use_device_pixel_ratio();
	Effect::new(move |_| {
		width.track();
		height.track();
		let device_pixel_ratio = device_pixel_ratio.get() as f32;
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let rect = ClientRect::from(&canvas.get_bounding_client_rect());
		let geometry = SurfaceGeometry::new(extent, rect, device_pixel_ratio);
		painter.update_value(|painter| {
			if painter.is_none() {
				*painter = CanvasPainter::new(&canvas, extent)
					.ok_or_log()
					.map(SendWrapper::new);
			}
			if let Some(painter) = painter {
				painter.configure(&canvas, &geometry);
			}
		});
		paint(Repaint::Full);
	});

	Effect::new(move |_| {
		let repaint = character
			.with(|character| controller.try_update(|c| c.set_character(character.as_str())));
		paint(repaint.unwrap_or_default());
	});

	let input = move |input: PointerInput| {
		// Moves never change history, so don't wake anything that watches it.
		let repaint = match input {
			PointerInput::Move { .. } => controller.try_update_untracked(|c| c.pointer(input)),
			_ => controller.try_update(|c| c.pointer(input)),
		};
		paint(repaint.unwrap_or_default());
	};

	let command = move |command: Command| {
		let repaint = controller.try_update(|c| c.command(command));
		paint(repaint.unwrap_or_default());
	};
	use_shortcuts(command);

	let pointerdown = move |e: PointerEvent| {
		if e.button() != 0 {
			return;
		}
		e.prevent_default();
		let Some(point) = canvas_point(&e, extent) else {
			return;
		};
		input(PointerInput::Down {
			pointer_id: e.pointer_id(),
			point,
		});
	};
	let pointermove = move |e: PointerEvent| {
		let Some(point) = canvas_point(&e, extent) else {
			return;
		};
		input(PointerInput::Move {
			pointer_id: e.pointer_id(),
			point,
		});
	};
	let pointerup = move |e: PointerEvent| {
		input(PointerInput::Up {
			pointer_id: e.pointer_id(),
		})
	};
	let pointercancel = move |e: PointerEvent| {
		input(PointerInput::Cancel {
			pointer_id: e.pointer_id(),
		})
	};
	let pointerleave = move |e: PointerEvent| {
		input(PointerInput::Leave {
			pointer_id: e.pointer_id(),
		})
	};

	let can_undo = Memo::new(move |_| controller.with(|c| c.history().can_undo()));
	let can_redo = Memo::new(move |_| controller.with(|c| c.history().can_redo()));
	let can_clear = Memo::new(move |_| controller.with(|c| !c.history().is_empty()));

	let surface_style = format!("aspect-ratio: {} / {}", extent.x, extent.y);

	view! {
		<div class="WritingPractice">
			<div class="PracticeSurface" style=surface_style>
				<StrokeOrderGuide character opacity=config.guide_opacity visible=show_guide/>
				<canvas
					class="PracticeCanvas"
					style="touch-action: none"
					node_ref=canvas_ref
					on:pointerdown=pointerdown
					on:pointermove=pointermove
					on:pointerup=pointerup
					on:pointercancel=pointercancel
					on:pointerleave=pointerleave
				></canvas>
			</div>
			<div class="PracticeControls">
				<Button
					appearance=ButtonAppearance::Secondary
					on_click=move |_| show_guide.update(|show| *show = !*show)
				>
					{move || if show_guide.get() { "Hide Guide" } else { "Show Guide" }}
				</Button>
				<Button
					on_click=move |_| command(Command::Undo)
					disabled=Signal::derive(move || !can_undo.get())
				>
					"Undo"
				</Button>
				<Button
					on_click=move |_| command(Command::Redo)
					disabled=Signal::derive(move || !can_redo.get())
				>
					"Redo"
				</Button>
				<Button
					on_click=move |_| command(Command::Clear)
					disabled=Signal::derive(move || !can_clear.get())
				>
					"Clear"
				</Button>
			</div>
		</div>
	}
}
