//! The viewer application: one frame = resolve menu input, maybe
//! regenerate, draw.

use anyhow::{Context, Result};

use gasket_core::{GasketBuffer, MeshSink, RenderSession};
use gasket_engine::core::{App, AppControl, FrameCtx};
use gasket_engine::input::{Key, MouseButton};
use gasket_engine::paint::Color;
use gasket_engine::render::{MeshRenderer, Panel, PanelRenderer, TextRenderer, TextSpan};
use gasket_engine::text::{FontId, FontSystem};

use crate::camera::OrbitCamera;
use crate::menu::{ContextMenu, MenuAction};

/// Dark neutral background behind the gasket.
const CLEAR_COLOR: Color = Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 };

/// Common system font locations, tried in order for the menu labels.
const UI_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Adapts the GPU mesh renderer to the session's sink contract for the
/// duration of one tick.
struct GpuMeshSink<'a, 'd> {
    device: &'d wgpu::Device,
    renderer: &'a mut MeshRenderer,
}

impl MeshSink for GpuMeshSink<'_, '_> {
    type Error = anyhow::Error;

    fn upload(&mut self, buffer: &GasketBuffer) -> Result<()> {
        self.renderer
            .upload(self.device, buffer.positions(), buffer.colors())
    }
}

pub struct ViewerApp {
    session: RenderSession,

    mesh: MeshRenderer,
    panels: PanelRenderer,
    text: TextRenderer,
    fonts: FontSystem,
    ui_font: FontId,

    camera: OrbitCamera,
    menu: ContextMenu,
}

impl ViewerApp {
    pub fn new() -> Result<Self> {
        let mut fonts = FontSystem::new();
        let bytes = load_ui_font_bytes()?;
        let ui_font = fonts
            .load_font(&bytes)
            .context("failed to parse the UI font")?;

        Ok(Self {
            session: RenderSession::default(),
            mesh: MeshRenderer::new(),
            panels: PanelRenderer::new(),
            text: TextRenderer::new(),
            fonts,
            ui_font,
            camera: OrbitCamera::new(),
            menu: ContextMenu::new(),
        })
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // The menu sees input first.
        if let Some(MenuAction::Exit) = self.menu.handle_input(ctx.input, ctx.input_frame) {
            log::info!("quit requested from the menu");
            return AppControl::Exit;
        }

        // Global quit key, deferred while the menu owns the keyboard.
        if !self.menu.wants_keyboard() && ctx.input_frame.keys_pressed.contains(&Key::Q) {
            log::info!("quit requested via keyboard");
            return AppControl::Exit;
        }

        // Camera input, deferred while the menu owns the pointer.
        if !self.menu.wants_pointer() {
            if ctx.input.button_down(MouseButton::Left) {
                let (dx, dy) = ctx.input_frame.pointer_delta;
                self.camera.drag(dx, dy);
            }
            if ctx.input_frame.scroll_lines != 0.0 {
                self.camera.dolly(ctx.input_frame.scroll_lines);
            }
        }

        // Regenerate + upload only when the menu's level differs from what
        // the GPU holds; the session tracks that.
        {
            let mut sink = GpuMeshSink {
                device: ctx.gpu.device(),
                renderer: &mut self.mesh,
            };
            if let Err(e) = self.session.tick(self.menu.selected_level(), &mut sink) {
                log::error!("mesh upload failed: {e:#}");
                return AppControl::Exit;
            }
        }

        let (w, h) = ctx.window.logical_size();
        let mvp = self.camera.mvp(w / h.max(1.0));

        let mut menu_panels: Vec<Panel> = Vec::new();
        let mut menu_text: Vec<TextSpan> = Vec::new();
        self.menu.draw(&mut menu_panels, &mut menu_text, self.ui_font);

        let Self { mesh, panels, text, fonts, .. } = self;

        // Draw every frame with whatever mesh is resident, then the overlay.
        ctx.render(CLEAR_COLOR, |rctx, target| {
            mesh.render(rctx, target, mvp);
            panels.render(rctx, target, &menu_panels);
            text.render(rctx, target, &menu_text, fonts);
        })
    }
}

fn load_ui_font_bytes() -> Result<Vec<u8>> {
    UI_FONT_PATHS
        .iter()
        .find_map(|p| std::fs::read(p).ok())
        .with_context(|| format!("no usable UI font found; looked in {UI_FONT_PATHS:?}"))
}
