//! Binds the timer to the engine runtime.

use std::path::PathBuf;

use anyhow::{Context, Result};

use cubetimer_engine::coords::{Vec2, Viewport};
use cubetimer_engine::core::{App, AppControl, FrameCtx};
use cubetimer_engine::paint::Color;
use cubetimer_engine::render::text::TextRenderer;
use cubetimer_engine::scene::DrawList;
use cubetimer_engine::text::{FontId, FontSystem};
use cubetimer_engine::time::MonotonicClock;
use cubetimer_engine::window::Runtime;

use crate::config::AppConfig;
use crate::format::format_best;
use crate::store::FileStore;
use crate::surface::{Surface, TextStyle};
use crate::timer::TimerController;

/// Opens the timer window and runs until it is closed.
pub fn run(config: AppConfig) -> Result<()> {
    let app = TimerApp::new(&config).inspect_err(|err| log::error!("{err:#}"))?;
    Runtime::run(config.window, config.gpu, app)
}

/// Engine application hosting a [`TimerController`].
pub struct TimerApp {
    controller: TimerController<MonotonicClock, FileStore>,

    fonts: FontSystem,
    font: FontId,
    draw_list: DrawList,
    text_renderer: TextRenderer,
    frames: u64,
}

impl TimerApp {
    /// Loads the display font and the best-time record.
    ///
    /// Fails only when none of the configured fonts can be loaded.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut fonts = FontSystem::new();
        let (font, path) = fonts
            .load_first(config.font_paths.iter().map(PathBuf::as_path))
            .context("no usable monospace font found")?;
        log::info!("using font {}", path.display());

        let store = FileStore::new(&config.save_path);
        if let Err(err) = store.ensure_exists() {
            log::error!("{err}");
        }

        let controller = TimerController::new(config.timer.clone(), MonotonicClock::new(), store);

        Ok(Self {
            controller,
            fonts,
            font,
            draw_list: DrawList::new(),
            text_renderer: TextRenderer::new(),
            frames: 0,
        })
    }
}

impl App for TimerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.frames = ctx.time.frame_index + 1;
        self.controller.update(ctx.input);

        self.draw_list.clear();
        let mut surface = FrameSurface {
            viewport: ctx.window.logical_size(),
            font: self.font,
            clear: self.controller.config().display.background,
            draw_list: &mut self.draw_list,
        };
        self.controller.render(&mut surface);
        let clear = surface.clear;

        let draw_list = &self.draw_list;
        let fonts = &self.fonts;
        let text = &mut self.text_renderer;
        ctx.render(clear, |rctx, target| {
            text.render(rctx, target, draw_list, fonts);
        })
    }

    fn on_exit(&mut self) {
        log::info!(
            "exiting after {} frames, best time {}",
            self.frames,
            format_best(self.controller.best_time())
        );
    }
}

/// Records one frame's draw calls into the engine's draw list.
struct FrameSurface<'a> {
    viewport: Viewport,
    font: FontId,
    clear: Color,
    draw_list: &'a mut DrawList,
}

impl Surface for FrameSurface<'_> {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: Color) {
        self.clear = color;
        self.draw_list.clear();
    }

    fn draw_text(&mut self, text: &str, position: Vec2, style: TextStyle) {
        self.draw_list
            .push_text(text, self.font, style.size, style.color, position, style.anchor);
    }
}
