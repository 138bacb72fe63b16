//! Canvas 2D renderer

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DASH_LENGTH, DASH_PERIOD, Palette, ground_dash_offset};
use crate::consts::*;
use crate::sim::{Aabb, Frame, RunPhase};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    palette: Palette,
}

impl CanvasRenderer {
    /// Size the canvas to the logical playfield and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            palette: Palette::default(),
        })
    }

    pub fn draw(&self, frame: &Frame, time_ms: f64) {
        let ctx = &self.ctx;
        let w = PLAYFIELD_WIDTH as f64;
        let h = PLAYFIELD_HEIGHT as f64;
        let ground = GROUND_Y as f64;

        ctx.clear_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str(self.palette.sky);
        ctx.fill_rect(0.0, 0.0, w, ground);
        ctx.set_fill_style_str(self.palette.ground);
        ctx.fill_rect(0.0, ground, w, h - ground);

        // Dashes only scroll while running
        let offset = if frame.phase == RunPhase::Running {
            ground_dash_offset(time_ms) as f64
        } else {
            0.0
        };
        let dash_y = ground + 14.0;
        ctx.set_stroke_style_str(self.palette.ground_dash);
        ctx.set_line_width(2.0);
        let mut x = 0.0;
        while x < w {
            ctx.begin_path();
            ctx.move_to(x - offset, dash_y);
            ctx.line_to(x - offset + DASH_LENGTH as f64, dash_y);
            ctx.stroke();
            x += DASH_PERIOD as f64;
        }

        self.draw_character(&frame.character, frame.character_frame);

        ctx.set_fill_style_str(self.palette.obstacle);
        for obstacle in &frame.obstacles {
            self.draw_obstacle(obstacle);
        }
    }

    /// Body block with two alternating legs
    fn draw_character(&self, sprite: &Aabb, pose: u8) {
        let ctx = &self.ctx;
        let x = sprite.left() as f64;
        let y = sprite.top().round() as f64;
        let w = sprite.size.x as f64;
        let h = sprite.size.y as f64;
        let leg_h = h * 0.2;

        ctx.set_fill_style_str(self.palette.character);
        // Head and body
        ctx.fill_rect(x + w * 0.5, y, w * 0.5, h * 0.35);
        ctx.fill_rect(x, y + h * 0.3, w * 0.75, h * 0.5);
        // Eye
        ctx.clear_rect(x + w * 0.8, y + h * 0.08, w * 0.08, h * 0.08);

        // Alternate which leg is lifted
        let lift = leg_h * 0.4;
        let (back, front) = if pose % 2 == 0 { (lift, 0.0) } else { (0.0, lift) };
        let legs_y = y + h - leg_h;
        ctx.fill_rect(x + w * 0.15, legs_y, w * 0.12, leg_h - back);
        ctx.fill_rect(x + w * 0.5, legs_y, w * 0.12, leg_h - front);
    }

    /// Cactus: trunk plus two arms
    fn draw_obstacle(&self, b: &Aabb) {
        let ctx = &self.ctx;
        let x = b.left() as f64;
        let y = b.top() as f64;
        let w = b.size.x as f64;
        let h = b.size.y as f64;

        ctx.fill_rect(x + w * 0.35, y, w * 0.3, h);
        ctx.fill_rect(x, y + h * 0.3, w * 0.2, h * 0.35);
        ctx.fill_rect(x + w * 0.8, y + h * 0.2, w * 0.2, h * 0.3);
        ctx.fill_rect(x, y + h * 0.55, w, h * 0.1);
    }
}
