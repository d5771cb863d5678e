//! Drawing of the menu and loading screens.

use glam::IVec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::constants::{ui, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::context::GameContext;
use crate::error::{GameError, GameResult, TextureError};
use crate::screen::{Button, Screen};
use crate::texture::sprites::Background;
use crate::texture::ttf::TtfRenderer;

const HEADING_TOP: i32 = SCREEN_HEIGHT / 4;

/// Draws a non-gameplay screen. Playing is drawn by the run itself.
pub fn draw_screen(ctx: &mut GameContext, screen: &Screen) -> GameResult<()> {
    match *screen {
        Screen::Loading { .. } => {
            draw_background(ctx, Background::Loading)?;
            TtfRenderer::new(ui::BANNER_TEXT_SCALE).render_centered(
                &mut ctx.canvas,
                &mut ctx.atlas,
                "Welcome to Skyward Dash",
                IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
                ui::TEXT_COLOR,
            )?;
        }
        Screen::Intro => {
            draw_background(ctx, Background::Forest)?;
            draw_heading(ctx, "Skyward Dash", HEADING_TOP, ui::TITLE_TEXT_SCALE, ui::TEXT_COLOR)?;
        }
        Screen::Instructions => {
            clear(ctx, ui::PLAIN_BACKGROUND);
            for (i, line) in ui::INSTRUCTIONS.iter().enumerate() {
                let top = HEADING_TOP + i as i32 * ui::INSTRUCTION_LINE_SPACING;
                draw_heading(ctx, line, top, ui::BODY_TEXT_SCALE, ui::DARK_TEXT_COLOR)?;
            }
        }
        Screen::LevelUp { .. } => {
            clear(ctx, ui::PLAIN_BACKGROUND);
            draw_heading(ctx, "Level Up!", HEADING_TOP, ui::BODY_TEXT_SCALE, ui::DARK_TEXT_COLOR)?;
        }
        Screen::GameOver { score } => {
            draw_background(ctx, Background::GameOver)?;
            draw_heading(ctx, "Game Over", HEADING_TOP, ui::BODY_TEXT_SCALE, ui::TEXT_COLOR)?;
            let high_score = format!("High Score: {}", ctx.high_scores.high_score());
            draw_heading(ctx, &high_score, ui::HIGH_SCORE_TOP, ui::BODY_TEXT_SCALE, ui::TEXT_COLOR)?;
            let score = format!("Score: {}", score);
            draw_heading(ctx, &score, ui::FINAL_SCORE_TOP, ui::BODY_TEXT_SCALE, ui::TEXT_COLOR)?;
        }
        Screen::Playing { .. } => {}
    }

    for button in screen.buttons() {
        draw_button(ctx, button)?;
    }

    Ok(())
}

fn clear(ctx: &mut GameContext, color: Color) {
    ctx.canvas.set_draw_color(color);
    ctx.canvas.clear();
}

fn draw_background(ctx: &mut GameContext, background: Background) -> GameResult<()> {
    if let Some(texture) = ctx.sprites.background(background) {
        ctx.canvas.copy(texture, None, None).map_err(TextureError::RenderFailed)?;
    } else {
        clear(ctx, Color::BLACK);
    }
    Ok(())
}

/// Draws a line of text horizontally centered with its top at `top`.
fn draw_heading(ctx: &mut GameContext, text: &str, top: i32, scale: f32, color: Color) -> GameResult<()> {
    let renderer = TtfRenderer::new(scale);
    let width = renderer.text_width(&ctx.atlas, text) as i32;
    renderer.render_text(
        &mut ctx.canvas,
        &mut ctx.atlas,
        text,
        IVec2::new(SCREEN_WIDTH / 2 - width / 2, top),
        color,
    )?;
    Ok(())
}

fn draw_button(ctx: &mut GameContext, button: &Button) -> GameResult<()> {
    let bounds = button.bounds;
    ctx.canvas.set_draw_color(ui::BUTTON_COLOR);
    ctx.canvas
        .fill_rect(Rect::new(bounds.left(), bounds.top(), bounds.size.x, bounds.size.y))
        .map_err(GameError::Sdl)?;

    TtfRenderer::new(ui::BODY_TEXT_SCALE).render_centered(
        &mut ctx.canvas,
        &mut ctx.atlas,
        button.label,
        bounds.center(),
        ui::TEXT_COLOR,
    )?;
    Ok(())
}
