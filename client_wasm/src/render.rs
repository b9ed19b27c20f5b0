use crate::surface::Surface;
use game_core::{Config, Phase, Pipe, Session};

const SKY_TOP: &str = "#9ad9ff";
const SKY_BOTTOM: &str = "#d8f5ff";
const SUN: &str = "#f7f3b8";
const PIPE: &str = "#3aa45a";
const PIPE_CAP: &str = "#2a8144";
const GROUND: &str = "#dfc06f";
const BIRD: &str = "#f7c529";
const EYE: &str = "#ffffff";
const PUPIL: &str = "#1f1f1f";
const INK: &str = "#202e45";
const PANEL_TEXT: &str = "#ffffff";
const READY_PANEL: &str = "rgba(10, 20, 40, 0.7)";
const GAME_OVER_PANEL: &str = "rgba(10, 20, 40, 0.78)";

const SUN_X: f64 = 360.0;
const SUN_Y: f64 = 92.0;
const SUN_RADIUS: f64 = 38.0;
const CAP_OVERHANG: f64 = 6.0;
const CAP_HEIGHT: f64 = 16.0;
const SCORE_Y: f64 = 64.0;

const BOLD: u32 = 700;
const MEDIUM: u32 = 500;

fn font(weight: u32, px: u32) -> String {
    format!("{weight} {px}px 'Trebuchet MS', sans-serif")
}

/// Draw one frame back to front: sky, pipes, ground, bird, score, overlay.
/// Reads the session only.
pub fn draw_frame(surface: &mut impl Surface, session: &Session, high_score: u32) {
    let config = session.config();
    let width = config.width as f64;
    let height = config.height as f64;

    surface.clear(width, height);
    draw_sky(surface, width, height);

    for pipe in session.pipes() {
        draw_pipe(surface, config, &pipe);
    }

    draw_ground(surface, config);
    draw_bird(surface, session);

    surface.text(
        &session.score().to_string(),
        width / 2.0,
        SCORE_Y,
        &font(BOLD, 42),
        INK,
    );

    match session.phase() {
        Phase::Ready => draw_ready_panel(surface, width),
        Phase::GameOver => draw_game_over_panel(surface, width, session.score(), high_score),
        Phase::Running => {}
    }
}

fn draw_sky(surface: &mut impl Surface, width: f64, height: f64) {
    surface.vertical_gradient(0.0, 0.0, width, height, SKY_TOP, SKY_BOTTOM);
    surface.circle(SUN_X, SUN_Y, SUN_RADIUS, SUN);
}

fn draw_pipe(surface: &mut impl Surface, config: &Config, pipe: &Pipe) {
    let (gap_top, gap_bottom) = config.gap_bounds(pipe.gap_y);
    let (gap_top, gap_bottom) = (gap_top as f64, gap_bottom as f64);
    let x = pipe.x as f64;
    let w = config.pipe_width as f64;
    let ground_top = config.ground_top() as f64;

    surface.rect(x, 0.0, w, gap_top, PIPE);
    surface.rect(x, gap_bottom, w, ground_top - gap_bottom, PIPE);

    // Lips at the gap edges
    let cap_x = x - CAP_OVERHANG;
    let cap_w = w + CAP_OVERHANG * 2.0;
    surface.rect(cap_x, gap_top - CAP_HEIGHT, cap_w, CAP_HEIGHT, PIPE_CAP);
    surface.rect(cap_x, gap_bottom, cap_w, CAP_HEIGHT, PIPE_CAP);
}

fn draw_ground(surface: &mut impl Surface, config: &Config) {
    surface.rect(
        0.0,
        config.ground_top() as f64,
        config.width as f64,
        config.ground_height as f64,
        GROUND,
    );
}

fn draw_bird(surface: &mut impl Surface, session: &Session) {
    let bird = session.bird();
    let x = bird.pos.x as f64;
    let y = bird.pos.y as f64;

    surface.circle(x, y, session.config().bird_radius as f64, BIRD);
    surface.circle(x + 5.0, y - 4.0, 5.0, EYE);
    surface.circle(x + 6.0, y - 4.0, 2.3, PUPIL);
}

fn draw_ready_panel(surface: &mut impl Surface, width: f64) {
    surface.rect(40.0, 238.0, width - 80.0, 118.0, READY_PANEL);
    surface.text("Flappy Bird", width / 2.0, 282.0, &font(BOLD, 30), PANEL_TEXT);
    surface.text("Press Space / Tap to fly", width / 2.0, 315.0, &font(MEDIUM, 18), PANEL_TEXT);
}

fn draw_game_over_panel(surface: &mut impl Surface, width: f64, score: u32, high_score: u32) {
    let mid = width / 2.0;
    surface.rect(48.0, 210.0, width - 96.0, 186.0, GAME_OVER_PANEL);
    surface.text("Game Over", mid, 258.0, &font(BOLD, 34), PANEL_TEXT);
    surface.text(&format!("Score: {score}"), mid, 296.0, &font(MEDIUM, 20), PANEL_TEXT);
    surface.text(&format!("High Score: {high_score}"), mid, 326.0, &font(MEDIUM, 20), PANEL_TEXT);
    surface.text("Space / Tap to restart", mid, 362.0, &font(MEDIUM, 20), PANEL_TEXT);
}
