//! Pure projection from game state to something drawable.
//!
//! `GameView::project` reads a controller and never mutates it; `render_html`
//! turns a view into markup. Neither touches the DOM, so both run natively.

use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::game::{ColorCounts, GameController, Phase, prize_label};
use crate::palette::swatch;
use crate::rng::RandomIndex;

pub const TITLE: &str = "Color Change Game";
pub const SCOREBOARD_HEADING: &str = "Color Count Card";
pub const EMPTY_SCOREBOARD: &str = "Error: No colors loaded. Please reload.";

/// Banner shown once every prize slot is taken.
pub fn game_over_banner(prize_slots: usize) -> String {
    format!("Game Over! {prize_slots} colors have won their prizes.")
}

/// Page colors. `code` is `None` for the neutral theme.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Theme {
    pub code: Option<&'static str>,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Theme {
    pub fn neutral() -> Self {
        Self { code: None, background: "#ffffff", foreground: "#212529" }
    }

    pub fn tinted(code: &'static str) -> Self {
        Self { code: Some(code), background: swatch(code), foreground: "#ffffff" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ColorButton {
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreRow {
    pub name: &'static str,
    pub code: &'static str,
    pub count: u32,
    /// Set for winners, e.g. "2nd Prize".
    pub prize: Option<String>,
}

impl ScoreRow {
    pub fn is_winner(&self) -> bool {
        self.prize.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameView {
    pub phase: Phase,
    pub current_color: &'static str,
    pub theme: Theme,
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub buttons: Vec<ColorButton>,
    pub scoreboard: Vec<ScoreRow>,
    pub game_over: bool,
    pub prize_slots: usize,
}

impl GameView {
    pub fn project<R: RandomIndex>(game: &GameController<R>) -> Self {
        let running = game.is_running();
        let current = game.current_color();
        let theme = if !running && game.winners().is_empty() {
            Theme::neutral()
        } else {
            Theme::tinted(current.code)
        };

        Self {
            phase: game.phase(),
            current_color: current.name,
            theme,
            start_enabled: !running,
            stop_enabled: running,
            buttons: game
                .active_colors()
                .iter()
                .map(|c| ColorButton { name: c.name, code: c.code })
                .collect(),
            scoreboard: scoreboard(game.counts(), |name| game.winner_rank(name)),
            game_over: game.is_game_over(),
            prize_slots: game.config().prize_slots,
        }
    }
}

#[cfg(feature = "serde_json")]
impl GameView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn scoreboard(counts: &ColorCounts, rank_of: impl Fn(&str) -> Option<usize>) -> Vec<ScoreRow> {
    counts
        .iter()
        .map(|(name, count)| ScoreRow {
            name,
            code: crate::palette::find(name).map_or("", |c| c.code),
            count,
            prize: rank_of(name).map(prize_label),
        })
        .collect()
}

const BUTTON_STYLE: &str = "border:none; border-radius:4px; padding:6px 14px; margin:4px; font-size:15px; cursor:pointer;";

/// Markup for the whole game. Interactive elements carry `data-action`
/// (`start`, `stop`, `click`) and, for color buttons, `data-color`.
pub fn render_html(view: &GameView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(&mut out, view);
    out
}

fn write_page(out: &mut String, view: &GameView) -> std::fmt::Result {
    write!(
        out,
        "<div class='ccg-page' data-theme='{}' style='min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:16px; background-color:{}; color:{}; transition:background-color 0.5s; font-family:Poppins, sans-serif;'>",
        view.theme.code.unwrap_or("neutral"),
        view.theme.background,
        view.theme.foreground
    )?;
    write!(out, "<h1 style='font-weight:bold; padding:8px; box-shadow:0 2px 6px rgba(0,0,0,0.3); border-radius:4px;'>{TITLE}</h1>")?;
    write!(
        out,
        "<h3>Current Color : <span class='ccg-current' style='background:#f8f9fa; color:#212529; font-style:italic; padding:6px; border-radius:4px;'>{}</span></h3>",
        view.current_color
    )?;

    out.push_str("<div class='ccg-controls' style='margin:8px 0;'>");
    write_control(out, "start", "Start", "#0d6efd", view.start_enabled)?;
    write_control(out, "stop", "Stop", "#212529", view.stop_enabled)?;
    out.push_str("</div>");

    out.push_str("<div class='ccg-colors' style='margin-bottom:16px; display:flex; flex-wrap:wrap; justify-content:center;'>");
    for b in &view.buttons {
        write!(
            out,
            "<button data-action='click' data-color='{name}' style='{BUTTON_STYLE} background:{bg}; color:#ffffff;'>{name}</button>",
            name = b.name,
            bg = swatch(b.code)
        )?;
    }
    out.push_str("</div>");

    out.push_str("<div class='ccg-scoreboard' style='width:100%; max-width:480px;'>");
    write!(out, "<h5 style='text-align:center; padding:8px;'>{SCOREBOARD_HEADING}</h5>")?;
    if view.scoreboard.is_empty() {
        write!(out, "<p class='ccg-error' style='color:#dc3545; text-align:center;'>{EMPTY_SCOREBOARD}</p>")?;
    } else {
        out.push_str("<ul style='list-style:none; padding:0; margin:0 0 16px 0;'>");
        for row in &view.scoreboard {
            write_row(out, row)?;
        }
        out.push_str("</ul>");
    }
    if view.game_over {
        write!(
            out,
            "<h4 class='ccg-game-over' style='margin-top:16px; color:#198754; background:#212529; font-weight:bold; text-align:center; padding:8px; border-radius:6px;'>{}</h4>",
            game_over_banner(view.prize_slots)
        )?;
    }
    out.push_str("</div></div>");
    Ok(())
}

fn write_control(out: &mut String, action: &str, label: &str, bg: &str, enabled: bool) -> std::fmt::Result {
    write!(
        out,
        "<button data-action='{action}' style='{BUTTON_STYLE} background:{bg}; color:#ffffff; opacity:{};'{}>{label}</button>",
        if enabled { "1" } else { "0.5" },
        if enabled { "" } else { " disabled" }
    )
}

fn write_row(out: &mut String, row: &ScoreRow) -> std::fmt::Result {
    let (layout, tint) = if row.is_winner() {
        ("center", format!("background:{}; color:#ffffff; font-weight:bold;", swatch(row.code)))
    } else {
        ("space-between", "background:#ffffff; color:#212529;".to_string())
    };
    write!(
        out,
        "<li class='ccg-row' data-color='{}' style='display:flex; align-items:center; justify-content:{layout}; gap:8px; padding:8px 12px; border:1px solid #dee2e6; {tint}'>",
        row.name
    )?;
    write!(out, "<span>{}</span>", row.name)?;
    if let Some(prize) = &row.prize {
        write!(out, "<small>Congratulations You Got {prize}!</small>")?;
    }
    write!(
        out,
        "<span style='background:#212529; color:#ffffff; border-radius:999px; padding:2px 10px;'>{}</span></li>",
        row.count
    )
}
