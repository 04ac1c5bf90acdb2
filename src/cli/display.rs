// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typotrie CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `TYPOTRIE_THEME` if set, then `COLORFGBG`, then defaults to dark. Colors
//! are dropped entirely for `NO_COLOR` and when stdout is not a TTY, so the
//! output pipes cleanly.

use std::sync::OnceLock;
use typotrie::scoring::{NameScore, NameScores};
use typotrie::search::SearchHit;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

const BAR_WIDTH: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TYPOTRIE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color with optional modifiers, or plain text without a TTY.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ANSI escapes excluded.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = border();
    println!("{}│{}{}{}{}│{}", border, reset(), content, " ".repeat(pad), border, reset());
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let border = border();
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// DOMAIN FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

pub fn grade_badge(grade: NameScore) -> String {
    let color_fn: fn() -> String = match grade {
        NameScore::FullMatch => GREEN,
        NameScore::FullPrefix | NameScore::FirstMatch => BLUE,
        NameScore::Prefix => CYAN,
        NameScore::Substring => YELLOW,
        NameScore::Zero => RED,
    };
    themed(color_fn, &[BOLD], &format!("{:<11}", grade.to_string()))
}

/// `███████░░░ 0.712`
pub fn similarity_bar(similarity: f64) -> String {
    let filled = (similarity.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{} {:.3}",
        themed(MAGENTA, &[], &"█".repeat(filled)),
        themed(GRAY, &[DIM], &"░".repeat(BAR_WIDTH - filled)),
        similarity
    )
}

pub fn hit_line(position: usize, hit: &SearchHit, name: &str) -> String {
    let marker = if hit.exact { "=" } else { "~" };
    format!(
        " {:>2}. {} {} {:<24} #{:<6} edits {} {}",
        position,
        grade_badge(hit.name_scores.name_score),
        marker,
        truncate(name, 24),
        hit.id,
        hit.name_scores.errors,
        similarity_bar(hit.similarity)
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}

pub fn print_hits<'a, F>(query: &str, hits: &[SearchHit], name_of: F)
where
    F: Fn(u32) -> &'a str,
{
    section_top(&format!("QUERY \"{}\"", query));
    if hits.is_empty() {
        row(&themed(GRAY, &[DIM], "  no matches"));
    }
    for (i, hit) in hits.iter().enumerate() {
        row(&hit_line(i + 1, hit, name_of(hit.id)));
    }
    section_bot();
}

pub fn print_explain(name: &str, query: &str, scores: &NameScores) {
    section_top("ALIGNMENT");
    row(&format!("  name     {}", name));
    row(&format!("  query    {}", query));
    row(&format!("  grade    {}", grade_badge(scores.name_score)));
    row(&format!("  edits    {}", scores.errors));
    row(&format!("  matched  {} chars", scores.matched_length));
    section_bot();
}

pub fn print_automaton(pattern: &str, max_edits: u8, states: usize, symbols: usize) {
    section_top("AUTOMATON");
    row(&format!("  pattern  {}", pattern));
    row(&format!("  edits    {}", max_edits));
    row(&format!("  states   {}", states));
    row(&format!("  symbols  {}", symbols));
    section_bot();
}
