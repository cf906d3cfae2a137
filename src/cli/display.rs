// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the suggestrix CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `SUGGESTRIX_THEME` first (for explicit control), then `COLORFGBG` (set by
//! some terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY
//! detection for pipelines.

use std::sync::OnceLock;

use suggestrix::{edit_distance, IndexStats, Lookup, LookupKind, RankedEntry, VerificationReport};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

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
    if let Ok(theme) = std::env::var("SUGGESTRIX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
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

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI codes
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

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("├"),
        label_part,
        border(&format!("{}┤", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded lookup kind badge
pub fn kind_badge(kind: LookupKind) -> String {
    let label = format!("[{}]", kind.as_str().to_uppercase());
    match kind {
        LookupKind::Top => themed(BLUE, &[BOLD], &label),
        LookupKind::Autocomplete => themed(GREEN, &[BOLD], &label),
        LookupKind::Autocorrect => themed(YELLOW, &[BOLD], &label),
    }
}

/// Usage counts stand out once a word has been confirmed at all
pub fn usage_value(usage: u64) -> String {
    let text = format!("{:>6}", usage);
    if usage == 0 {
        themed(GRAY, &[], &text)
    } else {
        themed(MAGENTA, &[BOLD], &text)
    }
}

/// Edit distance label (green = exact, yellow = one edit, red = further)
pub fn distance_label(distance: usize) -> String {
    let text = format!("d={}", distance);
    match distance {
        0 => themed(GREEN, &[], &text),
        1 => themed(YELLOW, &[], &text),
        _ => themed(RED, &[], &text),
    }
}

fn entry_row(rank: usize, entry: &RankedEntry, distance: Option<usize>) -> String {
    let mut line = format!(
        " {} {} {} {}",
        themed(GRAY, &[DIM], &format!("{:>2}.", rank)),
        pad_right(&themed(CYAN, &[BOLD], &entry.word), 24),
        pad_left(&entry.insertion_frequency.to_string(), 12),
        usage_value(entry.usage_frequency),
    );
    if let Some(distance) = distance {
        line.push_str("  ");
        line.push_str(&distance_label(distance));
    }
    line
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// One lookup as a box: badge, query, then ranked entries.
pub fn print_lookup(query: &str, result: &Lookup) {
    section_top("SUGGESTIONS");
    let heading = if query.trim().is_empty() {
        format!(" {}", kind_badge(result.kind))
    } else {
        format!(" {} {}", kind_badge(result.kind), themed(BLUE, &[], &format!("\"{}\"", query)))
    };
    row(&heading);
    section_mid("RANKED");
    row(&themed(
        GRAY,
        &[DIM],
        &format!(" {:>3} {:<24} {:>12} {:>6}", "#", "word", "freq", "usage"),
    ));

    if result.entries.is_empty() {
        row(&themed(GRAY, &[], " no suggestions"));
    }
    for (i, entry) in result.entries.iter().enumerate() {
        let distance = (result.kind == LookupKind::Autocorrect).then(|| edit_distance(query, &entry.word));
        row(&entry_row(i + 1, entry, distance));
    }
    section_bot();
}

/// Index statistics followed by the audit outcome.
pub fn print_inspect(stats: &IndexStats, report: &VerificationReport) {
    section_top("INDEX");
    row(&format!(" words              {:>12}", stats.words));
    row(&format!(" nodes              {:>12}", stats.nodes));
    row(&format!(" longest word       {:>12}", stats.max_depth));
    row(&format!(" total frequency    {:>12}", stats.total_insertion_frequency));
    row(&format!(" total usage        {:>12}", stats.total_usage_frequency));

    section_mid("AUDIT");
    row(&format!(" nodes checked      {:>12}", report.nodes_checked));
    row(&format!(" words checked      {:>12}", report.words_checked));
    if report.is_ok() {
        row(&format!(" {}", themed(GREEN, &[BOLD], "all caches hold their subtree's top words")));
    } else {
        for err in &report.errors {
            row(&format!(" {}", themed(RED, &[], &err.to_string())));
        }
    }
    section_bot();
}
