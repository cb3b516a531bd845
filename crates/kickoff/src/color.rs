//! Terminal colors for the pitch-side palette.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection through
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! in-process override checked before any styling.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use kickoff_core::PlayerStatus;

/// Set by `--no-color`.
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const CHALK: Rgb = Rgb::from_hex(0xE8F5E9); // Names, primary text
const GRASS: Rgb = Rgb::from_hex(0x81C784); // Active/success
const GOLD: Rgb = Rgb::from_hex(0xFFD700); // Levels, yellow cards
const FLARE: Rgb = Rgb::from_hex(0xE65100); // Warnings
const RED_CARD: Rgb = Rgb::from_hex(0xE53935); // Errors, blacklisted
const TOUCHLINE: Rgb = Rgb::from_hex(0x6E8574); // Borders, hints

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

fn paint_stderr(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

pub fn chalk(text: &str) -> String {
    paint(text, CHALK)
}

pub fn grass(text: &str) -> String {
    paint(text, GRASS)
}

pub fn gold(text: &str) -> String {
    paint(text, GOLD)
}

pub fn flare(text: &str) -> String {
    paint(text, FLARE)
}

pub fn red_card(text: &str) -> String {
    paint(text, RED_CARD)
}

pub fn muted(text: &str) -> String {
    paint(text, TOUCHLINE)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Color-code a roster status bucket.
pub fn status(status: PlayerStatus, text: &str) -> String {
    match status {
        PlayerStatus::Active => grass(text),
        PlayerStatus::Inactive => muted(text),
        PlayerStatus::Blacklisted => red_card(text),
    }
}

/// Yellow-card count, red once the limit is reached.
pub fn cards(count: u32, limit: u32, text: &str) -> String {
    if count >= limit {
        red_card(text)
    } else if count > 0 {
        gold(text)
    } else {
        muted(text)
    }
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    paint_stderr(text, RED_CARD)
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    paint_stderr(text, FLARE)
}

/// Secondary info on stderr.
pub fn hint(text: &str) -> String {
    paint_stderr(text, TOUCHLINE)
}
