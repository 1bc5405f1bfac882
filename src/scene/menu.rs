// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;

use crate::config::Config;
use crate::framework::Context;
use crate::gfx::{self, Pulse};
use crate::scene::{Scene, Transition};

const BACKGROUND_FRAMES: usize = 12;
const SCROLL_SPEED: f64 = 5.0;
const FONT_SIZE: u16 = 48;
const LABEL_SPACING: i32 = 24;
const NEUTRAL: (u8, u8, u8) = (200, 200, 200);
const PULSE_SEED: (u8, u8, u8) = (50, 120, 200);
const PULSE_STEP: i16 = 2;

static OPTIONS: [&str; 2] = ["START", "QUIT GAME"];

struct MenuOption {
    text: &'static str,
    label: Texture,
    rect: Rect,
}

pub struct MenuScene<'ttf> {
    // Dependencies
    font: Font<'ttf, 'static>,
    creator: TextureCreator<WindowContext>,
    // Components
    backgrounds: Vec<Texture>,
    options: Vec<MenuOption>,
    // Runtime State
    scroll: Scroll,
    cursor: usize,
    highlight: Pulse,
}

impl<'ttf> MenuScene<'ttf> {
    pub fn build(
        ttf: &'ttf Sdl2TtfContext,
        ctx: &Context,
        config: &Config,
    ) -> Result<MenuScene<'ttf>, String> {
        let creator = ctx.canvas.texture_creator();
        info!(target: "menu", "Loading {} background frames", BACKGROUND_FRAMES);
        let mut backgrounds = Vec::with_capacity(BACKGROUND_FRAMES);
        for frame in 1..=BACKGROUND_FRAMES {
            let path = config.background_path(frame);
            let texture = creator
                .load_texture(&path)
                .map_err(|err| format!("failed to load background {}: {}", path.display(), err))?;
            backgrounds.push(texture);
        }
        let font_path = config.font_path();
        let font = ttf
            .load_font(&font_path, FONT_SIZE)
            .map_err(|err| format!("failed to load font {}: {}", font_path.display(), err))?;
        let (window_width, window_height) = ctx.canvas.window().size();
        let mut options = Vec::with_capacity(OPTIONS.len());
        let mut label_y = window_height as i32 / 2;
        for &text in OPTIONS.iter() {
            let label = gfx::render_label(&font, &creator, text, Color::from(NEUTRAL))?;
            let query = label.query();
            let rect = Rect::new(
                (window_width as i32 - query.width as i32) / 2,
                label_y,
                query.width,
                query.height,
            );
            label_y += query.height as i32 + LABEL_SPACING;
            options.push(MenuOption { text, label, rect });
        }
        Ok(MenuScene {
            font,
            creator,
            backgrounds,
            options,
            scroll: Scroll::new(BACKGROUND_FRAMES, SCROLL_SPEED),
            cursor: 0,
            highlight: Pulse::new(PULSE_SEED, PULSE_STEP),
        })
    }

    fn render_label(&mut self, index: usize, color: Color) -> Result<(), String> {
        let option = &mut self.options[index];
        option.label = gfx::render_label(&self.font, &self.creator, option.text, color)?;
        Ok(())
    }
}

impl<'ttf> Scene<'ttf> for MenuScene<'ttf> {
    fn handle_event(
        &mut self,
        ctx: &mut Context,
        event: &Event,
    ) -> Result<Transition<'ttf>, String> {
        match *event {
            Event::KeyDown {
                keycode: Some(Keycode::Up),
                repeat: false,
                ..
            } => {
                self.render_label(self.cursor, Color::from(NEUTRAL))?;
                self.cursor = cursor_next(self.cursor, self.options.len());
            }
            Event::KeyDown {
                keycode: Some(Keycode::Down),
                repeat: false,
                ..
            } => {
                self.render_label(self.cursor, Color::from(NEUTRAL))?;
                self.cursor = cursor_prev(self.cursor, self.options.len());
            }
            Event::KeyDown {
                keycode: Some(Keycode::Space),
                repeat: false,
                ..
            } => match self.cursor {
                0 => {
                    // TODO: push the gameplay scene here once one exists
                    info!(target: "menu", "Start selected");
                }
                _ => {
                    info!(target: "menu", "Quit selected");
                    ctx.running = false;
                }
            },
            _ => (),
        }
        Ok(Transition::None)
    }

    fn update(&mut self, _ctx: &mut Context, dt: f64) -> Result<Transition<'ttf>, String> {
        self.scroll = self.scroll.advance(dt);
        self.highlight = self.highlight.advance();
        self.render_label(self.cursor, Color::from(self.highlight.rgb()))?;
        Ok(Transition::None)
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<(), String> {
        ctx.canvas
            .copy(&self.backgrounds[self.scroll.frame()], None, None)?;
        for option in &self.options {
            ctx.canvas.copy(&option.label, None, Some(option.rect))?;
        }
        Ok(())
    }
}

/// Fractional slideshow position over a fixed number of frames. Resets to
/// the first frame once the accumulator reaches the sequence length, so the
/// truncated index is always a valid frame.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Scroll {
    index: f64,
    speed: f64,
    frames: usize,
}

impl Scroll {
    fn new(frames: usize, speed: f64) -> Scroll {
        Scroll {
            index: 0.0,
            speed,
            frames,
        }
    }

    fn advance(self, dt: f64) -> Scroll {
        let mut index = self.index + dt * self.speed;
        if index >= self.frames as f64 {
            index = 0.0;
        }
        Scroll { index, ..self }
    }

    fn frame(&self) -> usize {
        self.index as usize
    }
}

fn cursor_next(cursor: usize, count: usize) -> usize {
    (cursor + 1) % count
}

fn cursor_prev(cursor: usize, count: usize) -> usize {
    (cursor + count - 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_forward() {
        assert_eq!(1, cursor_next(0, 2));
        assert_eq!(0, cursor_next(1, 2));
    }

    #[test]
    fn cursor_wraps_backward() {
        assert_eq!(1, cursor_prev(0, 2));
        assert_eq!(0, cursor_prev(1, 2));
    }

    #[test]
    fn cursor_alternates_on_repeated_presses() {
        let mut cursor = 0;
        for _ in 0..5 {
            let next = cursor_next(cursor, 2);
            assert!(next < 2);
            assert_ne!(cursor, next);
            cursor = next;
        }
        let mut cursor = 0;
        for _ in 0..5 {
            let prev = cursor_prev(cursor, 2);
            assert!(prev < 2);
            assert_ne!(cursor, prev);
            cursor = prev;
        }
    }

    #[test]
    fn scroll_accumulates_fractionally() {
        let scroll = Scroll::new(12, 5.0).advance(0.25);
        assert_eq!(1.25, scroll.index);
        assert_eq!(1, scroll.frame());
    }

    #[test]
    fn scroll_wraps_at_sequence_length() {
        let mut scroll = Scroll::new(12, 5.0);
        for _ in 0..9 {
            scroll = scroll.advance(0.25);
        }
        assert_eq!(11.25, scroll.index);
        scroll = scroll.advance(0.25);
        assert_eq!(0.0, scroll.index);
    }

    #[test]
    fn scroll_full_cycle_returns_to_start() {
        let mut scroll = Scroll::new(12, 4.0);
        for _ in 0..12 {
            scroll = scroll.advance(0.25);
        }
        assert_eq!(0.0, scroll.index);
    }

    #[test]
    fn scroll_frame_always_in_range() {
        let mut scroll = Scroll::new(12, 5.0);
        for _ in 0..1000 {
            scroll = scroll.advance(0.13);
            assert!(scroll.frame() < 12);
        }
    }
}
