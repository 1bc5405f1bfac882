// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use sdl2::event::Event;
use sdl2::pixels::Color;
use sdl2::{EventPump, Sdl};

use crate::framework::Context;
use crate::scene::{Scene, Transition};

pub struct App<'a> {
    // Dependencies
    sdl_context: Sdl,
    // Components
    ctx: Context,
    // Runtime State
    scenes: Vec<Box<dyn Scene<'a> + 'a>>,
}

impl<'a> App<'a> {
    pub fn new(sdl_context: Sdl, ctx: Context, scene: Box<dyn Scene<'a> + 'a>) -> App<'a> {
        App {
            sdl_context,
            ctx,
            scenes: vec![scene],
        }
    }

    pub fn run(&mut self) -> Result<(), String> {
        info!(target: "app", "Running main loop");
        let mut events = self.sdl_context.event_pump()?;
        self.ctx.running = true;
        while self.ctx.running && !self.scenes.is_empty() {
            self.handle_events(&mut events)?;
            self.ctx.canvas.set_draw_color(Color::RGB(0, 0, 0));
            self.ctx.canvas.clear();
            if let Some(scene) = self.scenes.last_mut() {
                scene.draw(&mut self.ctx)?;
            }
            let dt = self.ctx.time.tick();
            let transition = match self.scenes.last_mut() {
                Some(scene) => scene.update(&mut self.ctx, dt)?,
                None => Transition::None,
            };
            self.apply_transition(transition);
            self.ctx.canvas.present();
        }
        info!(target: "app", "Main loop stopped");
        Ok(())
    }

    // -- Event Handling

    fn handle_events(&mut self, events: &mut EventPump) -> Result<(), String> {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    info!(target: "app", "Window close requested");
                    self.ctx.running = false;
                }
                _ => {
                    let transition = match self.scenes.last_mut() {
                        Some(scene) => scene.handle_event(&mut self.ctx, &event)?,
                        None => Transition::None,
                    };
                    self.apply_transition(transition);
                }
            }
        }
        Ok(())
    }

    fn apply_transition(&mut self, transition: Transition<'a>) {
        match transition {
            Transition::None => (),
            Transition::Push(scene) => self.scenes.push(scene),
            Transition::Pop => {
                self.scenes.pop();
            }
        }
    }
}
