// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

mod menu;

pub use self::menu::MenuScene;

use sdl2::event::Event;

use crate::framework::Context;

/// Scene-switch request returned from event handling and updates. Pushing
/// a scene makes it active; popping the last one ends the run.
pub enum Transition<'a> {
    None,
    #[allow(unused)]
    Push(Box<dyn Scene<'a> + 'a>),
    #[allow(unused)]
    Pop,
}

/// A self-contained screen of the application. Concrete scenes override
/// only the operations they need.
pub trait Scene<'a> {
    fn handle_event(
        &mut self,
        _ctx: &mut Context,
        _event: &Event,
    ) -> Result<Transition<'a>, String> {
        Ok(Transition::None)
    }

    fn update(&mut self, _ctx: &mut Context, _dt: f64) -> Result<Transition<'a>, String> {
        Ok(Transition::None)
    }

    fn draw(&mut self, _ctx: &mut Context) -> Result<(), String> {
        Ok(())
    }
}
