// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use sdl2::render::WindowCanvas;
use sdl2::VideoSubsystem;

use crate::time::Time;

pub struct Options {
    pub title: String,
    pub window_size: (u32, u32),
    pub fullscreen: bool,
    pub fps: f64,
}

/// Per-frame state shared with every scene: the render canvas, the frame
/// clock and the running flag. Clearing the flag terminates the main loop.
pub struct Context {
    pub canvas: WindowCanvas,
    pub time: Time,
    pub running: bool,
}

impl Context {
    pub fn build(sdl_video: &VideoSubsystem, options: Options) -> Result<Context, String> {
        info!(target: "app", "Opening app window {}x{}", options.window_size.0, options.window_size.1);
        let mut builder = sdl_video.window(
            options.title.as_str(),
            options.window_size.0,
            options.window_size.1,
        );
        if options.fullscreen {
            builder.fullscreen();
        } else {
            builder.position_centered();
        }
        let window = builder.build().map_err(|err| format!("{}", err))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|err| format!("{}", err))?;
        Ok(Context {
            canvas,
            time: Time::new(Some(options.fps)),
            running: false,
        })
    }
}
