// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

/// Renders a line of text into a texture ready to blit.
pub fn render_label(
    font: &Font,
    creator: &TextureCreator<WindowContext>,
    text: &str,
    color: Color,
) -> Result<Texture, String> {
    let surface = font
        .render(text)
        .blended(color)
        .map_err(|err| format!("{}", err))?;
    creator
        .create_texture_from_surface(&surface)
        .map_err(|err| format!("{}", err))
}
