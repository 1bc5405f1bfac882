// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

use std::path::{Path, PathBuf};

/// Asset locations, resolved once at startup from the `--res` root and
/// passed explicitly to whatever loads them.
pub struct Config {
    pub images_dir: PathBuf,
    pub fonts_dir: PathBuf,
}

impl Config {
    pub fn new(res_dir: &Path) -> Config {
        Config {
            images_dir: res_dir.join("images"),
            fonts_dir: res_dir.join("fonts"),
        }
    }

    pub fn background_path(&self, frame: usize) -> PathBuf {
        self.images_dir
            .join("background")
            .join(format!("background_1_{}.png", frame))
    }

    pub fn font_path(&self) -> PathBuf {
        self.fonts_dir.join("menu.ttf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_path_uses_frame_number() {
        let config = Config::new(Path::new("res"));
        assert_eq!(
            PathBuf::from("res/images/background/background_1_1.png"),
            config.background_path(1)
        );
        assert_eq!(
            PathBuf::from("res/images/background/background_1_12.png"),
            config.background_path(12)
        );
    }

    #[test]
    fn font_path_under_fonts_dir() {
        let config = Config::new(Path::new("."));
        assert_eq!(PathBuf::from("./fonts/menu.ttf"), config.font_path());
    }
}
