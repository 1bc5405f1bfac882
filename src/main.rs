// This file is part of stardrift.
// Copyright (c) 2025-2026 the stardrift project developers. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

#[macro_use]
extern crate log;

mod app;
mod config;
mod framework;
mod gfx;
mod scene;
mod time;
mod util;

use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use sdl2::image::InitFlag;

use crate::app::App;
use crate::config::Config;
use crate::framework::{Context, Options};
use crate::scene::MenuScene;
use crate::util::Logger;

static NAME: &str = "stardrift";
static VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    match run(env::args().collect()) {
        Ok(_) => process::exit(0),
        Err(err) => {
            println!("Error: {}", err);
            process::exit(1)
        }
    };
}

fn build_cli_options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optopt("", "res", "set asset root directory", "dir")
        // Ui
        .optflag("f", "fullscreen", "enable fullscreen")
        .optopt("", "width", "window width", "width")
        .optopt("", "height", "window height", "height")
        .optopt("", "fps", "target frame rate", "number")
        // Logging
        .optopt("", "loglevel", "set log level", "[error|warn|info|debug|trace]")
        .optmulti("", "log", "set log level for a target", "target=level")
        // Help
        .optflag("h", "help", "display this help")
        .optflag("V", "version", "display this version");
    opts
}

fn build_app_options(matches: &getopts::Matches) -> Result<Options, String> {
    let options = Options {
        title: NAME.to_string(),
        window_size: (
            parse_opt(matches, "width", 800)?,
            parse_opt(matches, "height", 800)?,
        ),
        fullscreen: matches.opt_present("fullscreen"),
        fps: parse_opt(matches, "fps", 60.0)?,
    };
    Ok(options)
}

fn build_config(matches: &getopts::Matches) -> Result<Config, String> {
    let res_dir = matches
        .opt_str("res")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(Config::new(&res_dir))
}

fn init_logging(matches: &getopts::Matches) -> Result<(), String> {
    let loglevel = matches.opt_str("loglevel").unwrap_or_else(|| "info".to_string());
    let mut target_levels = Vec::new();
    for target_level in matches.opt_strs("log") {
        if let Some(equals) = target_level.find('=') {
            let (target, level) = target_level.split_at(equals);
            target_levels.push((target.to_string(), level[1..].to_string()));
        } else {
            return Err(format!("invalid log target pair {}", target_level));
        }
    }
    let logger = Logger::build(&loglevel, &target_levels)?;
    Logger::enable(logger)?;
    Ok(())
}

fn parse_opt<T: FromStr>(matches: &getopts::Matches, name: &str, default: T) -> Result<T, String> {
    match matches.opt_str(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| format!("invalid {} {}", name, value)),
        None => Ok(default),
    }
}

fn print_help(opts: &getopts::Options) {
    println!("{} {}", NAME, VERSION);
    println!();
    println!("Usage:");
    print!("{}", opts.usage("Stardrift 2D game"));
}

fn print_version() {
    println!("{} {}", NAME, VERSION);
}

fn run(args: Vec<String>) -> Result<(), String> {
    let opts = build_cli_options();
    let matches = opts
        .parse(&args[1..])
        .map_err(|f| format!("Invalid options\n{}", f))?;
    if matches.opt_present("help") {
        print_help(&opts);
    } else if matches.opt_present("version") {
        print_version();
    } else {
        init_logging(&matches)?;
        info!("Starting {}", NAME);
        let config = build_config(&matches)?;
        let options = build_app_options(&matches)?;
        let sdl_context = sdl2::init()?;
        let sdl_video = sdl_context.video()?;
        let _image_context = sdl2::image::init(InitFlag::PNG)?;
        let ttf_context = sdl2::ttf::init().map_err(|err| format!("{}", err))?;
        let ctx = Context::build(&sdl_video, options)?;
        let menu = MenuScene::build(&ttf_context, &ctx, &config)?;
        let mut app = App::new(sdl_context, ctx, Box::new(menu));
        app.run()?;
    }
    Ok(())
}
