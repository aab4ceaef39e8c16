// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! menudrv entry point
//!
//! Headless menu shell: selects a driver, builds a demo menu, replays a
//! sequence of input actions and prints what the driver rendered.

use clap::Parser;
use menudrv::core::cbs::{ActionSlot, MenuAction};
use menudrv::core::config::MenuConfig;
use menudrv::core::driver::DriverRegistry;
use menudrv::core::list::{entry_types, EntryInfo};
use menudrv::frontend::{MenuContext, TextSurface};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "menudrv", version, about = "Headless menu driver shell")]
struct Args {
    /// Menu driver to select (overrides the config file and MENUDRV_DRIVER)
    #[arg(short, long)]
    driver: Option<String>,

    /// TOML menu configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the available menu drivers and exit
    #[arg(long)]
    list_drivers: bool,

    /// Print the callback bindings of the demo menu as JSON and exit
    #[arg(long)]
    dump_bindings: bool,

    /// Comma-separated input actions to replay
    #[arg(short, long, value_delimiter = ',', default_value = "down,down,info")]
    actions: Vec<MenuAction>,

    /// Frames to run after the actions
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Surface width in columns
    #[arg(long, default_value_t = 40)]
    columns: usize,

    /// Surface height in rows
    #[arg(long, default_value_t = 14)]
    rows: usize,
}

/// Bindings of one entry, for `--dump-bindings`
#[derive(Serialize)]
struct EntryBindings {
    path: String,
    label: String,
    entry_type: u32,
    bindings: BTreeMap<ActionSlot, &'static str>,
}

fn demo_entries() -> Vec<EntryInfo> {
    vec![
        EntryInfo::new("Load Content", "load_content", entry_types::DIRECTORY)
            .with_elements("", "Select a content file to load."),
        EntryInfo::new("Settings", "settings", entry_types::DIRECTORY)
            .with_elements("", "Configure the frontend."),
        EntryInfo::new("--------", "separator", entry_types::SEPARATOR),
        EntryInfo::new("Rewind", "rewind_enable", entry_types::SETTING)
            .with_elements("OFF", "Rewind gameplay with a hotkey."),
        EntryInfo::new("Show FPS", "fps_show", entry_types::SETTING)
            .with_elements("ON", "Show the frame rate on screen."),
        EntryInfo::new("Quit", "quit", entry_types::PLAIN),
    ]
}

fn load_config(args: &Args) -> MenuConfig {
    let mut config = match &args.config {
        Some(path) => MenuConfig::load(path).unwrap_or_else(|e| {
            log::info!("Using default menu config (failed to load: {})", e);
            MenuConfig::default()
        }),
        None => MenuConfig::default(),
    };

    config.apply_env();
    if let Some(driver) = &args.driver {
        config.driver = driver.clone();
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading RUST_LOG and MENUDRV_DRIVER
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    if args.list_drivers {
        let options = DriverRegistry::builtin().enumerate_options().unwrap_or_default();
        for ident in options.split('|') {
            println!("{}", ident);
        }
        return Ok(());
    }

    let config = load_config(&args);
    log::info!("Requested menu driver: {}", config.driver);

    let mut ctx = MenuContext::new();
    if let Err(e) = ctx.init_menu(&config) {
        log::error!("Failed to initialize menu: {}", e);
        std::process::exit(1);
    }

    if let Some(menu) = ctx.menu_mut() {
        menu.append_entries(demo_entries())?;
    }

    if args.dump_bindings {
        let entries: Vec<EntryBindings> = ctx
            .menu()
            .and_then(|menu| menu.list())
            .map(|stack| {
                stack
                    .current()
                    .entries()
                    .iter()
                    .map(|entry| EntryBindings {
                        path: entry.info().path.clone(),
                        label: entry.info().label.clone(),
                        entry_type: entry.info().entry_type,
                        bindings: entry.callbacks().map(|cbs| cbs.idents()).unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        ctx.free();
        return Ok(());
    }

    let surface = Rc::new(RefCell::new(TextSurface::new(args.columns, args.rows)));
    ctx.attach_video(Box::new(Rc::clone(&surface)));

    for action in &args.actions {
        let ret = ctx.handle_action(*action);
        if ret < 0 {
            log::warn!("Action {:?} failed ({})", action, ret);
        }
        ctx.frame();
        ctx.render();
    }

    for _ in 0..args.frames {
        ctx.frame();
        ctx.render();
    }

    print!("{}", surface.borrow());

    ctx.free();
    Ok(())
}
