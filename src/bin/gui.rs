// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use resdesk::config::consts::{WINDOW_H, WINDOW_W};
use resdesk::gui;

/// 64×64 icon drawn in code: a rounded blue tile with three table rows.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let tile = Rgba([0x2B, 0x5F, 0x9E, 0xFF]);
    let row = Rgba([0xF2, 0xF5, 0xFA, 0xFF]);
    let clear = Rgba([0, 0, 0, 0]);

    let img = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (dx, dy) = (x.min(SIZE - 1 - x), y.min(SIZE - 1 - y));
        // cut the corners
        if dx < 6 && dy < 6 && (6 - dx) * (6 - dx) + (6 - dy) * (6 - dy) > 36 {
            return clear;
        }
        let in_row = (12..52).contains(&x) && [14u32, 28, 42].iter().any(|&top| (top..top + 8).contains(&y));
        if in_row { row } else { tile }
    });

    let (width, height) = img.dimensions();
    IconData { rgba: img.into_raw(), width, height }
}

fn main() {
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
