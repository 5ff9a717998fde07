use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod carousel;
mod constants;
mod gallery;
mod gesture;
mod layout;
mod panel;
mod slide;
mod texture_loader;
mod timer;
mod toast;

use crate::constants::*;
use crate::panel::CarouselPanel;
use crate::slide::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::toast::{ToastKind, ToastStack};

/// Image carousel viewer: one auto-advancing carousel per album directory.
#[derive(Parser)]
#[command(name = "carousel", version, about)]
struct Args {
    /// Directory scanned for images; each subdirectory becomes its own album
    directory: PathBuf,

    /// Randomize slide order within each album
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Photo Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Discover albums ---
    let albums = gallery::discover_albums(&args.directory, args.shuffle)
        .with_context(|| format!("scanning {}", args.directory.display()))?;

    // --- Load slides ---
    let mut toasts = ToastStack::new();
    let mut panels: Vec<CarouselPanel> = Vec::new();
    for album in albums {
        let mut slides = Vec::new();
        for path in &album.image_paths {
            match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                Ok(texture) => slides.push(Slide::new(texture)),
                Err(e) => {
                    warn!(error = %e, "skipping image");
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    toasts.push(format!("Skipped {name}"), ToastKind::Error);
                }
            }
        }
        if slides.is_empty() {
            warn!(album = %album.label, "no loadable images, dropping album");
            continue;
        }
        info!(album = %album.label, slides = slides.len(), "album ready");
        panels.push(CarouselPanel::new(album.label, slides));
    }

    if panels.is_empty() {
        warn!(dir = %args.directory.display(), "no displayable images");
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        d.draw_text(
            &format!("No images found under {}", args.directory.display()),
            20,
            20,
            20,
            Color::RED,
        );
        drop(d);
        std::thread::sleep(Duration::from_secs(5));
        return Ok(());
    }

    if !toasts.is_empty() {
        warn!(skipped = toasts.len(), "some images failed to load");
    }

    let total_slides: usize = panels.iter().map(CarouselPanel::slide_count).sum();
    toasts.push(
        format!("Showing {} slides in {} albums", total_slides, panels.len()),
        ToastKind::Success,
    );

    // --- Main loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let regions = layout::stacked_rows(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            panels.len(),
        );
        for (panel, region) in panels.iter_mut().zip(&regions) {
            panel.set_region(*region);
            panel.handle_input(&rl);
            panel.tick(dt);
        }
        toasts.tick(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for panel in &panels {
            panel.draw(&mut d);
        }
        toasts.draw(&mut d);
    }

    Ok(())
}
