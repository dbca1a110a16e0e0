//! Entry point for the egui-based NameVox UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use eframe::egui;

use namevox::audio::{AudioPlayer, PlaybackSink};
use namevox::catalog::{self, NameIndex};
use namevox::config::{self, AppConfig};
use namevox::controller::SelectionController;
use namevox::egui_app::NameVoxApp;
use namevox::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default config: {err}");
        AppConfig::default()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([520.0, 640.0])
        .with_min_inner_size([360.0, 420.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "NameVox",
        native_options,
        Box::new(move |_cc| match build_controller(&config) {
            Ok(controller) => Ok(Box::new(NameVoxApp::new(controller))),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

/// Load the catalog and wire the audio player into a controller.
fn build_controller(config: &AppConfig) -> Result<SelectionController, String> {
    let dataset = match config.dataset_path.as_deref() {
        Some(path) => catalog::load_from_path(path),
        None => catalog::load_embedded(),
    }
    .map_err(|err| format!("Failed to load catalog: {err}"))?;
    let index = NameIndex::build(&dataset);
    tracing::info!(
        "Catalog ready: {} names across {} audio entries",
        index.sorted_written().len(),
        index.sorted_phonetics().len()
    );

    let audio_root = config
        .audio_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let player: Option<Rc<RefCell<dyn PlaybackSink>>> = match AudioPlayer::new(audio_root) {
        Ok(mut player) => {
            player.set_volume(config.volume);
            Some(Rc::new(RefCell::new(player)))
        }
        Err(err) => {
            tracing::warn!("Audio disabled: {err}");
            None
        }
    };

    Ok(SelectionController::new(
        index,
        player,
        config.audio_ext.clone(),
    ))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
