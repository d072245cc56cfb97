//! Token-Span-Annotator.
//!
//! Interaktiver Editor für Entity-Spans und gerichtete Relationen auf
//! vortokenisierten Texten (JSONL, ein Dokument pro Zeile).

use eframe::egui;
use token_span_annotator::app::use_cases::session;
use token_span_annotator::render::{self, PaintStyle};
use token_span_annotator::shared::SessionPaths;
use token_span_annotator::{ui, AppCommand, AppController, AppIntent, AppState, FontMetrics};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Token-Span-Annotator v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Token-Span-Annotator"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        let initial_file = std::env::args_os().nth(1).map(std::path::PathBuf::from);

        eframe::run_native(
            "Token-Span-Annotator",
            options,
            Box::new(|_cc| Ok(Box::new(AnnotatorApp::new(initial_file)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct AnnotatorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    session_saved: bool,
}

impl AnnotatorApp {
    fn new(initial_file: Option<std::path::PathBuf>) -> Self {
        // Sitzung laden: Einstellungen, Recent-Files, History
        let state = session::load_session(SessionPaths::default_beside_binary());

        let mut app = Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            session_saved: false,
        };

        let startup_file = initial_file.or_else(|| {
            app.state
                .recent_files
                .most_recent()
                .filter(|path| path.exists())
                .map(std::path::Path::to_path_buf)
        });
        if let Some(path) = startup_file {
            app.process_events(vec![AppIntent::FileSelected { path }]);
        }
        app
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        if self.state.should_exit || close_requested {
            self.persist_session_once();
            if self.state.should_exit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl AnnotatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &mut self.state));
        let current_path = self.state.documents.source_path.clone();
        events.extend(ui::handle_file_dialogs(
            &mut self.state.ui,
            current_path.as_deref(),
        ));
        events.extend(ui::show_label_chooser(
            ctx,
            &mut self.state.ui,
            self.state.gestures.pending_label(),
            &self.state.settings,
        ));
        ui::show_load_warnings(ctx, &mut self.state.ui);
        ui::show_command_log(ctx, &mut self.state.ui, &self.state.command_log);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            let viewport_size = [rect.width(), rect.height()];

            // Layout mit denselben Glyph-Maßen wie beim Zeichnen
            let glyph = ui.painter().layout_no_wrap(
                "M".to_owned(),
                egui::FontId::monospace(self.state.settings.font_size),
                egui::Color32::WHITE,
            );
            let metrics = FontMetrics {
                char_width: glyph.size().x,
                font_height: glyph.size().y,
            };
            if metrics != self.state.view.metrics {
                events.push(AppIntent::FontMetricsChanged { metrics });
            }

            events.extend(self.input.collect_viewport_events(
                ui,
                &response,
                viewport_size,
                ui::InputContext {
                    has_selection: self.state.selection.selected_entity.is_some(),
                    label_pending: self.state.gestures.pending_label().is_some(),
                    scroll_step: self.state.settings.scroll_step,
                },
            ));

            let scene = self.controller.build_render_scene(&self.state);
            let style = PaintStyle::from_visuals(ui.visuals(), self.state.settings.font_size);
            render::paint_scene(&ui.painter_at(rect), rect.min, &scene, &style);

            if !scene.has_document() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Keine Datei geladen. Datei → Öffnen",
                    egui::FontId::proportional(20.0),
                    ui.visuals().weak_text_color(),
                );
            }
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.set_status(format!("{:#}", e));
            }
        }
    }

    fn persist_session_once(&mut self) {
        if self.session_saved {
            return;
        }
        self.session_saved = true;
        if let Err(e) = self
            .controller
            .handle_command(&mut self.state, AppCommand::PersistSession)
        {
            log::error!("Sitzung konnte nicht gespeichert werden: {:#}", e);
        }
        if self.state.documents.is_dirty() {
            log::warn!("Beenden mit ungespeicherten Änderungen");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.gestures.pending_label().is_some()
        {
            ctx.request_repaint();
        }
    }
}
