#[cfg(feature = "gui")]
use eframe::egui;

#[cfg(feature = "gui")]
use plink::{AudioEngine, Autoplay, AutoplayEvent, Board, MAX_COLUMNS, MIN_COLUMNS};

#[cfg(feature = "gui")]
fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_title("Plink - Piano Soundboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Plink",
        options,
        Box::new(|_cc| Ok(Box::new(PlinkApp::new()))),
    )
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("This binary requires the 'gui' feature to be enabled");
    std::process::exit(1);
}

// Five shades of blue; keys cycle through them, darker while pressed.
#[cfg(feature = "gui")]
const KEY_COLORS: [egui::Color32; 5] = [
    egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
    egui::Color32::from_rgb(0x60, 0xa5, 0xfa),
    egui::Color32::from_rgb(0x93, 0xc5, 0xfd),
    egui::Color32::from_rgb(0xbf, 0xdb, 0xfe),
    egui::Color32::from_rgb(0xdb, 0xea, 0xfe),
];

#[cfg(feature = "gui")]
const KEY_COLORS_ACTIVE: [egui::Color32; 5] = [
    egui::Color32::from_rgb(0x25, 0x63, 0xeb),
    egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
    egui::Color32::from_rgb(0x60, 0xa5, 0xfa),
    egui::Color32::from_rgb(0x93, 0xc5, 0xfd),
    egui::Color32::from_rgb(0xbf, 0xdb, 0xfe),
];

#[cfg(feature = "gui")]
struct PlinkApp {
    board: Board,
    audio: AudioEngine,
    autoplay: Autoplay,
    autoplay_enabled: bool,
}

#[cfg(feature = "gui")]
impl PlinkApp {
    fn new() -> Self {
        Self {
            board: Board::new(),
            audio: AudioEngine::new(),
            autoplay: Autoplay::new(),
            autoplay_enabled: false,
        }
    }

    fn press_cell(&mut self, index: usize) {
        let note = self.board.note_for_cell(index).name;
        self.board.press(index);
        self.audio.play_note(note);
    }

    fn handle_autoplay_events(&mut self) {
        for event in self.autoplay.poll_events() {
            match event {
                AutoplayEvent::CellTriggered(index) => {
                    if index < self.board.total_cells() {
                        self.press_cell(index);
                    }
                }
            }
        }
    }

    fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay_enabled = enabled;
        if enabled {
            // Eager build so the first tick plays without a delay
            self.audio.initialize();
            self.autoplay.start(self.board.shared_cell_count());
        } else {
            self.autoplay.stop();
        }
    }
}

#[cfg(feature = "gui")]
impl eframe::App for PlinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        self.handle_autoplay_events();
        self.board.clear_expired();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Plink - Piano Soundboard");
            ui.add_space(10.0);

            // Key grid
            let columns = self.board.columns();
            let rows = self.board.rows();
            let active = self.board.active_cell();
            let key_size = (ui.available_width() - 8.0 * columns as f32) / columns as f32;

            let mut pressed = None;
            for row in 0..rows {
                ui.horizontal(|ui| {
                    for col in 0..columns {
                        let index = row * columns + col;
                        let note = self.board.note_for_cell(index).name;
                        let is_active = active == Some(index);

                        let fill = if is_active {
                            KEY_COLORS_ACTIVE[index % KEY_COLORS_ACTIVE.len()]
                        } else {
                            KEY_COLORS[index % KEY_COLORS.len()]
                        };

                        let key = egui::Button::new(
                            egui::RichText::new(note).color(egui::Color32::from_rgb(20, 30, 60)),
                        )
                        .min_size(egui::vec2(key_size, key_size))
                        .fill(fill);

                        if ui.add(key).clicked() {
                            pressed = Some(index);
                        }
                    }
                });
            }

            if let Some(index) = pressed {
                self.press_cell(index);
            }

            ui.add_space(20.0);
            ui.separator();

            // Controls
            ui.horizontal(|ui| {
                ui.label("Grid size:");

                if ui
                    .add_enabled(columns > MIN_COLUMNS, egui::Button::new("−"))
                    .clicked()
                {
                    self.board.decrease_columns();
                }

                ui.label(format!("{}x{}", self.board.columns(), self.board.rows()));

                if ui
                    .add_enabled(columns < MAX_COLUMNS, egui::Button::new("+"))
                    .clicked()
                {
                    self.board.increase_columns();
                }

                ui.add_space(20.0);

                let mut enabled = self.autoplay_enabled;
                if ui.checkbox(&mut enabled, "Auto-play").changed() {
                    self.set_autoplay(enabled);
                }
            });

            ui.separator();
            ui.label("Tap a key to play its note; keys wrap around the C3-B5 catalog");
        });
    }
}
