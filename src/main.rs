use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use eframe::egui::{self, Vec2};
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use vitalscope::egui_scope;
use vitalscope::{PeripheralInfo, PeripheralKind, ScopeConfig, ScopeStyle, ScopeView};

const SAMPLE_PERIOD: Duration = Duration::from_millis(20);

enum EngineMessage {
    Sample(i32),
    Log(String),
}

enum EngineCommand {
    Start,
    Stop,
}

// Background engine simulating a streaming peripheral. Samples are marshalled
// to the UI thread over the channel; only that thread touches the scope.
fn spawn_engine(tx: Sender<EngineMessage>, rx_cmd: Receiver<EngineCommand>) {
    thread::spawn(move || {
        let mut rng = StdRng::from_entropy();
        let mut streaming = false;
        let mut phase: f32 = 0.0;
        tx.send(EngineMessage::Log("simulated oximeter ready".into()))
            .ok();
        loop {
            while let Ok(cmd) = rx_cmd.try_recv() {
                match cmd {
                    EngineCommand::Start => {
                        streaming = true;
                        tx.send(EngineMessage::Log("stream started".into())).ok();
                    }
                    EngineCommand::Stop => {
                        streaming = false;
                        tx.send(EngineMessage::Log("stream stopped".into())).ok();
                    }
                }
            }
            if streaming {
                phase += 0.12;
                // Pulse-ish trace: slow baseline drift, a sharp beat, noise.
                let baseline = (phase * 0.25).sin() * 40.0;
                let beat_t = phase % 6.0;
                let beat = if beat_t < 0.6 {
                    320.0 * (1.0 - beat_t / 0.6)
                } else {
                    0.0
                };
                let noise = rng.gen_range(-12.0..12.0);
                let value = (512.0 + baseline + beat + noise) as i32;
                if tx.send(EngineMessage::Sample(value)).is_err() {
                    return;
                }
                thread::sleep(SAMPLE_PERIOD);
            } else {
                thread::sleep(Duration::from_millis(50));
            }
        }
    });
}

struct VitalscopeApp {
    scope: ScopeView,
    peripheral: PeripheralInfo,
    streaming: bool,
    log_messages: Vec<String>,
    rx: Receiver<EngineMessage>,
    tx_cmd: Sender<EngineCommand>,
}

impl VitalscopeApp {
    fn new(cc: &eframe::CreationContext<'_>, style: Option<ScopeStyle>) -> Self {
        let (tx, rx) = channel();
        let (tx_cmd, rx_cmd) = channel();
        spawn_engine(tx, rx_cmd);

        let mut config = ScopeConfig::default();
        if let Some(style) = style {
            config.style = style;
        }
        let scope = ScopeView::new(config);
        egui_scope::connect_repaint(&cc.egui_ctx, &scope);

        let mut peripheral = PeripheralInfo::new("SpO2 ring (sim)", PeripheralKind::Oximeter);
        peripheral.serial = Some("SIM-0001".into());
        peripheral.firmware = Some("1.4.2".into());
        peripheral.battery_percent = Some(87);
        peripheral.connected = true;

        Self {
            scope,
            peripheral,
            streaming: false,
            log_messages: vec!["vitalscope demo ready".to_owned()],
            rx,
            tx_cmd,
        }
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {msg}"));
        if self.log_messages.len() > 8 {
            self.log_messages.remove(0);
        }
    }
}

impl eframe::App for VitalscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending_logs = Vec::new();
        let mut drained = 0;
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                EngineMessage::Sample(v) => self.scope.add_value(v),
                EngineMessage::Log(s) => pending_logs.push(s),
            }
            drained += 1;
            if drained > 256 {
                break; // keep one frame bounded when the UI falls behind
            }
        }
        for msg in pending_logs {
            self.log(&msg);
        }

        egui::SidePanel::left("controls")
            .min_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading("vitalscope demo");
                ui.label("Live sensor trace");
                ui.separator();

                let stream_label = if self.streaming {
                    "STOP STREAM"
                } else {
                    "START STREAM"
                };
                if ui.button(stream_label).clicked() {
                    let cmd = if self.streaming {
                        EngineCommand::Stop
                    } else {
                        EngineCommand::Start
                    };
                    self.tx_cmd.send(cmd).ok();
                    self.streaming = !self.streaming;
                }
                if ui.button("CLEAR PLOT").clicked() {
                    self.scope.clear();
                }

                ui.add_space(10.0);
                ui.label("COLORS");
                let mut axis = egui_scope::color32(self.scope.style().axis_color);
                if ui.color_edit_button_srgba(&mut axis).changed() {
                    self.scope.set_axis_color(egui_scope::rgba(axis));
                }
                let mut plot = egui_scope::color32(self.scope.style().plot_color);
                if ui.color_edit_button_srgba(&mut plot).changed() {
                    self.scope.set_plot_color(egui_scope::rgba(plot));
                }

                ui.add_space(10.0);
                ui.separator();
                ui.label("PERIPHERAL");
                ui.monospace(format!(
                    "{} ({})",
                    self.peripheral.name,
                    self.peripheral.kind.label()
                ));
                if let Some(serial) = &self.peripheral.serial {
                    ui.monospace(format!("serial   {serial}"));
                }
                if let Some(firmware) = &self.peripheral.firmware {
                    ui.monospace(format!("firmware {firmware}"));
                }
                if let Some(battery) = self.peripheral.battery_percent {
                    ui.monospace(format!("battery  {battery}%"));
                }
                ui.monospace(if self.peripheral.connected {
                    "connected"
                } else {
                    "disconnected"
                });
                for label in self.peripheral.sub_device_labels() {
                    ui.monospace(format!("sub: {label}"));
                }

                ui.add_space(10.0);
                egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                    for msg in &self.log_messages {
                        ui.monospace(msg);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size: Vec2 = ui.available_size();
            egui_scope::scope_ui(ui, &self.scope, size);
        });
    }
}

fn load_style(path: &str) -> Option<ScopeStyle> {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(style) => {
            info!("loaded style overrides from {path}");
            Some(style)
        }
        Err(err) => {
            warn!("ignoring style file {path}: {err}");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let style = std::env::args().nth(1).and_then(|path| load_style(&path));

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 640.0])
        .with_title("vitalscope demo");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "vitalscope",
        options,
        Box::new(move |cc| Box::new(VitalscopeApp::new(cc, style))),
    )
}
