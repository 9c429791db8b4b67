#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 입력이 바뀔 때마다 결과를 다시 계산한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::io;
use std::{env, fs, path::Path};
use tracing_subscriber::EnvFilter;

use battery_required::{
    config, i18n,
    trip::{
        estimate_single_stop, simulate_trip, ChargeEstimate, MultiStopInput, ProjectionMode,
        SingleStopInput, TripLeg,
    },
    vehicle_db::{Vehicle, VehicleDb},
};

fn main() -> Result<(), eframe::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Battery Required",
        native,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg.clone()))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["battery_required.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 빈 문자열/숫자 아님은 None으로 취급하는 입력 필드 파서.
fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TripMode {
    SingleStop,
    MultiStop,
}

/// 다구간 입력 폼의 한 줄. 거리는 비어 있을 수 있어서 문자열로 든다.
struct LegInput {
    label: String,
    distance: String,
}

impl LegInput {
    fn numbered(index: usize) -> Self {
        Self {
            label: format!("Leg {}", index + 1),
            distance: String::new(),
        }
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    db: VehicleDb,
    selected_vehicle_id: String,
    // 차량 추가
    new_vehicle_name: String,
    new_vehicle_capacity: String,
    vehicle_add_status: Option<String>,
    // 트립 입력
    trip_mode: TripMode,
    efficiency_input: String,
    distance_input: String,
    buffer_percent: f64,
    starting_battery_percent: f64,
    legs: Vec<LegInput>,
    skip_analysis: bool,
    // 설정
    window_alpha: f32,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let resolved = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
        let db = VehicleDb::load_or_default(&config.vehicle_store_path);
        let selected_vehicle_id = db.all()[0].id.clone();
        let window_alpha = config.window_alpha.clamp(0.3, 1.0);
        let buffer = config.default_buffer_percent;
        let starting = config.default_starting_battery_percent;
        Self {
            lang_input: config.language.clone(),
            lang_save_status: None,
            tr,
            db,
            selected_vehicle_id,
            new_vehicle_name: String::new(),
            new_vehicle_capacity: String::new(),
            vehicle_add_status: None,
            trip_mode: TripMode::SingleStop,
            efficiency_input: String::new(),
            distance_input: String::new(),
            buffer_percent: buffer,
            starting_battery_percent: starting,
            legs: vec![LegInput::numbered(0), LegInput::numbered(1)],
            skip_analysis: false,
            window_alpha,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            config,
        }
    }

    /// 선택된 차량. 목록에서 사라졌으면 내장 차량으로 되돌린다.
    fn selected_vehicle(&self) -> Vehicle {
        self.db
            .find(&self.selected_vehicle_id)
            .unwrap_or_else(|| self.db.all()[0].clone())
    }

    fn parsed_legs(&self) -> Vec<TripLeg> {
        self.legs
            .iter()
            .filter_map(|leg| {
                parse_field(&leg.distance)
                    .map(|distance| TripLeg::new(leg.label.clone(), distance))
            })
            .collect()
    }

    fn ui_vehicle_section(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.vehicle.heading", "Vehicle"));
            let selected = self.selected_vehicle();
            egui::ComboBox::from_id_source("vehicle_choice")
                .selected_text(format!("{} ({:.0} kWh)", selected.name, selected.capacity_kwh))
                .show_ui(ui, |ui| {
                    for vehicle in self.db.all() {
                        ui.selectable_value(
                            &mut self.selected_vehicle_id,
                            vehicle.id.clone(),
                            format!("{} ({:.0} kWh)", vehicle.name, vehicle.capacity_kwh),
                        );
                    }
                });
            ui.separator();
            ui.label(txt("gui.vehicle.add_heading", "Add custom vehicle"));
            egui::Grid::new("vehicle_add_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.vehicle.name", "Name"));
                    ui.text_edit_singleline(&mut self.new_vehicle_name);
                    ui.end_row();
                    ui.label(txt("gui.vehicle.capacity", "Capacity [kWh]"));
                    ui.text_edit_singleline(&mut self.new_vehicle_capacity);
                    ui.end_row();
                });
            if ui.button(txt("gui.vehicle.add_button", "Add vehicle")).clicked() {
                let capacity = parse_field(&self.new_vehicle_capacity).unwrap_or(0.0);
                match self.db.add_custom(&self.new_vehicle_name, capacity) {
                    Some(vehicle) => {
                        self.selected_vehicle_id = vehicle.id.clone();
                        self.new_vehicle_name.clear();
                        self.new_vehicle_capacity.clear();
                        self.vehicle_add_status = match self.db.save() {
                            Ok(()) => None,
                            Err(e) => Some(format!("Save error: {e}")),
                        };
                    }
                    None => {
                        self.vehicle_add_status = Some(txt(
                            "gui.vehicle.add_rejected",
                            "Not added: empty name or invalid capacity.",
                        ));
                    }
                }
            }
            if let Some(msg) = &self.vehicle_add_status {
                ui.small(msg.as_str());
            }
        });
    }

    fn ui_trip_section(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.trip.heading", "Trip"));
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.trip_mode,
                    TripMode::SingleStop,
                    txt("gui.trip.mode_single", "Single destination"),
                );
                ui.selectable_value(
                    &mut self.trip_mode,
                    TripMode::MultiStop,
                    txt("gui.trip.mode_multi", "Multi-stop"),
                );
            });
            egui::Grid::new("trip_input_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.trip.efficiency", "Current efficiency (mi/kWh)"));
                    ui.text_edit_singleline(&mut self.efficiency_input);
                    ui.end_row();
                    if self.trip_mode == TripMode::SingleStop {
                        ui.label(txt("gui.trip.distance", "Distance to destination (miles)"));
                        ui.text_edit_singleline(&mut self.distance_input);
                        ui.end_row();
                    }
                    if self.config.projection == ProjectionMode::Buffered {
                        ui.label(txt("gui.trip.buffer", "Safety buffer"));
                        ui.add(
                            egui::Slider::new(&mut self.buffer_percent, 0.0..=20.0)
                                .suffix(" %")
                                .integer(),
                        );
                        ui.end_row();
                    }
                    if self.trip_mode == TripMode::MultiStop {
                        ui.label(txt("gui.trip.starting_battery", "Starting battery"));
                        ui.add(
                            egui::Slider::new(&mut self.starting_battery_percent, 0.0..=100.0)
                                .suffix(" %"),
                        );
                        ui.end_row();
                    }
                });
            if self.trip_mode == TripMode::MultiStop {
                self.ui_leg_rows(ui);
                ui.checkbox(
                    &mut self.skip_analysis,
                    txt("gui.trip.skip_analysis", "Analyze skipping charging stops"),
                );
            }
        });
    }

    fn ui_leg_rows(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        let mut remove_index: Option<usize> = None;
        egui::Grid::new("leg_grid")
            .num_columns(3)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(txt("gui.trip.leg_label", "Label"));
                ui.label(txt("gui.trip.leg_distance", "Distance (mi)"));
                ui.label("");
                ui.end_row();
                for (index, leg) in self.legs.iter_mut().enumerate() {
                    ui.text_edit_singleline(&mut leg.label);
                    ui.text_edit_singleline(&mut leg.distance);
                    if ui.button("x").clicked() {
                        remove_index = Some(index);
                    }
                    ui.end_row();
                }
            });
        if let Some(index) = remove_index {
            if self.legs.len() > 1 {
                self.legs.remove(index);
            }
        }
        if ui.button(txt("gui.trip.add_leg", "Add leg")).clicked() {
            self.legs.push(LegInput::numbered(self.legs.len()));
        }
    }

    fn ui_results_section(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.results.heading", "Results"));
            match self.trip_mode {
                TripMode::SingleStop => self.ui_single_stop_results(ui),
                TripMode::MultiStop => self.ui_multi_stop_results(ui),
            }
        });
    }

    fn ui_single_stop_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        let vehicle = self.selected_vehicle();
        let input = SingleStopInput {
            capacity_kwh: vehicle.capacity_kwh,
            efficiency_mi_per_kwh: parse_field(&self.efficiency_input).unwrap_or(0.0),
            distance_miles: parse_field(&self.distance_input).unwrap_or(0.0),
            buffer_percent: self.buffer_percent,
            projection: self.config.projection,
        };
        let Some(result) = estimate_single_stop(&input) else {
            ui.label(txt(
                "gui.results.none",
                "Enter efficiency and distance to see results.",
            ));
            return;
        };
        match (&result.worst, &result.best) {
            (Some(worst), Some(best)) => {
                ui.columns(3, |columns| {
                    estimate_card(
                        &mut columns[0],
                        &txt("gui.results.worst", "Worst (-10%)"),
                        worst,
                        &txt("gui.results.need", "Need"),
                        &txt("gui.results.charge", "Charge"),
                    );
                    estimate_card(
                        &mut columns[1],
                        &txt("gui.results.current", "Current"),
                        &result.main,
                        &txt("gui.results.need", "Need"),
                        &txt("gui.results.charge", "Charge"),
                    );
                    estimate_card(
                        &mut columns[2],
                        &txt("gui.results.best", "Best (+10%)"),
                        best,
                        &txt("gui.results.need", "Need"),
                        &txt("gui.results.charge", "Charge"),
                    );
                });
            }
            _ => {
                ui.columns(2, |columns| {
                    estimate_card(
                        &mut columns[0],
                        &txt("gui.results.current", "Current"),
                        &result.main,
                        &txt("gui.results.need", "Need"),
                        &txt("gui.results.charge", "Charge"),
                    );
                    if let Some(conservative) = &result.conservative {
                        estimate_card(
                            &mut columns[1],
                            &txt("gui.results.conservative", "Conservative (-20%)"),
                            conservative,
                            &txt("gui.results.need", "Need"),
                            &txt("gui.results.charge", "Charge"),
                        );
                    }
                });
            }
        }
    }

    fn ui_multi_stop_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };
        let vehicle = self.selected_vehicle();
        let input = MultiStopInput {
            capacity_kwh: vehicle.capacity_kwh,
            efficiency_mi_per_kwh: parse_field(&self.efficiency_input).unwrap_or(0.0),
            buffer_percent: self.buffer_percent,
            starting_battery_percent: self.starting_battery_percent,
            legs: self.parsed_legs(),
            projection: self.config.projection,
            skip_analysis: self.skip_analysis,
        };
        let Some(result) = simulate_trip(&input) else {
            ui.label(txt(
                "gui.results.none",
                "Enter efficiency and distance to see results.",
            ));
            return;
        };
        egui::Grid::new("leg_result_grid")
            .num_columns(5)
            .spacing([10.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for leg in &result.legs {
                    ui.label(&leg.label);
                    ui.label(format!("{:.1} mi", leg.distance_miles));
                    ui.label(format!(
                        "{} {:.1}%",
                        txt("gui.results.need", "Need"),
                        leg.percentage_needed
                    ));
                    match leg.battery_after_percent {
                        Some(after) => ui.label(format!(
                            "{} {:.1}%",
                            txt("gui.results.battery_after", "Battery after"),
                            after
                        )),
                        None => ui.label(""),
                    };
                    match (leg.charge_target_percent, leg.conservative_percentage_needed) {
                        (Some(target), _) => ui.label(format!(
                            "{} {:.1}%",
                            txt("gui.results.charge_target", "Charge to"),
                            target
                        )),
                        (None, Some(conservative)) => ui.label(format!(
                            "{} {:.1}%",
                            txt("gui.results.conservative", "Conservative (-20%)"),
                            conservative
                        )),
                        (None, None) => ui.label(""),
                    };
                    ui.end_row();
                }
            });
        ui.separator();
        let summary = &result.summary;
        let mut total_line = format!(
            "{} {:.1} mi / {:.1} kWh / {:.1}%",
            txt("gui.results.trip_total", "Trip total"),
            summary.total_distance_miles,
            summary.total_energy_kwh,
            summary.total_percentage_needed
        );
        if let Some(conservative) = summary.total_conservative_percentage_needed {
            total_line.push_str(&format!(
                " ({} {:.1}%)",
                txt("gui.results.conservative", "Conservative (-20%)"),
                conservative
            ));
        }
        ui.label(total_line);
        if let Some(arrival) = summary.arrival_battery_percent {
            ui.label(format!(
                "{} {:.1}%",
                txt("gui.results.arrival", "Battery on final arrival"),
                arrival
            ));
        }
        if let Some(options) = &result.skip_options {
            ui.separator();
            ui.label(txt("gui.results.skip_heading", "Skip-a-stop analysis"));
            for option in options {
                let verdict = if option.is_doable {
                    txt("gui.results.skip_doable", "doable")
                } else {
                    txt("gui.results.skip_not_doable", "not doable")
                };
                ui.label(format!(
                    "{}: {:.1} mi, needs {:.2} mi/kWh, saves {:.1}% => {}",
                    option.skipped_leg_label,
                    option.combined_distance_miles,
                    option.required_efficiency_mi_per_kwh,
                    option.battery_savings_percent,
                    verdict
                ));
            }
        }
    }
}

fn estimate_card(
    ui: &mut egui::Ui,
    heading: &str,
    est: &ChargeEstimate,
    need_label: &str,
    charge_label: &str,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.strong(heading);
            ui.label(format!("{:.2} mi/kWh", est.efficiency_mi_per_kwh));
            ui.label(format!("{:.1} kWh", est.energy_needed_kwh));
            ui.strong(format!("{} {:.1}%", need_label, est.percentage_needed));
            ui.strong(format!("{} {:.1}%", charge_label, est.charge_target_percent));
        });
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Battery Required"));
                ui.label(txt("gui.nav.subtitle", "EV Trip Calculator"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_projection = self.config.projection;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.projection", "Projection mode"));
                    ui.horizontal(|ui| {
                        ui.selectable_value(
                            &mut new_projection,
                            ProjectionMode::Buffered,
                            txt("gui.settings.projection.buffered", "Buffered (±10% band)"),
                        );
                        ui.selectable_value(
                            &mut new_projection,
                            ProjectionMode::Conservative,
                            txt("gui.settings.projection.conservative", "Conservative (-20%)"),
                        );
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if new_projection != self.config.projection {
                self.config.projection = new_projection;
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline calculator for EV trip charge planning",
                    ));
                    ui.label(txt("gui.about.version", "Version: 0.2"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.modes",
                        "- Buffered: safety buffer plus a ±10% efficiency band",
                    ));
                    ui.label(txt(
                        "gui.about.conservative",
                        "- Conservative: no buffer, single -20% efficiency case",
                    ));
                    ui.label(txt(
                        "gui.about.skip",
                        "- Skip analysis keeps a 10% reserve below the starting battery",
                    ));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_vehicle_section(ui);
                    ui.add_space(8.0);
                    self.ui_trip_section(ui);
                    ui.add_space(8.0);
                    self.ui_results_section(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_rejects_blank_and_text() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("1.3"), Some(1.3));
        assert_eq!(parse_field(" 100 "), Some(100.0));
    }

    #[test]
    fn parsed_legs_drop_blank_rows() {
        let mut app = GuiApp::new(config::Config::default());
        app.legs = vec![
            LegInput {
                label: "Leg 1".into(),
                distance: "90".into(),
            },
            LegInput {
                label: "Leg 2".into(),
                distance: "".into(),
            },
            LegInput {
                label: "Leg 3".into(),
                distance: "80".into(),
            },
        ];
        let legs = app.parsed_legs();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].label, "Leg 1");
        assert!((legs[1].distance_miles - 80.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_vehicle_falls_back_to_built_in() {
        let mut app = GuiApp::new(config::Config::default());
        app.selected_vehicle_id = "no-such-id".into();
        let vehicle = app.selected_vehicle();
        assert_eq!(vehicle.id, "f150-lightning");
        assert!((vehicle.capacity_kwh - 131.0).abs() < 1e-9);
    }
}
