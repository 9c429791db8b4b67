use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::trip::{
    estimate_single_stop, simulate_trip, ChargeEstimate, MultiStopInput, ProjectionMode,
    SingleStopInput, TripLeg,
};
use crate::vehicle_db::{Vehicle, VehicleDb};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SingleStop,
    MultiStop,
    Vehicles,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SINGLE_STOP));
    println!("{}", tr.t(keys::MAIN_MENU_MULTI_STOP));
    println!("{}", tr.t(keys::MAIN_MENU_VEHICLES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SingleStop),
            "2" => return Ok(MenuChoice::MultiStop),
            "3" => return Ok(MenuChoice::Vehicles),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단일 목적지 충전량 메뉴를 처리한다.
pub fn handle_single_stop(
    tr: &Translator,
    cfg: &Config,
    db: &VehicleDb,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SINGLE_STOP_HEADING));
    let vehicle = select_vehicle(tr, db)?;
    let efficiency = read_f64(tr, tr.t(keys::PROMPT_EFFICIENCY))?;
    let distance = read_f64(tr, tr.t(keys::PROMPT_DISTANCE))?;
    let buffer = match cfg.projection {
        ProjectionMode::Buffered => {
            read_f64_or(tr, tr.t(keys::PROMPT_BUFFER), cfg.default_buffer_percent)?
        }
        ProjectionMode::Conservative => 0.0,
    };

    let input = SingleStopInput {
        capacity_kwh: vehicle.capacity_kwh,
        efficiency_mi_per_kwh: efficiency,
        distance_miles: distance,
        buffer_percent: buffer,
        projection: cfg.projection,
    };
    match estimate_single_stop(&input) {
        Some(result) => {
            print_estimate(tr, tr.t(keys::RESULT_NEEDED), &result.main);
            if let Some(worst) = &result.worst {
                print_estimate(tr, tr.t(keys::RESULT_WORST_CASE), worst);
            }
            if let Some(best) = &result.best {
                print_estimate(tr, tr.t(keys::RESULT_BEST_CASE), best);
            }
            if let Some(conservative) = &result.conservative {
                print_estimate(tr, tr.t(keys::RESULT_CONSERVATIVE_CASE), conservative);
            }
        }
        None => println!("{}", tr.t(keys::NO_RESULT)),
    }
    Ok(())
}

fn print_estimate(tr: &Translator, heading: &str, est: &ChargeEstimate) {
    println!(
        "{heading} {:.1} kWh, {:.1}% @ {:.2} mi/kWh",
        est.energy_needed_kwh, est.percentage_needed, est.efficiency_mi_per_kwh
    );
    println!(
        "  {} {:.1}%",
        tr.t(keys::RESULT_CHARGE_TARGET),
        est.charge_target_percent
    );
}

/// 다구간 트립 메뉴를 처리한다.
pub fn handle_multi_stop(
    tr: &Translator,
    cfg: &Config,
    db: &VehicleDb,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MULTI_STOP_HEADING));
    let vehicle = select_vehicle(tr, db)?;
    let efficiency = read_f64(tr, tr.t(keys::PROMPT_EFFICIENCY))?;
    let starting = read_f64_or(
        tr,
        tr.t(keys::PROMPT_STARTING_BATTERY),
        cfg.default_starting_battery_percent,
    )?;
    let buffer = match cfg.projection {
        ProjectionMode::Buffered => {
            read_f64_or(tr, tr.t(keys::PROMPT_BUFFER), cfg.default_buffer_percent)?
        }
        ProjectionMode::Conservative => 0.0,
    };
    let leg_count = read_f64(tr, tr.t(keys::PROMPT_LEG_COUNT))? as usize;
    let mut legs = Vec::with_capacity(leg_count);
    for index in 0..leg_count {
        let label = format!("{} {}", tr.t(keys::RESULT_LEG_LINE), index + 1);
        let prompt = format!("{label} - {}", tr.t(keys::PROMPT_LEG_DISTANCE));
        let distance = read_f64(tr, &prompt)?;
        legs.push(TripLeg::new(label, distance));
    }
    let skip_analysis = read_yes_no(tr.t(keys::PROMPT_SKIP_ANALYSIS))?;

    let input = MultiStopInput {
        capacity_kwh: vehicle.capacity_kwh,
        efficiency_mi_per_kwh: efficiency,
        buffer_percent: buffer,
        starting_battery_percent: starting,
        legs,
        projection: cfg.projection,
        skip_analysis,
    };
    match simulate_trip(&input) {
        Some(result) => {
            for leg in &result.legs {
                let mut line = format!(
                    "{}: {:.1} mi, {:.1} kWh, {:.1}%",
                    leg.label, leg.distance_miles, leg.energy_needed_kwh, leg.percentage_needed
                );
                if let Some(after) = leg.battery_after_percent {
                    line.push_str(&format!(" -> {:.1}%", after));
                }
                if let Some(target) = leg.charge_target_percent {
                    line.push_str(&format!(
                        " ({} {:.1}%)",
                        tr.t(keys::RESULT_CHARGE_TARGET),
                        target
                    ));
                }
                if let Some(conservative) = leg.conservative_percentage_needed {
                    line.push_str(&format!(
                        " ({} {:.1}%)",
                        tr.t(keys::RESULT_CONSERVATIVE_CASE),
                        conservative
                    ));
                }
                println!("{line}");
            }
            let summary = &result.summary;
            let mut total_line = format!(
                "{} {:.1} mi, {:.1} kWh, {:.1}%",
                tr.t(keys::RESULT_TRIP_TOTAL),
                summary.total_distance_miles,
                summary.total_energy_kwh,
                summary.total_percentage_needed
            );
            if let Some(conservative) = summary.total_conservative_percentage_needed {
                total_line.push_str(&format!(
                    " ({} {:.1}%)",
                    tr.t(keys::RESULT_CONSERVATIVE_CASE),
                    conservative
                ));
            }
            println!("{total_line}");
            if let Some(arrival) = summary.arrival_battery_percent {
                println!("{} {:.1}%", tr.t(keys::RESULT_ARRIVAL_BATTERY), arrival);
            }
            if let Some(options) = &result.skip_options {
                println!("{}", tr.t(keys::RESULT_SKIP_HEADING));
                for option in options {
                    let verdict = if option.is_doable {
                        tr.t(keys::SKIP_DOABLE)
                    } else {
                        tr.t(keys::SKIP_NOT_DOABLE)
                    };
                    println!(
                        "  {}: {:.1} mi, {:.2} mi/kWh, -{:.1}% => {}",
                        option.skipped_leg_label,
                        option.combined_distance_miles,
                        option.required_efficiency_mi_per_kwh,
                        option.battery_savings_percent,
                        verdict
                    );
                }
            }
        }
        None => println!("{}", tr.t(keys::NO_RESULT)),
    }
    Ok(())
}

/// 차량 목록/추가 메뉴를 처리한다.
pub fn handle_vehicles(tr: &Translator, db: &mut VehicleDb) -> Result<(), AppError> {
    println!("{}", tr.t(keys::VEHICLES_HEADING));
    println!("{}", tr.t(keys::VEHICLES_LIST_OPTION));
    println!("{}", tr.t(keys::VEHICLES_ADD_OPTION));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => {
            for vehicle in db.all() {
                println!(
                    "  {} - {} ({:.0} kWh)",
                    vehicle.id, vehicle.name, vehicle.capacity_kwh
                );
            }
        }
        "2" => {
            let name = read_line(tr.t(keys::PROMPT_VEHICLE_NAME))?;
            let capacity = read_f64(tr, tr.t(keys::PROMPT_VEHICLE_CAPACITY))?;
            match db.add_custom(name.trim(), capacity) {
                Some(vehicle) => {
                    db.save()?;
                    println!(
                        "{} {} ({:.0} kWh)",
                        tr.t(keys::VEHICLE_ADDED),
                        vehicle.name,
                        vehicle.capacity_kwh
                    );
                }
                None => println!("{}", tr.t(keys::VEHICLE_NOT_ADDED)),
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_MODE), cfg.projection);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.projection = match sel.trim() {
        "1" => ProjectionMode::Buffered,
        "2" => ProjectionMode::Conservative,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.projection
        }
    };
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.projection);
    Ok(())
}

/// 번호를 붙여 차량 목록을 보여주고 하나를 고르게 한다. 엔터는 첫 번째 차량.
fn select_vehicle(tr: &Translator, db: &VehicleDb) -> Result<Vehicle, AppError> {
    let vehicles = db.all();
    for (index, vehicle) in vehicles.iter().enumerate() {
        println!(
            "{}) {} ({:.0} kWh)",
            index + 1,
            vehicle.name,
            vehicle.capacity_kwh
        );
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        if sel.trim().is_empty() {
            return Ok(vehicles[0].clone());
        }
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= vehicles.len() {
                return Ok(vehicles[n - 1].clone());
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓰는 숫자 프롬프트.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    Ok(matches!(s.trim(), "y" | "Y" | "yes" | "Yes"))
}
