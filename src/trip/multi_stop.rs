use super::{
    clamp_battery, clamp_buffer, positive_finite, skip, ProjectionMode, SkipOption,
    CONSERVATIVE_EFFICIENCY_FACTOR,
};

/// 다구간 트립의 한 구간. 순서가 곧 주행 순서다.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    pub label: String,
    /// 구간 거리 [mi]
    pub distance_miles: f64,
}

impl TripLeg {
    pub fn new(label: impl Into<String>, distance_miles: f64) -> Self {
        Self {
            label: label.into(),
            distance_miles,
        }
    }
}

/// 다구간 트립 시뮬레이션 입력.
#[derive(Debug, Clone)]
pub struct MultiStopInput {
    /// 배터리 용량 [kWh]
    pub capacity_kwh: f64,
    /// 전비 [mi/kWh]
    pub efficiency_mi_per_kwh: f64,
    /// 안전 버퍼 [%] (Buffered 모드에서만 사용)
    pub buffer_percent: f64,
    /// 출발 시 배터리 [%]
    pub starting_battery_percent: f64,
    pub legs: Vec<TripLeg>,
    pub projection: ProjectionMode,
    /// 중간 정차 생략 분석을 함께 수행할지 여부
    pub skip_analysis: bool,
}

/// 구간별 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct LegResult {
    pub label: String,
    /// 구간 거리 [mi]
    pub distance_miles: f64,
    /// 필요 에너지 [kWh]
    pub energy_needed_kwh: f64,
    /// 필요 배터리 비율 [%]
    pub percentage_needed: f64,
    /// 정차 도착 시 배터리 [%] (Buffered 이월 모드에서만; 음수면 도달 불가)
    pub battery_after_percent: Option<f64>,
    /// 이 정차에서의 충전 목표 [%] (마지막 구간에는 없음)
    pub charge_target_percent: Option<f64>,
    /// 전비 -20% 가정 시 필요 비율 [%] (Conservative 모드에서만)
    pub conservative_percentage_needed: Option<f64>,
}

/// 트립 전체 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    /// 총 거리 [mi]
    pub total_distance_miles: f64,
    /// 총 필요 에너지 [kWh]
    pub total_energy_kwh: f64,
    /// 총 필요 배터리 비율 [%]
    pub total_percentage_needed: f64,
    /// 보수 가정 총 필요 비율 [%] (Conservative 모드에서만)
    pub total_conservative_percentage_needed: Option<f64>,
    /// 최종 목적지 도착 시 배터리 [%] (Buffered 이월 모드에서만)
    pub arrival_battery_percent: Option<f64>,
}

/// 다구간 트립 시뮬레이션 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiStopResult {
    pub legs: Vec<LegResult>,
    pub summary: TripSummary,
    /// 생략 분석을 켰고 구간이 2개 이상일 때만 채워진다.
    pub skip_options: Option<Vec<SkipOption>>,
}

/// 다구간 트립을 시뮬레이션한다.
///
/// 거리가 0 이하이거나 숫자가 아닌 구간은 순서를 유지한 채 조용히 제외한다.
/// 유효 구간이 하나도 없거나 전비/용량이 잘못되면 결과 없음(None).
pub fn simulate_trip(input: &MultiStopInput) -> Option<MultiStopResult> {
    if !positive_finite(input.efficiency_mi_per_kwh) || !positive_finite(input.capacity_kwh) {
        return None;
    }
    let legs: Vec<TripLeg> = input
        .legs
        .iter()
        .filter(|leg| positive_finite(leg.distance_miles))
        .cloned()
        .collect();
    if legs.is_empty() {
        return None;
    }

    let starting = clamp_battery(input.starting_battery_percent);
    let result = match input.projection {
        ProjectionMode::Buffered => simulate_with_carry(input, &legs, starting),
        ProjectionMode::Conservative => summarize_independent(input, &legs),
    };

    let skip_options = if input.skip_analysis && legs.len() >= 2 {
        Some(skip::analyze_skip_options(
            &legs,
            input.efficiency_mi_per_kwh,
            input.capacity_kwh,
            starting,
        ))
    } else {
        None
    };

    Some(MultiStopResult {
        skip_options,
        ..result
    })
}

/// 정차마다 충전 목표까지 채우는 배터리 이월 방식.
///
/// 마지막 구간은 충전 목표를 만들지 않고 도착 잔량만 보고한다.
fn simulate_with_carry(input: &MultiStopInput, legs: &[TripLeg], starting: f64) -> MultiStopResult {
    let buffer = clamp_buffer(input.buffer_percent);
    let mut running_battery = starting;
    let mut leg_results = Vec::with_capacity(legs.len());
    let mut total_distance = 0.0;
    let mut total_energy = 0.0;
    let mut total_percentage = 0.0;

    for (index, leg) in legs.iter().enumerate() {
        let is_last = index == legs.len() - 1;
        let energy_needed_kwh = leg.distance_miles / input.efficiency_mi_per_kwh;
        let percentage_needed = energy_needed_kwh / input.capacity_kwh * 100.0;
        let battery_after = running_battery - percentage_needed;
        let charge_target = if is_last {
            None
        } else {
            Some((percentage_needed + buffer).min(100.0))
        };

        total_distance += leg.distance_miles;
        total_energy += energy_needed_kwh;
        total_percentage += percentage_needed;

        leg_results.push(LegResult {
            label: leg.label.clone(),
            distance_miles: leg.distance_miles,
            energy_needed_kwh,
            percentage_needed,
            battery_after_percent: Some(battery_after),
            charge_target_percent: charge_target,
            conservative_percentage_needed: None,
        });

        running_battery = charge_target.unwrap_or(battery_after);
    }

    let arrival = leg_results
        .last()
        .and_then(|leg| leg.battery_after_percent);
    MultiStopResult {
        legs: leg_results,
        summary: TripSummary {
            total_distance_miles: total_distance,
            total_energy_kwh: total_energy,
            total_percentage_needed: total_percentage,
            total_conservative_percentage_needed: None,
            arrival_battery_percent: arrival,
        },
        skip_options: None,
    }
}

/// 구간별 독립 계산 방식. 이월 없이 고정 전비와 -20% 보수 전비로만 본다.
fn summarize_independent(input: &MultiStopInput, legs: &[TripLeg]) -> MultiStopResult {
    let conservative_efficiency = input.efficiency_mi_per_kwh * CONSERVATIVE_EFFICIENCY_FACTOR;
    let mut leg_results = Vec::with_capacity(legs.len());
    let mut total_distance = 0.0;
    let mut total_energy = 0.0;
    let mut total_percentage = 0.0;
    let mut total_conservative = 0.0;

    for leg in legs {
        let energy_needed_kwh = leg.distance_miles / input.efficiency_mi_per_kwh;
        let percentage_needed = energy_needed_kwh / input.capacity_kwh * 100.0;
        let conservative_needed =
            leg.distance_miles / conservative_efficiency / input.capacity_kwh * 100.0;

        total_distance += leg.distance_miles;
        total_energy += energy_needed_kwh;
        total_percentage += percentage_needed;
        total_conservative += conservative_needed;

        leg_results.push(LegResult {
            label: leg.label.clone(),
            distance_miles: leg.distance_miles,
            energy_needed_kwh,
            percentage_needed,
            battery_after_percent: None,
            charge_target_percent: None,
            conservative_percentage_needed: Some(conservative_needed),
        });
    }

    MultiStopResult {
        legs: leg_results,
        summary: TripSummary {
            total_distance_miles: total_distance,
            total_energy_kwh: total_energy,
            total_percentage_needed: total_percentage,
            total_conservative_percentage_needed: Some(total_conservative),
            arrival_battery_percent: None,
        },
        skip_options: None,
    }
}
