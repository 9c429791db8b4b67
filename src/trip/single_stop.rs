use super::{
    clamp_buffer, positive_finite, ProjectionMode, BEST_CASE_FACTOR,
    CONSERVATIVE_EFFICIENCY_FACTOR, WORST_CASE_FACTOR,
};

/// 단일 목적지 트립의 충전량 계산 입력.
#[derive(Debug, Clone)]
pub struct SingleStopInput {
    /// 배터리 용량 [kWh]
    pub capacity_kwh: f64,
    /// 전비 [mi/kWh]
    pub efficiency_mi_per_kwh: f64,
    /// 목적지까지 거리 [mi]
    pub distance_miles: f64,
    /// 안전 버퍼 [%] (0~20, Buffered 모드에서만 사용)
    pub buffer_percent: f64,
    pub projection: ProjectionMode,
}

/// 하나의 전비 가정에 대한 예측 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeEstimate {
    /// 적용한 전비 [mi/kWh]
    pub efficiency_mi_per_kwh: f64,
    /// 필요 에너지 [kWh]
    pub energy_needed_kwh: f64,
    /// 필요 배터리 비율 [%] (클램프하지 않은 원값)
    pub percentage_needed: f64,
    /// 권장 충전 목표 [%] (100 초과 시 100으로 클램프)
    pub charge_target_percent: f64,
}

/// 단일 목적지 계산 결과.
///
/// `best`/`worst`는 Buffered 모드, `conservative`는 Conservative 모드에서만 채워진다.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleStopResult {
    pub main: ChargeEstimate,
    pub best: Option<ChargeEstimate>,
    pub worst: Option<ChargeEstimate>,
    pub conservative: Option<ChargeEstimate>,
}

fn estimate_at(
    distance_miles: f64,
    efficiency_mi_per_kwh: f64,
    capacity_kwh: f64,
    buffer_percent: f64,
) -> ChargeEstimate {
    let energy_needed_kwh = distance_miles / efficiency_mi_per_kwh;
    let percentage_needed = energy_needed_kwh / capacity_kwh * 100.0;
    ChargeEstimate {
        efficiency_mi_per_kwh,
        energy_needed_kwh,
        percentage_needed,
        charge_target_percent: (percentage_needed + buffer_percent).min(100.0),
    }
}

/// 단일 목적지 트립에 필요한 충전량을 계산한다.
///
/// 전비/거리/용량 중 하나라도 0 이하이거나 숫자가 아니면 결과 없음(None).
pub fn estimate_single_stop(input: &SingleStopInput) -> Option<SingleStopResult> {
    if !positive_finite(input.efficiency_mi_per_kwh)
        || !positive_finite(input.distance_miles)
        || !positive_finite(input.capacity_kwh)
    {
        return None;
    }

    match input.projection {
        ProjectionMode::Buffered => {
            let buffer = clamp_buffer(input.buffer_percent);
            let main = estimate_at(
                input.distance_miles,
                input.efficiency_mi_per_kwh,
                input.capacity_kwh,
                buffer,
            );
            let best = estimate_at(
                input.distance_miles,
                input.efficiency_mi_per_kwh * BEST_CASE_FACTOR,
                input.capacity_kwh,
                buffer,
            );
            let worst = estimate_at(
                input.distance_miles,
                input.efficiency_mi_per_kwh * WORST_CASE_FACTOR,
                input.capacity_kwh,
                buffer,
            );
            Some(SingleStopResult {
                main,
                best: Some(best),
                worst: Some(worst),
                conservative: None,
            })
        }
        ProjectionMode::Conservative => {
            let main = estimate_at(
                input.distance_miles,
                input.efficiency_mi_per_kwh,
                input.capacity_kwh,
                0.0,
            );
            let conservative = estimate_at(
                input.distance_miles,
                input.efficiency_mi_per_kwh * CONSERVATIVE_EFFICIENCY_FACTOR,
                input.capacity_kwh,
                0.0,
            );
            Some(SingleStopResult {
                main,
                best: None,
                worst: None,
                conservative: Some(conservative),
            })
        }
    }
}
