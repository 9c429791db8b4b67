//! 내장 차량 한 대와 사용자 추가 차량 목록을 관리한다.
//! 사용자 목록은 JSON 파일 하나에 통째로 저장하며, 수정 때마다 전체를 덮어쓴다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// 차량 한 대의 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    /// 배터리 용량 [kWh]
    pub capacity_kwh: f64,
}

/// 내장 차량 카탈로그. 삭제/수정할 수 없다.
pub fn built_in() -> Vec<Vehicle> {
    vec![Vehicle {
        id: "f150-lightning".to_string(),
        name: "F150 Lightning".to_string(),
        capacity_kwh: 131.0,
    }]
}

/// 차량 저장소 입출력 오류.
#[derive(Debug)]
pub enum VehicleDbError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Serde(serde_json::Error),
}

impl std::fmt::Display for VehicleDbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleDbError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            VehicleDbError::Serde(e) => write!(f, "차량 목록 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for VehicleDbError {}

impl From<std::io::Error> for VehicleDbError {
    fn from(value: std::io::Error) -> Self {
        VehicleDbError::Io(value)
    }
}

impl From<serde_json::Error> for VehicleDbError {
    fn from(value: serde_json::Error) -> Self {
        VehicleDbError::Serde(value)
    }
}

/// 내장 + 사용자 차량을 합쳐 제공하는 카탈로그.
#[derive(Debug, Clone)]
pub struct VehicleDb {
    path: PathBuf,
    custom: Vec<Vehicle>,
}

impl VehicleDb {
    /// 저장 파일을 읽어 카탈로그를 만든다.
    ///
    /// 파일이 없으면 사용자 차량 없음으로 시작한다. 파일이 깨져 있으면
    /// 경고만 남기고 역시 빈 목록으로 시작한다. 호출자에게는 오류가 아니다.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let custom = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Vehicle>>(&content) {
                Ok(list) => list,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "차량 저장 파일을 읽지 못해 빈 목록으로 시작");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, custom }
    }

    pub fn store_path(&self) -> &Path {
        &self.path
    }

    /// 내장 차량 뒤에 사용자 차량을 붙인 전체 목록.
    pub fn all(&self) -> Vec<Vehicle> {
        let mut list = built_in();
        list.extend(self.custom.iter().cloned());
        list
    }

    pub fn custom(&self) -> &[Vehicle] {
        &self.custom
    }

    /// id로 차량을 찾는다. 내장 차량이 우선이다.
    pub fn find(&self, id: &str) -> Option<Vehicle> {
        self.all().into_iter().find(|v| v.id == id)
    }

    /// 사용자 차량을 추가한다.
    ///
    /// 이름이 비어 있거나 용량이 0 이하/비정상이면 아무것도 하지 않고 None.
    /// 저장소 반영은 호출자가 `save()`로 한다.
    pub fn add_custom(&mut self, name: &str, capacity_kwh: f64) -> Option<Vehicle> {
        let name = name.trim();
        if name.is_empty() || !capacity_kwh.is_finite() || capacity_kwh <= 0.0 {
            return None;
        }
        let vehicle = Vehicle {
            id: format!("custom-{}", Uuid::new_v4()),
            name: name.to_string(),
            capacity_kwh,
        };
        self.custom.push(vehicle.clone());
        Some(vehicle)
    }

    /// 사용자 차량 목록 전체를 저장 파일에 덮어쓴다.
    pub fn save(&self) -> Result<(), VehicleDbError> {
        let content = serde_json::to_string_pretty(&self.custom)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
