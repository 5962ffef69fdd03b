use crate::cooling::clamp;

use super::ideas::FutureIdea;

/// 히트 필드 열 개수.
pub const FIELD_COLS: usize = 16;
/// 히트 필드 행 개수.
pub const FIELD_ROWS: usize = 8;
/// 한 프레임당 시간 증가량.
pub const FRAME_DT: f64 = 0.016;

/// 기본 부하(%)
pub const DEFAULT_LOAD: f64 = 65.0;

/// 한 시점의 히트 필드와 계기값.
#[derive(Debug, Clone, PartialEq)]
pub struct LabFrame {
    /// 행 우선 `FIELD_ROWS x FIELD_COLS` 열 강도(0~1)
    pub cells: Vec<f64>,
    /// 부하 계기(0~1)
    pub load: f64,
    /// 효과 계기(0~1)
    pub effect: f64,
    /// 회수 전력 계기. 열전 회수 아이디어에서만 값이 있다.
    pub recovered_power: Option<f64>,
}

impl LabFrame {
    pub fn cell(&self, row: usize, col: usize) -> f64 {
        self.cells[row * FIELD_COLS + col]
    }
}

/// 미래 냉각 아이디어 미니 시뮬레이션 상태.
#[derive(Debug, Clone, PartialEq)]
pub struct LabSim {
    pub idea: FutureIdea,
    /// 부하(0~100 %)
    pub load: f64,
    pub running: bool,
    pub t: f64,
}

impl Default for LabSim {
    fn default() -> Self {
        Self {
            idea: FutureIdea::Pcm,
            load: DEFAULT_LOAD,
            running: false,
            t: 0.0,
        }
    }
}

fn gaussian(col: f64, row: f64, c0: f64, r0: f64, spread: f64) -> f64 {
    (-((col - c0).powi(2) + (row - r0).powi(2)) / spread).exp()
}

impl LabSim {
    pub fn new(idea: FutureIdea, load: f64) -> Self {
        Self {
            idea,
            load,
            ..Self::default()
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.t = 0.0;
    }

    /// 실행 중일 때만 한 프레임만큼 시간을 진행한다.
    pub fn advance(&mut self) {
        if self.running {
            self.t += FRAME_DT;
        }
    }

    /// 주기적 맥동(0~1)
    pub fn pulse(&self) -> f64 {
        ((self.t * 2.0).sin() + 1.0) * 0.5
    }

    /// 부하를 0~1 기준 열량으로 환산한다.
    pub fn heat(&self) -> f64 {
        clamp(self.load / 100.0, 0.0, 1.0)
    }

    fn cell_heat(&self, row: usize, col: usize, heat: f64, pulse: f64) -> f64 {
        let (c, r) = (col as f64, row as f64);
        let hotspot = gaussian(c, r, 11.0, 3.0, 12.0) * 0.55;
        let h = clamp(heat * 0.7 + hotspot, 0.0, 1.0);

        match self.idea {
            // 맥동이 클 때 피크를 흡수한다
            FutureIdea::Pcm => clamp(h - pulse * 0.18, 0.0, 1.0),
            // 부하를 분산해 핫스팟이 넓게 퍼진다
            FutureIdea::Sched => {
                let spread = gaussian(c, r, 9.0, 4.0, 22.0) * 0.35;
                clamp(heat * 0.65 + spread, 0.0, 1.0)
            }
            FutureIdea::Micro => {
                let cool_spot = gaussian(c, r, 11.0, 3.0, 10.0) * 0.35;
                clamp(h - cool_spot, 0.0, 1.0)
            }
            FutureIdea::Mag => clamp(h - (0.12 + 0.10 * pulse), 0.0, 1.0),
            FutureIdea::Teg => clamp(h - 0.05, 0.0, 1.0),
        }
    }

    fn effect(&self, heat: f64, pulse: f64) -> f64 {
        match self.idea {
            FutureIdea::Pcm => 0.55 + 0.25 * pulse,
            FutureIdea::Sched => 0.60,
            FutureIdea::Micro => 0.70,
            FutureIdea::Mag => 0.58 + 0.22 * pulse,
            FutureIdea::Teg => 0.18 + 0.15 * heat,
        }
    }

    /// 현재 시점의 히트 필드와 계기값을 계산한다.
    pub fn frame(&self) -> LabFrame {
        let heat = self.heat();
        let pulse = self.pulse();
        let mut cells = Vec::with_capacity(FIELD_ROWS * FIELD_COLS);
        for row in 0..FIELD_ROWS {
            for col in 0..FIELD_COLS {
                cells.push(self.cell_heat(row, col, heat, pulse));
            }
        }
        let recovered_power = match self.idea {
            FutureIdea::Teg => Some(clamp(0.06 + heat * 0.22, 0.0, 1.0)),
            _ => None,
        };
        LabFrame {
            cells,
            load: self.load / 100.0,
            effect: self.effect(heat, pulse),
            recovered_power,
        }
    }
}
