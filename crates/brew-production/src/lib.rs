//! # Brew Production
//!
//! 批次生產協調引擎

pub mod system;

// Re-export 主要類型
pub use system::ProductionSystem;

use brew_core::Ingredient;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 批次生產結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// 批次ID
    pub id: Uuid,

    /// 飲品名稱
    pub beverage_name: String,

    /// 生產份數
    pub servings: u32,

    /// 產出瓶數（配方配置的批次產量）
    pub bottles_produced: u32,

    /// 本批次實際扣減的原料數量
    pub consumed: Vec<Ingredient>,
}

impl BatchReport {
    /// 創建新的批次結果
    pub fn new(
        beverage_name: String,
        servings: u32,
        bottles_produced: u32,
        consumed: Vec<Ingredient>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            beverage_name,
            servings,
            bottles_produced,
            consumed,
        }
    }
}
