//! 生產系統協調器

use brew_core::{BrewError, Inventory, RecipeLibrary, Result};

use crate::BatchReport;

/// 生產系統：協調庫存與配方庫完成批次生產
pub struct ProductionSystem {
    /// 原料庫存
    inventory: Inventory,

    /// 配方庫
    library: RecipeLibrary,
}

impl ProductionSystem {
    /// 創建新的生產系統
    pub fn new(inventory: Inventory, library: RecipeLibrary) -> Self {
        Self { inventory, library }
    }

    /// 嘗試生產指定飲品的一個批次
    ///
    /// 份數必須為正整數，零或負數會在查找配方之前被拒絕。
    /// 配方不存在或庫存不足時返回錯誤，失敗時庫存保持不變，
    /// 重複的失敗嘗試不會改變任何狀態。
    pub fn make_batch(&mut self, beverage_name: &str, servings: i64) -> Result<BatchReport> {
        if servings < 1 {
            return Err(BrewError::InvalidServings(servings));
        }
        let servings =
            u32::try_from(servings).map_err(|_| BrewError::InvalidServings(servings))?;

        tracing::info!("嘗試生產 {} 份 {}", servings, beverage_name);

        let recipe = self
            .library
            .lookup(beverage_name)
            .ok_or_else(|| BrewError::RecipeNotFound(beverage_name.to_string()))?;

        let consumed = recipe.scaled_requirements(servings);
        let bottles = recipe.bottles_produced();

        self.inventory.consume_for_recipe(recipe, servings)?;

        tracing::info!(
            "批次生產成功: {} 份 {}，產出 {} 瓶",
            servings,
            beverage_name,
            bottles
        );

        Ok(BatchReport::new(
            beverage_name.to_string(),
            servings,
            bottles,
            consumed,
        ))
    }

    /// 裝瓶通知
    ///
    /// 無庫存影響的佔位操作，容器狀態模型尚未建立。
    pub fn bottle_batch(&self) {
        tracing::info!("批次已裝瓶，容器標記為待清洗");
    }

    /// 清洗容器通知
    ///
    /// 無庫存影響的佔位操作。
    pub fn clean_container(&self) {
        tracing::info!("容器已清洗");
    }

    /// 獲取庫存引用
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// 獲取配方庫引用
    pub fn library(&self) -> &RecipeLibrary {
        &self.library
    }
}
