//! 配方庫模型

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{BrewError, Recipe, Result};

/// 配方庫：以飲品名稱為鍵的配方註冊表
///
/// 容量（可容納的配方數）在創建時指定。同名配方不可重複登錄，
/// 先登錄者保持有效。配方只增不減（沒有刪除操作）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLibrary {
    /// 配方表（飲品名稱 → 配方）
    recipes: HashMap<String, Recipe>,

    /// 配方數上限
    max_recipes: usize,
}

impl RecipeLibrary {
    /// 創建新的空配方庫
    pub fn new(max_recipes: usize) -> Self {
        Self {
            recipes: HashMap::new(),
            max_recipes,
        }
    }

    /// 登錄配方
    ///
    /// 同名配方會被拒絕（先登錄者有效）；達到配方數上限後
    /// 新配方也會被拒絕。拒絕以錯誤值回報。
    pub fn register(&mut self, recipe: Recipe) -> Result<()> {
        if self.recipes.contains_key(recipe.beverage_name()) {
            return Err(BrewError::DuplicateRecipe(
                recipe.beverage_name().to_string(),
            ));
        }

        if self.recipes.len() >= self.max_recipes {
            return Err(BrewError::CapacityExceeded {
                name: recipe.beverage_name().to_string(),
                capacity: self.max_recipes,
            });
        }

        self.recipes
            .insert(recipe.beverage_name().to_string(), recipe);
        Ok(())
    }

    /// 按飲品名稱查找配方
    pub fn lookup(&self, beverage_name: &str) -> Option<&Recipe> {
        self.recipes.get(beverage_name)
    }

    /// 獲取已登錄的飲品名稱（按名稱排序）
    pub fn beverage_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.recipes.keys().cloned().collect();
        names.sort();
        names
    }

    /// 獲取目前配方數
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// 檢查配方庫是否為空
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// 檢查配方庫是否已滿
    pub fn is_full(&self) -> bool {
        self.recipes.len() >= self.max_recipes
    }

    /// 獲取配方數上限
    pub fn capacity(&self) -> usize {
        self.max_recipes
    }
}
