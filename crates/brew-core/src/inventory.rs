//! 庫存模型

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BrewError, Ingredient, Recipe, Result};

/// 庫存：以原料名稱為鍵的現有數量表
///
/// 容量（可容納的不同原料種類數）在創建時指定。滿了之後新原料
/// 會被拒絕，已存在的原料仍可合併數量。原料只會被扣減，
/// 不會被移除（沒有刪除操作）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// 現有數量表（原料名稱 → 現有數量）
    stock: HashMap<String, Decimal>,

    /// 原料種類上限
    max_ingredients: usize,
}

impl Inventory {
    /// 創建新的空庫存
    pub fn new(max_ingredients: usize) -> Self {
        Self {
            stock: HashMap::new(),
            max_ingredients,
        }
    }

    /// 加入原料
    ///
    /// 同名原料會合併數量；新名稱在達到種類上限後會被拒絕，
    /// 拒絕以錯誤值回報，不會中斷程序。
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> Result<()> {
        if let Some(on_hand) = self.stock.get_mut(&ingredient.name) {
            *on_hand += ingredient.quantity;
            return Ok(());
        }

        if self.stock.len() >= self.max_ingredients {
            return Err(BrewError::CapacityExceeded {
                name: ingredient.name,
                capacity: self.max_ingredients,
            });
        }

        self.stock.insert(ingredient.name, ingredient.quantity);
        Ok(())
    }

    /// 檢查庫存是否足以生產指定份數（唯讀）
    pub fn has_sufficient(&self, recipe: &Recipe, servings: u32) -> bool {
        self.first_shortfall(recipe, servings).is_none()
    }

    /// 為配方扣減庫存
    ///
    /// 扣減前必須重新驗證充足性，任何一項不足都不會扣減任何原料
    /// （全有或全無）。失敗時庫存保持不變。
    pub fn consume_for_recipe(&mut self, recipe: &Recipe, servings: u32) -> Result<()> {
        if let Some((name, required, available)) = self.first_shortfall(recipe, servings) {
            return Err(BrewError::InsufficientIngredients {
                name,
                required,
                available,
            });
        }

        for needed in recipe.scaled_requirements(servings) {
            if let Some(on_hand) = self.stock.get_mut(&needed.name) {
                *on_hand -= needed.quantity;
            }
        }

        Ok(())
    }

    /// 獲取指定原料的現有數量
    pub fn quantity_of(&self, name: &str) -> Option<Decimal> {
        self.stock.get(name).copied()
    }

    /// 獲取目前庫存快照（按名稱排序）
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut items: Vec<Ingredient> = self
            .stock
            .iter()
            .map(|(name, quantity)| Ingredient::new(name.clone(), *quantity))
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// 獲取目前原料種類數
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    /// 檢查庫存是否為空
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// 檢查庫存是否已滿
    pub fn is_full(&self) -> bool {
        self.stock.len() >= self.max_ingredients
    }

    /// 獲取原料種類上限
    pub fn capacity(&self) -> usize {
        self.max_ingredients
    }

    /// 找出第一項不足的原料（名稱、需求量、現有量）
    ///
    /// 不在庫存中的原料視為現有量為零；全部充足時返回 None。
    fn first_shortfall(
        &self,
        recipe: &Recipe,
        servings: u32,
    ) -> Option<(String, Decimal, Decimal)> {
        for needed in recipe.scaled_requirements(servings) {
            let available = self
                .stock
                .get(&needed.name)
                .copied()
                .unwrap_or(Decimal::ZERO);
            if available < needed.quantity {
                return Some((needed.name, needed.quantity, available));
            }
        }
        None
    }
}
