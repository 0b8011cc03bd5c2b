//! 簡單批次生產示例

use brew_core::{Ingredient, Inventory, Recipe, RecipeLibrary};
use brew_production::ProductionSystem;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單批次生產示例 ===\n");

    // 建立庫存
    let mut inventory = Inventory::new(10);
    inventory.add_ingredient(Ingredient::new("Water".to_string(), Decimal::from(30)))?;
    inventory.add_ingredient(Ingredient::new("Lemon".to_string(), Decimal::from(5)))?;
    inventory.add_ingredient(Ingredient::new("Sugar".to_string(), Decimal::from(8)))?;

    // 建立配方
    let mut recipe = Recipe::new("Lemonade".to_string(), 3, 12);
    recipe.add_requirement(Ingredient::new("Water".to_string(), Decimal::new(25, 2)))?; // 0.25
    recipe.add_requirement(Ingredient::new("Lemon".to_string(), Decimal::new(1, 1)))?; // 0.1
    recipe.add_requirement(Ingredient::new("Sugar".to_string(), Decimal::new(5, 2)))?; // 0.05

    println!("配方需求清單:");
    for needed in recipe.requirements() {
        println!(
            "  - 原料: {}, 每份用量: {}",
            needed.name, needed.quantity
        );
    }

    let mut library = RecipeLibrary::new(5);
    library.register(recipe)?;

    // 生產 20 份
    let mut system = ProductionSystem::new(inventory, library);
    let report = system.make_batch("Lemonade", 20)?;

    println!(
        "\n批次 {} 完成: {} 份 {}，產出 {} 瓶",
        report.id, report.servings, report.beverage_name, report.bottles_produced
    );
    for used in &report.consumed {
        println!("  - 消耗 {}: {}", used.name, used.quantity);
    }

    println!("\n剩餘庫存:");
    for item in system.inventory().ingredients() {
        println!("  - {}: {}", item.name, item.quantity);
    }

    Ok(())
}
