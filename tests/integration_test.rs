//! 集成測試

use brew_core::*;
use brew_production::ProductionSystem;
use rust_decimal::Decimal;

fn brewing_inventory() -> Inventory {
    let mut inventory = Inventory::new(100);
    inventory
        .add_ingredient(Ingredient::new("Water".to_string(), Decimal::from(100)))
        .unwrap();
    inventory
        .add_ingredient(Ingredient::new("Malt".to_string(), Decimal::from(50)))
        .unwrap();
    inventory
        .add_ingredient(Ingredient::new("Hops".to_string(), Decimal::from(20)))
        .unwrap();
    inventory
        .add_ingredient(Ingredient::new("Yeast".to_string(), Decimal::from(10)))
        .unwrap();
    inventory
}

fn beer_recipe() -> Recipe {
    let mut recipe = Recipe::new("Beer".to_string(), 5, 100);
    recipe
        .add_requirement(Ingredient::new("Water".to_string(), Decimal::new(5, 1)))
        .unwrap();
    recipe
        .add_requirement(Ingredient::new("Malt".to_string(), Decimal::new(2, 1)))
        .unwrap();
    recipe
        .add_requirement(Ingredient::new("Hops".to_string(), Decimal::new(5, 2)))
        .unwrap();
    recipe
        .add_requirement(Ingredient::new("Yeast".to_string(), Decimal::new(1, 2)))
        .unwrap();
    recipe
}

#[test]
fn test_beer_batch_cycle() {
    // 測試完整的批次生產流程
    // 場景：標準釀造庫存 + Beer 配方，生產 5 份

    // 1. 建立庫存與配方庫
    let inventory = brewing_inventory();
    let mut library = RecipeLibrary::new(50);
    library.register(beer_recipe()).unwrap();

    // 2. 執行批次生產
    let mut system = ProductionSystem::new(inventory, library);
    let report = system.make_batch("Beer", 5).unwrap();

    // 3. 驗證批次結果
    assert_eq!(report.beverage_name, "Beer");
    assert_eq!(report.servings, 5);
    assert_eq!(report.bottles_produced, 100);
    assert_eq!(report.consumed.len(), 4);

    // 4. 驗證扣減後的庫存
    let inventory = system.inventory();
    assert_eq!(inventory.quantity_of("Water"), Some(Decimal::new(975, 1))); // 97.5
    assert_eq!(inventory.quantity_of("Malt"), Some(Decimal::from(49))); // 49.0
    assert_eq!(inventory.quantity_of("Hops"), Some(Decimal::new(1975, 2))); // 19.75
    assert_eq!(inventory.quantity_of("Yeast"), Some(Decimal::new(995, 2))); // 9.95

    // 5. 裝瓶與清洗不影響庫存
    let after_batch = system.inventory().ingredients();
    system.bottle_batch();
    system.clean_container();
    assert_eq!(system.inventory().ingredients(), after_batch);
}

#[test]
fn test_oversized_batch_fails_atomically() {
    // 場景：100000 份遠超庫存，失敗且庫存完全不變

    let inventory = brewing_inventory();
    let mut library = RecipeLibrary::new(50);
    library.register(beer_recipe()).unwrap();

    let mut system = ProductionSystem::new(inventory, library);
    let before = system.inventory().ingredients();

    // 重複失敗嘗試：錯誤種類一致，庫存始終不變
    for _ in 0..2 {
        let err = system.make_batch("Beer", 100000).unwrap_err();
        assert!(matches!(err, BrewError::InsufficientIngredients { .. }));
        assert_eq!(system.inventory().ingredients(), before);
    }

    // 失敗之後正常份數仍可生產
    assert!(system.make_batch("Beer", 5).is_ok());
}

#[test]
fn test_lookup_miss_and_invalid_servings() {
    let inventory = brewing_inventory();
    let mut library = RecipeLibrary::new(50);
    library.register(beer_recipe()).unwrap();

    // 只登錄了 Beer 的配方庫查不到 Vodka
    assert!(library.lookup("Vodka").is_none());

    let mut system = ProductionSystem::new(inventory, library);

    let err = system.make_batch("Vodka", 1).unwrap_err();
    assert!(matches!(err, BrewError::RecipeNotFound(ref name) if name == "Vodka"));

    let err = system.make_batch("Beer", 0).unwrap_err();
    assert!(matches!(err, BrewError::InvalidServings(0)));

    let err = system.make_batch("Beer", -5).unwrap_err();
    assert!(matches!(err, BrewError::InvalidServings(-5)));
}

#[test]
fn test_inventory_capacity_boundary() {
    // 場景：容量 3 的庫存，第 4 種原料被拒絕

    let mut inventory = Inventory::new(3);
    inventory
        .add_ingredient(Ingredient::new("Water".to_string(), Decimal::from(10)))
        .unwrap();
    inventory
        .add_ingredient(Ingredient::new("Malt".to_string(), Decimal::from(10)))
        .unwrap();
    inventory
        .add_ingredient(Ingredient::new("Hops".to_string(), Decimal::from(10)))
        .unwrap();

    let err = inventory
        .add_ingredient(Ingredient::new("Yeast".to_string(), Decimal::from(10)))
        .unwrap_err();
    assert!(matches!(err, BrewError::CapacityExceeded { capacity: 3, .. }));

    // 第 (容量) 種原料仍可查詢
    assert_eq!(inventory.quantity_of("Hops"), Some(Decimal::from(10)));
    assert_eq!(inventory.len(), 3);
}

#[test]
fn test_duplicate_recipe_keeps_first() {
    let mut library = RecipeLibrary::new(50);
    library.register(beer_recipe()).unwrap();

    let err = library
        .register(Recipe::new("Beer".to_string(), 5, 20))
        .unwrap_err();

    assert!(matches!(err, BrewError::DuplicateRecipe(ref name) if name == "Beer"));
    assert_eq!(library.lookup("Beer").unwrap().bottles_produced(), 100);
}
