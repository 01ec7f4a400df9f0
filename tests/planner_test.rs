use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use hranoplan::catalog::{InMemoryCatalog, JsonFileCatalog};
use hranoplan::models::{
    Constraints, Ingredient, PrepTimeLimit, Recipe, SelectionStrategy, SlotType,
};
use hranoplan::planner::{generate_from_catalog, generate_meal_plan};
use hranoplan::PlanError;

fn recipe(id: &str, slots: &[SlotType], prep_time: u32, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {id}"),
        description: None,
        instructions: vec!["Cook.".to_string()],
        ingredients: Some(
            ingredients
                .iter()
                .map(|name| Ingredient::new(*name, 100.0, "гр."))
                .collect(),
        ),
        prep_time,
        cook_time: 20,
        servings: 2,
        is_breakfast: slots.contains(&SlotType::Breakfast),
        is_lunch: slots.contains(&SlotType::Lunch),
        is_dinner: slots.contains(&SlotType::Dinner),
        is_snack: slots.contains(&SlotType::Snack),
        tags: vec![],
    }
}

fn sample_pool() -> Vec<Recipe> {
    use SlotType::*;
    vec![
        recipe("b1", &[Breakfast], 10, &["Яйца", "Хляб"]),
        recipe("b2", &[Breakfast], 5, &["Овесени ядки", "Мляко"]),
        recipe("l1", &[Lunch], 15, &["Пиле", "Ориз"]),
        recipe("l2", &[Lunch, Dinner], 10, &["Леща", "Чесън"]),
        recipe("d1", &[Dinner], 15, &["Риба", "Картофи"]),
        recipe("d2", &[Dinner], 12, &["Боб", "Лук"]),
        recipe("s1", &[Snack], 5, &["Ябълка"]),
    ]
}

fn category(excluded: &[&str], include_snack: bool) -> SelectionStrategy {
    SelectionStrategy::CategoryFilter {
        excluded_products: excluded.iter().map(|s| s.to_string()).collect(),
        include_snack,
    }
}

#[test]
fn test_category_plan_covers_every_day_and_slot() {
    let pool = sample_pool();
    let constraints = Constraints::new(3, 3).with_selection(category(&[], true));
    let mut rng = StdRng::seed_from_u64(42);

    let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();

    assert_eq!(plan.len(), 12);
    let days = plan.by_day();
    assert_eq!(days.len(), 3);
    for (day, slots) in days.iter().enumerate() {
        let types: Vec<Option<SlotType>> = slots.iter().map(|s| s.slot_type).collect();
        assert_eq!(
            types,
            vec![
                Some(SlotType::Breakfast),
                Some(SlotType::Lunch),
                Some(SlotType::Dinner),
                Some(SlotType::Snack)
            ]
        );
        assert!(slots.iter().all(|s| s.day_index == day as u32));
        for slot in slots {
            assert!(slot.recipe.fits_slot(slot.slot_type.unwrap()));
        }
    }
}

#[test]
fn test_no_immediate_repeat_when_avoidable() {
    let pool = sample_pool();
    let constraints = Constraints::new(6, 3).with_selection(category(&[], false));

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();

        for slot_type in [SlotType::Breakfast, SlotType::Lunch, SlotType::Dinner] {
            let picks: Vec<&str> = plan
                .meals
                .iter()
                .filter(|s| s.slot_type == Some(slot_type))
                .map(|s| s.recipe.id.as_str())
                .collect();
            assert_eq!(picks.len(), 6);
            for pair in picks.windows(2) {
                assert_ne!(pair[0], pair[1], "{slot_type} repeated on seed {seed}");
            }
        }
    }
}

#[test]
fn test_single_candidate_repeats() {
    let pool = vec![recipe("only", &[SlotType::Breakfast], 5, &["Яйца"])];
    let constraints = Constraints::new(4, 1).with_selection(category(&[], false));
    let mut rng = StdRng::seed_from_u64(1);

    let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();

    assert_eq!(plan.len(), 4);
    assert!(plan.recipes().all(|r| r.id == "only"));
}

#[test]
fn test_empty_required_category_names_slot() {
    let pool = vec![
        recipe("b", &[SlotType::Breakfast], 5, &["Яйца"]),
        recipe("d", &[SlotType::Dinner], 5, &["Риба"]),
    ];
    let constraints = Constraints::new(2, 3).with_selection(category(&[], false));
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_meal_plan(&pool, &constraints, &mut rng).unwrap_err();

    assert!(matches!(
        err,
        PlanError::MissingSlotCandidates {
            slot: SlotType::Lunch
        }
    ));
    assert!(err.to_string().contains("lunch"));
}

#[test]
fn test_exclusion_is_case_insensitive() {
    let pool = sample_pool();
    let constraints = Constraints::new(5, 3).with_selection(category(&["чесън"], false));

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();
        assert!(plan.recipes().all(|r| r.id != "l2"));
    }
}

#[test]
fn test_prep_time_ceiling() {
    let pool = sample_pool();
    let constraints = Constraints::new(3, 3)
        .with_prep_time(PrepTimeLimit::Minutes(12))
        .with_selection(category(&[], false));
    let mut rng = StdRng::seed_from_u64(8);

    let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();

    assert!(plan.recipes().all(|r| r.prep_time <= 12));
}

#[test]
fn test_filters_removing_everything_fall_back_to_pool() {
    let pool = vec![
        recipe("b", &[SlotType::Breakfast], 50, &["Яйца"]),
        recipe("l", &[SlotType::Lunch], 50, &["Яйца"]),
    ];
    let constraints = Constraints::new(2, 2)
        .with_prep_time(PrepTimeLimit::Minutes(15))
        .with_selection(category(&["яйца"], false));
    let mut rng = StdRng::seed_from_u64(3);

    let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();

    assert_eq!(plan.len(), 4);
}

#[test]
fn test_allow_list_uses_every_recipe_before_repeating() {
    let pool = sample_pool();
    let ids = vec!["b1".to_string(), "l1".to_string(), "d2".to_string()];
    let constraints = Constraints::new(3, 2).with_selection(SelectionStrategy::ExplicitAllowList {
        recipe_ids: Some(ids.clone()),
    });
    let catalog = InMemoryCatalog::new(pool);

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_from_catalog(&catalog, &constraints, &mut rng).unwrap();

        assert_eq!(plan.len(), 6);
        let picked: Vec<&str> = plan.recipes().map(|r| r.id.as_str()).collect();
        assert!(picked.iter().all(|id| ids.iter().any(|i| i == id)));

        for round in picked.chunks(3) {
            let unique: HashSet<&str> = round.iter().copied().collect();
            assert_eq!(unique.len(), 3, "repeat within a round on seed {seed}");
        }

        let day_indices: Vec<u32> = plan.meals.iter().map(|s| s.day_index).collect();
        assert_eq!(day_indices, vec![0, 0, 1, 1, 2, 2]);
        assert!(plan.meals.iter().all(|s| s.slot_type.is_none()));
    }
}

#[test]
fn test_allow_list_without_ids_draws_whole_pool() {
    let pool = sample_pool();
    let constraints = Constraints::new(1, 7).with_selection(SelectionStrategy::ExplicitAllowList {
        recipe_ids: None,
    });
    let mut rng = StdRng::seed_from_u64(11);

    let plan = generate_meal_plan(&pool, &constraints, &mut rng).unwrap();

    let unique: HashSet<&str> = plan.recipes().map(|r| r.id.as_str()).collect();
    assert_eq!(unique.len(), 7);
}

#[test]
fn test_unknown_allow_list_ids_is_empty_pool() {
    let constraints = Constraints::new(1, 1).with_selection(SelectionStrategy::ExplicitAllowList {
        recipe_ids: Some(vec!["missing".to_string()]),
    });
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_meal_plan(&sample_pool(), &constraints, &mut rng).unwrap_err();
    assert!(matches!(err, PlanError::EmptyPool));
}

#[test]
fn test_invalid_constraints_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = generate_meal_plan(&sample_pool(), &Constraints::new(0, 1), &mut rng).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConstraints(_)));
}

#[test]
fn test_same_seed_same_plan() {
    let pool = sample_pool();
    let constraints = Constraints::new(4, 3).with_selection(category(&[], true));

    let first = generate_meal_plan(&pool, &constraints, &mut StdRng::seed_from_u64(5)).unwrap();
    let second = generate_meal_plan(&pool, &constraints, &mut StdRng::seed_from_u64(5)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_catalog_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonFileCatalog::new(dir.path().join("missing.json"));
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_from_catalog(&catalog, &Constraints::new(1, 1), &mut rng).unwrap_err();

    assert!(matches!(err, PlanError::CatalogUnavailable(_)));
}
