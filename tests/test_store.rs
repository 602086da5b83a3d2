use kitchen_buddy::{
    parse_block, Error, IngredientUpdate, RecipeDraft, RecipeFilter, RecipeStore, RecipeUpdate,
};

fn draft(title: &str) -> RecipeDraft {
    RecipeDraft {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_insert_batch_reports_input_length() {
    let mut store = RecipeStore::open_in_memory().unwrap();
    let drafts = vec![draft("A"), draft("B"), draft("C")];
    assert_eq!(store.insert_batch(&drafts).unwrap(), 3);
    assert_eq!(store.recipe_count().unwrap(), 3);
}

#[test]
fn test_failed_batch_leaves_no_partial_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kitchen.db");
    let mut store = RecipeStore::open(&path).unwrap();

    // Hold an exclusive lock from a second connection so the batch's
    // transaction cannot write.
    let blocker = rusqlite::Connection::open(&path).unwrap();
    blocker.execute_batch("BEGIN EXCLUSIVE").unwrap();

    let result = store.insert_batch(&[draft("A"), draft("B")]);
    assert!(matches!(result, Err(Error::Database(_))));

    // With the lock released, no row from the failed batch is visible.
    blocker.execute_batch("COMMIT").unwrap();
    assert_eq!(store.recipe_count().unwrap(), 0);
}

#[test]
fn test_empty_batch_is_a_noop() {
    let mut store = RecipeStore::open_in_memory().unwrap();
    assert_eq!(store.insert_batch(&[]).unwrap(), 0);
    assert_eq!(store.recipe_count().unwrap(), 0);
}

#[test]
fn test_missing_title_defaults_to_untitled() {
    let store = RecipeStore::open_in_memory().unwrap();

    // Parsed record itself keeps the title absent; the default is applied
    // at insert time only.
    let parsed = parse_block("Ingredients: Flour");
    assert!(parsed.title.is_none());

    let id = store.insert_recipe(&parsed).unwrap();
    assert_eq!(store.recipe(id).unwrap().recipe_title, "Untitled");

    // An explicitly empty title gets the same treatment.
    let id = store.insert_recipe(&parse_block("Title:")).unwrap();
    assert_eq!(store.recipe(id).unwrap().recipe_title, "Untitled");
}

#[test]
fn test_missing_text_fields_default_to_empty() {
    let store = RecipeStore::open_in_memory().unwrap();
    let id = store.insert_recipe(&draft("Plain")).unwrap();
    let recipe = store.recipe(id).unwrap();
    assert_eq!(recipe.ingredients_required, "");
    assert_eq!(recipe.instructions, "");
    assert_eq!(recipe.taste_profile, "");
    assert_eq!(recipe.reviews, "");
    assert_eq!(recipe.cuisine_type, "");
    assert_eq!(recipe.additional_tags, "");
}

#[test]
fn test_unparseable_prep_time_stored_as_null() {
    let store = RecipeStore::open_in_memory().unwrap();

    let id = store
        .insert_recipe(&parse_block("Title: X\nPrepTime: abc"))
        .unwrap();
    assert_eq!(store.recipe(id).unwrap().preparation_time, None);

    let id = store
        .insert_recipe(&parse_block("Title: X\nPrepTime: 45"))
        .unwrap();
    assert_eq!(store.recipe(id).unwrap().preparation_time, Some(45));

    // Negative values pass through unvalidated.
    let id = store
        .insert_recipe(&parse_block("Title: X\nPrepTime: -5"))
        .unwrap();
    assert_eq!(store.recipe(id).unwrap().preparation_time, Some(-5));
}

#[test]
fn test_duplicate_titles_are_allowed() {
    let mut store = RecipeStore::open_in_memory().unwrap();
    store.insert_batch(&[draft("Same"), draft("Same")]).unwrap();
    let all = store.recipes(&RecipeFilter::default()).unwrap();
    assert_eq!(all.len(), 2);
    assert_ne!(all[0].recipe_id, all[1].recipe_id);
}

#[test]
fn test_recipe_not_found() {
    let mut store = RecipeStore::open_in_memory().unwrap();
    assert!(matches!(store.recipe(42), Err(Error::RecipeNotFound(42))));
    assert!(matches!(
        store.delete_recipe(42),
        Err(Error::RecipeNotFound(42))
    ));
    assert!(matches!(
        store.update_recipe(42, &RecipeUpdate::default()),
        Err(Error::RecipeNotFound(42))
    ));
}

#[test]
fn test_filters() {
    let mut store = RecipeStore::open_in_memory().unwrap();
    let blocks = "Title: Cake\nTaste: sweet\nCuisine: French\nPrepTime: 60\n\
                  Ingredients: Flour; Sugar\n\
                  ---\n\
                  Title: Curry\nTaste: spicy\nCuisine: Indian\nPrepTime: 30\n\
                  Ingredients: Rice; Lentils";
    store
        .insert_batch(&kitchen_buddy::split_blocks(blocks))
        .unwrap();

    let sweet = store
        .recipes(&RecipeFilter {
            taste_profile: Some("sweet".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(sweet.len(), 1);
    assert_eq!(sweet[0].recipe_title, "Cake");

    let quick = store
        .recipes(&RecipeFilter {
            max_prep_time: Some(40),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(quick.len(), 1);
    assert_eq!(quick[0].recipe_title, "Curry");

    let by_ingredient = store
        .recipes(&RecipeFilter {
            search: Some("Lentils".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_ingredient.len(), 1);

    let indian_sweet = store
        .recipes(&RecipeFilter {
            taste_profile: Some("sweet".to_string()),
            cuisine_type: Some("Indian".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert!(indian_sweet.is_empty());
}

#[test]
fn test_update_recipe_leaves_absent_fields_unchanged() {
    let store = RecipeStore::open_in_memory().unwrap();
    let id = store
        .insert_recipe(&parse_block("Title: Stew\nCuisine: Irish\nPrepTime: 90"))
        .unwrap();

    store
        .update_recipe(
            id,
            &RecipeUpdate {
                recipe_title: Some("Beef Stew".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let recipe = store.recipe(id).unwrap();
    assert_eq!(recipe.recipe_title, "Beef Stew");
    assert_eq!(recipe.cuisine_type, "Irish");
    assert_eq!(recipe.preparation_time, Some(90));
}

#[test]
fn test_ingredient_crud() {
    let store = RecipeStore::open_in_memory().unwrap();
    let id = store.add_ingredient("Flour", Some(2.0), Some("cups")).unwrap();
    store.add_ingredient("Eggs", None, None).unwrap();

    let all = store.ingredients().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].ingredient_name, "Flour");
    assert_eq!(all[1].quantity, None);

    store
        .update_ingredient(
            id,
            &IngredientUpdate {
                quantity: Some(3.5),
                unit: None,
            },
        )
        .unwrap();
    let updated = &store.ingredients().unwrap()[0];
    assert_eq!(updated.quantity, Some(3.5));
    assert_eq!(updated.unit.as_deref(), Some("cups"));

    store.delete_ingredient(id).unwrap();
    assert_eq!(store.ingredients().unwrap().len(), 1);
    assert!(matches!(
        store.delete_ingredient(id),
        Err(Error::IngredientNotFound(_))
    ));
}

#[test]
fn test_image_links() {
    let mut store = RecipeStore::open_in_memory().unwrap();
    let id = store.insert_recipe(&draft("Pie")).unwrap();

    store.attach_image(id, "images/pie-1.jpg").unwrap();
    store.attach_image(id, "images/pie-2.jpg").unwrap();
    assert_eq!(store.images(id).unwrap().len(), 2);

    // No dangling links to unknown recipes.
    assert!(matches!(
        store.attach_image(999, "images/nope.jpg"),
        Err(Error::RecipeNotFound(999))
    ));

    store.delete_recipe(id).unwrap();
    assert!(store.images(id).unwrap().is_empty());
}
