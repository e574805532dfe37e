use matkon_core::vocab::RECIPE_UNITS;
use matkon_core::{validate_draft, validate_extracted, DraftError, Ingredient, RecipeDraft};

fn draft_with_units(units: &[&str]) -> RecipeDraft {
    RecipeDraft {
        title: "תבשיל".to_string(),
        photo_url: String::new(),
        tags: vec!["כשר".to_string()],
        category: "ארוחת ערב".to_string(),
        difficulty: "בינוני".to_string(),
        prep_time: "45 דק".to_string(),
        steps: vec!["לבשל".to_string()],
        ingredients: units
            .iter()
            .enumerate()
            .map(|(i, unit)| Ingredient {
                name: format!("מרכיב {i}"),
                qty: 1.0,
                unit: unit.to_string(),
            })
            .collect(),
    }
}

#[test]
fn accepts_every_recipe_unit() {
    let draft = draft_with_units(RECIPE_UNITS);
    assert!(validate_draft(&draft).is_ok());
}

#[test]
fn accepts_empty_ingredient_list() {
    let draft = draft_with_units(&[]);
    assert!(validate_draft(&draft).is_ok());
}

#[test]
fn rejects_unknown_unit_and_names_the_offender() {
    let mut draft = draft_with_units(&["גרם"]);
    draft.ingredients.push(Ingredient {
        name: "אורז".to_string(),
        qty: 2.0,
        unit: "חבילה".to_string(),
    });

    match validate_draft(&draft).unwrap_err() {
        DraftError::InvalidUnit { unit, ingredient } => {
            assert_eq!(unit, "חבילה");
            assert_eq!(ingredient, "אורז");
        }
        other => panic!("expected InvalidUnit, got {other:?}"),
    }
}

#[test]
fn extraction_mode_rejects_cups() {
    // כוס is fine in a full recipe but not in extraction output.
    let cup = vec![Ingredient {
        name: "קמח".to_string(),
        qty: 1.0,
        unit: "כוס".to_string(),
    }];
    assert!(validate_draft(&draft_with_units(&["כוס"])).is_ok());
    assert!(matches!(
        validate_extracted(&cup),
        Err(DraftError::InvalidUnit { .. })
    ));
}
