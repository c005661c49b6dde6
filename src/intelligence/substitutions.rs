// ABOUTME: Curated ingredient substitution catalog and missing-ingredient advisor
// ABOUTME: Suggests available stand-ins for a recipe's missing ingredients with a confidence score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::intelligence::scoring::missing_ingredients;
use crate::models::{Recipe, SubstitutionSuggestion};
use std::collections::{HashMap, HashSet};

/// Curated substitution table: ingredient -> ranked acceptable substitutes
///
/// Hand-maintained domain data, not derived from the co-occurrence graph.
/// Order within each entry reflects preference.
const SUBSTITUTION_TABLE: &[(&str, &[&str])] = &[
    // Protein substitutions
    ("chicken", &["turkey", "tofu", "fish", "shrimp", "tempeh"]),
    ("beef", &["lamb", "pork", "mushrooms", "tofu", "tempeh"]),
    ("pork", &["chicken", "turkey", "tofu", "mushrooms"]),
    ("fish", &["salmon", "tuna", "shrimp", "tofu"]),
    ("eggs", &["flax eggs", "chia eggs", "applesauce", "banana"]),
    ("bacon", &["turkey bacon", "mushrooms", "smoked tofu"]),
    (
        "ground beef",
        &["ground turkey", "ground chicken", "lentils", "mushrooms"],
    ),
    // Dairy substitutions
    ("milk", &["almond milk", "coconut milk", "oat milk", "soy milk"]),
    (
        "cheese",
        &["nutritional yeast", "cashew cream", "avocado", "vegan cheese"],
    ),
    ("butter", &["olive oil", "coconut oil", "avocado", "ghee"]),
    ("cream", &["coconut cream", "cashew cream", "almond milk"]),
    ("yogurt", &["coconut yogurt", "almond yogurt", "cashew cream"]),
    ("sour cream", &["cashew cream", "coconut cream", "greek yogurt"]),
    // Grain substitutions
    ("pasta", &["rice", "quinoa", "zucchini noodles", "spaghetti squash"]),
    ("rice", &["quinoa", "cauliflower rice", "barley", "bulgur"]),
    ("bread", &["lettuce wraps", "tortillas", "rice cakes"]),
    ("flour", &["almond flour", "coconut flour", "oat flour", "rice flour"]),
    // Vegetable substitutions
    ("onion", &["scallions", "leek", "shallots", "onion powder"]),
    ("garlic", &["garlic powder", "shallots", "chives"]),
    ("tomato", &["tomato sauce", "sun-dried tomatoes", "cherry tomatoes"]),
    ("potato", &["sweet potato", "cauliflower", "turnip"]),
    ("bell pepper", &["poblano pepper", "jalapeño", "cubanelle pepper"]),
    (
        "mushrooms",
        &["shiitake mushrooms", "portobello mushrooms", "oyster mushrooms"],
    ),
    // Oil substitutions
    ("olive oil", &["coconut oil", "avocado oil", "vegetable oil"]),
    ("vegetable oil", &["olive oil", "coconut oil", "avocado oil"]),
    ("sesame oil", &["olive oil", "coconut oil", "peanut oil"]),
    // Sauce substitutions
    ("soy sauce", &["tamari", "coconut aminos", "worcestershire sauce"]),
    ("fish sauce", &["soy sauce", "worcestershire sauce", "miso paste"]),
    ("oyster sauce", &["hoisin sauce", "soy sauce", "teriyaki sauce"]),
    ("teriyaki sauce", &["soy sauce", "hoisin sauce", "bbq sauce"]),
    ("hot sauce", &["sriracha", "chili powder", "cayenne pepper"]),
    // Spice substitutions
    ("ginger", &["ginger powder", "galangal", "lemongrass"]),
    ("salt", &["sea salt", "kosher salt", "soy sauce"]),
    ("black pepper", &["white pepper", "cayenne pepper", "paprika"]),
    // Herb substitutions
    ("basil", &["oregano", "thyme", "parsley"]),
    ("cilantro", &["parsley", "mint", "dill"]),
    ("parsley", &["cilantro", "chives", "dill"]),
    ("oregano", &["basil", "thyme", "marjoram"]),
    ("thyme", &["oregano", "rosemary", "sage"]),
    // Nut substitutions
    ("peanuts", &["almonds", "cashews", "walnuts"]),
    ("almonds", &["cashews", "walnuts", "pecans"]),
    ("walnuts", &["pecans", "almonds", "cashews"]),
    // Legume substitutions
    ("black beans", &["kidney beans", "pinto beans", "navy beans"]),
    ("chickpeas", &["white beans", "cannellini beans", "lentils"]),
    ("lentils", &["split peas", "chickpeas", "black beans"]),
    // Fruit substitutions
    ("lemon", &["lime", "vinegar", "citric acid"]),
    ("lime", &["lemon", "vinegar", "citric acid"]),
    ("apple", &["pear", "peach", "banana"]),
    ("banana", &["apple", "pear", "applesauce"]),
    // Special substitutions
    ("miso paste", &["soy sauce", "tamari", "nutritional yeast"]),
    ("tahini", &["peanut butter", "almond butter", "cashew butter"]),
    ("kimchi", &["sauerkraut", "pickled vegetables", "fermented vegetables"]),
    ("gochujang", &["sriracha", "hot sauce", "chili paste"]),
    ("coconut milk", &["almond milk", "oat milk", "heavy cream"]),
    ("coconut cream", &["heavy cream", "cashew cream", "coconut milk"]),
    // Sweetener substitutions
    ("sugar", &["honey", "maple syrup", "agave", "stevia"]),
    ("honey", &["maple syrup", "agave", "brown sugar"]),
    ("maple syrup", &["honey", "agave", "brown sugar"]),
    ("brown sugar", &["white sugar", "honey", "maple syrup"]),
    // Vinegar substitutions
    (
        "balsamic vinegar",
        &["red wine vinegar", "apple cider vinegar", "lemon juice"],
    ),
    (
        "rice vinegar",
        &["white vinegar", "apple cider vinegar", "lemon juice"],
    ),
    (
        "apple cider vinegar",
        &["white vinegar", "rice vinegar", "lemon juice"],
    ),
    // Broth substitutions
    ("chicken broth", &["vegetable broth", "beef broth", "water"]),
    ("beef broth", &["chicken broth", "vegetable broth", "water"]),
    ("vegetable broth", &["chicken broth", "water", "bouillon"]),
    // Wine substitutions
    ("wine", &["broth", "vinegar", "lemon juice"]),
    ("red wine", &["beef broth", "balsamic vinegar", "tomato juice"]),
    ("white wine", &["chicken broth", "white vinegar", "lemon juice"]),
];

/// Static mapping from an ingredient to its ranked acceptable substitutes
///
/// Built once at startup and read-only afterwards; safe to share across
/// concurrent queries.
#[derive(Debug, Clone)]
pub struct SubstitutionCatalog {
    map: HashMap<String, Vec<String>>,
}

impl Default for SubstitutionCatalog {
    fn default() -> Self {
        let map = SUBSTITUTION_TABLE
            .iter()
            .map(|(original, subs)| {
                (
                    (*original).to_string(),
                    subs.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect();
        Self { map }
    }
}

impl SubstitutionCatalog {
    /// Ranked substitutes for an ingredient; empty for unknown ingredients
    #[must_use]
    pub fn substitutes_for(&self, ingredient: &str) -> &[String] {
        self.map.get(ingredient).map_or(&[], Vec::as_slice)
    }

    /// Number of ingredients with substitution entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Recommends available substitutes for a recipe's missing ingredients
#[derive(Debug, Clone, Default)]
pub struct SubstitutionAdvisor {
    catalog: SubstitutionCatalog,
}

impl SubstitutionAdvisor {
    /// Create an advisor over a specific catalog
    #[must_use]
    pub const fn new(catalog: SubstitutionCatalog) -> Self {
        Self { catalog }
    }

    /// The underlying substitution catalog
    #[must_use]
    pub const fn catalog(&self) -> &SubstitutionCatalog {
        &self.catalog
    }

    /// Substitution suggestions for every missing ingredient that has at
    /// least one substitute present in `available`
    ///
    /// Missing ingredients without a catalog entry, or whose substitutes are
    /// all unavailable, are silently omitted. Confidence is the share of the
    /// ingredient's known substitutes the caller actually has.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn recommend(
        &self,
        recipe: &Recipe,
        available: &HashSet<String>,
    ) -> Vec<SubstitutionSuggestion> {
        let mut suggestions = Vec::new();

        for ingredient in missing_ingredients(recipe, available) {
            let known = self.catalog.substitutes_for(&ingredient);
            if known.is_empty() {
                continue;
            }

            let alternatives: Vec<String> = known
                .iter()
                .filter(|sub| available.contains(*sub))
                .cloned()
                .collect();
            if alternatives.is_empty() {
                continue;
            }

            let confidence = alternatives.len() as f64 / known.len() as f64;
            suggestions.push(SubstitutionSuggestion {
                original: ingredient,
                alternatives,
                confidence,
            });
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn available(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn chicken_with_turkey_on_hand_yields_one_third_confidence() {
        // three-substitute entry gives an exact 1/3 ratio
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        map.insert(
            "chicken".into(),
            vec!["turkey".into(), "tofu".into(), "fish".into()],
        );
        let advisor = SubstitutionAdvisor::new(SubstitutionCatalog { map });

        let recipe = Recipe::new(1, "Roast").with_ingredients(["chicken"]);
        let suggestions = advisor.recommend(&recipe, &available(&["turkey", "beef"]));

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].original, "chicken");
        assert_eq!(suggestions[0].alternatives, vec!["turkey"]);
        assert!((suggestions[0].confidence - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn alternatives_are_limited_to_available_ingredients() {
        let advisor = SubstitutionAdvisor::default();
        let recipe = Recipe::new(2, "Stir Fry").with_ingredients(["chicken", "soy sauce"]);
        let pantry = available(&["turkey", "tamari"]);

        for suggestion in advisor.recommend(&recipe, &pantry) {
            for alternative in &suggestion.alternatives {
                assert!(pantry.contains(alternative));
            }
        }
    }

    #[test]
    fn unknown_and_unsubstitutable_ingredients_are_omitted() {
        let advisor = SubstitutionAdvisor::default();
        // saffron has no catalog entry; chicken's substitutes are absent
        let recipe = Recipe::new(3, "Paella").with_ingredients(["saffron", "chicken"]);
        let suggestions = advisor.recommend(&recipe, &available(&["rice"]));
        assert!(suggestions.is_empty());
    }

    #[test]
    fn available_original_produces_no_suggestion() {
        let advisor = SubstitutionAdvisor::default();
        let recipe = Recipe::new(4, "Roast").with_ingredients(["chicken"]);
        // chicken itself is on hand, so nothing is missing
        let suggestions = advisor.recommend(&recipe, &available(&["chicken", "turkey"]));
        assert!(suggestions.is_empty());
    }

    #[test]
    fn substitute_order_follows_catalog_ranking() {
        let advisor = SubstitutionAdvisor::default();
        let recipe = Recipe::new(5, "Bake").with_ingredients(["milk"]);
        let pantry = available(&["oat milk", "almond milk"]);

        let suggestions = advisor.recommend(&recipe, &pantry);
        assert_eq!(suggestions.len(), 1);
        // catalog ranks almond milk before oat milk
        assert_eq!(
            suggestions[0].alternatives,
            vec!["almond milk", "oat milk"]
        );
        assert!((suggestions[0].confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_ingredient_lookup_is_empty_not_an_error() {
        let catalog = SubstitutionCatalog::default();
        assert!(catalog.substitutes_for("dragonfruit").is_empty());
        assert!(!catalog.is_empty());
    }
}
