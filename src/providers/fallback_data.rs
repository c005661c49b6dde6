// ABOUTME: Bundled recipe dataset used when no remote catalog is reachable
// ABOUTME: Thirty-five recipes across cuisines, mirroring the production seed data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorGraph Contributors

use crate::models::{Difficulty, Recipe};

/// The bundled recipe dataset, in catalog order
#[must_use]
pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Classic Spaghetti Carbonara")
            .with_ingredients(["pasta", "eggs", "bacon", "parmesan", "black pepper"])
            .with_difficulty(Difficulty::Medium)
            .with_time(30)
            .with_cuisine("italian"),
        Recipe::new(2, "Margherita Pizza")
            .with_ingredients(["pizza dough", "tomato sauce", "mozzarella", "basil", "olive oil"])
            .with_difficulty(Difficulty::Medium)
            .with_time(40)
            .with_cuisine("italian"),
        Recipe::new(3, "Chicken Parmesan")
            .with_ingredients([
                "chicken breast",
                "breadcrumbs",
                "eggs",
                "tomato sauce",
                "mozzarella",
                "parmesan",
            ])
            .with_difficulty(Difficulty::Medium)
            .with_time(45)
            .with_cuisine("italian"),
        Recipe::new(4, "Chicken Stir Fry")
            .with_ingredients(["chicken", "bell pepper", "onion", "garlic", "soy sauce", "oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(20)
            .with_cuisine("asian"),
        Recipe::new(5, "Beef and Broccoli")
            .with_ingredients(["beef", "broccoli", "garlic", "ginger", "soy sauce", "oyster sauce"])
            .with_difficulty(Difficulty::Easy)
            .with_time(25)
            .with_cuisine("asian"),
        Recipe::new(6, "Chicken Fried Rice")
            .with_ingredients(["rice", "chicken", "eggs", "peas", "carrot", "soy sauce", "oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(30)
            .with_cuisine("asian"),
        Recipe::new(7, "Pad Thai")
            .with_ingredients([
                "rice noodles",
                "shrimp",
                "eggs",
                "bean sprouts",
                "peanuts",
                "fish sauce",
            ])
            .with_difficulty(Difficulty::Medium)
            .with_time(30)
            .with_cuisine("asian"),
        Recipe::new(8, "Beef Tacos")
            .with_ingredients(["ground beef", "tortillas", "lettuce", "tomato", "cheese", "onion"])
            .with_difficulty(Difficulty::Easy)
            .with_time(25)
            .with_cuisine("mexican"),
        Recipe::new(9, "Chicken Quesadillas")
            .with_ingredients(["chicken", "tortillas", "cheese", "bell pepper", "onion", "oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(20)
            .with_cuisine("mexican"),
        Recipe::new(10, "Beef Burritos")
            .with_ingredients(["ground beef", "tortillas", "rice", "beans", "cheese", "sour cream"])
            .with_difficulty(Difficulty::Easy)
            .with_time(30)
            .with_cuisine("mexican"),
        Recipe::new(11, "Vegetable Curry")
            .with_ingredients(["potato", "carrot", "onion", "coconut milk", "curry powder", "garlic"])
            .with_difficulty(Difficulty::Medium)
            .with_time(35)
            .with_cuisine("indian"),
        Recipe::new(12, "Chicken Tikka Masala")
            .with_ingredients(["chicken", "yogurt", "tomato sauce", "garlic", "ginger", "garam masala"])
            .with_difficulty(Difficulty::Medium)
            .with_time(50)
            .with_cuisine("indian"),
        Recipe::new(13, "Dal Tadka")
            .with_ingredients(["lentils", "onion", "garlic", "cumin", "turmeric", "oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(30)
            .with_cuisine("indian"),
        Recipe::new(14, "Caesar Salad")
            .with_ingredients(["lettuce", "croutons", "parmesan", "lemon", "garlic", "olive oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(15)
            .with_cuisine("american"),
        Recipe::new(15, "Beef Burger")
            .with_ingredients(["ground beef", "burger bun", "lettuce", "tomato", "onion", "cheese"])
            .with_difficulty(Difficulty::Easy)
            .with_time(20)
            .with_cuisine("american"),
        Recipe::new(16, "Chicken Noodle Soup")
            .with_ingredients(["chicken", "noodles", "carrot", "celery", "onion", "garlic"])
            .with_difficulty(Difficulty::Easy)
            .with_time(30)
            .with_cuisine("american"),
        Recipe::new(17, "Mac and Cheese")
            .with_ingredients(["pasta", "cheese", "milk", "butter", "flour", "breadcrumbs"])
            .with_difficulty(Difficulty::Easy)
            .with_time(35)
            .with_cuisine("american"),
        Recipe::new(18, "Greek Salad")
            .with_ingredients(["tomato", "cucumber", "olives", "feta cheese", "olive oil", "oregano"])
            .with_difficulty(Difficulty::Easy)
            .with_time(15)
            .with_cuisine("mediterranean"),
        Recipe::new(19, "Hummus")
            .with_ingredients(["chickpeas", "tahini", "lemon", "garlic", "olive oil", "cumin"])
            .with_difficulty(Difficulty::Easy)
            .with_time(15)
            .with_cuisine("mediterranean"),
        Recipe::new(20, "Falafel")
            .with_ingredients(["chickpeas", "onion", "garlic", "parsley", "cumin", "flour"])
            .with_difficulty(Difficulty::Medium)
            .with_time(40)
            .with_cuisine("mediterranean"),
        Recipe::new(21, "Green Curry")
            .with_ingredients([
                "chicken",
                "green curry paste",
                "coconut milk",
                "eggplant",
                "basil",
                "fish sauce",
            ])
            .with_difficulty(Difficulty::Medium)
            .with_time(30)
            .with_cuisine("thai"),
        Recipe::new(22, "Tom Yum Soup")
            .with_ingredients(["shrimp", "lemongrass", "lime", "chili", "mushrooms", "fish sauce"])
            .with_difficulty(Difficulty::Medium)
            .with_time(25)
            .with_cuisine("thai"),
        Recipe::new(23, "Kung Pao Chicken")
            .with_ingredients(["chicken", "peanuts", "bell pepper", "chili", "soy sauce", "vinegar"])
            .with_difficulty(Difficulty::Medium)
            .with_time(25)
            .with_cuisine("chinese"),
        Recipe::new(24, "Sweet and Sour Chicken")
            .with_ingredients(["chicken", "bell pepper", "pineapple", "vinegar", "sugar", "ketchup"])
            .with_difficulty(Difficulty::Medium)
            .with_time(30)
            .with_cuisine("chinese"),
        Recipe::new(25, "Chicken Teriyaki")
            .with_ingredients(["chicken", "teriyaki sauce", "garlic", "ginger", "sesame seeds"])
            .with_difficulty(Difficulty::Easy)
            .with_time(25)
            .with_cuisine("japanese"),
        Recipe::new(26, "Tempura")
            .with_ingredients(["shrimp", "flour", "eggs", "oil", "dipping sauce", "vegetables"])
            .with_difficulty(Difficulty::Medium)
            .with_time(30)
            .with_cuisine("japanese"),
        Recipe::new(27, "Bulgogi")
            .with_ingredients(["beef", "soy sauce", "garlic", "ginger", "sesame oil", "pear"])
            .with_difficulty(Difficulty::Easy)
            .with_time(30)
            .with_cuisine("korean"),
        Recipe::new(28, "Kimchi Fried Rice")
            .with_ingredients(["rice", "kimchi", "eggs", "green onions", "soy sauce", "oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(20)
            .with_cuisine("korean"),
        Recipe::new(29, "Fish and Chips")
            .with_ingredients(["fish", "potato", "flour", "oil", "lemon", "salt"])
            .with_difficulty(Difficulty::Medium)
            .with_time(45)
            .with_cuisine("british"),
        Recipe::new(30, "Shepherd's Pie")
            .with_ingredients(["ground lamb", "potato", "onion", "carrot", "peas", "gravy"])
            .with_difficulty(Difficulty::Medium)
            .with_time(60)
            .with_cuisine("british"),
        Recipe::new(31, "Paella")
            .with_ingredients(["rice", "chicken", "shrimp", "saffron", "bell pepper", "onion"])
            .with_difficulty(Difficulty::Hard)
            .with_time(50)
            .with_cuisine("spanish"),
        Recipe::new(32, "Gazpacho")
            .with_ingredients(["tomato", "cucumber", "bell pepper", "onion", "garlic", "olive oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(20)
            .with_cuisine("spanish"),
        Recipe::new(33, "Vegetarian Chili")
            .with_ingredients(["beans", "tomato", "onion", "bell pepper", "chili powder", "garlic"])
            .with_difficulty(Difficulty::Easy)
            .with_time(40)
            .with_cuisine("vegetarian"),
        Recipe::new(34, "Quinoa Salad")
            .with_ingredients(["quinoa", "cucumber", "tomato", "onion", "lemon", "olive oil"])
            .with_difficulty(Difficulty::Easy)
            .with_time(25)
            .with_cuisine("vegetarian"),
        Recipe::new(35, "Veggie Burger")
            .with_ingredients(["black beans", "oats", "onion", "garlic", "spices", "egg"])
            .with_difficulty(Difficulty::Medium)
            .with_time(35)
            .with_cuisine("vegetarian"),
    ]
}
