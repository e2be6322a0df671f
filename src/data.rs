//! Built-in fast-food menu and daily nutrient minimums.
//!
//! Every item carries six attributes: price in dollars, then calories (kcal), total
//! fat (g), sodium (mg), carbohydrates (g) and protein (g). The minimums follow the
//! same nutrient order.

use crate::models::{Catalog, CatalogItem, ConfigurationError, ConstraintSet, NutrientMinimum};

/// Names of the nutrient attributes, in attribute order after the price.
pub const NUTRIENTS: [&str; 5] = [
    "Calories (kcal)",
    "Total Fat (g)",
    "Sodium (mg)",
    "Carbohydrates (g)",
    "Protein (g)",
];

const MINIMUMS: [f64; 5] = [1670.0, 60.0, 3820.0, 220.0, 70.0];

const MENU: [(&str, [f64; 6]); 91] = [
    ("Egg McMuffin", [4.48, 300.0, 13.0, 750.0, 31.0, 17.0]),
    ("Egg White Delight", [3.9, 250.0, 8.0, 770.0, 30.0, 18.0]),
    ("Sausage McMuffin", [2.09, 370.0, 23.0, 780.0, 29.0, 14.0]),
    ("Sausage McMuffin with Egg", [3.76, 450.0, 28.0, 860.0, 30.0, 21.0]),
    ("Sausage McMuffin with Egg Whites", [3.76, 400.0, 23.0, 880.0, 30.0, 21.0]),
    ("Steak & Egg McMuffin", [3.99, 430.0, 23.0, 960.0, 31.0, 26.0]),
    ("Bacon, Egg & Cheese Biscuit (Regular Biscuit)", [4.61, 460.0, 26.0, 1300.0, 38.0, 19.0]),
    ("Bacon, Egg & Cheese Biscuit (Large Biscuit)", [5.2, 520.0, 30.0, 1410.0, 43.0, 19.0]),
    ("Bacon, Egg & Cheese Biscuit with Egg Whites (Regular Biscuit)", [4.61, 410.0, 20.0, 1300.0, 36.0, 20.0]),
    ("Bacon, Egg & Cheese Biscuit with Egg Whites (Large Biscuit)", [5.2, 470.0, 25.0, 1420.0, 42.0, 20.0]),
    ("Sausage Biscuit (Regular Biscuit)", [2.01, 430.0, 27.0, 1080.0, 34.0, 11.0]),
    ("Sausage Biscuit (Large Biscuit)", [3.9, 480.0, 31.0, 1190.0, 39.0, 11.0]),
    ("Sausage Biscuit with Egg (Regular Biscuit)", [4.22, 510.0, 33.0, 1170.0, 36.0, 18.0]),
    ("Sausage Biscuit with Egg (Large Biscuit)", [5.4, 570.0, 37.0, 1280.0, 42.0, 18.0]),
    ("Sausage Biscuit with Egg Whites (Regular Biscuit)", [4.22, 460.0, 27.0, 1180.0, 34.0, 18.0]),
    ("Sausage Biscuit with Egg Whites (Large Biscuit)", [5.4, 520.0, 32.0, 1290.0, 40.0, 18.0]),
    ("Southern Style Chicken Biscuit (Regular Biscuit)", [4.22, 410.0, 20.0, 1180.0, 41.0, 17.0]),
    ("Southern Style Chicken Biscuit (Large Biscuit)", [5.4, 470.0, 24.0, 1290.0, 46.0, 17.0]),
    ("Bacon, Egg & Cheese McGriddles", [4.64, 460.0, 21.0, 1250.0, 48.0, 19.0]),
    ("Bacon, Egg & Cheese McGriddles with Egg Whites", [4.64, 400.0, 15.0, 1250.0, 47.0, 20.0]),
    ("Sausage McGriddles", [3.21, 420.0, 22.0, 1030.0, 44.0, 11.0]),
    ("Sausage, Egg & Cheese McGriddles", [4.63, 550.0, 31.0, 1320.0, 48.0, 20.0]),
    ("Sausage, Egg & Cheese McGriddles with Egg Whites", [4.63, 500.0, 26.0, 1320.0, 46.0, 21.0]),
    ("Bacon, Egg & Cheese Bagel", [4.81, 620.0, 31.0, 1480.0, 57.0, 30.0]),
    ("Bacon, Egg & Cheese Bagel with Egg Whites", [4.81, 570.0, 25.0, 1480.0, 55.0, 30.0]),
    ("Steak, Egg & Cheese Bagel", [5.51, 670.0, 35.0, 1510.0, 56.0, 33.0]),
    ("Big Breakfast (Regular Biscuit)", [5.32, 740.0, 48.0, 1560.0, 51.0, 28.0]),
    ("Big Breakfast with Hotcakes (Regular Biscuit)", [6.69, 1090.0, 56.0, 2150.0, 111.0, 36.0]),
    ("Hotcakes", [4.2, 350.0, 9.0, 590.0, 60.0, 8.0]),
    ("Hotcakes and Sausage", [4.88, 520.0, 24.0, 930.0, 61.0, 15.0]),
    ("Sausage Burrito", [6.98, 300.0, 16.0, 790.0, 26.0, 12.0]),
    ("Hash Brown", [1.6, 150.0, 9.0, 310.0, 15.0, 1.0]),
    ("Cinnamon Melts", [1.8, 460.0, 19.0, 370.0, 66.0, 6.0]),
    ("Fruit & Maple Oatmeal", [3.66, 290.0, 4.0, 160.0, 58.0, 5.0]),
    ("Fruit & Maple Oatmeal without Brown Sugar", [3.66, 260.0, 4.0, 115.0, 49.0, 5.0]),
    ("Big Mac", [5.53, 530.0, 27.0, 960.0, 47.0, 24.0]),
    ("Quarter Pounder with Cheese", [5.65, 520.0, 26.0, 1100.0, 41.0, 30.0]),
    ("Quarter Pounder with Bacon & Cheese", [6.3, 600.0, 29.0, 1440.0, 48.0, 37.0]),
    ("Quarter Pounder with Bacon Habanero Ranch", [8.61, 610.0, 31.0, 1180.0, 46.0, 37.0]),
    ("Quarter Pounder Deluxe", [9.61, 540.0, 27.0, 960.0, 45.0, 29.0]),
    ("Double Quarter Pounder with Cheese", [11.12, 750.0, 43.0, 1280.0, 42.0, 48.0]),
    ("Hamburger", [1.62, 240.0, 8.0, 480.0, 32.0, 12.0]),
    ("Cheeseburger", [1.88, 290.0, 11.0, 680.0, 33.0, 15.0]),
    ("Double Cheeseburger", [5.99, 430.0, 21.0, 1040.0, 35.0, 24.0]),
    ("Bacon Clubhouse Burger", [6.99, 720.0, 40.0, 1470.0, 51.0, 39.0]),
    ("McDouble", [2.6, 380.0, 17.0, 840.0, 34.0, 22.0]),
    ("Bacon McDouble", [3.37, 440.0, 22.0, 1110.0, 35.0, 27.0]),
    ("Daily Double", [3.34, 430.0, 22.0, 760.0, 34.0, 22.0]),
    ("Jalapeno Double", [4.34, 430.0, 23.0, 1030.0, 35.0, 22.0]),
    ("McRib", [4.5, 500.0, 26.0, 980.0, 44.0, 22.0]),
    ("Premium Crispy Chicken Classic Sandwich", [5.17, 510.0, 22.0, 990.0, 55.0, 24.0]),
    ("Premium Grilled Chicken Classic Sandwich", [5.17, 350.0, 9.0, 820.0, 42.0, 28.0]),
    ("Premium Crispy Chicken Club Sandwich", [5.17, 670.0, 33.0, 1410.0, 58.0, 36.0]),
    ("Premium Grilled Chicken Club Sandwich", [5.17, 510.0, 20.0, 1250.0, 44.0, 40.0]),
    ("Premium Crispy Chicken Ranch BLT Sandwich", [6.14, 610.0, 28.0, 1400.0, 57.0, 32.0]),
    ("Premium Grilled Chicken Ranch BLT Sandwich", [6.14, 450.0, 15.0, 1230.0, 43.0, 36.0]),
    ("Bacon Clubhouse Crispy Chicken Sandwich", [7.14, 750.0, 38.0, 1720.0, 65.0, 36.0]),
    ("Bacon Clubhouse Grilled Chicken Sandwich", [7.14, 590.0, 25.0, 1560.0, 51.0, 40.0]),
    ("Southern Style Crispy Chicken Sandwich", [6.78, 430.0, 19.0, 910.0, 43.0, 21.0]),
    ("McChicken", [2.08, 360.0, 16.0, 800.0, 40.0, 14.0]),
    ("Bacon Cheddar McChicken", [3.18, 480.0, 24.0, 1260.0, 43.0, 22.0]),
    ("Bacon Buffalo Ranch McChicken", [3.77, 430.0, 21.0, 1260.0, 41.0, 20.0]),
    ("Buffalo Ranch McChicken", [2.98, 360.0, 16.0, 990.0, 40.0, 14.0]),
    ("Chicken McNuggets (4 piece)", [2.64, 190.0, 12.0, 360.0, 12.0, 9.0]),
    ("Chicken McNuggets (6 piece)", [3.62, 280.0, 18.0, 540.0, 18.0, 13.0]),
    ("Chicken McNuggets (10 piece)", [6.72, 470.0, 30.0, 900.0, 30.0, 22.0]),
    ("Chicken McNuggets (20 piece)", [6.99, 940.0, 59.0, 1800.0, 59.0, 44.0]),
    ("Chicken McNuggets (40 piece)", [13.35, 1880.0, 118.0, 3600.0, 118.0, 87.0]),
    ("Filet-O-Fish", [4.98, 390.0, 19.0, 590.0, 39.0, 15.0]),
    ("Premium Bacon Ranch Salad (without Chicken)", [5.13, 140.0, 7.0, 300.0, 10.0, 9.0]),
    ("Premium Bacon Ranch Salad with Crispy Chicken", [6.45, 380.0, 21.0, 860.0, 22.0, 25.0]),
    ("Premium Bacon Ranch Salad with Grilled Chicken", [6.46, 220.0, 8.0, 690.0, 8.0, 29.0]),
    ("Premium Southwest Salad (without Chicken)", [5.19, 140.0, 4.5, 150.0, 20.0, 6.0]),
    ("Premium Southwest Salad with Crispy Chicken", [6.47, 450.0, 22.0, 850.0, 42.0, 23.0]),
    ("Premium Southwest Salad with Grilled Chicken", [6.89, 290.0, 8.0, 680.0, 28.0, 27.0]),
    ("Chipotle BBQ Snack Wrap (Crispy Chicken)", [2.39, 340.0, 15.0, 780.0, 37.0, 14.0]),
    ("Chipotle BBQ Snack Wrap (Grilled Chicken)", [2.43, 260.0, 8.0, 700.0, 30.0, 16.0]),
    ("Honey Mustard Snack Wrap (Crispy Chicken)", [2.39, 330.0, 15.0, 730.0, 34.0, 14.0]),
    ("Honey Mustard Snack Wrap (Grilled Chicken)", [2.43, 250.0, 8.0, 650.0, 27.0, 16.0]),
    ("Ranch Snack Wrap (Crispy Chicken)", [2.39, 360.0, 20.0, 810.0, 32.0, 15.0]),
    ("Ranch Snack Wrap (Grilled Chicken)", [2.43, 280.0, 13.0, 720.0, 25.0, 16.0]),
    ("Small French Fries", [2.34, 230.0, 11.0, 130.0, 30.0, 2.0]),
    ("Medium French Fries", [2.77, 340.0, 16.0, 190.0, 44.0, 4.0]),
    ("Large French Fries", [3.57, 510.0, 24.0, 290.0, 67.0, 6.0]),
    ("Side Salad", [2.46, 20.0, 0.0, 10.0, 4.0, 1.0]),
    ("Apple Slices", [0.89, 15.0, 0.0, 0.0, 4.0, 0.0]),
    ("Fruit 'n Yogurt Parfait", [2.12, 150.0, 2.0, 70.0, 30.0, 4.0]),
    ("Baked Apple Pie", [1.09, 250.0, 13.0, 170.0, 32.0, 2.0]),
    ("Chocolate Chip Cookie", [0.88, 160.0, 8.0, 90.0, 21.0, 2.0]),
    ("Hot Fudge Sundae", [2.83, 330.0, 9.0, 170.0, 53.0, 8.0]),
    ("Strawberry Sundae", [2.14, 280.0, 6.0, 85.0, 49.0, 6.0]),
];

/// The built-in menu as a validated catalog.
pub fn catalog() -> Result<Catalog, ConfigurationError> {
    Catalog::new(
        MENU.iter()
            .map(|(name, attributes)| CatalogItem::new(*name, attributes.to_vec()))
            .collect(),
    )
}

/// Daily nutrient minimums matching [`catalog`].
pub fn constraints() -> ConstraintSet {
    ConstraintSet::new(
        NUTRIENTS
            .iter()
            .zip(MINIMUMS)
            .map(|(name, minimum)| NutrientMinimum::new(*name, minimum))
            .collect(),
    )
}
