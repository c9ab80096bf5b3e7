use axum::response::IntoResponse;
use strum::VariantArray;
use weagle_enquiry::Product;

use crate::template::{PageContext, Template};

pub struct ProductGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct ProductCategory {
    pub anchor: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub groups: &'static [ProductGroup],
}

const CATALOGUE: &[ProductCategory] = &[
    ProductCategory {
        anchor: "pure",
        title: "Pure Spices",
        description: "Single-ingredient spices sourced directly from Indian farms, processed and tested to meet international quality and compliance standards.",
        groups: &[ProductGroup {
            title: "",
            items: &[
                "Turmeric Powder",
                "Coriander Powder",
                "Red Chilli Powder",
                "Kashmiri Red Chilli Powder",
                "Garlic Powder",
                "Red Onion Powder",
                "Cumin Powder",
                "Dry Ginger Powder",
                "Dry Mango Powder",
                "Black Pepper Powder",
                "White Pepper Powder",
                "Black Pepper Powder – Compounded",
                "White Pepper Powder – Compounded",
            ],
        }],
    },
    ProductCategory {
        anchor: "blended",
        title: "Blended Spices & Masalas",
        description: "Traditional and custom spice blends prepared under defined formulations to ensure batch consistency and export reliability.",
        groups: &[
            ProductGroup {
                title: "Classic & Kitchen Masalas",
                items: &[
                    "Curry Powder",
                    "Kitchen King Masala",
                    "Garam Masala",
                    "Garam Masala – No Onion No Garlic",
                ],
            },
            ProductGroup {
                title: "Chicken, Meat & Regional Masalas",
                items: &[
                    "Chicken Masala",
                    "Chicken Masala – Classic",
                    "Butter Chicken Masala",
                    "Meat Masala",
                    "Mutton Masala",
                    "Kadai Veg Masala",
                    "Kadai Chicken Masala",
                ],
            },
            ProductGroup {
                title: "Specialty & Export Blends",
                items: &[
                    "Chaat Masala",
                    "Channa Masala",
                    "Biryani Masala",
                    "Fish & Prawn Biryani Masala",
                    "Tandoori Masala – Classic",
                    "Tandoori Masala – Tikka / Kabab",
                    "Chilli 65 Masala (Veg / Non-Veg)",
                    "Pepper Masala (Veg / Non-Veg)",
                ],
            },
        ],
    },
    ProductCategory {
        anchor: "seasonings",
        title: "Seasonings & Pastes",
        description: "Export-ready seasonings and pastes developed for international foodservice, QSR, and private-label brands.",
        groups: &[ProductGroup {
            title: "",
            items: &[
                "Ginger Garlic Paste",
                "Mixed Herbs Seasoning",
                "Noodles Masala Seasoning",
                "Pizza & Garlic Bread Seasoning",
                "Taco Seasoning",
                "Peri Peri Seasoning Mix – Hot",
                "Peri Peri Seasoning Mix – Mild",
                "Pasta Seasoning – Curry Flavour",
                "Mexican Popcorn Cheese Seasoning",
            ],
        }],
    },
];

#[derive(askama::Template)]
#[template(path = "products.html")]
pub struct ProductsTemplate<'a> {
    pub page: PageContext<'a>,
    pub catalogue: &'static [ProductCategory],
    pub products: &'static [Product],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ProductsTemplate {
        page: template.context(),
        catalogue: CATALOGUE,
        products: Product::VARIANTS,
    })
}
