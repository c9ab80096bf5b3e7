use axum::response::IntoResponse;
use strum::VariantArray;
use weagle_enquiry::Product;

use crate::routes::faq::{FAQS, Faq};
use crate::template::{PageContext, Template};

pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct Category {
    pub anchor: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
}

const RELIABILITY: &[Highlight] = &[
    Highlight {
        title: "Consistent Batch Quality",
        text: "You get consistent batch quality across orders.",
    },
    Highlight {
        title: "Confirmed Pricing",
        text: "You get pricing confirmed before production begins.",
    },
    Highlight {
        title: "Clear Timelines",
        text: "You get clear timelines you can plan around.",
    },
    Highlight {
        title: "Full Visibility",
        text: "You get full visibility from sourcing to shipment.",
    },
    Highlight {
        title: "Reliable Communication",
        text: "You get communication that does not disappear when issues arise.",
    },
];

const PROCESS: &[Highlight] = &[
    Highlight {
        title: "Specifications and Sample Approval",
        text: "You share your requirements. Samples and lab reports are prepared for approval.",
    },
    Highlight {
        title: "Controlled Production and Blending",
        text: "Production moves forward under defined standards with quality checks at every stage.",
    },
    Highlight {
        title: "Testing, Packing, and Documentation",
        text: "Each batch is tested, packed, and prepared with complete export documentation.",
    },
    Highlight {
        title: "On Time Shipping and Updates",
        text: "Orders ship on schedule with clear updates until delivery.",
    },
];

const CATEGORIES: &[Category] = &[
    Category {
        anchor: "blended",
        title: "Blended Spices",
        description: "Custom spice blends developed to precise specifications with controlled batch consistency.",
    },
    Category {
        anchor: "pure",
        title: "Pure Spice Powders",
        description: "Single ingredient spice powders processed, tested, and packed for export scale supply.",
    },
    Category {
        anchor: "seasonings",
        title: "Seasonings",
        description: "Functional seasoning mixes prepared for bulk supply and private label requirements.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Weagle International has been our trusted spice supplier for three years. Consistent quality and reliable delivery have eliminated our supply chain concerns.",
        name: "Rajesh Kumar",
        title: "Supply Chain Director",
        company: "Global Foods Distribution",
    },
    Testimonial {
        quote: "Their batch consistency and compliance documentation meet our strict quality standards. We have not experienced a single quality issue in 24 months.",
        name: "Maria Santos",
        title: "Quality Assurance Manager",
        company: "Premium Spice Importers",
    },
    Testimonial {
        quote: "Pricing transparency and on-time shipments allow us to plan inventory with confidence. A reliable export partner for our private label business.",
        name: "David Chen",
        title: "Operations Director",
        company: "Culinary Brands Inc",
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub page: PageContext<'a>,
    pub reliability: &'static [Highlight],
    pub process: &'static [Highlight],
    pub categories: &'static [Category],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [Faq],
    pub products: &'static [Product],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        page: template.context(),
        reliability: RELIABILITY,
        process: PROCESS,
        categories: CATEGORIES,
        testimonials: TESTIMONIALS,
        faqs: FAQS,
        products: Product::VARIANTS,
    })
}
