use axum::response::IntoResponse;

use crate::template::{PageContext, Template};

pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
}

const SECTIONS: &[Section] = &[
    Section {
        title: "Our Vision",
        body: "To be the globally recognized benchmark for delivering the purest, most authentic, and innovative spice products that enrich culinary experiences worldwide. To be the most trusted name in the spice industry, known for our unwavering commitment to quality, purity, and sustainable practices from farm to table.",
    },
    Section {
        title: "Our Mission",
        body: "Weagle International is dedicated to manufacturing, supplying, and exporting a diverse range of premium pure and blended spices. We achieve this by upholding rigorous quality standards, leveraging our global market expertise, and fostering reliable, long-term relationships with our international customers.",
    },
    Section {
        title: "Our People",
        body: "Right from the Management level to the skilled R&D expert, every single person at Weagle International is well-aware of the predetermined quality policies and makes an attempt to be better each day. The factory workers and helping staff have become part of the process of growing together with sheer dedication towards work.",
    },
];

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub page: PageContext<'a>,
    pub sections: &'static [Section],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        page: template.context(),
        sections: SECTIONS,
    })
}
