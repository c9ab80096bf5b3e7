pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What is your minimum order quantity (MOQ)?",
        answer: "Our MOQ varies by product category. For blended spices, it's typically 500 kg per SKU. For pure spice powders, it's 1000 kg per variety. We can discuss flexible arrangements for trial orders.",
    },
    Faq {
        question: "What are your payment terms?",
        answer: "We work with 30% advance and 70% before shipment for new clients. Once we establish a relationship, we can discuss flexible terms including LC for larger orders. All pricing is confirmed upfront.",
    },
    Faq {
        question: "Can you customize spice blends to my specifications?",
        answer: "Yes, absolutely. We specialize in custom blends developed to your exact specifications. Share your requirements, and we'll prepare samples for approval with strict batch consistency across all future orders.",
    },
    Faq {
        question: "How long does it take from order to delivery?",
        answer: "Total timeline is 4-6 weeks: 10-15 days for production after sample approval, plus shipping (15-20 days to USA/EU, 7-10 days to Middle East, 20-25 days to Africa). We provide clear timelines and updates at every stage.",
    },
    Faq {
        question: "What happens if there's a quality issue with my shipment?",
        answer: "We take full responsibility for quality issues. If a problem arises, we respond immediately with replacement shipments, refunds, or solutions. Our goal is long-term partnerships, not one-time transactions.",
    },
    Faq {
        question: "Do you provide samples before I place a bulk order?",
        answer: "Yes, we provide samples with lab reports for evaluation. We'll send samples within 3-5 business days and provide a detailed quote within 24 hours.",
    },
];
