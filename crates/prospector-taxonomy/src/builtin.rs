//! Built-in sector/vertical catalog.
//!
//! Static data, converted into owned [`IndustrySector`] values on demand so
//! callers can hand the result to [`crate::IndustryTaxonomyIndex::new`] or
//! substitute their own catalog.

use prospector_core::{IndustrySector, IndustryVertical, OpportunityTier};

struct SectorDef {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    verticals: &'static [VerticalDef],
}

struct VerticalDef {
    id: &'static str,
    name: &'static str,
    keywords: &'static [&'static str],
    examples: &'static [&'static str],
    tier: OpportunityTier,
}

const CATALOG: &[SectorDef] = &[
    SectorDef {
        id: "food-beverage",
        name: "Food & Beverage",
        icon: "utensils",
        verticals: &[
            VerticalDef {
                id: "fast-casual-qsr",
                name: "Fast Casual & QSR Dining",
                keywords: &["qsr", "quick service", "drive-thru", "franchise", "fast food"],
                examples: &["Chick-fil-A", "Chipotle", "Zaxby's", "Raising Cane's"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "craft-beverage",
                name: "Craft Beer, Wine & Spirits",
                keywords: &["brewery", "distillery", "winery", "taproom"],
                examples: &["SweetWater Brewing", "Sierra Nevada", "Tito's Handmade Vodka"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "specialty-grocery",
                name: "Specialty & Natural Grocery",
                keywords: &["organic", "natural foods", "co-op", "grocer"],
                examples: &["Sprouts Farmers Market", "Natural Grocers", "Fresh Thyme"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "food-distribution",
                name: "Foodservice Distribution",
                keywords: &["broadline", "cold chain", "foodservice", "wholesale"],
                examples: &["Sysco", "US Foods", "Performance Food Group"],
                tier: OpportunityTier::Low,
            },
        ],
    },
    SectorDef {
        id: "healthcare",
        name: "Healthcare & Life Sciences",
        icon: "heart-pulse",
        verticals: &[
            VerticalDef {
                id: "healthcare-it",
                name: "Healthcare IT",
                keywords: &["ehr", "emr", "telehealth", "revenue cycle", "hipaa"],
                examples: &["Epic Systems", "Athenahealth", "Veradigm"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "outpatient-clinics",
                name: "Outpatient & Urgent Care Clinics",
                keywords: &["urgent care", "ambulatory", "walk-in clinic"],
                examples: &["Piedmont Urgent Care", "MedExpress", "CareNow"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "senior-living",
                name: "Senior Living & Home Health",
                keywords: &["assisted living", "memory care", "home health", "hospice"],
                examples: &["Brookdale Senior Living", "Amedisys", "Sunrise Senior Living"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "dental-groups",
                name: "Dental Service Organizations",
                keywords: &["dso", "orthodontics", "dental practice"],
                examples: &["Heartland Dental", "Aspen Dental", "Pacific Dental Services"],
                tier: OpportunityTier::Low,
            },
        ],
    },
    SectorDef {
        id: "technology",
        name: "Technology",
        icon: "cpu",
        verticals: &[
            VerticalDef {
                id: "cybersecurity",
                name: "Cybersecurity",
                keywords: &["infosec", "soc", "zero trust", "endpoint", "mssp"],
                examples: &["CrowdStrike", "Secureworks", "Palo Alto Networks"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "vertical-saas",
                name: "Vertical SaaS",
                keywords: &["subscription software", "industry cloud", "b2b saas"],
                examples: &["Toast", "ServiceTitan", "Procore"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "managed-it",
                name: "Managed IT Services",
                keywords: &["msp", "help desk", "it outsourcing", "network support"],
                examples: &["Ensono", "Rackspace Technology", "Thrive"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "data-centers",
                name: "Data Centers & Colocation",
                keywords: &["colocation", "hyperscale", "edge computing"],
                examples: &["Equinix", "QTS Data Centers", "Digital Realty"],
                tier: OpportunityTier::Medium,
            },
        ],
    },
    SectorDef {
        id: "logistics",
        name: "Transportation & Logistics",
        icon: "truck",
        verticals: &[
            VerticalDef {
                id: "third-party-logistics",
                name: "Third-Party Logistics",
                keywords: &["3pl", "fulfillment", "warehousing", "freight brokerage"],
                examples: &["C.H. Robinson", "GXO Logistics", "Radiant Logistics"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "last-mile",
                name: "Last-Mile Delivery",
                keywords: &["courier", "same-day delivery", "parcel"],
                examples: &["OnTrac", "Veho", "LaserShip"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "trucking",
                name: "Regional Trucking Fleets",
                keywords: &["ltl", "truckload", "fleet", "carrier"],
                examples: &["Old Dominion Freight Line", "Saia", "Estes Express Lines"],
                tier: OpportunityTier::Low,
            },
        ],
    },
    SectorDef {
        id: "real-estate",
        name: "Real Estate & Construction",
        icon: "building",
        verticals: &[
            VerticalDef {
                id: "commercial-construction",
                name: "Commercial Construction",
                keywords: &["general contractor", "design-build", "construction management"],
                examples: &["Brasfield & Gorrie", "Skanska USA", "Turner Construction"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "property-management",
                name: "Property Management",
                keywords: &["multifamily", "hoa", "leasing", "facilities"],
                examples: &["Greystar", "FirstService Residential", "Lincoln Property"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "home-services",
                name: "Home Services & Trades",
                keywords: &["hvac", "plumbing", "roofing", "electrical contractor"],
                examples: &["Service Experts", "Mr. Rooter", "One Hour Heating & Air"],
                tier: OpportunityTier::High,
            },
        ],
    },
    SectorDef {
        id: "financial-services",
        name: "Financial Services",
        icon: "landmark",
        verticals: &[
            VerticalDef {
                id: "community-banking",
                name: "Community Banks & Credit Unions",
                keywords: &["credit union", "community bank", "deposits", "lending"],
                examples: &["Delta Community Credit Union", "Ameris Bank", "Navy Federal"],
                tier: OpportunityTier::Medium,
            },
            VerticalDef {
                id: "wealth-management",
                name: "Wealth Management & RIAs",
                keywords: &["ria", "financial advisor", "family office"],
                examples: &["Edelman Financial Engines", "Creative Planning", "Captrust"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "insurance-agencies",
                name: "Independent Insurance Agencies",
                keywords: &["broker", "p&c", "benefits", "underwriting"],
                examples: &["Brown & Brown", "Hub International", "Acrisure"],
                tier: OpportunityTier::Medium,
            },
        ],
    },
    SectorDef {
        id: "manufacturing",
        name: "Manufacturing & Industrial",
        icon: "factory",
        verticals: &[
            VerticalDef {
                id: "advanced-manufacturing",
                name: "Advanced Manufacturing",
                keywords: &["cnc", "additive", "automation", "precision machining"],
                examples: &["Protolabs", "Xometry", "Fathom"],
                tier: OpportunityTier::High,
            },
            VerticalDef {
                id: "packaging",
                name: "Packaging & Containers",
                keywords: &["corrugated", "flexible packaging", "co-packer"],
                examples: &["WestRock", "Graphic Packaging", "Sonoco"],
                tier: OpportunityTier::Low,
            },
            VerticalDef {
                id: "ev-battery",
                name: "EV & Battery Supply Chain",
                keywords: &["electric vehicle", "lithium", "battery cells", "charging"],
                examples: &["Rivian", "SK Battery America", "Qcells"],
                tier: OpportunityTier::High,
            },
        ],
    },
    SectorDef {
        id: "education",
        name: "Education",
        icon: "graduation-cap",
        verticals: &[
            VerticalDef {
                id: "private-k12",
                name: "Private K-12 Schools",
                keywords: &["independent school", "charter", "tuition"],
                examples: &["Nord Anglia", "Stride", "Primrose Schools"],
                tier: OpportunityTier::Low,
            },
            VerticalDef {
                id: "edtech",
                name: "EdTech Platforms",
                keywords: &["lms", "online learning", "tutoring", "courseware"],
                examples: &["Instructure", "Coursera", "Chegg"],
                tier: OpportunityTier::Medium,
            },
        ],
    },
];

/// The built-in catalog as owned sectors, in display order.
#[must_use]
pub fn builtin_catalog() -> Vec<IndustrySector> {
    CATALOG
        .iter()
        .map(|sector| IndustrySector {
            id: sector.id.to_string(),
            name: sector.name.to_string(),
            icon: sector.icon.to_string(),
            verticals: sector
                .verticals
                .iter()
                .map(|v| IndustryVertical {
                    id: v.id.to_string(),
                    name: v.name.to_string(),
                    sector: sector.name.to_string(),
                    keywords: v.keywords.iter().map(ToString::to_string).collect(),
                    example_entities: v.examples.iter().map(ToString::to_string).collect(),
                    opportunity_tier: v.tier,
                })
                .collect(),
        })
        .collect()
}
