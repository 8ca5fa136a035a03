//! Static site content: the service catalog and gallery items.
//!
//! Pure data, compiled in. Templates receive these records as-is; the sitemap
//! walks the catalog for service detail URLs.

use serde::Serialize;

/// One benefit bullet on a service page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One product or application option on a service page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceOption {
    pub title: &'static str,
    pub description: &'static str,
}

/// One step of the installation process section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    pub step: &'static str,
    pub description: &'static str,
}

/// Full content of one service detail page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServicePage {
    pub id: &'static str,
    pub name: &'static str,
    pub slug: &'static str,
    pub hero_image: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub main_heading: &'static str,
    pub intro_paragraph: &'static str,
    pub benefits_title: &'static str,
    pub benefits: &'static [Feature],
    pub options_title: &'static str,
    pub options_intro: &'static str,
    pub options: &'static [ServiceOption],
    pub process_title: &'static str,
    pub process: &'static [ProcessStep],
    pub cta_title: &'static str,
    pub cta_description: &'static str,
    pub cta_button: &'static str,
}

/// One gallery card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GalleryItem {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The five-step process shared by the residential and commercial pages.
const STANDARD_PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: "Free Consultation",
        description: "We visit your property, assess your space, and discuss your vision",
    },
    ProcessStep {
        step: "Custom Design",
        description: "We create a tailored plan that fits your landscape and budget",
    },
    ProcessStep {
        step: "Site Preparation",
        description: "Proper base preparation ensures long-lasting results",
    },
    ProcessStep {
        step: "Professional Installation",
        description: "Our expert team installs your turf with precision",
    },
    ProcessStep {
        step: "Final Inspection",
        description: "We ensure everything meets our high standards and your expectations",
    },
];

/// Every service the site offers, in display order.
pub const SERVICES: &[ServicePage] = &[
    ServicePage {
        id: "residential-turf",
        name: "Residential Turf Installation",
        slug: "residential-turf",
        hero_image: "turf-1.jpg",
        hero_title: "Residential Turf Installation",
        hero_subtitle: "Transform your backyard into a year-round green paradise with premium artificial turf",
        main_heading: "Beautiful, Low-Maintenance Lawns for Austin Homes",
        intro_paragraph: "At Hello Turf, we specialize in transforming residential properties throughout Austin with premium artificial turf solutions. Say goodbye to mowing, watering, and constant lawn maintenance while enjoying a lush, green yard year-round.",
        benefits_title: "Why Choose Artificial Turf for Your Home?",
        benefits: &[
            Feature { icon: "check-circle", title: "Save Time & Money", description: "No more weekly mowing, watering, or fertilizing" },
            Feature { icon: "check-circle", title: "Water Conservation", description: "Save up to 55,000 gallons of water per year" },
            Feature { icon: "check-circle", title: "Year-Round Green", description: "Perfect lawn in every season, rain or shine" },
            Feature { icon: "check-circle", title: "Pet & Kid Friendly", description: "Durable, safe, and easy to clean" },
            Feature { icon: "check-circle", title: "Eco-Friendly", description: "No harmful pesticides or fertilizers needed" },
            Feature { icon: "check-circle", title: "Increase Property Value", description: "Beautiful curb appeal that lasts" },
        ],
        options_title: "Our Residential Turf Options",
        options_intro: "We offer a variety of high-quality artificial turf products to suit your specific needs:",
        options: &[
            ServiceOption { title: "Premium Luxury Turf", description: "Ultra-realistic appearance with soft, dense fibers. Perfect for high-visibility areas like front yards." },
            ServiceOption { title: "Family & Pet Turf", description: "Durable, stain-resistant, and easy to clean. Ideal for backyards with children and pets." },
            ServiceOption { title: "Budget-Friendly Turf", description: "High-quality synthetic grass at an affordable price. Great for larger areas." },
        ],
        process_title: "Our Installation Process",
        process: STANDARD_PROCESS,
        cta_title: "Ready to Transform Your Yard?",
        cta_description: "Get a free, no-obligation quote today. Most installations completed in 1-3 days!",
        cta_button: "Request Free Quote",
    },
    ServicePage {
        id: "commercial-turf",
        name: "Commercial Turf Installation",
        slug: "commercial-turf",
        hero_image: "turf-1.jpg",
        hero_title: "Commercial Turf Installation",
        hero_subtitle: "Professional-grade artificial turf solutions for businesses, offices, and commercial properties",
        main_heading: "Premium Commercial Artificial Turf for Austin Businesses",
        intro_paragraph: "Hello Turf provides top-quality commercial turf installations for businesses across Austin. Our professional-grade synthetic grass solutions enhance your property's appearance while dramatically reducing maintenance costs and water usage.",
        benefits_title: "Why Choose Commercial Artificial Turf?",
        benefits: &[
            Feature { icon: "check-circle", title: "Reduce Operating Costs", description: "Eliminate ongoing lawn maintenance expenses" },
            Feature { icon: "check-circle", title: "Professional Appearance", description: "Immaculate landscaping 365 days a year" },
            Feature { icon: "check-circle", title: "High Traffic Durability", description: "Withstands heavy foot traffic and events" },
            Feature { icon: "check-circle", title: "Water Savings", description: "Significantly reduce water bills and meet conservation goals" },
            Feature { icon: "check-circle", title: "Quick Installation", description: "Minimal disruption to your business operations" },
            Feature { icon: "check-circle", title: "Increase Property Value", description: "Enhance curb appeal and tenant satisfaction" },
        ],
        options_title: "Commercial Applications",
        options_intro: "Our commercial turf is perfect for a wide range of business applications:",
        options: &[
            ServiceOption { title: "Office Complexes", description: "Create inviting outdoor spaces for employees and visitors with low-maintenance landscaping." },
            ServiceOption { title: "Retail & Restaurants", description: "Enhance customer experience with beautiful outdoor seating areas and entryways." },
            ServiceOption { title: "Hotels & Apartments", description: "Provide residents and guests with attractive, maintenance-free common areas." },
            ServiceOption { title: "Event Venues", description: "Durable surface that looks perfect for weddings, corporate events, and gatherings." },
            ServiceOption { title: "Healthcare Facilities", description: "Safe, clean outdoor spaces for patients, staff, and visitors." },
            ServiceOption { title: "Schools & Daycares", description: "Safe play areas and athletic fields that require minimal maintenance." },
        ],
        process_title: "Our Installation Process",
        process: STANDARD_PROCESS,
        cta_title: "Ready to Upgrade Your Commercial Property?",
        cta_description: "Get a free commercial quote today. Volume pricing and flexible scheduling available!",
        cta_button: "Request Commercial Quote",
    },
    ServicePage {
        id: "pet-turf",
        name: "Pet Turf Installation",
        slug: "pet-turf",
        hero_image: "turf-8.jpg",
        hero_title: "Pet Turf Installation",
        hero_subtitle: "Durable, safe, and odor-resistant artificial turf designed specifically for your furry friends",
        main_heading: "Premium Pet Turf Systems for Austin Pet Owners",
        intro_paragraph: "Hello Turf offers specialized artificial turf designed specifically for pets. Our pet turf systems feature antimicrobial backing, superior drainage, and easy-to-clean surfaces that stand up to digging, running, and heavy use from your furry family members.",
        benefits_title: "Why Choose Pet Turf?",
        benefits: &[
            Feature { icon: "check-circle", title: "Odor Control", description: "Antimicrobial backing prevents bacteria and eliminates odors" },
            Feature { icon: "check-circle", title: "Superior Drainage", description: "Drains 30+ inches per hour - no more muddy paws or puddles" },
            Feature { icon: "check-circle", title: "Easy Cleanup", description: "Solid waste removal is simple, liquid waste drains instantly" },
            Feature { icon: "check-circle", title: "Durable & Safe", description: "Non-toxic, lead-free materials that withstand digging and play" },
            Feature { icon: "check-circle", title: "No Mud or Dirt", description: "Keep your home clean - no more tracking in mud" },
            Feature { icon: "check-circle", title: "Year-Round Use", description: "Always green, always clean, rain or shine" },
        ],
        options_title: "Pet Turf Features",
        options_intro: "Our pet turf systems include specialized features designed for pet owners:",
        options: &[
            ServiceOption { title: "Antimicrobial Protection", description: "Built-in antimicrobial technology prevents bacteria growth and keeps your pet area fresh and hygienic." },
            ServiceOption { title: "Maximum Drainage", description: "Advanced perforated backing and drainage system ensures liquids drain away quickly with no pooling." },
            ServiceOption { title: "Stain Resistant", description: "Specially treated fibers resist staining and are incredibly easy to rinse clean with a hose." },
        ],
        process_title: "Our Pet Turf Installation Process",
        process: &[
            ProcessStep { step: "Free Consultation", description: "We assess your yard and discuss your pets' needs and habits" },
            ProcessStep { step: "Custom Design", description: "We design a pet-friendly space tailored to your property" },
            ProcessStep { step: "Site Preparation", description: "Proper grading and drainage base preparation" },
            ProcessStep { step: "Professional Installation", description: "Expert installation with pet-specific backing and infill" },
            ProcessStep { step: "Care Instructions", description: "We show you how to maintain your pet turf for optimal performance" },
        ],
        cta_title: "Ready to Give Your Pets the Best?",
        cta_description: "Get a free quote for pet turf installation. Your pets will love it!",
        cta_button: "Request Free Quote",
    },
    ServicePage {
        id: "putting-greens",
        name: "Custom Putting Greens",
        slug: "putting-greens",
        hero_image: "turf-9.jpg",
        hero_title: "Custom Putting Greens",
        hero_subtitle: "Professional-grade putting greens for your backyard - practice your game at home",
        main_heading: "Custom Putting Greens for Austin Golf Enthusiasts",
        intro_paragraph: "Hello Turf designs and installs professional-quality putting greens tailored to your backyard space and skill level. Whether you're a beginner looking to practice or a scratch golfer wanting to perfect your short game, we create custom greens with realistic ball roll and professional-grade turf.",
        benefits_title: "Why Install a Backyard Putting Green?",
        benefits: &[
            Feature { icon: "check-circle", title: "Improve Your Game", description: "Practice anytime without leaving home" },
            Feature { icon: "check-circle", title: "Custom Design", description: "Tailored contours, breaks, and challenges to match your skill level" },
            Feature { icon: "check-circle", title: "True Ball Roll", description: "Professional-grade turf with realistic putting surface" },
            Feature { icon: "check-circle", title: "Year-Round Use", description: "Practice in any weather - no maintenance required" },
            Feature { icon: "check-circle", title: "Increase Home Value", description: "Unique feature that adds curb appeal and entertainment value" },
            Feature { icon: "check-circle", title: "Entertainment", description: "Great for parties, family fun, and friendly competitions" },
        ],
        options_title: "Putting Green Features",
        options_intro: "We offer various features to create your perfect practice green:",
        options: &[
            ServiceOption { title: "Custom Contours", description: "Add breaks, slopes, and undulations to challenge your putting skills and simulate real course conditions." },
            ServiceOption { title: "Multiple Holes", description: "Install multiple cup locations to create various practice scenarios and keep practice interesting." },
            ServiceOption { title: "Chipping Areas", description: "Add fringe and rough areas around your green to practice chip shots and approach shots." },
        ],
        process_title: "Our Putting Green Installation Process",
        process: &[
            ProcessStep { step: "Free Consultation", description: "We assess your space and discuss your golfing goals and preferences" },
            ProcessStep { step: "Custom Design", description: "We create a 3D design with your desired features, contours, and challenges" },
            ProcessStep { step: "Site Preparation", description: "Precision grading and contouring for proper ball roll" },
            ProcessStep { step: "Professional Installation", description: "Expert installation with professional-grade putting turf" },
            ProcessStep { step: "Final Calibration", description: "We test and adjust for optimal ball speed and true roll" },
        ],
        cta_title: "Ready to Build Your Dream Putting Green?",
        cta_description: "Get a free consultation and design for your custom putting green today!",
        cta_button: "Request Free Quote",
    },
    ServicePage {
        id: "pool-turf",
        name: "Pool Turf Installation",
        slug: "pool-turf",
        hero_image: "turf-5.jpg",
        hero_title: "Pool Turf Installation",
        hero_subtitle: "Transform your pool area with safe, comfortable, and beautiful artificial turf",
        main_heading: "Premium Pool Turf for Austin Swimming Pools",
        intro_paragraph: "Transform your pool deck and surrounding area with Hello Turf's specialized pool turf. Our pool-specific artificial grass is designed to stay cool underfoot, resist chlorine and pool chemicals, provide excellent traction when wet, and create a resort-style atmosphere in your backyard.",
        benefits_title: "Why Choose Pool Turf?",
        benefits: &[
            Feature { icon: "check-circle", title: "Heat Resistant", description: "Stays cooler than concrete or pavers under Austin's hot sun" },
            Feature { icon: "check-circle", title: "Non-Slip Surface", description: "Safe traction even when wet - reduces slip and fall accidents" },
            Feature { icon: "check-circle", title: "Chemical Resistant", description: "Withstands chlorine, salt water, and pool chemicals" },
            Feature { icon: "check-circle", title: "Comfortable", description: "Soft on bare feet - no more burning concrete" },
            Feature { icon: "check-circle", title: "Fast Drainage", description: "Water drains quickly - no puddles or standing water" },
            Feature { icon: "check-circle", title: "Low Maintenance", description: "Easy to clean and maintain - looks great year-round" },
        ],
        options_title: "Pool Turf Applications",
        options_intro: "Our pool turf is perfect for various poolside installations:",
        options: &[
            ServiceOption { title: "Pool Decks", description: "Transform your entire pool deck into a comfortable, safe, and beautiful surface that stays cool." },
            ServiceOption { title: "Pool Surrounds", description: "Create a lush green border around your pool that enhances the resort-like atmosphere." },
            ServiceOption { title: "Splash Pads & Water Features", description: "Perfect for areas around splash pads, fountains, and other water features." },
        ],
        process_title: "Our Pool Turf Installation Process",
        process: &[
            ProcessStep { step: "Free Consultation", description: "We assess your pool area and discuss your design preferences" },
            ProcessStep { step: "Custom Design", description: "We create a layout that complements your pool and landscaping" },
            ProcessStep { step: "Site Preparation", description: "Proper grading for optimal drainage away from pool" },
            ProcessStep { step: "Professional Installation", description: "Expert installation with pool-safe backing and materials" },
            ProcessStep { step: "Final Inspection", description: "We ensure perfect fit and proper drainage throughout" },
        ],
        cta_title: "Ready to Upgrade Your Pool Area?",
        cta_description: "Get a free quote for pool turf installation. Create your backyard oasis!",
        cta_button: "Request Free Quote",
    },
    ServicePage {
        id: "sports-turf",
        name: "Sports Turf Installation",
        slug: "sports-turf",
        hero_image: "turf-6.jpg",
        hero_title: "Sports Turf Installation",
        hero_subtitle: "Professional-grade athletic turf for sports fields, training areas, and recreational facilities",
        main_heading: "Professional Sports Turf for Austin Athletic Facilities",
        intro_paragraph: "Hello Turf specializes in installing high-performance sports turf for athletic fields, training facilities, and recreational areas. Our sports turf is engineered for durability, safety, and optimal performance across various sports and activities.",
        benefits_title: "Why Choose Sports Turf?",
        benefits: &[
            Feature { icon: "check-circle", title: "Maximum Durability", description: "Withstands heavy use and extreme weather conditions" },
            Feature { icon: "check-circle", title: "Player Safety", description: "Shock-absorbing padding reduces injury risk" },
            Feature { icon: "check-circle", title: "Consistent Performance", description: "Uniform surface with predictable ball bounce and roll" },
            Feature { icon: "check-circle", title: "Year-Round Play", description: "Always ready - no weather delays or field closures" },
            Feature { icon: "check-circle", title: "Low Maintenance", description: "No mowing, watering, or line painting required" },
            Feature { icon: "check-circle", title: "Cost Effective", description: "Lower long-term costs compared to natural grass fields" },
        ],
        options_title: "Sports Turf Applications",
        options_intro: "Our sports turf is ideal for various athletic and recreational facilities:",
        options: &[
            ServiceOption { title: "Multi-Sport Fields", description: "Versatile turf for soccer, football, lacrosse, field hockey, and other field sports." },
            ServiceOption { title: "Training Facilities", description: "High-performance surfaces for indoor and outdoor training centers and practice areas." },
            ServiceOption { title: "Recreational Areas", description: "Durable turf for playgrounds, parks, and community recreational facilities." },
            ServiceOption { title: "Batting Cages & Hitting Areas", description: "Specialized turf for baseball and softball training areas with optimal ball response." },
            ServiceOption { title: "Tennis & Pickleball Courts", description: "Court-specific turf with proper speed and bounce characteristics." },
            ServiceOption { title: "Bocce & Lawn Bowling", description: "Smooth, flat surfaces perfect for precision lawn sports." },
        ],
        process_title: "Our Sports Turf Installation Process",
        process: &[
            ProcessStep { step: "Free Consultation", description: "We assess your facility needs and sport-specific requirements" },
            ProcessStep { step: "Custom Design", description: "We design a field layout optimized for your sports and space" },
            ProcessStep { step: "Site Preparation", description: "Professional grading and shock-pad installation for safety" },
            ProcessStep { step: "Professional Installation", description: "Expert installation with sport-specific turf and infill" },
            ProcessStep { step: "Final Testing", description: "Performance testing to ensure optimal play characteristics" },
        ],
        cta_title: "Ready to Upgrade Your Athletic Facility?",
        cta_description: "Get a free consultation for your sports turf project. Let's build something great!",
        cta_button: "Request Free Quote",
    },
    ServicePage {
        id: "pavers",
        name: "Paver Installation",
        slug: "pavers",
        hero_image: "turf-4.jpg",
        hero_title: "Paver Installation",
        hero_subtitle: "Beautiful, durable pavers for patios, walkways, driveways, and outdoor living spaces",
        main_heading: "Professional Paver Installation for Austin Properties",
        intro_paragraph: "Hello Turf offers expert paver installation services for residential and commercial properties throughout Austin. Our team creates stunning outdoor spaces with high-quality pavers that combine beauty, durability, and functionality. Perfect for patios, walkways, driveways, and pool decks.",
        benefits_title: "Why Choose Pavers?",
        benefits: &[
            Feature { icon: "check-circle", title: "Exceptional Durability", description: "Pavers withstand heavy traffic and harsh weather" },
            Feature { icon: "check-circle", title: "Timeless Beauty", description: "Wide variety of colors, patterns, and styles available" },
            Feature { icon: "check-circle", title: "Easy Repairs", description: "Individual pavers can be replaced without affecting the entire surface" },
            Feature { icon: "check-circle", title: "Low Maintenance", description: "Simple cleaning and minimal upkeep required" },
            Feature { icon: "check-circle", title: "Increase Home Value", description: "Beautiful hardscaping adds significant property value" },
            Feature { icon: "check-circle", title: "Eco-Friendly Options", description: "Permeable pavers allow water drainage and reduce runoff" },
        ],
        options_title: "Paver Applications",
        options_intro: "We install pavers for a variety of outdoor applications:",
        options: &[
            ServiceOption { title: "Patios & Outdoor Living", description: "Create beautiful entertainment spaces with custom paver patios and outdoor kitchens." },
            ServiceOption { title: "Walkways & Pathways", description: "Elegant pathways that guide visitors through your landscape and enhance curb appeal." },
            ServiceOption { title: "Driveways", description: "Durable, attractive driveways that make a lasting first impression." },
            ServiceOption { title: "Pool Decks", description: "Non-slip, cool-to-touch pavers perfect for pool surrounds and deck areas." },
            ServiceOption { title: "Retaining Walls", description: "Functional and decorative walls that manage grade changes and prevent erosion." },
            ServiceOption { title: "Fire Pit Areas", description: "Safe, beautiful gathering spaces built around custom fire pits." },
        ],
        process_title: "Our Paver Installation Process",
        process: &[
            ProcessStep { step: "Free Consultation", description: "We visit your property and discuss your vision and budget" },
            ProcessStep { step: "Custom Design", description: "We create a detailed design with paver style, pattern, and layout" },
            ProcessStep { step: "Site Preparation", description: "Proper excavation, base preparation, and grading for drainage" },
            ProcessStep { step: "Professional Installation", description: "Expert installation with precise leveling and joint spacing" },
            ProcessStep { step: "Final Sealing", description: "Optional sealing to protect and enhance your paver investment" },
        ],
        cta_title: "Ready to Transform Your Outdoor Space?",
        cta_description: "Get a free consultation and quote for your paver project. Let's create something beautiful!",
        cta_button: "Request Free Quote",
    },
];

/// Featured installations shown on the gallery page.
pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        image: "/images/turf-7.jpg",
        title: "Backyard Paradise",
        description: "Residential Installation - Austin, TX",
    },
    GalleryItem {
        image: "/images/turf-8.jpg",
        title: "Pet-Friendly Oasis",
        description: "Pet Turf System - Round Rock, TX",
    },
    GalleryItem {
        image: "/images/turf-9.jpg",
        title: "Backyard Putting Green",
        description: "Custom Design - Cedar Park, TX",
    },
    GalleryItem {
        image: "/images/turf-10.jpg",
        title: "Commercial Landscape",
        description: "Office Complex - Downtown Austin",
    },
    GalleryItem {
        image: "/images/turf-11.jpg",
        title: "Safe Play Area",
        description: "Playground Turf - Pflugerville, TX",
    },
    GalleryItem {
        image: "/images/turf-12.jpg",
        title: "Curb Appeal Boost",
        description: "Front Yard - Lakeway, TX",
    },
];

/// All services in display order.
pub fn all_services() -> &'static [ServicePage] {
    SERVICES
}

/// Looks up a service by its URL slug.
pub fn service_by_slug(slug: &str) -> Option<&'static ServicePage> {
    SERVICES.iter().find(|service| service.slug == slug)
}

/// All gallery cards in display order.
pub fn gallery_items() -> &'static [GalleryItem] {
    GALLERY_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seven_services() {
        assert_eq!(SERVICES.len(), 7);
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = SERVICES.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn lookup_by_slug() {
        let service = service_by_slug("pet-turf").unwrap();
        assert_eq!(service.name, "Pet Turf Installation");
        assert_eq!(service.hero_image, "turf-8.jpg");
    }

    #[test]
    fn lookup_unknown_slug_is_none() {
        assert!(service_by_slug("hydroponics").is_none());
    }

    #[test]
    fn every_service_has_full_sections() {
        for service in SERVICES {
            assert!(!service.benefits.is_empty(), "{} has no benefits", service.slug);
            assert!(!service.options.is_empty(), "{} has no options", service.slug);
            assert_eq!(service.process.len(), 5, "{} process is not five steps", service.slug);
        }
    }

    #[test]
    fn gallery_has_six_items() {
        assert_eq!(gallery_items().len(), 6);
    }
}
