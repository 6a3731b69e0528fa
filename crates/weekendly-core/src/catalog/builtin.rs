//! Built-in activity, theme, and weekend-option data.

use crate::error::CatalogError;

use super::{Activity, Catalog, Category, CategoryGroup, Day, EnergyLevel, Theme, WeekendOption};

fn act(
    id: &str,
    name: &str,
    duration_minutes: u32,
    vibe: &str,
    time: &str,
    energy: EnergyLevel,
    category: Category,
    description: &str,
) -> Result<Activity, CatalogError> {
    Ok(Activity {
        id: id.to_string(),
        name: name.to_string(),
        duration_minutes,
        category,
        vibe: vibe.to_string(),
        energy,
        time: time.parse()?,
        description: description.to_string(),
    })
}

fn theme(key: &str, name: &str, description: &str, mood: &str, ids: &[&str]) -> Theme {
    Theme {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        mood: mood.to_string(),
        activity_ids: ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn option(key: &str, name: &str, days: &[Day]) -> WeekendOption {
    WeekendOption {
        key: key.to_string(),
        name: name.to_string(),
        days: days.to_vec(),
    }
}

pub(super) fn catalog() -> Result<Catalog, CatalogError> {
    use Category::{Indoor, Outdoor};
    use EnergyLevel::{High, Low, Medium};

    let culinary = CategoryGroup {
        key: "culinary".to_string(),
        name: "Culinary Experiences".to_string(),
        activities: vec![
            act(
                "gourmet-brunch",
                "Artisan Brunch Experience",
                120,
                "sophisticated",
                "10:30",
                Low,
                Indoor,
                "Indulge in a carefully crafted brunch with locally sourced ingredients",
            )?,
            act(
                "collaborative-cooking",
                "Collaborative Cooking Session",
                150,
                "creative",
                "17:30",
                Medium,
                Indoor,
                "Team up to create culinary masterpieces together",
            )?,
            act(
                "wine-discovery",
                "Wine & Cheese Discovery",
                180,
                "refined",
                "16:00",
                Low,
                Indoor,
                "Explore exquisite wine and cheese pairings",
            )?,
            act(
                "street-food-adventure",
                "Street Food Expedition",
                90,
                "adventurous",
                "12:30",
                Medium,
                Outdoor,
                "Discover hidden culinary gems around the city",
            )?,
            act(
                "farmers-market",
                "Farmers Market Tour",
                120,
                "authentic",
                "09:00",
                Medium,
                Outdoor,
                "Source fresh ingredients and connect with local producers",
            )?,
        ],
    };

    let adventure = CategoryGroup {
        key: "adventure".to_string(),
        name: "Outdoor Expeditions".to_string(),
        activities: vec![
            act(
                "mountain-expedition",
                "Mountain Trail Expedition",
                300,
                "challenging",
                "07:30",
                High,
                Outdoor,
                "Conquer scenic trails and discover breathtaking vistas",
            )?,
            act(
                "botanical-picnic",
                "Botanical Garden Picnic",
                180,
                "serene",
                "12:00",
                Low,
                Outdoor,
                "Relax among beautiful flora with a gourmet picnic",
            )?,
            act(
                "urban-cycling",
                "Urban Cycling Tour",
                150,
                "dynamic",
                "09:30",
                High,
                Outdoor,
                "Explore the city's hidden corners on two wheels",
            )?,
            act(
                "astronomy-night",
                "Astronomical Observatory",
                180,
                "mystical",
                "21:30",
                Low,
                Outdoor,
                "Gaze at celestial wonders and learn about the cosmos",
            )?,
            act(
                "photography-walk",
                "Photography Expedition",
                200,
                "artistic",
                "08:00",
                Medium,
                Outdoor,
                "Capture stunning moments and improve your photography skills",
            )?,
        ],
    };

    let cultural = CategoryGroup {
        key: "cultural".to_string(),
        name: "Cultural Immersion".to_string(),
        activities: vec![
            act(
                "cinema-experience",
                "Independent Cinema Experience",
                200,
                "thoughtful",
                "19:30",
                Low,
                Indoor,
                "Discover thought-provoking films and engage in discussions",
            )?,
            act(
                "live-performance",
                "Live Musical Performance",
                180,
                "electrifying",
                "20:30",
                Medium,
                Indoor,
                "Experience the energy of live music in intimate venues",
            )?,
            act(
                "gallery-exploration",
                "Contemporary Art Gallery",
                150,
                "inspiring",
                "14:30",
                Low,
                Indoor,
                "Explore contemporary art and expand your creative horizons",
            )?,
            act(
                "board-game-tournament",
                "Strategy Game Tournament",
                240,
                "competitive",
                "19:00",
                Low,
                Indoor,
                "Challenge friends in strategic thinking and friendly competition",
            )?,
            act(
                "cultural-workshop",
                "Cultural Arts Workshop",
                180,
                "creative",
                "15:00",
                Medium,
                Indoor,
                "Learn traditional crafts and express your creativity",
            )?,
        ],
    };

    let mindfulness = CategoryGroup {
        key: "mindfulness".to_string(),
        name: "Mindful Living".to_string(),
        activities: vec![
            act(
                "holistic-spa",
                "Holistic Spa Retreat",
                300,
                "rejuvenating",
                "10:00",
                Low,
                Indoor,
                "Immerse yourself in complete relaxation and rejuvenation",
            )?,
            act(
                "sunrise-yoga",
                "Sunrise Yoga Session",
                90,
                "energizing",
                "06:30",
                Medium,
                Outdoor,
                "Start your day with mindful movement and breath work",
            )?,
            act(
                "mindfulness-retreat",
                "Mindfulness Meditation Retreat",
                120,
                "centering",
                "08:00",
                Low,
                Indoor,
                "Cultivate inner peace and mental clarity through guided meditation",
            )?,
            act(
                "literary-journey",
                "Literary Exploration",
                180,
                "contemplative",
                "15:30",
                Low,
                Indoor,
                "Dive into captivating stories and expand your literary horizons",
            )?,
            act(
                "digital-detox",
                "Digital Detox Experience",
                240,
                "liberating",
                "11:00",
                Low,
                Outdoor,
                "Disconnect from technology and reconnect with yourself",
            )?,
        ],
    };

    let social = CategoryGroup {
        key: "social".to_string(),
        name: "Social Connections".to_string(),
        activities: vec![
            act(
                "community-volunteering",
                "Community Volunteering",
                240,
                "meaningful",
                "09:00",
                Medium,
                Outdoor,
                "Give back to your community and make a positive impact",
            )?,
            act(
                "trivia-championship",
                "Trivia Championship",
                150,
                "competitive",
                "20:00",
                Medium,
                Indoor,
                "Test your knowledge and compete in friendly trivia battles",
            )?,
            act(
                "dance-workshop",
                "Dance Workshop",
                120,
                "expressive",
                "18:00",
                High,
                Indoor,
                "Learn new dance moves and express yourself through movement",
            )?,
            act(
                "networking-meetup",
                "Creative Networking Meetup",
                180,
                "inspiring",
                "17:00",
                Medium,
                Indoor,
                "Connect with like-minded individuals and expand your network",
            )?,
        ],
    };

    let themes = vec![
        theme(
            "mindful_escape",
            "Mindful Escape",
            "Disconnect from stress and reconnect with inner peace",
            "serene",
            &[
                "mindfulness-retreat",
                "holistic-spa",
                "botanical-picnic",
                "literary-journey",
            ],
        ),
        theme(
            "urban_explorer",
            "Urban Explorer",
            "Discover hidden gems and vibrant city culture",
            "adventurous",
            &[
                "street-food-adventure",
                "urban-cycling",
                "photography-walk",
                "gallery-exploration",
            ],
        ),
        theme(
            "creative_soul",
            "Creative Soul",
            "Express yourself through art, music, and creativity",
            "inspiring",
            &[
                "cultural-workshop",
                "live-performance",
                "collaborative-cooking",
                "cinema-experience",
            ],
        ),
        theme(
            "social_butterfly",
            "Social Butterfly",
            "Connect with others and build meaningful relationships",
            "energetic",
            &[
                "networking-meetup",
                "dance-workshop",
                "trivia-championship",
                "farmers-market",
            ],
        ),
        theme(
            "wellness_warrior",
            "Wellness Warrior",
            "Prioritize your health and well-being",
            "balanced",
            &[
                "sunrise-yoga",
                "mountain-expedition",
                "digital-detox",
                "gourmet-brunch",
            ],
        ),
        theme(
            "luxury_seeker",
            "Luxury Seeker",
            "Indulge in premium experiences and refined pleasures",
            "sophisticated",
            &[
                "wine-discovery",
                "holistic-spa",
                "astronomy-night",
                "cinema-experience",
            ],
        ),
    ];

    let weekend_options = vec![
        option("two_days", "Default", &[Day::Saturday, Day::Sunday]),
        option(
            "three_days_friday",
            "3-Day (Fri-Sun)",
            &[Day::Friday, Day::Saturday, Day::Sunday],
        ),
        option(
            "three_days_monday",
            "3-Day (Sat-Mon)",
            &[Day::Saturday, Day::Sunday, Day::Monday],
        ),
        option(
            "four_days_thursday",
            "4-Day (Thu-Sun)",
            &[Day::Thursday, Day::Friday, Day::Saturday, Day::Sunday],
        ),
        option(
            "four_days_monday",
            "4-Day (Fri-Mon)",
            &[Day::Friday, Day::Saturday, Day::Sunday, Day::Monday],
        ),
        option(
            "four_days_tuesday",
            "4-Day (Sat-Tue)",
            &[Day::Saturday, Day::Sunday, Day::Monday, Day::Tuesday],
        ),
    ];

    Catalog::new(
        vec![culinary, adventure, cultural, mindfulness, social],
        themes,
        weekend_options,
    )
}
