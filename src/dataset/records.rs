//! The fixed heritage collection.
//!
//! Three sub-collections (archives, monasteries, festivals) concatenated in
//! that order by [`crate::dataset::Dataset::load`]. The data never changes at
//! runtime.

use super::types::{Category, Record};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Base record with all optional fields absent.
fn record(id: &str, title: &str, description: &str, category: Category) -> Record {
    Record {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: Vec::new(),
        category,
        redirect_url: String::new(),
        monastery: None,
        kind: None,
        year: None,
        location: None,
        date: None,
        artist: None,
        language: None,
        material: None,
        instruments: None,
        architect: None,
        photographer: None,
    }
}

pub fn archives() -> Vec<Record> {
    vec![
        Record {
            tags: strings(&[
                "thangka", "painting", "buddhist", "art", "tibetan", "scroll", "deities",
                "mandala", "religious", "15th century",
            ]),
            redirect_url: "/archives#thangka-paintings".to_string(),
            kind: Some("Art".to_string()),
            monastery: Some("Rumtek Monastery".to_string()),
            year: Some("15th Century".to_string()),
            artist: Some("Unknown Tibetan Masters".to_string()),
            ..record(
                "archive_1",
                "Ancient Thangka Paintings",
                "Collection of traditional Tibetan Buddhist scroll paintings from the 15th \
                 century featuring deities, mandalas, and religious scenes",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "manuscript", "scripture", "prayer", "tibetan", "buddhist", "text", "kangyur",
                "tengyur", "sacred", "script",
            ]),
            redirect_url: "/archives#sacred-manuscripts".to_string(),
            kind: Some("Literature".to_string()),
            monastery: Some("Pemayangtse Monastery".to_string()),
            year: Some("Various".to_string()),
            language: Some("Tibetan".to_string()),
            ..record(
                "archive_2",
                "Sacred Manuscripts",
                "Rare Buddhist scriptures and prayer texts written in Tibetan script including \
                 the Kangyur and Tengyur collections",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "ceremony", "ritual", "artifact", "buddhist", "festival", "traditional",
                "prayer wheel", "bell", "offering bowl", "ritual object",
            ]),
            redirect_url: "/archives#ceremonial-artifacts".to_string(),
            kind: Some("Artifact".to_string()),
            monastery: Some("Tashiding Monastery".to_string()),
            year: Some("Various".to_string()),
            material: Some("Bronze, Wood, Silver".to_string()),
            ..record(
                "archive_3",
                "Ceremonial Artifacts",
                "Traditional ritual objects used in Buddhist ceremonies and festivals including \
                 prayer wheels, bells, and offering bowls",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "photograph", "history", "architecture", "monastery", "vintage",
                "documentation", "20th century", "daily life", "rituals",
            ]),
            redirect_url: "/archives#historical-photographs".to_string(),
            kind: Some("Photography".to_string()),
            monastery: Some("Rumtek Monastery".to_string()),
            year: Some("Early 20th Century".to_string()),
            photographer: Some("Various".to_string()),
            ..record(
                "archive_4",
                "Historical Photographs",
                "Vintage photographs documenting monastery life, architecture, and daily \
                 rituals from the early 20th century",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "music", "instrument", "tibetan", "ceremony", "religious", "traditional",
                "dungchen", "gyaling", "damaru", "ritual music",
            ]),
            redirect_url: "/archives#musical-instruments".to_string(),
            kind: Some("Music".to_string()),
            monastery: Some("Pemayangtse Monastery".to_string()),
            year: Some("Various".to_string()),
            instruments: Some(strings(&["Dungchen", "Gyaling", "Damaru", "Cymbals"])),
            ..record(
                "archive_5",
                "Musical Instruments",
                "Traditional Tibetan musical instruments used in religious ceremonies \
                 including dungchen, gyaling, and damaru",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "architecture", "drawing", "design", "monastery", "structure", "plan",
                "tibetan", "building", "technique", "blueprint",
            ]),
            redirect_url: "/archives#architectural-drawings".to_string(),
            kind: Some("Architecture".to_string()),
            monastery: Some("Tashiding Monastery".to_string()),
            year: Some("Various".to_string()),
            architect: Some("Traditional Tibetan Architects".to_string()),
            ..record(
                "archive_6",
                "Architectural Drawings",
                "Detailed architectural plans and designs of monastery structures showing \
                 traditional Tibetan building techniques",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "statue", "buddha", "bodhisattva", "deity", "bronze", "wooden", "sculpture",
                "ancient", "religious", "art",
            ]),
            redirect_url: "/archives#buddhist-statues".to_string(),
            kind: Some("Sculpture".to_string()),
            monastery: Some("Rumtek Monastery".to_string()),
            year: Some("Various".to_string()),
            material: Some("Bronze, Wood, Stone".to_string()),
            ..record(
                "archive_7",
                "Buddhist Statues Collection",
                "Ancient bronze and wooden statues of Buddha, Bodhisattvas, and other deities \
                 from various periods",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "prayer flag", "mantra", "symbol", "textile", "buddhist", "ceremony",
                "traditional", "flag", "religious", "symbolism",
            ]),
            redirect_url: "/archives#prayer-flags".to_string(),
            kind: Some("Textile".to_string()),
            monastery: Some("Pemayangtse Monastery".to_string()),
            year: Some("Various".to_string()),
            material: Some("Cotton, Silk".to_string()),
            ..record(
                "archive_8",
                "Prayer Flags Archive",
                "Collection of traditional prayer flags with mantras and symbols used in \
                 Buddhist ceremonies",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "chronicle", "history", "record", "founding", "development", "monastery",
                "document", "historical", "sikkim", "archive",
            ]),
            redirect_url: "/archives#monastery-chronicles".to_string(),
            kind: Some("Document".to_string()),
            monastery: Some("Tashiding Monastery".to_string()),
            year: Some("Various".to_string()),
            language: Some("Tibetan, English".to_string()),
            ..record(
                "archive_9",
                "Monastery Chronicles",
                "Historical records and chronicles documenting the founding and development \
                 of Sikkim's monasteries",
                Category::Archive,
            )
        },
        Record {
            tags: strings(&[
                "costume", "ceremonial", "attire", "festival", "buddhist", "traditional",
                "religious", "ceremony", "clothing", "dress",
            ]),
            redirect_url: "/archives#festival-costumes".to_string(),
            kind: Some("Costume".to_string()),
            monastery: Some("Rumtek Monastery".to_string()),
            year: Some("Various".to_string()),
            material: Some("Silk, Brocade, Cotton".to_string()),
            ..record(
                "archive_10",
                "Festival Costumes",
                "Traditional costumes and ceremonial attire worn during Buddhist festivals \
                 and religious ceremonies",
                Category::Archive,
            )
        },
    ]
}

pub fn monasteries() -> Vec<Record> {
    vec![
        Record {
            tags: strings(&["rumtek", "gangtok", "golden", "roof", "largest", "traditional"]),
            redirect_url: "/map".to_string(),
            location: Some("Gangtok, Sikkim".to_string()),
            ..record(
                "monastery_1",
                "Rumtek Monastery",
                "The largest monastery in Sikkim, known for its golden roof and traditional \
                 architecture",
                Category::Monastery,
            )
        },
        Record {
            tags: strings(&["pemayangtse", "pelling", "white", "walls", "mountain", "ancient"]),
            redirect_url: "/map".to_string(),
            location: Some("Pelling, Sikkim".to_string()),
            ..record(
                "monastery_2",
                "Pemayangtse Monastery",
                "Ancient monastery with white walls and stunning mountain views",
                Category::Monastery,
            )
        },
        Record {
            tags: strings(&["tashiding", "hilltop", "prayer", "flags", "valley", "views"]),
            redirect_url: "/map".to_string(),
            location: Some("Tashiding, Sikkim".to_string()),
            ..record(
                "monastery_3",
                "Tashiding Monastery",
                "Hilltop monastery with prayer flags and valley views",
                Category::Monastery,
            )
        },
    ]
}

pub fn festivals() -> Vec<Record> {
    vec![
        Record {
            tags: strings(&[
                "losar", "new year", "tibetan", "dance", "ceremony", "celebration",
                "tibetan new year", "cultural performance",
            ]),
            redirect_url: "/calendar#losar-festival".to_string(),
            date: Some("February".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Religious Festival".to_string()),
            ..record(
                "festival_1",
                "Losar Festival",
                "Tibetan New Year celebration with traditional dances, ceremonies, and \
                 cultural performances",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "saga dawa", "buddha", "birth", "enlightenment", "death", "buddhist",
                "prayer", "ceremony", "holy month",
            ]),
            redirect_url: "/calendar#saga-dawa".to_string(),
            date: Some("May-June".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Religious Festival".to_string()),
            ..record(
                "festival_2",
                "Saga Dawa",
                "Buddhist festival commemorating Buddha's birth, enlightenment, and death \
                 with prayer ceremonies",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "tihar", "lights", "hindu", "festival", "celebration", "sikkim", "diwali",
                "lamps", "rituals",
            ]),
            redirect_url: "/calendar#tihar-festival".to_string(),
            date: Some("October-November".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Religious Festival".to_string()),
            ..record(
                "festival_3",
                "Tihar Festival",
                "Hindu festival of lights celebrated across Sikkim with traditional rituals \
                 and decorations",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "bumchu", "water", "sacred", "tashiding", "fortune", "prediction", "ritual",
                "monastery",
            ]),
            redirect_url: "/calendar#bumchu-festival".to_string(),
            date: Some("February-March".to_string()),
            monastery: Some("Tashiding Monastery".to_string()),
            kind: Some("Sacred Festival".to_string()),
            ..record(
                "festival_4",
                "Bumchu Festival",
                "Sacred water festival at Tashiding Monastery where the water level predicts \
                 the year's fortune",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "pang lhabsol", "kanchenjunga", "mountain", "guardian", "deity", "sikkim",
                "worship", "nature",
            ]),
            redirect_url: "/calendar#pang-lhabsol".to_string(),
            date: Some("August-September".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Cultural Festival".to_string()),
            ..record(
                "festival_5",
                "Pang Lhabsol",
                "Festival honoring Mount Kanchenjunga as the guardian deity of Sikkim",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "dasain", "nepali", "hindu", "victory", "good", "evil", "dance",
                "traditional", "celebration",
            ]),
            redirect_url: "/calendar#dasain-festival".to_string(),
            date: Some("September-October".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Cultural Festival".to_string()),
            ..record(
                "festival_6",
                "Dasain Festival",
                "Nepali Hindu festival celebrating the victory of good over evil with \
                 traditional dances",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "lhabab duchen", "buddha", "descent", "heaven", "earth", "buddhist",
                "commemoration", "religious",
            ]),
            redirect_url: "/calendar#lhabab-duchen".to_string(),
            date: Some("October-November".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Religious Festival".to_string()),
            ..record(
                "festival_7",
                "Lhabab Duchen",
                "Buddhist festival commemorating Buddha's descent from heaven to earth",
                Category::Festival,
            )
        },
        Record {
            tags: strings(&[
                "guru rinpoche", "birthday", "founder", "tibetan buddhism", "celebration",
                "religious", "guru",
            ]),
            redirect_url: "/calendar#guru-rinpoche-birthday".to_string(),
            date: Some("June-July".to_string()),
            monastery: Some("All Monasteries".to_string()),
            kind: Some("Religious Festival".to_string()),
            ..record(
                "festival_8",
                "Guru Rinpoche's Birthday",
                "Celebration of the birth of Guru Rinpoche, the founder of Tibetan Buddhism",
                Category::Festival,
            )
        },
    ]
}
