//! Placeholder articles used when the live homepage yields nothing.
//!
//! Every template's notes contain [`MOCK_SENTINEL`], which is how callers
//! recognise the output as synthetic.

use crate::models::{ArticleRecord, MOCK_SENTINEL};
use chrono::NaiveDate;

struct MockTemplate {
    url: &'static str,
    headline: &'static str,
    primary_topic: &'static str,
    key_entities: [&'static str; 3],
    main_themes: [&'static str; 3],
    stance: &'static str,
    notes: &'static str,
}

static TEMPLATES: [MockTemplate; 5] = [
    MockTemplate {
        url: "https://www.laprensagrafica.com/elsalvador/test-article-1",
        headline: "Gobierno anuncia nuevas medidas económicas para 2025",
        primary_topic: "Economics / Government Policy",
        key_entities: ["Gobierno", "El Salvador", "economía"],
        main_themes: ["Políticas económicas", "Presupuesto nacional", "Desarrollo económico"],
        stance: "Neutral / informational",
        notes: "Mock article for testing. The scraper is still being optimized for La Prensa Gráfica's structure.",
    },
    MockTemplate {
        url: "https://www.laprensagrafica.com/elsalvador/test-article-2",
        headline: "Autoridades refuerzan seguridad en zonas turísticas",
        primary_topic: "Public Safety / Tourism",
        key_entities: ["Policía Nacional Civil", "turismo", "seguridad"],
        main_themes: ["Seguridad pública", "Turismo", "Desarrollo económico"],
        stance: "Neutral / informational",
        notes: "Mock article for testing. Real scraping functionality is being developed.",
    },
    MockTemplate {
        url: "https://www.laprensagrafica.com/elsalvador/test-article-3",
        headline: "Ministerio de Educación presenta plan de alfabetización digital",
        primary_topic: "Education / Technology",
        key_entities: ["Ministerio de Educación", "estudiantes", "tecnología"],
        main_themes: ["Educación digital", "Innovación educativa", "Acceso a tecnología"],
        stance: "Positive / supportive",
        notes: "Mock article for testing. Scraper optimization in progress.",
    },
    MockTemplate {
        url: "https://www.laprensagrafica.com/elsalvador/test-article-4",
        headline: "Aumenta inversión extranjera en sector tecnológico salvadoreño",
        primary_topic: "Economics / Investment / Technology",
        key_entities: ["inversionistas extranjeros", "sector tecnológico", "El Salvador"],
        main_themes: ["Inversión extranjera", "Desarrollo tecnológico", "Crecimiento económico"],
        stance: "Positive / optimistic",
        notes: "Mock article for testing purposes. Working on real-time scraping.",
    },
    MockTemplate {
        url: "https://www.laprensagrafica.com/elsalvador/test-article-5",
        headline: "Productores agrícolas solicitan apoyo ante sequía",
        primary_topic: "Agriculture / Climate / Economics",
        key_entities: ["productores agrícolas", "sequía", "Ministerio de Agricultura"],
        main_themes: ["Agricultura", "Cambio climático", "Apoyo gubernamental"],
        stance: "Concerned / urgent",
        notes: "Mock article for testing. Scraper is being refined for better data extraction.",
    },
];

/// Build `limit` placeholder records by cycling through the templates.
///
/// Record `i` gets `-{i}` appended to its URL and ` ({i + 1})` to its
/// headline so URLs stay unique.
pub fn mock_articles(limit: usize, source_name: &str, today: NaiveDate) -> Vec<ArticleRecord> {
    let date = today.format("%Y-%m-%d").to_string();
    TEMPLATES
        .iter()
        .cycle()
        .take(limit)
        .enumerate()
        .map(|(i, t)| {
            debug_assert!(t.notes.contains(MOCK_SENTINEL));
            let url = format!("{}-{i}", t.url);
            ArticleRecord {
                url: url.clone(),
                publication_date: date.clone(),
                source_name: source_name.to_string(),
                headline: format!("{} ({})", t.headline, i + 1),
                primary_topic: t.primary_topic.to_string(),
                key_entities: t.key_entities.iter().map(|s| s.to_string()).collect(),
                main_themes: t.main_themes.iter().map(|s| s.to_string()).collect(),
                sentiment_editorial_stance: t.stance.to_string(),
                notes: t.notes.to_string(),
                source_citations: url,
            }
        })
        .collect()
}
