//! Canned-response generation for the query endpoint.
//!
//! Responses are statically authored strings selected by substring keyword
//! matching over the lowercased query, in a fixed priority order. The engine
//! carries no state between calls and performs no I/O; simulated latency is
//! the caller's concern.

mod responses;

use rand::Rng;
use synova_types::Tier;

use crate::responses::for_tier;

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "greeting"];
const HELP_KEYWORDS: &[&str] = &["help", "what can you do"];
const UPGRADE_KEYWORDS: &[&str] = &["feature", "upgrade", "tier"];

/// The generated answer for one query.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    /// Sampled uniformly from the tier's confidence range.
    pub confidence: f64,
    /// Sampled processing duration in seconds.
    pub processing_secs: f64,
}

pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Engine
    }

    pub fn generate(&self, query: &str, tier: Tier) -> Reply {
        let mut rng = rand::rng();

        let (conf_lo, conf_hi) = confidence_range(tier);
        let (dur_lo, dur_hi) = duration_range(tier);

        Reply {
            text: select_response(query, tier).to_string(),
            confidence: rng.random_range(conf_lo..conf_hi),
            processing_secs: rng.random_range(dur_lo..dur_hi),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword priority: greeting > help > upgrade inquiry > tier specialty >
/// fallback. Matching is case-insensitive substring containment.
fn select_response(query: &str, tier: Tier) -> &'static str {
    let query = query.to_lowercase();
    let set = for_tier(tier);

    if contains_any(&query, GREETING_KEYWORDS) {
        return set.greeting;
    }
    if contains_any(&query, HELP_KEYWORDS) {
        return set.help.unwrap_or(set.fallback);
    }
    if contains_any(&query, UPGRADE_KEYWORDS) {
        return set.upgrade.unwrap_or(set.fallback);
    }
    if let Some(specialty) = &set.specialty {
        if contains_any(&query, specialty.keywords) {
            return specialty.text;
        }
    }
    set.fallback
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn confidence_range(tier: Tier) -> (f64, f64) {
    match tier {
        Tier::Terrestrial => (0.6, 0.8),
        Tier::Aerial => (0.75, 0.9),
        Tier::Celestial => (0.85, 0.95),
    }
}

fn duration_range(tier: Tier) -> (f64, f64) {
    match tier {
        Tier::Terrestrial => (2.0, 4.0),
        Tier::Aerial => (1.0, 2.0),
        Tier::Celestial => (0.5, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrestrial_hello_gets_the_greeting() {
        let reply = Engine::new().generate("hello", Tier::Terrestrial);
        assert_eq!(
            reply.text,
            "Hello! I'm Synova Terrestrial, your free AI assistant. How can I help you today?"
        );
        assert!(reply.confidence >= 0.6 && reply.confidence < 0.8);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            select_response("HEY there", Tier::Aerial),
            for_tier(Tier::Aerial).greeting
        );
    }

    #[test]
    fn greeting_outranks_every_other_keyword() {
        // Contains greeting, help, and upgrade keywords at once.
        let text = select_response("hello, can you help me upgrade?", Tier::Terrestrial);
        assert_eq!(text, for_tier(Tier::Terrestrial).greeting);
    }

    #[test]
    fn help_outranks_upgrade() {
        let text = select_response("help me pick a tier", Tier::Terrestrial);
        assert_eq!(text, for_tier(Tier::Terrestrial).help.unwrap());
    }

    #[test]
    fn tiers_without_help_fall_back_to_default() {
        assert_eq!(
            select_response("what can you do?", Tier::Aerial),
            for_tier(Tier::Aerial).fallback
        );
        assert_eq!(
            select_response("can you help?", Tier::Celestial),
            for_tier(Tier::Celestial).fallback
        );
    }

    #[test]
    fn specialty_keywords_are_tier_specific() {
        let aerial = for_tier(Tier::Aerial).specialty.as_ref().unwrap();
        assert_eq!(select_response("please analyze my data", Tier::Aerial), aerial.text);

        let celestial = for_tier(Tier::Celestial).specialty.as_ref().unwrap();
        assert_eq!(select_response("predict the outcome", Tier::Celestial), celestial.text);

        // A celestial keyword does nothing on the aerial tier.
        assert_eq!(
            select_response("predict the outcome", Tier::Aerial),
            for_tier(Tier::Aerial).fallback
        );
    }

    #[test]
    fn matching_is_bare_substring_containment() {
        // "this" contains "hi" — keyword hits inside words are accepted.
        assert_eq!(
            select_response("explain this", Tier::Terrestrial),
            for_tier(Tier::Terrestrial).greeting
        );
    }

    #[test]
    fn unmatched_queries_get_the_fallback() {
        for tier in Tier::ALL {
            assert_eq!(
                select_response("summarize my notes", tier),
                for_tier(tier).fallback
            );
        }
    }

    #[test]
    fn confidence_and_duration_stay_in_tier_ranges() {
        let engine = Engine::new();
        for tier in Tier::ALL {
            let (conf_lo, conf_hi) = confidence_range(tier);
            let (dur_lo, dur_hi) = duration_range(tier);
            for _ in 0..200 {
                let reply = engine.generate("summarize my notes", tier);
                assert!(reply.confidence >= conf_lo && reply.confidence < conf_hi);
                assert!(reply.processing_secs >= dur_lo && reply.processing_secs < dur_hi);
            }
        }
    }
}
