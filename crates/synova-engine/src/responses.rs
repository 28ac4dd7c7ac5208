use synova_types::Tier;

/// Canned responses for one tier. `help` and `upgrade` are optional; tiers
/// without them answer those inquiries with their fallback string.
pub(crate) struct ResponseSet {
    pub greeting: &'static str,
    pub help: Option<&'static str>,
    pub upgrade: Option<&'static str>,
    pub specialty: Option<Specialty>,
    pub fallback: &'static str,
}

/// A tier-specific keyword branch (checked after the shared keyword sets).
pub(crate) struct Specialty {
    pub keywords: &'static [&'static str],
    pub text: &'static str,
}

static TERRESTRIAL: ResponseSet = ResponseSet {
    greeting: "Hello! I'm Synova Terrestrial, your free AI assistant. How can I help you today?",
    help: Some(
        "I can help with basic questions and simple conversations. For advanced features, \
         consider upgrading to Aerial or Celestial!",
    ),
    upgrade: Some(
        "Ready to unlock more power? Aerial ($19/month) offers unlimited messages and advanced \
         reasoning. Celestial ($49/month) includes quantum predictions!",
    ),
    specialty: None,
    fallback: "Thank you for your question. As a free tier user, I provide basic assistance. \
               For advanced analysis, consider upgrading!",
};

static AERIAL: ResponseSet = ResponseSet {
    greeting: "Welcome to Synova Aerial! I'm your advanced AI assistant with enhanced reasoning \
               capabilities.",
    help: None,
    upgrade: None,
    specialty: Some(Specialty {
        keywords: &["analyze", "analysis"],
        text: "Using advanced neuro-symbolic reasoning to analyze your request...",
    }),
    fallback: "I'm analyzing this with advanced AI techniques including pattern recognition and \
               contextual reasoning.",
};

static CELESTIAL: ResponseSet = ResponseSet {
    greeting: "Greetings! I'm Synova Celestial with full quantum-enhanced capabilities at your \
               service.",
    help: None,
    upgrade: None,
    specialty: Some(Specialty {
        keywords: &["quantum", "predict"],
        text: "Applying quantum-inspired algorithms for maximum prediction accuracy...",
    }),
    fallback: "Engaging full quantum-enhanced processing with neuro-symbolic fusion for optimal \
               results.",
};

pub(crate) fn for_tier(tier: Tier) -> &'static ResponseSet {
    match tier {
        Tier::Terrestrial => &TERRESTRIAL,
        Tier::Aerial => &AERIAL,
        Tier::Celestial => &CELESTIAL,
    }
}
