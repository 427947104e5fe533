/// Built-in autocomplete vocabulary, in the order suggestions are offered.
pub const COMMON_WORDS: &[&str] = &[
    "apple", "application", "appreciate", "approach", "appropriate",
    "beautiful", "because", "become", "before", "beginning",
    "computer", "complete", "consider", "continue", "create",
    "different", "difficult", "discover", "discussion", "development",
    "example", "experience", "explain", "education", "environment",
    "family", "friend", "function", "future", "follow",
    "government", "group", "general", "great", "growth",
    "house", "human", "health", "history", "however",
    "important", "information", "interest", "international", "increase",
    "knowledge", "language", "learning", "level", "local",
    "management", "market", "member", "method", "money",
    "natural", "national", "necessary", "network", "number",
    "organization", "opportunity", "original", "other", "over",
    "people", "person", "place", "point", "policy",
    "question", "quality", "quite", "quickly", "quiet",
    "research", "result", "reason", "relationship", "remember",
    "student", "system", "service", "social", "special",
    "technology", "through", "together", "training", "travel",
    "understand", "university", "usually", "under", "until",
    "value", "various", "very", "view", "visit",
    "water", "world", "work", "write", "without",
];
