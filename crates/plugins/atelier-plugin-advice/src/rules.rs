//! Ordered keyword table for text-only messages.
//!
//! Rules are evaluated top to bottom against the lowercased message and the
//! first match wins. Order matters: several keyword sets overlap, and the
//! earlier rule always shadows the later one (for example `warm` in the
//! winter rule comes before `warm skin` in the skin-tone rule, and the
//! bottoms rule comes before the tops rule).

use crate::blocks::*;
use crate::knowledge::body_type_recommendation;

/// Keyword predicate over a lowercased message
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// At least one of the words appears
    Any(&'static [&'static str]),
    /// `required` appears together with at least one of `with`
    Both {
        /// Word that must be present
        required: &'static str,
        /// Words of which one must also be present
        with: &'static [&'static str],
    },
}

impl Keywords {
    /// Whether `msg` satisfies the predicate
    pub fn matches(&self, msg: &str) -> bool {
        match self {
            Keywords::Any(words) => contains_any(msg, words),
            Keywords::Both { required, with } => msg.contains(required) && contains_any(msg, with),
        }
    }
}

/// Advice produced when a rule fires
#[derive(Clone, Copy)]
pub enum Advice {
    /// Returned verbatim
    Fixed(&'static str),
    /// Stitched together from the message (variants keyed on extra words)
    Composed(fn(&str) -> String),
}

/// One entry of the keyword table
pub struct MatchRule {
    /// Stable rule name
    pub name: &'static str,
    /// When the rule fires
    pub keywords: Keywords,
    /// What it answers
    pub advice: Advice,
}

impl MatchRule {
    /// Whether the rule fires for the lowercased message
    pub fn matches(&self, msg: &str) -> bool {
        self.keywords.matches(msg)
    }

    /// Render the answer for the lowercased message
    pub fn render(&self, msg: &str) -> String {
        match self.advice {
            Advice::Fixed(text) => text.to_string(),
            Advice::Composed(f) => f(msg),
        }
    }
}

fn contains_any(msg: &str, words: &[&str]) -> bool {
    words.iter().any(|w| msg.contains(w))
}

/// Text rules in priority order
pub static TEXT_RULES: &[MatchRule] = &[
    MatchRule {
        name: "body_type_guide",
        keywords: Keywords::Both { required: "body", with: &["type", "shape"] },
        advice: Advice::Composed(body_type_recommendation),
    },
    MatchRule {
        name: "cute",
        keywords: Keywords::Any(&["cute", "adorable", "sweet"]),
        advice: Advice::Fixed(CUTE),
    },
    MatchRule {
        name: "elegant",
        keywords: Keywords::Any(&["elegant", "classy", "sophisticated"]),
        advice: Advice::Fixed(ELEGANT),
    },
    MatchRule {
        name: "casual",
        keywords: Keywords::Any(&["casual", "comfortable", "everyday"]),
        advice: Advice::Fixed(CASUAL),
    },
    MatchRule {
        name: "party",
        keywords: Keywords::Any(&["party", "club", "night out", "tonight"]),
        advice: Advice::Fixed(PARTY),
    },
    MatchRule {
        name: "wedding",
        keywords: Keywords::Any(&["wedding", "marriage"]),
        advice: Advice::Fixed(WEDDING),
    },
    MatchRule {
        name: "college",
        keywords: Keywords::Any(&["college", "school", "university"]),
        advice: Advice::Fixed(COLLEGE),
    },
    MatchRule {
        name: "interview",
        keywords: Keywords::Any(&["interview", "internship", "formal", "professional"]),
        advice: Advice::Fixed(INTERVIEW),
    },
    MatchRule {
        name: "music_festival",
        keywords: Keywords::Both { required: "festival", with: &["music", "concert"] },
        advice: Advice::Fixed(MUSIC_FESTIVAL),
    },
    MatchRule {
        name: "festive",
        keywords: Keywords::Any(&["diwali", "traditional", "ethnic", "festive"]),
        advice: Advice::Fixed(FESTIVE),
    },
    MatchRule {
        name: "beach",
        keywords: Keywords::Any(&["beach", "vacation", "holiday", "travel"]),
        advice: Advice::Fixed(BEACH),
    },
    MatchRule {
        name: "winter",
        keywords: Keywords::Any(&["winter", "cold", "warm"]),
        advice: Advice::Fixed(WINTER),
    },
    MatchRule {
        name: "color_matching",
        keywords: Keywords::Both { required: "color", with: &["match", "go with", "suit"] },
        advice: Advice::Composed(color_matching),
    },
    MatchRule {
        name: "find_style",
        keywords: Keywords::Any(&["find my style", "fashion style", "what style"]),
        advice: Advice::Fixed(FIND_STYLE),
    },
    MatchRule {
        name: "budget",
        keywords: Keywords::Any(&["budget", "affordable", "cheap"]),
        advice: Advice::Fixed(BUDGET),
    },
    MatchRule {
        name: "date",
        keywords: Keywords::Any(&["date", "romantic"]),
        advice: Advice::Composed(date_night),
    },
    MatchRule {
        name: "white_shirt",
        keywords: Keywords::Any(&["white shirt", "basic white"]),
        advice: Advice::Fixed(WHITE_SHIRT),
    },
    MatchRule {
        name: "leather_jacket",
        keywords: Keywords::Any(&["leather jacket"]),
        advice: Advice::Fixed(LEATHER_JACKET),
    },
    MatchRule {
        name: "flared_jeans",
        keywords: Keywords::Any(&["flared jeans", "bootcut"]),
        advice: Advice::Fixed(FLARED_JEANS),
    },
    MatchRule {
        name: "skin_tone",
        keywords: Keywords::Any(&["skin tone", "warm skin", "cool skin"]),
        advice: Advice::Composed(skin_tone),
    },
    MatchRule {
        name: "body_tips",
        keywords: Keywords::Any(&["pear", "broad shoulders", "short", "tall", "apple"]),
        advice: Advice::Composed(body_tips),
    },
    MatchRule {
        name: "trends",
        keywords: Keywords::Any(&["trend", "2025", "k-pop", "kpop"]),
        advice: Advice::Composed(trends),
    },
    MatchRule {
        name: "capsule_wardrobe",
        keywords: Keywords::Any(&["capsule wardrobe", "essential", "basic"]),
        advice: Advice::Fixed(CAPSULE_WARDROBE),
    },
    MatchRule {
        name: "confident",
        keywords: Keywords::Any(&["confident", "bold", "powerful"]),
        advice: Advice::Fixed(CONFIDENT),
    },
    MatchRule {
        name: "mini_skirt",
        keywords: Keywords::Any(&["mini skirt", "miniskirt"]),
        advice: Advice::Composed(mini_skirt),
    },
    // Bottoms before tops: "jeans and top" is a question about the jeans.
    MatchRule {
        name: "bottoms",
        keywords: Keywords::Any(&["pant", "jean", "trouser", "skirt", "bottom", "short"]),
        advice: Advice::Composed(bottoms),
    },
    MatchRule {
        name: "tops",
        keywords: Keywords::Any(&["top", "shirt", "blouse"]),
        advice: Advice::Composed(tops),
    },
    MatchRule {
        name: "outfit_matching",
        keywords: Keywords::Any(&["look good", "match", "together", "upload", "image", "pic"]),
        advice: Advice::Fixed(OUTFIT_MATCHING),
    },
];

/// First rule that fires for the lowercased message
pub fn first_match(msg: &str) -> Option<&'static MatchRule> {
    TEXT_RULES.iter().find(|rule| rule.matches(msg))
}

/// Answer when no rule fires
pub(crate) fn fallback() -> String {
    [ANALYSIS_HEADER, HELP].concat()
}

fn color_matching(msg: &str) -> String {
    let variant = if msg.contains("pink") {
        COLOR_PINK
    } else if contains_any(msg, &["navy", "blue"]) {
        COLOR_NAVY
    } else {
        COLOR_UNIVERSAL
    };
    [COLOR_HEADER, variant, COLOR_FOOTER].concat()
}

fn date_night(msg: &str) -> String {
    let variant = if contains_any(msg, &["cute", "mysterious"]) {
        DATE_CUTE_MYSTERIOUS
    } else {
        DATE_GENERAL
    };
    [DATE_HEADER, variant, DATE_FOOTER].concat()
}

fn skin_tone(msg: &str) -> String {
    let variant = if msg.contains("warm") {
        SKIN_TONE_WARM
    } else if msg.contains("cool") {
        SKIN_TONE_COOL
    } else {
        SKIN_TONE_TEST
    };
    [SKIN_TONE_HEADER, variant].concat()
}

fn body_tips(msg: &str) -> String {
    let variant = if msg.contains("pear") {
        BODY_TIPS_PEAR
    } else if msg.contains("apple") {
        BODY_TIPS_APPLE
    } else if msg.contains("broad shoulder") {
        BODY_TIPS_BROAD_SHOULDERS
    } else if msg.contains("short") {
        BODY_TIPS_SHORT
    } else {
        BODY_TIPS_TALL
    };
    [BODY_TIPS_HEADER, variant].concat()
}

fn trends(msg: &str) -> String {
    let variant = if contains_any(msg, &["k-pop", "kpop"]) {
        TRENDS_KPOP
    } else {
        TRENDS_CURRENT
    };
    [TRENDS_HEADER, variant, TRENDS_FOOTER].concat()
}

fn mini_skirt(msg: &str) -> String {
    let variant = if msg.contains("rectangle") {
        MINI_SKIRT_RECTANGLE
    } else {
        MINI_SKIRT_GENERAL
    };
    [MINI_SKIRT_HEADER, variant].concat()
}

fn bottoms(_msg: &str) -> String {
    [ANALYSIS_HEADER, BOTTOMS].concat()
}

fn tops(_msg: &str) -> String {
    [ANALYSIS_HEADER, TOPS].concat()
}
