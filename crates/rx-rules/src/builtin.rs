//! Built-in intent and field rules.
//!
//! Order matters: intents earlier in the list win score ties, and each
//! field's patterns are tried top to bottom (labelled forms before generic
//! shapes).

use crate::table::{FieldDef, IntentDef, ParamDef, RuleTableDef};

type IntentSpec = (&'static str, &'static [&'static str], &'static [(&'static str, &'static str)]);
type FieldSpec = (&'static str, &'static [&'static str]);

const INTENTS: &[IntentSpec] = &[
    (
        "book_appointment",
        &["book", "appointment", "schedule", "meeting", "reserve"],
        &[
            (
                "date",
                r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday|tomorrow|today|\d{1,2}(?:st|nd|rd|th)?)",
            ),
            ("time", r"(\d{1,2}(?::\d{2})?\s*(?:am|pm|o'clock))"),
            ("service", r"(consultation|checkup|meeting|call|session)"),
        ],
    ),
    (
        "get_weather",
        &["weather", "forecast", "temperature", "rain", "sunny", "cloudy"],
        &[
            ("location", r"in\s+([a-zA-Z\s]+)"),
            ("time", r"(today|tomorrow|this week|next week)"),
        ],
    ),
    (
        "set_reminder",
        &["remind", "reminder", "alert", "notify"],
        &[
            ("task", r"to\s+([^.!?]+)"),
            (
                "time",
                r"(in\s+\d+\s+(?:minutes?|hours?|days?)|at\s+\d{1,2}(?::\d{2})?\s*(?:am|pm))",
            ),
        ],
    ),
    (
        "play_music",
        &["play", "music", "song", "artist", "album"],
        &[
            ("song", r"play\s+([^.!?]+)"),
            ("artist", r"by\s+([a-zA-Z\s]+)"),
        ],
    ),
    (
        "get_directions",
        &["directions", "navigate", "route", "way to", "how to get"],
        &[
            ("destination", r"to\s+([^.!?]+)"),
            ("from", r"from\s+([a-zA-Z\s]+)"),
        ],
    ),
    (
        "general_question",
        &["what", "how", "when", "where", "why", "tell me", "explain"],
        &[("topic", r"(?:what|how|when|where|why).*?([^.!?]+)")],
    ),
];

const FIELDS: &[FieldSpec] = &[
    (
        "name",
        &[
            r"name[:\s]+([a-zA-Z\s,]+)",
            r"full\s+name[:\s]+([a-zA-Z\s,]+)",
            r"^([A-Z][a-zA-Z]+\s+[A-Z][a-zA-Z]+)",
        ],
    ),
    (
        "date_of_birth",
        &[
            r"(?:date\s+of\s+birth|dob|birth\s+date)[:\s]+(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
            r"born[:\s]+(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
            r"(\d{1,2}[-/]\d{1,2}[-/]\d{4})",
        ],
    ),
    (
        "id_number",
        &[
            r"(?:id|license|card)\s*(?:number|no|#)[:\s]*([A-Z0-9-]+)",
            r"(?:number|no|#)[:\s]*([A-Z0-9-]+)",
            r"([A-Z]{1,3}\d{6,12})",
        ],
    ),
    (
        "address",
        &[
            r"address[:\s]+([^\n]+)",
            r"(?:street|addr)[:\s]+([^\n]+)",
            r"(\d+\s+[A-Za-z\s]+(?:street|st|avenue|ave|road|rd|lane|ln|drive|dr))",
        ],
    ),
    (
        "phone",
        &[
            r"(?:phone|tel|mobile)[:\s]*([0-9\-\(\)\s]+)",
            r"(\(\d{3}\)\s*\d{3}-\d{4})",
            r"(\d{3}-\d{3}-\d{4})",
        ],
    ),
    (
        "email",
        &[
            r"(?:email|e-mail)[:\s]*([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})",
            r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})",
        ],
    ),
    (
        "expiry_date",
        &[
            r"(?:expires?|exp|expiry)[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
            r"valid\s+until[:\s]*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})",
        ],
    ),
    (
        "issuer",
        &[
            r"issued\s+by[:\s]*([A-Za-z\s]+)",
            r"(?:state|country|authority)[:\s]*([A-Za-z\s]+)",
        ],
    ),
];

/// Definitions for the built-in table.
pub fn definitions() -> RuleTableDef {
    RuleTableDef {
        intents: INTENTS
            .iter()
            .map(|(name, keywords, params)| IntentDef {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
                parameters: params
                    .iter()
                    .map(|(param, pattern)| ParamDef {
                        name: (*param).to_string(),
                        pattern: (*pattern).to_string(),
                    })
                    .collect(),
            })
            .collect(),
        fields: FIELDS
            .iter()
            .map(|(name, patterns)| FieldDef {
                name: (*name).to_string(),
                patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
            })
            .collect(),
    }
}
