//! Reply templates keyed by intent.

use rx_protocol::ClassificationResult;

/// Reply for unknown intents and intents without a template.
pub const FALLBACK_REPLY: &str = "I'm not sure how to help with that, but I'm here to assist you.";

/// One piece of a reply template.
#[derive(Debug, Clone, Copy)]
enum Piece {
    /// Always emitted.
    Text(&'static str),
    /// `prefix` + value when the parameter is present, else `otherwise`.
    Param {
        name: &'static str,
        prefix: &'static str,
        otherwise: &'static str,
    },
}

const fn clause(prefix: &'static str, name: &'static str) -> Piece {
    Piece::Param {
        name,
        prefix,
        otherwise: "",
    }
}

const TEMPLATES: &[(&str, &[Piece])] = &[
    (
        "book_appointment",
        &[
            Piece::Text("Okay, I've booked your appointment"),
            clause(" for ", "date"),
            clause(" at ", "time"),
            Piece::Text("."),
        ],
    ),
    (
        "get_weather",
        &[
            Piece::Text("The weather"),
            clause(" in ", "location"),
            Piece::Text(" is looking good today."),
        ],
    ),
    (
        "set_reminder",
        &[
            Piece::Text("I'll remind you"),
            clause(" to ", "task"),
            clause(" ", "time"),
            Piece::Text("."),
        ],
    ),
    (
        "play_music",
        &[
            Piece::Text("Playing"),
            Piece::Param {
                name: "song",
                prefix: " ",
                otherwise: " music",
            },
            clause(" by ", "artist"),
            Piece::Text("."),
        ],
    ),
    (
        "get_directions",
        &[
            Piece::Text("Here are directions"),
            clause(" to ", "destination"),
            Piece::Text("."),
        ],
    ),
    (
        "general_question",
        &[Piece::Text("Let me help you with that question.")],
    ),
];

/// Renders natural-language replies for classification results.
pub struct ResponseGenerator;

impl ResponseGenerator {
    /// Reply text for `result`. Never fails; unknown or untemplated intents
    /// get the fallback apology.
    pub fn respond(result: &ClassificationResult) -> String {
        let Some((_, pieces)) = TEMPLATES.iter().find(|(intent, _)| *intent == result.intent) else {
            return FALLBACK_REPLY.to_string();
        };

        let mut reply = String::new();
        for piece in *pieces {
            match *piece {
                Piece::Text(text) => reply.push_str(text),
                Piece::Param {
                    name,
                    prefix,
                    otherwise,
                } => match result.param(name) {
                    Some(value) => {
                        reply.push_str(prefix);
                        reply.push_str(value);
                    }
                    None => reply.push_str(otherwise),
                },
            }
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rx_protocol::ParamMap;

    fn result(intent: &str, params: &[(&str, &str)]) -> ClassificationResult {
        ClassificationResult {
            intent: intent.into(),
            parameters: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<ParamMap>(),
            confidence: 0.5,
            original_text: String::new(),
        }
    }

    #[test]
    fn appointment_with_all_clauses() {
        let reply = ResponseGenerator::respond(&result(
            "book_appointment",
            &[("date", "monday"), ("time", "2pm")],
        ));
        assert_eq!(reply, "Okay, I've booked your appointment for monday at 2pm.");
    }

    #[test]
    fn appointment_omits_missing_date() {
        let reply = ResponseGenerator::respond(&result("book_appointment", &[("time", "2pm")]));
        assert_eq!(reply, "Okay, I've booked your appointment at 2pm.");
    }

    #[test]
    fn appointment_without_params() {
        let reply = ResponseGenerator::respond(&result("book_appointment", &[]));
        assert_eq!(reply, "Okay, I've booked your appointment.");
    }

    #[test]
    fn weather_reply() {
        let reply = ResponseGenerator::respond(&result("get_weather", &[("location", "paris")]));
        assert_eq!(reply, "The weather in paris is looking good today.");
        let reply = ResponseGenerator::respond(&result("get_weather", &[]));
        assert_eq!(reply, "The weather is looking good today.");
    }

    #[test]
    fn reminder_reply() {
        let reply = ResponseGenerator::respond(&result(
            "set_reminder",
            &[("task", "call john"), ("time", "in 10 minutes")],
        ));
        assert_eq!(reply, "I'll remind you to call john in 10 minutes.");
    }

    #[test]
    fn music_falls_back_to_generic_song() {
        let reply = ResponseGenerator::respond(&result("play_music", &[("artist", "the beatles")]));
        assert_eq!(reply, "Playing music by the beatles.");
        let reply = ResponseGenerator::respond(&result("play_music", &[("song", "yesterday")]));
        assert_eq!(reply, "Playing yesterday.");
    }

    #[test]
    fn directions_and_question() {
        assert_eq!(
            ResponseGenerator::respond(&result("get_directions", &[("destination", "the airport")])),
            "Here are directions to the airport."
        );
        assert_eq!(
            ResponseGenerator::respond(&result("general_question", &[("topic", "anything")])),
            "Let me help you with that question."
        );
    }

    #[test]
    fn empty_parameter_treated_as_absent() {
        let reply = ResponseGenerator::respond(&result("get_directions", &[("destination", "")]));
        assert_eq!(reply, "Here are directions.");
    }

    #[test]
    fn unknown_and_untemplated_use_fallback() {
        assert_eq!(
            ResponseGenerator::respond(&ClassificationResult::unknown("hmm")),
            FALLBACK_REPLY
        );
        assert_eq!(
            ResponseGenerator::respond(&result("order_pizza", &[])),
            FALLBACK_REPLY
        );
    }
}
