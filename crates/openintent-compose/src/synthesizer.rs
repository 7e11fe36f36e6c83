//! Sentence synthesis: turn a cleaned payload into one coherent clause.
//!
//! Decision order:
//!
//! 1. A payload that already ends in `.`, `!` or `?` and has more than three
//!    words is used as-is (sentence-cased).
//! 2. The payload is tested against the date/time patterns.
//! 3. The intent picks a template.  `meeting_request` first looks for a
//!    literal whole hour (`1pm` .. `12pm`).
//! 4. `general` and `introduction` pick by payload shape instead.

use regex::Regex;
use tracing::debug;

use crate::error::{ComposeError, Result};
use crate::extractor::compile;
use crate::names::capitalize;
use crate::types::{IntentCategory, ToneCategory};

/// Clock-time, relative-day, weekday and month patterns.
pub const DATE_TIME_PATTERNS: &[&str] = &[
    r"\d{1,2}:\d{2}\s*(am|pm)?",
    r"\d{1,2}\s*(am|pm)",
    r"(today|tomorrow|next week|next month)",
    r"(monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
    r"(january|february|march|april|may|june|july|august|september|october|november|december)",
];

/// A whole afternoon/evening hour written as `<h>pm`, not part of `h:mm`.
const WHOLE_HOUR_PATTERN: &str = r"(?:^|[^\d:])(?P<hour>1[0-2]|[1-9])pm\b";

const PRONOUN_PREFIXES: &[&str] = &["i ", "we ", "you ", "they ", "he ", "she ", "it "];

/// Builds the main-content clause from a payload, an intent, and a tone.
#[derive(Debug, Clone)]
pub struct SentenceSynthesizer {
    date_time: Vec<Regex>,
    whole_hour: Regex,
}

impl SentenceSynthesizer {
    /// Compile the date/time patterns and the whole-hour rule.
    pub fn new() -> Result<Self> {
        let date_time = DATE_TIME_PATTERNS
            .iter()
            .copied()
            .map(compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            date_time,
            whole_hour: compile(WHOLE_HOUR_PATTERN)?,
        })
    }

    /// Whether the payload mentions a time or date.
    pub fn is_date_or_time(&self, payload: &str) -> bool {
        let lowered = payload.to_lowercase();
        self.date_time.iter().any(|re| re.is_match(&lowered))
    }

    /// The whole hour (`1`..=`12`) written as `<h>pm`, if present.
    pub fn whole_hour(&self, payload: &str) -> Option<u8> {
        let lowered = payload.to_lowercase();
        self.whole_hour
            .captures(&lowered)
            .and_then(|caps| caps.name("hour"))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Build the clause for `payload`.  An empty payload is an error; callers
    /// use a long-form paragraph instead.
    pub fn synthesize(
        &self,
        payload: &str,
        intent: IntentCategory,
        tone: ToneCategory,
    ) -> Result<String> {
        let content = payload.trim();
        if content.is_empty() {
            return Err(ComposeError::Synthesis {
                reason: "no payload to build a sentence from".into(),
            });
        }

        if content.ends_with(['.', '!', '?']) && content.split_whitespace().count() > 3 {
            return Ok(capitalize(content));
        }

        let dated = self.is_date_or_time(content);

        let sentence = match intent {
            IntentCategory::Greeting => {
                if tone == ToneCategory::Friendly {
                    "I wanted to reach out and say hello to you.".to_string()
                } else {
                    "I hope this message finds you well. I wanted to connect with you.".to_string()
                }
            }
            IntentCategory::MeetingRequest => self.meeting_sentence(content, dated),
            IntentCategory::ThankYou => format!(
                "I wanted to thank you for {content}. Your help has been greatly appreciated."
            ),
            IntentCategory::Inquiry => format!(
                "I have a question about {content}. I would appreciate your insights on this matter."
            ),
            IntentCategory::Update => format!(
                "I wanted to update you on {content}. Please let me know if you need any additional information."
            ),
            IntentCategory::Urgent => format!(
                "I need to bring to your attention an urgent matter regarding {content}. This requires immediate attention."
            ),
            IntentCategory::Followup => format!(
                "I'm following up on our previous discussion about {content}. I wanted to check on the current status."
            ),
            IntentCategory::Collaboration => format!(
                "I would like to discuss potential collaboration on {content}. I believe this could be beneficial for both of us."
            ),
            IntentCategory::Feedback => format!(
                "I would appreciate your feedback on {content}. Your input would be very valuable."
            ),
            IntentCategory::Proposal => format!(
                "I have a proposal regarding {content}. I would like to discuss this with you in detail."
            ),
            IntentCategory::Confirmation => format!(
                "I wanted to confirm the details about {content}. Please let me know if everything is correct."
            ),
            IntentCategory::Introduction | IntentCategory::General => {
                general_sentence(content, dated)
            }
        };

        debug!(%intent, sentence = %sentence, "sentence synthesized");
        Ok(sentence)
    }

    fn meeting_sentence(&self, content: &str, dated: bool) -> String {
        if let Some(hour) = self.whole_hour(content) {
            return format!(
                "I would like to schedule a meeting for {hour}pm. Please let me know if this time works for you."
            );
        }

        if dated {
            return format!(
                "I would like to schedule a meeting for {content}. Please let me know if this time works for you."
            );
        }

        if content.contains("meeting") {
            let details = content.split("meeting").nth(1).map(str::trim).unwrap_or_default();
            if !details.is_empty() {
                return format!(
                    "I would like to schedule a meeting {details}. Please let me know your availability."
                );
            }
            return "I would like to schedule a meeting. Please let me know your availability."
                .to_string();
        }

        if content.chars().any(|c| c.is_ascii_digit()) {
            return "I would like to schedule a meeting. Please let me know your availability."
                .to_string();
        }

        format!(
            "I would like to schedule a meeting to discuss {content}. Please let me know your availability."
        )
    }
}

fn general_sentence(content: &str, dated: bool) -> String {
    if PRONOUN_PREFIXES.iter().any(|p| content.starts_with(p)) {
        format!(
            "{}. I wanted to make sure you're aware of this.",
            capitalize(content)
        )
    } else if dated {
        format!("I wanted to let you know about {content}. Please mark this in your calendar.")
    } else if content.split_whitespace().count() <= 3 {
        format!(
            "I wanted to discuss {content} with you. This is an important matter that needs attention."
        )
    } else {
        format!(
            "{}. I wanted to make sure you have all the necessary information.",
            capitalize(content)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synth(payload: &str, intent: IntentCategory) -> String {
        SentenceSynthesizer::new()
            .unwrap()
            .synthesize(payload, intent, ToneCategory::Professional)
            .unwrap()
    }

    #[test]
    fn whole_hour_meeting_clause() {
        assert_eq!(
            synth("schedule a meeting for 1pm", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting for 1pm. Please let me know if this time works for you."
        );
        assert_eq!(
            synth("lunch at 12pm", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting for 12pm. Please let me know if this time works for you."
        );
    }

    #[test]
    fn whole_hour_is_not_confused_by_longer_numbers() {
        let synth = SentenceSynthesizer::new().unwrap();
        assert_eq!(synth.whole_hour("call at 11pm"), Some(11));
        assert_eq!(synth.whole_hour("1pm"), Some(1));
        assert_eq!(synth.whole_hour("13pm"), None);
        assert_eq!(synth.whole_hour("1:30pm"), None);
        assert_eq!(synth.whole_hour("10:10pm"), None);
        assert_eq!(synth.whole_hour("3 pm"), None);
    }

    #[test]
    fn non_whole_hour_times_use_dated_clause() {
        assert_eq!(
            synth("review at 1:30pm", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting for review at 1:30pm. Please let me know if this time works for you."
        );
    }

    #[test]
    fn meeting_details_after_keyword() {
        assert_eq!(
            synth("about the meeting agenda", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting agenda. Please let me know your availability."
        );
        assert_eq!(
            synth("the meeting", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting. Please let me know your availability."
        );
    }

    #[test]
    fn meeting_with_digits_but_no_time() {
        assert_eq!(
            synth("room 42 booking", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting. Please let me know your availability."
        );
    }

    #[test]
    fn meeting_generic_discuss_clause() {
        assert_eq!(
            synth("the budget", IntentCategory::MeetingRequest),
            "I would like to schedule a meeting to discuss the budget. Please let me know your availability."
        );
    }

    #[test]
    fn complete_sentence_is_kept() {
        assert_eq!(
            synth("the server is down again!", IntentCategory::Urgent),
            "The server is down again!"
        );
        // Three words or fewer is not treated as complete.
        assert_eq!(
            synth("server down!", IntentCategory::General),
            "I wanted to discuss server down! with you. This is an important matter that needs attention."
        );
    }

    #[test]
    fn intent_specific_clauses() {
        assert_eq!(
            synth("your help with the move", IntentCategory::ThankYou),
            "I wanted to thank you for your help with the move. Your help has been greatly appreciated."
        );
        assert_eq!(
            synth("the invoice", IntentCategory::Confirmation),
            "I wanted to confirm the details about the invoice. Please let me know if everything is correct."
        );
        assert_eq!(
            synth("the roadmap", IntentCategory::Feedback),
            "I would appreciate your feedback on the roadmap. Your input would be very valuable."
        );
    }

    #[test]
    fn greeting_depends_on_tone() {
        let synth = SentenceSynthesizer::new().unwrap();
        assert_eq!(
            synth
                .synthesize("hello there", IntentCategory::Greeting, ToneCategory::Friendly)
                .unwrap(),
            "I wanted to reach out and say hello to you."
        );
        assert_eq!(
            synth
                .synthesize("hello there", IntentCategory::Greeting, ToneCategory::Formal)
                .unwrap(),
            "I hope this message finds you well. I wanted to connect with you."
        );
    }

    #[test]
    fn greeting_ignores_payload() {
        let synth = SentenceSynthesizer::new().unwrap();
        let a = synth
            .synthesize("hello there", IntentCategory::Greeting, ToneCategory::Friendly)
            .unwrap();
        let b = synth
            .synthesize("the quarterly numbers", IntentCategory::Greeting, ToneCategory::Friendly)
            .unwrap();
        assert_eq!(a, b);
        assert!(!b.contains("quarterly"));
    }

    #[test]
    fn general_branches_on_payload_shape() {
        assert_eq!(
            synth("we shipped the release", IntentCategory::General),
            "We shipped the release. I wanted to make sure you're aware of this."
        );
        assert_eq!(
            synth("the offsite on friday", IntentCategory::General),
            "I wanted to let you know about the offsite on friday. Please mark this in your calendar."
        );
        assert_eq!(
            synth("the budget", IntentCategory::General),
            "I wanted to discuss the budget with you. This is an important matter that needs attention."
        );
        assert_eq!(
            synth("the quarterly figures look strong overall", IntentCategory::General),
            "The quarterly figures look strong overall. I wanted to make sure you have all the necessary information."
        );
    }

    #[test]
    fn introduction_uses_general_shapes() {
        assert_eq!(
            synth("the new hire", IntentCategory::Introduction),
            "I wanted to discuss the new hire with you. This is an important matter that needs attention."
        );
    }

    #[test]
    fn empty_payload_is_rejected() {
        let result = SentenceSynthesizer::new().unwrap().synthesize(
            "  ",
            IntentCategory::General,
            ToneCategory::Professional,
        );
        assert!(matches!(result, Err(ComposeError::Synthesis { .. })));
    }

    #[test]
    fn date_time_detection() {
        let synth = SentenceSynthesizer::new().unwrap();
        assert!(synth.is_date_or_time("tomorrow morning"));
        assert!(synth.is_date_or_time("at 14:30"));
        assert!(synth.is_date_or_time("3 pm"));
        assert!(synth.is_date_or_time("early in March"));
        assert!(!synth.is_date_or_time("the budget"));
    }
}
