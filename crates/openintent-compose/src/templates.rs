//! Static template banks: subjects, greetings, paragraphs, elaborations,
//! closings, and signatures.
//!
//! Every decision table is an explicit map keyed by a composite key, with a
//! default that is held outside the map so a lookup can never miss:
//!
//! | Table | Key | Default |
//! |-------|-----|---------|
//! | subject | intent | `Message` |
//! | greeting | (formality, tone) | one per formality |
//! | paragraphs | intent | the `general` bank |
//! | elaborations | intent | shared follow-up bank |
//! | closing | ([`ClosingKey`], formality) | one per formality |
//! | signature | [`SignatureKey`] | plain sign-off |

use std::collections::HashMap;

use crate::config::ComposerConfig;
use crate::types::{FormalityLevel, IntentCategory, ToneCategory, UrgencyLevel};

/// Slot replaced by the recipient display name in greetings.
pub const NAME_SLOT: &str = "{name}";

/// Sentence prepended to every long-form paragraph for urgent requests.
pub const URGENT_PARAGRAPH_PREFIX: &str =
    "I need to bring an urgent matter to your attention that requires immediate action. ";

const DEFAULT_SUBJECT: &str = "Message";

const SUBJECTS: &[(IntentCategory, &str)] = &[
    (IntentCategory::MeetingRequest, "Meeting Request"),
    (IntentCategory::ThankYou, "Thank You"),
    (IntentCategory::Inquiry, "Inquiry"),
    (IntentCategory::Update, "Update"),
    (IntentCategory::Greeting, "Hello"),
    (IntentCategory::Urgent, "Urgent Matter"),
    (IntentCategory::Followup, "Follow-up"),
    (IntentCategory::Introduction, "Introduction"),
    (IntentCategory::Collaboration, "Collaboration Opportunity"),
    (IntentCategory::Feedback, "Feedback Request"),
    (IntentCategory::Proposal, "Proposal"),
    (IntentCategory::Confirmation, "Confirmation"),
    (IntentCategory::General, DEFAULT_SUBJECT),
];

const GREETINGS: &[((FormalityLevel, ToneCategory), &str)] = &[
    (
        (FormalityLevel::Formal, ToneCategory::Friendly),
        "Dear {name},\nI hope this message finds you well and that you're having a productive day.",
    ),
    (
        (FormalityLevel::Formal, ToneCategory::Professional),
        "Dear {name},\nI hope this email finds you well and that your week is off to a great start.",
    ),
    (
        (FormalityLevel::Formal, ToneCategory::Enthusiastic),
        "Dear {name},\nI hope this message finds you in excellent spirits and that you're having a wonderful day!",
    ),
    (
        (FormalityLevel::Formal, ToneCategory::Apologetic),
        "Dear {name},\nI hope this message finds you well, and I appreciate you taking the time to read this.",
    ),
    (
        (FormalityLevel::Casual, ToneCategory::Friendly),
        "Hi {name}!\nI hope you're doing great and having a fantastic day.",
    ),
    (
        (FormalityLevel::Casual, ToneCategory::Professional),
        "Hello {name},\nI hope you're having a productive day.",
    ),
    (
        (FormalityLevel::Casual, ToneCategory::Enthusiastic),
        "Hi {name}!\nI hope you're having an amazing day!",
    ),
    (
        (FormalityLevel::Casual, ToneCategory::Apologetic),
        "Hi {name},\nI hope you're doing well, and thanks for your time.",
    ),
];

const DEFAULT_FORMAL_GREETING: &str = "Dear {name},\nI hope this message finds you well.";
const DEFAULT_CASUAL_GREETING: &str = "Hi {name},\nI hope you're doing well.";

const PARAGRAPHS: &[(IntentCategory, [&str; 3])] = &[
    (
        IntentCategory::MeetingRequest,
        [
            "I hope this message finds you well. I'm reaching out to schedule a meeting that I believe would be mutually beneficial for both of us. I've been reviewing our recent discussions and feel that a face-to-face conversation would be the best way to move forward with our collaboration.",
            "I hope you're having a productive day. I wanted to connect with you regarding an important matter that I believe requires our direct attention. A meeting would allow us to discuss this in detail and ensure we're aligned on the next steps.",
            "I hope this email finds you in good spirits. I'm writing to propose a meeting that I think could be very valuable for our ongoing partnership. There are several key points I'd like to discuss that would be best addressed in person.",
        ],
    ),
    (
        IntentCategory::ThankYou,
        [
            "I wanted to take a moment to express my sincere gratitude for your recent assistance and support. Your help has been absolutely invaluable to our project's success, and I truly appreciate the time and effort you've dedicated to helping us achieve our goals.",
            "Thank you so much for your generous support and guidance throughout this process. Your contributions have made a significant difference in our work, and I'm incredibly grateful for your expertise and willingness to assist us.",
            "I'm writing to express my heartfelt thanks for your help and support. Your expertise and willingness to assist have been truly appreciated, and I wanted to make sure you know how much your contributions have meant to our team.",
        ],
    ),
    (
        IntentCategory::Inquiry,
        [
            "I hope you're doing well. I have several questions regarding our recent discussions that I believe you could help clarify. Your insights on this matter would be extremely valuable, and I would appreciate the opportunity to discuss these points in detail.",
            "I hope this message finds you well. I'm reaching out to gather some information and would value your expertise on this topic. There are specific aspects I'd like to understand better, and I believe your perspective would be very helpful.",
            "I hope you're having a great day. I have some questions that I believe you could help clarify, and I would appreciate your input. Your experience in this area would be very valuable for our current project.",
        ],
    ),
    (
        IntentCategory::Update,
        [
            "I hope this message finds you well. I wanted to provide you with a comprehensive update on the current status of our project and share some important developments that have occurred since our last communication. There are several key milestones we've achieved and some exciting progress to report.",
            "I hope you're doing well. I'm writing to give you a detailed progress update on our ongoing work and share some recent developments that I think you'll find interesting. We've made significant strides in several areas and I wanted to keep you informed.",
            "I hope this email finds you in good spirits. I wanted to update you on the current status of our project and discuss next steps. We've accomplished quite a bit since our last update, and I believe you'll be pleased with the progress we've made.",
        ],
    ),
    (
        IntentCategory::Greeting,
        [
            "I hope this message finds you well. I wanted to reach out and connect with you to say hello and check in on how things are going. It's been a while since we last spoke, and I thought it would be nice to touch base and see how you're doing.",
            "I hope you're doing well. I'm reaching out to say hello and check in on how things are going with your projects and work. I always enjoy our conversations and wanted to see if there's anything new or exciting happening in your world.",
            "I hope this email finds you in good health. I wanted to check in and see how you're doing with your projects and see if there's anything I can help you with. It's always great to connect with colleagues and friends.",
        ],
    ),
    (
        IntentCategory::Urgent,
        [
            "I need to bring an urgent matter to your attention that requires immediate action. This is a time-sensitive situation that could have significant implications if not addressed promptly. I would appreciate your prompt response and guidance on how to proceed.",
            "I'm reaching out regarding an urgent situation that needs your immediate attention. This matter is critical and requires a swift response to prevent any potential issues. I believe your expertise and quick action could make a real difference here.",
            "I hope this message reaches you quickly. There's an urgent matter that requires your immediate attention and action. This is something that can't wait and I need your input to resolve it effectively.",
        ],
    ),
    (
        IntentCategory::Followup,
        [
            "I hope this message finds you well. I'm following up on our previous conversation and wanted to check in on the status of our discussion. I wanted to see how things are progressing and if there are any updates or developments I should be aware of.",
            "I hope you're doing well. I'm circling back to our recent conversation and wanted to see how things are progressing. I wanted to make sure we're still on track and if there's anything I can do to help move things forward.",
            "I hope this email finds you in good spirits. I'm reaching out to follow up on our previous discussion and check on the current status. I wanted to ensure we're aligned and see if there are any next steps we should be considering.",
        ],
    ),
    (
        IntentCategory::Introduction,
        [
            "I hope this message finds you well. I wanted to introduce myself and express my interest in connecting with you professionally. I've heard great things about your work and believe there could be some interesting opportunities for collaboration between us.",
            "I hope you're doing well. I'm reaching out to introduce myself and explore potential opportunities for collaboration. I'm impressed by your work and think we might have some common interests that could lead to productive partnerships.",
            "I hope this email finds you in good health. I wanted to introduce myself and discuss potential ways we might work together. I believe our skills and interests could complement each other well, and I'd love to explore this possibility.",
        ],
    ),
    (
        IntentCategory::Collaboration,
        [
            "I hope this message finds you well. I'm reaching out to discuss potential collaboration opportunities that I believe could be mutually beneficial. I've been thinking about ways we could work together and have some ideas I'd like to share with you.",
            "I hope you're doing well. I wanted to explore working together on some exciting projects I have in mind. I believe our combined expertise could create something really special, and I'd love to discuss the possibilities.",
            "I hope this email finds you in good spirits. I'm interested in discussing collaboration opportunities that could benefit both of us. I have some ideas that I think could be very interesting and would value your input.",
        ],
    ),
    (
        IntentCategory::Feedback,
        [
            "I hope this message finds you well. I would greatly appreciate your feedback on a recent project and value your insights. Your perspective would be very helpful in improving our work and ensuring we're on the right track.",
            "I hope you're doing well. I'm reaching out to request your feedback on some work we've been developing. Your expertise in this area would be invaluable, and I'd love to hear your thoughts on how we can improve.",
            "I hope this email finds you in good health. I would value your opinion and feedback on a project we're working on. Your experience and insights would be very helpful in guiding our next steps.",
        ],
    ),
    (
        IntentCategory::Proposal,
        [
            "I hope this message finds you well. I have a proposal that I believe could be of interest to you and would appreciate the opportunity to discuss it. I think this could be a great opportunity for both of us, and I'd love to share the details.",
            "I hope you're doing well. I wanted to share a proposal with you that I think could be beneficial for both of us. I've put a lot of thought into this and believe it could lead to some exciting possibilities.",
            "I hope this email finds you in good spirits. I have an idea I'd like to propose and would appreciate your thoughts on it. I believe this could be something really special and would value your input.",
        ],
    ),
    (
        IntentCategory::Confirmation,
        [
            "I hope this message finds you well. I'm writing to confirm the details of our upcoming arrangement and ensure everything is in order. I want to make sure we're both on the same page and that all the necessary preparations are in place.",
            "I hope you're doing well. I wanted to confirm the specifics of our planned meeting and make sure we're aligned on the details. I want to ensure everything goes smoothly and that we have all the information we need.",
            "I hope this email finds you in good health. I'm reaching out to confirm our arrangements and verify all the details. I want to make sure everything is clear and that we're both prepared for what's ahead.",
        ],
    ),
    (
        IntentCategory::General,
        [
            "I hope this message finds you well. I wanted to reach out to you about something important that I believe would be of interest to you. I think this could be beneficial for both of us, and I'd love to discuss the possibilities.",
            "I hope you're doing well. I'm reaching out to connect with you regarding a matter that might interest you and could be beneficial for both of us. I have some ideas I'd like to share and would value your input.",
            "I hope this email finds you in good spirits. I wanted to get in touch to discuss a few things that I think would be worth your attention. I believe this could lead to some interesting opportunities and would love to explore them with you.",
        ],
    ),
];

const ELABORATIONS: &[(IntentCategory, [&str; 3])] = &[
    (
        IntentCategory::MeetingRequest,
        [
            " I believe this meeting would be very productive and could help us move forward with our goals. I'm flexible with timing and would be happy to work around your schedule.",
            " This would give us the opportunity to discuss this in detail and ensure we're both on the same page. I'm available at your convenience and can accommodate your schedule.",
            " I think this would be the best way to address this matter effectively and ensure we have a clear plan moving forward. Please let me know what times work best for you.",
        ],
    ),
    (
        IntentCategory::ThankYou,
        [
            " Your support has meant a great deal to our team, and we're truly grateful for your generosity and expertise. I hope we can continue to work together in the future.",
            " Your contributions have made a real difference, and I wanted to make sure you know how much we appreciate everything you've done. Thank you again for your time and effort.",
            " We're very fortunate to have your support, and I wanted to express our sincere appreciation for all your help. Your expertise and guidance have been invaluable.",
        ],
    ),
    (
        IntentCategory::Inquiry,
        [
            " I believe your insights would be very valuable for our current project, and I would appreciate any guidance you can provide. Thank you in advance for your time and expertise.",
            " Your experience in this area would be very helpful, and I would be grateful for any advice or suggestions you might have. I look forward to hearing from you.",
            " I think your perspective would be very valuable, and I would appreciate any input you can share. Thank you for considering my request.",
        ],
    ),
    (
        IntentCategory::Update,
        [
            " I wanted to make sure you're kept informed of our progress and that you have all the information you need. Please let me know if you have any questions or if there's anything else you'd like to know.",
            " I believe this update will help keep us aligned and ensure we're moving in the right direction. I'm happy to provide more details if needed.",
            " I wanted to share this information with you and make sure we're both on the same page. Please don't hesitate to reach out if you need any clarification.",
        ],
    ),
];

const DEFAULT_ELABORATIONS: [&str; 3] = [
    " I wanted to make sure you have all the information you need and that we're aligned on this matter. Please let me know if you have any questions or if there's anything else I can help with.",
    " I believe this addresses the key points we discussed, and I wanted to ensure everything is clear. I'm happy to provide additional details if needed.",
    " I wanted to follow up on this and make sure we're both on the same page. Please don't hesitate to reach out if you need any clarification or have any questions.",
];

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Row selector for the closing table.
///
/// Urgency outranks an action request, which outranks tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClosingKey {
    Urgent,
    ActionRequired,
    Tone(ToneCategory),
}

impl ClosingKey {
    /// Pick the row for a message.
    pub fn select(urgency: UrgencyLevel, action_required: bool, tone: ToneCategory) -> Self {
        if urgency == UrgencyLevel::Urgent {
            Self::Urgent
        } else if action_required {
            Self::ActionRequired
        } else {
            Self::Tone(tone)
        }
    }
}

const CLOSINGS: &[((ClosingKey, FormalityLevel), &str)] = &[
    (
        (ClosingKey::Urgent, FormalityLevel::Formal),
        "I look forward to your prompt response and appreciate your immediate attention to this matter.",
    ),
    (
        (ClosingKey::Urgent, FormalityLevel::Casual),
        "Looking forward to hearing from you soon - this is quite urgent!",
    ),
    (
        (ClosingKey::ActionRequired, FormalityLevel::Formal),
        "I look forward to hearing from you soon and appreciate your time and consideration.",
    ),
    (
        (ClosingKey::ActionRequired, FormalityLevel::Casual),
        "Looking forward to hearing from you soon!",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Friendly), FormalityLevel::Formal),
        "I appreciate your time and look forward to our continued collaboration.",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Friendly), FormalityLevel::Casual),
        "Thanks so much for your time - looking forward to catching up soon!",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Professional), FormalityLevel::Formal),
        "I appreciate your time and consideration, and look forward to our continued professional relationship.",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Professional), FormalityLevel::Casual),
        "Thank you for your time and I look forward to working with you.",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Apologetic), FormalityLevel::Formal),
        "I appreciate your understanding and patience, and look forward to resolving this matter.",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Apologetic), FormalityLevel::Casual),
        "Thanks for your understanding - I really appreciate it.",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Enthusiastic), FormalityLevel::Formal),
        "I'm excited about the possibilities ahead and look forward to our continued collaboration.",
    ),
    (
        (ClosingKey::Tone(ToneCategory::Enthusiastic), FormalityLevel::Casual),
        "I'm really excited about this and can't wait to work together!",
    ),
];

const DEFAULT_FORMAL_CLOSING: &str = "I appreciate your time and look forward to hearing from you.";
const DEFAULT_CASUAL_CLOSING: &str = "Looking forward to hearing from you!";

/// Signature block selector.  Any formal message gets the formal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureKey {
    Formal,
    Friendly,
    Professional,
    Enthusiastic,
}

impl SignatureKey {
    /// `None` selects the default block.
    pub fn select(formality: FormalityLevel, tone: ToneCategory) -> Option<Self> {
        match (formality, tone) {
            (FormalityLevel::Formal, _) => Some(Self::Formal),
            (FormalityLevel::Casual, ToneCategory::Friendly) => Some(Self::Friendly),
            (FormalityLevel::Casual, ToneCategory::Professional) => Some(Self::Professional),
            (FormalityLevel::Casual, ToneCategory::Enthusiastic) => Some(Self::Enthusiastic),
            (FormalityLevel::Casual, _) => None,
        }
    }
}

/// A value that exists for both formality levels.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PerFormality {
    formal: String,
    casual: String,
}

impl PerFormality {
    fn get(&self, formality: FormalityLevel) -> &str {
        match formality {
            FormalityLevel::Formal => &self.formal,
            FormalityLevel::Casual => &self.casual,
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateLibrary
// ---------------------------------------------------------------------------

/// Immutable lookup tables used by the composer.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    subjects: HashMap<IntentCategory, String>,
    greetings: HashMap<(FormalityLevel, ToneCategory), String>,
    default_greeting: PerFormality,
    paragraphs: HashMap<IntentCategory, Vec<String>>,
    elaborations: HashMap<IntentCategory, Vec<String>>,
    default_elaborations: Vec<String>,
    closings: HashMap<(ClosingKey, FormalityLevel), String>,
    default_closing: PerFormality,
    signatures: HashMap<SignatureKey, String>,
    default_signature: String,
}

impl TemplateLibrary {
    /// The built-in banks, with signatures rendered from `config`.
    pub fn builtin(config: &ComposerConfig) -> Self {
        let sender = format!("{}\n{}", config.sender_name, config.organization);

        let signatures = HashMap::from([
            (
                SignatureKey::Formal,
                format!(
                    "Best regards,\n{sender}\nEmail: {}\nPhone: {}\nWebsite: {}",
                    config.contact_email, config.contact_phone, config.website
                ),
            ),
            (
                SignatureKey::Friendly,
                format!("Best wishes,\n{sender}\nLet's make great things happen together!"),
            ),
            (
                SignatureKey::Professional,
                format!("Sincerely,\n{sender}\nProfessional Solutions for Modern Business"),
            ),
            (
                SignatureKey::Enthusiastic,
                format!("Excited to work with you,\n{sender}\nInnovation • Collaboration • Success"),
            ),
        ]);

        Self {
            subjects: owned_map(SUBJECTS),
            greetings: owned_map(GREETINGS),
            default_greeting: PerFormality {
                formal: DEFAULT_FORMAL_GREETING.into(),
                casual: DEFAULT_CASUAL_GREETING.into(),
            },
            paragraphs: owned_banks(PARAGRAPHS),
            elaborations: owned_banks(ELABORATIONS),
            default_elaborations: DEFAULT_ELABORATIONS.iter().map(|s| s.to_string()).collect(),
            closings: owned_map(CLOSINGS),
            default_closing: PerFormality {
                formal: DEFAULT_FORMAL_CLOSING.into(),
                casual: DEFAULT_CASUAL_CLOSING.into(),
            },
            signatures,
            default_signature: format!("Best regards,\n{sender}"),
        }
    }

    /// Replace the long-form paragraph bank for one intent.
    pub fn with_paragraphs(mut self, intent: IntentCategory, bank: Vec<String>) -> Self {
        self.paragraphs.insert(intent, bank);
        self
    }

    /// Replace the elaboration bank for one intent.
    pub fn with_elaborations(mut self, intent: IntentCategory, bank: Vec<String>) -> Self {
        self.elaborations.insert(intent, bank);
        self
    }

    /// Subject line, prefixed with `URGENT: ` for urgent requests.
    pub fn subject(&self, intent: IntentCategory, urgency: UrgencyLevel) -> String {
        let base = self
            .subjects
            .get(&intent)
            .map_or(DEFAULT_SUBJECT, String::as_str);

        match urgency {
            UrgencyLevel::Urgent => format!("URGENT: {base}"),
            UrgencyLevel::Normal => base.to_string(),
        }
    }

    /// Two-line greeting with the display name filled in.
    pub fn greeting(&self, formality: FormalityLevel, tone: ToneCategory, name: &str) -> String {
        self.greetings
            .get(&(formality, tone))
            .map_or_else(|| self.default_greeting.get(formality), String::as_str)
            .replace(NAME_SLOT, name)
    }

    /// Long-form paragraphs for an intent; unknown intents use `general`.
    pub fn paragraphs(&self, intent: IntentCategory) -> &[String] {
        self.paragraphs
            .get(&intent)
            .or_else(|| self.paragraphs.get(&IntentCategory::General))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Elaboration clauses appended after a synthesized sentence.
    pub fn elaborations(&self, intent: IntentCategory) -> &[String] {
        self.elaborations
            .get(&intent)
            .unwrap_or(&self.default_elaborations)
    }

    /// Closing sentence, selected by [`ClosingKey::select`] and formality.
    pub fn closing(
        &self,
        urgency: UrgencyLevel,
        action_required: bool,
        tone: ToneCategory,
        formality: FormalityLevel,
    ) -> &str {
        let key = ClosingKey::select(urgency, action_required, tone);
        self.closings
            .get(&(key, formality))
            .map_or_else(|| self.default_closing.get(formality), String::as_str)
    }

    /// Signature block for the given register; unmapped pairs get the plain one.
    pub fn signature(&self, formality: FormalityLevel, tone: ToneCategory) -> &str {
        SignatureKey::select(formality, tone)
            .and_then(|key| self.signatures.get(&key))
            .unwrap_or(&self.default_signature)
    }
}

fn owned_map<K: Copy + Eq + std::hash::Hash>(entries: &[(K, &str)]) -> HashMap<K, String> {
    entries
        .iter()
        .map(|(key, text)| (*key, (*text).to_string()))
        .collect()
}

fn owned_banks<const N: usize>(
    entries: &[(IntentCategory, [&str; N])],
) -> HashMap<IntentCategory, Vec<String>> {
    entries
        .iter()
        .map(|(intent, bank)| (*intent, bank.iter().map(|s| s.to_string()).collect()))
        .collect()
}
