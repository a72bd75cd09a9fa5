//! Fixed assistant texts for the intake conversation.

/// Opening turn; also the prompt of the full-name stage.
pub const GREETING: &str = "Hello! I'm TalentBot, your AI hiring assistant. \
I'll help with your initial screening process.\n\nMay I have your full name please?";

pub const EMAIL_PROMPT: &str = "Thanks! What's your email address?";
pub const PHONE_PROMPT: &str = "Got it. What's the best phone number to reach you?";
pub const EXPERIENCE_PROMPT: &str =
    "How many years of professional experience do you have? Please answer with a whole number.";
pub const POSITION_PROMPT: &str = "Which position are you applying for?";
pub const LOCATION_PROMPT: &str = "Where are you currently located?";
pub const TECH_STACK_PROMPT: &str = "Great! Now, please list your tech stack \
(e.g., Python, JavaScript, React).\n\nYou can separate technologies with commas or slashes.";

pub const EMAIL_REJECTION: &str = "That doesn't look like a valid email. Try again:";
pub const PHONE_REJECTION: &str =
    "That doesn't look like a valid phone number. Please include at least 10 digits:";
pub const EXPERIENCE_REJECTION: &str =
    "Please enter your experience as a whole number of years between 0 and 50:";
pub const TECH_STACK_REJECTION: &str =
    "I couldn't find any technologies in that. Please list at least one, separated by commas:";
pub const GENERIC_REJECTION: &str = "Sorry, I couldn't accept that answer. Please try again:";

/// Sent after the question sets once the intake completes.
pub const CLOSING_MESSAGE: &str = "Screening Complete!\n\nThank you for your time! \
A recruiter will review your responses and contact you soon.\n\nHave a great day!";

/// Sent when the candidate leaves before finishing.
pub const FAREWELL_MESSAGE: &str =
    "Thanks for chatting with TalentBot. Your screening has been ended. Goodbye!";

/// Returned for any turn submitted after the session has ended.
pub const SESSION_ENDED_MESSAGE: &str =
    "This session has already ended. Please start a new session to begin again.";

/// Experience used for question generation when the flow never captured one.
pub const DEFAULT_EXPERIENCE: &str = "2";

/// Apology shown in place of a question set that could not be generated.
pub fn generation_apology(technology: &str) -> String {
    format!(
        "Sorry, I couldn't generate interview questions for {} right now. \
A recruiter will follow up on this topic.",
        technology
    )
}

/// Builds the instruction sent to the language model for one technology.
pub fn question_prompt(technology: &str, experience: &str) -> String {
    format!(
        "Generate 3-5 technical interview questions about {tech} \
suitable for a candidate with {experience} years of experience.\n\n\
Focus on:\n\
- Core concepts (20%)\n\
- Practical applications (40%)\n\
- Problem-solving scenarios (40%)\n\n\
Format as a numbered list.",
        tech = technology,
        experience = experience,
    )
}
