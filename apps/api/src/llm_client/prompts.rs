// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Instruction appended to extraction prompts so gaps stay visible.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    CRITICAL: Only extract what is written in the document. \
    If a piece of information is not present, return null for it. \
    Do NOT infer, guess, or invent values.";
