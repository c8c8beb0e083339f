//! Step outcomes and the fire-and-forget cues emitted alongside them.

/// Sound notification raised by the game core.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AudioCue {
    /// Food was consumed.
    Eat,
    /// Speed went up after a score milestone.
    Bonus,
}

/// Result of one `GameSession::update` call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Not enough time has passed for a step.
    Waiting,
    /// The snake stepped without eating.
    Continuing,
    /// The snake stepped onto the food.
    Ate,
    /// The session ended; carries the final score.
    GameOver { score: u32 },
}

