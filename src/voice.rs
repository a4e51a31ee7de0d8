use crate::models::{Draft, Mood, VoiceCommand};

const WENT_WELL: &str = "what went well:";
const COULD_IMPROVE: &str = "could improve:";
const TOMORROW_GOAL: &str = "tomorrow goal:";
const MOOD: &str = "mood:";
const MOOD_NOTE: &str = "mood note:";

/// Spoken words and the mood they select, checked in order.
const SPOKEN_MOODS: &[(&str, Mood)] = &[
    ("amazing", Mood::Amazing),
    ("great", Mood::Amazing),
    ("excellent", Mood::Amazing),
    ("good", Mood::Good),
    ("fine", Mood::Good),
    ("okay", Mood::Okay),
    ("ok", Mood::Okay),
    ("alright", Mood::Okay),
    ("bad", Mood::Bad),
    ("poor", Mood::Bad),
    ("terrible", Mood::Terrible),
    ("awful", Mood::Terrible),
    ("horrible", Mood::Terrible),
];

pub fn parse(transcript: &str) -> VoiceCommand {
    let command = transcript.trim().to_lowercase();

    if let Some(content) = after_marker(&command, WENT_WELL) {
        VoiceCommand::WentWell(content)
    } else if let Some(content) = after_marker(&command, COULD_IMPROVE) {
        VoiceCommand::CouldImprove(content)
    } else if let Some(content) = after_marker(&command, TOMORROW_GOAL) {
        VoiceCommand::TomorrowGoal(content)
    } else if let Some(spoken) = after_marker(&command, MOOD) {
        SPOKEN_MOODS
            .iter()
            .find(|(word, _)| spoken.contains(word))
            .map_or(VoiceCommand::Ignored, |(_, mood)| VoiceCommand::Mood(*mood))
    } else if let Some(content) = after_marker(&command, MOOD_NOTE) {
        VoiceCommand::MoodNote(content)
    } else {
        VoiceCommand::Dictation(transcript.to_string())
    }
}

/// Text after the first occurrence of `marker`, up to the next one.
fn after_marker(command: &str, marker: &str) -> Option<String> {
    let (_, rest) = command.split_once(marker)?;
    let content = rest.split(marker).next().unwrap_or_default();
    Some(content.trim().to_string())
}

/// Writes the command into the draft. Dictation fills the first empty
/// reflection field and is dropped when all three are filled.
pub fn apply(draft: &mut Draft, command: &VoiceCommand) {
    match command {
        VoiceCommand::WentWell(text) => draft.went_well = text.clone(),
        VoiceCommand::CouldImprove(text) => draft.could_improve = text.clone(),
        VoiceCommand::TomorrowGoal(text) => draft.tomorrow_goal = text.clone(),
        VoiceCommand::Mood(mood) => draft.mood = Some(*mood),
        VoiceCommand::MoodNote(text) => draft.mood_note = text.clone(),
        VoiceCommand::Dictation(text) => {
            let fields = [
                &mut draft.went_well,
                &mut draft.could_improve,
                &mut draft.tomorrow_goal,
            ];
            if let Some(field) = fields.into_iter().find(|field| field.is_empty()) {
                *field = text.clone();
            }
        }
        VoiceCommand::Ignored => {}
    }
}
