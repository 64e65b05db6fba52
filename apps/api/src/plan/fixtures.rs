//! Canned model answers shared by the plan tests.

use serde_json::{json, Value};

/// A complete structured answer, as the model is asked to produce it.
pub fn well_formed_plan() -> Value {
    json!({
        "mainGoal": {"goal": "learn guitar", "deadline": "30 days", "committed": true},
        "planMeta": {
            "planGoal": "Play five full songs by ear in 30 days.",
            "benefits": [
                "Creative outlet every day",
                "Sharper focus",
                "Confidence performing for friends",
                "A skill for life"
            ],
            "whyThisWorks": [
                "Small daily reps build motor memory",
                "Identity-based habits stick"
            ]
        },
        "currentPlan": {
            "brainprogram": {
                "morning": "I wake up eager to play.",
                "night": "As I fall asleep my hands rehearse every chord."
            },
            "burningDesires": [
                "I want to play around the campfire",
                "I want to write my own songs",
                "I want to jam with friends",
                "I want to feel music in my hands",
                "I want to master barre chords",
                "I want to perform on stage",
                "I want to prove I can finish what I start"
            ],
            "affirmations": [
                "I am a guitarist.",
                "I practice every day.",
                "I learn fast.",
                "I love the sound I make.",
                "I finish what I start."
            ],
            "dailyRoutine": {
                "day1": ["18:00 tune and stretch", "18:15 open chords"],
                "day2": ["18:00 chord changes"],
                "day3": [{"time": "18:00", "task": "strumming patterns"}],
                "day4": ["18:00 first song"],
                "day5": ["18:00 first song, full tempo"],
                "day6": ["18:00 second song"],
                "day7": ["18:00 play both songs start to finish"]
            }
        }
    })
}

pub fn well_formed_plan_json() -> String {
    serde_json::to_string_pretty(&well_formed_plan()).unwrap()
}

/// A complete sectioned answer, with the kind of preamble models like to add.
pub const SECTIONED_PLAN_TEXT: &str = "Absolutely! Here is your plan.

### PLAN GOAL
Play five full songs by ear in 30 days.

### BENEFITS
- Creative outlet every day
- Sharper focus
- Confidence performing for friends
- A skill for life

### WHY THIS WORKS
1. Small daily reps build motor memory
2. Identity-based habits stick

### MORNING PROGRAM
I wake up eager to play. Music flows through me.

### NIGHT PROGRAM
As I fall asleep my hands rehearse every chord.

### BURNING DESIRES
- I want to play around the campfire
- I want to write my own songs
- I want to jam with friends
- I want to feel music in my hands
- I want to master barre chords
- I want to perform on stage
- I want to prove I can finish what I start

### AFFIRMATIONS
- I am a guitarist.
- I practice every day.
- I learn fast.
- I love the sound I make.
- I finish what I start.

### DAILY GUIDE
18:00 tune and stretch. 18:15 chord changes. 19:00 play one song start to finish.
";
