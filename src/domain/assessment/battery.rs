//! The built-in 18-question battery.
//!
//! Choice text keeps its trailing style annotation; the catalog strips it at
//! load time and scores by position through [`SCORING_ROWS`].

use super::style::{Style, StyleDescriptor};

/// A question as authored, before normalization.
pub struct RawQuestion {
    pub text: &'static str,
    pub choices: [&'static str; 4],
}

pub const QUESTIONS: [RawQuestion; 18] = [
    RawQuestion {
        text: "When talking to a customer…",
        choices: [
            "I maintain eye contact the whole time. (Driver)",
            "I alternate between looking at the person and looking down. (Amiable)",
            "I look around the room a good deal of the time. (Analytical)",
            "I try to maintain eye contact but look away from time to time. (Expressive)",
        ],
    },
    RawQuestion {
        text: "If I have an important decision to make…",
        choices: [
            "I think it through completely before deciding. (Analytical)",
            "I go with my gut feelings. (Driver)",
            "I consider the impact it will have on other people before deciding. (Amiable)",
            "I run it by someone whose opinion I respect before deciding. (Expressive)",
        ],
    },
    RawQuestion {
        text: "My office or work area mostly has…",
        choices: [
            "Family photos and sentimental items displayed. (Amiable)",
            "Inspirational posters, awards, and art displayed. (Expressive)",
            "Graphs and charts displayed. (Analytical)",
            "Calendars and project outlines displayed. (Driver)",
        ],
    },
    RawQuestion {
        text: "If I am having a conflict with a colleague or customer…",
        choices: [
            "I try to help the situation along by focusing on the positive. (Expressive)",
            "I stay calm and try to understand the cause of the conflict. (Amiable)",
            "I try to avoid discussing the issue causing the conflict. (Analytical)",
            "I confront it right away so that it can get resolved as soon as possible. (Driver)",
        ],
    },
    RawQuestion {
        text: "When I talk on the phone at work…",
        choices: [
            "I keep the conversation focused on the purpose of the call. (Driver)",
            "I will spend a few minutes chatting before getting down to business. (Expressive)",
            "I am in no hurry to get off the phone and do not mind chatting about personal things, the weather, and so on. (Amiable)",
            "I try to keep the conversation as brief as possible. (Analytical)",
        ],
    },
    RawQuestion {
        text: "If a colleague is upset…",
        choices: [
            "I ask if I can do anything to help. (Amiable)",
            "I leave him alone because I do not want to intrude on his privacy. (Analytical)",
            "I try to cheer him up and help him to see the bright side. (Expressive)",
            "I feel uncomfortable and hope he gets over it soon. (Driver)",
        ],
    },
    RawQuestion {
        text: "When I attend meetings at work…",
        choices: [
            "I sit back and think about what is being said before offering my opinion. (Analytical)",
            "I put all my cards on the table so my opinion is well known. (Driver)",
            "I express my opinion enthusiastically, but listen to other's ideas as well. (Expressive)",
            "I try to support the ideas of the other people in the meeting. (Amiable)",
        ],
    },
    RawQuestion {
        text: "When I make presentation to a group…",
        choices: [
            "I am entertaining and often humorous. (Expressive)",
            "I am clear and concise. (Analytical)",
            "I speak relatively quietly. (Amiable)",
            "I am direct, specific and sometimes loud. (Driver)",
        ],
    },
    RawQuestion {
        text: "When a client is explaining a problem to me…",
        choices: [
            "I try to understand and empathize with how she is feeling. (Amiable)",
            "I look for the specific facts pertaining to the situation. (Analytical)",
            "I listen carefully for the main issue so that I can find a solution. (Driver)",
            "I use my body language and tone of voice to show that I understand. (Expressive)",
        ],
    },
    RawQuestion {
        text: "When I attend training programs or presentations…",
        choices: [
            "I get bored if the person moves too slowly. (Driver)",
            "I try to be supportive of the speaker, knowing how hard the job is. (Amiable)",
            "I want it to be entertaining as well as informative. (Expressive)",
            "I look for the logic behind what the speaker is saying. (Analytical)",
        ],
    },
    RawQuestion {
        text: "When I want to get my point across to customers or co-workers…",
        choices: [
            "I listen to their point of view first and then express my ideas gently. (Amiable)",
            "I strongly state my opinion so that they know where I stand. (Driver)",
            "I try to persuade them without being too forceful. (Expressive)",
            "I explain the thinking and logic behind what I am saying. (Analytical)",
        ],
    },
    RawQuestion {
        text: "When I am late for an appointment or meeting…",
        choices: [
            "I do not panic but call ahead to say that I will be a few minutes late. (Analytical)",
            "I feel bad about keeping the other person waiting. (Amiable)",
            "I get very upset and rush to get there as soon as possible. (Driver)",
            "I sincerely apologize once I arrive. (Expressive)",
        ],
    },
    RawQuestion {
        text: "I set goals and objectives at work that…",
        choices: [
            "I think I can realistically attain. (Analytical)",
            "I feel are challenging and would be exciting to achieve. (Expressive)",
            "I need to achieve as part of a bigger objective. (Driver)",
            "Will make me feel good when I achieve them. (Amiable)",
        ],
    },
    RawQuestion {
        text: "When explaining a problem to a colleague from whom I need help…",
        choices: [
            "I explain the problem in as much detail as possible. (Analytical)",
            "I sometimes exaggerate to make my point. (Expressive)",
            "I try to explain how the problem makes me feel. (Amiable)",
            "I explain how I would like the problem to be solved. (Driver)",
        ],
    },
    RawQuestion {
        text: "If customers or colleagues are late for an appointment with me…",
        choices: [
            "I keep myself busy by making phone calls or working until they arrive. (Expressive)",
            "I assume they were delayed a bit and do not get upset. (Amiable)",
            "I call to make sure that I have the correct information. (Analytical)",
            "I get upset that the person is wasting my time. (Driver)",
        ],
    },
    RawQuestion {
        text: "When I am behind on a project and feel pressure to get it done…",
        choices: [
            "I make a list of everything I need to do, in what order, by when. (Analytical)",
            "I block out everything else and focus 100% on the work I need to do. (Driver)",
            "I become anxious and have a hard time focusing on my work. (Amiable)",
            "I set a date to get the project done by and go for it. (Expressive)",
        ],
    },
    RawQuestion {
        text: "When I feel verbally attacked…",
        choices: [
            "I ask the person to stop. (Driver)",
            "I feel hurt but usually do not say anything about it to them. (Amiable)",
            "I ignore their anger and try to focus on the facts of the situation. (Analytical)",
            "I let them know in strong terms that I do not like their behavior. (Expressive)",
        ],
    },
    RawQuestion {
        text: "When I see someone whom I like and haven't seen recently…",
        choices: [
            "I give him a friendly hug. (Amiable)",
            "Greet but do not shake hands. (Analytical)",
            "Give a firm and quick handshake. (Driver)",
            "Give an enthusiastic handshake that lasts a few moments. (Expressive)",
        ],
    },
];

/// Style for letters A-D of each question, keyed by 1-based question number.
pub const SCORING_ROWS: [(usize, [Style; 4]); 18] = [
    (1, [Style::Driver, Style::Amiable, Style::Analytical, Style::Expressive]),
    (2, [Style::Analytical, Style::Driver, Style::Amiable, Style::Expressive]),
    (3, [Style::Amiable, Style::Expressive, Style::Analytical, Style::Driver]),
    (4, [Style::Expressive, Style::Amiable, Style::Analytical, Style::Driver]),
    (5, [Style::Driver, Style::Expressive, Style::Amiable, Style::Analytical]),
    (6, [Style::Amiable, Style::Analytical, Style::Expressive, Style::Driver]),
    (7, [Style::Analytical, Style::Driver, Style::Expressive, Style::Amiable]),
    (8, [Style::Expressive, Style::Analytical, Style::Amiable, Style::Driver]),
    (9, [Style::Amiable, Style::Analytical, Style::Driver, Style::Expressive]),
    (10, [Style::Driver, Style::Amiable, Style::Expressive, Style::Analytical]),
    (11, [Style::Amiable, Style::Driver, Style::Expressive, Style::Analytical]),
    (12, [Style::Analytical, Style::Amiable, Style::Driver, Style::Expressive]),
    (13, [Style::Analytical, Style::Expressive, Style::Driver, Style::Amiable]),
    (14, [Style::Analytical, Style::Expressive, Style::Amiable, Style::Driver]),
    (15, [Style::Expressive, Style::Amiable, Style::Analytical, Style::Driver]),
    (16, [Style::Analytical, Style::Driver, Style::Amiable, Style::Expressive]),
    (17, [Style::Driver, Style::Amiable, Style::Analytical, Style::Expressive]),
    (18, [Style::Amiable, Style::Analytical, Style::Driver, Style::Expressive]),
];

/// Descriptor text for each style.
pub fn descriptor(style: Style) -> StyleDescriptor {
    match style {
        Style::Driver => StyleDescriptor {
            title: "Driver Style",
            keywords: &[
                "Decisive",
                "Independent",
                "Efficient",
                "Intense",
                "Deliberate",
                "Achieving",
            ],
            behaviors: &[
                "Make direct eye contact",
                "Move quickly and briskly with purpose",
                "Speak forcefully and fast-paced",
                "Use direct, bottom-line language",
                "Have planning calendars and project outlines displayed in their office",
            ],
            tips: &[
                "Make direct eye contact",
                "Speak at a fast pace",
                "Get down to business quickly",
                "Arrive on time",
                "Do not linger",
                "Use ABC",
                "Avoid over explanation",
                "Be organized and well prepared",
                "Focus on the results to be produced",
            ],
        },
        Style::Analytical => StyleDescriptor {
            title: "Analytical Style",
            keywords: &[
                "Serious",
                "Well-organized",
                "Systematic",
                "Logical",
                "Factual",
                "Reserved",
            ],
            behaviors: &[
                "Show little facial expression",
                "Have controlled body movement with slow gestures",
                "Have little inflection in their voice and may tend toward monotone",
                "Use language that is precise and focuses on specific details",
                "Often have charts, graphs and statistics displayed in their office",
            ],
            tips: &[
                "Do not speak in a loud or fast-paced voice",
                "Be more formal in your speech and manners",
                "Present the pros and cons of an idea, as well as options",
                "Do not overstate the benefits of something",
                "Follow up in writing",
                "Be on time and keep it brief",
                "Show how your tool has minimum risk",
            ],
        },
        Style::Amiable => StyleDescriptor {
            title: "Amiable Style",
            keywords: &[
                "Cooperative",
                "Friendly",
                "Supportive",
                "Patient",
                "Relaxed",
            ],
            behaviors: &[
                "Have a friendly facial expression",
                "Make frequent eye contact",
                "Use non-aggressive, non-dramatic gestures",
                "Speak slowly and in soft tones with moderate inflection",
                "Use language that is supportive and encouraging",
                "Display lots of family pictures in their office",
            ],
            tips: &[
                "Make eye contact but look away once in a while",
                "Speak at a moderate pace and with a softer voice",
                "Do not use harsh tone of voice or language",
                "Ask them for their opinions and ideas",
                "Do not try to counter their ideas with logic alone",
                "Encourage them to express any doubts or concerns they may have",
                "Avoid pressurizing them to make a decision",
                "Mutually agree on all goals, action plans and completion dates",
            ],
        },
        Style::Expressive => StyleDescriptor {
            title: "Expressive Style",
            keywords: &[
                "Outgoing",
                "Enthusiastic",
                "Persuasive",
                "Humorous",
                "Gregarious",
                "Lively",
            ],
            behaviors: &[
                "Use rapid hand and arm gestures",
                "Speak quickly with lots of animation and inflection",
                "Have a wide range of facial expressions",
                "Use language that is persuasive",
                "Have a workspace cluttered with inspirational items",
            ],
            tips: &[
                "Make direct eye contact",
                "Have energetic and fast-paced speech",
                "Allow time in a meeting for socializing",
                "Talk about experiences, people, and opinions as well as the facts",
                "Ask about their intuitive sense of things",
                "Support your ideas with testimonials from people whom they know and like",
                "Paraphrase any agreements made",
                "Maintain a balance between fun and reaching objectives",
            ],
        },
    }
}
