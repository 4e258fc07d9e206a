//! Fixed replies the bot draws from: topic facts, mood confirmations,
//! banners, recommendation templates and the zodiac scent table.

use rand::seq::SliceRandom;
use rand::RngCore;

/// Topics answered from a fixed set of candidate replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    History,
    Brand,
    SelfDescription,
    Joke,
    Help,
    Happy,
    Upset,
    Angry,
    NotUnderstood,
}

impl Topic {
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Topic::History => HISTORY,
            Topic::Brand => BRANDS,
            Topic::SelfDescription => SELF_DESCRIPTIONS,
            Topic::Joke => JOKES,
            Topic::Help => HELP,
            Topic::Happy => HAPPY_CONFIRMATIONS,
            Topic::Upset => UPSET_CONFIRMATIONS,
            Topic::Angry => ANGRY_CONFIRMATIONS,
            Topic::NotUnderstood => NOT_UNDERSTOOD,
        }
    }

    /// One candidate, chosen uniformly by `rng`.
    pub fn reply(self, rng: &mut dyn RngCore) -> &'static str {
        pick(self.candidates(), rng)
    }
}

/// Uniform choice over a non-empty candidate list.
pub fn pick<'a>(candidates: &[&'a str], rng: &mut dyn RngCore) -> &'a str {
    candidates.choose(rng).copied().unwrap_or_default()
}

const FUNCTIONS: &str = "My functions are as follows:\n\
[1] I can recommend perfumes for you, just need to tell me what [scents] you like or your [zodiac sign].\n\
[2] I can also share perfume-related jokes, or tell you about some perfume brands or their history.\n\
[3] Of course, I can also get time; help you relieve your emotions; introduce myself, etc.";

/// Reply to greetings and small talk.
pub fn capability_banner() -> String {
    format!("Hello, all the best!\n{FUNCTIONS}")
}

/// Appended to the not-understood reply.
pub fn guidance_banner() -> String {
    format!("You can ask me some questions again. I'd be happy to help！\n{FUNCTIONS}")
}

pub fn greeting(name: &str) -> String {
    format!(
        "Hello, I am {name}, your personal perfume consultant. \
Let's start this wonderful journey of smell together!\n{FUNCTIONS}"
    )
}

pub const FAREWELL: &str = "Thank you for using customised perfume Journeys. \
We wish you a wonderful day in beautiful fragrances. Remember to give me a good review!";

pub const NO_PERFUME_FOUND: &str = "I'm really sorry that I couldn't find the suitable perfume, \
can you change your favourite scent? (e.g. rose, violet, lime, grapefruit)";

pub const TURN_FAILED: &str =
    "Sorry, something went wrong reading your message. Please try again.";

pub const UNKNOWN_SIGN: &str = "Sorry, I don't have a perfume suggestion for that sign.";

const FOLLOW_UP: &str =
    "\nDo you have any other favourite flavours? I can continue to recommend them for you.";

/// Fills one of the recommendation templates with a record's fields.
pub fn recommendation_reply(name: &str, brand: &str, notes: &str, rng: &mut dyn RngCore) -> String {
    let templates = [
        format!(
            "You're in for a treat! How about the delightful [{name}] from [{brand}]? \
It has a wonderful blend of notes like [{notes}], perfect for your next perfume adventure. {FOLLOW_UP}"
        ),
        format!(
            "How about [{name}] from [{brand}]? Its [{notes}] will make you feel like you're \
wearing a little slice of luxury every day. {FOLLOW_UP}"
        ),
        format!(
            "Here's a thought: why not try [{name}] from [{brand}]? The [{notes}] are fresh \
and lively, just the kind of scent that might brighten your day. {FOLLOW_UP}"
        ),
    ];
    templates.choose(rng).cloned().unwrap_or_default()
}

pub fn time_reply(clock: &str) -> String {
    format!("The time is {clock}. \nDo you have any other questions? Continuing to serve you.")
}

pub fn zodiac_reply(sign: &str, suggestion: &str) -> String {
    format!(
        "Based on your zodiac sign ({sign}), I suggest a perfume with: {suggestion}. \
Of course, you don't have to pay attention to my advice if you have a favourite scent, \
it's most important to pursue what you like! \nAre you satisfied with the answer? \
You can keep asking me questions."
    )
}

/// Sign to scent style, in the order signs are checked.
pub const ZODIAC: &[(&str, &str)] = &[
    ("aries", "Spicy and bold perfumes with hints of cinnamon or pepper"),
    ("taurus", "Floral and earthy perfumes with lavender and patchouli"),
    ("gemini", "Citrus and fresh perfumes, light and airy"),
    ("cancer", "Soft and comforting, with notes of vanilla and coconut"),
    ("leo", "Warm and luxurious perfumes with amber and musk"),
    ("virgo", "Fresh, clean scents with notes of lemon and green tea"),
    ("libra", "Balanced perfumes, with a touch of rose and jasmine"),
    ("scorpio", "Mysterious and deep, with scents of leather and oud"),
    ("sagittarius", "Woody and adventurous scents with sandalwood and cedar"),
    ("capricorn", "Earthy and grounding perfumes, with vetiver and moss"),
    ("aquarius", "Unique and unconventional, with aquatic and metallic notes"),
    ("pisces", "Dreamy and floral perfumes, with hints of lily and jasmine"),
];

/// Scent style for a sign name, ignoring case.
pub fn zodiac_suggestion(sign: &str) -> &'static str {
    let sign = sign.trim().to_lowercase();
    ZODIAC
        .iter()
        .find(|(key, _)| *key == sign)
        .map(|(_, suggestion)| *suggestion)
        .unwrap_or(UNKNOWN_SIGN)
}

/// First sign, in table order, whose name occurs anywhere in `text`.
pub fn find_zodiac(text: &str) -> Option<&'static str> {
    ZODIAC
        .iter()
        .map(|(key, _)| *key)
        .find(|key| text.contains(key))
}

const HISTORY: &[&str] = &[
    "Perfume dates back to ancient Egypt, where it was used in religious rituals and for personal adornment.",
    "The word 'perfume' comes from the Latin word perfumare, meaning 'to smoke through,' as incense was often used in early fragrance-making.",
    "The first modern perfume factory was established in the 16th century in Italy, making it more accessible to the elite.",
    "In the 17th century, perfume became a symbol of wealth and sophistication in Europe, especially among French royalty.",
    "The development of alcohol-based perfumes in the 18th century made fragrances more wearable and longer-lasting.",
    "Perfume became a significant part of the fashion world in the 19th century, with famous houses like Guerlain and Chanel emerging.",
    "In the 20th century, synthetic fragrances were introduced, revolutionizing the perfume industry by expanding scent possibilities.",
];

const BRANDS: &[&str] = &[
    "Chanel: Classic elegance and timeless luxury. Chanel No. 5, launched in 1921, is one of the best-selling perfumes in history, known for its floral aldehyde scent.",
    "Dior: Bold and elegant fragrances that reflect French refinement. Dior perfumes are often known for their rich, complex compositions.",
    "Guerlain: Being one of the oldest perfume houses (established in 1828). Guerlain is known for creating rich, opulent scents with a focus on floral, oriental, and powdery notes.",
    "Tom Ford: Bold, sensual, and modern scents with a touch of luxury. Tom Ford’s fragrances often feature warm, spicy, and woody notes.",
    "Creed: High-quality, luxurious fragrances with a long-lasting, unique scent profile. Aventus, launched in 2010, is famous for its smoky and fruity blend.",
    "Jo Malone: Simple, fresh, and elegant fragrances with a focus on natural ingredients. Jo Malone is known for its ability to blend scents to create subtle yet distinctive perfumes.",
    "Yves Saint Laurent: Sensual and bold fragrances, often with spicy, oriental, or floral notes. Opium, launched in 1977, became an iconic, controversial fragrance with its exotic and spicy scent.",
    "Hermès: Elegant, minimalist, and high-end fragrances that often feature earthy and woody notes. Hermès is known for creating sophisticated yet subtle perfumes.",
    "Chloé: Light, floral, and feminine scents that evoke elegance and romance. Chloé’s fragrances often feature a soft, powdery quality.",
    "Acqua di Parma: High-quality, refreshing, and sophisticated citrus-based scents. Acqua di Parma is known for its luxurious, Italian-made fragrances.",
];

const SELF_DESCRIPTIONS: &[&str] = &[
    "Regarding why I'm called ‘perfumer’, it's because I know a lot about perfume and I'd love to share that knowledge with you! \nPlease go ahead and ask me questions.",
    "I am ‘perfumer’, besides perfume, I have many other functions, such as checking the time, telling jokes, comforting your mood and so on. \nPlease go ahead and ask me questions.",
    "I'm ‘perfumer’, you can just call me by my first name, and I'm happy to bring you perfume knowledge and emotional value. \nPlease go ahead and ask me questions.",
];

const JOKES: &[&str] = &[
    "My friend opened a perfume shop specializing in failed scent combinations. He says every time someone leaves, it's a huge relief.",
    "Why are perfume bottles always so nervous? Because they might get sprayed.",
    "Why can’t perfume keep a secret? Because it always gets out.",
    "I created a coffee-scented perfume. When I wore it, I felt so energized—everyone else thought I got a job at a café.",
    "Someone said my perfume was too expensive. I replied, 'Can’t you smell the confidence?'",
    "One perfume bottle asked another, 'Why are you so quiet?' It replied, 'I’m just bottling it up.'",
    "I once bought a perfume designed to cover bad smells. Everyone kept asking, 'What’s that scent?' I said, 'It’s called ‘Trying My Best.’'",
];

const HELP: &[&str] = &[
    "I'm here to help with anything you need! Whether it's jokes, advice, or a friendly chat, just ask!",
    "Need assistance or a good laugh? I’m here for both! Ask me anything!",
    "I’m your friendly chatbot, ready to help, share a joke, or just have a conversation. What’s on your mind?",
    "Looking for answers, jokes, or just someone to talk to? I’ve got you covered. Ask away!",
    "I’m always ready to chat, tell a joke, or help you out! What can I do for you today?",
    "Want a fun chat or a good laugh? Or maybe some help? Just ask me anything!",
];

const HAPPY_CONFIRMATIONS: &[&str] = &[
    "It makes me happy to see you happy. Ongoing you continue to serve.",
    "Since you are so happy, remember to give me a good review.",
    "Remember to be so happy every day. Continuing you continue to serve.",
    "Since you are in such a good mood today, why don't you try letting me recommend a perfume for you?",
];

const UPSET_CONFIRMATIONS: &[&str] = &[
    "Don't be sad about the little things. Do you want me to tell you a joke?",
    "Life is full of setbacks, may you get out of it soon. Shall I tell you a joke to cheer you up?",
    "Please stop being frustrated! I can recommend a perfume for you, it might bring you joy.",
];

const ANGRY_CONFIRMATIONS: &[&str] = &[
    "Please turn your grief into strength. Shall I tell you a joke to cheer you up?",
    "Anger harms the body. Why don't you let me tell you a joke?",
    "If venting your anger at me makes you feel better, then go ahead.",
];

const NOT_UNDERSTOOD: &[&str] = &[
    "Sorry, I didn't quite catch that.",
    "Hmm, I didn’t understand that.",
    "Oops, I didn’t quite catch that.",
    "I’m not sure I understood.",
    "Sorry, I didn’t quite get that.",
];
