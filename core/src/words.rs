use crate::*;
use serde::Serialize;

/// A word the child spells or reads, with its spoken clue and picture hint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: &'static str,
    pub clue: &'static str,
    pub emoji: &'static str,
}

impl WordEntry {
    const fn new(word: &'static str, clue: &'static str, emoji: &'static str) -> Self {
        Self { word, clue, emoji }
    }
}

/// Shown for words without a picture.
pub const UNKNOWN_EMOJI: &str = "❓";

static EASY_WORDS: [WordEntry; 30] = [
    WordEntry::new("CAT", "A small pet that says meow.", "🐱"),
    WordEntry::new("DOG", "A friendly pet that barks.", "🐶"),
    WordEntry::new("SUN", "It shines bright in the sky.", "☀️"),
    WordEntry::new("CAR", "You can ride in it.", "🚗"),
    WordEntry::new("BUS", "It carries many people.", "🚌"),
    WordEntry::new("ANT", "A tiny insect that crawls.", "🐜"),
    WordEntry::new("HAT", "You wear it on your head.", "👒"),
    WordEntry::new("PEN", "You use it to write.", "🖊️"),
    WordEntry::new("MAP", "It shows you where things are.", "🗺️"),
    WordEntry::new("CUP", "You drink from it.", "☕"),
    WordEntry::new("BOX", "You can put things inside it.", "📦"),
    WordEntry::new("BED", "You sleep on it.", "🛏️"),
    WordEntry::new("PIG", "A pink farm animal that says oink.", "🐷"),
    WordEntry::new("RUG", "A soft mat on the floor.", "🧶"),
    WordEntry::new("BAT", "It flies and comes out at night.", "🦇"),
    WordEntry::new("FOX", "A clever orange animal.", "🦊"),
    WordEntry::new("JAR", "You can keep snacks inside it.", "🥫"),
    WordEntry::new("NUT", "A small food squirrels love.", "🥜"),
    WordEntry::new("LOG", "A big piece of a tree.", "🪵"),
    WordEntry::new("EGG", "A baby chick comes from this.", "🥚"),
    WordEntry::new("BUG", "A tiny creature that crawls or flies.", "🐞"),
    WordEntry::new("BEE", "A yellow insect that makes honey.", "🐝"),
    WordEntry::new("RAT", "A small furry animal with a tail.", "🐭"),
    WordEntry::new("OWL", "A night bird that says hoo.", "🦉"),
    WordEntry::new("TOY", "Something fun to play with.", "🧸"),
    WordEntry::new("KEY", "You use it to unlock things.", "🔑"),
    WordEntry::new("LIP", "Part of your mouth.", "👄"),
    WordEntry::new("EAR", "You use it to hear.", "👂"),
    WordEntry::new("BOW", "A pretty ribbon tie.", "🎀"),
    WordEntry::new("ICE", "Cold water that is frozen.", "🧊"),
];

static MEDIUM_WORDS: [WordEntry; 30] = [
    WordEntry::new("FROG", "It hops and says ribbit.", "🐸"),
    WordEntry::new("BIRD", "It flies in the sky.", "🐦"),
    WordEntry::new("LION", "The king of the jungle.", "🦁"),
    WordEntry::new("STAR", "Shines at night in the sky.", "⭐"),
    WordEntry::new("FISH", "It swims in the water.", "🐟"),
    WordEntry::new("BEAR", "A big furry animal.", "🐻"),
    WordEntry::new("DUCK", "It quacks and swims.", "🦆"),
    WordEntry::new("WORM", "A tiny underground creature.", "🪱"),
    WordEntry::new("GOAT", "A farm animal with horns.", "🐐"),
    WordEntry::new("DEER", "A gentle animal with antlers.", "🦌"),
    WordEntry::new("SHIP", "A boat that sails on water.", "🚢"),
    WordEntry::new("TREE", "A tall plant with leaves.", "🌳"),
    WordEntry::new("MILK", "A white drink from cows.", "🥛"),
    WordEntry::new("CAKE", "A sweet treat for birthdays.", "🎂"),
    WordEntry::new("BALL", "You can throw or kick it.", "⚽"),
    WordEntry::new("BOOK", "You read stories from it.", "📖"),
    WordEntry::new("DESK", "You sit at it to learn.", "🪑"),
    WordEntry::new("SOAP", "You clean your hands with it.", "🧼"),
    WordEntry::new("MOON", "It glows in the night sky.", "🌙"),
    WordEntry::new("WOLF", "A wild animal that howls.", "🐺"),
    WordEntry::new("SAND", "Tiny grains found at the beach.", "🏖️"),
    WordEntry::new("SNOW", "Cold white ice that falls from the sky.", "❄️"),
    WordEntry::new("LEAF", "A part of a tree that is green.", "🍃"),
    WordEntry::new("FIRE", "It is hot and bright.", "🔥"),
    WordEntry::new("CORN", "A yellow vegetable on a cob.", "🌽"),
    WordEntry::new("HAND", "You use it to hold things.", "🤚"),
    WordEntry::new("NOSE", "You smell with it.", "👃"),
    WordEntry::new("RAIN", "Water drops that fall from clouds.", "🌧️"),
    WordEntry::new("ROAD", "Cars drive on it.", "🛣️"),
    WordEntry::new("ROPE", "A long strong string.", "🪢"),
];

static HARD_WORDS: [WordEntry; 30] = [
    WordEntry::new("APPLE", "A red or green fruit.", "🍎"),
    WordEntry::new("HOUSE", "A place where families live.", "🏠"),
    WordEntry::new("SMILE", "What you do when you feel happy.", "😊"),
    WordEntry::new("TRAIN", "A long vehicle that runs on tracks.", "🚆"),
    WordEntry::new("PLANT", "It grows in soil with sun and water.", "🪴"),
    WordEntry::new("CHAIR", "You sit on it.", "🪑"),
    WordEntry::new("BREAD", "You eat it in sandwiches.", "🍞"),
    WordEntry::new("SHEEP", "A soft white farm animal.", "🐑"),
    WordEntry::new("WATER", "You drink it every day.", "💧"),
    WordEntry::new("LIGHT", "It brightens a room.", "💡"),
    WordEntry::new("HORSE", "A big animal you can ride.", "🐴"),
    WordEntry::new("CLOUD", "Fluffy shapes in the sky.", "☁️"),
    WordEntry::new("MOUSE", "A tiny animal or a computer tool.", "🐭"),
    WordEntry::new("BRUSH", "You use it to clean or paint.", "🪥"),
    WordEntry::new("HEART", "It beats inside your body.", "❤️"),
    WordEntry::new("SNAKE", "A long slithering reptile.", "🐍"),
    WordEntry::new("SHIRT", "You wear it on your body.", "👕"),
    WordEntry::new("FRUIT", "Sweet foods that grow on trees or plants.", "🍇"),
    WordEntry::new("BLOOM", "When a flower opens.", "🌸"),
    WordEntry::new("SPOON", "You eat soup with it.", "🥄"),
    WordEntry::new("BRICK", "Used to build strong walls.", "🧱"),
    WordEntry::new("PLANE", "It flies in the sky.", "✈️"),
    WordEntry::new("EARTH", "The planet we live on.", "🌍"),
    WordEntry::new("BUNNY", "A rabbit with long ears.", "🐰"),
    WordEntry::new("CROWN", "A king or queen wears it.", "👑"),
    WordEntry::new("SWEET", "Another word for candy or sugar.", "🍬"),
    WordEntry::new("TIGER", "A big cat with stripes.", "🐯"),
    WordEntry::new("MAGIC", "Something amazing and mysterious.", "✨"),
    WordEntry::new("PIZZA", "A yummy food with cheese and sauce.", "🍕"),
    WordEntry::new("GRASS", "Green blades that grow on the ground.", "🌱"),
];

static SPELLING_TIERS: [&[WordEntry]; 3] = [&EASY_WORDS, &MEDIUM_WORDS, &HARD_WORDS];

static READING_TIERS: [&[&str]; 3] = [
    &["CAT", "DOG", "SUN", "CAR", "BUS", "FOX", "PIG", "ANT", "BEE", "BED"],
    &["FROG", "BIRD", "LION", "FISH", "MOON", "SHIP", "TREE", "CAKE", "BALL", "ROAD"],
    &["APPLE", "TRAIN", "SMILE", "HOUSE", "PLANT", "SHEEP", "HORSE", "CLOUD", "HEART", "TIGER"],
];

/// Words for the spelling game at this difficulty, all `difficulty.word_length()` letters long.
pub fn spelling_pool(difficulty: Difficulty) -> &'static [WordEntry] {
    SPELLING_TIERS[difficulty.tier_index()]
}

/// The shorter list used by reading practice.
pub fn reading_pool(difficulty: Difficulty) -> impl Iterator<Item = &'static WordEntry> {
    READING_TIERS[difficulty.tier_index()]
        .iter()
        .filter_map(|word| lookup_word(word))
}

pub fn lookup_word(word: &str) -> Option<&'static WordEntry> {
    SPELLING_TIERS
        .iter()
        .flat_map(|tier| tier.iter())
        .find(|entry| entry.word.eq_ignore_ascii_case(word))
}

pub fn emoji_for(word: &str) -> &'static str {
    lookup_word(word).map_or(UNKNOWN_EMOJI, |entry| entry.emoji)
}

/// Uniform pick from `pool`, `None` when the pool is empty.
pub fn choose_word<'a, R: RandomSource + ?Sized>(
    pool: &'a [WordEntry],
    rng: &mut R,
) -> Option<&'a WordEntry> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.next_below(pool.len()))
}
