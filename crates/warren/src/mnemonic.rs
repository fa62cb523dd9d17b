//! Fixed vocabulary backing [`Handle::mnemonic`](crate::Handle::mnemonic).
//!
//! The phrase for a handle is `WORDS[position % 256]-WORDS[generation % 256]`.
//! Indexing directly (rather than hashing) keeps the mapping injective for
//! positions and generations below 256, which covers realistic debugging
//! sessions; larger inputs wrap and may collide. The first word is a
//! function of the position alone, so a slot keeps its word across reuse
//! while the generation word changes.

/// Phrase vocabulary. 256 short, concrete, visually distinct words.
const WORDS: [&str; 256] = [
    "acorn", "agate", "alder", "almond", "amber", "anchor", "anvil", "apple",
    "apricot", "apron", "arbor", "arch", "arrow", "ash", "aspen", "aster",
    "atlas", "auburn", "autumn", "avocet", "axle", "azure", "badge", "bagel",
    "bamboo", "banjo", "barley", "basalt", "basil", "bay", "beacon", "beech",
    "beetle", "bell", "berry", "birch", "bison", "blaze", "bloom", "bluff",
    "bobbin", "bonfire", "boulder", "bramble", "brass", "breeze", "brick", "bridge",
    "brook", "bugle", "burrow", "cabin", "cactus", "cairn", "camel", "candle",
    "canoe", "canyon", "caper", "carob", "carrot", "cashew", "castle", "cedar",
    "cello", "chalk", "cherry", "chestnut", "cider", "cinder", "citron", "clay",
    "cliff", "clover", "cobalt", "cocoa", "comet", "compass", "copper", "coral",
    "cork", "cotton", "cove", "crane", "crater", "creek", "cricket", "crocus",
    "crystal", "cumin", "currant", "cypress", "daisy", "dapple", "dawn", "delta",
    "denim", "dew", "dill", "dome", "drift", "drum", "dune", "dusk",
    "eagle", "ebony", "echo", "eddy", "elder", "elm", "ember", "ermine",
    "fable", "falcon", "fennel", "fern", "ferry", "fig", "finch", "fjord",
    "flint", "flute", "foam", "forge", "fossil", "fox", "frost", "furrow",
    "gale", "garnet", "gazebo", "geyser", "ginger", "glacier", "glade", "glen",
    "goose", "gorge", "granite", "grape", "grove", "gull", "gust", "harbor",
    "hawk", "hazel", "heather", "hedge", "heron", "hickory", "hollow", "honey",
    "hoof", "horizon", "husk", "ibis", "icicle", "indigo", "inlet", "iris",
    "iron", "island", "ivory", "ivy", "jade", "jasmine", "jasper", "jetty",
    "juniper", "kelp", "kestrel", "kiln", "kite", "knoll", "lagoon", "lantern",
    "larch", "lark", "laurel", "lava", "lemon", "lichen", "lilac", "lily",
    "linen", "loam", "locust", "lotus", "lynx", "magma", "magnet", "mallow",
    "mango", "maple", "marble", "marsh", "meadow", "mesa", "mica", "mint",
    "moss", "moth", "mule", "myrtle", "nectar", "nettle", "newt", "nickel",
    "nimbus", "nutmeg", "oak", "oasis", "oat", "ochre", "olive", "onyx",
    "opal", "orchard", "orchid", "osprey", "otter", "owl", "oxbow", "pebble",
    "pecan", "pelican", "peony", "pepper", "perch", "pewter", "pine", "plume",
    "pond", "poplar", "poppy", "prairie", "quail", "quarry", "quartz", "quill",
    "quince", "raven", "reed", "ridge", "river", "robin", "rowan", "ruby",
    "rye", "saffron", "sage", "salmon", "satin", "sedge", "shale", "shore",
];

/// Derive the mnemonic phrase for a `(position, generation)` pair.
///
/// Pure: the same input always yields the same phrase.
pub(crate) fn phrase(position: usize, generation: u64) -> String {
    let first = WORDS[position % WORDS.len()];
    let second = WORDS[(generation % WORDS.len() as u64) as usize];
    format!("{first}-{second}")
}
