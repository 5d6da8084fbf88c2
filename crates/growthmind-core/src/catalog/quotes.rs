//! Motivational quote pool.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

static QUOTES: [Quote; 8] = [
    Quote { quote: "The view you adopt for yourself profoundly affects the way you lead your life.", author: "Carol Dweck" },
    Quote { quote: "Becoming is better than being.", author: "Carol Dweck" },
    Quote { quote: "No matter what your ability is, effort is what ignites that ability and turns it into accomplishment.", author: "Carol Dweck" },
    Quote { quote: "Challenge is the path to growth.", author: "Unknown" },
    Quote { quote: "Mistakes are proof that you are trying.", author: "Unknown" },
    Quote { quote: "Your brain is like a muscle - the more you use it, the stronger it gets.", author: "Unknown" },
    Quote { quote: "I haven't failed. I've just found 10,000 ways that won't work.", author: "Thomas Edison" },
    Quote { quote: "It's not that I'm so smart, it's just that I stay with problems longer.", author: "Albert Einstein" },
];

/// The fixed quote pool.
pub fn quotes() -> &'static [Quote] {
    &QUOTES
}

/// Pick a quote uniformly at random from the thread-local generator.
pub fn random_quote() -> &'static Quote {
    random_quote_with(&mut rand::thread_rng())
}

/// Pick a quote uniformly at random from `rng`.
pub fn random_quote_with<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    // Pool is a non-empty static.
    QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}
