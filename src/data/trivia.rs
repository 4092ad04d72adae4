//! "Did you know?" facts and pro-tip buckets for the score screen

pub const FACTS: &[&str] = &[
    "Brazil has been the world's largest coffee producer for over 150 years.",
    "Russia spans eleven time zones, more than any other country.",
    "Vietnam went from a minor grower to the second largest coffee producer in two decades.",
    "France welcomes more international tourists than any other country.",
    "Singapore is one of the few remaining city-states in the world.",
    "Canada has the longest coastline of any country.",
    "Qatar holds some of the largest natural gas reserves on Earth.",
    "Ethiopia is widely considered the birthplace of coffee.",
    "Argentina won the FIFA World Cup in 1978, 1986 and 2022.",
    "India overtook China as the most populous country in 2023.",
    "Norway exports almost all of the gas it produces, mostly by pipeline to Europe.",
    "Indonesia is made up of more than 17,000 islands.",
];

/// Each bucket is a theme; the score screen shows one tip from six buckets
pub const TIP_BUCKETS: &[&[&str]] = &[
    &[
        "Save Coffee for a tropical grower like Brazil, Vietnam or Colombia.",
        "Most European countries sit far down the coffee table.",
    ],
    &[
        "Population rewards giants: India, China, the US and Indonesia.",
        "Small wealthy states rarely rank well on Population.",
    ],
    &[
        "Size favours Russia, Canada, the US, China and Brazil.",
        "City-states and small islands are wasted on Size.",
    ],
    &[
        "Crime ranks safety: 1 is the safest country.",
        "Nordic countries and Singapore are usually safe picks for Crime.",
    ],
    &[
        "GDP is about the total economy, not wealth per person.",
        "The US, China and Japan top the GDP table.",
    ],
    &[
        "France, Spain and the US lead international tourism.",
        "Remote countries often rank poorly on Tourism.",
    ],
    &[
        "Gas rewards big producers: the US, Russia, Norway and Qatar.",
        "Don't waste Gas on a country without major fields.",
    ],
    &[
        "FIFA rankings favour South America and Western Europe.",
        "Argentina and France have been near the top of FIFA lately.",
    ],
    &[
        "Every category can only be used once, so plan ahead.",
        "Keep a flexible category like GDP for a tricky flag.",
    ],
    &[
        "Lower scores are better: each point is a ranking position.",
        "Under 100 points across eight rounds is elite play.",
    ],
];
