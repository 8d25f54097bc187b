use crate::knowledge::{normalize_key, title_case};

/// A style archetype: the sensibility a person dresses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleArchetype {
    pub name: &'static str,
    pub description: &'static str,
    pub signature_pieces: &'static [&'static str],
    pub color_approach: &'static str,
    pub fit_default: &'static str,
    pub occasions_natural_fit: &'static [&'static str],
    pub upgrade_moves: &'static [&'static str],
    pub pitfalls: &'static [&'static str],
    pub celebrity_reference: &'static str,
    pub grooming_alignment: &'static str,
}

const ARCHETYPES: &[StyleArchetype] = &[
    StyleArchetype {
        name: "classic",
        description: "Timeless, conservative and precise. Quality over trend, fit over flash.",
        signature_pieces: &[
            "Well-tailored suit in navy, charcoal or mid-grey",
            "Crisp oxford shirt",
            "Bandhgala suit for Indian formal occasions",
            "Slim-cut dark chinos",
            "Polished leather Oxford or Derby",
            "Simple leather watch with a classic case",
            "Silk pocket square in white or a muted tone",
        ],
        color_approach: "Muted and restrained: navy, charcoal, camel, cream, white. No more than \
            two or three colours in an outfit, with minimal classic patterns such as a fine stripe \
            or fine check.",
        fit_default: "slim to tailored",
        occasions_natural_fit: &[
            "western_business_formal",
            "western_business_casual",
            "indian_formal",
            "smart_casual",
        ],
        upgrade_moves: &[
            "Invest in one made-to-measure suit, fit is where classic wins",
            "A tan or cognac leather watch strap elevates without shouting",
            "Move from polyester to wool or wool-blend suiting",
            "Add a muted silk pocket square rather than a printed one",
            "Upgrade shoe quality before any other piece",
        ],
        pitfalls: &[
            "Classic pieces in a bad fit defeat the entire purpose",
            "Overdoing formality for the occasion until it looks like costume",
            "Neglecting grooming, neat hair and clean shoes are non-negotiable here",
            "Playing it so safe it becomes boring, one considered accent lifts it",
        ],
        celebrity_reference: "Rahul Dravid off duty: precise, understated, confident.",
        grooming_alignment: "Clean shave or very short, well-kept stubble. A classic short cut \
            such as a taper, side part or neat crop. Grooming must match the precision of the clothes.",
    },
    StyleArchetype {
        name: "streetwear",
        description: "Culture-led, expressive and brand-aware, drawing on music, sport and youth subculture.",
        signature_pieces: &[
            "Graphic tee with a quality print",
            "Cargo trousers or utility pants",
            "Clean, well-maintained sneakers",
            "Oversized hoodie or tech fleece",
            "Statement outerwear such as a bomber",
            "Caps, chains and a crossbody bag",
        ],
        color_approach: "Bold colour blocking or careful monochrome. Neutrals as the base with \
            one colour accent worn deliberately.",
        fit_default: "relaxed to oversized",
        occasions_natural_fit: &["western_streetwear", "casual", "travel", "party"],
        upgrade_moves: &[
            "Sneaker condition is non-negotiable",
            "Move from printed logos to clean, design-led pieces",
            "Respect proportion: an oversized top wants a slim or tapered base",
            "One statement piece per outfit",
            "Buy one quality sneaker rather than five mediocre pairs",
        ],
        pitfalls: &[
            "Too many statement pieces at once, the eye has nowhere to rest",
            "Ignoring fit entirely, relaxed is intentional and sloppy is not",
            "Dirty or scuffed sneakers",
            "Heavy graphics stacked on heavy graphics",
            "Layering without managing the heat",
        ],
        celebrity_reference: "Ranveer Singh off duty: fearless with colour and proportion, always considered.",
        grooming_alignment: "Grooming is part of the look. A fade, textured crop or defined shape, \
            with a short precise beard or a clean shave.",
    },
    StyleArchetype {
        name: "ethnic_traditional",
        description: "Rooted in Indian craft, prioritising fabric quality, artisan technique and \
            occasion appropriateness.",
        signature_pieces: &[
            "Chanderi or silk-cotton kurta",
            "Raw silk or brocade sherwani for weddings",
            "Churidar or straight-cut salwar",
            "Mojaris, juttis or kolhapuris",
            "Bandhgala jacket as smart ethnic formal",
            "Block print or handloom kurta for casual ethnic",
            "Pagdi or safa for wedding occasions",
        ],
        color_approach: "Rich jewel tones for formal wear such as emerald, burgundy, sapphire and \
            deep gold. Earthy handwoven tones for casual wear. Avoid Western pastels and neons in \
            traditional pieces.",
        fit_default: "regular to relaxed",
        occasions_natural_fit: &[
            "indian_formal",
            "indian_casual",
            "wedding_guest_indian",
            "festival",
            "ethnic_fusion",
        ],
        upgrade_moves: &[
            "Fabric is the biggest upgrade: move from polyester to cotton, chanderi or silk-blend",
            "One quality pair of mojaris or juttis transforms any kurta",
            "Learn which collar suits the face shape",
            "Get the kurta length right for height and body shape",
            "One quality piece of Indian jewellery or a classic watch",
        ],
        pitfalls: &[
            "Mismatched fabric weights within one outfit",
            "Ignoring kurta length",
            "Wrong footwear language, such as oxfords with a sherwani",
            "A cotton casual kurta at a formal occasion",
            "Over-embellishment, more embroidery is not more formal",
        ],
        celebrity_reference: "Virat Kohli at formal events: understated, well fitted, fabric first.",
        grooming_alignment: "A clean, maintained beard or a clean shave. Stubble should look \
            defined. Hair well set, with classic cuts over very modern ones for formal occasions.",
    },
    StyleArchetype {
        name: "smart_casual",
        description: "The most versatile archetype, polished enough for work and relaxed enough to feel human.",
        signature_pieces: &[
            "Clean chinos in olive, navy, stone or tan",
            "Oxford shirt, solid or fine check",
            "Leather or suede loafers",
            "Structured polo or quality jersey",
            "Slim dark jeans without distressing",
            "Chelsea boots",
            "Unstructured linen or cotton blazer",
        ],
        color_approach: "Tonal and muted but never dull. Two complementary colours such as navy \
            and white or olive and beige, accented with one muted tone.",
        fit_default: "slim to regular",
        occasions_natural_fit: &[
            "smart_casual",
            "western_business_casual",
            "indian_casual",
            "ethnic_fusion",
            "travel",
        ],
        upgrade_moves: &[
            "Move from generic brands to quality basics",
            "Introduce one interesting texture per outfit",
            "Two pairs of perfectly fitted chinos form the backbone",
            "A leather watch strap instead of rubber raises the formality dial",
            "Spend more on shoes, they anchor the look",
        ],
        pitfalls: &[
            "Stacking casual signals, denim with a hoodie and trainers is not smart casual",
            "Ignoring shoe quality",
            "Using smart casual as an excuse for poor fit",
            "Over-ironed, stiff pieces",
        ],
        celebrity_reference: "MS Dhoni at the airport: relaxed, quality fabrics, no unnecessary logos.",
        grooming_alignment: "Tidy and maintained rather than formal. A medium beard works if it is \
            well shaped. Hair should look intentional.",
    },
    StyleArchetype {
        name: "avant_garde",
        description: "Experimental, design-led and convention-defying. Wears ideas as much as garments.",
        signature_pieces: &[
            "Deconstructed or asymmetric silhouettes",
            "Unexpected colour combinations",
            "Exaggerated proportions",
            "Statement outerwear as the centrepiece",
            "Raw-edged or washed textures",
            "Dhoti pants with a structured jacket",
        ],
        color_approach: "Bold and intentional: all-black monochrome, unexpected complementary \
            pairs or deliberate tonal clashing. Colour is always a decision.",
        fit_default: "oversized to experimental",
        occasions_natural_fit: &["party", "creative_professional", "fashion_events", "travel"],
        upgrade_moves: &[
            "Ground experimental pieces with one anchor such as clean shoes or a simple base",
            "Understand proportion before breaking it",
            "Let one statement piece lead the conversation",
            "Invest in construction quality",
        ],
        pitfalls: &[
            "Looking chaotic rather than considered",
            "Dressing this way for the wrong occasion",
            "Sacrificing function at the wrong moment",
            "Accidental grooming, which reads as neglect next to deliberate clothes",
        ],
        celebrity_reference: "Ranveer Singh in award season: deliberate provocation with a point of view.",
        grooming_alignment: "Grooming is part of the statement. A styled beard or bold cut \
            reinforces it, or a completely clean look as contrast.",
    },
    StyleArchetype {
        name: "athletic",
        description: "Function-first and performance-aware, athleisure done with intention.",
        signature_pieces: &[
            "Tailored performance joggers",
            "Clean technical runners",
            "Quality jersey or fleece in neutral tones",
            "Structured athletic jacket",
            "Quarter-zip technical top",
            "Clean watch and a no-logo cap",
        ],
        color_approach: "Tonal neutrals such as black, grey, white and navy, with one clean colour \
            accent in the shoe or outer layer.",
        fit_default: "regular to slim",
        occasions_natural_fit: &["gym", "travel", "casual", "western_streetwear"],
        upgrade_moves: &[
            "Move from sports brands to performance-lifestyle pieces",
            "Tailored track trousers instead of baggy gym shorts",
            "Keep shoes clean every time",
            "A quality technical jacket for the gym-to-street transition",
        ],
        pitfalls: &[
            "Gym wear in non-gym settings without elevation",
            "Logos everywhere at once",
            "Dirty shoes",
            "Dressing athletic when the occasion calls for more formality",
        ],
        celebrity_reference: "David Beckham in sportswear: elevated basics with excellent fit.",
        grooming_alignment: "Short, maintained cut such as a fade or crop. Beard short and defined, \
            or a clean shave.",
    },
    StyleArchetype {
        name: "eclectic",
        description: "Genre-fluid and culturally layered, mixing Indian and Western, vintage and \
            contemporary with deliberate confidence.",
        signature_pieces: &[
            "Kurta over slim Western trousers",
            "Ethnic print shirt with tailored chinos",
            "Bandhgala jacket over a shirt and denim",
            "A vintage hero piece in an otherwise modern look",
            "A mix of Indian and Western accessories",
        ],
        color_approach: "Bold but cohesive. Ethnic colours paired with Western neutrals keep the \
            tonal story readable across the mix.",
        fit_default: "regular, varied by piece",
        occasions_natural_fit: &["ethnic_fusion", "smart_casual", "party", "festival"],
        upgrade_moves: &[
            "Anchor each outfit with one neutral piece",
            "Keep a clear tonal story across different styles",
            "Commit the footwear to one language, Indian or Western",
            "Three considered pieces rather than six",
        ],
        pitfalls: &[
            "Mixing styles without a coherent story",
            "Three statement pieces at once",
            "An ethnic top with sportswear bottoms",
            "Shoes that do not commit to one register",
        ],
        celebrity_reference: "Saif Ali Khan off duty: easy fusion that looks effortless.",
        grooming_alignment: "Medium length, well-maintained styling. A distinctive hair or beard \
            choice works as long as it is maintained.",
    },
];

pub fn all() -> &'static [StyleArchetype] {
    ARCHETYPES
}

pub fn get(name: &str) -> Option<&'static StyleArchetype> {
    let key = normalize_key(name);
    ARCHETYPES.iter().find(|a| a.name == key)
}

/// Prompt block for an archetype. Unknown or empty names give "".
pub fn context_string(name: &str) -> String {
    let Some(arch) = get(name) else {
        return String::new();
    };
    let bullets = |items: &[&str], n: usize| {
        items
            .iter()
            .take(n)
            .map(|item| format!("    · {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Archetype: {}\n  {}\n\n  Color approach : {}\n  Fit default    : {}\n\n  Upgrade moves:\n{}\n\n  Watch out for:\n{}\n\n  Reference     : {}\n  Grooming      : {}",
        title_case(arch.name),
        arch.description,
        arch.color_approach,
        arch.fit_default,
        bullets(arch.upgrade_moves, 4),
        bullets(arch.pitfalls, 3),
        arch.celebrity_reference,
        arch.grooming_alignment
    )
}
